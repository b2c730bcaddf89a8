//! Directory walk that produces the raw listing candidates.

use std::fs;
use std::path::Path;

use ignore::{DirEntry, WalkBuilder};
use tracing::debug;

use crate::domain::candidate::{CandidatePath, with_trailing_separator};
use crate::domain::settings::PluginSettings;

/// Lists every directory and file below `root_dir` that survives the
/// configured exclude patterns, preceded by the parent-marker sentinel.
///
/// Excluded directories are pruned: the walk never descends into them, so
/// none of their descendants are listed. Entries that cannot be read are
/// skipped. A missing `root_dir` yields only the sentinel.
///
/// Entries come out depth-first with siblings sorted by file name, so two
/// walks over an unchanged tree return the same sequence.
pub fn list_candidates(root_dir: &Path, settings: &PluginSettings) -> Vec<CandidatePath> {
    let folder_excludes = settings.folder_excludes().clone();
    let walker = WalkBuilder::new(root_dir)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|first, second| first.cmp(second))
        .filter_entry(move |entry| {
            if entry.depth() == 0 || !is_directory(entry) {
                return true;
            }

            let folder = with_trailing_separator(entry.path());
            let included = folder_excludes.should_include_path(&folder);
            if !included {
                debug!(folder = %folder, "pruning excluded folder");
            }

            included
        })
        .build();

    let mut candidates = vec![CandidatePath::Parent];
    for result in walker {
        let entry = match result {
            Ok(entry) => entry,
            Err(error) => {
                debug!(%error, "skipping unreadable entry");
                continue;
            }
        };

        if entry.depth() == 0 {
            continue;
        }

        if is_directory(&entry) {
            candidates.push(CandidatePath::Directory(entry.into_path()));
        } else if should_include_file(entry.path(), settings) {
            candidates.push(CandidatePath::File(entry.into_path()));
        }
    }

    candidates
}

/// Checks a file against the folder patterns for its containing directory
/// and the file patterns for its own path.
fn should_include_file(path: &Path, settings: &PluginSettings) -> bool {
    let containing_dir = path
        .parent()
        .map(|parent| parent.to_string_lossy().into_owned())
        .unwrap_or_default();

    settings.folder_excludes().should_include_path(&containing_dir)
        && settings
            .file_excludes()
            .should_include_path(&path.to_string_lossy())
}

/// Classifies an entry as a directory, following symlinks for the check
/// only. Symlinked directories are listed but never descended into.
fn is_directory(entry: &DirEntry) -> bool {
    let Some(file_type) = entry.file_type() else {
        return false;
    };

    if file_type.is_symlink() {
        return fs::metadata(entry.path()).is_ok_and(|metadata| metadata.is_dir());
    }

    file_type.is_dir()
}
