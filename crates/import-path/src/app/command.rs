//! The two user-facing commands: insert an import path and open the file
//! an existing path string points at.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::app::host::EditorHost;
use crate::app::resolve::{ResolveError, resolve_path};
use crate::domain::candidate::PARENT_MARKER;
use crate::domain::display::{DisplayItem, format_candidate};
use crate::domain::navigation::NavigationState;
use crate::domain::settings::PluginSettings;
use crate::infra::dir_walk::list_candidates;
use crate::infra::file_probe::FileProbe;

/// Failures that stop a command before it reaches the user.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("The current buffer is not backed by a file")]
    NoCurrentFile,
    #[error("{} has no parent directory", .path.display())]
    NoParentDirectory { path: PathBuf },
}

/// Returns the directory containing `file`.
///
/// # Errors
/// Returns [`CommandError::NoParentDirectory`] when `file` is a filesystem
/// root.
pub fn parent_dir(file: &Path) -> Result<PathBuf, CommandError> {
    file.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| CommandError::NoParentDirectory {
            path: file.to_path_buf(),
        })
}

/// Lists and formats every candidate for `state`'s effective root.
///
/// The parent marker is always the first item.
pub fn list_display_items(state: &NavigationState, settings: &PluginSettings) -> Vec<DisplayItem> {
    let root_dir = state.effective_root();

    list_candidates(&root_dir, settings)
        .iter()
        .map(|candidate| format_candidate(candidate, &root_dir, state.parent_level(), settings))
        .collect()
}

/// Lets the user pick a path, moving up a level every time the parent
/// marker is chosen, and inserts the picked value at the cursor.
///
/// Returns the inserted value, or `None` when the user cancelled.
///
/// # Errors
/// Returns [`CommandError::NoCurrentFile`] when the host has no file to
/// anchor relative paths on.
pub fn insert_path(
    host: &mut dyn EditorHost,
    settings: &PluginSettings,
) -> Result<Option<String>, CommandError> {
    let mut state = NavigationState::new(current_dir(host)?);

    loop {
        let items = list_display_items(&state, settings);
        let Some(selected) = host.present_choices(&items) else {
            debug!("path selection cancelled");

            return Ok(None);
        };

        if selected == PARENT_MARKER {
            state = state.up();
            debug!(parent_level = state.parent_level(), "moved listing root up");
            continue;
        }

        let cursor = host.cursor();
        host.insert_text(cursor, &selected);
        info!(value = %selected, "inserted import path");

        return Ok(Some(selected));
    }
}

/// Opens the file referenced by the quoted path under the cursor.
///
/// Outside a quoted string, or with an empty string, this is a silent
/// no-op. When nothing matches, the host shows `Can't open file <path>`.
/// Returns the opened file, if any.
///
/// # Errors
/// Returns [`CommandError::NoCurrentFile`] when the host has no file to
/// resolve relative paths against.
pub fn open_by_path(
    host: &mut dyn EditorHost,
    settings: &PluginSettings,
    probe: &dyn FileProbe,
) -> Result<Option<PathBuf>, CommandError> {
    let current_dir = current_dir(host)?;
    let cursor = host.cursor();
    let Some(quoted_text) = host.quoted_text_at(cursor) else {
        debug!(?cursor, "cursor is not inside a quoted string");

        return Ok(None);
    };

    match resolve_path(&quoted_text, &current_dir, settings, probe) {
        Ok(path) => {
            info!(path = %path.display(), "opening file");
            host.open_file(&path);

            Ok(Some(path))
        }
        Err(ResolveError::EmptyPath) => Ok(None),
        Err(error @ ResolveError::NotFound { .. }) => {
            debug!(%error, "path did not resolve");
            host.show_status(&error.to_string());

            Ok(None)
        }
    }
}

fn current_dir(host: &dyn EditorHost) -> Result<PathBuf, CommandError> {
    let current_file = host.current_file().ok_or(CommandError::NoCurrentFile)?;

    parent_dir(&current_file)
}
