//! Listing root navigation above the current file's directory.

use std::path::{Component, MAIN_SEPARATOR_STR, Path, PathBuf};

/// How far the listing root has moved above the current file's directory.
///
/// Instances are immutable: moving up produces a new state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationState {
    current_dir: PathBuf,
    parent_level: usize,
}

impl NavigationState {
    /// Creates the initial state rooted at `current_dir`.
    pub fn new(current_dir: impl Into<PathBuf>) -> Self {
        Self {
            current_dir: current_dir.into(),
            parent_level: 0,
        }
    }

    /// Creates a state already moved `parent_level` levels up.
    pub fn with_parent_level(current_dir: impl Into<PathBuf>, parent_level: usize) -> Self {
        Self {
            current_dir: current_dir.into(),
            parent_level,
        }
    }

    /// Returns how many times the user moved to the upper directory.
    pub fn parent_level(&self) -> usize {
        self.parent_level
    }

    /// Returns a new state one level further up.
    #[must_use]
    pub fn up(&self) -> Self {
        Self {
            current_dir: self.current_dir.clone(),
            parent_level: self.parent_level + 1,
        }
    }

    /// Returns the directory the listing should start from.
    ///
    /// Strips `parent_level` trailing segments from `current_dir`, clamping
    /// to the filesystem root once every segment is gone.
    pub fn effective_root(&self) -> PathBuf {
        if self.parent_level == 0 {
            return self.current_dir.clone();
        }

        match self.current_dir.ancestors().nth(self.parent_level) {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => filesystem_root(&self.current_dir),
        }
    }
}

/// Returns the root of `path` (`/`, or the drive root with a prefix), or
/// the platform separator when `path` has no root at all.
fn filesystem_root(path: &Path) -> PathBuf {
    let root: PathBuf = path
        .components()
        .take_while(|component| matches!(component, Component::Prefix(_) | Component::RootDir))
        .collect();

    if root.as_os_str().is_empty() {
        PathBuf::from(MAIN_SEPARATOR_STR)
    } else {
        root
    }
}
