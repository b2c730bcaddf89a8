use std::path::Path;

/// Filesystem boundary used by path resolution.
///
/// Production uses [`RealFileProbe`], while tests can inject
/// `MockFileProbe` to count or forbid filesystem access.
#[cfg_attr(test, mockall::automock)]
pub trait FileProbe {
    /// Returns whether `path` exists and is a regular file.
    fn is_file(&self, path: &Path) -> bool;
}

/// [`FileProbe`] backed by `std::fs` metadata.
pub struct RealFileProbe;

impl FileProbe for RealFileProbe {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}
