use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// Title and value used for the "move to upper directory" entry.
pub const PARENT_MARKER: &str = "..";

/// One entry produced by the directory listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CandidatePath {
    /// Sentinel entry that moves the listing root up one level.
    Parent,
    /// Absolute path of a listed directory.
    Directory(PathBuf),
    /// Absolute path of a listed file.
    File(PathBuf),
}

/// Renders `path` with exactly one trailing platform separator.
pub(crate) fn with_trailing_separator(path: &Path) -> String {
    let mut text = path.to_string_lossy().into_owned();
    if !text.ends_with(MAIN_SEPARATOR) {
        text.push(MAIN_SEPARATOR);
    }

    text
}
