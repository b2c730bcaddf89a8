use std::path::{Path, PathBuf};

use crate::domain::display::DisplayItem;

/// Zero-based position in the edited document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    pub line: usize,
    pub column: usize,
}

/// Editor-side collaborator the commands drive.
///
/// The commands never talk to a UI directly; an editor integration or the
/// bundled terminal host implements this boundary, and tests inject
/// `MockEditorHost`.
#[cfg_attr(test, mockall::automock)]
pub trait EditorHost {
    /// Returns the file being edited, or `None` for an unsaved buffer.
    fn current_file(&self) -> Option<PathBuf>;

    /// Returns the primary cursor position.
    fn cursor(&self) -> Cursor;

    /// Returns the quoted string region, quotes included, enclosing
    /// `cursor`, or `None` when the cursor is not inside one.
    fn quoted_text_at(&self, cursor: Cursor) -> Option<String>;

    /// Shows `items` and returns the `value` of the picked one, or `None`
    /// when the user cancels.
    fn present_choices(&mut self, items: &[DisplayItem]) -> Option<String>;

    /// Inserts `text` at `cursor`.
    fn insert_text(&mut self, cursor: Cursor, text: &str);

    /// Opens `path` in the editor.
    fn open_file(&mut self, path: &Path);

    /// Shows a transient status message.
    fn show_status(&mut self, message: &str);
}
