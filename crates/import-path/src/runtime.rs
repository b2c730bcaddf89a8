//! Terminal stand-in for the editor host and the CLI entry points built on
//! top of it.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

use crate::app::command::{
    CommandError, insert_path, list_display_items, open_by_path, parent_dir,
};
use crate::app::host::{Cursor, EditorHost};
use crate::domain::display::DisplayItem;
use crate::domain::navigation::NavigationState;
use crate::domain::scope::quoted_scope_at;
use crate::domain::settings::PluginSettings;
use crate::infra::file_probe::RealFileProbe;
use crate::infra::settings_store::SettingsError;

/// Failures surfaced by the CLI entry points.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to encode listing: {0}")]
    Json(#[from] serde_json::Error),
}

/// [`EditorHost`] that reads selections from a line-based input and writes
/// results to an output stream, with prompts and status messages on a
/// separate stream.
pub struct TerminalHost<R, W, E> {
    current_file: Option<PathBuf>,
    cursor: Cursor,
    line_text: Option<String>,
    input: R,
    output: W,
    prompt: E,
}

impl<R: BufRead, W: Write, E: Write> TerminalHost<R, W, E> {
    /// Creates a host editing `current_file`, with no cursor line loaded.
    pub fn new(current_file: PathBuf, input: R, output: W, prompt: E) -> Self {
        Self {
            current_file: Some(current_file),
            cursor: Cursor::default(),
            line_text: None,
            input,
            output,
            prompt,
        }
    }

    /// Places the cursor at `cursor` on a line whose text is `line_text`.
    #[must_use]
    pub fn with_cursor(mut self, cursor: Cursor, line_text: String) -> Self {
        self.cursor = cursor;
        self.line_text = Some(line_text);
        self
    }

    fn write_prompt(&mut self, text: &str) {
        if let Err(error) = writeln!(self.prompt, "{text}") {
            warn!(%error, "failed to write prompt");
        }
    }

    fn write_output(&mut self, text: &str) {
        if let Err(error) = writeln!(self.output, "{text}") {
            warn!(%error, "failed to write output");
        }
    }

    /// Reads one selection index; `None` on EOF, empty input or read error.
    fn read_selection(&mut self, item_count: usize) -> Option<usize> {
        loop {
            if let Err(error) = write!(self.prompt, "Select [1-{item_count}]: ")
                .and_then(|()| self.prompt.flush())
            {
                warn!(%error, "failed to write prompt");
            }

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(error) => {
                    warn!(%error, "failed to read selection");

                    return None;
                }
            }

            let answer = line.trim();
            if answer.is_empty() {
                return None;
            }

            match answer.parse::<usize>() {
                Ok(index) if (1..=item_count).contains(&index) => return Some(index - 1),
                _ => self.write_prompt(&format!("Invalid selection: {answer}")),
            }
        }
    }
}

impl<R: BufRead, W: Write, E: Write> EditorHost for TerminalHost<R, W, E> {
    fn current_file(&self) -> Option<PathBuf> {
        self.current_file.clone()
    }

    fn cursor(&self) -> Cursor {
        self.cursor
    }

    fn quoted_text_at(&self, cursor: Cursor) -> Option<String> {
        let line_text = self.line_text.as_deref()?;

        quoted_scope_at(line_text, cursor.column).map(ToString::to_string)
    }

    fn present_choices(&mut self, items: &[DisplayItem]) -> Option<String> {
        if items.is_empty() {
            return None;
        }

        for (index, item) in items.iter().enumerate() {
            let line = if item.annotation.is_empty() {
                format!("{:>4}. {}", index + 1, item.title)
            } else {
                format!("{:>4}. {}  ({})", index + 1, item.title, item.annotation)
            };
            self.write_prompt(&line);
        }

        let index = self.read_selection(items.len())?;

        items.get(index).map(|item| item.value.clone())
    }

    fn insert_text(&mut self, _cursor: Cursor, text: &str) {
        self.write_output(text);
    }

    fn open_file(&mut self, path: &Path) {
        self.write_output(&path.display().to_string());
    }

    fn show_status(&mut self, message: &str) {
        self.write_prompt(message);
    }
}

/// Prints the listing for `file`'s directory moved `up` levels, one item
/// per line as `title<TAB>value<TAB>annotation`, or as JSON lines.
///
/// # Errors
/// Returns an error when `file` cannot be made absolute, has no parent
/// directory, or output fails.
pub fn run_list(
    file: &Path,
    up: usize,
    json: bool,
    settings: &PluginSettings,
    output: &mut dyn Write,
) -> Result<(), RunError> {
    let current_dir = current_dir_of(file)?;
    let state = NavigationState::with_parent_level(current_dir, up);

    for item in list_display_items(&state, settings) {
        if json {
            serde_json::to_writer(&mut *output, &item)?;
            writeln!(output)?;
        } else {
            writeln!(output, "{}\t{}\t{}", item.title, item.value, item.annotation)?;
        }
    }

    Ok(())
}

/// Runs the interactive insert-path command for `file`.
///
/// # Errors
/// Returns an error when `file` cannot be made absolute.
pub fn run_insert<R: BufRead, W: Write, E: Write>(
    file: &Path,
    settings: &PluginSettings,
    input: R,
    output: W,
    prompt: E,
) -> Result<(), RunError> {
    let mut host = TerminalHost::new(std::path::absolute(file)?, input, output, prompt);
    insert_path(&mut host, settings)?;

    Ok(())
}

/// Runs the open-by-path command for the cursor at 1-based `line` and
/// `column` of `file`.
///
/// A line that does not exist behaves like a cursor outside any string.
///
/// # Errors
/// Returns an error when `file` cannot be made absolute or read.
pub fn run_open<W: Write, E: Write>(
    file: &Path,
    line: usize,
    column: usize,
    settings: &PluginSettings,
    output: W,
    status: E,
) -> Result<(), RunError> {
    let file = std::path::absolute(file)?;
    let contents = fs::read_to_string(&file)?;
    let cursor = Cursor {
        line: line.saturating_sub(1),
        column: column.saturating_sub(1),
    };
    let line_text = contents.lines().nth(cursor.line).unwrap_or_default().to_string();

    let mut host =
        TerminalHost::new(file, io::empty(), output, status).with_cursor(cursor, line_text);
    open_by_path(&mut host, settings, &RealFileProbe)?;

    Ok(())
}

fn current_dir_of(file: &Path) -> Result<PathBuf, RunError> {
    let file = std::path::absolute(file)?;

    Ok(parent_dir(&file)?)
}
