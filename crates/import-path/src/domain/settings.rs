//! Plugin configuration: the serde-facing file shape and the compiled,
//! read-only settings consumed by the listing and resolving code.

use regex::Regex;
use serde::Deserialize;

use crate::domain::pattern::ExcludePatterns;

/// Extensions tried in order when resolving and hidden when formatting.
pub const DEFAULT_EXTENSIONS: [&str; 4] = [".js", ".jsx", ".ts", ".tsx"];

/// Folder exclude patterns used when none are configured.
pub const DEFAULT_FOLDER_EXCLUDE_PATTERNS: [&str; 4] = [".svn", ".git", ".hg", "CVS"];

/// File exclude patterns used when none are configured.
pub const DEFAULT_FILE_EXCLUDE_PATTERNS: [&str; 9] = [
    "*.pyc",
    "*.pyo",
    "*.exe",
    "*.dll",
    "*.obj",
    "*.dylib",
    ".DS_Store",
    "*.class",
    "*.sublime-workspace",
];

/// Settings as they appear on disk.
///
/// Every field is optional; unknown keys are ignored so a full editor
/// preferences file can be read directly.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SettingsFile {
    pub hide_extensions: bool,
    pub extensions: Vec<String>,
    pub use_relative_prefix: bool,
    pub folder_exclude_patterns: Vec<String>,
    pub file_exclude_patterns: Vec<String>,
}

impl Default for SettingsFile {
    fn default() -> Self {
        Self {
            hide_extensions: true,
            extensions: to_owned_strings(&DEFAULT_EXTENSIONS),
            use_relative_prefix: true,
            folder_exclude_patterns: to_owned_strings(&DEFAULT_FOLDER_EXCLUDE_PATTERNS),
            file_exclude_patterns: to_owned_strings(&DEFAULT_FILE_EXCLUDE_PATTERNS),
        }
    }
}

impl SettingsFile {
    /// Compiles patterns and the extension regex into [`PluginSettings`].
    ///
    /// # Errors
    /// Returns an error when a pattern or the extension regex fails to
    /// compile.
    pub fn compile(self) -> Result<PluginSettings, regex::Error> {
        let folder_excludes = ExcludePatterns::new(&self.folder_exclude_patterns)?;
        let file_excludes = ExcludePatterns::new(&self.file_exclude_patterns)?;
        let extensions_regex = extensions_regex(&self.extensions)?;

        Ok(PluginSettings {
            hide_extensions: self.hide_extensions,
            extensions: self.extensions,
            use_relative_prefix: self.use_relative_prefix,
            folder_excludes,
            file_excludes,
            extensions_regex,
        })
    }
}

/// Process-wide configuration, immutable once built.
#[derive(Clone, Debug)]
pub struct PluginSettings {
    hide_extensions: bool,
    extensions: Vec<String>,
    use_relative_prefix: bool,
    folder_excludes: ExcludePatterns,
    file_excludes: ExcludePatterns,
    extensions_regex: Option<Regex>,
}

impl PluginSettings {
    /// Compiles the built-in defaults, as used when no settings file exists.
    ///
    /// # Errors
    /// Returns an error when a default pattern fails to compile.
    pub fn defaults() -> Result<Self, regex::Error> {
        SettingsFile::default().compile()
    }

    /// Whether known extensions are stripped from inserted values and
    /// probed during resolution.
    pub fn hide_extensions(&self) -> bool {
        self.hide_extensions
    }

    /// Configured extensions in resolution order.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Whether level-zero values start with `./`.
    pub fn use_relative_prefix(&self) -> bool {
        self.use_relative_prefix
    }

    /// Patterns that prune directories from the listing.
    pub fn folder_excludes(&self) -> &ExcludePatterns {
        &self.folder_excludes
    }

    /// Patterns that drop individual files from the listing.
    pub fn file_excludes(&self) -> &ExcludePatterns {
        &self.file_excludes
    }

    /// Removes one configured extension from the end of `relative_path`.
    pub fn strip_extension<'a>(&self, relative_path: &'a str) -> &'a str {
        let Some(regex) = &self.extensions_regex else {
            return relative_path;
        };

        match regex.find(relative_path) {
            Some(found) => &relative_path[..found.start()],
            None => relative_path,
        }
    }
}

/// Builds `(\.ext1|\.ext2|...)$`, or `None` with no extensions configured.
fn extensions_regex<S: AsRef<str>>(extensions: &[S]) -> Result<Option<Regex>, regex::Error> {
    if extensions.is_empty() {
        return Ok(None);
    }

    let alternation = extensions
        .iter()
        .map(|extension| regex::escape(extension.as_ref()))
        .collect::<Vec<_>>()
        .join("|");

    Regex::new(&format!("({alternation})$")).map(Some)
}

fn to_owned_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}
