//! Loads [`PluginSettings`] once at startup from a JSON settings file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::domain::settings::{PluginSettings, SettingsFile};

/// Directory under the platform config dir holding the settings file.
pub const SETTINGS_DIR: &str = "import-path";

/// File name of the settings file.
pub const SETTINGS_FILE: &str = "settings.json";

/// Failures while reading or compiling settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse settings file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid pattern in settings: {0}")]
    Pattern(#[from] regex::Error),
}

/// Returns the default settings path, `<config_dir>/import-path/settings.json`.
pub fn default_settings_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join(SETTINGS_DIR).join(SETTINGS_FILE);
    }

    PathBuf::from(SETTINGS_DIR).join(SETTINGS_FILE)
}

/// Loads settings from an explicitly named file.
///
/// # Errors
/// Returns an error when the file cannot be read, is not valid JSON, or
/// carries a pattern that fails to compile.
pub fn load_settings(path: &Path) -> Result<PluginSettings, SettingsError> {
    let contents = fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_settings(path, &contents)
}

/// Loads settings from `path`, falling back to defaults when the file does
/// not exist.
///
/// # Errors
/// Returns an error when an existing file cannot be read or parsed.
pub fn load_settings_or_default(path: &Path) -> Result<PluginSettings, SettingsError> {
    match fs::read_to_string(path) {
        Ok(contents) => parse_settings(path, &contents),
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "settings file not found, using defaults");

            Ok(PluginSettings::defaults()?)
        }
        Err(source) => Err(SettingsError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn parse_settings(path: &Path, contents: &str) -> Result<PluginSettings, SettingsError> {
    let file: SettingsFile =
        serde_json::from_str(contents).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(file.compile()?)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_load_settings_reads_all_fields() {
        // Arrange
        let temp_dir = TempDir::new().expect("test expectation should hold");
        let path = temp_dir.path().join(SETTINGS_FILE);
        fs::write(
            &path,
            r#"{
                "hide_extensions": false,
                "extensions": [".vue"],
                "use_relative_prefix": false,
                "folder_exclude_patterns": ["dist"],
                "file_exclude_patterns": ["*.map"]
            }"#,
        )
        .expect("test expectation should hold");

        // Act
        let settings = load_settings(&path).expect("test expectation should hold");

        // Assert
        assert!(!settings.hide_extensions());
        assert!(!settings.use_relative_prefix());
        assert_eq!(settings.extensions(), [".vue"]);
        assert!(!settings.folder_excludes().should_include_path("/p/dist/"));
        assert!(!settings.file_excludes().should_include_path("/p/app.js.map"));
    }

    #[test]
    fn test_load_settings_missing_file_is_error() {
        // Arrange
        let temp_dir = TempDir::new().expect("test expectation should hold");
        let path = temp_dir.path().join("nope.json");

        // Act
        let result = load_settings(&path);

        // Assert
        assert!(matches!(result, Err(SettingsError::Read { .. })));
    }

    #[test]
    fn test_load_settings_or_default_missing_file_uses_defaults() {
        // Arrange
        let temp_dir = TempDir::new().expect("test expectation should hold");
        let path = temp_dir.path().join("nope.json");

        // Act
        let settings = load_settings_or_default(&path).expect("test expectation should hold");

        // Assert
        assert!(settings.hide_extensions());
        assert_eq!(settings.extensions(), [".js", ".jsx", ".ts", ".tsx"]);
    }

    #[test]
    fn test_load_settings_invalid_json_is_parse_error() {
        // Arrange
        let temp_dir = TempDir::new().expect("test expectation should hold");
        let path = temp_dir.path().join(SETTINGS_FILE);
        fs::write(&path, "{ not json").expect("test expectation should hold");

        // Act
        let result = load_settings_or_default(&path);

        // Assert
        let error = result.expect_err("test expectation should hold");
        assert!(matches!(error, SettingsError::Parse { .. }));
        assert!(error.to_string().starts_with("Failed to parse settings file"));
    }

    #[test]
    fn test_default_settings_path_ends_with_settings_file() {
        // Arrange & Act
        let path = default_settings_path();

        // Assert
        assert!(path.ends_with(Path::new(SETTINGS_DIR).join(SETTINGS_FILE)));
    }
}
