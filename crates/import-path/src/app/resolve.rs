//! Resolves a relative path taken from editor text back to a real file.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::scope::strip_quotes;
use crate::domain::settings::PluginSettings;
use crate::infra::file_probe::FileProbe;

/// Why a relative path could not be turned into a file.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// Nothing was left after removing quotes.
    #[error("Empty path")]
    EmptyPath,
    /// Neither the literal path nor any extension variant is a file.
    #[error("Can't open file {}", .path.display())]
    NotFound { path: PathBuf },
}

/// Resolves `editor_text` against `current_dir`.
///
/// Quotes are stripped first. The joined path is returned when it is a
/// regular file; otherwise, with extension hiding enabled, each configured
/// extension is appended in order and the first existing file wins.
///
/// # Errors
/// Returns [`ResolveError::EmptyPath`] without touching the filesystem when
/// the text is empty after stripping quotes, and
/// [`ResolveError::NotFound`] carrying the joined path otherwise.
pub fn resolve_path(
    editor_text: &str,
    current_dir: &Path,
    settings: &PluginSettings,
    probe: &dyn FileProbe,
) -> Result<PathBuf, ResolveError> {
    let relative_path = strip_quotes(editor_text);
    if relative_path.is_empty() {
        return Err(ResolveError::EmptyPath);
    }

    let path = current_dir.join(relative_path);
    if probe.is_file(&path) {
        return Ok(path);
    }

    if settings.hide_extensions() {
        let found = settings
            .extensions()
            .iter()
            .map(|extension| with_extension_appended(&path, extension))
            .find(|candidate| probe.is_file(candidate));
        if let Some(found) = found {
            return Ok(found);
        }
    }

    Err(ResolveError::NotFound { path })
}

/// Appends `extension` verbatim, keeping any dots already in the name.
fn with_extension_appended(path: &Path, extension: &str) -> PathBuf {
    let mut text = OsString::from(path.as_os_str());
    text.push(extension);

    PathBuf::from(text)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use mockall::predicate::eq;
    use tempfile::TempDir;

    use super::*;
    use crate::domain::settings::SettingsFile;
    use crate::infra::file_probe::{MockFileProbe, RealFileProbe};

    fn settings_with(hide_extensions: bool, extensions: &[&str]) -> PluginSettings {
        SettingsFile {
            hide_extensions,
            extensions: extensions.iter().map(ToString::to_string).collect(),
            ..SettingsFile::default()
        }
        .compile()
        .expect("test expectation should hold")
    }

    #[test]
    fn test_resolves_existing_literal_path() {
        // Arrange
        let temp_dir = TempDir::new().expect("test expectation should hold");
        fs::write(temp_dir.path().join("styles.css"), "").expect("test expectation should hold");

        // Act
        let resolved = resolve_path(
            "'./styles.css'",
            temp_dir.path(),
            &PluginSettings::defaults().expect("test expectation should hold"),
            &RealFileProbe,
        );

        // Assert
        assert_eq!(resolved, Ok(temp_dir.path().join("./styles.css")));
    }

    #[test]
    fn test_probes_extensions_in_configured_order() {
        // Arrange
        let temp_dir = TempDir::new().expect("test expectation should hold");
        let src = temp_dir.path().join("src");
        fs::create_dir_all(&src).expect("test expectation should hold");
        fs::write(src.join("utils.tsx"), "").expect("test expectation should hold");

        // Act
        let resolved = resolve_path(
            "\"./utils\"",
            &src,
            &settings_with(true, &[".ts", ".tsx"]),
            &RealFileProbe,
        );

        // Assert
        assert_eq!(resolved, Ok(src.join("./utils.tsx")));
    }

    #[test]
    fn test_first_matching_extension_wins() {
        // Arrange
        let mut probe = MockFileProbe::new();
        probe
            .expect_is_file()
            .with(eq(PathBuf::from("/proj/src/./utils")))
            .times(1)
            .return_const(false);
        probe
            .expect_is_file()
            .with(eq(PathBuf::from("/proj/src/./utils.js")))
            .times(1)
            .return_const(true);

        // Act
        let resolved = resolve_path(
            "./utils",
            Path::new("/proj/src"),
            &settings_with(true, &[".js", ".ts"]),
            &probe,
        );

        // Assert
        assert_eq!(resolved, Ok(PathBuf::from("/proj/src/./utils.js")));
    }

    #[test]
    fn test_empty_text_does_not_touch_filesystem() {
        // Arrange
        let mut probe = MockFileProbe::new();
        probe.expect_is_file().never();

        // Act
        let resolved = resolve_path(
            "''",
            Path::new("/proj/src"),
            &PluginSettings::defaults().expect("test expectation should hold"),
            &probe,
        );

        // Assert
        assert_eq!(resolved, Err(ResolveError::EmptyPath));
    }

    #[test]
    fn test_extensions_not_probed_when_hiding_disabled() {
        // Arrange
        let mut probe = MockFileProbe::new();
        probe.expect_is_file().times(1).return_const(false);

        // Act
        let resolved = resolve_path(
            "./utils",
            Path::new("/proj/src"),
            &settings_with(false, &[".ts"]),
            &probe,
        );

        // Assert
        assert_eq!(
            resolved,
            Err(ResolveError::NotFound {
                path: PathBuf::from("/proj/src/./utils"),
            })
        );
    }

    #[test]
    fn test_not_found_message() {
        // Arrange
        let error = ResolveError::NotFound {
            path: PathBuf::from("/proj/src/missing"),
        };

        // Act & Assert
        assert_eq!(error.to_string(), "Can't open file /proj/src/missing");
    }
}
