//! Turns listing candidates into the title/value/annotation triples shown
//! in the selection list.

use std::path::{Component, Path};

use serde::Serialize;

use crate::domain::candidate::{CandidatePath, PARENT_MARKER};
use crate::domain::settings::PluginSettings;

/// Annotation shown next to the parent-marker entry.
pub const PARENT_ANNOTATION: &str = "Move To Upper Dir";

/// Annotation shown next to directory entries.
pub const DIRECTORY_ANNOTATION: &str = "Directory";

/// One row of the selection list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DisplayItem {
    /// Path relative to the listing root, always with `/` separators.
    pub title: String,
    /// Text inserted into the document when the row is picked.
    pub value: String,
    /// Short hint shown beside the title.
    pub annotation: String,
}

impl DisplayItem {
    /// Returns the row used for the parent-marker sentinel.
    pub fn parent_marker() -> Self {
        Self {
            title: PARENT_MARKER.to_string(),
            value: PARENT_MARKER.to_string(),
            annotation: PARENT_ANNOTATION.to_string(),
        }
    }
}

/// Formats `candidate` relative to `root_dir` for a listing that is
/// `parent_level` levels above the current file's directory.
///
/// The title keeps the real file name; only the value gets the relative
/// prefix and, when enabled, loses its extension.
pub fn format_candidate(
    candidate: &CandidatePath,
    root_dir: &Path,
    parent_level: usize,
    settings: &PluginSettings,
) -> DisplayItem {
    let (path, is_directory) = match candidate {
        CandidatePath::Parent => return DisplayItem::parent_marker(),
        CandidatePath::Directory(path) => (path, true),
        CandidatePath::File(path) => (path, false),
    };

    let mut title = relative_title(root_dir, path);
    if is_directory {
        title.push('/');
    }

    let suffix = if settings.hide_extensions() {
        settings.strip_extension(&title)
    } else {
        title.as_str()
    };
    let value = format!(
        "{}{suffix}",
        relative_prefix(parent_level, settings.use_relative_prefix())
    );

    DisplayItem {
        annotation: if is_directory {
            DIRECTORY_ANNOTATION.to_string()
        } else {
            String::new()
        },
        title,
        value,
    }
}

/// Returns the `./` or `../`-repeated prefix for an inserted value.
pub fn relative_prefix(parent_level: usize, use_relative_prefix: bool) -> String {
    if parent_level == 0 && use_relative_prefix {
        return "./".to_string();
    }

    "../".repeat(parent_level)
}

/// Strips `root_dir` from `path` and joins the rest with `/`.
///
/// Paths outside `root_dir` keep all their normal components.
fn relative_title(root_dir: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root_dir).unwrap_or(path);

    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(segment) => Some(segment.to_string_lossy()),
            Component::ParentDir => Some("..".into()),
            Component::CurDir | Component::RootDir | Component::Prefix(_) => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::domain::settings::SettingsFile;

    fn settings(hide_extensions: bool, use_relative_prefix: bool) -> PluginSettings {
        SettingsFile {
            hide_extensions,
            use_relative_prefix,
            ..SettingsFile::default()
        }
        .compile()
        .expect("test expectation should hold")
    }

    #[test]
    fn test_parent_marker_item() {
        // Arrange
        let settings = PluginSettings::defaults().expect("test expectation should hold");

        // Act
        let item = format_candidate(&CandidatePath::Parent, Path::new("/proj"), 3, &settings);

        // Assert
        assert_eq!(item.title, "..");
        assert_eq!(item.value, "..");
        assert_eq!(item.annotation, "Move To Upper Dir");
        assert_eq!(item, DisplayItem::parent_marker());
    }

    #[test]
    fn test_file_at_level_zero_with_hidden_extension() {
        // Arrange
        let candidate = CandidatePath::File(PathBuf::from("/proj/src/x.ts"));

        // Act
        let item = format_candidate(&candidate, Path::new("/proj"), 0, &settings(true, true));

        // Assert
        assert_eq!(item.title, "src/x.ts");
        assert_eq!(item.value, "./src/x");
        assert_eq!(item.annotation, "");
    }

    #[test]
    fn test_file_two_levels_up() {
        // Arrange
        let candidate = CandidatePath::File(PathBuf::from("/proj/src/x.ts"));

        // Act
        let item = format_candidate(&candidate, Path::new("/proj"), 2, &settings(true, true));

        // Assert
        assert_eq!(item.title, "src/x.ts");
        assert_eq!(item.value, "../../src/x");
    }

    #[test]
    fn test_extension_kept_when_not_hidden() {
        // Arrange
        let candidate = CandidatePath::File(PathBuf::from("/proj/src/x.ts"));

        // Act
        let item = format_candidate(&candidate, Path::new("/proj"), 0, &settings(false, true));

        // Assert
        assert_eq!(item.value, "./src/x.ts");
    }

    #[test]
    fn test_no_prefix_at_level_zero_without_relative_prefix() {
        // Arrange
        let candidate = CandidatePath::File(PathBuf::from("/proj/index.js"));

        // Act
        let at_zero = format_candidate(&candidate, Path::new("/proj"), 0, &settings(true, false));
        let at_one = format_candidate(&candidate, Path::new("/proj"), 1, &settings(true, false));

        // Assert
        assert_eq!(at_zero.value, "index");
        assert_eq!(at_one.value, "../index");
    }

    #[test]
    fn test_directory_item_keeps_trailing_slash() {
        // Arrange
        let candidate = CandidatePath::Directory(PathBuf::from("/proj/src/components"));

        // Act
        let item = format_candidate(&candidate, Path::new("/proj"), 0, &settings(true, true));

        // Assert
        assert_eq!(item.title, "src/components/");
        assert_eq!(item.value, "./src/components/");
        assert_eq!(item.annotation, "Directory");
    }

    #[test]
    fn test_directory_with_extension_like_name_is_not_stripped() {
        // Arrange
        let candidate = CandidatePath::Directory(PathBuf::from("/proj/chart.js"));

        // Act
        let item = format_candidate(&candidate, Path::new("/proj"), 0, &settings(true, true));

        // Assert
        assert_eq!(item.value, "./chart.js/");
    }

    #[test]
    fn test_listing_from_filesystem_root() {
        // Arrange
        let candidate = CandidatePath::File(PathBuf::from("/etc/hosts.js"));

        // Act
        let item = format_candidate(&candidate, Path::new("/"), 4, &settings(true, true));

        // Assert
        assert_eq!(item.title, "etc/hosts.js");
        assert_eq!(item.value, "../../../../etc/hosts");
    }

    #[test]
    fn test_relative_prefix_values() {
        // Arrange & Act & Assert
        assert_eq!(relative_prefix(0, true), "./");
        assert_eq!(relative_prefix(0, false), "");
        assert_eq!(relative_prefix(2, true), "../../");
        assert_eq!(relative_prefix(2, false), "../../");
    }
}
