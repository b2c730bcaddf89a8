//! Pure path logic: exclusion, navigation, formatting and settings.

pub mod candidate;
pub mod display;
pub mod navigation;
/// Glob-like exclude pattern matching.
pub mod pattern;
pub mod scope;
pub mod settings;
