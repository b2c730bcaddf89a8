//! Filesystem adapters: directory walking, file probing and settings loading.

/// Pruning directory walk that yields listing candidates.
pub mod dir_walk;
pub mod file_probe;
/// Settings file discovery and loading.
pub mod settings_store;
