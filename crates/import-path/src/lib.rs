pub mod app;
pub mod domain;
pub mod infra;
pub mod runtime;

// Re-exports for the binary and editor integrations
pub use app::command;
pub use app::resolve;
pub use domain::display;
pub use domain::settings;
pub use infra::settings_store;
