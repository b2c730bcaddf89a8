//! Commands and the editor boundary they run against.

pub mod command;
/// Editor collaborator interface.
pub mod host;
pub mod resolve;
