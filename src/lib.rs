//! Switchyard - a pluggable command dispatcher
//!
//! Commands and systems (pluggable backends) register by name into a
//! [`registry::Catalog`] during initialization. At runtime the first CLI
//! argument selects a command, that command's declared flags are bound and
//! parsed, and its handler runs; system-backed commands forward to the
//! system registry.

// Public modules
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod flag;
pub mod registry;
pub mod systems;

// Re-export commonly used types
pub use error::{Result, SwitchyardError};

/// Current version of Switchyard
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
