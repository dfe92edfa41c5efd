//! CLI interface: dispatch and usage rendering
//!
//! This module resolves the first argument to a command, binds and parses
//! that command's flags, and runs its handler.

pub mod app;
pub mod usage;

// Re-export main types
pub use app::*;
