//! Command and system registries
//!
//! This module holds the name-keyed tables commands and systems register
//! into, the context handed to command handlers, and the catalog that
//! bundles both registries for dispatch.

pub mod catalog;
pub mod command;
pub mod context;
pub mod system;

// Re-export main types
pub use catalog::*;
pub use command::*;
pub use context::*;
pub use system::*;
