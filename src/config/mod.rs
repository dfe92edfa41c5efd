//! Settings parsing and discovery
//!
//! This module handles finding and parsing the optional switchyard.yml
//! settings file.

pub mod parse;
pub mod types;

// Re-export main types
pub use parse::*;
pub use types::*;
