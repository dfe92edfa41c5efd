//! Flag declaration and binding
//!
//! Flags are declared as data ([`FlagSpec`]) and bound imperatively onto a
//! [`FlagSet`] at dispatch time. Binding yields [`BoundFlags`], a set of
//! write-once cells that the parser fills and everyone else only reads.

pub mod bound;
pub mod set;
pub mod spec;

// Re-export main types
pub use bound::*;
pub use set::*;
pub use spec::*;
