//! Resolved flag storage
//!
//! A [`FlagCell`] is handed to the parser at bind time and written exactly
//! once while parsing. Clones share the same slot, so every reader sees the
//! parsed value without any further locking.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// Write-once storage for a single flag value
#[derive(Debug)]
pub struct FlagCell<T> {
    inner: Arc<CellInner<T>>,
}

#[derive(Debug)]
struct CellInner<T> {
    default: T,
    parsed: OnceLock<T>,
}

impl<T> FlagCell<T> {
    pub fn new(default: T) -> Self {
        FlagCell {
            inner: Arc::new(CellInner {
                default,
                parsed: OnceLock::new(),
            }),
        }
    }

    /// The parsed value, or the default when the flag was not supplied
    pub fn get(&self) -> &T {
        self.inner.parsed.get().unwrap_or(&self.inner.default)
    }

    /// Whether the parser wrote an explicit value
    pub fn is_set(&self) -> bool {
        self.inner.parsed.get().is_some()
    }

    /// Store the parsed value. Only the first write wins; later writes
    /// return `false` and leave the cell untouched.
    pub fn set(&self, value: T) -> bool {
        self.inner.parsed.set(value).is_ok()
    }

    /// Whether two handles point at the same storage
    pub fn same_cell(&self, other: &FlagCell<T>) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T> Clone for FlagCell<T> {
    fn clone(&self) -> Self {
        FlagCell {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// The result of binding flag specs onto a flag set
///
/// A name lives in at most one of the two maps. Looking a name up under the
/// wrong kind reports "not found" just like an unknown name does.
#[derive(Debug, Clone, Default)]
pub struct BoundFlags {
    strings: HashMap<String, FlagCell<String>>,
    bools: HashMap<String, FlagCell<bool>>,
}

impl BoundFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert_string(&mut self, name: &str, cell: FlagCell<String>) {
        self.bools.remove(name);
        self.strings.insert(name.to_string(), cell);
    }

    pub(crate) fn insert_bool(&mut self, name: &str, cell: FlagCell<bool>) {
        self.strings.remove(name);
        self.bools.insert(name.to_string(), cell);
    }

    /// Retrieve a string flag cell by name
    pub fn string(&self, name: &str) -> Option<FlagCell<String>> {
        self.strings.get(name).cloned()
    }

    /// Retrieve a bool flag cell by name
    pub fn bool(&self, name: &str) -> Option<FlagCell<bool>> {
        self.bools.get(name).cloned()
    }

    /// Current value of a string flag
    pub fn string_value(&self, name: &str) -> Option<String> {
        self.strings.get(name).map(|cell| cell.get().clone())
    }

    /// Current value of a bool flag
    pub fn bool_value(&self, name: &str) -> Option<bool> {
        self.bools.get(name).map(|cell| *cell.get())
    }

    /// Total number of bound cells across both kinds
    pub fn len(&self) -> usize {
        self.strings.len() + self.bools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fold another set of bindings into this one
    pub fn merge(&mut self, other: BoundFlags) {
        for (name, cell) in other.strings {
            self.insert_string(&name, cell);
        }
        for (name, cell) in other.bools {
            self.insert_bool(&name, cell);
        }
    }
}
