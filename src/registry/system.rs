//! System registry
//!
//! Systems are pluggable backends identified by name. A CLI command can
//! expose a system's flags as its own and forward execution here; the
//! registry hands the system its context and returns whatever it reports.

use crate::error::{RegistryError, RegistryResult, Result};
use crate::flag::{check_specs, BoundCell, BoundFlags, FlagSet, FlagSpec};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// The runtime context passed to a system execution
#[derive(Debug, Clone, Default)]
pub struct SystemContext {
    pub flags: BoundFlags,
    pub args: Vec<String>,
}

/// The contract each system must satisfy
pub trait System: Send + Sync {
    fn name(&self) -> &str;

    fn flags(&self) -> Vec<FlagSpec>;

    fn execute(&self, ctx: &SystemContext) -> Result<String>;
}

struct RegisteredSystem {
    system: Arc<dyn System>,
    flags: Vec<FlagSpec>,
}

#[derive(Default)]
struct SystemTable {
    entries: HashMap<String, RegisteredSystem>,
    /// Lowercased names, kept sorted
    order: Vec<String>,
}

/// Name-keyed system table
#[derive(Default)]
pub struct SystemRegistry {
    table: RwLock<SystemTable>,
}

impl SystemRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make a system discoverable and snapshot its flags
    pub fn register(&self, system: Arc<dyn System>) -> RegistryResult<()> {
        let name = system.name().trim().to_string();
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }

        let flags = system.flags();
        check_specs(&flags).map_err(|reason| RegistryError::InvalidFlag {
            system: name.clone(),
            reason,
        })?;

        let key = name.to_lowercase();
        let mut table = self.table.write().unwrap_or_else(PoisonError::into_inner);
        if table.entries.contains_key(&key) {
            return Err(RegistryError::DuplicateSystem(name));
        }

        log::debug!("Registering system '{}' with {} flag(s)", name, flags.len());
        let pos = table.order.binary_search(&key).unwrap_or_else(|p| p);
        table.order.insert(pos, key.clone());
        table.entries.insert(key, RegisteredSystem { system, flags });

        Ok(())
    }

    /// Register a system, panicking on failure.
    ///
    /// Meant for the initialization phase, where a failed registration means
    /// the build itself is misconfigured.
    pub fn must_register(&self, system: Arc<dyn System>) {
        if let Err(e) = self.register(system) {
            panic!("{}", e);
        }
    }

    /// Retrieve a registered system by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<Arc<dyn System>> {
        self.with_entry(name, |entry| Arc::clone(&entry.system)).ok()
    }

    /// Run the named system with the provided context.
    ///
    /// A system's own error is returned exactly as the system reported it.
    pub fn execute(&self, name: &str, ctx: &SystemContext) -> Result<String> {
        let system = self.with_entry(name, |entry| Arc::clone(&entry.system))?;
        log::debug!("Executing system '{}' with {} arg(s)", system.name(), ctx.args.len());
        system.execute(ctx)
    }

    /// Registered system names, sorted
    pub fn names(&self) -> Vec<String> {
        self.table
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .order
            .clone()
    }

    /// A copy of the flags the named system declared at registration
    pub fn flag_specs(&self, name: &str) -> Option<Vec<FlagSpec>> {
        self.with_entry(name, |entry| entry.flags.clone()).ok()
    }

    pub fn len(&self) -> usize {
        self.table.read().unwrap_or_else(PoisonError::into_inner).order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn with_entry<T>(&self, name: &str, f: impl FnOnce(&RegisteredSystem) -> T) -> RegistryResult<T> {
        let key = name.trim().to_lowercase();
        if key.is_empty() {
            return Err(RegistryError::SystemNotFound(name.to_string()));
        }

        let table = self.table.read().unwrap_or_else(PoisonError::into_inner);
        table
            .entries
            .get(&key)
            .map(f)
            .ok_or_else(|| RegistryError::SystemNotFound(name.to_string()))
    }
}

/// Bind `specs` onto `flag_set`, creating one cell per spec.
///
/// Call once per dispatch, before parsing; the parser fills the cells it
/// was handed here.
pub fn bind_flags(flag_set: &mut FlagSet, specs: &[FlagSpec]) -> BoundFlags {
    let mut bound = BoundFlags::new();

    for spec in specs {
        match flag_set.bind(spec) {
            BoundCell::String(cell) => bound.insert_string(spec.name(), cell),
            BoundCell::Bool(cell) => bound.insert_bool(spec.name(), cell),
        }
    }

    bound
}
