//! Command registry
//!
//! Commands are registered once during initialization and looked up by
//! name (case-insensitive) for the rest of the process. Every read hands
//! back an independent copy of the stored command.

use crate::error::Result;
use crate::flag::{check_specs, FlagSpec};
use crate::registry::Context;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

/// The function signature for command implementations
pub type Handler = Arc<dyn Fn(&mut Context<'_>) -> Result<String> + Send + Sync>;

/// A runnable CLI command
#[derive(Clone)]
pub struct Command {
    /// Command name, unique ignoring case
    pub name: String,

    /// One-line description for usage output
    pub description: String,

    /// Flags this command accepts, in declaration order
    pub flags: Vec<FlagSpec>,

    pub handler: Handler,
}

impl Command {
    pub fn new<F>(name: impl Into<String>, description: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&mut Context<'_>) -> Result<String> + Send + Sync + 'static,
    {
        Command {
            name: name.into(),
            description: description.into(),
            flags: Vec::new(),
            handler: Arc::new(handler),
        }
    }

    pub fn with_flags(mut self, flags: Vec<FlagSpec>) -> Self {
        self.flags = flags;
        self
    }

    /// Invoke the handler
    pub fn run(&self, ctx: &mut Context<'_>) -> Result<String> {
        (self.handler)(ctx)
    }

    /// Whether both commands share the same handler
    pub fn same_handler(&self, other: &Command) -> bool {
        Arc::ptr_eq(&self.handler, &other.handler)
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}

#[derive(Default)]
struct CommandTable {
    entries: HashMap<String, Command>,
    /// Lowercased names, kept sorted
    order: Vec<String>,
}

/// Name-keyed command table
#[derive(Default)]
pub struct CommandRegistry {
    table: RwLock<CommandTable>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a command.
    ///
    /// # Panics
    ///
    /// Registration mistakes are programming errors: a blank name, malformed
    /// or duplicated flag specs, or a name that is already registered.
    pub fn register(&self, command: Command) {
        let key = command.name.trim().to_lowercase();
        if key.is_empty() {
            panic!("commands: name is required");
        }
        if let Err(reason) = check_specs(&command.flags) {
            panic!("commands: command {:?}: {}", command.name, reason);
        }

        let mut table = self.table.write().unwrap_or_else(PoisonError::into_inner);
        if table.entries.contains_key(&key) {
            panic!("commands: command {:?} already registered", command.name);
        }

        log::debug!("Registering command '{}'", command.name);
        let pos = table.order.binary_search(&key).unwrap_or_else(|p| p);
        table.order.insert(pos, key.clone());
        table.entries.insert(key, command);
    }

    /// Retrieve a command by name (case-insensitive)
    pub fn lookup(&self, name: &str) -> Option<Command> {
        let table = self.table.read().unwrap_or_else(PoisonError::into_inner);
        table.entries.get(&name.trim().to_lowercase()).cloned()
    }

    /// A snapshot of all registered commands, sorted by name
    pub fn all(&self) -> Vec<Command> {
        let table = self.table.read().unwrap_or_else(PoisonError::into_inner);
        table
            .order
            .iter()
            .filter_map(|key| table.entries.get(key).cloned())
            .collect()
    }

    /// Registered command names, sorted
    pub fn names(&self) -> Vec<String> {
        self.all().into_iter().map(|cmd| cmd.name).collect()
    }

    pub fn len(&self) -> usize {
        self.table.read().unwrap_or_else(PoisonError::into_inner).order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
