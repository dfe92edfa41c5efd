//! The dispatch catalog
//!
//! A [`Catalog`] owns one command registry, one system registry and the
//! global flags contributed by flag providers. Its lifecycle is: built
//! empty, populated during initialization, then only read.

use crate::flag::{check_specs, FlagProvider, FlagSpec};
use crate::registry::{Command, CommandRegistry, SystemRegistry};
use std::sync::{OnceLock, PoisonError, RwLock};

static GLOBAL: OnceLock<Catalog> = OnceLock::new();

/// Everything a dispatch needs to resolve a command
#[derive(Default)]
pub struct Catalog {
    pub commands: CommandRegistry,
    pub systems: SystemRegistry,
    global_flags: RwLock<Vec<FlagSpec>>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide catalog, populated with the built-in commands and
    /// systems on first use.
    pub fn global() -> &'static Catalog {
        GLOBAL.get_or_init(crate::commands::builtin_catalog)
    }

    /// Add flags that every command accepts.
    ///
    /// # Panics
    ///
    /// A malformed spec, a name already contributed by another provider, or
    /// a name or short alias already declared by a registered command is a
    /// programming error.
    pub fn register_flag_provider(&self, provider: &dyn FlagProvider) {
        let mut globals = self.global_flags.write().unwrap_or_else(PoisonError::into_inner);

        let mut combined = globals.clone();
        combined.extend(provider.flags());
        if let Err(reason) = check_specs(&combined) {
            panic!("registry: global flags: {}", reason);
        }
        for command in self.commands.all() {
            check_against_globals(&command, &combined);
        }

        log::debug!(
            "Registered {} global flag(s)",
            combined.len() - globals.len()
        );
        *globals = combined;
    }

    /// Add a command whose flags must not clash with any global flag.
    ///
    /// # Panics
    ///
    /// Everything [`CommandRegistry::register`] rejects, plus a flag name or
    /// short alias that a flag provider already contributed.
    pub fn register_command(&self, command: Command) {
        // Held across registration so a provider cannot slip in between
        let globals = self.global_flags.read().unwrap_or_else(PoisonError::into_inner);
        check_against_globals(&command, &globals);
        self.commands.register(command);
    }

    /// A copy of the global flag specs, in registration order
    pub fn global_flags(&self) -> Vec<FlagSpec> {
        self.global_flags
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

fn check_against_globals(command: &Command, globals: &[FlagSpec]) {
    if let Err(reason) = check_specs(&command.flags) {
        panic!("commands: command {:?}: {}", command.name, reason);
    }

    let mut combined = command.flags.clone();
    combined.extend(globals.iter().cloned());
    if let Err(reason) = check_specs(&combined) {
        panic!(
            "registry: command {:?} clashes with a global flag: {}",
            command.name, reason
        );
    }
}
