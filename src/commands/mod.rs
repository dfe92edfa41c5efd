//! Built-in commands
//!
//! Simple commands (help, version, completions) act directly on their
//! context. System-backed commands are thin adapters that forward their
//! flags and arguments to the system registry.

pub mod completions;
pub mod global;
pub mod help;
pub mod system;
pub mod version;

pub use global::GlobalFlags;
pub use system::system_command;

use crate::registry::Catalog;
use crate::systems;

/// Build a catalog holding every built-in flag provider, system and command.
///
/// This is the whole initialization phase: systems go in first so that the
/// commands wrapping them can copy their flags.
pub fn builtin_catalog() -> Catalog {
    let catalog = Catalog::new();

    catalog.register_flag_provider(&GlobalFlags);

    for system in systems::builtin() {
        catalog.systems.must_register(system);
    }

    catalog.register_command(system_command(
        &catalog.systems,
        systems::aws::NAME,
        "Interact with AWS resources",
    ));
    catalog.register_command(system_command(
        &catalog.systems,
        systems::github::NAME,
        "Interact with GitHub repositories",
    ));
    catalog.register_command(help::command());
    catalog.register_command(version::command());
    catalog.register_command(completions::command());

    catalog
}
