//! Commands that forward to a registered system

use crate::registry::{Command, SystemContext, SystemRegistry};

/// Build a command that exposes the named system's flags as its own and
/// runs the system with whatever the dispatcher parsed.
///
/// # Panics
///
/// The system must already be registered; wiring a command to a missing
/// system is a programming error.
pub fn system_command(systems: &SystemRegistry, name: &str, description: &str) -> Command {
    let flags = systems
        .flag_specs(name)
        .unwrap_or_else(|| panic!("{} command: system not registered", name));

    let system = name.to_string();
    Command::new(name, description, move |ctx| {
        ctx.print_info(&format!("Running system '{}'", system));
        ctx.print_debug(&format!("Forwarding {} arg(s) to system '{}'", ctx.args.len(), system));

        let system_ctx = SystemContext {
            flags: ctx.flags.clone(),
            args: ctx.args.clone(),
        };
        ctx.catalog.systems.execute(&system, &system_ctx)
    })
    .with_flags(flags)
}
