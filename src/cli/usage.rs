//! Usage text rendering
//!
//! Renders only from flag specs, never from bound cells, so help output
//! and parsing share one flag catalog.

use crate::flag::{FlagKind, FlagSpec};
use crate::registry::{Catalog, Command};
use std::fmt::Write;

/// General usage: synopsis plus every registered command
pub fn general_usage(program: &str, catalog: &Catalog) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Usage: {} <command> [flags] [args]", program);
    let _ = writeln!(out);
    let _ = writeln!(out, "Commands:");
    for cmd in catalog.commands.all() {
        let _ = writeln!(out, "  {:<12} {}", cmd.name, cmd.description);
    }
    let _ = writeln!(out);
    let _ = write!(out, "Use '<command> -h' to see command-specific flags.");

    out
}

/// Usage for a single command, including the global flags it accepts
pub fn command_usage(program: &str, command: &Command, globals: &[FlagSpec]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Usage: {} {} [flags] [args]", program, command.name);
    if !command.description.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", command.description);
    }

    let _ = writeln!(out);
    if command.flags.is_empty() {
        let _ = writeln!(out, "This command does not accept any flags.");
    } else {
        let _ = writeln!(out, "Flags:");
        for spec in &command.flags {
            let _ = writeln!(out, "{}", flag_line(spec, 2));
        }
    }

    if !globals.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Global flags:");
        for spec in globals {
            let _ = writeln!(out, "{}", flag_line(spec, 2));
        }
    }

    out.trim_end().to_string()
}

/// One aligned line describing a flag
pub fn flag_line(spec: &FlagSpec, indent: usize) -> String {
    let mut label = match spec.short() {
        Some(short) => format!("-{}, --{}", short, spec.name()),
        None => format!("    --{}", spec.name()),
    };
    if spec.kind() == FlagKind::String {
        label.push_str(" VALUE");
    }

    let mut line = format!("{:indent$}{:<24} {}", "", label, spec.usage(), indent = indent);
    if let Some(default) = non_trivial_default(spec) {
        let _ = write!(line, " (default {})", default);
    }
    line
}

fn non_trivial_default(spec: &FlagSpec) -> Option<String> {
    use crate::flag::FlagValue;

    match spec.default_value() {
        FlagValue::String(s) if s.is_empty() => None,
        FlagValue::Bool(false) => None,
        value => Some(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_line() {
        let line = flag_line(&FlagSpec::string("service", "", "AWS service"), 2);
        assert!(line.starts_with("      --service VALUE"));
        assert!(line.ends_with("AWS service"));

        let line = flag_line(&FlagSpec::bool("verbose", false, "Talk more").with_short('v'), 0);
        assert!(line.starts_with("-v, --verbose "));

        let line = flag_line(&FlagSpec::string("region", "us-east-1", "Region"), 0);
        assert!(line.ends_with("Region (default \"us-east-1\")"));
    }

    #[test]
    fn test_command_usage_without_flags() {
        let cmd = Command::new("version", "Print the version", |_| Ok(String::new()));
        let text = command_usage("switchyard", &cmd, &[]);
        assert!(text.starts_with("Usage: switchyard version [flags] [args]"));
        assert!(text.contains("This command does not accept any flags."));
        assert!(!text.contains("Global flags:"));
    }

    #[test]
    fn test_general_usage_lists_commands() {
        let catalog = Catalog::new();
        catalog
            .commands
            .register(Command::new("zeta", "Last", |_| Ok(String::new())));
        catalog
            .commands
            .register(Command::new("alpha", "First", |_| Ok(String::new())));

        let text = general_usage("prog", &catalog);
        assert!(text.starts_with("Usage: prog <command> [flags] [args]"));
        let alpha = text.find("alpha").unwrap();
        let zeta = text.find("zeta").unwrap();
        assert!(alpha < zeta);
    }
}
