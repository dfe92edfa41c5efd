//! `help` command

use crate::cli::usage::flag_line;
use crate::registry::{Command, Context};
use std::fmt::Write;

pub const NAME: &str = "help";

pub fn command() -> Command {
    Command::new(NAME, "Show usage information and available commands", run)
}

fn run(ctx: &mut Context<'_>) -> crate::Result<String> {
    let mut out = (ctx.usage)();
    let _ = writeln!(out);
    let _ = writeln!(out);

    let _ = writeln!(out, "Command flags:");
    for cmd in ctx.catalog.commands.all() {
        let mut specs = cmd.flags;
        specs.sort_by(|a, b| a.name().cmp(b.name()));

        if specs.is_empty() {
            let _ = writeln!(out, "  {:<12} (no flags)", cmd.name);
            continue;
        }
        let _ = writeln!(out, "  {}", cmd.name);
        for spec in &specs {
            let _ = writeln!(out, "{}", flag_line(spec, 4));
        }
    }

    let globals = ctx.catalog.global_flags();
    if !globals.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Global flags:");
        for spec in &globals {
            let _ = writeln!(out, "{}", flag_line(spec, 2));
        }
    }

    let names = ctx.catalog.systems.names();
    if !names.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Systems:");
        for name in names {
            let _ = writeln!(out, "  {}", name);
        }
    }

    Ok(out.trim_end().to_string())
}
