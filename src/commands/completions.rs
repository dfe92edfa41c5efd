//! `completions` command
//!
//! Emits a shell completion script covering every registered command and
//! its flags.

use crate::error::SwitchyardError;
use crate::flag::clap_arg;
use crate::registry::{Catalog, Command, Context};
use clap_complete::Shell;

pub const NAME: &str = "completions";

const SHELLS: &str = "bash, zsh, fish, elvish, powershell";

pub fn command() -> Command {
    Command::new(NAME, "Generate a shell completion script", run)
}

fn run(ctx: &mut Context<'_>) -> crate::Result<String> {
    let shell = match ctx.args.as_slice() {
        [shell] => shell.parse::<Shell>().map_err(|_| {
            SwitchyardError::Usage(format!(
                "completions: unsupported shell '{}' (expected one of: {})",
                shell, SHELLS
            ))
        })?,
        [] => {
            return Err(SwitchyardError::Usage(format!(
                "completions: a shell is required (one of: {})",
                SHELLS
            )))
        }
        extra => {
            return Err(SwitchyardError::Usage(format!(
                "completions: unexpected arguments: {}",
                extra[1..].join(" ")
            )))
        }
    };

    let mut tree = command_tree(ctx.program, ctx.catalog);
    let mut script = Vec::new();
    clap_complete::generate(shell, &mut tree, ctx.program.to_string(), &mut script);

    ctx.print_debug(&format!("Generated {} completions ({} bytes)", shell, script.len()));
    Ok(String::from_utf8_lossy(&script).into_owned())
}

/// A clap command tree mirroring the catalog, used only for completions
pub fn command_tree(program: &str, catalog: &Catalog) -> clap::Command {
    let globals = catalog.global_flags();
    let mut root = clap::Command::new(program.to_string()).disable_help_subcommand(true);

    for cmd in catalog.commands.all() {
        let sub = clap::Command::new(cmd.name.clone())
            .about(cmd.description.clone())
            .args(cmd.flags.iter().chain(globals.iter()).map(clap_arg));
        root = root.subcommand(sub);
    }

    root
}
