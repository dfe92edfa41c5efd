//! `version` command

use crate::registry::Command;

pub const NAME: &str = "version";

pub fn command() -> Command {
    Command::new(NAME, "Print the application version", |ctx| {
        Ok(ctx.version.to_string())
    })
}
