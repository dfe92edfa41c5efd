//! Reference system backends
//!
//! Each backend is a stateless value implementing [`System`]. They pretend
//! to talk to a remote service and only validate their inputs.

pub mod aws;
pub mod github;

pub use aws::AwsSystem;
pub use github::GitHubSystem;

use crate::error::SystemError;
use crate::registry::{System, SystemContext};
use std::sync::Arc;

/// Every built-in system, in no particular order
pub fn builtin() -> Vec<Arc<dyn System>> {
    vec![Arc::new(AwsSystem), Arc::new(GitHubSystem)]
}

/// Read a required, non-blank string flag
pub(crate) fn required_string(
    ctx: &SystemContext,
    system: &str,
    flag: &str,
) -> Result<String, SystemError> {
    ctx.flags
        .string_value(flag)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| SystemError::MissingFlag {
            system: system.to_string(),
            flag: flag.to_string(),
        })
}

/// Positional arguments are not accepted by the built-in systems
pub(crate) fn reject_args(ctx: &SystemContext, system: &str) -> Result<(), SystemError> {
    if ctx.args.is_empty() {
        return Ok(());
    }
    Err(SystemError::UnexpectedArguments {
        system: system.to_string(),
        args: ctx.args.clone(),
    })
}
