//! Flags accepted by every command

use crate::flag::{BoundFlags, FlagProvider, FlagSpec};
use crate::registry::Verbosity;

pub const VERBOSE_FLAG: &str = "verbose";
pub const QUIET_FLAG: &str = "quiet";

/// Verbosity switches shared by all commands
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalFlags;

impl FlagProvider for GlobalFlags {
    fn flags(&self) -> Vec<FlagSpec> {
        vec![
            FlagSpec::bool(VERBOSE_FLAG, false, "Print verbose output").with_short('v'),
            FlagSpec::bool(QUIET_FLAG, false, "Only print results and errors").with_short('q'),
        ]
    }
}

/// Resolve the verbosity for one invocation. Explicit flags beat the
/// configured level; `--quiet` beats `--verbose`.
pub fn verbosity(flags: &BoundFlags, configured: Verbosity) -> Verbosity {
    if flags.bool_value(QUIET_FLAG).unwrap_or(false) {
        Verbosity::Quiet
    } else if flags.bool_value(VERBOSE_FLAG).unwrap_or(false) {
        Verbosity::Verbose
    } else {
        configured
    }
}
