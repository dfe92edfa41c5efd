//! Execution context handed to command handlers
//!
//! The context carries everything a handler may need for one invocation:
//! parsed flags, leftover arguments, output streams and the catalog it was
//! dispatched from.

use crate::flag::BoundFlags;
use crate::registry::Catalog;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Verbosity levels for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    Silent = 0,
    Quiet = 1,
    #[default]
    Normal = 2,
    Verbose = 3,
}

impl FromStr for Verbosity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "silent" => Ok(Verbosity::Silent),
            "quiet" => Ok(Verbosity::Quiet),
            "normal" => Ok(Verbosity::Normal),
            "verbose" => Ok(Verbosity::Verbose),
            other => Err(format!(
                "unknown verbosity '{}'. Must be one of: silent, quiet, normal, verbose",
                other
            )),
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Verbosity::Silent => "silent",
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
        };
        f.write_str(s)
    }
}

/// Runtime information provided to each command execution
pub struct Context<'a> {
    /// Positional arguments left over after flag parsing
    pub args: Vec<String>,

    /// Flags bound for this invocation (command flags and global flags)
    pub flags: BoundFlags,

    /// Renders the general usage text
    pub usage: &'a dyn Fn() -> String,

    pub stdout: &'a mut dyn Write,

    pub stderr: &'a mut dyn Write,

    /// Program name used in usage text
    pub program: &'a str,

    /// Version string embedded in the binary
    pub version: &'a str,

    pub verbosity: Verbosity,

    /// The catalog this command was dispatched from
    pub catalog: &'a Catalog,
}

impl<'a> Context<'a> {
    /// Print info message
    pub fn print_info(&mut self, message: &str) {
        if self.verbosity >= Verbosity::Normal {
            let _ = writeln!(self.stderr, "[INFO] {}", message);
        }
    }

    /// Print debug message (only in verbose mode)
    pub fn print_debug(&mut self, message: &str) {
        if self.verbosity >= Verbosity::Verbose {
            let _ = writeln!(self.stderr, "[DEBUG] {}", message);
        }
    }
}
