//! Main CLI application

use crate::commands::global;
use crate::config::Settings;
use crate::flag::{FlagSet, ParseError};
use crate::registry::{bind_flags, Catalog, Context, Verbosity};
use crate::cli::usage::{command_usage, general_usage};
use std::io::Write;

/// Process exit statuses
pub mod exit {
    /// Handler succeeded or help was shown
    pub const SUCCESS: i32 = 0;
    /// Unknown command, handler error, or settings error
    pub const FAILURE: i32 = 1;
    /// Malformed flags
    pub const USAGE: i32 = 2;
}

/// Resolves and runs one command per call
pub struct Dispatcher<'a> {
    catalog: &'a Catalog,
    settings: Settings,
    version: String,
}

impl<'a> Dispatcher<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Dispatcher {
            catalog,
            settings: Settings::default(),
            version: crate::VERSION.to_string(),
        }
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Dispatch `args` (without the program name) and return the exit status
    pub fn run<S: AsRef<str>>(
        &self,
        args: &[S],
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> i32 {
        let program = self.settings.program_name();
        let args: Vec<String> = if args.is_empty() {
            vec![self.settings.default_command().to_string()]
        } else {
            args.iter().map(|a| a.as_ref().to_string()).collect()
        };

        let (name, rest) = (&args[0], &args[1..]);
        log::debug!("Dispatching '{}' with {} token(s)", name, rest.len());

        let Some(command) = self.catalog.commands.lookup(name) else {
            let _ = writeln!(stderr, "unknown command {:?}\n", name);
            let _ = writeln!(stderr, "{}", general_usage(program, self.catalog));
            return exit::FAILURE;
        };

        let globals = self.catalog.global_flags();
        let mut flag_set = FlagSet::new(command.name.clone());
        let mut flags = bind_flags(&mut flag_set, &command.flags);
        flags.merge(bind_flags(&mut flag_set, &globals));

        let positional = match flag_set.parse(rest) {
            Ok(positional) => positional,
            Err(ParseError::HelpRequested) => {
                let _ = writeln!(stderr, "{}", command_usage(program, &command, &globals));
                return exit::SUCCESS;
            }
            Err(e) => {
                let _ = writeln!(stderr, "{}\n", e);
                let _ = writeln!(stderr, "{}", command_usage(program, &command, &globals));
                return exit::USAGE;
            }
        };

        let verbosity = global::verbosity(&flags, self.settings.verbosity());
        let usage = || general_usage(program, self.catalog);

        let result = {
            let mut ctx = Context {
                args: positional,
                flags,
                usage: &usage,
                stdout: &mut *stdout,
                stderr: &mut *stderr,
                program,
                version: &self.version,
                verbosity,
                catalog: self.catalog,
            };
            ctx.print_debug(&format!("Running command '{}'", command.name));
            command.run(&mut ctx)
        };

        match result {
            Ok(output) => {
                if !output.is_empty() {
                    let _ = if output.ends_with('\n') {
                        write!(stdout, "{}", output)
                    } else {
                        writeln!(stdout, "{}", output)
                    };
                }
                exit::SUCCESS
            }
            Err(e) => {
                log::debug!("Command '{}' failed: {:?}", command.name, e);
                // Silent keeps only the exit status
                if verbosity >= Verbosity::Quiet {
                    let _ = writeln!(stderr, "{}", e);
                }
                exit::FAILURE
            }
        }
    }
}

/// Run the process-wide catalog against the real process arguments
pub fn run(settings: Settings) -> i32 {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();

    Dispatcher::new(Catalog::global())
        .with_settings(settings)
        .run(&args, &mut stdout.lock(), &mut stderr.lock())
}
