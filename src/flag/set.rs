//! The argument-parsing target
//!
//! A [`FlagSet`] is scoped to a single command invocation. Specs are bound
//! onto it one by one, each binding hands back the cell the parser will
//! fill, and a single call to [`FlagSet::parse`] resolves everything.

use crate::flag::{FlagCell, FlagKind, FlagSpec, FlagValue, HELP_FLAG};
use clap::parser::ValueSource;
use clap::{Arg, ArgAction, ArgMatches, Command};
use thiserror::Error;

/// Clap id for positional leftovers; not a valid flag name
const POSITIONAL_ID: &str = "--positional";

/// Flag parsing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// `-h` / `--help` was given; usage should be shown, this is not a failure
    #[error("help requested")]
    HelpRequested,

    /// Malformed or unknown flags
    #[error("{0}")]
    Invalid(String),

    #[error("flag set '{0}' has already been parsed")]
    AlreadyParsed(String),
}

impl ParseError {
    pub fn is_help(&self) -> bool {
        matches!(self, ParseError::HelpRequested)
    }
}

/// A freshly bound cell, tagged with its kind
#[derive(Debug, Clone)]
pub enum BoundCell {
    String(FlagCell<String>),
    Bool(FlagCell<bool>),
}

#[derive(Debug)]
struct Binding {
    spec: FlagSpec,
    cell: BoundCell,
}

/// Flag parsing target for one command
#[derive(Debug)]
pub struct FlagSet {
    name: String,
    bindings: Vec<Binding>,
    parsed: bool,
}

impl FlagSet {
    pub fn new(name: impl Into<String>) -> Self {
        FlagSet {
            name: name.into(),
            bindings: Vec::new(),
            parsed: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Declare a flag on this set and return the cell parsing will write.
    ///
    /// # Panics
    ///
    /// Binding a malformed spec, or a name/short alias already bound on this
    /// set, is a programming error.
    pub fn bind(&mut self, spec: &FlagSpec) -> BoundCell {
        if let Err(reason) = spec.check() {
            panic!("flag set '{}': {}", self.name, reason);
        }
        if self.bindings.iter().any(|b| b.spec.name() == spec.name()) {
            panic!("flag set '{}': flag {:?} bound twice", self.name, spec.name());
        }
        if let Some(short) = spec.short() {
            if self.bindings.iter().any(|b| b.spec.short() == Some(short)) {
                panic!("flag set '{}': short flag -{} bound twice", self.name, short);
            }
        }

        let cell = match spec.default_value() {
            FlagValue::String(default) => BoundCell::String(FlagCell::new(default.clone())),
            FlagValue::Bool(default) => BoundCell::Bool(FlagCell::new(*default)),
        };

        self.bindings.push(Binding {
            spec: spec.clone(),
            cell: cell.clone(),
        });

        cell
    }

    /// Build the clap command describing this flag set
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(self.name.clone())
            .no_binary_name(true)
            .disable_help_flag(true)
            .disable_version_flag(true)
            .disable_help_subcommand(true)
            .args_override_self(true)
            .arg(
                Arg::new(HELP_FLAG)
                    .short('h')
                    .long(HELP_FLAG)
                    .help("Show usage for this command")
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new(POSITIONAL_ID)
                    .value_name("ARGS")
                    .num_args(1..)
                    .trailing_var_arg(true)
                    .action(ArgAction::Append),
            );

        for binding in &self.bindings {
            cmd = cmd.arg(clap_arg(&binding.spec));
        }

        cmd
    }

    /// Parse `tokens` (without the command name), fill every cell the
    /// parser saw, and return the positional leftovers.
    pub fn parse<S: AsRef<str>>(&mut self, tokens: &[S]) -> Result<Vec<String>, ParseError> {
        if self.parsed {
            return Err(ParseError::AlreadyParsed(self.name.clone()));
        }
        self.parsed = true;

        let tokens: Vec<String> = tokens.iter().map(|t| t.as_ref().to_string()).collect();
        log::trace!("Parsing flags for '{}': {:?}", self.name, tokens);

        let matches = match self.command().try_get_matches_from(tokens.iter()) {
            Ok(matches) => matches,
            Err(_) if self.help_precedes_error(&tokens) => return Err(ParseError::HelpRequested),
            Err(e) => return Err(ParseError::Invalid(e.to_string().trim_end().to_string())),
        };

        if matches.get_flag(HELP_FLAG) {
            return Err(ParseError::HelpRequested);
        }

        for binding in &self.bindings {
            write_cell(&matches, binding);
        }

        Ok(matches
            .get_many::<String>(POSITIONAL_ID)
            .map(|values| values.cloned().collect())
            .unwrap_or_default())
    }
}

impl FlagSet {
    /// Walk `tokens` the way parsing does and report whether `-h`/`--help`
    /// shows up before anything unknown. Flags after a help request are
    /// never looked at, so they cannot turn it into a failure.
    fn help_precedes_error(&self, tokens: &[String]) -> bool {
        let mut iter = tokens.iter();
        while let Some(token) = iter.next() {
            if token == "-h" || token == "--help" {
                return true;
            }
            if token == "--" || token.len() < 2 || !token.starts_with('-') {
                return false;
            }

            let (binding, inline_value) = match token.strip_prefix("--") {
                Some(long) => {
                    let (name, inline) = match long.split_once('=') {
                        Some((name, _)) => (name, true),
                        None => (long, false),
                    };
                    (self.bindings.iter().find(|b| b.spec.name() == name), inline)
                }
                None => {
                    let mut chars = token[1..].chars();
                    let short = chars.next();
                    let binding = self
                        .bindings
                        .iter()
                        .find(|b| short.is_some() && b.spec.short() == short);
                    (binding, !chars.as_str().is_empty())
                }
            };

            match binding {
                None => return false,
                Some(b) if matches!(b.spec.kind(), FlagKind::String) && !inline_value => {
                    if iter.next().is_none() {
                        return false;
                    }
                }
                Some(_) => {}
            }
        }
        false
    }
}

/// Translate a spec into a clap argument
pub fn clap_arg(spec: &FlagSpec) -> Arg {
    let mut arg = Arg::new(spec.name().to_string())
        .long(spec.name().to_string())
        .help(spec.usage().to_string());

    if let Some(short) = spec.short() {
        arg = arg.short(short);
    }

    match spec.kind() {
        FlagKind::String => arg
            .value_name("VALUE")
            .action(ArgAction::Set)
            .num_args(1),
        // `--flag` means true, `--flag=false` turns a default-true flag off
        FlagKind::Bool => arg
            .value_name("BOOL")
            .action(ArgAction::Set)
            .num_args(0..=1)
            .require_equals(true)
            .default_missing_value("true")
            .value_parser(clap::value_parser!(bool)),
    }
}

fn write_cell(matches: &ArgMatches, binding: &Binding) {
    let name = binding.spec.name();
    if matches.value_source(name) != Some(ValueSource::CommandLine) {
        return;
    }

    match &binding.cell {
        BoundCell::String(cell) => {
            if let Some(value) = matches.get_one::<String>(name) {
                cell.set(value.clone());
            }
        }
        BoundCell::Bool(cell) => {
            if let Some(value) = matches.get_one::<bool>(name) {
                cell.set(*value);
            }
        }
    }
}
