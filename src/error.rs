//! Error types for Switchyard

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Switchyard operations
pub type Result<T> = std::result::Result<T, SwitchyardError>;

/// Main error type for Switchyard
#[derive(Error, Debug)]
pub enum SwitchyardError {
    /// Registry lookups and registrations
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Errors reported by a system's own execution
    #[error(transparent)]
    System(#[from] SystemError),

    /// Settings file errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Command-level validation that is not tied to a system
    #[error("{0}")]
    Usage(String),
}

impl SwitchyardError {
    /// True when this error is a registry not-found condition
    pub fn is_not_found(&self) -> bool {
        matches!(self, SwitchyardError::Registry(e) if e.is_not_found())
    }
}

/// Registry errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("registry: system name is required")]
    EmptyName,

    #[error("registry: system {0:?} already registered")]
    DuplicateSystem(String),

    #[error("registry: system not registered: {0}")]
    SystemNotFound(String),

    #[error("registry: system {system:?} declares an invalid flag: {reason}")]
    InvalidFlag { system: String, reason: String },
}

impl RegistryError {
    /// Structural test for the not-found category
    pub fn is_not_found(&self) -> bool {
        matches!(self, RegistryError::SystemNotFound(_))
    }
}

/// Validation errors returned by a system's execute path
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SystemError {
    #[error("[{system}] {flag} flag is required")]
    MissingFlag { system: String, flag: String },

    #[error("[{system}] invalid value for {flag}: {value:?} ({reason})")]
    InvalidValue {
        system: String,
        flag: String,
        value: String,
        reason: String,
    },

    #[error("[{system}] unexpected arguments: {}", .args.join(" "))]
    UnexpectedArguments { system: String, args: Vec<String> },
}

/// Settings file discovery and parsing errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to read '{path}': {error}")]
    Read { path: PathBuf, error: String },

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Specialized result type for registry operations
pub type RegistryResult<T> = std::result::Result<T, RegistryError>;

/// Specialized result type for settings operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
