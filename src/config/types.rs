//! Settings types
//!
//! This module defines the data structure that represents a switchyard.yml file.

use crate::registry::Verbosity;
use serde::{Deserialize, Serialize};

/// Program name used in usage text when none is configured
pub const DEFAULT_PROGRAM_NAME: &str = "switchyard";

/// Command run when no arguments are given and none is configured
pub const DEFAULT_COMMAND: &str = "help";

/// Top-level settings structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct Settings {
    /// Program name shown in usage text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Command to run when invoked without arguments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_command: Option<String>,

    /// Diagnostic level: silent, quiet, normal or verbose
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbosity: Option<String>,
}

impl Settings {
    pub fn program_name(&self) -> &str {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_PROGRAM_NAME)
    }

    pub fn default_command(&self) -> &str {
        self.default_command
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_COMMAND)
    }

    /// Configured verbosity; unparsable values fall back to the default
    /// (validation rejects them before this is reached)
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
            .as_deref()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.program_name(), "switchyard");
        assert_eq!(settings.default_command(), "help");
        assert_eq!(settings.verbosity(), Verbosity::Normal);
    }

    #[test]
    fn test_deserialize_settings() {
        let yaml = r#"
name: yard
default-command: version
verbosity: quiet
"#;
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.program_name(), "yard");
        assert_eq!(settings.default_command(), "version");
        assert_eq!(settings.verbosity(), Verbosity::Quiet);
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let settings = Settings {
            name: Some("  ".to_string()),
            default_command: Some(String::new()),
            verbosity: None,
        };
        assert_eq!(settings.program_name(), "switchyard");
        assert_eq!(settings.default_command(), "help");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<Settings, _> = serde_yaml::from_str("colour: always\n");
        assert!(result.is_err());
    }
}
