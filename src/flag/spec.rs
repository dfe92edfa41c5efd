//! Declarative flag descriptions

use std::fmt;

/// Name reserved for the help request on every flag set
pub const HELP_FLAG: &str = "help";

/// The kind of value a flag carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagKind {
    String,
    Bool,
}

impl fmt::Display for FlagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagKind::String => f.write_str("string"),
            FlagKind::Bool => f.write_str("bool"),
        }
    }
}

/// A flag's default value, tagged with its kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    String(String),
    Bool(bool),
}

impl FlagValue {
    pub fn kind(&self) -> FlagKind {
        match self {
            FlagValue::String(_) => FlagKind::String,
            FlagValue::Bool(_) => FlagKind::Bool,
        }
    }
}

impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagValue::String(s) => write!(f, "{:?}", s),
            FlagValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// Description of a single flag exposed through the CLI
///
/// The kind is fixed by the default value, and the only way to build a spec
/// is through [`FlagSpec::string`] or [`FlagSpec::bool`], so the two can
/// never disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagSpec {
    name: String,
    usage: String,
    short: Option<char>,
    default: FlagValue,
}

impl FlagSpec {
    /// Create a string flag spec
    pub fn string(name: impl Into<String>, default: impl Into<String>, usage: impl Into<String>) -> Self {
        FlagSpec {
            name: name.into(),
            usage: usage.into(),
            short: None,
            default: FlagValue::String(default.into()),
        }
    }

    /// Create a bool flag spec
    pub fn bool(name: impl Into<String>, default: bool, usage: impl Into<String>) -> Self {
        FlagSpec {
            name: name.into(),
            usage: usage.into(),
            short: None,
            default: FlagValue::Bool(default),
        }
    }

    /// Attach a single-character alias (`-x`)
    pub fn with_short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn usage(&self) -> &str {
        &self.usage
    }

    pub fn short(&self) -> Option<char> {
        self.short
    }

    pub fn kind(&self) -> FlagKind {
        self.default.kind()
    }

    pub fn default_value(&self) -> &FlagValue {
        &self.default
    }

    /// Check the structural rules every declared flag must satisfy.
    ///
    /// Returns a human readable reason on failure.
    pub fn check(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("flag name is required".to_string());
        }
        if self.name != self.name.trim() || self.name.starts_with('-') {
            return Err(format!("flag name {:?} is malformed", self.name));
        }
        if self.name == HELP_FLAG || self.short == Some('h') {
            return Err(format!("flag {:?} collides with the reserved help flag", self.name));
        }
        Ok(())
    }
}

/// Check that every spec is well formed and that names are unique.
pub fn check_specs(specs: &[FlagSpec]) -> Result<(), String> {
    let mut seen_names: Vec<&str> = Vec::with_capacity(specs.len());
    let mut seen_shorts: Vec<char> = Vec::new();

    for spec in specs {
        spec.check()?;
        if seen_names.contains(&spec.name()) {
            return Err(format!("flag {:?} declared more than once", spec.name()));
        }
        seen_names.push(spec.name());

        if let Some(short) = spec.short() {
            if seen_shorts.contains(&short) {
                return Err(format!("short flag -{} declared more than once", short));
            }
            seen_shorts.push(short);
        }
    }

    Ok(())
}

/// Provides flag specs that are not tied to any one command or system.
pub trait FlagProvider: Send + Sync {
    fn flags(&self) -> Vec<FlagSpec>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_fix_kind() {
        let s = FlagSpec::string("service", "", "AWS service");
        assert_eq!(s.kind(), FlagKind::String);
        assert_eq!(s.default_value(), &FlagValue::String(String::new()));

        let b = FlagSpec::bool("dry-run", true, "Do nothing");
        assert_eq!(b.kind(), FlagKind::Bool);
        assert_eq!(b.default_value(), &FlagValue::Bool(true));
    }

    #[test]
    fn test_with_short() {
        let spec = FlagSpec::bool("verbose", false, "Talk more").with_short('v');
        assert_eq!(spec.short(), Some('v'));
        assert_eq!(spec.name(), "verbose");
    }

    #[test]
    fn test_check_rejects_empty_and_reserved() {
        assert!(FlagSpec::string("", "", "").check().is_err());
        assert!(FlagSpec::string("  ", "", "").check().is_err());
        assert!(FlagSpec::string("--service", "", "").check().is_err());
        assert!(FlagSpec::bool("help", false, "").check().is_err());
        assert!(FlagSpec::bool("hidden", false, "").with_short('h').check().is_err());
        assert!(FlagSpec::string("service", "", "").check().is_ok());
    }

    #[test]
    fn test_check_specs_duplicates() {
        let specs = vec![
            FlagSpec::string("repository", "", ""),
            FlagSpec::bool("repository", false, ""),
        ];
        assert!(check_specs(&specs).is_err());

        let specs = vec![
            FlagSpec::bool("verbose", false, "").with_short('v'),
            FlagSpec::bool("version", false, "").with_short('v'),
        ];
        assert!(check_specs(&specs).is_err());

        assert!(check_specs(&[]).is_ok());
    }
}
