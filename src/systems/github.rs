//! Repository hosting backend

use crate::error::{Result, SystemError};
use crate::flag::FlagSpec;
use crate::registry::{System, SystemContext};
use crate::systems::{reject_args, required_string};
use regex::Regex;
use std::sync::OnceLock;

pub const NAME: &str = "github";

const LABEL: &str = "GitHub";
const REPOSITORY_FLAG: &str = "repository";

/// `owner/repo`, using the characters the hosting service allows
fn repository_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?/[A-Za-z0-9._-]+$")
            .expect("repository pattern is valid")
    })
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GitHubSystem;

impl System for GitHubSystem {
    fn name(&self) -> &str {
        NAME
    }

    fn flags(&self) -> Vec<FlagSpec> {
        vec![FlagSpec::string(
            REPOSITORY_FLAG,
            "",
            "GitHub repository to inspect (e.g., user/repo)",
        )]
    }

    fn execute(&self, ctx: &SystemContext) -> Result<String> {
        let repo = required_string(ctx, LABEL, REPOSITORY_FLAG)?;
        if !repository_pattern().is_match(&repo) {
            return Err(SystemError::InvalidValue {
                system: LABEL.to_string(),
                flag: REPOSITORY_FLAG.to_string(),
                value: repo,
                reason: "expected owner/repo".to_string(),
            }
            .into());
        }
        reject_args(ctx, LABEL)?;

        Ok(format!("[{}] {} has 15 open MRs.", LABEL, repo))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SwitchyardError;
    use crate::flag::FlagSet;
    use crate::registry::bind_flags;

    fn run(tokens: &[&str]) -> Result<String> {
        let mut fs = FlagSet::new(NAME);
        let flags = bind_flags(&mut fs, &GitHubSystem.flags());
        let args = fs.parse(tokens).unwrap();
        GitHubSystem.execute(&SystemContext { flags, args })
    }

    #[test]
    fn test_reports_repository() {
        let out = run(&["--repository=foo/bar"]).unwrap();
        assert_eq!(out, "[GitHub] foo/bar has 15 open MRs.");
    }

    #[test]
    fn test_repository_required() {
        let err = run(&[]).unwrap_err();
        assert_eq!(err.to_string(), "[GitHub] repository flag is required");
    }

    #[test]
    fn test_repository_shape() {
        for bad in ["foo", "foo/", "/bar", "foo/bar/baz", "-foo/bar"] {
            let flag = format!("--repository={}", bad);
            let err = run(&[flag.as_str()]).unwrap_err();
            assert!(
                matches!(err, SwitchyardError::System(SystemError::InvalidValue { .. })),
                "{} should be rejected",
                bad
            );
        }
        assert!(run(&["--repository", "rust-lang/rust.vim"]).is_ok());
    }

    #[test]
    fn test_rejects_positional_args() {
        let err = run(&["--repository", "foo/bar", "prs"]).unwrap_err();
        assert!(err.to_string().contains("unexpected arguments: prs"));
    }
}
