//! Cloud provider backend

use crate::error::Result;
use crate::flag::FlagSpec;
use crate::registry::{System, SystemContext};
use crate::systems::{reject_args, required_string};

pub const NAME: &str = "aws";

const LABEL: &str = "AWS";
const SERVICE_FLAG: &str = "service";

#[derive(Debug, Clone, Copy, Default)]
pub struct AwsSystem;

impl System for AwsSystem {
    fn name(&self) -> &str {
        NAME
    }

    fn flags(&self) -> Vec<FlagSpec> {
        vec![FlagSpec::string(
            SERVICE_FLAG,
            "",
            "AWS service to inspect (e.g., rds, ec2)",
        )]
    }

    fn execute(&self, ctx: &SystemContext) -> Result<String> {
        let service = required_string(ctx, LABEL, SERVICE_FLAG)?;
        reject_args(ctx, LABEL)?;

        Ok(format!("[{}] {} reports 3 healthy resources.", LABEL, service))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{SwitchyardError, SystemError};
    use crate::flag::FlagSet;
    use crate::registry::bind_flags;

    fn run(tokens: &[&str]) -> Result<String> {
        let mut fs = FlagSet::new(NAME);
        let flags = bind_flags(&mut fs, &AwsSystem.flags());
        let args = fs.parse(tokens).unwrap();
        AwsSystem.execute(&SystemContext { flags, args })
    }

    #[test]
    fn test_reports_service() {
        let out = run(&["--service", " ec2 "]).unwrap();
        assert_eq!(out, "[AWS] ec2 reports 3 healthy resources.");
    }

    #[test]
    fn test_service_required() {
        let err = run(&[]).unwrap_err();
        assert!(matches!(
            err,
            SwitchyardError::System(SystemError::MissingFlag { .. })
        ));
        assert!(err.to_string().contains("service flag is required"));

        assert!(run(&["--service="]).is_err());
    }

    #[test]
    fn test_rejects_positional_args() {
        let err = run(&["--service", "rds", "describe", "instances"]).unwrap_err();
        assert_eq!(err.to_string(), "[AWS] unexpected arguments: describe instances");
    }

    #[test]
    fn test_unbound_flags_report_missing() {
        let err = AwsSystem.execute(&SystemContext::default()).unwrap_err();
        assert!(err.to_string().contains("service"));
    }
}
