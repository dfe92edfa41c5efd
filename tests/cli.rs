//! End-to-end tests driving the switchyard binary

mod common;

use common::{switchyard, with_settings};
use predicates::prelude::*;

#[test]
fn test_no_args_matches_help() {
    let (_dir, mut cmd) = switchyard();
    let no_args = cmd.assert().success().get_output().stdout.clone();

    let (_dir, mut cmd) = switchyard();
    let help = cmd.arg("help").assert().success().get_output().stdout.clone();

    assert_eq!(no_args, help);
    let text = String::from_utf8(help).unwrap();
    assert!(text.contains("Commands:"));
    assert!(text.contains("Systems:"));
}

#[test]
fn test_help_lists_commands_flags_and_systems() {
    let (_dir, mut cmd) = switchyard();
    cmd.arg("help")
        .assert()
        .success()
        .stdout(predicate::str::contains("aws"))
        .stdout(predicate::str::contains("--repository"))
        .stdout(predicate::str::contains("--service"))
        .stdout(predicate::str::contains("version      (no flags)"))
        .stdout(predicate::str::contains("--verbose"));
}

#[test]
fn test_aws_with_service() {
    let (_dir, mut cmd) = switchyard();
    cmd.args(["aws", "--service=ec2"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("ec2"));
}

#[test]
fn test_aws_without_service() {
    let (_dir, mut cmd) = switchyard();
    cmd.arg("aws")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("service flag is required"));
}

#[test]
fn test_aws_rejects_extra_arguments() {
    let (_dir, mut cmd) = switchyard();
    cmd.args(["aws", "--service", "rds", "describe"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unexpected arguments: describe"));
}

#[test]
fn test_github_with_repository() {
    let (_dir, mut cmd) = switchyard();
    cmd.args(["github", "--repository=foo/bar"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("foo/bar"));
}

#[test]
fn test_command_names_ignore_case() {
    let (_dir, mut cmd) = switchyard();
    cmd.args(["GitHub", "--repository", "foo/bar"])
        .assert()
        .success()
        .stdout(predicate::str::contains("foo/bar"));
}

#[test]
fn test_unknown_command() {
    let (_dir, mut cmd) = switchyard();
    cmd.arg("frobnicate")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown command \"frobnicate\""))
        .stderr(predicate::str::contains("Usage:"))
        .stderr(predicate::str::contains("Commands:"));
}

#[test]
fn test_command_help_flag() {
    let (_dir, mut cmd) = switchyard();
    cmd.args(["github", "--help"])
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage: switchyard github"))
        .stderr(predicate::str::contains("--repository"));

    let (_dir, mut cmd) = switchyard();
    cmd.args(["aws", "-h", "--bogus"])
        .assert()
        .code(0)
        .stderr(predicate::str::contains("Usage: switchyard aws"));
}

#[test]
fn test_malformed_flags() {
    let (_dir, mut cmd) = switchyard();
    cmd.args(["aws", "--region", "eu-west-1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--region"));
}

#[test]
fn test_version() {
    let (_dir, mut cmd) = switchyard();
    cmd.arg("version")
        .assert()
        .success()
        .stdout(format!("{}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_completions() {
    let (_dir, mut cmd) = switchyard();
    cmd.args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("switchyard"))
        .stdout(predicate::str::contains("--service"));

    let (_dir, mut cmd) = switchyard();
    cmd.args(["completions", "tcsh"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unsupported shell"));
}

#[test]
fn test_settings_change_default_command_and_name() {
    let (_dir, mut cmd) = with_settings("name: yard\ndefault-command: version\n");
    cmd.assert()
        .success()
        .stdout(format!("{}\n", env!("CARGO_PKG_VERSION")));

    let (_dir, mut cmd) = with_settings("name: yard\n");
    cmd.arg("nope")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage: yard <command>"));
}

#[test]
fn test_settings_verbosity() {
    let (_dir, mut cmd) = with_settings("verbosity: verbose\n");
    cmd.args(["aws", "--service", "ec2"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[DEBUG]"));

    let (_dir, mut cmd) = with_settings("verbosity: verbose\n");
    cmd.args(["aws", "--quiet", "--service", "ec2"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[DEBUG]").not());
}

#[test]
fn test_quiet_and_silent_levels() {
    let (_dir, mut cmd) = switchyard();
    cmd.args(["aws", "--service", "ec2"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[INFO] Running system 'aws'"));

    let (_dir, mut cmd) = switchyard();
    cmd.args(["aws", "-q", "--service", "ec2"])
        .assert()
        .success()
        .stdout("[AWS] ec2 reports 3 healthy resources.\n")
        .stderr(predicate::str::is_empty());

    let (_dir, mut cmd) = switchyard();
    cmd.args(["aws", "-q"])
        .assert()
        .code(1)
        .stderr("[AWS] service flag is required\n");

    let (_dir, mut cmd) = with_settings("verbosity: silent\n");
    cmd.arg("aws").assert().code(1).stderr(predicate::str::is_empty());
}

#[test]
fn test_malformed_settings() {
    let (_dir, mut cmd) = with_settings("verbosity: chatty\n");
    cmd.arg("version")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to load settings"))
        .stderr(predicate::str::contains("chatty"));
}
