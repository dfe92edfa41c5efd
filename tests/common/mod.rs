//! Common test utilities

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

/// A switchyard command isolated from any settings on the host.
///
/// The returned TempDir must be kept alive for the duration of the test.
pub fn switchyard() -> (TempDir, Command) {
    with_settings("")
}

/// A switchyard command that reads the given settings file contents
pub fn with_settings(content: &str) -> (TempDir, Command) {
    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join("switchyard.yml");
    fs::write(&settings_path, content).unwrap();

    let mut cmd = Command::cargo_bin("switchyard").unwrap();
    cmd.current_dir(temp_dir.path())
        .env("SWITCHYARD_CONFIG", &settings_path)
        .env_remove("RUST_LOG");

    (temp_dir, cmd)
}
