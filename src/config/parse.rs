//! Settings file parsing and discovery

use crate::config::types::Settings;
use crate::error::{ConfigError, ConfigResult};
use crate::registry::Verbosity;
use directories::ProjectDirs;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings file names to search for
const SETTINGS_FILE_NAMES: &[&str] = &["switchyard.yml", "switchyard.yaml"];

/// Environment variable naming an explicit settings file
pub const SETTINGS_ENV: &str = "SWITCHYARD_CONFIG";

/// Find a settings file by searching the start directory and its parents
pub fn find_settings_file_from(start_dir: PathBuf) -> Option<PathBuf> {
    let mut current_dir = start_dir;

    loop {
        for file_name in SETTINGS_FILE_NAMES {
            let path = current_dir.join(file_name);
            if path.is_file() {
                return Some(path);
            }
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// The per-user settings file, if the platform has a config directory
pub fn user_settings_file() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("", "", "switchyard")?;
    SETTINGS_FILE_NAMES
        .iter()
        .map(|name| dirs.config_dir().join(name))
        .find(|path| path.is_file())
}

/// Parse a settings file from a path
pub fn parse_settings_file(path: &Path) -> ConfigResult<Settings> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;

    parse_settings(&contents)
}

/// Parse and validate settings from a string
pub fn parse_settings(yaml: &str) -> ConfigResult<Settings> {
    if yaml.trim().is_empty() {
        return Ok(Settings::default());
    }

    let settings: Settings = serde_yaml::from_str(yaml)?;
    validate_settings(&settings)?;
    Ok(settings)
}

/// Validate settings values that serde cannot check on its own
pub fn validate_settings(settings: &Settings) -> ConfigResult<()> {
    if let Some(level) = &settings.verbosity {
        level.parse::<Verbosity>().map_err(ConfigError::Invalid)?;
    }

    if let Some(command) = &settings.default_command {
        if command.split_whitespace().count() > 1 {
            return Err(ConfigError::Invalid(format!(
                "default-command must be a single command name, got '{}'",
                command
            )));
        }
    }

    Ok(())
}

/// Locate and load settings.
///
/// `SWITCHYARD_CONFIG` wins and must point at a readable file. Otherwise the
/// working directory and its parents are searched, then the user config
/// directory. Finding nothing yields the defaults.
pub fn load_settings() -> ConfigResult<(Settings, Option<PathBuf>)> {
    if let Some(explicit) = env::var_os(SETTINGS_ENV).filter(|v| !v.is_empty()) {
        let path = PathBuf::from(explicit);
        let settings = parse_settings_file(&path)?;
        return Ok((settings, Some(path)));
    }

    let found = env::current_dir()
        .ok()
        .and_then(find_settings_file_from)
        .or_else(user_settings_file);

    match found {
        Some(path) => {
            log::debug!("Loading settings from {}", path.display());
            let settings = parse_settings_file(&path)?;
            Ok((settings, Some(path)))
        }
        None => Ok((Settings::default(), None)),
    }
}
