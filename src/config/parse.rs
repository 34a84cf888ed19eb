//! Settings file parsing and discovery

use crate::config::schema::{validate_config, validate_precision};
use crate::config::types::Config;
use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default settings file names to search for
const CONFIG_FILE_NAMES: &[&str] = &["calculator.yml", "calculator.yaml"];

/// Environment variable naming an explicit settings file
pub const CONFIG_ENV: &str = "CALCULATOR_CONFIG";

/// Environment variable overriding the result precision
pub const PRECISION_ENV: &str = "CALCULATOR_PRECISION";

/// Find a settings file in the current directory, its parents, or the
/// per-user config directory
pub fn find_config_file() -> Option<PathBuf> {
    env::current_dir()
        .ok()
        .and_then(|dir| find_config_file_from(&dir))
        .or_else(user_config_file)
}

/// Find a settings file starting from a specific directory and walking up
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    start_dir.ancestors().find_map(find_in_dir)
}

/// Settings file in the per-user config directory, if one exists
pub fn user_config_file() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("", "", "calculator")?;
    find_in_dir(dirs.config_dir())
}

fn find_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Parse and validate a settings file from a path
///
/// Parse and validation failures name the file.
pub fn parse_config_file(path: &Path) -> ConfigResult<Config> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;

    let in_file = |error: ConfigError| ConfigError::InvalidFile {
        path: path.to_path_buf(),
        error: match error {
            ConfigError::Parse(message) | ConfigError::Invalid(message) => message,
            other => other.to_string(),
        },
    };

    let config = parse_config(&contents).map_err(in_file)?;
    validate_config(&config).map_err(in_file)?;
    Ok(config)
}

/// Parse settings from a string
///
/// An empty document yields the defaults.
pub fn parse_config(yaml: &str) -> ConfigResult<Config> {
    if yaml.trim().is_empty() {
        return Ok(Config::default());
    }
    serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))
}

/// Load settings from an explicit path, or by discovery when none is given
///
/// Returns the settings together with the file they came from. Discovery that
/// finds nothing is not an error.
pub fn load_config(explicit: Option<&Path>) -> ConfigResult<(Config, Option<PathBuf>)> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => find_config_file(),
    };

    match path {
        Some(path) => {
            let config = parse_config_file(&path)?;
            Ok((config, Some(path)))
        }
        None => Ok((Config::default(), None)),
    }
}

/// Settings file named by the environment, if any
pub fn config_path_from_env() -> Option<PathBuf> {
    env::var_os(CONFIG_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Precision override from the environment, if any
pub fn precision_from_env() -> ConfigResult<Option<usize>> {
    match env::var(PRECISION_ENV) {
        Ok(value) => parse_precision_var(&value),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::Environment {
            name: PRECISION_ENV.to_string(),
            error: e.to_string(),
        }),
    }
}

/// Parse and validate the value of the precision environment variable
///
/// Blank values count as unset. A set value is always checked, even when
/// `--precision` takes priority over it.
pub fn parse_precision_var(value: &str) -> ConfigResult<Option<usize>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    let env_error = |error: String| ConfigError::Environment {
        name: PRECISION_ENV.to_string(),
        error: format!("'{}': {}", value, error),
    };

    let precision = value
        .parse::<usize>()
        .map_err(|e| env_error(e.to_string()))?;
    validate_precision(precision).map_err(|e| match e {
        ConfigError::Invalid(message) => env_error(message),
        other => env_error(other.to_string()),
    })?;
    Ok(Some(precision))
}
