//! Core configuration types
//!
//! This module defines the data structures that represent a calculator.yml
//! settings file.

use serde::{Deserialize, Serialize};

/// Top-level settings file structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Fixed number of fractional digits for results (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<usize>,

    /// Whether stderr diagnostics may be colored
    #[serde(default = "default_color")]
    pub color: bool,

    /// Print diagnostic messages, same as `--verbose`
    #[serde(default)]
    pub verbose: bool,
}

fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            precision: None,
            color: default_color(),
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let yaml = r#"
precision: 3
color: false
verbose: true
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.precision, Some(3));
        assert!(!config.color);
        assert!(config.verbose);
    }

    #[test]
    fn test_deserialize_defaults() {
        let config: Config = serde_yaml::from_str("verbose: false").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.color);
        assert_eq!(config.precision, None);
    }

    #[test]
    fn test_deserialize_rejects_negative_precision() {
        let result: Result<Config, _> = serde_yaml::from_str("precision: -1");
        assert!(result.is_err());
    }
}
