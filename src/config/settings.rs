//! Resolved settings for one invocation
//!
//! Merges command-line flags, environment and settings file. Command-line
//! flags win over the environment, which wins over the file. Each source is
//! validated where it is read, so merging cannot fail.

use crate::config::types::Config;
use crate::ui::Verbosity;
use std::path::PathBuf;

/// Values taken from the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub precision: Option<usize>,
    pub verbosity: Option<Verbosity>,
    pub no_color: bool,
}

/// Final settings used for formatting and diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Fixed fractional digits, or `None` for the default representation
    pub precision: Option<usize>,

    /// Whether diagnostics may be colored
    pub color: bool,

    /// Diagnostic verbosity
    pub verbosity: Verbosity,

    /// Settings file the values were loaded from, if any
    pub source: Option<PathBuf>,
}

impl Settings {
    /// Merge all sources into final settings
    pub fn resolve(
        config: &Config,
        source: Option<PathBuf>,
        env_precision: Option<usize>,
        overrides: &Overrides,
    ) -> Self {
        let precision = overrides
            .precision
            .or(env_precision)
            .or(config.precision);

        let verbosity = overrides.verbosity.unwrap_or(if config.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        });

        Settings {
            precision,
            color: config.color && !overrides.no_color,
            verbosity,
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings =
            Settings::resolve(&Config::default(), None, None, &Overrides::default());
        assert_eq!(settings.precision, None);
        assert!(settings.color);
        assert_eq!(settings.verbosity, Verbosity::Normal);
        assert_eq!(settings.source, None);
    }

    #[test]
    fn test_precision_precedence() {
        let config = Config {
            precision: Some(1),
            ..Config::default()
        };

        let from_file = Settings::resolve(&config, None, None, &Overrides::default());
        assert_eq!(from_file.precision, Some(1));

        let from_env = Settings::resolve(&config, None, Some(2), &Overrides::default());
        assert_eq!(from_env.precision, Some(2));

        let overrides = Overrides {
            precision: Some(3),
            ..Overrides::default()
        };
        let from_cli = Settings::resolve(&config, None, Some(2), &overrides);
        assert_eq!(from_cli.precision, Some(3));
    }

    #[test]
    fn test_verbosity_from_config_and_flags() {
        let config = Config {
            verbose: true,
            ..Config::default()
        };
        let settings = Settings::resolve(&config, None, None, &Overrides::default());
        assert_eq!(settings.verbosity, Verbosity::Verbose);

        let overrides = Overrides {
            verbosity: Some(Verbosity::Quiet),
            ..Overrides::default()
        };
        let settings = Settings::resolve(&config, None, None, &overrides);
        assert_eq!(settings.verbosity, Verbosity::Quiet);
    }

    #[test]
    fn test_no_color_flag() {
        let overrides = Overrides {
            no_color: true,
            ..Overrides::default()
        };
        let settings =
            Settings::resolve(&Config::default(), None, None, &overrides);
        assert!(!settings.color);
    }
}
