//! Configuration validation

use crate::config::types::Config;
use crate::error::{ConfigError, ConfigResult};

/// Largest supported number of fractional digits
pub const MAX_PRECISION: usize = 17;

/// Validate a complete configuration
pub fn validate_config(config: &Config) -> ConfigResult<()> {
    if let Some(precision) = config.precision {
        validate_precision(precision)?;
    }
    Ok(())
}

/// Validate a precision value from any source
pub fn validate_precision(precision: usize) -> ConfigResult<()> {
    if precision > MAX_PRECISION {
        return Err(ConfigError::Invalid(format!(
            "precision must be at most {}, got {}",
            MAX_PRECISION, precision
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_precision_bounds() {
        let mut config = Config::default();

        config.precision = Some(0);
        assert!(validate_config(&config).is_ok());

        config.precision = Some(MAX_PRECISION);
        assert!(validate_config(&config).is_ok());

        config.precision = Some(MAX_PRECISION + 1);
        let result = validate_config(&config);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }
}
