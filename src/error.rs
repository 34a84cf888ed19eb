//! Error types for the calculator

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for calculator operations
pub type Result<T> = std::result::Result<T, CalculatorError>;

/// Main error type for the calculator
#[derive(Error, Debug)]
pub enum CalculatorError {
    /// Settings file or environment errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Errors surfaced by the dispatch layer
    #[error(transparent)]
    Calc(#[from] CalcError),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Failures raised by the arithmetic primitives
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("division by zero")]
    DivisionByZero,
}

/// User-facing errors produced by the dispatch layer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// Unknown operation name, or a primitive failure translated for display
    #[error("{0}")]
    InvalidOperation(String),
}

impl CalcError {
    /// Message printed after the `Error:` prefix
    pub fn message(&self) -> &str {
        match self {
            CalcError::InvalidOperation(message) => message,
        }
    }
}

impl From<ArithmeticError> for CalcError {
    fn from(err: ArithmeticError) -> Self {
        match err {
            ArithmeticError::DivisionByZero => {
                CalcError::InvalidOperation("division by zero".to_string())
            }
        }
    }
}

/// Settings file parsing and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Settings file '{0}' does not exist")]
    NotFound(PathBuf),

    #[error("Failed to read settings file '{path}': {error}")]
    Read { path: PathBuf, error: String },

    #[error("Failed to parse settings: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Invalid settings file '{path}': {error}")]
    InvalidFile { path: PathBuf, error: String },

    #[error("Invalid value for environment variable {name}: {error}")]
    Environment { name: String, error: String },
}

/// Specialized result type for arithmetic primitives
pub type ArithmeticResult<T> = std::result::Result<T, ArithmeticError>;

/// Specialized result type for dispatch operations
pub type CalcResult<T> = std::result::Result<T, CalcError>;

/// Specialized result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
