//! Calculator - a small command-line calculator
//!
//! Evaluates one binary operation (add, subtract, multiply, divide, power) on
//! two floating-point operands and prints a single `Result:` or `Error:` line.

// Public modules
pub mod calc;
pub mod cli;
pub mod config;
pub mod error;
pub mod ui;

// Re-export commonly used types
pub use calc::{calculate, Operation, Request};
pub use error::{CalcError, CalculatorError, Result};

/// Current version of the calculator
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
