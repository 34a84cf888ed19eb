//! The fixed set of supported operations

use crate::calc::primitives;
use crate::error::{ArithmeticResult, CalcError};
use std::fmt;
use std::str::FromStr;

/// A binary arithmetic operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operation {
    /// Every operation, in the order they are listed to users
    pub const ALL: [Operation; 5] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Power,
    ];

    /// Command-line name of the operation
    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Power => "power",
        }
    }

    /// Run the matching primitive
    pub fn apply(self, a: f64, b: f64) -> ArithmeticResult<f64> {
        match self {
            Operation::Add => Ok(primitives::add(a, b)),
            Operation::Subtract => Ok(primitives::subtract(a, b)),
            Operation::Multiply => Ok(primitives::multiply(a, b)),
            Operation::Divide => primitives::divide(a, b),
            Operation::Power => Ok(primitives::power(a, b)),
        }
    }

    /// Quoted, comma-separated list of operation names
    pub fn choices() -> String {
        Self::ALL
            .iter()
            .map(|op| format!("'{}'", op.name()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    /// Exact, case-sensitive match against the known names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| CalcError::InvalidOperation("Invalid operation".to_string()))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
