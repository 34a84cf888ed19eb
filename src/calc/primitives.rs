//! Arithmetic primitives
//!
//! Pure two-operand functions over `f64`. Only `divide` can fail.

use crate::error::{ArithmeticError, ArithmeticResult};

/// Add two numbers
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Subtract `b` from `a`
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Multiply two numbers
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divide `a` by `b`
///
/// A zero divisor (either sign) is reported as [`ArithmeticError::DivisionByZero`]
/// rather than producing an infinity or NaN.
pub fn divide(a: f64, b: f64) -> ArithmeticResult<f64> {
    if b == 0.0 {
        return Err(ArithmeticError::DivisionByZero);
    }
    Ok(a / b)
}

/// Raise `a` to the power `b`
///
/// Follows IEEE 754 for results that cannot be represented: a negative base
/// with a fractional exponent gives NaN, overflow gives infinity.
pub fn power(a: f64, b: f64) -> f64 {
    a.powf(b)
}
