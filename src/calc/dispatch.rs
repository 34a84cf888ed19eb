//! Operation dispatch and error translation
//!
//! Sits between the command line and the primitives: selects the primitive for
//! a request, runs it, and turns primitive failures into [`CalcError`]s that
//! can be shown to the user.

use crate::calc::Operation;
use crate::error::{CalcError, CalcResult};

/// One calculation to perform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Request {
    /// Operation to run
    pub operation: Operation,

    /// Left-hand operand
    pub lhs: f64,

    /// Right-hand operand
    pub rhs: f64,
}

impl Request {
    /// Create a new request
    pub fn new(operation: Operation, lhs: f64, rhs: f64) -> Self {
        Request { operation, lhs, rhs }
    }

    /// Run the request, translating primitive failures
    pub fn evaluate(&self) -> CalcResult<f64> {
        self.operation
            .apply(self.lhs, self.rhs)
            .map_err(CalcError::from)
    }
}

/// Evaluate `operation_name` on two operands
///
/// Names outside the fixed operation set fail with
/// `InvalidOperation("Invalid operation")`; a zero divisor fails with
/// `InvalidOperation("division by zero")`.
pub fn calculate(operation_name: &str, a: f64, b: f64) -> CalcResult<f64> {
    let operation: Operation = operation_name.parse()?;
    Request::new(operation, a, b).evaluate()
}
