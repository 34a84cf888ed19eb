//! Integration tests for the public dispatch API

use calculator::calc::primitives::{add, divide, multiply, power, subtract};
use calculator::error::ArithmeticError;
use calculator::{calculate, CalcError, Operation, Request};

#[test]
fn test_primitives_match_float_arithmetic() {
    let samples = [(2.0, 3.0), (-1.5, 0.25), (1e10, -3.0), (0.1, 0.2)];
    for (a, b) in samples {
        assert_eq!(add(a, b), a + b);
        assert_eq!(subtract(a, b), a - b);
        assert_eq!(multiply(a, b), a * b);
        assert_eq!(divide(a, b), Ok(a / b));
        assert_eq!(power(a.abs(), b), a.abs().powf(b));
    }
}

#[test]
fn test_divide_by_zero_for_any_dividend() {
    for a in [0.0, 1.0, -7.5, f64::MAX] {
        assert_eq!(divide(a, 0.0), Err(ArithmeticError::DivisionByZero));
    }
}

#[test]
fn test_calculate_translates_division_by_zero() {
    let err = calculate("divide", 10.0, 0.0).unwrap_err();
    assert_eq!(err, CalcError::InvalidOperation("division by zero".to_string()));
}

#[test]
fn test_calculate_rejects_unknown_operation() {
    let err = calculate("invalid", 2.0, 3.0).unwrap_err();
    assert_eq!(err.to_string(), "Invalid operation");
}

#[test]
fn test_calculate_agrees_with_request() {
    for op in Operation::ALL {
        let via_name = calculate(op.name(), 6.0, 3.0);
        let via_request = Request::new(op, 6.0, 3.0).evaluate();
        assert_eq!(via_name, via_request);
    }
}

#[test]
fn test_calculate_with_question_mark() -> calculator::Result<()> {
    let value = calculate("power", 2.0, 10.0)?;
    assert_eq!(value, 1024.0);
    Ok(())
}
