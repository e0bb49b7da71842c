//! The four arithmetic operations.
//!
//! Every function here is pure: no logging, no shared state.

use crate::core::{Operand, Operation, Outcome};
use crate::utils::error::{CalcError, Result};

/// Returns `a + b` in the operand type.
///
/// # Panics
///
/// Integer overflow behaves like the primitive operator: it panics in debug
/// builds and wraps in release builds. Floats never panic.
pub fn add<T: Operand>(a: T, b: T) -> T {
    a + b
}

/// Returns `a - b` in the operand type.
///
/// # Panics
///
/// Integer overflow behaves like the primitive operator: it panics in debug
/// builds and wraps in release builds. Floats never panic.
pub fn subtract<T: Operand>(a: T, b: T) -> T {
    a - b
}

/// Returns `a * b` in the operand type.
///
/// # Panics
///
/// Integer overflow behaves like the primitive operator: it panics in debug
/// builds and wraps in release builds. Floats never panic.
pub fn multiply<T: Operand>(a: T, b: T) -> T {
    a * b
}

/// Real-number division. Fails with `InvalidArgument` when `b` is zero.
pub fn divide<T: Operand>(a: T, b: T) -> Result<f64> {
    if b.is_zero() {
        return Err(CalcError::invalid_argument(
            Operation::Divide.name(),
            "Division by zero is not allowed",
        ));
    }
    Ok(a.to_f64() / b.to_f64())
}

pub fn apply<T: Operand>(operation: Operation, a: T, b: T) -> Result<Outcome<T>> {
    match operation {
        Operation::Add => Ok(Outcome::Exact(add(a, b))),
        Operation::Subtract => Ok(Outcome::Exact(subtract(a, b))),
        Operation::Multiply => Ok(Outcome::Exact(multiply(a, b))),
        Operation::Divide => divide(a, b).map(Outcome::Quotient),
    }
}
