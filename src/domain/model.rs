use crate::utils::error::{CalcError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

/// A primitive number the calculator can work on.
///
/// Add, subtract and multiply stay in `Self`; division is always carried out
/// in `f64` so integer inputs can produce a fractional quotient. The
/// conversion is lossy for 64-bit integers above 2^53. Integer overflow in
/// the other three operations follows the primitive operator.
pub trait Operand:
    Copy
    + PartialEq
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
{
    const ZERO: Self;

    fn to_f64(self) -> f64;

    /// `-0.0` counts as zero.
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

macro_rules! impl_operand {
    ($zero:expr => $($t:ty),+) => {
        $(
            impl Operand for $t {
                const ZERO: Self = $zero;

                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )+
    };
}

impl_operand!(0 => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_operand!(0.0 => f32, f64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
        }
    }

    pub fn is_commutative(self) -> bool {
        matches!(self, Operation::Add | Operation::Multiply)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" | "+" => Ok(Operation::Add),
            "subtract" | "-" => Ok(Operation::Subtract),
            "multiply" | "*" | "x" | "×" => Ok(Operation::Multiply),
            "divide" | "/" | "÷" => Ok(Operation::Divide),
            _ => Err(CalcError::invalid_argument(
                "parse operation",
                format!("Unknown operation '{}'", s),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Calculation<T> {
    pub operation: Operation,
    pub lhs: T,
    pub rhs: T,
}

impl<T: Operand> Calculation<T> {
    pub fn new(operation: Operation, lhs: T, rhs: T) -> Self {
        Self { operation, lhs, rhs }
    }
}

impl<T: Operand> fmt::Display for Calculation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.operation, self.rhs)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome<T> {
    /// Result of add, subtract or multiply, in the operand type.
    Exact(T),
    /// Real-valued result of a division.
    Quotient(f64),
}

impl<T: Operand> Outcome<T> {
    pub fn as_f64(&self) -> f64 {
        match *self {
            Outcome::Exact(value) => value.to_f64(),
            Outcome::Quotient(value) => value,
        }
    }
}

impl<T: Operand> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Exact(value) => write!(f, "{}", value),
            Outcome::Quotient(value) => write!(f, "{}", value),
        }
    }
}
