pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::CalculatorConfig;
pub use crate::core::arithmetic::{add, apply, divide, multiply, subtract};
pub use crate::core::calculator::Calculator;
pub use crate::domain::model::{Calculation, Operand, Operation, Outcome};
pub use crate::domain::ports::Evaluate;
pub use crate::utils::error::{CalcError, Result};
