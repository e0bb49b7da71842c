pub mod arithmetic;
pub mod calculator;

pub use crate::domain::model::{Calculation, Operand, Operation, Outcome};
pub use crate::domain::ports::Evaluate;
pub use crate::utils::error::Result;
