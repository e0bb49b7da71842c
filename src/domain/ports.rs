use crate::domain::model::{Calculation, Operand, Outcome};
use crate::utils::error::Result;

pub trait Evaluate: Send + Sync {
    fn evaluate<T: Operand>(&self, calculation: &Calculation<T>) -> Result<Outcome<T>>;

    /// Evaluates every calculation in order. A failure only occupies its own slot.
    fn evaluate_all<T: Operand>(&self, calculations: &[Calculation<T>]) -> Vec<Result<Outcome<T>>> {
        calculations
            .iter()
            .map(|calculation| self.evaluate(calculation))
            .collect()
    }
}
