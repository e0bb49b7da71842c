use crate::config::CalculatorConfig;
use crate::core::arithmetic;
use crate::core::{Calculation, Evaluate, Operand, Operation, Outcome};
use crate::utils::error::Result;
use tracing::{debug, warn};

/// Stateless facade over the arithmetic functions that can trace each call.
#[derive(Debug, Clone)]
pub struct Calculator {
    name: String,
    trace_operations: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::from_config(&CalculatorConfig::default())
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &CalculatorConfig) -> Self {
        Self {
            name: config.calculator.name.clone(),
            trace_operations: config.calculator.trace_operations,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add<T: Operand>(&self, a: T, b: T) -> T {
        let sum = arithmetic::add(a, b);
        self.trace(Operation::Add, a, b, &sum);
        sum
    }

    pub fn subtract<T: Operand>(&self, a: T, b: T) -> T {
        let difference = arithmetic::subtract(a, b);
        self.trace(Operation::Subtract, a, b, &difference);
        difference
    }

    pub fn multiply<T: Operand>(&self, a: T, b: T) -> T {
        let product = arithmetic::multiply(a, b);
        self.trace(Operation::Multiply, a, b, &product);
        product
    }

    pub fn divide<T: Operand>(&self, a: T, b: T) -> Result<f64> {
        match arithmetic::divide(a, b) {
            Ok(quotient) => {
                self.trace(Operation::Divide, a, b, &quotient);
                Ok(quotient)
            }
            Err(e) => {
                if self.trace_operations {
                    warn!(
                        calculator = %self.name,
                        operation = Operation::Divide.name(),
                        lhs = %a,
                        rhs = %b,
                        "rejected: {}",
                        e
                    );
                }
                Err(e)
            }
        }
    }

    fn trace<T: Operand, R: std::fmt::Display>(&self, operation: Operation, a: T, b: T, result: &R) {
        if self.trace_operations {
            debug!(
                calculator = %self.name,
                operation = operation.name(),
                lhs = %a,
                rhs = %b,
                result = %result,
                "evaluated"
            );
        }
    }
}

impl Evaluate for Calculator {
    fn evaluate<T: Operand>(&self, calculation: &Calculation<T>) -> Result<Outcome<T>> {
        let Calculation { operation, lhs, rhs } = *calculation;
        match operation {
            Operation::Add => Ok(Outcome::Exact(self.add(lhs, rhs))),
            Operation::Subtract => Ok(Outcome::Exact(self.subtract(lhs, rhs))),
            Operation::Multiply => Ok(Outcome::Exact(self.multiply(lhs, rhs))),
            Operation::Divide => self.divide(lhs, rhs).map(Outcome::Quotient),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    /// Runs `f` under a thread-local subscriber and returns everything it logged.
    fn capture_logs(f: impl FnOnce()) -> String {
        let buffer = SharedBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, f);

        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    fn traced() -> Calculator {
        let mut config = CalculatorConfig::default();
        config.calculator.name = "unit".to_string();
        config.calculator.trace_operations = true;
        Calculator::from_config(&config)
    }

    #[test]
    fn test_default_calculator() {
        let calc = Calculator::new();
        assert_eq!(calc.name(), "default");
        assert_eq!(calc.add(2, 3), 5);
        assert_eq!(calc.subtract(0, 1), -1);
        assert_eq!(calc.multiply(-2, 3), -6);
        assert_eq!(calc.divide(10, 2).unwrap(), 5.0);
    }

    #[test]
    fn test_traced_calculator_returns_same_results() {
        let calc = traced();
        assert_eq!(calc.name(), "unit");
        assert_eq!(calc.add(2.5, 0.5), 3.0);
        assert_eq!(calc.divide(7, 2).unwrap(), 3.5);
        assert!(calc.divide(7, 0).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_evaluate() {
        let calc = Calculator::new();
        let outcome = calc
            .evaluate(&Calculation::new(Operation::Multiply, 3i64, 4i64))
            .unwrap();
        assert_eq!(outcome, Outcome::Exact(12));

        let outcome = calc
            .evaluate(&Calculation::new(Operation::Divide, 7i64, 2i64))
            .unwrap();
        assert_eq!(outcome, Outcome::Quotient(3.5));
    }

    #[test]
    fn test_evaluate_all_keeps_order_and_errors() {
        let calc = traced();
        let batch = [
            Calculation::new(Operation::Add, 2, 3),
            Calculation::new(Operation::Divide, 10, 0),
            Calculation::new(Operation::Subtract, 5, 3),
        ];

        let results = calc.evaluate_all(&batch);

        assert_eq!(results.len(), 3);
        assert_eq!(*results[0].as_ref().unwrap(), Outcome::Exact(5));
        assert!(results[1].as_ref().unwrap_err().is_invalid_argument());
        assert_eq!(*results[2].as_ref().unwrap(), Outcome::Exact(2));
    }

    #[test]
    fn test_traced_operation_emits_debug_event() {
        let logs = capture_logs(|| {
            assert_eq!(traced().multiply(3, 4), 12);
        });

        assert!(logs.contains("DEBUG"), "{}", logs);
        assert!(logs.contains("calculator=unit"), "{}", logs);
        assert!(logs.contains("operation=\"multiply\""), "{}", logs);
        assert!(logs.contains("lhs=3"), "{}", logs);
        assert!(logs.contains("rhs=4"), "{}", logs);
        assert!(logs.contains("result=12"), "{}", logs);
    }

    #[test]
    fn test_rejected_division_emits_warn_event() {
        let logs = capture_logs(|| {
            assert!(traced().divide(10, 0).is_err());
        });

        assert!(logs.contains("WARN"), "{}", logs);
        assert!(logs.contains("operation=\"divide\""), "{}", logs);
        assert!(logs.contains("rejected: Invalid argument to divide"), "{}", logs);
    }

    #[test]
    fn test_untraced_calculator_is_silent() {
        let logs = capture_logs(|| {
            let calc = Calculator::new();
            assert_eq!(calc.add(2, 3), 5);
            assert!(calc.divide(1, 0).is_err());
        });

        assert!(logs.is_empty(), "{}", logs);
    }

    #[test]
    fn test_arithmetic_functions_are_silent() {
        let logs = capture_logs(|| {
            assert_eq!(arithmetic::add(2, 3), 5);
            assert_eq!(arithmetic::subtract(5, 3), 2);
            assert_eq!(arithmetic::multiply(3, 4), 12);
            assert!(arithmetic::divide(10, 0).is_err());
        });

        assert!(logs.is_empty(), "{}", logs);
    }
}
