//! Arithmetic behind the evaluator
//!
//! Every operation rejects results that are not finite, so the evaluator
//! never hands `inf` or `NaN` back to the display.

use serde::{Deserialize, Serialize};

use crate::core::{CalcResult, EvalError};

/// Binary arithmetic operator understood by the evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operator {
    /// Returns the symbol shown on the keypad
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Maps a character to an operator, accepting ASCII `*` and `/` as well
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '×' | '*' => Some(Self::Multiply),
            '÷' | '/' => Some(Self::Divide),
            _ => None,
        }
    }
}

/// Stateless four-function arithmetic
#[derive(Debug, Default, Clone, Copy)]
pub struct Calculator;

impl Calculator {
    /// Applies `op` to two operands
    pub fn calculate(a: f64, b: f64, op: Operator) -> CalcResult<f64> {
        match op {
            Operator::Add => Self::add(a, b),
            Operator::Subtract => Self::subtract(a, b),
            Operator::Multiply => Self::multiply(a, b),
            Operator::Divide => Self::divide(a, b),
        }
    }

    /// Addition: a + b
    pub fn add(a: f64, b: f64) -> CalcResult<f64> {
        Self::check_finite(a + b)
    }

    /// Subtraction: a - b
    pub fn subtract(a: f64, b: f64) -> CalcResult<f64> {
        Self::check_finite(a - b)
    }

    /// Multiplication: a * b
    pub fn multiply(a: f64, b: f64) -> CalcResult<f64> {
        Self::check_finite(a * b)
    }

    /// Division: a / b
    pub fn divide(a: f64, b: f64) -> CalcResult<f64> {
        if b == 0.0 {
            return Err(EvalError::DivisionByZero);
        }
        Self::check_finite(a / b)
    }

    fn check_finite(result: f64) -> CalcResult<f64> {
        if result.is_nan() {
            Err(EvalError::InvalidResult("NaN".into()))
        } else if result.is_infinite() {
            Err(EvalError::Overflow)
        } else {
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // --- Operator tests ---

    #[test]
    fn test_operator_symbols() {
        assert_eq!(Operator::Add.symbol(), "+");
        assert_eq!(Operator::Subtract.symbol(), "-");
        assert_eq!(Operator::Multiply.symbol(), "×");
        assert_eq!(Operator::Divide.symbol(), "÷");
    }

    #[test]
    fn test_operator_from_keypad_symbols() {
        assert_eq!(Operator::from_char('×'), Some(Operator::Multiply));
        assert_eq!(Operator::from_char('÷'), Some(Operator::Divide));
    }

    #[test]
    fn test_operator_from_ascii_symbols() {
        assert_eq!(Operator::from_char('*'), Some(Operator::Multiply));
        assert_eq!(Operator::from_char('/'), Some(Operator::Divide));
        assert_eq!(Operator::from_char('+'), Some(Operator::Add));
        assert_eq!(Operator::from_char('-'), Some(Operator::Subtract));
    }

    #[test]
    fn test_operator_from_unknown_char() {
        assert_eq!(Operator::from_char('^'), None);
        assert_eq!(Operator::from_char('('), None);
        assert_eq!(Operator::from_char('7'), None);
    }

    #[test]
    fn test_operator_serde() {
        let json = serde_json::to_string(&Operator::Divide).unwrap();
        assert_eq!(json, "\"Divide\"");
    }

    // --- Arithmetic tests ---

    #[test]
    fn test_add() {
        assert_eq!(Calculator::add(2.0, 3.0), Ok(5.0));
        assert_eq!(Calculator::add(-2.0, 5.0), Ok(3.0));
    }

    #[test]
    fn test_add_decimals() {
        let result = Calculator::add(0.1, 0.2).unwrap();
        assert!((result - 0.3).abs() < 1e-10);
    }

    #[test]
    fn test_subtract() {
        assert_eq!(Calculator::subtract(5.0, 3.0), Ok(2.0));
        assert_eq!(Calculator::subtract(3.0, 5.0), Ok(-2.0));
    }

    #[test]
    fn test_multiply() {
        assert_eq!(Calculator::multiply(-2.0, 3.0), Ok(-6.0));
        assert_eq!(Calculator::multiply(5.0, 0.0), Ok(0.0));
    }

    #[test]
    fn test_divide() {
        assert_eq!(Calculator::divide(6.0, 2.0), Ok(3.0));
        assert_eq!(Calculator::divide(0.0, 5.0), Ok(0.0));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(Calculator::divide(10.0, 0.0), Err(EvalError::DivisionByZero));
        assert_eq!(Calculator::divide(0.0, 0.0), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn test_multiply_overflow() {
        assert_eq!(Calculator::multiply(1e300, 1e300), Err(EvalError::Overflow));
    }

    #[test]
    fn test_nan_rejected() {
        assert!(matches!(
            Calculator::add(f64::INFINITY, f64::NEG_INFINITY),
            Err(EvalError::InvalidResult(_))
        ));
    }

    #[test]
    fn test_calculate_dispatch() {
        assert_eq!(Calculator::calculate(2.0, 3.0, Operator::Add), Ok(5.0));
        assert_eq!(Calculator::calculate(5.0, 3.0, Operator::Subtract), Ok(2.0));
        assert_eq!(Calculator::calculate(4.0, 3.0, Operator::Multiply), Ok(12.0));
        assert_eq!(Calculator::calculate(12.0, 4.0, Operator::Divide), Ok(3.0));
    }

    proptest! {
        #[test]
        fn prop_add_commutative(a in -1e10f64..1e10f64, b in -1e10f64..1e10f64) {
            prop_assert_eq!(Calculator::add(a, b), Calculator::add(b, a));
        }

        #[test]
        fn prop_multiply_identity(a in -1e10f64..1e10f64) {
            prop_assert_eq!(Calculator::multiply(a, 1.0), Ok(a));
        }

        #[test]
        fn prop_divide_by_self(a in -1e10f64..1e10f64) {
            prop_assume!(a != 0.0);
            let result = Calculator::divide(a, a).unwrap();
            prop_assert!((result - 1.0).abs() < 1e-10);
        }
    }
}
