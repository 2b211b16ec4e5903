//! Calculator core: keypad model, input state machine and evaluator
//!
//! Nothing in here knows about terminals. The presentation layer reads
//! [`InputMachine::display`] and the [`Keypad`], and feeds button presses
//! back through [`InputMachine::press`].

pub mod evaluator;
pub mod keypad;
pub mod machine;
mod operations;
pub mod parser;

pub use evaluator::{Evaluate, Evaluator};
pub use keypad::{label, ButtonSpec, Keypad, Operation};
pub use machine::{DisplayEdit, InputMachine, InputState, Transition, ERROR_TOKEN, INITIAL_DISPLAY};
pub use operations::{Calculator, Operator};

use thiserror::Error;

/// Result type for evaluator operations
pub type CalcResult<T> = Result<T, EvalError>;

/// Reasons the evaluator could not produce a number
///
/// The state machine collapses every variant into the same `"Error"`
/// display; the distinction only matters to callers using the evaluator
/// directly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Nothing to evaluate
    #[error("Empty expression")]
    EmptyExpression,
    /// Text is not a well-formed expression
    #[error("Invalid expression: {0}")]
    Parse(String),
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,
    /// Result overflowed to infinity
    #[error("Overflow: result exceeds maximum value")]
    Overflow,
    /// Result is not a number
    #[error("Invalid result: {0}")]
    InvalidResult(String),
}

impl EvalError {
    /// Create a parse error
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}
