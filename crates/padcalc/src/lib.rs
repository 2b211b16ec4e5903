//! padcalc - keypad calculator
//!
//! A single-screen calculator: a fixed 4×4 keypad, a text display, and an
//! input state machine that hands the display to an evaluator on `=`.
//!
//! - [`core`] holds the keypad model, the state machine and the evaluator.
//!   It has no terminal dependencies.
//! - [`tui`] (feature `tui`, on by default) renders the display and keypad
//!   with ratatui and turns clicks and focus activations into presses.
//! - [`driver`] lets one interaction script run against either front end.
//!
//! # Example
//!
//! ```rust
//! use padcalc::prelude::*;
//!
//! let mut machine = InputMachine::new();
//! machine.press(ButtonSpec::Digit(4));
//! machine.press(Operation::Multiply.into());
//! assert_eq!(machine.display(), "04×");
//! assert!(machine.is_awaiting_operand());
//!
//! // A digit after an operator starts the display over
//! machine.press(ButtonSpec::Digit(6));
//! assert_eq!(machine.display(), "6");
//!
//! machine.press(Operation::Equals.into());
//! assert_eq!(machine.display(), "6");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::evaluator::{Evaluate, Evaluator};
    pub use crate::core::keypad::{label, ButtonSpec, Keypad, Operation};
    pub use crate::core::machine::{InputMachine, InputState, ERROR_TOKEN, INITIAL_DISPLAY};
    pub use crate::core::parser::{AstNode, Parser, Token, Tokenizer};
    pub use crate::core::{CalcResult, EvalError, Operator};
    pub use crate::driver::{CalculatorDriver, HeadlessDriver};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}
