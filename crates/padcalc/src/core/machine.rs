//! Input state machine
//!
//! State is the pair (display, [`InputState`]). Every button press goes
//! through [`transition`], a pure table lookup, and the resulting
//! [`DisplayEdit`] is applied by [`InputMachine::press`].
//!
//! A digit pressed right after an operator replaces the whole display,
//! left operand and operator included. `7 + 2 =` therefore shows `2`.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{ButtonSpec, Evaluate, Evaluator, Operation};

/// Display contents at start-up and after clear
pub const INITIAL_DISPLAY: &str = "0";

/// Display contents after a failed evaluation
pub const ERROR_TOKEN: &str = "Error";

/// Whether the next digit extends the display or starts over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub enum InputState {
    /// Digits append to the display
    #[default]
    Accumulating,
    /// An operator was just appended; the next digit replaces the display
    AwaitingOperand,
}

/// How a press changes the display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayEdit {
    /// Append text to the display
    Append(String),
    /// Replace the display with text
    Replace(String),
    /// Restore [`INITIAL_DISPLAY`]
    Reset,
    /// Hand the display to the evaluator and show the outcome
    Evaluate,
    /// Leave the display as it is
    Keep,
}

/// One row of the transition table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// Edit applied to the display
    pub edit: DisplayEdit,
    /// State after the press
    pub next: InputState,
}

/// Looks up the transition for `button` pressed in `state`
///
/// A `Digit` payload above 9 is not a keypad button and changes nothing.
#[must_use]
pub fn transition(state: InputState, button: ButtonSpec) -> Transition {
    let (edit, next) = match (state, button) {
        (_, ButtonSpec::Digit(d)) if d > 9 => (DisplayEdit::Keep, state),
        (InputState::AwaitingOperand, ButtonSpec::Digit(_)) => {
            (DisplayEdit::Replace(button.label()), InputState::Accumulating)
        }
        (InputState::Accumulating, ButtonSpec::Digit(_)) => {
            (DisplayEdit::Append(button.label()), InputState::Accumulating)
        }
        (_, ButtonSpec::Operation(Operation::Clear)) => {
            (DisplayEdit::Reset, InputState::Accumulating)
        }
        (_, ButtonSpec::Operation(Operation::Equals)) => {
            (DisplayEdit::Evaluate, InputState::Accumulating)
        }
        (
            _,
            ButtonSpec::Operation(
                op @ (Operation::Add | Operation::Subtract | Operation::Multiply | Operation::Divide),
            ),
        ) => (
            DisplayEdit::Append(op.symbol().to_string()),
            InputState::AwaitingOperand,
        ),
    };
    Transition { edit, next }
}

/// Keypad input state machine
#[derive(Debug, Clone)]
pub struct InputMachine<E = Evaluator> {
    display: String,
    state: InputState,
    evaluator: E,
}

impl Default for InputMachine<Evaluator> {
    fn default() -> Self {
        Self::new()
    }
}

impl InputMachine<Evaluator> {
    /// Creates a machine backed by the bundled evaluator
    #[must_use]
    pub fn new() -> Self {
        Self::with_evaluator(Evaluator::new())
    }
}

impl<E: Evaluate> InputMachine<E> {
    /// Creates a machine backed by a custom evaluator
    #[must_use]
    pub fn with_evaluator(evaluator: E) -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            state: InputState::Accumulating,
            evaluator,
        }
    }

    /// Returns the current display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns the current input state
    #[must_use]
    pub fn state(&self) -> InputState {
        self.state
    }

    /// Returns true if the next digit will replace the display
    #[must_use]
    pub fn is_awaiting_operand(&self) -> bool {
        self.state == InputState::AwaitingOperand
    }

    /// Returns true if the display shows the error token
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.display == ERROR_TOKEN
    }

    /// Applies one button press and returns the new display
    pub fn press(&mut self, button: ButtonSpec) -> &str {
        let Transition { edit, next } = transition(self.state, button);
        trace!(?button, from = ?self.state, to = ?next, ?edit, "transition");

        match edit {
            DisplayEdit::Append(text) => self.display.push_str(&text),
            DisplayEdit::Replace(text) => self.display = text,
            DisplayEdit::Reset => self.display = INITIAL_DISPLAY.to_string(),
            DisplayEdit::Evaluate => self.display = self.evaluate_display(),
            DisplayEdit::Keep => {}
        }
        self.state = next;

        debug!(display = %self.display, state = ?self.state, "button pressed");
        &self.display
    }

    /// Applies a sequence of presses and returns the final display
    pub fn press_all<I>(&mut self, buttons: I) -> &str
    where
        I: IntoIterator<Item = ButtonSpec>,
    {
        for button in buttons {
            self.press(button);
        }
        &self.display
    }

    fn evaluate_display(&mut self) -> String {
        match self.evaluator.evaluate(&self.display) {
            Ok(value) => format_result(value),
            Err(err) => {
                debug!(expression = %self.display, error = %err, "evaluation failed");
                ERROR_TOKEN.to_string()
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn set_display(&mut self, display: &str) {
        self.display = display.to_string();
    }
}

/// Formats a result value for the display
fn format_result(value: f64) -> String {
    if value == 0.0 {
        // Covers -0.0 as well
        INITIAL_DISPLAY.to_string()
    } else if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        let formatted = format!("{value:.10}");
        match formatted.trim_end_matches('0').trim_end_matches('.') {
            // Negative values that round away at ten decimals
            "-0" => INITIAL_DISPLAY.to_string(),
            trimmed => trimmed.to_string(),
        }
    }
}
