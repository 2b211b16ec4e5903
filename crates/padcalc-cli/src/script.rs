//! Scripted presses for `--press`
//!
//! Each character of the script names one keypad button by its label.
//! Whitespace is skipped so scripts can be grouped for readability.

use padcalc::core::{ButtonSpec, InputMachine, Operation};
use tracing::info;

use crate::error::{CliError, CliResult};

/// Maps one label character to its button
#[must_use]
pub fn button_for(ch: char) -> Option<ButtonSpec> {
    let op = match ch {
        '0'..='9' => return ButtonSpec::digit(ch as u8 - b'0'),
        '+' => Operation::Add,
        '-' => Operation::Subtract,
        '×' | '*' => Operation::Multiply,
        '÷' | '/' => Operation::Divide,
        '=' => Operation::Equals,
        'C' => Operation::Clear,
        _ => return None,
    };
    Some(op.into())
}

/// Parses a whole script into button presses
pub fn parse_script(script: &str) -> CliResult<Vec<ButtonSpec>> {
    script
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .map(|ch| {
            button_for(ch).ok_or_else(|| {
                CliError::invalid_argument(format!("unknown button '{ch}' in --press"))
            })
        })
        .collect()
}

/// Runs a script against a fresh machine and returns the final display
pub fn run_script(script: &str) -> CliResult<String> {
    let presses = parse_script(script)?;
    let mut machine = InputMachine::new();
    let shown = machine.press_all(presses.iter().copied()).to_string();
    info!(presses = presses.len(), display = %shown, "script finished");
    Ok(shown)
}
