//! Keypad model: the fixed button grid and its labels
//!
//! ```text
//! [ 7 ] [ 8 ] [ 9 ] [ ÷ ]
//! [ 4 ] [ 5 ] [ 6 ] [ × ]
//! [ 1 ] [ 2 ] [ 3 ] [ - ]
//! [ C ] [ 0 ] [ = ] [ + ]
//! ```

use serde::{Deserialize, Serialize};

use crate::core::Operator;

/// Non-digit keypad buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Reset the display
    Clear,
    /// Division (÷)
    Divide,
    /// Multiplication (×)
    Multiply,
    /// Subtraction (-)
    Subtract,
    /// Addition (+)
    Add,
    /// Evaluate the display
    Equals,
}

impl Operation {
    /// All operations in declaration order
    pub const ALL: [Self; 6] = [
        Self::Clear,
        Self::Divide,
        Self::Multiply,
        Self::Subtract,
        Self::Add,
        Self::Equals,
    ];

    /// Returns the label shown on the button
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Clear => "C",
            Self::Equals => "=",
            Self::Divide => Operator::Divide.symbol(),
            Self::Multiply => Operator::Multiply.symbol(),
            Self::Subtract => Operator::Subtract.symbol(),
            Self::Add => Operator::Add.symbol(),
        }
    }

    /// Returns the arithmetic operator, or `None` for clear and equals
    #[must_use]
    pub const fn operator(&self) -> Option<Operator> {
        match self {
            Self::Divide => Some(Operator::Divide),
            Self::Multiply => Some(Operator::Multiply),
            Self::Subtract => Some(Operator::Subtract),
            Self::Add => Some(Operator::Add),
            Self::Clear | Self::Equals => None,
        }
    }
}

/// One keypad button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ButtonSpec {
    /// Decimal digit, 0 through 9
    Digit(u8),
    /// Any non-digit button
    Operation(Operation),
}

impl ButtonSpec {
    /// Creates a digit button, or `None` if `d` is not a single decimal digit
    #[must_use]
    pub const fn digit(d: u8) -> Option<Self> {
        if d <= 9 {
            Some(Self::Digit(d))
        } else {
            None
        }
    }

    /// Returns the text shown on the button
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Operation(op) => op.symbol().to_string(),
        }
    }

    /// Returns true for digit buttons
    #[must_use]
    pub const fn is_digit(&self) -> bool {
        matches!(self, Self::Digit(_))
    }
}

impl From<Operation> for ButtonSpec {
    fn from(op: Operation) -> Self {
        Self::Operation(op)
    }
}

/// Returns the text shown on `button`
#[must_use]
pub fn label(button: ButtonSpec) -> String {
    button.label()
}

const fn d(n: u8) -> ButtonSpec {
    ButtonSpec::Digit(n)
}

const fn op(o: Operation) -> ButtonSpec {
    ButtonSpec::Operation(o)
}

/// Button layout in row-major order
pub const LAYOUT: [[ButtonSpec; Keypad::COLS]; Keypad::ROWS] = [
    [d(7), d(8), d(9), op(Operation::Divide)],
    [d(4), d(5), d(6), op(Operation::Multiply)],
    [d(1), d(2), d(3), op(Operation::Subtract)],
    [op(Operation::Clear), d(0), op(Operation::Equals), op(Operation::Add)],
];

/// The calculator keypad
#[derive(Debug, Default, Clone, Copy)]
pub struct Keypad;

impl Keypad {
    /// Number of rows
    pub const ROWS: usize = 4;
    /// Number of columns
    pub const COLS: usize = 4;

    /// Creates the standard keypad
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns the rows, top to bottom
    #[must_use]
    pub const fn rows(&self) -> &'static [[ButtonSpec; Self::COLS]; Self::ROWS] {
        &LAYOUT
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (Self::ROWS, Self::COLS)
    }

    /// Returns the number of buttons
    #[must_use]
    pub const fn button_count(&self) -> usize {
        Self::ROWS * Self::COLS
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<ButtonSpec> {
        LAYOUT.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Finds the (row, col) of a button
    #[must_use]
    pub fn position_of(&self, button: ButtonSpec) -> Option<(usize, usize)> {
        self.buttons_with_positions()
            .find(|(_, b)| *b == button)
            .map(|(pos, _)| pos)
    }

    /// Iterates over all buttons in row-major order
    pub fn buttons(&self) -> impl Iterator<Item = ButtonSpec> {
        LAYOUT.iter().flat_map(|row| row.iter().copied())
    }

    /// Iterates over buttons with their (row, col) positions
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), ButtonSpec)> {
        LAYOUT.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, button)| ((r, c), *button))
        })
    }
}
