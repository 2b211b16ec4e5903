//! Unified calculator driver
//!
//! Interaction scripts are written once against [`CalculatorDriver`] and run
//! against both the bare input machine and the terminal front end. The
//! `verify_*` functions below are those scripts; they panic on mismatch so
//! they can be called straight from `#[test]` functions.

use crate::core::{ButtonSpec, InputMachine, Operation, ERROR_TOKEN, INITIAL_DISPLAY};

/// Abstract driver for keypad interactions
///
/// # Example
///
/// ```rust
/// use padcalc::driver::{verify_clear, CalculatorDriver, HeadlessDriver};
///
/// let mut driver = HeadlessDriver::new();
/// verify_clear(&mut driver);
/// assert_eq!(driver.display(), "0");
/// ```
pub trait CalculatorDriver {
    /// Presses one button and returns the new display
    fn press(&mut self, button: ButtonSpec) -> String;

    /// Presses a sequence of buttons and returns the final display
    fn press_all(&mut self, buttons: &[ButtonSpec]) -> String {
        for &button in buttons {
            self.press(button);
        }
        self.display()
    }

    /// Returns the current display text
    fn display(&self) -> String;

    /// Returns true if the next digit will replace the display
    fn is_awaiting_operand(&self) -> bool;
}

/// Driver over the input machine alone
#[derive(Debug, Default)]
pub struct HeadlessDriver {
    machine: InputMachine,
}

impl HeadlessDriver {
    /// Creates a new headless driver
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the underlying machine
    #[must_use]
    pub fn machine(&self) -> &InputMachine {
        &self.machine
    }
}

impl CalculatorDriver for HeadlessDriver {
    fn press(&mut self, button: ButtonSpec) -> String {
        self.machine.press(button).to_string()
    }

    fn display(&self) -> String {
        self.machine.display().to_string()
    }

    fn is_awaiting_operand(&self) -> bool {
        self.machine.is_awaiting_operand()
    }
}

/// TUI driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
    use tracing::warn;

    use super::CalculatorDriver;
    use crate::core::ButtonSpec;
    use crate::tui::{cell_rect, screen_layout, AppAction, CalculatorApp, CalculatorUI};

    /// Screen size used when none is given
    pub const DEFAULT_SCREEN: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    /// Driver that presses buttons by clicking them on a virtual screen
    #[derive(Debug)]
    pub struct TuiDriver {
        app: CalculatorApp,
        screen: Rect,
    }

    impl Default for TuiDriver {
        fn default() -> Self {
            Self::new()
        }
    }

    impl TuiDriver {
        /// Creates a new TUI driver on an 80×24 screen
        #[must_use]
        pub fn new() -> Self {
            Self::with_app(CalculatorApp::new())
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self {
                app,
                screen: DEFAULT_SCREEN,
            }
        }

        /// Sets the virtual screen size
        #[must_use]
        pub fn with_screen(mut self, width: u16, height: u16) -> Self {
            self.screen = Rect::new(0, 0, width, height);
            self
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }

        /// Renders the screen and returns its text, row by row
        #[must_use]
        pub fn screen_text(&self) -> String {
            let mut buf = Buffer::empty(self.screen);
            CalculatorUI::new(&self.app).render(self.screen, &mut buf);
            buf.content()
                .chunks(usize::from(self.screen.width.max(1)))
                .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
                .collect::<Vec<_>>()
                .join("\n")
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, button: ButtonSpec) -> String {
            let keypad_area = screen_layout(self.screen).keypad;
            let cell = self
                .app
                .keypad()
                .position_of(button)
                .and_then(|pos| cell_rect(keypad_area, pos));

            if let Some(cell) = cell {
                let action = AppAction::Click {
                    column: cell.x + cell.width / 2,
                    row: cell.y + cell.height / 2,
                };
                self.app.handle(action, self.screen);
            } else {
                warn!(?button, screen = ?self.screen, "button not on screen, ignoring press");
            }
            self.display()
        }

        fn display(&self) -> String {
            self.app.display().to_string()
        }

        fn is_awaiting_operand(&self) -> bool {
            self.app.machine().is_awaiting_operand()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Unified interaction scripts =====
// These work with ANY CalculatorDriver implementation

const fn digit(d: u8) -> ButtonSpec {
    ButtonSpec::Digit(d)
}

const fn op(o: Operation) -> ButtonSpec {
    ButtonSpec::Operation(o)
}

/// Verifies that digits append to the initial "0"
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.press(op(Operation::Clear));
    assert_eq!(driver.display(), INITIAL_DISPLAY);

    assert_eq!(driver.press(digit(5)), "05");
    assert_eq!(driver.press_all(&[digit(3), digit(0)]), "0530");
    assert!(!driver.is_awaiting_operand());
}

/// Verifies that an operator appends its symbol and the next digit replaces
/// the display
pub fn verify_operator_then_digit<D: CalculatorDriver>(driver: &mut D) {
    driver.press(op(Operation::Clear));

    assert_eq!(driver.press_all(&[digit(9), op(Operation::Multiply)]), "09×");
    assert!(driver.is_awaiting_operand());

    assert_eq!(driver.press(digit(3)), "3");
    assert!(!driver.is_awaiting_operand());

    // Operators chain without a digit in between
    assert_eq!(
        driver.press_all(&[op(Operation::Add), op(Operation::Subtract)]),
        "3+-"
    );
    assert!(driver.is_awaiting_operand());
}

/// Verifies evaluation results
pub fn verify_equals<D: CalculatorDriver>(driver: &mut D) {
    driver.press(op(Operation::Clear));
    assert_eq!(driver.press_all(&[digit(4), digit(2), op(Operation::Equals)]), "42");
    assert!(!driver.is_awaiting_operand());

    // Result digits keep appending
    assert_eq!(driver.press(digit(1)), "421");
    assert_eq!(
        driver.press_all(&[op(Operation::Divide), digit(7), op(Operation::Equals)]),
        "7"
    );

    driver.press(op(Operation::Clear));
    assert_eq!(driver.press(op(Operation::Equals)), "0");
}

/// Verifies that a dangling operator evaluates to the error token
pub fn verify_error<D: CalculatorDriver>(driver: &mut D) {
    driver.press(op(Operation::Clear));
    let display = driver.press_all(&[digit(2), op(Operation::Add), op(Operation::Equals)]);
    assert_eq!(display, ERROR_TOKEN);
    assert!(!driver.is_awaiting_operand());

    // Digits append to the token; evaluating that fails again
    assert_eq!(driver.press(digit(7)), "Error7");
    assert_eq!(driver.press(op(Operation::Equals)), ERROR_TOKEN);
}

/// Verifies that clear always restores the initial display
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) {
    driver.press_all(&[digit(8), op(Operation::Subtract)]);
    assert!(driver.is_awaiting_operand());

    assert_eq!(driver.press(op(Operation::Clear)), INITIAL_DISPLAY);
    assert!(!driver.is_awaiting_operand());

    driver.press_all(&[digit(1), op(Operation::Divide), op(Operation::Equals)]);
    assert_eq!(driver.display(), ERROR_TOKEN);
    assert_eq!(driver.press(op(Operation::Clear)), INITIAL_DISPLAY);
}

/// Runs every interaction script
pub fn run_full_specification<D: CalculatorDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_operator_then_digit(driver);
    verify_equals(driver);
    verify_error(driver);
    verify_clear(driver);
}
