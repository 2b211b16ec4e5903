//! TUI application state
//!
//! Wraps the input machine with the pieces only a screen needs: which
//! keypad button has focus, which one was pressed last, and the quit flag.

use ratatui::layout::Rect;
use tracing::debug;

use super::input::{AppAction, FocusDirection};
use super::keypad::{hit_test, GridPos};
use super::ui::screen_layout;
use crate::core::{ButtonSpec, InputMachine, Keypad};

/// Window title used when none is configured
pub const DEFAULT_TITLE: &str = "Tester Swift";

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    machine: InputMachine,
    keypad: Keypad,
    focus: GridPos,
    pressed: Option<ButtonSpec>,
    title: String,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a new calculator app with the default title
    #[must_use]
    pub fn new() -> Self {
        Self::with_title(DEFAULT_TITLE)
    }

    /// Creates a calculator app with a custom window title
    #[must_use]
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            machine: InputMachine::new(),
            keypad: Keypad::new(),
            focus: (0, 0),
            pressed: None,
            title: title.into(),
            should_quit: false,
        }
    }

    /// Returns the display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.machine.display()
    }

    /// Returns the input machine
    #[must_use]
    pub fn machine(&self) -> &InputMachine {
        &self.machine
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the window title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the focused grid position
    #[must_use]
    pub fn focus(&self) -> GridPos {
        self.focus
    }

    /// Returns the focused button
    #[must_use]
    pub fn focused_button(&self) -> Option<ButtonSpec> {
        self.keypad.button_at(self.focus.0, self.focus.1)
    }

    /// Returns the most recently pressed button
    #[must_use]
    pub fn pressed(&self) -> Option<ButtonSpec> {
        self.pressed
    }

    /// Moves focus one cell, stopping at the grid edges
    pub fn move_focus(&mut self, direction: FocusDirection) {
        let (row, col) = self.focus;
        self.focus = match direction {
            FocusDirection::Up => (row.saturating_sub(1), col),
            FocusDirection::Down => ((row + 1).min(Keypad::ROWS - 1), col),
            FocusDirection::Left => (row, col.saturating_sub(1)),
            FocusDirection::Right => (row, (col + 1).min(Keypad::COLS - 1)),
        };
    }

    /// Presses a button and returns the new display
    pub fn press(&mut self, button: ButtonSpec) -> &str {
        self.pressed = Some(button);
        self.machine.press(button)
    }

    /// Presses the focused button
    pub fn press_focused(&mut self) {
        if let Some(button) = self.focused_button() {
            self.press(button);
        }
    }

    /// Presses the button under a terminal cell, if any
    ///
    /// `screen` is the full terminal area the UI was rendered into.
    pub fn click(&mut self, screen: Rect, column: u16, row: u16) -> Option<ButtonSpec> {
        let keypad_area = screen_layout(screen).keypad;
        let pos = hit_test(keypad_area, column, row)?;
        let button = self.keypad.button_at(pos.0, pos.1)?;
        debug!(column, row, ?button, "click on keypad");
        self.focus = pos;
        self.press(button);
        Some(button)
    }

    /// Applies an input action
    pub fn handle(&mut self, action: AppAction, screen: Rect) {
        match action {
            AppAction::MoveFocus(direction) => self.move_focus(direction),
            AppAction::PressFocused => self.press_focused(),
            AppAction::Click { column, row } => {
                self.click(screen, column, row);
            }
            AppAction::Quit => self.quit(),
            AppAction::None => {}
        }
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
