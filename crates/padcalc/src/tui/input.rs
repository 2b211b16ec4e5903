//! Terminal event mapping
//!
//! Keys never type into the display. They only move the keypad focus,
//! activate the focused button, or quit; mouse clicks press whatever
//! button is under the pointer.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Direction for moving keypad focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusDirection {
    /// Previous row
    Up,
    /// Next row
    Down,
    /// Previous column
    Left,
    /// Next column
    Right,
}

/// Actions the application understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Move the keypad focus
    MoveFocus(FocusDirection),
    /// Press the focused button
    PressFocused,
    /// Left click at a terminal cell
    Click {
        /// Terminal column
        column: u16,
        /// Terminal row
        row: u16,
    },
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps terminal events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps any terminal event to an action
    #[must_use]
    pub fn handle_event(&self, event: &Event) -> AppAction {
        match event {
            Event::Key(key) => self.handle_key(*key),
            Event::Mouse(mouse) => self.handle_mouse(*mouse),
            _ => AppAction::None,
        }
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> AppAction {
        // Windows reports releases as well as presses
        if event.kind == KeyEventKind::Release {
            return AppAction::None;
        }

        if event.modifiers.contains(KeyModifiers::CONTROL) {
            return match event.code {
                KeyCode::Char('c' | 'q') => AppAction::Quit,
                _ => AppAction::None,
            };
        }

        match event.code {
            KeyCode::Up | KeyCode::Char('k') => AppAction::MoveFocus(FocusDirection::Up),
            KeyCode::Down | KeyCode::Char('j') => AppAction::MoveFocus(FocusDirection::Down),
            KeyCode::Left | KeyCode::Char('h') => AppAction::MoveFocus(FocusDirection::Left),
            KeyCode::Right | KeyCode::Char('l') => AppAction::MoveFocus(FocusDirection::Right),
            KeyCode::Enter | KeyCode::Char(' ') => AppAction::PressFocused,
            KeyCode::Esc | KeyCode::Char('q') => AppAction::Quit,
            _ => AppAction::None,
        }
    }

    /// Maps a mouse event to an action
    #[must_use]
    pub fn handle_mouse(&self, event: MouseEvent) -> AppAction {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => AppAction::Click {
                column: event.column,
                row: event.row,
            },
            _ => AppAction::None,
        }
    }
}
