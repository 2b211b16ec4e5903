//! Terminal front end
//!
//! The display panel sits above the keypad grid. Buttons are pressed by
//! clicking them or by moving the focus highlight and activating it.

mod app;
mod input;
mod keypad;
mod ui;

pub use app::{CalculatorApp, DEFAULT_TITLE};
pub use input::{AppAction, FocusDirection, InputHandler};
pub use keypad::{cell_rect, hit_test, GridPos, KeypadWidget};
pub use ui::{render, screen_layout, CalculatorUI, ScreenLayout, HELP_LINE};
