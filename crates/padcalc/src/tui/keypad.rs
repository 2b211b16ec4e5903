//! Keypad widget for the TUI
//!
//! Draws the 4×4 grid inside a bordered block and maps terminal cells back
//! to grid positions so mouse clicks can press buttons.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use crate::core::{ButtonSpec, Keypad, Operation};

/// Grid position of a keypad button (row, col)
pub type GridPos = (usize, usize);

/// Smallest area the keypad renders into, borders included
pub const MIN_WIDTH: u16 = 2 + Keypad::COLS as u16 * 3;
/// Smallest area the keypad renders into, borders included
pub const MIN_HEIGHT: u16 = 2 + Keypad::ROWS as u16;

/// Area inside the keypad border
fn inner_area(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// Size of a single button cell (width, height)
fn cell_size(inner: Rect) -> (u16, u16) {
    (
        inner.width / Keypad::COLS as u16,
        inner.height / Keypad::ROWS as u16,
    )
}

/// Returns the screen rectangle of the button at `(row, col)`
#[must_use]
pub fn cell_rect(area: Rect, (row, col): GridPos) -> Option<Rect> {
    if row >= Keypad::ROWS || col >= Keypad::COLS {
        return None;
    }
    let inner = inner_area(area);
    let (width, height) = cell_size(inner);
    if width == 0 || height == 0 {
        return None;
    }
    Some(Rect {
        x: inner.x + col as u16 * width,
        y: inner.y + row as u16 * height,
        width,
        height,
    })
}

/// Converts a click position to a grid position
#[must_use]
pub fn hit_test(area: Rect, x: u16, y: u16) -> Option<GridPos> {
    let inner = inner_area(area);
    if x < inner.x || y < inner.y || x >= inner.x + inner.width || y >= inner.y + inner.height {
        return None;
    }

    let (width, height) = cell_size(inner);
    if width == 0 || height == 0 {
        return None;
    }

    let col = ((x - inner.x) / width) as usize;
    let row = ((y - inner.y) / height) as usize;

    (row < Keypad::ROWS && col < Keypad::COLS).then_some((row, col))
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
    focus: Option<GridPos>,
    pressed: Option<ButtonSpec>,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self {
            keypad,
            focus: None,
            pressed: None,
        }
    }

    /// Highlights the focused button
    #[must_use]
    pub fn focus(mut self, focus: GridPos) -> Self {
        self.focus = Some(focus);
        self
    }

    /// Highlights the most recently pressed button
    #[must_use]
    pub fn pressed(mut self, pressed: Option<ButtonSpec>) -> Self {
        self.pressed = pressed;
        self
    }

    fn button_style(&self, pos: GridPos, button: ButtonSpec) -> Style {
        if self.focus == Some(pos) {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }

        let base = match button {
            ButtonSpec::Digit(_) => Style::default().fg(Color::White),
            ButtonSpec::Operation(Operation::Equals) => Style::default().fg(Color::Green),
            ButtonSpec::Operation(Operation::Clear) => Style::default().fg(Color::Red),
            ButtonSpec::Operation(_) => Style::default().fg(Color::Yellow),
        };

        if self.pressed == Some(button) {
            base.add_modifier(Modifier::REVERSED)
        } else {
            base
        }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            return;
        }

        for (pos, button) in self.keypad.buttons_with_positions() {
            let Some(cell) = cell_rect(area, pos) else {
                continue;
            };

            let label = format!("[{}]", button.label());
            let label_width = label.chars().count() as u16;
            let x = cell.x + cell.width.saturating_sub(label_width) / 2;
            let y = cell.y + cell.height / 2;
            buf.set_stringn(
                x,
                y,
                &label,
                cell.width as usize,
                self.button_style(pos, button),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> Rect {
        // 4 columns of 5 cells and 4 rows of 2 cells, plus borders
        Rect::new(0, 0, 22, 10)
    }

    fn rendered(widget: KeypadWidget<'_>, area: Rect) -> Buffer {
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        buf
    }

    fn content(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    // ===== Geometry tests =====

    #[test]
    fn test_cell_rect_first_and_last() {
        assert_eq!(cell_rect(area(), (0, 0)), Some(Rect::new(1, 1, 5, 2)));
        assert_eq!(cell_rect(area(), (3, 3)), Some(Rect::new(16, 7, 5, 2)));
    }

    #[test]
    fn test_cell_rect_out_of_grid() {
        assert_eq!(cell_rect(area(), (4, 0)), None);
        assert_eq!(cell_rect(area(), (0, 4)), None);
    }

    #[test]
    fn test_cell_rect_too_small() {
        assert_eq!(cell_rect(Rect::new(0, 0, 4, 4), (0, 0)), None);
    }

    #[test]
    fn test_hit_test_inside_cells() {
        assert_eq!(hit_test(area(), 1, 1), Some((0, 0)));
        assert_eq!(hit_test(area(), 8, 4), Some((1, 1)));
        assert_eq!(hit_test(area(), 20, 8), Some((3, 3)));
    }

    #[test]
    fn test_hit_test_border() {
        assert_eq!(hit_test(area(), 0, 0), None);
        assert_eq!(hit_test(area(), 21, 5), None);
        assert_eq!(hit_test(area(), 5, 9), None);
    }

    #[test]
    fn test_hit_test_outside() {
        let area = Rect::new(10, 10, 22, 10);
        assert_eq!(hit_test(area, 0, 0), None);
        assert_eq!(hit_test(area, 100, 100), None);
    }

    #[test]
    fn test_hit_test_matches_cell_rect() {
        for row in 0..Keypad::ROWS {
            for col in 0..Keypad::COLS {
                let cell = cell_rect(area(), (row, col)).unwrap();
                assert_eq!(hit_test(area(), cell.x, cell.y), Some((row, col)));
                assert_eq!(
                    hit_test(area(), cell.x + cell.width - 1, cell.y + cell.height - 1),
                    Some((row, col))
                );
            }
        }
    }

    #[test]
    fn test_hit_test_remainder_columns() {
        // Inner width 21 leaves one unused column after four cells of 5
        let area = Rect::new(0, 0, 23, 10);
        assert_eq!(hit_test(area, 21, 2), None);
    }

    // ===== Rendering tests =====

    #[test]
    fn test_render_labels() {
        let keypad = Keypad::new();
        let text = content(&rendered(KeypadWidget::new(&keypad), area()));
        assert!(text.contains("Keypad"));
        for label in ["[7]", "[÷]", "[×]", "[-]", "[C]", "[0]", "[=]", "[+]"] {
            assert!(text.contains(label), "missing {label}");
        }
    }

    #[test]
    fn test_render_too_small_draws_border_only() {
        let keypad = Keypad::new();
        let small = Rect::new(0, 0, 8, 5);
        let text = content(&rendered(KeypadWidget::new(&keypad), small));
        assert!(!text.contains("[7]"));
    }

    #[test]
    fn test_render_focus_highlight() {
        let keypad = Keypad::new();
        let buf = rendered(KeypadWidget::new(&keypad).focus((0, 0)), area());
        let cell = cell_rect(area(), (0, 0)).unwrap();
        // "[7]" is centred in a 5-wide cell, so '7' sits at x + 2
        let seven = &buf[(cell.x + 2, cell.y + 1)];
        assert_eq!(seven.symbol(), "7");
        assert_eq!(seven.bg, Color::Yellow);
    }

    #[test]
    fn test_render_pressed_reversed() {
        let keypad = Keypad::new();
        let buf = rendered(
            KeypadWidget::new(&keypad).pressed(Some(Operation::Add.into())),
            area(),
        );
        let cell = cell_rect(area(), (3, 3)).unwrap();
        let plus = &buf[(cell.x + 2, cell.y + 1)];
        assert_eq!(plus.symbol(), "+");
        assert!(plus.modifier.contains(Modifier::REVERSED));
    }
}
