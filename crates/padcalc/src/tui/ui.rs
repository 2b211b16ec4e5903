//! Screen rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::{KeypadWidget, MIN_HEIGHT};

/// One-line usage hint under the keypad
pub const HELP_LINE: &str = "arrows move · Enter press · click · q quit";

/// Screen regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Display panel
    pub display: Rect,
    /// Keypad grid, borders included
    pub keypad: Rect,
    /// Help line
    pub help: Rect,
}

/// Splits the terminal area into display, keypad and help regions
///
/// Rendering and click hit-testing both go through this, so a click always
/// lands on the button drawn under it.
#[must_use]
pub fn screen_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),       // Display
            Constraint::Min(MIN_HEIGHT), // Keypad
            Constraint::Length(1),       // Help
        ])
        .split(area);

    ScreenLayout {
        display: chunks[0],
        keypad: chunks[1],
        help: chunks[2],
    }
}

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let style = if self.app.machine().is_error() {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        };

        Paragraph::new(Span::styled(self.app.display(), style))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }

    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(HELP_LINE, Style::default().fg(Color::DarkGray)))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(format!(" {} ", self.app.title()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let layout = screen_layout(area);
        self.render_display(layout.display, buf);
        KeypadWidget::new(self.app.keypad())
            .focus(self.app.focus())
            .pressed(self.app.pressed())
            .render(layout.keypad, buf);
        self.render_help(layout.help, buf);
    }
}
