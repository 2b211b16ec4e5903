//! Interactive terminal session

use std::io;

use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use padcalc::tui::{render, CalculatorApp, InputHandler};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::error::CliResult;

/// Runs the UI until the user quits
///
/// The terminal is restored on every exit path, including a failed
/// terminal setup, before any error reaches the caller.
pub fn run(config: &AppConfig) -> CliResult<()> {
    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    info!(title = %config.title, "session started");
    let mut app = CalculatorApp::with_title(config.title.clone());
    let result = event_loop(&mut terminal, &mut app);
    drop(terminal);

    let restored = guard.restore();
    info!(display = %app.display(), "session ended");
    result.and(restored)
}

/// Raw mode, alternate screen and mouse capture for one session
///
/// Dropping the guard restores the terminal on a best-effort basis;
/// [`TerminalGuard::restore`] does the same and reports the first failure.
struct TerminalGuard {
    restore: Option<fn() -> CliResult<()>>,
}

impl TerminalGuard {
    fn enter() -> CliResult<Self> {
        enable_raw_mode()?;
        let guard = Self::with_restore(restore_terminal);
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }

    fn with_restore(restore: fn() -> CliResult<()>) -> Self {
        Self {
            restore: Some(restore),
        }
    }

    fn restore(mut self) -> CliResult<()> {
        self.restore.take().map_or(Ok(()), |restore| restore())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Some(restore) = self.restore.take() {
            if let Err(err) = restore() {
                warn!(error = %err, "terminal restore failed");
            }
        }
    }
}

/// Runs every restore step, then reports the first that failed
fn restore_terminal() -> CliResult<()> {
    first_error([
        disable_raw_mode(),
        execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture),
        execute!(io::stdout(), Show),
    ])
}

fn first_error<const N: usize>(steps: [io::Result<()>; N]) -> CliResult<()> {
    steps.into_iter().collect::<io::Result<Vec<()>>>()?;
    Ok(())
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut CalculatorApp) -> CliResult<()> {
    let input_handler = InputHandler::new();

    while !app.should_quit() {
        let frame = terminal.draw(|f| render(app, f))?;
        let screen: Rect = frame.area;

        let event = event::read()?;
        let action = input_handler.handle_event(&event);
        debug!(?action, "input");
        app.handle(action, screen);
    }

    Ok(())
}
