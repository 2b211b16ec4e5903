//! CLI argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

use crate::config::{AppConfig, Verbosity};

/// Keypad calculator for the terminal
///
/// Click a button or move the highlight with the arrow keys and press
/// Enter. Digits, operators and equals are only entered through the keypad.
#[derive(Parser, Debug)]
#[command(name = "padcalc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (log errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Window title
    #[arg(long, env = "PADCALC_TITLE")]
    pub title: Option<String>,

    /// Write tracing output to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Press buttons by label without opening the UI, then print the display
    ///
    /// Labels are 0-9, + - × ÷ (or * /), = and C.
    #[arg(long, value_name = "LABELS")]
    pub press: Option<String>,
}

impl Cli {
    /// Builds the application configuration from the parsed arguments
    #[must_use]
    pub fn config(&self) -> AppConfig {
        let mut config =
            AppConfig::new().with_verbosity(Verbosity::from_flags(self.quiet, self.verbose));
        if let Some(title) = &self.title {
            config = config.with_title(title.clone());
        }
        if let Some(path) = &self.log_file {
            config = config.with_log_file(path.clone());
        }
        config
    }
}
