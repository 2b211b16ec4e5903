//! padcalc: keypad calculator for the terminal
//!
//! ## Usage
//!
//! ```bash
//! padcalc                          # Open the calculator
//! padcalc --title "Pad"            # Custom window title
//! padcalc -vv --log-file pad.log   # Trace every press to a file
//! padcalc --press "12×3="          # Press buttons without the UI
//! ```

use clap::Parser;
use padcalc_cli::{logging, runner, script, Cli, CliResult};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = cli.config();
    config.validate()?;

    let interactive = cli.press.is_none();
    logging::init(&config, interactive)?;

    match &cli.press {
        Some(presses) => {
            let display = script::run_script(presses)?;
            println!("{display}");
            Ok(())
        }
        None => runner::run(&config),
    }
}
