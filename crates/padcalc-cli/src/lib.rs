//! padcalc CLI library
//!
//! Argument parsing, configuration, logging setup and the terminal session
//! for the `padcalc` binary.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod logging;
pub mod runner;
pub mod script;

pub use commands::Cli;
pub use config::{AppConfig, Verbosity};
pub use error::{CliError, CliResult};
