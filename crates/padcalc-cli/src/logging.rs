//! Tracing subscriber setup
//!
//! The UI owns the terminal, so interactive runs only log when a file is
//! given. Scripted runs may also log to stderr.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, Verbosity};
use crate::error::{CliError, CliResult};

/// Where log lines go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    /// Append to a file
    File(&'a Path),
    /// Write to stderr
    Stderr,
    /// Logging disabled
    Off,
}

/// Picks the log target for a run
#[must_use]
pub fn target(config: &AppConfig, interactive: bool) -> LogTarget<'_> {
    match &config.log_file {
        Some(path) => LogTarget::File(path),
        None if !interactive && config.verbosity.is_verbose() => LogTarget::Stderr,
        None => LogTarget::Off,
    }
}

/// Builds the filter, letting `RUST_LOG` override the verbosity flags
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.log_directive()))
}

/// Installs the global subscriber
pub fn init(config: &AppConfig, interactive: bool) -> CliResult<()> {
    let filter = env_filter(config.verbosity);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    match target(config, interactive) {
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| CliError::logging(e.to_string()))
        }
        LogTarget::Stderr => builder
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| CliError::logging(e.to_string())),
        LogTarget::Off => Ok(()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_target_file_wins() {
        let config = AppConfig::new()
            .with_verbosity(Verbosity::Debug)
            .with_log_file("pad.log");
        assert_eq!(
            target(&config, true),
            LogTarget::File(&PathBuf::from("pad.log"))
        );
        assert_eq!(
            target(&config, false),
            LogTarget::File(&PathBuf::from("pad.log"))
        );
    }

    #[test]
    fn test_target_interactive_without_file_is_off() {
        let config = AppConfig::new().with_verbosity(Verbosity::Debug);
        assert_eq!(target(&config, true), LogTarget::Off);
    }

    #[test]
    fn test_target_scripted_verbose_uses_stderr() {
        let config = AppConfig::new().with_verbosity(Verbosity::Verbose);
        assert_eq!(target(&config, false), LogTarget::Stderr);
    }

    #[test]
    fn test_target_scripted_normal_is_off() {
        assert_eq!(target(&AppConfig::new(), false), LogTarget::Off);
    }

    #[test]
    fn test_init_off_is_noop() {
        assert!(init(&AppConfig::new(), true).is_ok());
    }

    #[test]
    fn test_init_bad_log_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("pad.log");
        let config = AppConfig::new().with_log_file(path);
        assert!(matches!(init(&config, true), Err(CliError::Io(_))));
    }
}
