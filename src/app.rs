//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use everylog::EverylogError;
use everylog::settings::{SettingsError, field};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    use everylog::EverylogError;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - invalid args, bad credentials, invalid entry, etc.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Runtime error (exit code 2) - rejected entry, network failure, etc.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }

    /// Maps a client error to its exit code.
    pub fn for_error(error: &EverylogError) -> ExitCode {
        if error.is_local() {
            CONFIG_ERROR
        } else {
            runtime_error()
        }
    }
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &SettingsError) {
    match error {
        SettingsError::MissingRequired { field: f, .. } => {
            if *f == field::API_KEY || *f == field::PROJECT_ID {
                eprintln!("\nRun 'everylog init' to generate a configuration template.");
            }
        }
        SettingsError::FileRead { .. } => {
            eprintln!("\nRun 'everylog init' to generate a configuration template.");
        }
        _ => {}
    }
}

/// Prints a client error to stderr, with the status for remote failures.
pub fn print_error(error: &EverylogError) {
    match error {
        EverylogError::Notification { message, status } => {
            eprintln!("Error: entry rejected ({status}): {message}");
        }
        EverylogError::Generic { message, .. } => {
            eprintln!("Error: entry not delivered: {message}");
        }
        other => eprintln!("Error: {other}"),
    }
}

/// Sets up the tracing subscriber for logging.
///
/// Logs go to stderr so stdout carries only the command output.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
