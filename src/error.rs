//! Application error type.
//!
//! The shorten flow itself is total and never surfaces here; these are
//! the fallible edges around it: startup, desktop integration, and the
//! interactive terminal.

use thiserror::Error;

/// Errors raised outside the shorten flow.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Browser error: {0}")]
    Browser(String),

    #[error(transparent)]
    Prompt(#[from] dialoguer::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for CLI operations.
pub type AppResult<T> = Result<T, AppError>;
