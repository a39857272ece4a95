//! Error types for the extenso command.

use rentify_core::{CoreError, ValidationError};

/// Failures while processing one input or writing its output.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Core(#[from] CoreError),

    #[error("Invalid amount: {0}")]
    Validation(#[from] ValidationError),

    #[error("Could not encode output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CliResult<T> = Result<T, CliError>;
