use std::io;
use thiserror::Error;

/// Application-wide error type for the CLI harness.
///
/// The brain itself never errors: failure to understand a message is a
/// normal reply, so only the terminal I/O and the JSON output can fail.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents data serialization errors (e.g. the one-shot JSON output).
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("JSON error: {}", err))
    }
}
