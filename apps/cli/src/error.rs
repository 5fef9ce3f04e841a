//! Error handling for the quizmark binary

use quiz_core::ConvertError;
use thiserror::Error;

/// Fatal errors. Each one ends the process with a one-line message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Usage(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Watcher error: {0:#}")]
    Watch(#[from] anyhow::Error),
}

impl AppError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Usage(_)
            | AppError::Config(_)
            | AppError::Convert(_)
            | AppError::Io(_)
            | AppError::Watch(_) => 1,
        }
    }
}

/// Result type alias for application operations
pub type Result<T> = std::result::Result<T, AppError>;
