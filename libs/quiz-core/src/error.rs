//! Error types for quiz-core.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ConvertError.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors that abort a whole conversion run.
///
/// Problems confined to a single row never surface here; they are
/// recorded in the [`ConversionReport`](crate::pipeline::ConversionReport).
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("file '{}' not found", path.display())]
    InputNotFound { path: PathBuf },

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while reading a rendered frontmatter block.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing frontmatter delimiter")]
    MissingDelimiter,

    #[error("missing frontmatter field '{field}'")]
    MissingField { field: &'static str },

    #[error("invalid difficulty: {value}")]
    InvalidDifficulty { value: String },
}
