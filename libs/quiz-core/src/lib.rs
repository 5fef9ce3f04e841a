//! Core quiz conversion library shared by the CLI and its tests.
//!
//! Provides:
//! - Named CSV row schemas and the row normalizer
//! - Bracket markup translation and difficulty heuristics
//! - Markdown rendering, file naming and a frontmatter reader
//! - The single-pass conversion pipeline over an output sink

pub mod difficulty;
pub mod error;
pub mod frontmatter;
pub mod markup;
pub mod normalizer;
pub mod pipeline;
pub mod render;
pub mod schema;
pub mod types;

pub use error::{ConvertError, ParseError, Result};
pub use frontmatter::{parse_frontmatter, Frontmatter};
pub use normalizer::{Normalizer, RowOutcome};
pub use pipeline::{convert, convert_file, ConversionReport, FailedWrite, OutputSink, SkippedRow};
pub use render::{filename, render, sanitize_filename};
pub use schema::{RowSchema, SchemaKind, UnknownSchema};
pub use types::{Difficulty, Question, QuestionKind, SkipReason};
