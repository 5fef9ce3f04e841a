//! Reader for the frontmatter block written by [`render`](crate::render::render).
//!
//! # Format
//! ```markdown
//! ---
//! difficulty: 3
//! tags: multiplechoice, Advanced Topics, Hooks
//! ---
//! ```

use crate::error::ParseError;
use crate::types::Difficulty;
use serde::{Deserialize, Serialize};

/// Metadata recovered from a rendered question file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frontmatter {
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
}

enum LineType<'a> {
    Delimiter,
    Difficulty(&'a str),
    Tags(&'a str),
    Other,
}

fn parse_line(line: &str) -> LineType<'_> {
    let trimmed = line.trim();

    if trimmed == "---" {
        LineType::Delimiter
    } else if let Some(rest) = trimmed.strip_prefix("difficulty:") {
        LineType::Difficulty(rest.trim())
    } else if let Some(rest) = trimmed.strip_prefix("tags:") {
        LineType::Tags(rest.trim())
    } else {
        LineType::Other
    }
}

/// Parse the leading `---` block of a question file.
pub fn parse_frontmatter(content: &str) -> Result<Frontmatter, ParseError> {
    let mut lines = content.lines();
    if !matches!(lines.next().map(parse_line), Some(LineType::Delimiter)) {
        return Err(ParseError::MissingDelimiter);
    }

    let mut difficulty = None;
    let mut tags = None;
    let mut closed = false;

    for line in lines {
        match parse_line(line) {
            LineType::Delimiter => {
                closed = true;
                break;
            }
            LineType::Difficulty(value) => {
                let parsed = value
                    .parse::<u8>()
                    .ok()
                    .and_then(Difficulty::from_value)
                    .ok_or_else(|| ParseError::InvalidDifficulty {
                        value: value.to_string(),
                    })?;
                difficulty = Some(parsed);
            }
            LineType::Tags(value) => {
                tags = Some(
                    value
                        .split(", ")
                        .map(str::trim)
                        .filter(|t| !t.is_empty())
                        .map(String::from)
                        .collect(),
                );
            }
            LineType::Other => {}
        }
    }

    if !closed {
        return Err(ParseError::MissingDelimiter);
    }

    Ok(Frontmatter {
        difficulty: difficulty.ok_or(ParseError::MissingField {
            field: "difficulty",
        })?,
        tags: tags.ok_or(ParseError::MissingField { field: "tags" })?,
    })
}
