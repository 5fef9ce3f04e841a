//! Core types for quiz conversion.

use serde::{Deserialize, Serialize};

/// Question types with dedicated rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    MultipleChoice,
    MultipleResponse,
    Matching,
    /// Anything else; rendered as a plain question with an answer list.
    Other,
}

impl QuestionKind {
    /// Classify the raw type cell. Comparison is exact.
    pub fn classify(raw: &str) -> Self {
        match raw {
            "multiplechoice" => Self::MultipleChoice,
            "multipleresponse" => Self::MultipleResponse,
            "matching" => Self::Matching,
            _ => Self::Other,
        }
    }
}

/// Difficulty level written to the frontmatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Basics,
    Intermediate,
    Advanced,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Basics
    }
}

impl Difficulty {
    /// Convert to the numeric value (1-3).
    pub fn to_value(self) -> u8 {
        match self {
            Self::Basics => 1,
            Self::Intermediate => 2,
            Self::Advanced => 3,
        }
    }

    /// Create from numeric value.
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Basics),
            2 => Some(Self::Intermediate),
            3 => Some(Self::Advanced),
            _ => None,
        }
    }
}

/// One normalized CSV row, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Type cell with surrounding quotes stripped, original casing kept.
    pub question_type: String,
    pub parent_category: String,
    pub category: String,
    pub text: String,
    pub correct_markers: Vec<String>,
    pub answers: Vec<String>,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
}

impl Question {
    pub fn kind(&self) -> QuestionKind {
        QuestionKind::classify(&self.question_type)
    }

    /// Whether the answer at `index` carries a correct marker.
    ///
    /// Answers are lettered `A`, `B`, ... in column order.
    pub fn is_correct(&self, index: usize) -> bool {
        answer_letter(index)
            .map(|letter| self.correct_markers.iter().any(|m| m == letter.as_str()))
            .unwrap_or(false)
    }
}

/// Letter assigned to the answer at `index` (`0` → `A`).
pub fn answer_letter(index: usize) -> Option<String> {
    u8::try_from(index)
        .ok()
        .and_then(|i| b'A'.checked_add(i))
        .map(|b| char::from(b).to_string())
}

/// Why a data row produced no file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// No cells, or every cell empty.
    EmptyRow,
    /// Question type cell empty after stripping quotes.
    EmptyType,
    /// Type not accepted by the active schema's filter.
    FilteredType(String),
    /// Question text cell missing or blank.
    EmptyText,
    /// The CSV reader could not decode the record.
    Unreadable(String),
}
