//! Named row schemas for the supported CSV exports.
//!
//! Each export format puts the same semantic fields in different columns
//! and renders them slightly differently. A [`RowSchema`] pins all of
//! that down; callers pick one by name through [`SchemaKind`], the shape
//! of the rows is never used to guess.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// Named schema variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchemaKind {
    /// Full export, all question types, mirrored output.
    General,
    /// Older export: React keyword difficulty, matching pairs, descriptive filenames.
    Legacy,
    /// Multiple-choice-only export with bracket markup.
    MultipleChoice,
}

impl Default for SchemaKind {
    fn default() -> Self {
        Self::General
    }
}

impl SchemaKind {
    pub const ALL: [SchemaKind; 3] = [Self::General, Self::Legacy, Self::MultipleChoice];

    /// Get the schema name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Legacy => "legacy",
            Self::MultipleChoice => "multiple-choice",
        }
    }

    /// Column layout and rendering options for this variant.
    pub fn schema(self) -> RowSchema {
        match self {
            Self::General => RowSchema {
                kind: self,
                type_filter: None,
                text_column: 8,
                correct: CorrectAnswers::LetterList { column: 9 },
                answer_columns: 10..20,
                translate_markup: false,
                difficulty: DifficultyRule::Level,
                difficulty_source: DifficultySource::QuestionText,
                type_in_tags: true,
                matching_pairs: false,
                answers_for_other_types: true,
                naming: FileNaming::Counter,
                mirrored: true,
            },
            Self::Legacy => RowSchema {
                kind: self,
                type_filter: None,
                text_column: 8,
                correct: CorrectAnswers::LetterList { column: 9 },
                answer_columns: 10..20,
                translate_markup: false,
                difficulty: DifficultyRule::Keyword,
                difficulty_source: DifficultySource::QuestionText,
                type_in_tags: false,
                matching_pairs: true,
                answers_for_other_types: false,
                naming: FileNaming::RowIndexWithPrefix,
                mirrored: false,
            },
            Self::MultipleChoice => RowSchema {
                kind: self,
                type_filter: Some("multiplechoice"),
                text_column: 7,
                correct: CorrectAnswers::SingleLetter { column: 8 },
                answer_columns: 9..13,
                translate_markup: true,
                difficulty: DifficultyRule::Level,
                difficulty_source: DifficultySource::ParentCategory,
                type_in_tags: true,
                matching_pairs: false,
                answers_for_other_types: true,
                naming: FileNaming::Counter,
                mirrored: true,
            },
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a schema name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown schema '{0}' (expected general, legacy or multiple-choice)")]
pub struct UnknownSchema(pub String);

impl FromStr for SchemaKind {
    type Err = UnknownSchema;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "general" => Ok(Self::General),
            "legacy" => Ok(Self::Legacy),
            "multiple-choice" | "multiplechoice" | "mc" => Ok(Self::MultipleChoice),
            other => Err(UnknownSchema(other.to_string())),
        }
    }
}

/// Where the correct-answer letters live and how they are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrectAnswers {
    /// Comma-separated letters, e.g. `A,C`.
    LetterList { column: usize },
    /// A single letter.
    SingleLetter { column: usize },
}

/// Which keyword table maps text to a difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyRule {
    /// `Advanced` / `Intermediate` / `Basics`.
    Level,
    /// `Hook`, `React.Fragment` / `JSX`, `props`.
    Keyword,
}

/// Field the difficulty rule is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultySource {
    QuestionText,
    ParentCategory,
}

/// Output filename strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileNaming {
    /// `001.md`, `002.md`, ... counting emitted questions only.
    Counter,
    /// `<data row index>_<sanitized text prefix>.md`.
    RowIndexWithPrefix,
}

/// Complete column mapping and rendering configuration for one export format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSchema {
    pub kind: SchemaKind,
    /// Only rows whose type equals this (ASCII case-insensitive) are kept.
    pub type_filter: Option<&'static str>,
    pub text_column: usize,
    pub correct: CorrectAnswers,
    /// Half-open range of answer columns.
    pub answer_columns: Range<usize>,
    pub translate_markup: bool,
    pub difficulty: DifficultyRule,
    pub difficulty_source: DifficultySource,
    pub type_in_tags: bool,
    /// Render `matching` questions as clue/match pairs.
    pub matching_pairs: bool,
    /// Render answer blocks for types other than multiple choice, multiple
    /// response and matching. When off, such questions carry only their text.
    pub answers_for_other_types: bool,
    pub naming: FileNaming,
    /// Default run mode: write to both the app and home directories.
    pub mirrored: bool,
}

impl From<SchemaKind> for RowSchema {
    fn from(kind: SchemaKind) -> Self {
        kind.schema()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!("general".parse::<SchemaKind>(), Ok(SchemaKind::General));
        assert_eq!("Legacy".parse::<SchemaKind>(), Ok(SchemaKind::Legacy));
        assert_eq!(
            "multiple-choice".parse::<SchemaKind>(),
            Ok(SchemaKind::MultipleChoice)
        );
        assert!("auto".parse::<SchemaKind>().is_err());
    }

    #[test]
    fn names_round_trip_through_display() {
        for kind in SchemaKind::ALL {
            assert_eq!(kind.to_string().parse::<SchemaKind>(), Ok(kind));
        }
    }

    #[test]
    fn multiple_choice_columns() {
        let schema = SchemaKind::MultipleChoice.schema();
        assert_eq!(schema.text_column, 7);
        assert_eq!(schema.correct, CorrectAnswers::SingleLetter { column: 8 });
        assert_eq!(schema.answer_columns, 9..13);
        assert!(schema.translate_markup);
        assert_eq!(schema.type_filter, Some("multiplechoice"));
    }

    #[test]
    fn general_and_legacy_share_columns_but_not_rendering() {
        let general = SchemaKind::General.schema();
        let legacy = SchemaKind::Legacy.schema();
        assert_eq!(general.text_column, legacy.text_column);
        assert_eq!(general.answer_columns, legacy.answer_columns);
        assert_ne!(general.difficulty, legacy.difficulty);
        assert_ne!(general.naming, legacy.naming);
        assert!(!general.translate_markup && !legacy.translate_markup);
        assert!(general.answers_for_other_types && !legacy.answers_for_other_types);
    }
}
