//! Turns raw CSV rows into [`Question`]s according to a [`RowSchema`].

use crate::difficulty;
use crate::schema::{CorrectAnswers, DifficultySource, RowSchema};
use crate::types::{Question, SkipReason};

/// Result of normalizing one data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Question(Question),
    Skipped(SkipReason),
}

/// Row normalizer bound to one schema for the whole run.
#[derive(Debug, Clone)]
pub struct Normalizer {
    schema: RowSchema,
}

impl Normalizer {
    pub fn new(schema: impl Into<RowSchema>) -> Self {
        Self {
            schema: schema.into(),
        }
    }

    pub fn schema(&self) -> &RowSchema {
        &self.schema
    }

    /// Normalize one data row. Columns past the end of the row read as empty.
    pub fn normalize<S: AsRef<str>>(&self, row: &[S]) -> RowOutcome {
        if row.iter().all(|c| c.as_ref().is_empty()) {
            return RowOutcome::Skipped(SkipReason::EmptyRow);
        }

        let question_type = cell(row, 0).trim().trim_matches('"');
        if question_type.is_empty() {
            return RowOutcome::Skipped(SkipReason::EmptyType);
        }

        if let Some(accepted) = self.schema.type_filter {
            if !question_type.eq_ignore_ascii_case(accepted) {
                return RowOutcome::Skipped(SkipReason::FilteredType(question_type.to_string()));
            }
        }

        let text = cell(row, self.schema.text_column);
        if text.trim().is_empty() {
            return RowOutcome::Skipped(SkipReason::EmptyText);
        }

        // Tags are written verbatim into frontmatter, which trims on read.
        let parent_category = cell(row, 1).trim();
        let category = cell(row, 2).trim();

        let correct_markers = match self.schema.correct {
            CorrectAnswers::LetterList { column } => cell(row, column)
                .split(',')
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(String::from)
                .collect(),
            CorrectAnswers::SingleLetter { column } => {
                let marker = cell(row, column).trim();
                if marker.is_empty() {
                    vec![]
                } else {
                    vec![marker.to_string()]
                }
            }
        };

        let answers = self
            .schema
            .answer_columns
            .clone()
            .map(|j| cell(row, j))
            .filter(|a| !a.is_empty())
            .map(String::from)
            .collect();

        let difficulty_input = match self.schema.difficulty_source {
            DifficultySource::QuestionText => text,
            DifficultySource::ParentCategory => parent_category,
        };
        let difficulty = difficulty::determine(self.schema.difficulty, difficulty_input);

        let mut tags = Vec::with_capacity(3);
        if self.schema.type_in_tags {
            tags.push(question_type.to_string());
        }
        tags.extend(
            [parent_category, category]
                .into_iter()
                .filter(|t| !t.is_empty())
                .map(String::from),
        );

        RowOutcome::Question(Question {
            question_type: question_type.to_string(),
            parent_category: parent_category.to_string(),
            category: category.to_string(),
            text: text.to_string(),
            correct_markers,
            answers,
            difficulty,
            tags,
        })
    }
}

fn cell<S: AsRef<str>>(row: &[S], index: usize) -> &str {
    row.get(index).map(AsRef::as_ref).unwrap_or("")
}
