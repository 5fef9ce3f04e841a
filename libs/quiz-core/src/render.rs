//! Markdown rendering and output file naming.
//!
//! # Format
//! ```markdown
//! ---
//! difficulty: 2
//! tags: multiplechoice, JavaScript, Closures
//! ---
//!
//! Question text
//!
//! # Correct
//!
//! Right answer
//!
//! #
//!
//! Wrong answer
//!
//! ```

use crate::markup;
use crate::schema::{FileNaming, RowSchema};
use crate::types::{Question, QuestionKind};
use regex::Regex;
use std::borrow::Cow;
use std::fmt::Write;
use std::sync::LazyLock;

static UNSAFE_FILENAME_CHARS: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"[^\w\-.]") {
    Ok(regex) => regex,
    Err(err) => panic!("hardcoded filename regex must compile: {err}"),
});

/// Characters of question text kept in descriptive filenames.
const FILENAME_PREFIX_CHARS: usize = 30;

/// Render one question as a Markdown document.
pub fn render(question: &Question, schema: &RowSchema) -> String {
    let body = |text: &str| -> String {
        if schema.translate_markup {
            markup::translate(text)
        } else {
            text.to_string()
        }
    };

    let mut out = String::new();
    out.push_str("---\n");
    let _ = writeln!(out, "difficulty: {}", question.difficulty.to_value());
    let _ = writeln!(out, "tags: {}", question.tags.join(", "));
    out.push_str("---\n\n");
    let _ = write!(out, "{}\n\n", body(&question.text));

    if schema.matching_pairs && question.kind() == QuestionKind::Matching {
        for pair in question.answers.chunks_exact(2) {
            let _ = write!(out, "# {} -> {}\n\n", body(&pair[0]), body(&pair[1]));
        }
        return out;
    }
    if !schema.answers_for_other_types && question.kind() == QuestionKind::Other {
        return out;
    }

    for (index, answer) in question.answers.iter().enumerate() {
        let marker = if question.is_correct(index) {
            "# Correct"
        } else {
            "#"
        };
        let _ = write!(out, "{}\n\n{}\n\n", marker, body(answer));
    }

    out
}

/// Output filename for an emitted question.
///
/// `counter` is the 1-based count of emitted questions; `row_index` is the
/// 0-based position of the data row (header excluded, skipped rows included).
pub fn filename(schema: &RowSchema, counter: usize, row_index: usize, question: &Question) -> String {
    match schema.naming {
        FileNaming::Counter => format!("{counter:03}.md"),
        FileNaming::RowIndexWithPrefix => {
            let prefix: String = question.text.chars().take(FILENAME_PREFIX_CHARS).collect();
            format!("{:03}_{}.md", row_index + 1, sanitize_filename(&prefix))
        }
    }
}

/// Replace every character that is not a word character, `-` or `.` with `_`.
pub fn sanitize_filename(name: &str) -> Cow<'_, str> {
    UNSAFE_FILENAME_CHARS.replace_all(name, "_")
}
