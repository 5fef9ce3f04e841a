//! CSV → Markdown conversion run.
//!
//! One synchronous pass: the header record is consumed, every data row is
//! normalized, emitted questions are rendered and handed to an
//! [`OutputSink`]. Nothing is kept in memory past the row that produced it.

use crate::error::{ConvertError, Result};
use crate::normalizer::{Normalizer, RowOutcome};
use crate::render;
use crate::schema::RowSchema;
use crate::types::SkipReason;
use std::fs::File;
use std::io;
use std::path::Path;

/// Destination for rendered question files.
pub trait OutputSink {
    /// Store `content` under `filename`.
    fn write(&mut self, filename: &str, content: &str) -> io::Result<()>;
}

impl<T: OutputSink + ?Sized> OutputSink for &mut T {
    fn write(&mut self, filename: &str, content: &str) -> io::Result<()> {
        (**self).write(filename, content)
    }
}

/// A data row that produced no file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based data row number, header excluded. Blank lines count as rows.
    pub row: usize,
    pub reason: SkipReason,
}

/// A rendered question the sink failed to store.
#[derive(Debug)]
pub struct FailedWrite {
    pub filename: String,
    pub error: io::Error,
}

/// Outcome of a conversion run.
#[derive(Debug, Default)]
pub struct ConversionReport {
    pub created: Vec<String>,
    pub skipped: Vec<SkippedRow>,
    pub failed: Vec<FailedWrite>,
}

/// Convert CSV data from `reader` into question files.
///
/// Fails only for problems with the input as a whole: a missing header row
/// or an I/O error from the reader. Per-row problems end up in the report.
pub fn convert<R, O>(reader: R, schema: &RowSchema, mut sink: O) -> Result<ConversionReport>
where
    R: io::Read,
    O: OutputSink,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut record = csv::StringRecord::new();

    if !csv_reader.read_record(&mut record)? {
        return Err(ConvertError::MalformedInput(
            "missing header row".to_string(),
        ));
    }
    let mut line = csv_reader.position().line();

    let normalizer = Normalizer::new(schema.clone());
    let mut report = ConversionReport::default();
    let mut counter = 1;
    let mut next_index = 0;

    loop {
        let read = csv_reader.read_record(&mut record);
        let end = csv_reader.position().line();
        let consumed = end - line;
        line = end;

        let read = match read {
            Ok(false) => break,
            Ok(true) => {
                next_index += blank_lines_before(&record, consumed);
                Ok(())
            }
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => Err(e),
        };
        let row_index = next_index;
        next_index += 1;

        if let Err(e) = read {
            report.skipped.push(SkippedRow {
                row: row_index + 1,
                reason: SkipReason::Unreadable(e.to_string()),
            });
            continue;
        }
        let row: Vec<&str> = record.iter().collect();

        let question = match normalizer.normalize(&row) {
            RowOutcome::Question(question) => question,
            RowOutcome::Skipped(reason) => {
                report.skipped.push(SkippedRow {
                    row: row_index + 1,
                    reason,
                });
                continue;
            }
        };

        let filename = render::filename(schema, counter, row_index, &question);
        let content = render::render(&question, schema);
        counter += 1;

        match sink.write(&filename, &content) {
            Ok(()) => report.created.push(filename),
            Err(error) => report.failed.push(FailedWrite { filename, error }),
        }
    }

    Ok(report)
}

/// Blank lines the reader skipped before `record`, given the number of
/// lines consumed while reading it.
///
/// A final record with no line terminator is one line short, so blank lines
/// right before it are undercounted by one.
fn blank_lines_before(record: &csv::StringRecord, consumed: u64) -> usize {
    let own_lines = 1 + record.iter().map(|f| f.matches('\n').count() as u64).sum::<u64>();
    usize::try_from(consumed.saturating_sub(own_lines)).unwrap_or(0)
}

/// Convert the CSV file at `path`.
pub fn convert_file<P, O>(path: P, schema: &RowSchema, sink: O) -> Result<ConversionReport>
where
    P: AsRef<Path>,
    O: OutputSink,
{
    let path = path.as_ref();
    if !path.exists() {
        return Err(ConvertError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path)?;
    convert(file, schema, sink)
}
