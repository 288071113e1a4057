//! Batch parsing of CSV sources.
//!
//! Drives the row validator over one file or a whole directory, handling the
//! structural concerns a row never sees: blank lines, the header line,
//! comment lines. Valid records come back in file order; files within a
//! directory are processed strictly sequentially in lexicographically sorted
//! path order, which is an observable contract (it fixes both database order
//! and error-log order).

use std::fs;
use std::path::{Path, PathBuf};

use crate::record::FlightRecord;
use crate::validate::{validate_row, RowOutcome};

use super::diagnostics::{Diagnostic, DiagnosticLog};
use super::errors::{IngestError, IngestResult};
use super::splitter::split_fields;

/// Case-insensitive prefix that marks the (single, optional) header line.
const HEADER_PREFIX: &str = "flight_id,origin,destination";

/// Lines starting with this marker are comments.
const COMMENT_MARKER: char = '#';

/// Extension of recognized data files when parsing a directory.
const DATA_EXTENSION: &str = "csv";

/// Result of one batch invocation: all valid records across all processed
/// files, plus every diagnostic in file order then line order. The same
/// diagnostics are appended to the shared log as a side effect.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Valid records, insertion order = file order.
    pub records: Vec<FlightRecord>,
    /// One entry per malformed or comment line.
    pub diagnostics: Vec<Diagnostic>,
}

impl BatchOutcome {
    fn absorb(&mut self, other: BatchOutcome) {
        self.records.extend(other.records);
        self.diagnostics.extend(other.diagnostics);
    }
}

/// Parses a source path, dispatching on whether it is a file or a directory.
///
/// The caller creates the diagnostic log (truncating it) before the batch
/// starts; this function only appends.
pub fn parse_source(path: &Path, log: &mut DiagnosticLog) -> IngestResult<BatchOutcome> {
    let metadata = fs::metadata(path).map_err(|e| IngestError::from_io(path, e))?;

    let outcome = if metadata.is_dir() {
        parse_directory(path, log)?
    } else {
        parse_file(path, log)?
    };

    log.flush()?;
    Ok(outcome)
}

/// Parses every `.csv` file in `dir` in sorted path order, concatenating
/// results.
pub fn parse_directory(dir: &Path, log: &mut DiagnosticLog) -> IngestResult<BatchOutcome> {
    let entries = fs::read_dir(dir).map_err(|e| IngestError::from_io(dir, e))?;

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| IngestError::read_failed(dir, e))?;
        let path = entry.path();
        let is_data_file = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(DATA_EXTENSION));
        if path.is_file() && is_data_file {
            paths.push(path);
        }
    }
    paths.sort();

    let mut combined = BatchOutcome::default();
    for path in &paths {
        combined.absorb(parse_file(path, log)?);
    }

    Ok(combined)
}

/// Parses a single CSV file.
///
/// Per-line handling, in file order:
/// - blank (whitespace-only) lines are skipped silently;
/// - the first non-blank line whose lowercase form starts with the header
///   prefix is consumed as the header (once per file);
/// - `#`-prefixed lines become informational diagnostics;
/// - everything else is comma-split and row-validated.
pub fn parse_file(path: &Path, log: &mut DiagnosticLog) -> IngestResult<BatchOutcome> {
    let contents = fs::read_to_string(path).map_err(|e| IngestError::from_io(path, e))?;

    let mut outcome = BatchOutcome::default();
    let mut header_skipped = false;

    for (idx, original_line) in contents.lines().enumerate() {
        let line_no = idx + 1;

        let stripped = original_line.trim();
        if stripped.is_empty() {
            continue;
        }

        if !header_skipped && stripped.to_lowercase().starts_with(HEADER_PREFIX) {
            header_skipped = true;
            continue;
        }

        if stripped.starts_with(COMMENT_MARKER) {
            let diag = Diagnostic::comment(line_no, original_line);
            log.append(&diag)?;
            outcome.diagnostics.push(diag);
            continue;
        }

        let fields = split_fields(original_line);
        match validate_row(&fields, line_no, original_line) {
            RowOutcome::Valid(record) => outcome.records.push(record),
            RowOutcome::Invalid(diag) => {
                log.append(&diag)?;
                outcome.diagnostics.push(diag);
            }
        }
    }

    Ok(outcome)
}
