//! Diagnostics and the shared batch error log.
//!
//! A diagnostic is a reporting artifact, not an entity: it is regenerated
//! fresh on every run and never persisted to the database. The log file is
//! truncated once when the handle is created, at the start of the batch, and
//! every diagnostic across all source files is appended to the same handle.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::errors::{IngestError, IngestResult};

/// Why one raw line was not accepted as a flight record.
///
/// Comment lines produce diagnostics too; they share the same log line
/// format as data errors and are not tagged differently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    line_no: usize,
    original_line: String,
    reasons: Vec<String>,
}

impl Diagnostic {
    /// Creates a diagnostic for the given 1-based line number.
    pub fn new(line_no: usize, original_line: &str, reasons: Vec<String>) -> Self {
        Self {
            line_no,
            original_line: original_line.to_string(),
            reasons,
        }
    }

    /// The informational diagnostic emitted for `#`-prefixed lines.
    pub fn comment(line_no: usize, original_line: &str) -> Self {
        Self::new(
            line_no,
            original_line,
            vec!["comment line, ignored for data parsing".to_string()],
        )
    }

    /// 1-based line number within the source file.
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    /// The unsplit line text as read from the source.
    pub fn original_line(&self) -> &str {
        &self.original_line
    }

    /// Violated rules in evaluation order.
    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line {}: {} \u{2192} {}",
            self.line_no,
            self.original_line,
            self.reasons.join(", ")
        )
    }
}

/// The shared error log for one batch invocation.
///
/// Creating the handle truncates the file; the batch parser appends one line
/// per diagnostic in file order then line order. The handle is an explicit
/// resource passed into the batch operation, closed when dropped at batch
/// completion.
pub struct DiagnosticLog {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl DiagnosticLog {
    /// Creates (truncating) the log file at `path`.
    pub fn create(path: &Path) -> IngestResult<Self> {
        let file = File::create(path)
            .map_err(|e| IngestError::log_write_failed(path, e))?;
        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
        })
    }

    /// Appends one diagnostic line.
    pub fn append(&mut self, diagnostic: &Diagnostic) -> IngestResult<()> {
        writeln!(self.writer, "{}", diagnostic)
            .map_err(|e| IngestError::log_write_failed(&self.path, e))
    }

    /// Flushes buffered lines to disk.
    ///
    /// Called once at batch completion; append keeps lines buffered.
    pub fn flush(&mut self) -> IngestResult<()> {
        self.writer
            .flush()
            .map_err(|e| IngestError::log_write_failed(&self.path, e))
    }
}
