//! Ingest error types.
//!
//! Error codes:
//! - FDB_SOURCE_NOT_FOUND: the input file or directory does not exist
//! - FDB_SOURCE_READ_FAILED: the source exists but could not be read
//! - FDB_ERROR_LOG_WRITE_FAILED: the diagnostic log could not be written
//!
//! Per-row violations are never errors; they become diagnostics and the
//! batch continues. Everything here is source-level and aborts the batch.

use std::fmt;
use std::io;
use std::path::Path;

/// Ingest-specific error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestErrorCode {
    /// Input file or directory does not exist
    SourceNotFound,
    /// Input exists but reading it failed
    SourceReadFailed,
    /// Diagnostic log write failed
    LogWriteFailed,
}

impl IngestErrorCode {
    /// Returns the stable string code.
    pub fn code(&self) -> &'static str {
        match self {
            IngestErrorCode::SourceNotFound => "FDB_SOURCE_NOT_FOUND",
            IngestErrorCode::SourceReadFailed => "FDB_SOURCE_READ_FAILED",
            IngestErrorCode::LogWriteFailed => "FDB_ERROR_LOG_WRITE_FAILED",
        }
    }
}

impl fmt::Display for IngestErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Source-level ingest failure.
#[derive(Debug)]
pub struct IngestError {
    code: IngestErrorCode,
    message: String,
    source: Option<io::Error>,
}

impl IngestError {
    /// Input file or directory not found.
    pub fn source_not_found(path: &Path) -> Self {
        Self {
            code: IngestErrorCode::SourceNotFound,
            message: format!("File/folder not found: {}", path.display()),
            source: None,
        }
    }

    /// Reading the source failed after it was found.
    pub fn read_failed(path: &Path, source: io::Error) -> Self {
        Self {
            code: IngestErrorCode::SourceReadFailed,
            message: format!("Failed to read source: {}", path.display()),
            source: Some(source),
        }
    }

    /// Writing the diagnostic log failed.
    pub fn log_write_failed(path: &Path, source: io::Error) -> Self {
        Self {
            code: IngestErrorCode::LogWriteFailed,
            message: format!("Failed to write error log: {}", path.display()),
            source: Some(source),
        }
    }

    /// Classifies an I/O failure on `path` as not-found or read-failed.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::source_not_found(path)
        } else {
            Self::read_failed(path, source)
        }
    }

    /// Returns the error code.
    pub fn code(&self) -> IngestErrorCode {
        self.code
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for IngestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)?;
        if let Some(ref source) = self.source {
            write!(f, " ({})", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for IngestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Result type for ingest operations.
pub type IngestResult<T> = Result<T, IngestError>;
