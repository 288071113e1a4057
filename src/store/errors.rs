//! Database store error types.
//!
//! Error codes:
//! - FDB_DB_NOT_FOUND: database file does not exist
//! - FDB_DB_READ_FAILED: database file exists but could not be read
//! - FDB_DB_WRITE_FAILED: serialization or the atomic replace failed
//! - FDB_DB_FORMAT_INVALID: the file parsed but is not a list of records

use std::fmt;
use std::io;
use std::path::Path;

/// Store-specific error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorCode {
    /// Database file does not exist
    DbNotFound,
    /// Database read failed
    DbReadFailed,
    /// Database write failed
    DbWriteFailed,
    /// Top-level shape or record shape invalid
    DbFormatInvalid,
}

impl StoreErrorCode {
    /// Returns the stable string code.
    pub fn code(&self) -> &'static str {
        match self {
            StoreErrorCode::DbNotFound => "FDB_DB_NOT_FOUND",
            StoreErrorCode::DbReadFailed => "FDB_DB_READ_FAILED",
            StoreErrorCode::DbWriteFailed => "FDB_DB_WRITE_FAILED",
            StoreErrorCode::DbFormatInvalid => "FDB_DB_FORMAT_INVALID",
        }
    }
}

impl fmt::Display for StoreErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Database store failure.
#[derive(Debug)]
pub struct StoreError {
    code: StoreErrorCode,
    message: String,
    source: Option<io::Error>,
}

impl StoreError {
    /// Database file not found.
    pub fn not_found(path: &Path) -> Self {
        Self {
            code: StoreErrorCode::DbNotFound,
            message: format!("Database file not found: {}", path.display()),
            source: None,
        }
    }

    /// Reading the database file failed.
    pub fn read_failed(path: &Path, source: io::Error) -> Self {
        Self {
            code: StoreErrorCode::DbReadFailed,
            message: format!("Failed to read database: {}", path.display()),
            source: Some(source),
        }
    }

    /// Writing the database file failed.
    pub fn write_failed(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            code: StoreErrorCode::DbWriteFailed,
            message: message.into(),
            source: Some(source),
        }
    }

    /// The file parsed as JSON but does not hold a list of flight records.
    pub fn format_invalid(message: impl Into<String>) -> Self {
        Self {
            code: StoreErrorCode::DbFormatInvalid,
            message: message.into(),
            source: None,
        }
    }

    /// Classifies an I/O failure on `path` as not-found or read-failed.
    pub fn from_read_io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::not_found(path)
        } else {
            Self::read_failed(path, source)
        }
    }

    /// Returns the error code.
    pub fn code(&self) -> StoreErrorCode {
        self.code
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)?;
        if let Some(ref source) = self.source {
            write!(f, " ({})", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
