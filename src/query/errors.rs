//! Query loading error types.
//!
//! Only source-level problems are errors here: a missing or unreadable query
//! file, or a top-level JSON shape that is neither an object nor an array of
//! objects. An unparsable filter *value* is never an error; the filter just
//! matches nothing.

use thiserror::Error;

/// Result type for query loading.
pub type QueryResult<T> = Result<T, QueryError>;

/// Query input errors.
#[derive(Debug, Clone, Error)]
pub enum QueryError {
    #[error("Query file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to read query file {0}: {1}")]
    ReadFailed(String, String),

    #[error("Query JSON is not valid: {0}")]
    InvalidJson(String),

    #[error("Query JSON must be an object or an array of objects")]
    InvalidShape,
}

impl QueryError {
    /// Returns the stable string code.
    pub fn code(&self) -> &'static str {
        match self {
            QueryError::FileNotFound(_) => "FDB_QUERY_NOT_FOUND",
            QueryError::ReadFailed(_, _) => "FDB_QUERY_READ_FAILED",
            QueryError::InvalidJson(_) | QueryError::InvalidShape => "FDB_QUERY_SHAPE_INVALID",
        }
    }
}
