//! CLI-specific error types.
//!
//! Subsystem errors pass through transparently so their stable `FDB_*`
//! codes survive into the process exit message.

use thiserror::Error;

use crate::ingest::IngestError;
use crate::query::QueryError;
use crate::store::StoreError;

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced to the process boundary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Usage error: {0}")]
    Usage(String),

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Usage error with a short hint.
    pub fn usage(message: impl Into<String>) -> Self {
        CliError::Usage(message.into())
    }
}
