//! CSV ingestion subsystem.
//!
//! One batch invocation reads a file or a directory of files, validates
//! every data row, and splits the input into valid records and diagnostics.
//! The diagnostic log is truncated once at batch start and shared across all
//! files of the batch.
//!
//! # Design principles
//!
//! - Per-row violations never abort the batch; they become diagnostics.
//! - Source-level failures (missing file, unreadable directory) abort the
//!   whole operation with a typed error.
//! - Files are processed sequentially in sorted path order; that order is
//!   observable in both the database and the error log.

mod batch;
mod diagnostics;
mod errors;
mod splitter;

pub use batch::{parse_directory, parse_file, parse_source, BatchOutcome};
pub use diagnostics::{Diagnostic, DiagnosticLog};
pub use errors::{IngestError, IngestErrorCode, IngestResult};
pub use splitter::split_fields;
