//! Structured logging for CLI progress and failure reporting.

mod logger;

pub use logger::{Logger, Severity};
