//! Flight database persistence.
//!
//! The database is a single human-readable JSON file: a list of flight
//! record objects with keys in data model order. Saving rewrites the whole
//! file atomically (temp file, fsync, rename); loading validates that the
//! top-level structure really is a list of records.

mod errors;
mod reader;
mod writer;

pub use errors::{StoreError, StoreErrorCode, StoreResult};
pub use reader::load;
pub use writer::save;
