//! flightdb - A strict, deterministic flight-schedule ingestion and query tool
//!
//! Pipeline: validate raw CSV rows against a fixed field grammar
//! (accumulating every violation per row), persist the valid records as a
//! human-readable JSON database, and answer partial-match filter queries
//! against it.

pub mod cli;
pub mod ingest;
pub mod observability;
pub mod query;
pub mod record;
pub mod store;
pub mod validate;
