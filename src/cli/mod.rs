//! CLI module for FlightDB
//!
//! Provides the command-line interface:
//! - ingest: parse a CSV file or directory into the JSON database
//! - query: run filter queries against an existing database

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{ingest, query, run};
pub use errors::{CliError, CliResult};
