//! CLI argument definitions using clap
//!
//! Commands:
//! - flightdb ingest --input <file> | --input-dir <dir>
//! - flightdb query --db <db.json> --queries <queries.json>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// FlightDB - A strict, deterministic flight-schedule ingestion and query tool
#[derive(Parser, Debug)]
#[command(name = "flightdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a CSV source, write the database and the error log
    Ingest {
        /// Parse a single CSV file
        #[arg(long, conflicts_with = "input_dir")]
        input: Option<PathBuf>,

        /// Parse every .csv file in a directory, in sorted order
        #[arg(long)]
        input_dir: Option<PathBuf>,

        /// Output path for the flight database
        #[arg(long, default_value = "db.json")]
        output: PathBuf,

        /// Path of the diagnostic log (truncated at batch start)
        #[arg(long, default_value = "errors.txt")]
        error_log: PathBuf,
    },

    /// Run filter queries against an existing database
    Query {
        /// Path of the flight database to load
        #[arg(long, default_value = "db.json")]
        db: PathBuf,

        /// JSON file holding one query object or an array of them
        #[arg(long)]
        queries: PathBuf,

        /// Write the response JSON here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
