//! Command implementations.
//!
//! Thin glue over the core: resolve the source, wire the diagnostic log
//! through the batch, persist or query, and report through the structured
//! logger. No validation logic lives here.

use std::fs;
use std::path::{Path, PathBuf};

use crate::ingest::{parse_source, DiagnosticLog};
use crate::observability::Logger;
use crate::query::{load_queries, run as run_queries};
use crate::store;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parses arguments and dispatches to the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    match cli.command {
        Command::Ingest {
            input,
            input_dir,
            output,
            error_log,
        } => ingest(input, input_dir, &output, &error_log),
        Command::Query { db, queries, output } => query(&db, &queries, output.as_deref()),
    }
}

/// Parses a CSV source and writes the database plus the error log.
pub fn ingest(
    input: Option<PathBuf>,
    input_dir: Option<PathBuf>,
    output: &Path,
    error_log: &Path,
) -> CliResult<()> {
    let source = match (input, input_dir) {
        (Some(file), None) => file,
        (None, Some(dir)) => dir,
        _ => {
            return Err(CliError::usage(
                "specify either --input <file> or --input-dir <dir>",
            ))
        }
    };

    // The log handle is created (truncating) before any file is touched and
    // lives for the whole batch.
    let mut log = DiagnosticLog::create(error_log)?;
    let outcome = parse_source(&source, &mut log)?;

    store::save(&outcome.records, output)?;

    Logger::info(
        "ingest_complete",
        &[
            ("records", &outcome.records.len().to_string()),
            ("diagnostics", &outcome.diagnostics.len().to_string()),
            ("database", &output.display().to_string()),
            ("error_log", &error_log.display().to_string()),
        ],
    );

    Ok(())
}

/// Loads the database, runs the queries, and writes the response JSON.
pub fn query(db: &Path, queries_path: &Path, output: Option<&Path>) -> CliResult<()> {
    let records = store::load(db)?;
    let queries = load_queries(queries_path)?;

    let responses = run_queries(&records, &queries);
    let json = serde_json::to_string_pretty(&responses)?;

    match output {
        Some(path) => {
            fs::write(path, format!("{json}\n"))?;
            Logger::info(
                "query_complete",
                &[
                    ("queries", &queries.len().to_string()),
                    ("response", &path.display().to_string()),
                ],
            );
        }
        None => println!("{json}"),
    }

    Ok(())
}
