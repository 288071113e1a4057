//! FlightDB CLI entry point
//!
//! A minimal entrypoint that:
//! 1. Parses CLI arguments (via cli::run)
//! 2. Dispatches to CLI commands (via cli::run)
//! 3. Logs failures to stderr as structured events
//! 4. Exits with non-zero on failure
//!
//! All logic is delegated to the CLI module.

use flightdb::cli;
use flightdb::observability::Logger;

fn main() {
    if let Err(e) = cli::run() {
        Logger::error("command_failed", &[("error", &e.to_string())]);
        std::process::exit(1);
    }
}
