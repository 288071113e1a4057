//! Structured JSON logger.
//!
//! - one log line = one event
//! - synchronous, no buffering
//! - deterministic key ordering (event, severity, then fields alphabetically)
//!
//! Info goes to stdout, errors to stderr.

use std::fmt;
use std::io::{self, Write};

/// Log severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations
    Info,
    /// Operation failures
    Error,
}

impl Severity {
    /// Returns the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Synchronous structured logger.
pub struct Logger;

impl Logger {
    /// Log at INFO level.
    pub fn info(event: &str, fields: &[(&str, &str)]) {
        Self::write_line(Severity::Info, event, fields, &mut io::stdout());
    }

    /// Log at ERROR level.
    pub fn error(event: &str, fields: &[(&str, &str)]) {
        Self::write_line(Severity::Error, event, fields, &mut io::stderr());
    }

    fn write_line<W: Write>(severity: Severity, event: &str, fields: &[(&str, &str)], out: &mut W) {
        let mut line = String::with_capacity(128);
        line.push_str("{\"event\":\"");
        escape_into(&mut line, event);
        line.push_str("\",\"severity\":\"");
        line.push_str(severity.as_str());
        line.push('"');

        let mut sorted: Vec<_> = fields.iter().collect();
        sorted.sort_by_key(|(k, _)| *k);
        for (key, value) in sorted {
            line.push_str(",\"");
            escape_into(&mut line, key);
            line.push_str("\":\"");
            escape_into(&mut line, value);
            line.push('"');
        }
        line.push_str("}\n");

        let _ = out.write_all(line.as_bytes());
        let _ = out.flush();
    }
}

fn escape_into(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
}
