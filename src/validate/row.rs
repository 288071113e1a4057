//! Single-row validation with accumulate-all-violations semantics.
//!
//! Every field check runs unconditionally; a malformed row reports the full
//! list of violated rules, not just the first one found. The only
//! short-circuit is the field count: a row that is not six fields wide
//! cannot be checked field by field at all.

use crate::ingest::Diagnostic;
use crate::record::FlightRecord;

use super::fields::{parse_price, parse_timestamp, valid_airport_code, valid_flight_id};

/// Number of fields a data row must carry.
pub const FIELD_COUNT: usize = 6;

/// Outcome of validating one row: a constructed record, or a diagnostic
/// carrying every violated rule. Never both.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    /// All six constraints held; the record is ready to persist.
    Valid(FlightRecord),
    /// One or more constraints failed; the row becomes a diagnostic.
    Invalid(Diagnostic),
}

impl RowOutcome {
    /// Returns the record if the row was valid.
    pub fn into_record(self) -> Option<FlightRecord> {
        match self {
            RowOutcome::Valid(record) => Some(record),
            RowOutcome::Invalid(_) => None,
        }
    }
}

/// Validates one comma-split row.
///
/// `fields` is the already-split field list, `line_no` is 1-based, and
/// `original_line` is the unsplit text used for error reporting.
///
/// Reasons are accumulated in a fixed order: flight_id, origin, destination,
/// timestamps, chronology, price. When both timestamps fail to parse a
/// single combined reason is reported instead of two per-field ones, and the
/// chronology check only runs when both parsed. Price sign checks only run
/// when the price itself parsed.
pub fn validate_row(fields: &[String], line_no: usize, original_line: &str) -> RowOutcome {
    if fields.len() != FIELD_COUNT {
        return RowOutcome::Invalid(Diagnostic::new(
            line_no,
            original_line,
            vec!["missing required fields".to_string()],
        ));
    }

    let mut reasons: Vec<String> = Vec::new();

    let flight_id = fields[0].trim();
    let origin = fields[1].trim();
    let destination = fields[2].trim();
    let dep_str = fields[3].trim();
    let arr_str = fields[4].trim();
    let price_str = fields[5].trim();

    if flight_id.is_empty() {
        reasons.push("missing flight_id field".to_string());
    } else if !valid_flight_id(flight_id) {
        if flight_id.len() > 8 {
            reasons.push("flight_id too long (more than 8 characters)".to_string());
        } else {
            reasons.push("invalid flight_id format".to_string());
        }
    }

    if origin.is_empty() {
        reasons.push("missing origin field".to_string());
    } else if !valid_airport_code(origin) {
        reasons.push("invalid origin code".to_string());
    }

    if destination.is_empty() {
        reasons.push("missing destination field".to_string());
    } else if !valid_airport_code(destination) {
        reasons.push("invalid destination code".to_string());
    }

    let dep_dt = parse_timestamp(dep_str);
    let arr_dt = parse_timestamp(arr_str);

    if dep_dt.is_none() && arr_dt.is_none() {
        reasons.push("invalid date format".to_string());
    } else {
        if dep_dt.is_none() {
            reasons.push("invalid departure datetime".to_string());
        }
        if arr_dt.is_none() {
            reasons.push("invalid arrival datetime".to_string());
        }
    }

    if let (Some(dep), Some(arr)) = (dep_dt, arr_dt) {
        if arr <= dep {
            reasons.push("arrival before departure".to_string());
        }
    }

    let price = parse_price(price_str);
    match price {
        None => reasons.push("invalid price value".to_string()),
        Some(p) if p < 0.0 => reasons.push("negative price value".to_string()),
        Some(p) if p == 0.0 => reasons.push("price must be positive".to_string()),
        Some(_) => {}
    }

    if !reasons.is_empty() {
        return RowOutcome::Invalid(Diagnostic::new(line_no, original_line, reasons));
    }

    // reasons is empty, so the price parsed
    let price = price.unwrap_or_default();

    RowOutcome::Valid(FlightRecord {
        flight_id: flight_id.to_string(),
        origin: origin.to_string(),
        destination: destination.to_string(),
        departure_datetime: dep_str.to_string(),
        arrival_datetime: arr_str.to_string(),
        price,
    })
}
