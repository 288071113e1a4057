//! Row and field validation for flight-schedule input.
//!
//! Validation is deterministic and pure: the same six fields always produce
//! the same outcome. A row either becomes a `FlightRecord` or a diagnostic
//! listing every violated rule, never both and never a partial record.

mod fields;
mod row;

pub use fields::{parse_price, parse_timestamp, valid_airport_code, valid_flight_id, DATETIME_FORMAT};
pub use row::{validate_row, RowOutcome};
