//! Atomic field predicates and parsers.
//!
//! These are the leaves of the validation pipeline: pure functions with no
//! I/O and no error propagation. Parse failures are signalled with `None`,
//! never with a panic or an `Err` the caller must unwrap.

use chrono::NaiveDateTime;

/// The only accepted timestamp format: 4-digit year, 2-digit month, day,
/// hour and minute, space separator, 24-hour clock.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A flight id is 2-8 ASCII letters or digits.
pub fn valid_flight_id(value: &str) -> bool {
    (2..=8).contains(&value.len()) && value.chars().all(|c| c.is_ascii_alphanumeric())
}

/// An airport code is exactly 3 uppercase ASCII letters.
pub fn valid_airport_code(value: &str) -> bool {
    value.len() == 3 && value.chars().all(|c| c.is_ascii_uppercase())
}

/// Parses a `YYYY-MM-DD HH:MM` timestamp, or `None` if the text does not
/// match the format exactly.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, DATETIME_FORMAT).ok()
}

/// Parses a price as a strict decimal number (optional sign, integer or
/// fractional), or `None` if the text is not numeric.
///
/// Non-finite values (`inf`, `nan`) are parse failures: they cannot satisfy
/// the positivity constraint and have no JSON representation, so a record
/// carrying one could never round-trip through the database.
pub fn parse_price(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|p| p.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flight_id_length_bounds() {
        assert!(!valid_flight_id(""));
        assert!(!valid_flight_id("A"));
        assert!(valid_flight_id("AB"));
        assert!(valid_flight_id("XY123456"));
        assert!(!valid_flight_id("XY1234567"));
    }

    #[test]
    fn test_flight_id_character_class() {
        assert!(valid_flight_id("BT101"));
        assert!(!valid_flight_id("BT-101"));
        assert!(!valid_flight_id("BT 10"));
        assert!(!valid_flight_id("BT_1"));
    }

    #[test]
    fn test_airport_code_requires_three_uppercase_letters() {
        assert!(valid_airport_code("JFK"));
        assert!(!valid_airport_code("jfk"));
        assert!(!valid_airport_code("JF"));
        assert!(!valid_airport_code("JFKX"));
        assert!(!valid_airport_code("JF1"));
    }

    #[test]
    fn test_timestamp_accepts_exact_format() {
        let ts = parse_timestamp("2024-05-01 10:30").unwrap();
        assert_eq!(ts.format(DATETIME_FORMAT).to_string(), "2024-05-01 10:30");
    }

    #[test]
    fn test_timestamp_rejects_other_shapes() {
        assert!(parse_timestamp("2024-05-01").is_none());
        assert!(parse_timestamp("2024-05-01T10:30").is_none());
        assert!(parse_timestamp("01-05-2024 10:30").is_none());
        assert!(parse_timestamp("2024-13-01 10:30").is_none());
        assert!(parse_timestamp("not-a-date").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn test_price_parses_signed_decimals() {
        assert_eq!(parse_price("100"), Some(100.0));
        assert_eq!(parse_price("99.95"), Some(99.95));
        assert_eq!(parse_price("-5"), Some(-5.0));
        assert_eq!(parse_price("+12.5"), Some(12.5));
    }

    #[test]
    fn test_price_rejects_non_numeric() {
        assert!(parse_price("").is_none());
        assert!(parse_price("free").is_none());
        assert!(parse_price("12,50").is_none());
        assert!(parse_price("12.5.0").is_none());
    }

    #[test]
    fn test_price_rejects_non_finite() {
        assert!(parse_price("inf").is_none());
        assert!(parse_price("-inf").is_none());
        assert!(parse_price("infinity").is_none());
        assert!(parse_price("NaN").is_none());
        assert!(parse_price("nan").is_none());
    }
}
