//! Database reader with top-level shape validation.
//!
//! The database must be a JSON array of record-shaped objects. A top level
//! that is anything else (a single object, a scalar) is a format error, not
//! a silent coercion; so is an element missing a record field.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::record::FlightRecord;

use super::errors::{StoreError, StoreResult};

/// Loads the full record list from `path`.
pub fn load(path: &Path) -> StoreResult<Vec<FlightRecord>> {
    let contents = fs::read_to_string(path).map_err(|e| StoreError::from_read_io(path, e))?;

    let value: Value = serde_json::from_str(&contents).map_err(|e| {
        StoreError::format_invalid(format!("Database is not valid JSON: {}", e))
    })?;

    if !value.is_array() {
        return Err(StoreError::format_invalid(
            "JSON database must be a list of flight objects",
        ));
    }

    serde_json::from_value(value).map_err(|e| {
        StoreError::format_invalid(format!("Database entry is not a flight record: {}", e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::writer::save;
    use std::fs;
    use tempfile::TempDir;

    fn sample_record(id: &str, price: f64) -> FlightRecord {
        FlightRecord {
            flight_id: id.into(),
            origin: "RIX".into(),
            destination: "JFK".into(),
            departure_datetime: "2024-05-01 10:00".into(),
            arrival_datetime: "2024-05-01 13:30".into(),
            price,
        }
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let db = dir.path().join("db.json");
        let records = vec![
            sample_record("BT101", 199.99),
            sample_record("BT202", 49.5),
            sample_record("BT303", 10.0),
        ];

        save(&records, &db).unwrap();
        let loaded = load(&db).unwrap();

        assert_eq!(loaded, records);
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = load(&dir.path().join("absent.json")).unwrap_err();
        assert_eq!(err.code().code(), "FDB_DB_NOT_FOUND");
    }

    #[test]
    fn test_top_level_object_rejected() {
        let dir = TempDir::new().unwrap();
        let db = dir.path().join("db.json");
        fs::write(&db, r#"{"flight_id": "BT101"}"#).unwrap();

        let err = load(&db).unwrap_err();
        assert_eq!(err.code().code(), "FDB_DB_FORMAT_INVALID");
        assert!(err.message().contains("list"));
    }

    #[test]
    fn test_top_level_scalar_rejected() {
        let dir = TempDir::new().unwrap();
        let db = dir.path().join("db.json");
        fs::write(&db, "42").unwrap();

        let err = load(&db).unwrap_err();
        assert_eq!(err.code().code(), "FDB_DB_FORMAT_INVALID");
    }

    #[test]
    fn test_malformed_json_rejected() {
        let dir = TempDir::new().unwrap();
        let db = dir.path().join("db.json");
        fs::write(&db, "[{not json").unwrap();

        let err = load(&db).unwrap_err();
        assert_eq!(err.code().code(), "FDB_DB_FORMAT_INVALID");
    }

    #[test]
    fn test_element_missing_field_rejected() {
        let dir = TempDir::new().unwrap();
        let db = dir.path().join("db.json");
        fs::write(&db, r#"[{"flight_id": "BT101"}]"#).unwrap();

        let err = load(&db).unwrap_err();
        assert_eq!(err.code().code(), "FDB_DB_FORMAT_INVALID");
    }

    #[test]
    fn test_empty_list_loads_as_empty() {
        let dir = TempDir::new().unwrap();
        let db = dir.path().join("db.json");
        fs::write(&db, "[]").unwrap();

        assert!(load(&db).unwrap().is_empty());
    }
}
