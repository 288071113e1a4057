//! Query Semantics Tests
//!
//! End-to-end checks of the matching contract:
//! - price ceiling is inclusive and preserves record order
//! - unparsable bound values match nothing, never error
//! - one response per query, in input order, empty matches allowed
//! - the full pipeline (ingest -> save -> load -> query) is consistent

use flightdb::ingest::{parse_source, DiagnosticLog};
use flightdb::query::{load_queries, parse_queries, run};
use flightdb::record::FlightRecord;
use flightdb::store;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

// =============================================================================
// Test Utilities
// =============================================================================

fn record(id: &str, price: f64) -> FlightRecord {
    FlightRecord {
        flight_id: id.into(),
        origin: "RIX".into(),
        destination: "JFK".into(),
        departure_datetime: "2024-05-01 10:00".into(),
        arrival_datetime: "2024-05-01 13:30".into(),
        price,
    }
}

// =============================================================================
// Matching semantics
// =============================================================================

#[test]
fn test_price_ceiling_inclusive_in_original_order() {
    let records = vec![record("A1", 10.0), record("B2", 50.0), record("C3", 51.0)];
    let queries = parse_queries(&json!({"price": 50})).unwrap();

    let responses = run(&records, &queries);

    let ids: Vec<&str> = responses[0]
        .matches
        .iter()
        .map(|r| r.flight_id.as_str())
        .collect();
    assert_eq!(ids, ["A1", "B2"]);
}

#[test]
fn test_unparsable_departure_bound_is_empty_not_error() {
    let records = vec![record("A1", 10.0)];
    let queries = parse_queries(&json!({"departure_datetime": "not-a-date"})).unwrap();

    // must not become a fatal error anywhere on this path
    let responses = run(&records, &queries);
    assert_eq!(responses.len(), 1);
    assert!(responses[0].matches.is_empty());
}

#[test]
fn test_empty_query_matches_all_records() {
    let records = vec![record("A1", 10.0), record("B2", 20.0)];
    let queries = parse_queries(&json!({})).unwrap();

    let responses = run(&records, &queries);
    assert_eq!(responses[0].matches.len(), 2);
}

#[test]
fn test_responses_follow_query_input_order() {
    let records = vec![record("A1", 10.0), record("B2", 20.0)];
    let queries = parse_queries(&json!([
        {"flight_id": "B2"},
        {"flight_id": "nope"},
        {"price": 15}
    ]))
    .unwrap();

    let responses = run(&records, &queries);
    assert_eq!(responses.len(), 3);
    assert_eq!(responses[0].matches[0].flight_id, "B2");
    assert!(responses[1].matches.is_empty());
    assert_eq!(responses[2].matches[0].flight_id, "A1");
}

// =============================================================================
// Full pipeline
// =============================================================================

#[test]
fn test_non_finite_price_rows_never_reach_the_database() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("flights.csv");
    fs::write(
        &src,
        "BT101,RIX,JFK,2024-05-01 10:00,2024-05-01 13:30,inf\n\
         BT202,RIX,JFK,2024-05-01 10:00,2024-05-01 13:30,nan\n\
         BT303,RIX,JFK,2024-05-01 10:00,2024-05-01 13:30,35.5\n",
    )
    .unwrap();

    let mut log = DiagnosticLog::create(&dir.path().join("errors.txt")).unwrap();
    let outcome = parse_source(&src, &mut log).unwrap();

    // only the finite-priced row survives validation
    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].flight_id, "BT303");
    for diag in &outcome.diagnostics {
        assert_eq!(diag.reasons(), ["invalid price value"]);
    }

    // and the database it produces loads back intact
    let db = dir.path().join("db.json");
    store::save(&outcome.records, &db).unwrap();
    let loaded = store::load(&db).unwrap();
    assert_eq!(loaded, outcome.records);
}

#[test]
fn test_ingest_save_load_query_pipeline() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("flights.csv");
    fs::write(
        &src,
        "flight_id,origin,destination,departure_datetime,arrival_datetime,price\n\
         BT101,RIX,JFK,2024-05-01 10:00,2024-05-01 13:30,199.99\n\
         BT202,RIX,HEL,2024-05-02 08:00,2024-05-02 09:10,35.5\n\
         badrow,too,few\n",
    )
    .unwrap();

    // ingest
    let mut log = DiagnosticLog::create(&dir.path().join("errors.txt")).unwrap();
    let outcome = parse_source(&src, &mut log).unwrap();
    assert_eq!(outcome.records.len(), 2);

    // persist and reload
    let db = dir.path().join("db.json");
    store::save(&outcome.records, &db).unwrap();
    let records = store::load(&db).unwrap();
    assert_eq!(records, outcome.records);

    // query from a file, as the CLI does
    let query_path = dir.path().join("query.json");
    fs::write(&query_path, r#"{"origin": "RIX", "price": 100}"#).unwrap();
    let queries = load_queries(&query_path).unwrap();

    let responses = run(&records, &queries);
    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0].matches.len(), 1);
    assert_eq!(responses[0].matches[0].flight_id, "BT202");
}
