//! Query execution over the full record set.
//!
//! Each query scans the record list independently; no state is shared
//! between queries. Match lists preserve original record order, and the
//! response list preserves query input order, including queries that match
//! nothing.

use serde::Serialize;
use serde_json::Value;

use crate::record::FlightRecord;

use super::filter::Query;

/// One query paired with its ordered match set.
#[derive(Debug, Clone, Serialize)]
pub struct QueryResponse {
    /// The original query object, echoed verbatim.
    pub query: Value,
    /// Records satisfying the query, in database order.
    pub matches: Vec<FlightRecord>,
}

/// Runs every query against the full record list.
pub fn run(records: &[FlightRecord], queries: &[Query]) -> Vec<QueryResponse> {
    queries
        .iter()
        .map(|query| QueryResponse {
            query: Value::Object(query.raw().clone()),
            matches: records
                .iter()
                .filter(|record| query.matches(record))
                .cloned()
                .collect(),
        })
        .collect()
}
