//! Query representation and the record-matching predicate.
//!
//! A query is a fixed sum type of recognized filter kinds parsed once from
//! the raw JSON object; unrecognized keys are ignored, not rejected. All
//! present filters must pass (AND semantics); a query with no recognized
//! keys matches every record.
//!
//! Bound filters degrade rather than fail: a temporal or price bound whose
//! query-side value does not parse yields a filter that matches nothing.
//! Likewise a record whose own stored timestamp fails to re-parse never
//! matches a temporal filter.

use chrono::NaiveDateTime;
use serde_json::{Map, Value};

use crate::record::FlightRecord;
use crate::validate::parse_timestamp;

use super::errors::{QueryError, QueryResult};

/// One recognized filter, parsed from a query key/value pair.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// `flight_id` must equal this string representation exactly.
    FlightIdEquals(String),
    /// `origin` must equal this string representation exactly.
    OriginEquals(String),
    /// `destination` must equal this string representation exactly.
    DestinationEquals(String),
    /// Departure must be at or after this instant; `None` matches nothing.
    DepartsAtOrAfter(Option<NaiveDateTime>),
    /// Arrival must be at or before this instant; `None` matches nothing.
    ArrivesAtOrBefore(Option<NaiveDateTime>),
    /// Price must be at or below this bound; `None` matches nothing.
    PriceAtMost(Option<f64>),
}

impl Filter {
    /// Evaluates this filter against one record.
    pub fn matches(&self, record: &FlightRecord) -> bool {
        match self {
            Filter::FlightIdEquals(expected) => record.flight_id == *expected,
            Filter::OriginEquals(expected) => record.origin == *expected,
            Filter::DestinationEquals(expected) => record.destination == *expected,
            Filter::DepartsAtOrAfter(bound) => match bound {
                Some(bound) => parse_timestamp(&record.departure_datetime)
                    .is_some_and(|dep| dep >= *bound),
                None => false,
            },
            Filter::ArrivesAtOrBefore(bound) => match bound {
                Some(bound) => parse_timestamp(&record.arrival_datetime)
                    .is_some_and(|arr| arr <= *bound),
                None => false,
            },
            Filter::PriceAtMost(bound) => match bound {
                Some(bound) => record.price <= *bound,
                None => false,
            },
        }
    }
}

/// A parsed query: the recognized filters plus the raw object kept for
/// echoing back in the response.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    raw: Map<String, Value>,
    filters: Vec<Filter>,
}

impl Query {
    /// Parses a query from a JSON value, which must be an object.
    ///
    /// Unrecognized keys are kept in the raw object but produce no filter.
    pub fn from_value(value: &Value) -> QueryResult<Self> {
        let raw = value.as_object().ok_or(QueryError::InvalidShape)?.clone();

        let mut filters = Vec::new();
        if let Some(v) = raw.get("flight_id") {
            filters.push(Filter::FlightIdEquals(string_repr(v)));
        }
        if let Some(v) = raw.get("origin") {
            filters.push(Filter::OriginEquals(string_repr(v)));
        }
        if let Some(v) = raw.get("destination") {
            filters.push(Filter::DestinationEquals(string_repr(v)));
        }
        if let Some(v) = raw.get("departure_datetime") {
            filters.push(Filter::DepartsAtOrAfter(timestamp_bound(v)));
        }
        if let Some(v) = raw.get("arrival_datetime") {
            filters.push(Filter::ArrivesAtOrBefore(timestamp_bound(v)));
        }
        if let Some(v) = raw.get("price") {
            filters.push(Filter::PriceAtMost(price_bound(v)));
        }

        Ok(Self { raw, filters })
    }

    /// The original query object, unrecognized keys included.
    pub fn raw(&self) -> &Map<String, Value> {
        &self.raw
    }

    /// The recognized filters, in data model key order.
    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    /// Checks whether a record satisfies every filter of this query.
    pub fn matches(&self, record: &FlightRecord) -> bool {
        self.filters.iter().all(|filter| filter.matches(record))
    }
}

/// String representation used by exact-match filters.
///
/// Intentional, contained coercion: a JSON number 101 matches a flight_id
/// "101". Only exact-match keys coerce; bound filters parse instead.
fn string_repr(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Temporal bound: only a string in the accepted format parses.
fn timestamp_bound(value: &Value) -> Option<NaiveDateTime> {
    value.as_str().and_then(parse_timestamp)
}

/// Price bound: a JSON number, or a string holding one.
fn price_bound(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}
