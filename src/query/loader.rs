//! Query file loading.
//!
//! The query input is either a single JSON object (treated as a one-element
//! batch) or an array of objects. Any other top-level shape is rejected.

use std::fs;
use std::io;
use std::path::Path;

use serde_json::Value;

use super::errors::{QueryError, QueryResult};
use super::filter::Query;

/// Loads one or more queries from a JSON file.
pub fn load_queries(path: &Path) -> QueryResult<Vec<Query>> {
    let contents = fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            QueryError::FileNotFound(path.display().to_string())
        } else {
            QueryError::ReadFailed(path.display().to_string(), e.to_string())
        }
    })?;

    let value: Value =
        serde_json::from_str(&contents).map_err(|e| QueryError::InvalidJson(e.to_string()))?;

    parse_queries(&value)
}

/// Parses the top-level query value: object, or array of objects.
pub fn parse_queries(value: &Value) -> QueryResult<Vec<Query>> {
    match value {
        Value::Object(_) => Ok(vec![Query::from_value(value)?]),
        Value::Array(items) => items.iter().map(Query::from_value).collect(),
        _ => Err(QueryError::InvalidShape),
    }
}
