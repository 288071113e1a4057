//! Filter queries over the flight database.
//!
//! Queries are partial-match filter objects over flight record fields:
//! exact-match keys, temporal bounds, and a price ceiling. Unknown keys are
//! ignored; unparsable bound values match nothing rather than erroring.

mod errors;
mod filter;
mod loader;
mod runner;

pub use errors::{QueryError, QueryResult};
pub use filter::{Filter, Query};
pub use loader::{load_queries, parse_queries};
pub use runner::{run, QueryResponse};
