//! Query adapter for SPARQL endpoints
//!
//! Sends query text to an endpoint and flattens the nested result bindings
//! into uniform rows of `field -> value`.

mod adapter;
mod endpoint;
pub mod queries;
mod types;

pub use adapter::QueryAdapter;
pub use endpoint::{QueryEndpoint, QueryError, QueryResult, SparqlClient};
pub use types::{Record, SparqlBinding, SparqlResponse, SparqlTerm, Table};
