//! Query adapter: run a query and hand back a table or a single column

use super::endpoint::{QueryEndpoint, QueryResult};
use super::types::Table;
use tracing::info;

/// Runs queries against an endpoint and flattens the results.
///
/// No caching and no pagination: every call is one round trip and the
/// endpoint is expected to return the complete result set.
#[derive(Debug, Clone)]
pub struct QueryAdapter<E> {
    endpoint: E,
}

impl<E: QueryEndpoint> QueryAdapter<E> {
    pub fn new(endpoint: E) -> Self {
        Self { endpoint }
    }

    /// All fields of all rows
    pub fn load_table(&self, query: &str) -> QueryResult<Table> {
        let response = self.endpoint.execute(query)?;
        let table = Table::from_response(response);
        info!(rows = table.len(), columns = table.columns.len(), "query returned");
        Ok(table)
    }

    /// One field across all rows, in result order
    pub fn load_column(&self, query: &str, field: &str) -> QueryResult<Vec<String>> {
        self.load_table(query)?.column(field)
    }

    pub fn endpoint(&self) -> &E {
        &self.endpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{QueryError, SparqlResponse};
    use serde_json::json;
    use std::cell::RefCell;

    struct RecordingEndpoint {
        body: String,
        seen: RefCell<Vec<String>>,
    }

    impl QueryEndpoint for RecordingEndpoint {
        fn execute(&self, query: &str) -> QueryResult<SparqlResponse> {
            self.seen.borrow_mut().push(query.to_string());
            SparqlResponse::from_json(&self.body)
        }
    }

    struct FailingEndpoint;

    impl QueryEndpoint for FailingEndpoint {
        fn execute(&self, _query: &str) -> QueryResult<SparqlResponse> {
            Err(QueryError::MissingField("results".into()))
        }
    }

    fn provinces() -> RecordingEndpoint {
        let body = json!({
            "head": { "vars": ["province", "provinceLabel"] },
            "results": { "bindings": [
                { "province": { "value": "Q776" }, "provinceLabel": { "value": "Utrecht" } },
                { "province": { "value": "Q694" }, "provinceLabel": { "value": "Zuid-Holland" } }
            ]}
        });
        RecordingEndpoint {
            body: body.to_string(),
            seen: RefCell::new(Vec::new()),
        }
    }

    #[test]
    fn test_load_table_passes_query_through() {
        let adapter = QueryAdapter::new(provinces());
        let table = adapter.load_table("SELECT ?province").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(
            *adapter.endpoint().seen.borrow(),
            vec!["SELECT ?province".to_string()]
        );
    }

    #[test]
    fn test_load_column() {
        let adapter = QueryAdapter::new(provinces());
        let labels = adapter.load_column("q", "provinceLabel").unwrap();
        assert_eq!(labels, vec!["Utrecht", "Zuid-Holland"]);
    }

    #[test]
    fn test_load_column_unknown_field() {
        let adapter = QueryAdapter::new(provinces());
        let err = adapter.load_column("q", "regionLabel").unwrap_err();
        assert!(matches!(err, QueryError::MissingField(ref f) if f == "regionLabel"));
    }

    #[test]
    fn test_endpoint_errors_propagate() {
        let adapter = QueryAdapter::new(FailingEndpoint);
        assert!(adapter.load_table("q").is_err());
    }
}
