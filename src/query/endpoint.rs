//! Query endpoint seam and the blocking HTTP client behind it

use super::types::SparqlResponse;
use reqwest::blocking::Client as HttpClient;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while querying or reading results
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Invalid header value: {0}")]
    Header(String),
}

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Something that can execute a query and hand back decoded results.
///
/// Failures propagate unmodified; implementations do not retry.
pub trait QueryEndpoint {
    fn execute(&self, query: &str) -> QueryResult<SparqlResponse>;
}

/// Blocking SPARQL-over-HTTP client
#[derive(Debug, Clone)]
pub struct SparqlClient {
    client: HttpClient,
    endpoint: String,
}

impl SparqlClient {
    pub fn new(endpoint: impl Into<String>, user_agent: &str) -> QueryResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent)
                .map_err(|_| QueryError::Header(user_agent.to_string()))?,
        );
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/sparql-results+json"),
        );

        let client = HttpClient::builder().default_headers(headers).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl QueryEndpoint for SparqlClient {
    fn execute(&self, query: &str) -> QueryResult<SparqlResponse> {
        debug!(endpoint = %self.endpoint, bytes = query.len(), "sending SPARQL query");
        let body = self
            .client
            .get(&self.endpoint)
            .query(&[("query", query)])
            .send()?
            .error_for_status()?
            .text()?;
        SparqlResponse::from_json(&body)
    }
}
