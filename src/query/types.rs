//! Flat rows unwrapped from SPARQL JSON results

use super::endpoint::{QueryError, QueryResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// One value inside a binding (`{"type": "literal", "value": "..."}`)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SparqlTerm {
    /// The lexical value. The term kind and language tag are not kept.
    pub value: String,
}

/// One result row: variable name -> term
pub type SparqlBinding = BTreeMap<String, SparqlTerm>;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SparqlHead {
    #[serde(default)]
    pub vars: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SparqlResults {
    #[serde(default)]
    pub bindings: Vec<SparqlBinding>,
}

/// Body of a `application/sparql-results+json` response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SparqlResponse {
    #[serde(default)]
    pub head: SparqlHead,
    pub results: SparqlResults,
}

impl SparqlResponse {
    /// Decode a response body
    pub fn from_json(body: &str) -> QueryResult<Self> {
        Ok(serde_json::from_str(body)?)
    }
}

/// A flat record: field name -> string value, plus derived coordinates.
///
/// `longitude`/`latitude` stay `None` until the coordinate extractor has
/// run, and remain `None` for rows whose coordinate text did not parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Record {
    fields: BTreeMap<String, String>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
}

impl Record {
    /// Build a record from `(field, value)` pairs
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            ..Default::default()
        }
    }

    /// Unwrap one binding into `{variable: value}`
    pub fn from_binding(binding: SparqlBinding) -> Self {
        Self::from_pairs(binding.into_iter().map(|(var, term)| (var, term.value)))
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Like [`get`](Self::get) but a missing field is an error
    pub fn require(&self, field: &str) -> QueryResult<&str> {
        self.get(field)
            .ok_or_else(|| QueryError::MissingField(field.to_string()))
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Iterate string fields in name order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Both derived coordinates, if present
    pub fn position(&self) -> Option<(f64, f64)> {
        Some((self.longitude?, self.latitude?))
    }
}

/// All rows of one query result, with a stable column order.
#[derive(Debug, Clone, Default)]
pub struct Table {
    /// Column names: `head.vars` when the endpoint sent them, otherwise
    /// first-seen order across rows
    pub columns: Vec<String>,
    pub records: Vec<Record>,
}

impl Table {
    /// Flatten a decoded response, one record per binding, in result order
    pub fn from_response(response: SparqlResponse) -> Self {
        let mut columns = response.head.vars;
        let mut seen: HashSet<String> = columns.iter().cloned().collect();

        let mut records = Vec::with_capacity(response.results.bindings.len());
        for binding in response.results.bindings {
            for var in binding.keys() {
                if seen.insert(var.clone()) {
                    columns.push(var.clone());
                }
            }
            records.push(Record::from_binding(binding));
        }

        Self { columns, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Values of one field across all rows, in row order, duplicates kept.
    ///
    /// Fails with `MissingField` if any row lacks the field.
    pub fn column(&self, field: &str) -> QueryResult<Vec<String>> {
        self.records
            .iter()
            .map(|r| r.require(field).map(str::to_string))
            .collect()
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}
