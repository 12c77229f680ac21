//! Shared fixtures for settlemap integration tests
//!
//! A canned query endpoint and small GeoJSON boundary files, so the
//! pipeline can run without network access.

#![allow(dead_code)]

use serde_json::{json, Value};
use settlemap::{QueryEndpoint, QueryError, QueryResult, SparqlResponse};
use std::collections::HashMap;
use std::io::Write;

pub const SETTLEMENT_QUERY: &str = "SELECT ?settlement ?settlementLabel ?provinceLabel ?coordinates";
pub const REGION_QUERY: &str = "SELECT ?province ?provinceLabel";

/// Endpoint answering fixed query texts with fixed bodies
#[derive(Debug, Default)]
pub struct StaticEndpoint {
    answers: HashMap<String, String>,
}

impl StaticEndpoint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, query: &str, body: Value) -> Self {
        self.answers.insert(query.to_string(), body.to_string());
        self
    }
}

impl QueryEndpoint for StaticEndpoint {
    fn execute(&self, query: &str) -> QueryResult<SparqlResponse> {
        // an unknown query fails the way an unreadable endpoint reply would
        let body = self.answers.get(query).ok_or_else(|| {
            QueryError::Decode(serde::de::Error::custom(format!("no canned answer for {}", query)))
        })?;
        SparqlResponse::from_json(body)
    }
}

/// SPARQL JSON body with string literals for every `(variable, value)` pair
pub fn bindings(rows: &[&[(&str, &str)]]) -> Value {
    let bindings: Vec<Value> = rows
        .iter()
        .map(|row| {
            let mut binding = serde_json::Map::new();
            for (var, value) in row.iter() {
                binding.insert(var.to_string(), json!({ "type": "literal", "value": value }));
            }
            Value::Object(binding)
        })
        .collect();
    json!({ "head": { "vars": [] }, "results": { "bindings": bindings } })
}

pub fn regions_body(names: &[&str]) -> Value {
    let rows: Vec<Vec<(&str, &str)>> = names.iter().map(|n| vec![("provinceLabel", *n)]).collect();
    let refs: Vec<&[(&str, &str)]> = rows.iter().map(Vec::as_slice).collect();
    bindings(&refs)
}

/// Temporary GeoJSON file with one square province per `(x, y)` corner
pub fn boundary_file(corners: &[(f64, f64)]) -> tempfile::NamedTempFile {
    let features: Vec<Value> = corners
        .iter()
        .map(|&(x, y)| {
            json!({
                "type": "Feature",
                "properties": {},
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[x, y], [x + 1.0, y], [x + 1.0, y + 1.0], [x, y + 1.0], [x, y]]]
                }
            })
        })
        .collect();
    let body = json!({ "type": "FeatureCollection", "features": features });

    let mut file = tempfile::Builder::new().suffix(".geojson").tempfile().unwrap();
    file.write_all(body.to_string().as_bytes()).unwrap();
    file
}
