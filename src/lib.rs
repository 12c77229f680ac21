//! Settlemap: settlements from a knowledge graph, plotted over boundaries
//!
//! Fetches settlement and region rows from a SPARQL endpoint, attaches
//! numeric coordinates, filters by region membership and name substring,
//! and renders the surviving points over a boundary backdrop.
//!
//! # Core Concepts
//!
//! - **Table**: flat rows unwrapped from SPARQL result bindings
//! - **Record schema**: which fields name, group and label a settlement
//! - **Point layer**: records that could be placed on the map
//!
//! # Example
//!
//! ```
//! use settlemap::{extract_coordinates, NameFilter, Record, RecordFilter, RecordSchema};
//!
//! let schema = RecordSchema::default();
//! let mut records = vec![Record::from_pairs([
//!     ("settlementLabel", "Dijkhuizen"),
//!     ("coordinates", "Point(5.1 52.1)"),
//! ])];
//! extract_coordinates(&mut records, &schema.coordinate_field);
//! let kept = NameFilter::new(&schema.name_field, "Dijk").apply(&records);
//! assert_eq!(kept.len(), 1);
//! ```

pub mod boundary;
pub mod config;
#[cfg(feature = "panel")]
pub mod panel;
mod pipeline;
pub mod query;
pub mod render;
pub mod transform;

pub use boundary::{Boundary, BoundaryError, BoundaryResult, Ring};
pub use config::{Config, ConfigError, ConfigResult};
pub use pipeline::{Dataset, MapError, MapResult};
pub use query::{
    QueryAdapter, QueryEndpoint, QueryError, QueryResult, Record, SparqlClient, SparqlResponse,
    Table,
};
pub use render::{annotation_sample, RenderError, RenderResult};
pub use transform::{
    extract_coordinates, project, GeoPoint, NameFilter, PointLayer, RecordFilter, RecordSchema,
    RegionFilter, RegionSet,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
