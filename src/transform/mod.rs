//! Row transforms between the query adapter and the renderer
//!
//! Coordinates are attached to raw records, records are filtered by region
//! and by name, and the survivors are projected into a point layer.

mod coordinates;
mod filter;
mod project;
mod schema;

pub use coordinates::{extract_coordinates, parse_point};
pub use filter::{NameFilter, RecordFilter, RegionFilter, RegionSet};
pub use project::{project, GeoPoint, PointLayer};
pub use schema::RecordSchema;
