//! Boundary polygons loaded from a GeoJSON file
//!
//! Boundaries are only a backdrop: they are read once, never mutated, and
//! handed to the renderer as plain rings of `(x, y)` positions.

use geojson::{GeoJson, Geometry, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors that can occur while loading boundaries
#[derive(Debug, Error)]
pub enum BoundaryError {
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("GeoJSON error: {0}")]
    Parse(#[from] geojson::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No polygons found in {}", .0.display())]
    Empty(PathBuf),
}

/// Result type for boundary operations
pub type BoundaryResult<T> = Result<T, BoundaryError>;

/// A closed ring of `(x, y)` positions
pub type Ring = Vec<(f64, f64)>;

/// One polygon: an exterior ring plus zero or more holes
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryPolygon {
    pub exterior: Ring,
    pub holes: Vec<Ring>,
}

/// Polygon collection used as the map backdrop
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Boundary {
    pub polygons: Vec<BoundaryPolygon>,
}

impl Boundary {
    /// Read a GeoJSON file (FeatureCollection, Feature or bare Geometry).
    ///
    /// Non-polygonal geometries are skipped; a file with no polygons at all
    /// is an error.
    pub fn load(path: impl AsRef<Path>) -> BoundaryResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| BoundaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let geojson = GeoJson::from_reader(BufReader::new(file))?;
        let boundary = Self::from_geojson(&geojson);
        if boundary.polygons.is_empty() {
            return Err(BoundaryError::Empty(path.to_path_buf()));
        }
        info!(path = %path.display(), polygons = boundary.polygons.len(), "loaded boundaries");
        Ok(boundary)
    }

    pub fn from_geojson(geojson: &GeoJson) -> Self {
        let mut polygons = Vec::new();
        match geojson {
            GeoJson::FeatureCollection(collection) => {
                for feature in &collection.features {
                    if let Some(geometry) = &feature.geometry {
                        collect_polygons(geometry, &mut polygons);
                    }
                }
            }
            GeoJson::Feature(feature) => {
                if let Some(geometry) = &feature.geometry {
                    collect_polygons(geometry, &mut polygons);
                }
            }
            GeoJson::Geometry(geometry) => collect_polygons(geometry, &mut polygons),
        }
        Self { polygons }
    }

    /// `(min_x, min_y, max_x, max_y)` over all exterior rings
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        self.polygons
            .iter()
            .flat_map(|p| p.exterior.iter())
            .fold(None, |acc, &(x, y)| {
                Some(match acc {
                    None => (x, y, x, y),
                    Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
                })
            })
    }
}

fn to_ring(positions: &[Vec<f64>]) -> Ring {
    positions
        .iter()
        .filter(|p| p.len() >= 2)
        .map(|p| (p[0], p[1]))
        .collect()
}

fn to_polygon(rings: &[Vec<Vec<f64>>]) -> Option<BoundaryPolygon> {
    let (exterior, holes) = rings.split_first()?;
    Some(BoundaryPolygon {
        exterior: to_ring(exterior),
        holes: holes.iter().map(|h| to_ring(h)).collect(),
    })
}

fn collect_polygons(geometry: &Geometry, out: &mut Vec<BoundaryPolygon>) {
    match &geometry.value {
        Value::Polygon(rings) => out.extend(to_polygon(rings)),
        Value::MultiPolygon(polygons) => {
            out.extend(polygons.iter().filter_map(|rings| to_polygon(rings)))
        }
        Value::GeometryCollection(geometries) => {
            for g in geometries {
                collect_polygons(g, out);
            }
        }
        _ => {}
    }
}
