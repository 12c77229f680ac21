//! Projection of records into a point layer

use super::schema::RecordSchema;
use crate::query::Record;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value};
use std::collections::BTreeMap;

/// A settlement reduced to its display labels and a point geometry
#[derive(Debug, Clone, PartialEq)]
pub struct GeoPoint {
    /// Label fields carried over from the record (only those it had)
    pub labels: BTreeMap<String, String>,
    pub longitude: f64,
    pub latitude: f64,
    /// Point geometry at `(longitude, latitude)`
    pub geometry: Geometry,
}

impl GeoPoint {
    pub fn label(&self, field: &str) -> Option<&str> {
        self.labels.get(field).map(String::as_str)
    }

    fn to_feature(&self) -> Feature {
        let mut properties = JsonObject::new();
        for (field, value) in &self.labels {
            properties.insert(field.clone(), JsonValue::String(value.clone()));
        }
        properties.insert("longitude".into(), JsonValue::from(self.longitude));
        properties.insert("latitude".into(), JsonValue::from(self.latitude));
        Feature {
            bbox: None,
            geometry: Some(self.geometry.clone()),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }
}

/// The projected points, in input order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointLayer {
    pub points: Vec<GeoPoint>,
}

impl PointLayer {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `(min_lon, min_lat, max_lon, max_lat)`, or `None` for an empty layer
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        self.points.iter().fold(None, |acc, p| {
            let (x, y) = (p.longitude, p.latitude);
            Some(match acc {
                None => (x, y, x, y),
                Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
            })
        })
    }

    /// One Point feature per settlement, labels as properties
    pub fn to_geojson(&self) -> FeatureCollection {
        FeatureCollection {
            bbox: None,
            features: self.points.iter().map(GeoPoint::to_feature).collect(),
            foreign_members: None,
        }
    }
}

/// Turn records with a full position into points.
///
/// Records missing either coordinate cannot be placed and are skipped
/// without error.
pub fn project(records: &[Record], schema: &RecordSchema) -> PointLayer {
    let points = records
        .iter()
        .filter_map(|record| {
            let (longitude, latitude) = record.position()?;
            let labels = record
                .fields()
                .filter(|(field, _)| schema.is_label(field))
                .map(|(field, value)| (field.to_string(), value.to_string()))
                .collect();
            Some(GeoPoint {
                labels,
                longitude,
                latitude,
                geometry: Geometry::new(Value::Point(vec![longitude, latitude])),
            })
        })
        .collect();
    PointLayer { points }
}
