//! Plot extent and region grouping

use crate::boundary::Boundary;
use crate::transform::{GeoPoint, PointLayer};
use std::collections::BTreeMap;
use std::ops::Range;

/// Legend entry for points without a region value
pub const UNKNOWN_REGION: &str = "(unknown)";

/// Relative padding around the data
const MARGIN: f64 = 0.03;
/// Half-width used when the data collapses to a line or a point
const MIN_HALF_SPAN: f64 = 0.5;

/// Coordinate ranges of the plot
#[derive(Debug, Clone, PartialEq)]
pub struct MapFrame {
    pub x: Range<f64>,
    pub y: Range<f64>,
}

impl MapFrame {
    /// Whole-world extent, used when there is nothing to frame
    pub fn world() -> Self {
        Self {
            x: -180.0..180.0,
            y: -90.0..90.0,
        }
    }

    /// Frame covering both the boundaries and the points
    pub fn fit(boundary: &Boundary, layer: &PointLayer) -> Self {
        let bounds = match (boundary.bounds(), layer.bounds()) {
            (Some(a), Some(b)) => Some((a.0.min(b.0), a.1.min(b.1), a.2.max(b.2), a.3.max(b.3))),
            (a, b) => a.or(b),
        };
        match bounds {
            Some((x0, y0, x1, y1)) => Self {
                x: padded(x0, x1),
                y: padded(y0, y1),
            },
            None => Self::world(),
        }
    }
}

fn padded(lo: f64, hi: f64) -> Range<f64> {
    let span = hi - lo;
    if span <= f64::EPSILON {
        return (lo - MIN_HALF_SPAN)..(hi + MIN_HALF_SPAN);
    }
    (lo - span * MARGIN)..(hi + span * MARGIN)
}

/// Points grouped by region value, regions in name order
pub fn region_groups<'a>(layer: &'a PointLayer, region_field: &str) -> BTreeMap<String, Vec<&'a GeoPoint>> {
    let mut groups: BTreeMap<String, Vec<&GeoPoint>> = BTreeMap::new();
    for point in &layer.points {
        let region = point.label(region_field).unwrap_or(UNKNOWN_REGION);
        groups.entry(region.to_string()).or_default().push(point);
    }
    groups
}
