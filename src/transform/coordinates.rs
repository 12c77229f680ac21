//! `Point(<lon> <lat>)` parsing

use crate::query::Record;
use regex_lite::Regex;
use std::sync::OnceLock;
use tracing::warn;

fn point_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // lon runs from `Point(` to the first whitespace, lat from there to `)`
    PATTERN.get_or_init(|| Regex::new(r"Point\((\S*?)\s(.*?)\)").expect("valid point pattern"))
}

fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse `Point(<lon> <lat>)` into `(longitude, latitude)`.
///
/// Each value is `None` on its own if it is not a finite decimal; both are
/// `None` if the text does not look like a point at all.
pub fn parse_point(text: &str) -> (Option<f64>, Option<f64>) {
    match point_pattern().captures(text) {
        Some(caps) => (
            caps.get(1).and_then(|m| parse_number(m.as_str())),
            caps.get(2).and_then(|m| parse_number(m.as_str())),
        ),
        None => (None, None),
    }
}

/// Attach `longitude`/`latitude` to every record, in place.
///
/// A missing or malformed coordinate field leaves both values `None` for
/// that row. Returns the number of rows left without a full position.
pub fn extract_coordinates(records: &mut [Record], field: &str) -> usize {
    let mut unparsed = 0;
    for record in records.iter_mut() {
        let (longitude, latitude) = record.get(field).map_or((None, None), parse_point);
        record.longitude = longitude;
        record.latitude = latitude;
        if record.position().is_none() {
            unparsed += 1;
        }
    }
    if unparsed > 0 {
        warn!(rows = unparsed, field, "rows without usable coordinates");
    }
    unparsed
}
