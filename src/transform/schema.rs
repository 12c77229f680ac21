//! Which record fields carry names, regions, coordinates and display labels

use serde::{Deserialize, Serialize};

/// Field roles for settlement records.
///
/// `label_fields` is an explicit list: only these fields travel from a
/// record into the projected point layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordSchema {
    /// Human-readable settlement name, matched by the substring filter
    pub name_field: String,
    /// Region name, matched against the region allow-list
    pub region_field: String,
    /// Raw `Point(<lon> <lat>)` text
    pub coordinate_field: String,
    /// Display fields kept by the projector
    pub label_fields: Vec<String>,
}

impl Default for RecordSchema {
    fn default() -> Self {
        Self {
            name_field: "settlementLabel".into(),
            region_field: "provinceLabel".into(),
            coordinate_field: "coordinates".into(),
            label_fields: vec![
                "settlementLabel".into(),
                "municipalityLabel".into(),
                "provinceLabel".into(),
                "countryLabel".into(),
            ],
        }
    }
}

impl RecordSchema {
    pub fn is_label(&self, field: &str) -> bool {
        self.label_fields.iter().any(|f| f == field)
    }
}
