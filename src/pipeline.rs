//! Dataset: settlements fetched once, cleaned, then selected by name

use crate::boundary::BoundaryError;
use crate::config::{Config, ConfigError};
use crate::query::{QueryAdapter, QueryEndpoint, QueryError, Record};
use crate::render::RenderError;
use crate::transform::{
    extract_coordinates, project, NameFilter, PointLayer, RecordFilter, RecordSchema,
    RegionFilter, RegionSet,
};
use thiserror::Error;
use tracing::{debug, info};

/// Number of rows shown in the debug preview of a fetched table
const PREVIEW_ROWS: usize = 5;

/// Errors that can end a run
#[derive(Debug, Error)]
pub enum MapError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Boundary(#[from] BoundaryError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for whole-run operations
pub type MapResult<T> = Result<T, MapError>;

/// Settlements restricted to known regions, with coordinates attached.
///
/// Held in memory for the lifetime of a run or panel; every
/// [`select`](Self::select) works on this same set.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<Record>,
    regions: RegionSet,
    schema: RecordSchema,
}

impl Dataset {
    /// Run both configured queries and prepare the result
    pub fn fetch<E: QueryEndpoint>(adapter: &QueryAdapter<E>, config: &Config) -> MapResult<Self> {
        let table = adapter.load_table(&config.settlement_query)?;
        debug!(
            columns = ?table.columns,
            head = ?&table.records[..table.len().min(PREVIEW_ROWS)],
            "settlements fetched"
        );

        let regions: RegionSet = adapter
            .load_column(&config.region_query, &config.region_query_field)?
            .into_iter()
            .collect();
        debug!(?regions, "regions fetched");

        Ok(Self::prepare(table.into_records(), regions, config.schema.clone()))
    }

    /// Drop rows outside the region set, then attach coordinates
    pub fn prepare(mut records: Vec<Record>, regions: RegionSet, schema: RecordSchema) -> Self {
        let fetched = records.len();
        let by_region = RegionFilter::new(schema.region_field.as_str(), regions);
        records.retain(|r| by_region.keep(r));
        let unplaced = extract_coordinates(&mut records, &schema.coordinate_field);
        info!(
            fetched,
            kept = records.len(),
            unplaced,
            regions = by_region.regions().len(),
            "dataset prepared"
        );
        Self {
            records,
            regions: by_region.regions().clone(),
            schema,
        }
    }

    /// Records whose name contains `substring` (case-sensitive)
    pub fn select(&self, substring: &str) -> Vec<Record> {
        let selected = NameFilter::new(self.schema.name_field.as_str(), substring).apply(&self.records);
        info!(substring, selected = selected.len(), "name filter applied");
        selected
    }

    /// [`select`](Self::select) followed by projection to points
    pub fn points(&self, substring: &str) -> PointLayer {
        let layer = project(&self.select(substring), &self.schema);
        debug!(points = layer.len(), "projected");
        layer
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn regions(&self) -> &RegionSet {
        &self.regions
    }

    pub fn schema(&self) -> &RecordSchema {
        &self.schema
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<Record> {
        vec![
            Record::from_pairs([
                ("settlementLabel", "Dijkhuizen"),
                ("provinceLabel", "Utrecht"),
                ("coordinates", "Point(5.1 52.1)"),
            ]),
            Record::from_pairs([
                ("settlementLabel", "Dijkdorp"),
                ("provinceLabel", "Noordzee"),
                ("coordinates", "Point(3.0 53.0)"),
            ]),
            Record::from_pairs([
                ("settlementLabel", "Dijkveld"),
                ("provinceLabel", "Utrecht"),
                ("coordinates", "Point(onbekend)"),
            ]),
        ]
    }

    fn utrecht() -> RegionSet {
        ["Utrecht".to_string()].into_iter().collect()
    }

    #[test]
    fn test_prepare_filters_regions_and_attaches_coordinates() {
        let dataset = Dataset::prepare(records(), utrecht(), RecordSchema::default());
        assert_eq!(dataset.records().len(), 2);
        assert!(dataset
            .records()
            .iter()
            .all(|r| dataset.regions().contains(r.get("provinceLabel").unwrap())));
        assert_eq!(dataset.records()[0].position(), Some((5.1, 52.1)));
        assert_eq!(dataset.records()[1].position(), None);
    }

    #[test]
    fn test_points_drop_unplaced_rows() {
        let dataset = Dataset::prepare(records(), utrecht(), RecordSchema::default());
        assert_eq!(dataset.select("Dijk").len(), 2);
        let layer = dataset.points("Dijk");
        assert_eq!(layer.len(), 1);
        assert_eq!(layer.points[0].label("settlementLabel"), Some("Dijkhuizen"));
    }

    #[test]
    fn test_select_is_repeatable() {
        let dataset = Dataset::prepare(records(), utrecht(), RecordSchema::default());
        assert_eq!(dataset.select("huizen").len(), 1);
        assert_eq!(dataset.select("veld").len(), 1);
        assert_eq!(dataset.select("").len(), 2);
        assert_eq!(dataset.records().len(), 2);
    }
}
