//! Region and name filters over records

use crate::query::Record;
use std::collections::BTreeSet;

/// Allow-list of region names, compared by exact string equality
pub type RegionSet = BTreeSet<String>;

/// A pure row predicate; `apply` returns a new vector and never touches
/// its input.
pub trait RecordFilter {
    fn keep(&self, record: &Record) -> bool;

    fn apply(&self, records: &[Record]) -> Vec<Record> {
        records.iter().filter(|r| self.keep(r)).cloned().collect()
    }
}

/// Keeps rows whose region field is a member of the allow-list.
///
/// Rows without the region field are dropped. An empty set keeps nothing.
#[derive(Debug, Clone)]
pub struct RegionFilter {
    field: String,
    regions: RegionSet,
}

impl RegionFilter {
    pub fn new(field: impl Into<String>, regions: RegionSet) -> Self {
        Self {
            field: field.into(),
            regions,
        }
    }

    pub fn regions(&self) -> &RegionSet {
        &self.regions
    }
}

impl RecordFilter for RegionFilter {
    fn keep(&self, record: &Record) -> bool {
        record
            .get(&self.field)
            .is_some_and(|region| self.regions.contains(region))
    }
}

/// Keeps rows whose name field contains a literal substring (case-sensitive).
///
/// A missing name field counts as the empty name, so the empty substring
/// keeps every row.
#[derive(Debug, Clone)]
pub struct NameFilter {
    field: String,
    substring: String,
}

impl NameFilter {
    pub fn new(field: impl Into<String>, substring: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            substring: substring.into(),
        }
    }

    pub fn substring(&self) -> &str {
        &self.substring
    }
}

impl RecordFilter for NameFilter {
    fn keep(&self, record: &Record) -> bool {
        record
            .get(&self.field)
            .unwrap_or_default()
            .contains(self.substring.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Record> {
        vec![
            Record::from_pairs([("settlementLabel", "Dijkstra"), ("provinceLabel", "Utrecht")]),
            Record::from_pairs([("settlementLabel", "Rotterdam"), ("provinceLabel", "Zuid-Holland")]),
            Record::from_pairs([("settlementLabel", "Oosterdijk"), ("provinceLabel", "Noord-Holland")]),
            Record::from_pairs([("settlementLabel", "Middelburg"), ("provinceLabel", "Zeeland (NL)")]),
            Record::from_pairs([("settlementLabel", "Zonder provincie")]),
        ]
    }

    fn regions(names: &[&str]) -> RegionSet {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_region_filter_membership() {
        let filter = RegionFilter::new("provinceLabel", regions(&["Utrecht", "Noord-Holland"]));
        let kept = filter.apply(&rows());
        assert_eq!(kept.len(), 2);
        for r in &kept {
            assert!(filter.regions().contains(r.get("provinceLabel").unwrap()));
        }
    }

    #[test]
    fn test_region_filter_is_exact() {
        let filter = RegionFilter::new("provinceLabel", regions(&["Zeeland", "utrecht"]));
        assert!(filter.apply(&rows()).is_empty());
    }

    #[test]
    fn test_region_filter_all_present_regions_keeps_every_row_with_a_region() {
        let input = rows();
        let present: RegionSet = input
            .iter()
            .filter_map(|r| r.get("provinceLabel").map(str::to_string))
            .collect();
        let with_region: Vec<Record> = input
            .iter()
            .filter(|r| r.contains("provinceLabel"))
            .cloned()
            .collect();
        let kept = RegionFilter::new("provinceLabel", present).apply(&with_region);
        assert_eq!(kept.len(), with_region.len());
    }

    #[test]
    fn test_region_filter_empty_set_keeps_nothing() {
        let kept = RegionFilter::new("provinceLabel", RegionSet::new()).apply(&rows());
        assert!(kept.is_empty());
    }

    #[test]
    fn test_name_filter_is_case_sensitive() {
        let kept = NameFilter::new("settlementLabel", "dijk").apply(&rows());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].get("settlementLabel"), Some("Oosterdijk"));

        let kept = NameFilter::new("settlementLabel", "Dijk").apply(&rows());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].get("settlementLabel"), Some("Dijkstra"));
    }

    #[test]
    fn test_name_filter_is_literal() {
        let kept = NameFilter::new("settlementLabel", "d.jk").apply(&rows());
        assert!(kept.is_empty());
    }

    #[test]
    fn test_name_filter_empty_substring_keeps_everything() {
        let input = rows();
        let kept = NameFilter::new("settlementLabel", "").apply(&input);
        assert_eq!(kept.len(), input.len());
    }

    #[test]
    fn test_filters_do_not_mutate_input() {
        let input = rows();
        let before = input.clone();
        let _ = NameFilter::new("settlementLabel", "dam").apply(&input);
        let _ = RegionFilter::new("provinceLabel", regions(&["Utrecht"])).apply(&input);
        assert_eq!(input, before);
    }

    #[test]
    fn test_filters_compose() {
        let by_region = RegionFilter::new("provinceLabel", regions(&["Utrecht", "Zuid-Holland"]));
        let by_name = NameFilter::new("settlementLabel", "dam");
        let kept = by_name.apply(&by_region.apply(&rows()));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].get("settlementLabel"), Some("Rotterdam"));
    }
}
