//! Run configuration: YAML file, built-in defaults, CLI overrides

use crate::query::queries::{REGION_FIELD, REGION_QUERY, SETTLEMENT_QUERY, WIKIDATA_ENDPOINT};
use crate::transform::RecordSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Everything a run needs besides the data itself.
///
/// Every field is optional in the file; missing ones take the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// SPARQL endpoint URL
    pub endpoint: String,
    pub user_agent: String,
    /// Query returning one row per settlement
    pub settlement_query: String,
    /// Query returning the region allow-list
    pub region_query: String,
    /// Field of the region query holding the region name
    pub region_query_field: String,
    /// GeoJSON file with the boundary backdrop
    pub boundary_path: PathBuf,
    /// Default name filter
    pub substring: String,
    /// Seed for annotation sampling
    pub seed: u64,
    /// Output image (`.svg` for vector output)
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub schema: RecordSchema,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: WIKIDATA_ENDPOINT.into(),
            user_agent: format!("settlemap/{}", crate::VERSION),
            settlement_query: SETTLEMENT_QUERY.into(),
            region_query: REGION_QUERY.into(),
            region_query_field: REGION_FIELD.into(),
            boundary_path: PathBuf::from("data/provinces.geojson"),
            substring: "dijk".into(),
            seed: 42,
            output: PathBuf::from("settlements.png"),
            width: 1800,
            height: 1800,
            schema: RecordSchema::default(),
        }
    }
}

impl Config {
    pub fn from_yaml(text: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    /// Resolve the configuration for a run.
    ///
    /// An explicit path must exist. Without one, the per-user file
    /// (`<config dir>/settlemap/config.yaml`) is used if present, otherwise
    /// the defaults.
    pub fn load(explicit: Option<&Path>) -> ConfigResult<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading config");
            return Self::from_file(path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => {
                debug!(path = %path.display(), "loading user config");
                Self::from_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}

/// `~/.config/settlemap/config.yaml` (platform equivalent)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("settlemap").join("config.yaml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.substring, "dijk");
        assert_eq!(config.endpoint, "https://query.wikidata.org/sparql");
        assert_eq!(config.schema.region_field, "provinceLabel");
        assert!(config.settlement_query.contains("?coordinates"));
        assert!(config.region_query.contains("?provinceLabel"));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = Config::from_yaml(
            "substring: dam\nseed: 7\nschema:\n  label_fields: [settlementLabel, provinceLabel]\n",
        )
        .unwrap();
        assert_eq!(config.substring, "dam");
        assert_eq!(config.seed, 7);
        assert_eq!(config.schema.label_fields, vec!["settlementLabel", "provinceLabel"]);
        assert_eq!(config.schema.name_field, "settlementLabel");
        assert_eq!(config.width, 1800);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(Config::from_yaml("{}").unwrap(), Config::default());
    }

    #[test]
    fn test_bad_yaml() {
        assert!(matches!(Config::from_yaml("seed: [1, 2"), Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "boundary_path: /tmp/gemeenten.geojson").unwrap();
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.boundary_path, PathBuf::from("/tmp/gemeenten.geojson"));
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let err = Config::load(Some(Path::new("/nonexistent/settlemap.yaml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
