//! Strategy set configuration.
//!
//! A strategy set is a TOML file listing strategies by registry name with
//! their numeric parameters:
//!
//! ```toml
//! [[strategies]]
//! component_type = "macd_crossover"
//! params = { fast_period = 8, slow_period = 21 }
//!
//! [[strategies]]
//! component_type = "oscillator_threshold"
//! params = { breakout = 1 }
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::factory::{create_strategy, FactoryError, StrategyConfig};
use super::Strategy;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("read strategy file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse strategy TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// The complete strategy set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrategySet {
    #[serde(default)]
    pub strategies: Vec<StrategyConfig>,
}

impl StrategySet {
    /// Load a strategy set from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse a strategy set from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// One strategy of every kind, all parameters at their defaults.
    pub fn all_defaults() -> Self {
        Self {
            strategies: super::StrategyKind::ALL
                .iter()
                .map(|kind| StrategyConfig::new(kind.as_str()))
                .collect(),
        }
    }

    /// Instantiate every configured strategy, failing on the first unknown type.
    pub fn build(&self) -> Result<Vec<Box<dyn Strategy>>, FactoryError> {
        self.strategies.iter().map(create_strategy).collect()
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tables_and_integer_params() {
        let set = StrategySet::from_toml(
            r#"
            [[strategies]]
            component_type = "macd_crossover"
            params = { fast_period = 8, slow_period = 21.0 }

            [[strategies]]
            component_type = "supertrend_flip"
            "#,
        )
        .unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.strategies[0].params["fast_period"], 8.0);
        assert_eq!(set.strategies[0].params["slow_period"], 21.0);
        assert!(set.strategies[1].params.is_empty());
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strategies.toml");
        std::fs::write(
            &path,
            r#"
            [[strategies]]
            component_type = "aroon_crossover"
            params = { length = 14 }

            [[strategies]]
            component_type = "range_bands"
            "#,
        )
        .unwrap();

        let set = StrategySet::from_file(&path).unwrap();
        assert_eq!(set.len(), 2);
        let built = set.build().unwrap();
        assert_eq!(built[0].name(), "aroon_crossover");
        assert_eq!(built[0].warmup_bars(), 16);
        assert_eq!(built[1].name(), "range_bands");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        match StrategySet::from_file(&path) {
            Err(ConfigError::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected an I/O error, got {other:?}"),
        }
    }

    #[test]
    fn empty_document_is_empty_set() {
        let set = StrategySet::from_toml("").unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = StrategySet::from_toml("[[strategies]\ncomponent_type = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn all_defaults_builds() {
        let set = StrategySet::all_defaults();
        let built = set.build().unwrap();
        assert_eq!(built.len(), 9);
    }

    #[test]
    fn unknown_type_fails_build() {
        let set = StrategySet::from_toml(
            r#"
            [[strategies]]
            component_type = "coin_flip"
            "#,
        )
        .unwrap();
        assert!(set.build().is_err());
    }
}
