//! Engine configuration via `docdex.toml`
//!
//! On first open, a default `docdex.toml` is created next to the index
//! artifact. To change ranking parameters, edit the file and reopen the
//! engine; nothing is re-read while the engine is running.

use docdex_core::{Error, Result};
use docdex_search::scorer::{Bm25Params, DEFAULT_B, DEFAULT_EPSILON, DEFAULT_K1};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name placed in the index directory.
pub const CONFIG_FILE_NAME: &str = "docdex.toml";

/// BM25 ranking parameters, persisted under the `[bm25]` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bm25Config {
    /// Term frequency saturation (default 1.5)
    #[serde(default = "default_k1")]
    pub k1: f64,
    /// Document length normalization, 0.0 to 1.0 (default 0.75)
    #[serde(default = "default_b")]
    pub b: f64,
    /// Floor factor for negative IDF values (default 0.25)
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
}

fn default_k1() -> f64 {
    DEFAULT_K1
}

fn default_b() -> f64 {
    DEFAULT_B
}

fn default_epsilon() -> f64 {
    DEFAULT_EPSILON
}

impl Default for Bm25Config {
    fn default() -> Self {
        Bm25Config {
            k1: default_k1(),
            b: default_b(),
            epsilon: default_epsilon(),
        }
    }
}

/// Engine configuration loaded from `docdex.toml`.
///
/// # Example
///
/// ```toml
/// [bm25]
/// k1 = 1.5
/// b = 0.75
/// epsilon = 0.25
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct EngineConfig {
    /// BM25 ranking parameters.
    #[serde(default)]
    pub bm25: Bm25Config,
}

impl EngineConfig {
    /// Ranking parameters for the scorer.
    pub fn bm25_params(&self) -> Bm25Params {
        Bm25Params {
            k1: self.bm25.k1,
            b: self.bm25.b,
            epsilon: self.bm25.epsilon,
        }
    }

    /// Check all parameters for sane values.
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending key when a value is out of
    /// range or not finite.
    pub fn validate(&self) -> Result<()> {
        if !self.bm25.k1.is_finite() || self.bm25.k1 < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "bm25.k1 must be a non-negative number, got {}",
                self.bm25.k1
            )));
        }
        if !self.bm25.b.is_finite() || !(0.0..=1.0).contains(&self.bm25.b) {
            return Err(Error::InvalidConfig(format!(
                "bm25.b must be between 0.0 and 1.0, got {}",
                self.bm25.b
            )));
        }
        if !self.bm25.epsilon.is_finite() || self.bm25.epsilon < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "bm25.epsilon must be a non-negative number, got {}",
                self.bm25.epsilon
            )));
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# docdex engine configuration
#
# BM25 ranking parameters. The defaults follow Okapi BM25 conventions
# and suit short prose documents; retune only with relevance tests.
[bm25]
# k1: term frequency saturation. Higher values let repeated terms keep
# adding to the score for longer.
k1 = 1.5

# b: document length normalization, between 0.0 (off) and 1.0 (full).
b = 0.75

# epsilon: negative IDF values are floored to epsilon * average IDF so
# very common terms still contribute.
epsilon = 0.25
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: EngineConfig = toml::from_str(&content).map_err(|e| {
            Error::InvalidConfig(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::SerializationError(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_matches_scorer_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.bm25.k1, 1.5);
        assert_eq!(config.bm25.b, 0.75);
        assert_eq!(config.bm25.epsilon, 0.25);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn default_toml_parses_to_defaults() {
        let config: EngineConfig = toml::from_str(EngineConfig::default_toml()).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn empty_file_yields_defaults() {
        let config: EngineConfig = toml::from_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn partial_section_fills_missing_keys() {
        let config: EngineConfig = toml::from_str("[bm25]\nk1 = 2.0").unwrap();
        assert_eq!(config.bm25.k1, 2.0);
        assert_eq!(config.bm25.b, 0.75);
        assert_eq!(config.bm25.epsilon, 0.25);
    }

    #[test]
    fn validate_rejects_out_of_range_b() {
        let config: EngineConfig = toml::from_str("[bm25]\nb = 1.5").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("bm25.b"));
    }

    #[test]
    fn validate_rejects_negative_k1() {
        let config: EngineConfig = toml::from_str("[bm25]\nk1 = -1.0").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn write_default_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        assert!(!path.exists());
        EngineConfig::write_default_if_missing(&path).unwrap();
        assert!(path.exists());

        let config = EngineConfig::from_file(&path).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn write_default_leaves_existing_file_alone() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[bm25]\nk1 = 9.0\n").unwrap();
        EngineConfig::write_default_if_missing(&path).unwrap();
        let config = EngineConfig::from_file(&path).unwrap();
        assert_eq!(config.bm25.k1, 9.0);
    }

    #[test]
    fn from_file_rejects_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "not valid = = toml").unwrap();
        assert!(EngineConfig::from_file(&path).is_err());
    }

    #[test]
    fn from_file_validates_eagerly() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[bm25]\nepsilon = -0.5\n").unwrap();
        assert!(EngineConfig::from_file(&path).is_err());
    }

    #[test]
    fn round_trips_through_write_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        let config: EngineConfig = toml::from_str("[bm25]\nk1 = 1.2\nb = 0.5").unwrap();
        config.write_to_file(&path).unwrap();
        let back = EngineConfig::from_file(&path).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn bm25_params_mirror_config() {
        let config: EngineConfig = toml::from_str("[bm25]\nk1 = 1.2\nb = 0.5").unwrap();
        let params = config.bm25_params();
        assert_eq!(params.k1, 1.2);
        assert_eq!(params.b, 0.5);
        assert_eq!(params.epsilon, 0.25);
    }
}
