//! Configuration structures for the screening pipeline.
//!
//! Settings are read from a TOML file. Every section and field is optional;
//! anything left out takes the value from [`Config::default`].

use serde::Deserialize;
use std::io::ErrorKind;
use std::path::Path;

use super::knn::{KnnParams, Metric, Weighting};
use crate::error::ConfigError;
use crate::locale::Locale;

/// Main configuration structure loaded from `config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Dataset location and split settings
    pub data: DataConfig,
    /// Classifier hyperparameters
    pub model: ModelConfig,
    /// Presentation settings
    pub display: DisplayConfig,
}

/// Data loading configuration.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct DataConfig {
    /// Path to the CSV dataset file
    pub csv_path: String,
    /// Fraction of records held out for evaluation (e.g. 0.25)
    pub test_fraction: f64,
    /// Seed for the train/evaluation shuffle
    pub seed: u64,
}

/// Classifier configuration.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ModelConfig {
    /// Number of neighbors that vote on a prediction
    pub n_neighbors: usize,
    /// "distance" or "uniform"
    pub weights: Weighting,
    /// "euclidean" or "manhattan"
    pub metric: Metric,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub locale: Locale,
}

impl Default for DataConfig {
    fn default() -> Self {
        DataConfig {
            csv_path: "data/Deepression.csv".to_string(),
            test_fraction: 0.25,
            seed: 42,
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        let params = KnnParams::default();
        ModelConfig {
            n_neighbors: params.k,
            weights: params.weighting,
            metric: params.metric,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    ///
    /// Returns `Ok(Config)` if successful, or an error if the file cannot be read,
    /// parsed, or holds out-of-range values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path`, or fall back to the defaults when the file does not exist.
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match Self::load(path) {
            Err(ConfigError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(
                    path = %path.display(),
                    "config file not found, using default configuration"
                );
                Ok(Config::default())
            }
            other => other,
        }
    }

    /// Reject settings the trainer cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fraction = self.data.test_fraction;
        if !(fraction > 0.0 && fraction < 1.0) {
            return Err(ConfigError::Invalid(format!(
                "data.test_fraction must be between 0 and 1 (exclusive), got {fraction}"
            )));
        }
        if self.model.n_neighbors == 0 {
            return Err(ConfigError::Invalid(
                "model.n_neighbors must be at least 1".to_string(),
            ));
        }
        if self.data.csv_path.trim().is_empty() {
            return Err(ConfigError::Invalid("data.csv_path is empty".to_string()));
        }
        Ok(())
    }

    /// Classifier parameters as the trainer expects them.
    pub fn knn_params(&self) -> KnnParams {
        KnnParams {
            k: self.model.n_neighbors,
            weighting: self.model.weights,
            metric: self.model.metric,
        }
    }
}
