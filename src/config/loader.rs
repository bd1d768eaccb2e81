//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the
//! statutory insurance rate table from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{InsuranceRates, RateTableConfig};

/// Loads and provides access to the payroll rate configuration.
///
/// The `ConfigLoader` reads a YAML rate file from a directory and exposes
/// the parsed, immutable rate table. Construct it once at process start
/// and share it; nothing in it ever mutates.
///
/// # Directory Structure
///
/// ```text
/// config/payroll/
/// └── insurance.yaml   # Statutory insurance contribution rates
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll").unwrap();
/// println!("Rates effective {}", loader.year());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    year: i32,
    source: String,
    rates: InsuranceRates,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/payroll")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The rate file is missing (`ConfigNotFound`)
    /// - The rate file contains invalid YAML (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let insurance_path = path.join("insurance.yaml");
        let config = Self::load_yaml::<RateTableConfig>(&insurance_path)?;

        Ok(Self {
            year: config.year,
            source: config.source,
            rates: config.rates,
        })
    }

    /// Builds a loader around the compiled-in 2026 rate table.
    ///
    /// Useful for tests and for deployments that have not externalized
    /// their rate configuration yet.
    pub fn with_default_rates() -> Self {
        Self {
            year: 2026,
            source: "built-in".to_string(),
            rates: InsuranceRates::korea_2026(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the insurance rate table.
    pub fn rates(&self) -> &InsuranceRates {
        &self.rates
    }

    /// Returns the year the loaded rates took effect.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the statutory source the rates were transcribed from.
    pub fn source(&self) -> &str {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rates_match_korea_2026() {
        let loader = ConfigLoader::with_default_rates();
        assert_eq!(*loader.rates(), InsuranceRates::korea_2026());
        assert_eq!(loader.year(), 2026);
    }

    #[test]
    fn test_load_from_repo_config_dir() {
        let loader = ConfigLoader::load("./config/payroll").unwrap();
        assert_eq!(loader.year(), 2026);
        assert_eq!(*loader.rates(), InsuranceRates::korea_2026());
    }

    #[test]
    fn test_missing_directory_returns_config_not_found() {
        let result = ConfigLoader::load("./does/not/exist");

        assert!(result.is_err());
        match result.unwrap_err() {
            EngineError::ConfigNotFound { path } => {
                assert!(path.contains("insurance.yaml"));
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let dir = std::env::temp_dir().join("payroll_engine_loader_test");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("insurance.yaml"), "year: [not a year").unwrap();

        let result = ConfigLoader::load(&dir);

        match result.unwrap_err() {
            EngineError::ConfigParseError { path, .. } => {
                assert!(path.contains("insurance.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }
}
