//! CLI configuration loading
//!
//! Settings come from an optional TOML file merged with `REFDATA_*`
//! environment overrides; anything left unset falls back to the defaults
//! below.

use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::Result;

/// Runtime configuration for the refdata pipeline.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Root directory holding the daily record files, one subdirectory per
    /// year.
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,

    /// CSV file holding the ticker to SecId mapping table.
    #[serde(default = "default_mapping_file")]
    pub mapping_file: PathBuf,

    /// Directory receiving JSON artifacts and fixed files.
    #[serde(default = "default_results_dir")]
    pub results_dir: PathBuf,
}

fn default_input_dir() -> PathBuf {
    PathBuf::from("data/input")
}

fn default_mapping_file() -> PathBuf {
    PathBuf::from("data/mapping.csv")
}

fn default_results_dir() -> PathBuf {
    PathBuf::from("results")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            mapping_file: default_mapping_file(),
            results_dir: default_results_dir(),
        }
    }
}

impl AppConfig {
    /// Loads `path` (optional TOML) merged with `REFDATA_*` environment
    /// overrides.
    pub fn load(path: &str) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("REFDATA"))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Mirror root for fixed record files.
    pub fn fixed_dir(&self) -> PathBuf {
        self.results_dir.join("fixed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");

        let config = AppConfig::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_toml_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("refdata.toml");
        fs::write(
            &path,
            "input_dir = \"feeds/daily\"\nresults_dir = \"out\"\n",
        )
        .unwrap();

        let config = AppConfig::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.input_dir, PathBuf::from("feeds/daily"));
        assert_eq!(config.mapping_file, PathBuf::from("data/mapping.csv"));
        assert_eq!(config.results_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_fixed_dir_sits_under_results() {
        let config = AppConfig::default();
        assert_eq!(config.fixed_dir(), PathBuf::from("results/fixed"));
    }
}
