//! Check command implementation
//!
//! Verifies that the configuration resolves and the input layout is usable
//! before a real run.

use tracing::info;

use adapter_flatfile::discover;

use crate::config::AppConfig;
use crate::{CliError, Result};

/// Run the check command
pub fn run(config_path: &str) -> Result<()> {
    info!("Checking configuration...");

    let config = AppConfig::load(config_path)?;
    info!("  Config file: {}", config_path);
    info!("  Input root: {}", config.input_dir.display());
    info!("  Mapping table: {}", config.mapping_file.display());
    info!("  Results dir: {}", config.results_dir.display());

    if !config.mapping_file.is_file() {
        return Err(CliError::FileNotFound(
            config.mapping_file.display().to_string(),
        ));
    }
    if !config.input_dir.is_dir() {
        return Err(CliError::FileNotFound(
            config.input_dir.display().to_string(),
        ));
    }

    let files = discover(&config.input_dir, None)?;
    info!("  Record files discovered: {}", files.len());

    info!("Check complete");
    Ok(())
}
