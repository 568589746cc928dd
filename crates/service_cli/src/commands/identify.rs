//! Identify-errors command implementation
//!
//! Validates every record file against the mapping table and exports the
//! merged report as JSON artifacts.

use tracing::{info, warn};

use adapter_flatfile::{discover, read_mapping};
use refdata_core::mapping::ReferenceMapper;
use refdata_engine::{run_pool, FileValidator};

use crate::config::AppConfig;
use crate::{CliError, Result};

/// Run the identify-errors command
pub fn run(config_path: &str, year: Option<i32>, export: bool, workers: usize) -> Result<()> {
    if workers == 0 {
        return Err(CliError::InvalidArgument(
            "workers must be at least 1".to_string(),
        ));
    }

    let config = AppConfig::load(config_path)?;

    info!("Identifying errors...");
    info!("  Input root: {}", config.input_dir.display());
    info!("  Mapping table: {}", config.mapping_file.display());
    match year {
        Some(year) => info!("  Year: {}", year),
        None => info!("  Year: all"),
    }
    info!("  Workers: {}", workers);

    let entries = read_mapping(&config.mapping_file)?;
    if entries.is_empty() {
        warn!(
            "Mapping table {} has no entries; every row will be out of range",
            config.mapping_file.display()
        );
    }
    let validator = FileValidator::new(ReferenceMapper::new(entries));

    let files = discover(&config.input_dir, year)?;
    info!("  Files: {}", files.len());
    if files.is_empty() {
        warn!("No csv files found under {}", config.input_dir.display());
    }

    let report = run_pool(&files, workers, &validator, None)?;

    if export {
        report.write_artifacts(&config.results_dir)?;
        info!("Artifacts written to {}", config.results_dir.display());
    }
    report.log_summary();

    info!("Identification complete");
    Ok(())
}
