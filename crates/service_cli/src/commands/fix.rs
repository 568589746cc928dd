//! Fix-errors command implementation
//!
//! Validates every record file, then rewrites each one under the fixed
//! mirror with its flagged rows removed.

use tracing::{info, warn};

use adapter_flatfile::{discover, read_mapping};
use refdata_core::mapping::ReferenceMapper;
use refdata_engine::{run_pool, FileFixer, FileValidator};

use crate::config::AppConfig;
use crate::{CliError, Result};

/// Run the fix-errors command
pub fn run(config_path: &str, year: Option<i32>, workers: usize) -> Result<()> {
    if workers == 0 {
        return Err(CliError::InvalidArgument(
            "workers must be at least 1".to_string(),
        ));
    }

    let config = AppConfig::load(config_path)?;
    let fixed_dir = config.fixed_dir();

    info!("Fixing errors...");
    info!("  Input root: {}", config.input_dir.display());
    info!("  Mapping table: {}", config.mapping_file.display());
    info!("  Output root: {}", fixed_dir.display());
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

    let fixer = FileFixer::new(&config.input_dir, &fixed_dir);
    fixer.prepare_dirs(&files)?;

    let report = run_pool(&files, workers, &validator, Some(&fixer))?;
    report.log_summary();

    info!("Fixed files written under {}", fixed_dir.display());
    info!("Fixing complete");
    Ok(())
}
