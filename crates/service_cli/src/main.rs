//! Refdata CLI - Command Line Operations for Flatfile Validation
//!
//! This is the operational entry point for the refdata validation pipeline.
//!
//! # Commands
//!
//! - `refdata identify-errors` - Flag rows inconsistent with the mapping table
//! - `refdata fix-errors` - Rewrite record files with flagged rows removed
//! - `refdata check` - Check configuration and input layout
//!
//! # Architecture
//!
//! As the service layer of the workspace, this crate orchestrates the kernel
//! (`refdata_core`), adapter (`adapter_flatfile`), and engine
//! (`refdata_engine`) layers behind a unified command-line interface.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

/// Reference-data flatfile validation CLI
#[derive(Parser)]
#[command(name = "refdata")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "refdata.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Flag rows inconsistent with the mapping table
    IdentifyErrors {
        /// Restrict the run to one year subdirectory (e.g. 2020)
        #[arg(short, long)]
        year: Option<i32>,

        /// Export the merged report as JSON artifacts
        #[arg(short, long, default_value_t = true, action = clap::ArgAction::Set)]
        export: bool,

        /// Number of pool workers (1 runs single-threaded)
        #[arg(short, long, default_value_t = num_cpus::get())]
        workers: usize,
    },

    /// Rewrite record files with flagged rows removed
    FixErrors {
        /// Restrict the run to one year subdirectory (e.g. 2020)
        #[arg(short, long)]
        year: Option<i32>,

        /// Number of pool workers (1 runs single-threaded)
        #[arg(short, long, default_value_t = num_cpus::get())]
        workers: usize,
    },

    /// Check configuration and input layout
    Check,
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::IdentifyErrors {
            year,
            export,
            workers,
        } => commands::identify::run(&cli.config, year, export, workers),
        Commands::FixErrors { year, workers } => commands::fix::run(&cli.config, year, workers),
        Commands::Check => commands::check::run(&cli.config),
    }
}
