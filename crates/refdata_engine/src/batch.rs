//! Per-worker result accumulation.

use std::collections::BTreeMap;
use std::path::Path;

use refdata_core::types::TradeDate;
use refdata_core::validate::{DateSummary, ValidationResult};

/// A file the pipeline skipped, with the reason it was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    /// Path of the skipped file.
    pub path: String,
    /// Human-readable description of what went wrong.
    pub reason: String,
}

/// Results accumulated by one worker across every file it pulled.
///
/// A batch is private to its worker for the worker's whole lifetime. No
/// intermediate results cross threads: ownership of the batch contents moves
/// to the aggregator exactly once, after the worker sees the queue exhausted.
/// The ordered maps make merged output deterministic regardless of which
/// worker handled which file.
#[derive(Debug, Clone, Default)]
pub struct WorkerBatch {
    /// File path to invalid row positions, ascending.
    pub indices: BTreeMap<String, Vec<usize>>,
    /// Trade date to offending-identifier roll-up.
    pub summaries: BTreeMap<TradeDate, DateSummary>,
    /// Files skipped, with reasons.
    pub failures: Vec<FileFailure>,
}

impl WorkerBatch {
    /// Folds one file's validation outcome into the batch.
    ///
    /// The file's flagged positions are keyed by its path; the summary is
    /// unioned into whatever this worker already holds for that trade date,
    /// since several files may share one (for example after a year filter
    /// narrowed a multi-feed layout).
    pub fn record(&mut self, path: &Path, result: ValidationResult) {
        self.summaries
            .entry(result.trade_date)
            .or_default()
            .absorb(&result.summary);
        self.indices
            .insert(path.display().to_string(), result.invalid_indices);
    }

    /// Records a file that was skipped rather than validated.
    pub fn record_failure(&mut self, path: &Path, reason: impl Into<String>) {
        self.failures.push(FileFailure {
            path: path.display().to_string(),
            reason: reason.into(),
        });
    }

    /// Number of files this batch holds validation results for.
    pub fn files(&self) -> usize {
        self.indices.len()
    }

    /// Whether the batch recorded nothing at all.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty() && self.summaries.is_empty() && self.failures.is_empty()
    }
}
