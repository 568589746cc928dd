//! Merged run results and JSON artifact export.

use std::collections::BTreeMap;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use refdata_core::types::TradeDate;
use refdata_core::validate::DateSummary;
use serde::Serialize;
use tracing::{info, warn};

use crate::batch::{FileFailure, WorkerBatch};
use crate::error::EngineError;
use crate::worker::{IndicesPayload, SummariesPayload};

/// File name of the path-keyed artifact.
pub const INDICES_ARTIFACT: &str = "problematic_indices.json";

/// File name of the date-keyed artifact.
pub const SEC_IDS_ARTIFACT: &str = "problematic_sec_ids.json";

/// Everything a run produced, merged across all workers.
///
/// Both maps are ordered, so serialising a report twice over the same inputs
/// yields byte-identical artifacts whatever the worker count or scheduling.
#[derive(Debug, Clone, Default)]
pub struct MergedReport {
    /// File path to invalid row positions, ascending within each file.
    pub indices: BTreeMap<String, Vec<usize>>,
    /// Trade date to offending-identifier roll-up.
    pub summaries: BTreeMap<TradeDate, DateSummary>,
    /// Files skipped across the whole run, with reasons.
    pub failures: Vec<FileFailure>,
}

impl MergedReport {
    /// Merges one worker's path-keyed payload.
    ///
    /// Each file is handled by exactly one worker, so the keys of distinct
    /// payloads are disjoint. A collision means a file was processed twice;
    /// the later copy wins and the anomaly is logged, never fatal.
    pub(crate) fn merge_indices(&mut self, payload: IndicesPayload) {
        for (path, flagged) in payload.indices {
            if self.indices.contains_key(&path) {
                warn!(
                    "duplicate results for {path} (worker {}); keeping the later copy",
                    payload.worker
                );
            }
            self.indices.insert(path, flagged);
        }
        self.failures.extend(payload.failures);
    }

    /// Merges one worker's date-keyed payload.
    ///
    /// Dates may legitimately repeat across workers, so summaries union
    /// rather than replace.
    pub(crate) fn merge_summaries(&mut self, payload: SummariesPayload) {
        for (date, summary) in payload.summaries {
            self.summaries.entry(date).or_default().absorb(&summary);
        }
    }

    /// Folds a whole batch in, for the single-worker inline path.
    pub(crate) fn absorb_batch(&mut self, batch: WorkerBatch) {
        let WorkerBatch {
            indices,
            summaries,
            failures,
        } = batch;
        self.merge_indices(IndicesPayload {
            worker: 0,
            indices,
            failures,
        });
        self.merge_summaries(SummariesPayload {
            worker: 0,
            summaries,
        });
    }

    /// Number of files that produced a validation result.
    pub fn files_processed(&self) -> usize {
        self.indices.len()
    }

    /// Total flagged rows across every file.
    pub fn rows_flagged(&self) -> usize {
        self.indices.values().map(Vec::len).sum()
    }

    /// Writes both JSON artifacts into `results_dir`, creating it if needed.
    ///
    /// [`INDICES_ARTIFACT`] holds the path-keyed flagged positions and
    /// [`SEC_IDS_ARTIFACT`] the date-keyed identifier roll-up. An empty run
    /// still writes both files, each holding an empty object.
    pub fn write_artifacts(&self, results_dir: &Path) -> Result<(), EngineError> {
        fs::create_dir_all(results_dir).map_err(|source| EngineError::Export {
            path: results_dir.to_path_buf(),
            source,
        })?;
        write_json(&results_dir.join(INDICES_ARTIFACT), &self.indices)?;
        write_json(&results_dir.join(SEC_IDS_ARTIFACT), &self.summaries)?;
        Ok(())
    }

    /// Logs run totals and every recorded skip.
    pub fn log_summary(&self) {
        info!(
            "processed {} files: {} rows flagged across {} trade dates",
            self.files_processed(),
            self.rows_flagged(),
            self.summaries.len()
        );
        if !self.failures.is_empty() {
            warn!("{} files were skipped:", self.failures.len());
            for failure in &self.failures {
                warn!("  {}: {}", failure.path, failure.reason);
            }
        }
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), EngineError> {
    let file = fs::File::create(path).map_err(|source| EngineError::Export {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value).map_err(|source| EngineError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(|source| EngineError::Export {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}
