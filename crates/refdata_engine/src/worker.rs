//! Worker loop: pull, validate, optionally fix, publish once.

use std::collections::BTreeMap;
use std::path::Path;

use crossbeam_channel::Sender;
use refdata_core::types::TradeDate;
use refdata_core::validate::DateSummary;
use tracing::{debug, warn};

use crate::batch::{FileFailure, WorkerBatch};
use crate::fixer::FileFixer;
use crate::queue::TaskQueue;
use crate::validate::FileValidator;

/// Path-keyed half of a worker's batch, tagged with its origin.
pub(crate) struct IndicesPayload {
    pub worker: usize,
    pub indices: BTreeMap<String, Vec<usize>>,
    pub failures: Vec<FileFailure>,
}

/// Date-keyed half of a worker's batch, tagged with its origin.
pub(crate) struct SummariesPayload {
    pub worker: usize,
    pub summaries: BTreeMap<TradeDate, DateSummary>,
}

/// The loop each pool thread runs.
///
/// Pops until the queue is exhausted, accumulating into a private batch,
/// then publishes exactly one payload per result channel and returns. The
/// aggregator counts on that publish cardinality.
pub(crate) fn run_worker(
    worker: usize,
    queue: &TaskQueue,
    validator: &FileValidator,
    fixer: Option<&FileFixer>,
    indices_tx: &Sender<IndicesPayload>,
    summaries_tx: &Sender<SummariesPayload>,
) {
    let mut batch = WorkerBatch::default();

    while let Some(path) = queue.try_pop() {
        process_file(worker, &path, validator, fixer, &mut batch);
    }

    debug!("worker {worker}: queue exhausted after {} files", batch.files());

    let WorkerBatch {
        indices,
        summaries,
        failures,
    } = batch;
    // If the receivers are gone the aggregator has already bailed; there is
    // nobody left to publish to.
    let _ = indices_tx.send(IndicesPayload {
        worker,
        indices,
        failures,
    });
    let _ = summaries_tx.send(SummariesPayload { worker, summaries });
}

/// Validates (and optionally fixes) a single file into `batch`.
///
/// Shared by the pool threads and the single-worker inline path so both
/// produce identical per-file behaviour. Failures are recorded, never
/// raised: one unreadable file must not take the run down.
pub(crate) fn process_file(
    worker: usize,
    path: &Path,
    validator: &FileValidator,
    fixer: Option<&FileFixer>,
    batch: &mut WorkerBatch,
) {
    let result = match validator.validate(path) {
        Ok(result) => result,
        Err(err) => {
            warn!("worker {worker}: skipping {}: {err}", path.display());
            batch.record_failure(path, err.to_string());
            return;
        }
    };

    debug!(
        "worker {worker}: {} has {} flagged rows",
        path.display(),
        result.invalid_indices.len()
    );
    batch.record(path, result);

    if let Some(fixer) = fixer {
        match fixer.fix_with(path, &batch.indices) {
            Ok(written) => debug!(
                "worker {worker}: wrote {written} rows to {}",
                fixer.output_path(path).display()
            ),
            Err(err) => {
                warn!(
                    "worker {worker}: could not fix {}: {err}",
                    path.display()
                );
                batch.record_failure(path, err.to_string());
            }
        }
    }
}
