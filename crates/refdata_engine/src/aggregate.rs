//! Pool orchestration and result aggregation.

use std::collections::HashSet;
use std::path::PathBuf;
use std::thread;

use crossbeam_channel::{unbounded, Receiver};
use tracing::{info, warn};

use crate::error::EngineError;
use crate::fixer::FileFixer;
use crate::queue::TaskQueue;
use crate::report::MergedReport;
use crate::validate::FileValidator;
use crate::worker::{process_file, run_worker, IndicesPayload, SummariesPayload};
use crate::WorkerBatch;

/// Runs the validation pool (with an optional fixing stage) over `files`.
///
/// The queue is seeded in full before the first worker starts. Each worker
/// publishes exactly one payload per result channel once it sees the queue
/// exhausted; the aggregator blocks for exactly `workers` payloads per
/// channel, joins the pool, then drains any stragglers left in the buffers.
/// Payload maps are merged key-wise, so the merged report is independent of
/// how files were distributed over workers.
///
/// With `workers <= 1` the same per-file routine runs inline on the calling
/// thread; no threads or channels are created.
///
/// # Errors
///
/// [`EngineError::WorkerLost`] if a result channel disconnects before the
/// payload quota is met. Per-file problems are not errors here; they land in
/// [`MergedReport::failures`].
pub fn run_pool(
    files: &[PathBuf],
    workers: usize,
    validator: &FileValidator,
    fixer: Option<&FileFixer>,
) -> Result<MergedReport, EngineError> {
    if workers <= 1 {
        return Ok(run_serial(files, validator, fixer));
    }

    info!("validating {} files over {workers} workers", files.len());

    let queue = TaskQueue::seed(files.to_vec());
    let (indices_tx, indices_rx) = unbounded();
    let (summaries_tx, summaries_rx) = unbounded();

    let mut report = MergedReport::default();

    let outcome = thread::scope(|scope| {
        for worker in 0..workers {
            let queue = &queue;
            let indices_tx = indices_tx.clone();
            let summaries_tx = summaries_tx.clone();
            scope.spawn(move || {
                run_worker(worker, queue, validator, fixer, &indices_tx, &summaries_tx)
            });
        }
        // Workers hold clones; dropping the originals lets a dying pool
        // disconnect the channels instead of leaving the recv below waiting
        // on a payload that will never come.
        drop(indices_tx);
        drop(summaries_tx);

        collect_quota(workers, &indices_rx, &summaries_rx, &mut report)
    });
    outcome?;

    // All workers have joined. Anything still buffered arrived outside the
    // one-payload protocol; fold it in rather than lose results.
    drain_stragglers(&indices_rx, &summaries_rx, &mut report);

    Ok(report)
}

fn run_serial(
    files: &[PathBuf],
    validator: &FileValidator,
    fixer: Option<&FileFixer>,
) -> MergedReport {
    info!("validating {} files on a single worker", files.len());

    let mut batch = WorkerBatch::default();
    for path in files {
        process_file(0, path, validator, fixer, &mut batch);
    }

    let mut report = MergedReport::default();
    report.absorb_batch(batch);
    report
}

/// Receives exactly one payload per worker per channel, in channel order.
fn collect_quota(
    workers: usize,
    indices_rx: &Receiver<IndicesPayload>,
    summaries_rx: &Receiver<SummariesPayload>,
    report: &mut MergedReport,
) -> Result<(), EngineError> {
    let mut seen = HashSet::with_capacity(workers);
    for received in 0..workers {
        let payload = indices_rx.recv().map_err(|_| EngineError::WorkerLost {
            expected: workers,
            missing: workers - received,
        })?;
        if !seen.insert(payload.worker) {
            warn!(
                "worker {} published more than one indices payload",
                payload.worker
            );
        }
        report.merge_indices(payload);
    }

    let mut seen = HashSet::with_capacity(workers);
    for received in 0..workers {
        let payload = summaries_rx.recv().map_err(|_| EngineError::WorkerLost {
            expected: workers,
            missing: workers - received,
        })?;
        if !seen.insert(payload.worker) {
            warn!(
                "worker {} published more than one summaries payload",
                payload.worker
            );
        }
        report.merge_summaries(payload);
    }
    Ok(())
}

fn drain_stragglers(
    indices_rx: &Receiver<IndicesPayload>,
    summaries_rx: &Receiver<SummariesPayload>,
    report: &mut MergedReport,
) {
    while let Ok(extra) = indices_rx.try_recv() {
        warn!(
            "draining indices payload from worker {} after the quota was met",
            extra.worker
        );
        report.merge_indices(extra);
    }
    while let Ok(extra) = summaries_rx.try_recv() {
        warn!(
            "draining summaries payload from worker {} after the quota was met",
            extra.worker
        );
        report.merge_summaries(extra);
    }
}
