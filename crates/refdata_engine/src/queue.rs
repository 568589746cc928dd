//! Pre-seeded task queue shared by the worker pool.

use std::path::PathBuf;

use crossbeam_channel::{Receiver, TryRecvError};

/// A queue of file paths, filled once before any worker starts.
///
/// Nothing can be appended after [`seed`](TaskQueue::seed) returns, so an
/// empty pop is a permanent condition: workers treat the first `None` from
/// [`try_pop`](TaskQueue::try_pop) as their signal to publish results and
/// exit, with no timeouts or retry loops.
pub struct TaskQueue {
    tasks: Receiver<PathBuf>,
}

impl TaskQueue {
    /// Builds a queue holding every path in `paths`, in order.
    ///
    /// The sending side is dropped before this returns, which is what makes
    /// exhaustion permanent.
    pub fn seed(paths: Vec<PathBuf>) -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        for path in paths {
            // rx is alive in this scope, so the send cannot fail.
            let _ = tx.send(path);
        }
        Self { tasks: rx }
    }

    /// Pops the next path without blocking.
    ///
    /// Returns `None` once the queue is exhausted. Each seeded path is
    /// delivered to exactly one caller, no matter how many threads pop
    /// concurrently.
    pub fn try_pop(&self) -> Option<PathBuf> {
        match self.tasks.try_recv() {
            Ok(path) => Some(path),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Number of paths not yet popped.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether every seeded path has been popped.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
