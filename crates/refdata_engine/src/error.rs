//! Error types for engine runs.

use std::path::PathBuf;

use adapter_flatfile::FlatfileError;
use thiserror::Error;

/// Errors that abort an engine invocation.
///
/// Per-file problems stay out of this enum on pool runs: workers record them
/// as [`FileFailure`](crate::batch::FileFailure) entries and keep going. The
/// variants here are the conditions nothing downstream can recover from.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A flatfile operation failed in a direct (non-pool) call.
    #[error(transparent)]
    Flatfile(#[from] FlatfileError),

    /// A fix was requested for a path that was never validated.
    #[error("no validation result for {}; validate it before fixing", path.display())]
    MissingValidation {
        /// Path the caller asked to fix.
        path: PathBuf,
    },

    /// One or more workers exited without publishing their batch.
    #[error("worker pool lost {missing} of {expected} result payloads")]
    WorkerLost {
        /// Payloads the aggregator was waiting for.
        expected: usize,
        /// Payloads that never arrived before the channel disconnected.
        missing: usize,
    },

    /// A report artifact could not be written.
    #[error("failed to write report artifact {}: {source}", path.display())]
    Export {
        /// Artifact path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A report artifact could not be serialised.
    #[error("failed to encode report artifact {}: {source}", path.display())]
    Encode {
        /// Artifact path.
        path: PathBuf,
        /// Underlying serialisation error.
        source: serde_json::Error,
    },

    /// An output directory for fixed files could not be created.
    #[error("failed to create output directory {}: {source}", path.display())]
    PrepareDirs {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_validation_display() {
        let err = EngineError::MissingValidation {
            path: PathBuf::from("data/2020/a.csv"),
        };
        assert_eq!(
            err.to_string(),
            "no validation result for data/2020/a.csv; validate it before fixing"
        );
    }

    #[test]
    fn test_worker_lost_display() {
        let err = EngineError::WorkerLost {
            expected: 4,
            missing: 1,
        };
        assert_eq!(err.to_string(), "worker pool lost 1 of 4 result payloads");
    }
}
