//! Flatfile adapter error types.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while reading, writing, or discovering flatfiles.
///
/// `Read`, `Malformed`, and `Empty` are per-file conditions: the pipeline
/// skips the file, records the failure, and keeps running. `Write` and `Io`
/// surface from operations whose failure the caller must handle.
#[derive(Debug, Error)]
pub enum FlatfileError {
    /// The file could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// File being read.
        path: PathBuf,
        /// Underlying CSV-layer failure.
        source: csv::Error,
    },

    /// A row's identifier or date field failed to parse into the expected
    /// columns. Aborts only the affected file.
    #[error("malformed record in {}: {source}", path.display())]
    Malformed {
        /// File being read.
        path: PathBuf,
        /// Deserialisation failure, including the offending line.
        source: csv::Error,
    },

    /// The file holds no data rows, so no trade date can be derived from it.
    #[error("{} contains no records", path.display())]
    Empty {
        /// Offending file.
        path: PathBuf,
    },

    /// A rewritten file could not be produced.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Destination file.
        path: PathBuf,
        /// Underlying CSV-layer failure.
        source: csv::Error,
    },

    /// Filesystem-level failure outside the CSV layer.
    #[error("i/o failure on {}: {source}", path.display())]
    Io {
        /// Path the operation touched.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
}

impl FlatfileError {
    /// Classifies a CSV-layer failure on the read side: transport problems
    /// stay `Read`, anything about row content becomes `Malformed`.
    pub(crate) fn from_read(path: &Path, source: csv::Error) -> Self {
        if source.is_io_error() {
            FlatfileError::Read {
                path: path.to_path_buf(),
                source,
            }
        } else {
            FlatfileError::Malformed {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    pub(crate) fn from_write(path: &Path, source: csv::Error) -> Self {
        FlatfileError::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn from_io(path: &Path, source: std::io::Error) -> Self {
        FlatfileError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
