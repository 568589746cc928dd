//! File-level validation against the shared mapping table.

use std::path::Path;

use adapter_flatfile::{read_records, FlatfileError};
use refdata_core::mapping::ReferenceMapper;
use refdata_core::validate::{validate_records, ValidationResult};
use tracing::error;

use crate::error::EngineError;

/// Validates one record file at a time against a reference mapping.
///
/// The validator owns the full mapping table and derives a single-date view
/// per file from the file's own trade date, so one instance serves files
/// spanning any range of dates. It is `Sync` and is shared by reference
/// across the whole worker pool.
pub struct FileValidator {
    mapper: ReferenceMapper,
}

impl FileValidator {
    /// Wraps a loaded mapping table.
    pub fn new(mapper: ReferenceMapper) -> Self {
        Self { mapper }
    }

    /// The mapping table this validator consults.
    pub fn mapper(&self) -> &ReferenceMapper {
        &self.mapper
    }

    /// Reads `path` and flags rows inconsistent with the mapping.
    ///
    /// Every row of a file carries the same trade date, so the first record
    /// selects the mapping view for the whole file. A file with no data rows
    /// is an error here: there is no date to resolve a view for.
    ///
    /// Ambiguous tickers (several windows active on the file's date) are
    /// logged and resolved in favour of the entry listed first in the table;
    /// they never fail the file.
    pub fn validate(&self, path: &Path) -> Result<ValidationResult, EngineError> {
        let records = read_records(path)?;
        let Some(first) = records.first() else {
            return Err(FlatfileError::Empty {
                path: path.to_path_buf(),
            }
            .into());
        };

        let daily = self.mapper.active_mapping(first.trade_date);
        for ambiguity in daily.ambiguities() {
            error!(
                "{}: ticker {} maps to several identifiers on {} (kept {}, ignored {})",
                path.display(),
                ambiguity.ticker,
                daily.date(),
                ambiguity.kept,
                ambiguity.ignored
            );
        }

        Ok(validate_records(&daily, &records))
    }
}
