//! Schema-preserving rewrite of a record file with flagged rows removed.

use std::collections::BTreeSet;
use std::path::Path;

use crate::error::FlatfileError;

/// Copies `src` to `dest`, omitting the data rows at the given 0-based
/// positions (the header line is not counted and is always written).
///
/// Rows pass through as raw CSV records, so columns beyond
/// `Ticker,SecId,TradeDate` survive untouched, as does the column order.
/// Positions past the end of the file are ignored. `dest`'s
/// parent directory must already exist; creating the mirrored output tree
/// ahead of time is the fixer's job.
///
/// Returns the number of data rows written.
pub fn rewrite_without(src: &Path, dest: &Path, flagged: &[usize]) -> Result<usize, FlatfileError> {
    let drop: BTreeSet<usize> = flagged.iter().copied().collect();

    let mut reader = csv::Reader::from_path(src).map_err(|e| FlatfileError::from_read(src, e))?;
    let mut writer = csv::Writer::from_path(dest).map_err(|e| FlatfileError::from_write(dest, e))?;

    let headers = reader
        .headers()
        .map_err(|e| FlatfileError::from_read(src, e))?
        .clone();
    writer
        .write_record(&headers)
        .map_err(|e| FlatfileError::from_write(dest, e))?;

    let mut written = 0;
    for (index, row) in reader.records().enumerate() {
        let row = row.map_err(|e| FlatfileError::from_read(src, e))?;
        if drop.contains(&index) {
            continue;
        }
        writer
            .write_record(&row)
            .map_err(|e| FlatfileError::from_write(dest, e))?;
        written += 1;
    }

    writer
        .flush()
        .map_err(|e| FlatfileError::from_io(dest, e))?;
    Ok(written)
}
