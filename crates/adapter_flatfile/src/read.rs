//! Typed CSV loading for the mapping table and daily record files.

use std::path::Path;

use refdata_core::types::{MappingEntry, Record};

use crate::error::FlatfileError;

/// Loads the reference mapping table from a headered CSV file.
///
/// Expected columns: `Ticker,SecId,StartDate,EndDate`. Extra columns are
/// ignored; row order is preserved (it decides which entry wins when
/// validity windows overlap). Loaded once at startup.
pub fn read_mapping(path: &Path) -> Result<Vec<MappingEntry>, FlatfileError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| FlatfileError::from_read(path, e))?;

    let mut entries = Vec::new();
    for row in reader.deserialize() {
        let entry: MappingEntry = row.map_err(|e| FlatfileError::from_read(path, e))?;
        entries.push(entry);
    }
    Ok(entries)
}

/// Loads one daily record file from a headered CSV file.
///
/// Expected columns include `Ticker,SecId,TradeDate`; any further columns
/// are ignored here and preserved by [`rewrite_without`](crate::rewrite_without).
/// A row whose identifier or date does not parse fails the whole file with
/// [`FlatfileError::Malformed`]: validating a partially read file would
/// produce row positions that no longer line up with the file on disk.
///
/// An existing-but-empty file yields `Ok(vec![])`; deriving a trade date
/// from it is the caller's concern.
pub fn read_records(path: &Path) -> Result<Vec<Record>, FlatfileError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| FlatfileError::from_read(path, e))?;

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: Record = row.map_err(|e| FlatfileError::from_read(path, e))?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use refdata_core::types::SecId;
    use std::fs;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_read_mapping_preserves_row_order() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "mapping.csv",
            "Ticker,SecId,StartDate,EndDate\n\
             AAA,1,2020-01-01,2020-12-31\n\
             AAA,2,2020-06-01,2020-08-31\n\
             BBB,3,2020-01-01,2020-12-31\n",
        );

        let entries = read_mapping(&path).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].sec_id, SecId::new(1));
        assert_eq!(entries[1].sec_id, SecId::new(2));
        assert_eq!(entries[2].ticker, "BBB");
    }

    #[test]
    fn test_read_records_ignores_extra_columns() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "day.csv",
            "Ticker,SecId,TradeDate,Close,Volume\n\
             AAA,1,2020-06-01,10.5,10000\n\
             BBB,9,2020-06-01,3.25,500\n",
        );

        let records = read_records(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].ticker, "AAA");
        assert_eq!(records[1].sec_id, SecId::new(9));
        assert_eq!(records[1].trade_date, "2020-06-01".parse().unwrap());
    }

    #[test]
    fn test_read_records_header_only_file_is_ok_and_empty() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "day.csv", "Ticker,SecId,TradeDate\n");

        let records = read_records(&path).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_read_records_bad_sec_id_is_malformed() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "day.csv",
            "Ticker,SecId,TradeDate\nAAA,not-a-number,2020-06-01\n",
        );

        let err = read_records(&path).unwrap_err();
        assert!(matches!(err, FlatfileError::Malformed { .. }), "{err}");
    }

    #[test]
    fn test_read_records_bad_date_is_malformed() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "day.csv",
            "Ticker,SecId,TradeDate\nAAA,1,01/06/2020\n",
        );

        let err = read_records(&path).unwrap_err();
        assert!(matches!(err, FlatfileError::Malformed { .. }), "{err}");
    }

    #[test]
    fn test_read_records_missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let err = read_records(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, FlatfileError::Read { .. }), "{err}");
    }
}
