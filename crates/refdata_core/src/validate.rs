//! Per-day record validation against the active mapping.
//!
//! A record is judged against the [`DailyMapper`](crate::mapping::DailyMapper)
//! for its file's trade date:
//!
//! - ticker unmapped on that date → the row is **out of range**: its SecId is
//!   reported, but the row position is not flagged (unmapped tickers are
//!   removed from consideration first, matching the correction policy);
//! - ticker mapped but to a different SecId → the row is **invalid**: its
//!   SecId is reported and its position is flagged for removal;
//! - ticker mapped to the declared SecId → the row is valid.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::mapping::DailyMapper;
use crate::types::{Record, SecId, TradeDate};

/// Per-trade-date roll-up of offending security identifiers.
///
/// Serialises as `{"invalid": [...], "out_of_range": [...]}`; the sets keep
/// identifiers deduplicated and sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSummary {
    /// Identifiers declared by rows whose ticker maps to a different SecId.
    pub invalid: BTreeSet<SecId>,
    /// Identifiers declared by rows whose ticker has no active mapping.
    pub out_of_range: BTreeSet<SecId>,
}

impl DateSummary {
    /// Whether nothing was flagged for this date.
    pub fn is_empty(&self) -> bool {
        self.invalid.is_empty() && self.out_of_range.is_empty()
    }

    /// Set-unions `other` into `self`.
    ///
    /// Two files can share a trade date, so summaries for the same key merge
    /// by union; this keeps the merged report independent of how files were
    /// distributed over workers.
    pub fn absorb(&mut self, other: &DateSummary) {
        self.invalid.extend(other.invalid.iter().copied());
        self.out_of_range.extend(other.out_of_range.iter().copied());
    }
}

/// Outcome of validating one file's records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Trade date shared by the file's records.
    pub trade_date: TradeDate,
    /// 0-based data-row positions of invalid rows, ascending. Out-of-range
    /// rows are excluded.
    pub invalid_indices: Vec<usize>,
    /// Identifier roll-up for the file's trade date.
    pub summary: DateSummary,
}

/// Validates `records` against the mapping view for their trade date.
///
/// Row positions are 0-based over the data rows in file order (the header
/// line is not counted). The caller guarantees `records` is non-empty and
/// single-date; this function only reads `mapper.date()` for the result key.
///
/// # Examples
///
/// ```
/// use refdata_core::mapping::ReferenceMapper;
/// use refdata_core::types::{MappingEntry, Record, SecId, TradeDate};
/// use refdata_core::validate::validate_records;
///
/// let mapper = ReferenceMapper::new(vec![MappingEntry {
///     ticker: "AAA".to_string(),
///     sec_id: SecId::new(1),
///     start_date: TradeDate::from_ymd(2020, 1, 1).unwrap(),
///     end_date: TradeDate::from_ymd(2020, 12, 31).unwrap(),
/// }]);
/// let day = TradeDate::from_ymd(2020, 6, 1).unwrap();
///
/// let records = vec![
///     Record::new("AAA", SecId::new(1), day), // valid
///     Record::new("AAA", SecId::new(2), day), // invalid: AAA maps to 1
///     Record::new("BBB", SecId::new(9), day), // out of range: BBB unmapped
/// ];
///
/// let result = validate_records(&mapper.active_mapping(day), &records);
/// assert_eq!(result.invalid_indices, vec![1]);
/// assert!(result.summary.invalid.contains(&SecId::new(2)));
/// assert!(result.summary.out_of_range.contains(&SecId::new(9)));
/// ```
pub fn validate_records(mapper: &DailyMapper, records: &[Record]) -> ValidationResult {
    let mut invalid_indices = Vec::new();
    let mut summary = DateSummary::default();

    for (index, record) in records.iter().enumerate() {
        match mapper.lookup(&record.ticker) {
            None => {
                summary.out_of_range.insert(record.sec_id);
            }
            Some(expected) if expected != record.sec_id => {
                summary.invalid.insert(record.sec_id);
                invalid_indices.push(index);
            }
            Some(_) => {}
        }
    }

    ValidationResult {
        trade_date: mapper.date(),
        invalid_indices,
        summary,
    }
}
