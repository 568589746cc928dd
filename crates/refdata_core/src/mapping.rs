//! Time-windowed ticker → security-identifier mapping.
//!
//! The full mapping table is loaded once per process and shared read-only.
//! Validation never consults the table directly; it works against the
//! [`DailyMapper`] view derived for one trade date, which is recomputed per
//! file (files are single-trade-date).

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::types::{MappingEntry, SecId, TradeDate};

/// A duplicate active mapping entry discarded while building a daily view.
///
/// For a fixed date at most one entry should be active per ticker. When more
/// than one matches, the first entry in table order is kept and each further
/// match is surfaced as one of these. Never fatal; callers decide how to
/// report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingAmbiguity {
    /// Ticker with more than one active entry.
    pub ticker: String,
    /// Identifier the daily view kept.
    pub kept: SecId,
    /// Identifier of the discarded entry.
    pub ignored: SecId,
}

/// Ticker → SecId view active on exactly one trade date.
///
/// # Examples
///
/// ```
/// use refdata_core::mapping::ReferenceMapper;
/// use refdata_core::types::{MappingEntry, SecId, TradeDate};
///
/// let mapper = ReferenceMapper::new(vec![MappingEntry {
///     ticker: "AAA".to_string(),
///     sec_id: SecId::new(1),
///     start_date: TradeDate::from_ymd(2020, 1, 1).unwrap(),
///     end_date: TradeDate::from_ymd(2020, 12, 31).unwrap(),
/// }]);
///
/// let daily = mapper.active_mapping(TradeDate::from_ymd(2020, 6, 1).unwrap());
/// assert_eq!(daily.lookup("AAA"), Some(SecId::new(1)));
/// assert_eq!(daily.lookup("BBB"), None);
/// ```
#[derive(Debug, Clone)]
pub struct DailyMapper {
    date: TradeDate,
    map: HashMap<String, SecId>,
    ambiguities: Vec<MappingAmbiguity>,
}

impl DailyMapper {
    /// The trade date this view is valid for.
    pub fn date(&self) -> TradeDate {
        self.date
    }

    /// Returns the identifier `ticker` resolves to on this date, if mapped.
    pub fn lookup(&self, ticker: &str) -> Option<SecId> {
        self.map.get(ticker).copied()
    }

    /// Whether `ticker` has any active mapping on this date.
    pub fn contains(&self, ticker: &str) -> bool {
        self.map.contains_key(ticker)
    }

    /// Number of tickers mapped on this date.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether no ticker is mapped on this date.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Duplicate active entries discarded while building this view.
    pub fn ambiguities(&self) -> &[MappingAmbiguity] {
        &self.ambiguities
    }
}

/// The loaded reference mapping table.
///
/// Pure lookup structure: building daily views has no side effects, so one
/// instance can be shared by reference across worker threads.
#[derive(Debug, Clone, Default)]
pub struct ReferenceMapper {
    entries: Vec<MappingEntry>,
}

impl ReferenceMapper {
    /// Wraps an already-loaded mapping table. Table order is preserved and
    /// decides which entry wins on ambiguity.
    pub fn new(entries: Vec<MappingEntry>) -> Self {
        Self { entries }
    }

    /// Builds the ticker → SecId view active on `date`.
    ///
    /// Filters entries whose inclusive window contains `date`. If several
    /// active entries share a ticker, the first in table order wins and the
    /// rest are recorded on the returned view as [`MappingAmbiguity`] values.
    pub fn active_mapping(&self, date: TradeDate) -> DailyMapper {
        let mut map = HashMap::new();
        let mut ambiguities = Vec::new();

        for entry in self.entries.iter().filter(|e| e.is_active(date)) {
            match map.entry(entry.ticker.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(entry.sec_id);
                }
                Entry::Occupied(existing) => ambiguities.push(MappingAmbiguity {
                    ticker: entry.ticker.clone(),
                    kept: *existing.get(),
                    ignored: entry.sec_id,
                }),
            }
        }

        DailyMapper {
            date,
            map,
            ambiguities,
        }
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The table rows in load order.
    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(ticker: &str, sec_id: i64, start: &str, end: &str) -> MappingEntry {
        MappingEntry {
            ticker: ticker.to_string(),
            sec_id: SecId::new(sec_id),
            start_date: start.parse().unwrap(),
            end_date: end.parse().unwrap(),
        }
    }

    fn date(s: &str) -> TradeDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_active_mapping_filters_by_window() {
        let mapper = ReferenceMapper::new(vec![
            entry("AAA", 1, "2020-01-01", "2020-12-31"),
            entry("BBB", 2, "2021-01-01", "2021-12-31"),
        ]);

        let daily = mapper.active_mapping(date("2020-06-01"));
        assert_eq!(daily.lookup("AAA"), Some(SecId::new(1)));
        assert_eq!(daily.lookup("BBB"), None);
        assert_eq!(daily.len(), 1);
    }

    #[test]
    fn test_same_ticker_different_windows_is_not_ambiguous() {
        let mapper = ReferenceMapper::new(vec![
            entry("AAA", 1, "2020-01-01", "2020-06-30"),
            entry("AAA", 2, "2020-07-01", "2020-12-31"),
        ]);

        let first_half = mapper.active_mapping(date("2020-03-01"));
        assert_eq!(first_half.lookup("AAA"), Some(SecId::new(1)));
        assert!(first_half.ambiguities().is_empty());

        let second_half = mapper.active_mapping(date("2020-09-01"));
        assert_eq!(second_half.lookup("AAA"), Some(SecId::new(2)));
        assert!(second_half.ambiguities().is_empty());
    }

    #[test]
    fn test_overlapping_windows_keep_first_entry_and_report_ambiguity() {
        let mapper = ReferenceMapper::new(vec![
            entry("AAA", 1, "2020-01-01", "2020-12-31"),
            entry("AAA", 2, "2020-06-01", "2020-08-31"),
        ]);

        let daily = mapper.active_mapping(date("2020-07-01"));
        assert_eq!(daily.lookup("AAA"), Some(SecId::new(1)));
        assert_eq!(
            daily.ambiguities(),
            &[MappingAmbiguity {
                ticker: "AAA".to_string(),
                kept: SecId::new(1),
                ignored: SecId::new(2),
            }]
        );
    }

    #[test]
    fn test_three_way_overlap_reports_one_ambiguity_per_discarded_entry() {
        let mapper = ReferenceMapper::new(vec![
            entry("AAA", 1, "2020-01-01", "2020-12-31"),
            entry("AAA", 2, "2020-01-01", "2020-12-31"),
            entry("AAA", 3, "2020-01-01", "2020-12-31"),
        ]);

        let daily = mapper.active_mapping(date("2020-06-01"));
        assert_eq!(daily.lookup("AAA"), Some(SecId::new(1)));
        assert_eq!(daily.ambiguities().len(), 2);
        assert!(daily
            .ambiguities()
            .iter()
            .all(|a| a.kept == SecId::new(1) && a.ticker == "AAA"));
    }

    #[test]
    fn test_empty_table_yields_empty_view() {
        let mapper = ReferenceMapper::default();
        let daily = mapper.active_mapping(date("2020-06-01"));
        assert!(daily.is_empty());
        assert!(daily.ambiguities().is_empty());
        assert_eq!(daily.date(), date("2020-06-01"));
    }

    #[test]
    fn test_outside_every_window_yields_empty_view() {
        let mapper = ReferenceMapper::new(vec![entry("AAA", 1, "2020-01-01", "2020-12-31")]);
        let daily = mapper.active_mapping(date("2023-01-01"));
        assert!(daily.is_empty());
        assert!(!daily.contains("AAA"));
    }
}
