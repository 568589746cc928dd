//! Security identifier, mapping-table, and record-row types.
//!
//! Field renames follow the headers of the tabular inputs
//! (`Ticker,SecId,StartDate,EndDate` for the mapping table and
//! `Ticker,SecId,TradeDate` for daily record files), so these types
//! deserialise directly from headered CSV.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::time::TradeDate;

/// Canonical numeric security identifier.
///
/// A ticker is a human-readable alias; the `SecId` is what it must resolve
/// to on a given trade date.
///
/// # Examples
///
/// ```
/// use refdata_core::types::SecId;
///
/// let id = SecId::new(42);
/// assert_eq!(id.value(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecId(i64);

impl SecId {
    /// Creates a new security identifier.
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value.
    #[inline]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for SecId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for SecId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// One row of the reference mapping table.
///
/// Declares that `ticker` resolves to `sec_id` on every trade date in the
/// inclusive window `[start_date, end_date]`. The table is immutable once
/// loaded; for a fixed date at most one entry should be active per ticker
/// (a violation is an anomaly the mapping layer reports, not a fatal error).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    /// Human-readable security symbol.
    #[serde(rename = "Ticker")]
    pub ticker: String,

    /// Identifier the ticker resolves to inside the window.
    #[serde(rename = "SecId")]
    pub sec_id: SecId,

    /// First trade date (inclusive) on which this entry is authoritative.
    #[serde(rename = "StartDate")]
    pub start_date: TradeDate,

    /// Last trade date (inclusive) on which this entry is authoritative.
    #[serde(rename = "EndDate")]
    pub end_date: TradeDate,
}

impl MappingEntry {
    /// Whether this entry's validity window contains `date`.
    ///
    /// Both window ends are inclusive.
    pub fn is_active(&self, date: TradeDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// One row of a daily record file.
///
/// Input files may carry extra columns; only these three take part in
/// validation, and the fixer preserves the rest untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Security symbol as recorded.
    #[serde(rename = "Ticker")]
    pub ticker: String,

    /// Identifier the row declares for the ticker.
    #[serde(rename = "SecId")]
    pub sec_id: SecId,

    /// Trading day the row belongs to. Files are per-day, so every row in
    /// one file shares this value.
    #[serde(rename = "TradeDate")]
    pub trade_date: TradeDate,
}

impl Record {
    /// Creates a record row.
    pub fn new(ticker: impl Into<String>, sec_id: SecId, trade_date: TradeDate) -> Self {
        Self {
            ticker: ticker.into(),
            sec_id,
            trade_date,
        }
    }
}
