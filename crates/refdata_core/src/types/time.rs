//! The trade-date type shared by mapping windows and daily record files.

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

use super::error::DateError;

/// Calendar date of a trading day.
///
/// Thin wrapper around `chrono::NaiveDate` with ISO 8601 parsing and
/// serialisation. Mapping validity windows are expressed as inclusive
/// `TradeDate` ranges, and every record in a daily file carries one.
///
/// # Examples
///
/// ```
/// use refdata_core::types::TradeDate;
///
/// let date = TradeDate::from_ymd(2020, 6, 1).unwrap();
/// assert_eq!(date.year(), 2020);
///
/// // Parse from ISO 8601 string
/// let parsed: TradeDate = "2020-06-01".parse().unwrap();
/// assert_eq!(date, parsed);
/// assert_eq!(parsed.to_string(), "2020-06-01");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct TradeDate(NaiveDate);

impl TradeDate {
    /// Creates a trade date from year, month, and day components.
    ///
    /// # Returns
    /// `Ok(TradeDate)` if the date is valid, `Err(DateError::InvalidDate)`
    /// otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use refdata_core::types::TradeDate;
    ///
    /// let date = TradeDate::from_ymd(2020, 2, 29).unwrap();
    /// assert!(TradeDate::from_ymd(2021, 2, 29).is_err());
    /// # let _ = date;
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(TradeDate)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses a trade date from an ISO 8601 string (`YYYY-MM-DD`).
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(TradeDate)
            .map_err(|e| DateError::Parse(format!("{s}: {e}")))
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the underlying `NaiveDate` for access to chrono's full API.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for TradeDate {
    fn from(date: NaiveDate) -> Self {
        TradeDate(date)
    }
}

impl FromStr for TradeDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        TradeDate::parse(s)
    }
}

impl fmt::Display for TradeDate {
    /// Formats the date as ISO 8601 (`YYYY-MM-DD`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
