//! Core error types.
//!
//! This module provides structured error types for date construction and
//! parsing using `thiserror` for derivation.

use thiserror::Error;

/// Errors that can occur when constructing or parsing a trade date.
#[derive(Debug, Clone, Error)]
pub enum DateError {
    /// The year/month/day combination does not name a real calendar date.
    #[error("invalid date: {year}-{month:02}-{day:02}")]
    InvalidDate {
        /// Year component as supplied.
        year: i32,
        /// Month component as supplied.
        month: u32,
        /// Day component as supplied.
        day: u32,
    },

    /// The input string is not an ISO 8601 (`YYYY-MM-DD`) date.
    #[error("failed to parse date: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_display() {
        let err = DateError::InvalidDate {
            year: 2024,
            month: 2,
            day: 30,
        };
        assert_eq!(err.to_string(), "invalid date: 2024-02-30");
    }

    #[test]
    fn test_parse_error_display() {
        let err = DateError::Parse("not-a-date".to_string());
        assert!(err.to_string().contains("not-a-date"));
    }
}
