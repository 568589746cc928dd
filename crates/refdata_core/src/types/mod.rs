//! Core date, identifier, and record types.
//!
//! This module provides:
//! - `time`: the `TradeDate` type used for validity windows and daily files
//! - `security`: `SecId`, `MappingEntry`, and `Record`
//! - `error`: structured error types for date construction and parsing
//!
//! # Re-exports
//!
//! Commonly used types are re-exported at this module level:
//! - [`TradeDate`] from `time`
//! - [`SecId`], [`MappingEntry`], [`Record`] from `security`
//! - [`DateError`] from `error`

pub mod error;
pub mod security;
pub mod time;

// Re-export commonly used types at module level
pub use error::DateError;
pub use security::{MappingEntry, Record, SecId};
pub use time::TradeDate;
