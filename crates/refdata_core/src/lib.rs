//! # refdata_core: Domain Kernel for Reference-Data Validation
//!
//! ## Kernel Layer Role
//!
//! refdata_core is the bottom layer of the workspace, providing:
//! - Trade-date and security-identifier types (`types::time`, `types::security`)
//! - The time-windowed reference mapping and its per-day view (`mapping`)
//! - The pure per-day validation algorithm (`validate`)
//! - Error types: `DateError` (`types::error`)
//!
//! ## Zero I/O Principle
//!
//! This crate never touches the filesystem. Loading the mapping table and the
//! daily record files is the adapter layer's job (`adapter_flatfile`); running
//! files through the algorithm in parallel is the engine's (`refdata_engine`).
//! Everything here is a pure function over already-loaded data, which is what
//! makes the worker pool safe to share it across threads by reference.
//!
//! ## Usage Example
//!
//! ```rust
//! use refdata_core::mapping::ReferenceMapper;
//! use refdata_core::types::{MappingEntry, Record, SecId, TradeDate};
//! use refdata_core::validate::validate_records;
//!
//! let mapper = ReferenceMapper::new(vec![MappingEntry {
//!     ticker: "AAA".to_string(),
//!     sec_id: SecId::new(1),
//!     start_date: TradeDate::from_ymd(2020, 1, 1).unwrap(),
//!     end_date: TradeDate::from_ymd(2020, 12, 31).unwrap(),
//! }]);
//!
//! let day = TradeDate::from_ymd(2020, 6, 1).unwrap();
//! let records = vec![
//!     Record::new("AAA", SecId::new(1), day),
//!     Record::new("AAA", SecId::new(2), day),
//! ];
//!
//! let result = validate_records(&mapper.active_mapping(day), &records);
//! assert_eq!(result.invalid_indices, vec![1]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod mapping;
pub mod types;
pub mod validate;
