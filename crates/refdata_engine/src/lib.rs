//! Validation engine for reference-data flatfiles.
//!
//! This crate orchestrates the work the kernel and adapter layers expose:
//! it spreads daily record files over a pool of worker threads, validates
//! each file against the time-windowed mapping table, optionally rewrites
//! flagged files, and merges every worker's results into a single report.
//!
//! # Pipeline
//!
//! ```text
//!            seed (all paths, up front)
//!   files ─────────────────▶ TaskQueue
//!                                │ try_pop
//!                 ┌──────────────┼──────────────┐
//!                 ▼              ▼              ▼
//!             worker 0       worker 1       worker N
//!            (validate,     (validate,     (validate,
//!             fix, batch)    fix, batch)    fix, batch)
//!                 │              │              │
//!                 └── publish once per channel ─┘
//!                                │
//!                                ▼
//!                           aggregator ──▶ MergedReport
//! ```
//!
//! Workers accumulate results privately and publish exactly one payload per
//! result channel when the queue runs dry. The aggregator blocks for exactly
//! one payload per worker per channel, joins the pool, then drains anything
//! unexpected. With a single worker the same per-file routine runs inline,
//! with no threads or channels at all.
//!
//! Per-file problems (unreadable, empty, malformed) never abort a run; they
//! are recorded on the report and the pool moves on. Losing a worker before
//! it publishes does abort, with [`EngineError::WorkerLost`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod aggregate;
pub mod batch;
pub mod error;
pub mod fixer;
pub mod queue;
pub mod report;
pub mod validate;

mod worker;

pub use aggregate::run_pool;
pub use batch::{FileFailure, WorkerBatch};
pub use error::EngineError;
pub use fixer::FileFixer;
pub use queue::TaskQueue;
pub use report::MergedReport;
pub use validate::FileValidator;
