//! # adapter_flatfile: CSV Flatfile Adapter
//!
//! ## Adapter Layer Role
//!
//! Everything that touches the filesystem on behalf of the validation
//! pipeline lives here:
//! - `read`: load the reference mapping table and daily record files
//! - `write`: rewrite a record file with flagged rows removed, preserving
//!   whatever extra columns the file carries
//! - `discover`: enumerate the daily files under an input root, optionally
//!   restricted to one year subdirectory
//!
//! The engine treats these as capabilities ("load records from path",
//! "write records to path") and never opens files itself; the kernel crate
//! (`refdata_core`) never sees a path at all.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod discover;
pub mod error;
pub mod read;
pub mod write;

pub use discover::discover;
pub use error::FlatfileError;
pub use read::{read_mapping, read_records};
pub use write::rewrite_without;
