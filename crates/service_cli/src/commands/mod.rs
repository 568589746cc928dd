//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod check;
pub mod fix;
pub mod identify;
