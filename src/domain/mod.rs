//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - the in-memory table (`Dataset`, `Value`, `CategoryKey`)
//! - per-operation configuration with documented defaults (`config`)
//! - the summaries produced by each analysis (`SummaryTable`, `SplitDistribution`, ...)

pub mod config;
pub mod types;

pub use config::*;
pub use types::*;
