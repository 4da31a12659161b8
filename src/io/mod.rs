//! Input/output helpers.
//!
//! - CSV ingest + typing (`ingest`)
//! - summary exports (CSV/JSON) (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
