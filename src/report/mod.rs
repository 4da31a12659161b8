//! Reporting utilities: terminal tables and shared number formatting.
//!
//! Formatting lives in one place so the table output and the chart axes agree.

pub mod format;

pub use format::*;
