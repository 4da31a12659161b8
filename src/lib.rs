//! `eda-charts` library crate.
//!
//! Quick exploratory summaries of a tabular dataset, each paired with a chart:
//!
//! - [`category_concentration`]: top categories by share, plus an `Others` tail (pie)
//! - [`continuous_split_distribution`]: bucketed distribution per class of a binary field (grouped bars)
//! - [`categorical_split_summary`]: count and rate of a binary field per category (dual axis)
//!
//! The binary (`eda`) is a thin wrapper around this library so that the
//! analyses stay testable without spawning processes or touching a display.
//!
//! ```no_run
//! use eda_charts::prelude::*;
//!
//! let data = load_dataset(std::path::Path::new("cars.csv")).unwrap().dataset;
//! let report = category_concentration(&data, "make", &ConcentrationConfig::default(), &Canvas::pie()).unwrap();
//! report.chart.write_svg(std::path::Path::new("make.svg")).unwrap();
//! ```

pub mod analysis;
pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod plot;
pub mod report;

pub use app::pipeline::{
    categorical_split_summary, category_concentration, continuous_split_distribution, ConcentrationReport,
    DistributionReport, SplitReport,
};

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::app::pipeline::{
        categorical_split_summary, category_concentration, continuous_split_distribution, ConcentrationReport,
        DistributionReport, SplitReport,
    };
    pub use crate::domain::{
        Buckets, Canvas, CategoryStat, ConcentrationConfig, Dataset, DistributionConfig, RangeBound,
        SplitDistribution, SplitSummary, SummaryRow, SummaryTable, Value,
    };
    pub use crate::error::{EdaError, Result};
    pub use crate::io::ingest::{load_dataset, read_dataset};
    pub use crate::plot::Chart;
}
