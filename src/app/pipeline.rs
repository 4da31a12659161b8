//! The three analyses, each composed as aggregate -> render.
//!
//! These are the library's main entry points; the CLI only adds file handling
//! and printing on top.

use log::info;

use crate::analysis;
use crate::domain::{Canvas, ConcentrationConfig, Dataset, DistributionConfig, SplitDistribution, SplitSummary, SummaryTable};
use crate::error::Result;
use crate::plot::{self, Chart};

/// Output of [`category_concentration`].
#[derive(Debug, Clone)]
pub struct ConcentrationReport {
    pub table: SummaryTable,
    pub chart: Chart,
}

/// Output of [`continuous_split_distribution`].
#[derive(Debug, Clone)]
pub struct DistributionReport {
    pub distribution: SplitDistribution,
    pub chart: Chart,
}

/// Output of [`categorical_split_summary`].
#[derive(Debug, Clone)]
pub struct SplitReport {
    pub summary: SplitSummary,
    pub chart: Chart,
}

/// Rank the categories of `field`, collapse the tail into `Others` and draw a pie.
pub fn category_concentration(
    dataset: &Dataset,
    field: &str,
    config: &ConcentrationConfig,
    canvas: &Canvas,
) -> Result<ConcentrationReport> {
    let table = analysis::summarize_concentration(dataset, field, config)?;
    info!(
        "concentration of `{field}`: {} rows kept + Others over {} counted rows",
        table.top().len(),
        table.total
    );
    let chart = plot::render_concentration_pie(&table, canvas)?;
    Ok(ConcentrationReport { table, chart })
}

/// Bucket `field` and compare its per-class shares across `binary_field`.
pub fn continuous_split_distribution(
    dataset: &Dataset,
    field: &str,
    binary_field: &str,
    config: &DistributionConfig,
    canvas: &Canvas,
) -> Result<DistributionReport> {
    let distribution = analysis::split_distribution(dataset, field, binary_field, config)?;
    info!(
        "distribution of `{field}` by `{binary_field}`: {} buckets, {} rows excluded",
        distribution.buckets.len(),
        distribution.excluded_rows
    );
    let chart = plot::render_distribution_bars(&distribution, canvas)?;
    Ok(DistributionReport { distribution, chart })
}

/// Count and rate of `binary_field` per category of `field`, drawn on two axes.
pub fn categorical_split_summary(
    dataset: &Dataset,
    field: &str,
    binary_field: &str,
    canvas: &Canvas,
) -> Result<SplitReport> {
    let summary = analysis::summarize_split(dataset, field, binary_field)?;
    info!("split of `{field}` by `{binary_field}`: {} categories", summary.categories.len());
    let chart = plot::render_split_summary(&summary, canvas)?;
    Ok(SplitReport { summary, chart })
}
