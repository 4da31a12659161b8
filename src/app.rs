//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and initializes logging
//! - parses CLI arguments
//! - loads the CSV dataset
//! - runs one analysis and prints its table
//! - writes the chart and optional exports

use std::path::Path;

use clap::Parser;
use log::{info, warn};

use crate::cli::{Command, CommonArgs, DistArgs, PieArgs, SplitArgs};
use crate::domain::{Canvas, ConcentrationConfig, Dataset, DistributionConfig};
use crate::error::Result;
use crate::plot::Chart;

pub mod pipeline;

/// Entry point for the `eda` binary.
pub fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = crate::cli::Cli::parse();
    match cli.command {
        Command::Pie(args) => handle_pie(&args),
        Command::Dist(args) => handle_dist(&args),
        Command::Split(args) => handle_split(&args),
    }
}

fn handle_pie(args: &PieArgs) -> Result<()> {
    let dataset = load(&args.common)?;
    let config = concentration_config_from_args(args);
    let canvas = canvas_from_args(&args.common, Canvas::pie());

    let report = pipeline::category_concentration(&dataset, &args.common.field, &config, &canvas)?;
    println!("{}", crate::report::format_summary_table(&report.table));

    write_chart(&report.chart, &args.out)?;
    if let Some(path) = &args.common.export {
        crate::io::export::write_summary_csv(path, &report.table)?;
    }
    if let Some(path) = &args.json {
        crate::io::export::write_summary_json(path, &report.table)?;
    }
    Ok(())
}

fn handle_dist(args: &DistArgs) -> Result<()> {
    let dataset = load(&args.common)?;
    let config = distribution_config_from_args(args);
    let canvas = canvas_from_args(&args.common, Canvas::distribution());

    let report =
        pipeline::continuous_split_distribution(&dataset, &args.common.field, &args.binary, &config, &canvas)?;
    println!("{}", crate::report::format_distribution(&report.distribution));

    write_chart(&report.chart, &args.out)?;
    if let Some(path) = &args.common.export {
        crate::io::export::write_distribution_csv(path, &report.distribution)?;
    }
    Ok(())
}

fn handle_split(args: &SplitArgs) -> Result<()> {
    let dataset = load(&args.common)?;
    let canvas = canvas_from_args(&args.common, Canvas::split());

    let report = pipeline::categorical_split_summary(&dataset, &args.common.field, &args.binary, &canvas)?;
    println!("{}", crate::report::format_split_summary(&report.summary));

    write_chart(&report.chart, &args.out)?;
    if let Some(path) = &args.common.export {
        crate::io::export::write_split_csv(path, &report.summary)?;
    }
    Ok(())
}

fn load(common: &CommonArgs) -> Result<Dataset> {
    let ingest = crate::io::ingest::load_dataset(&common.csv)?;
    for err in &ingest.row_errors {
        warn!("line {}: {}", err.line, err.message);
    }
    info!(
        "loaded {} of {} rows from '{}'",
        ingest.dataset.len(),
        ingest.rows_read,
        common.csv.display()
    );
    Ok(ingest.dataset)
}

fn write_chart(chart: &Chart, path: &Path) -> Result<()> {
    chart.write_svg(path)?;
    println!("Chart '{}' written to {}", chart.title(), path.display());
    Ok(())
}

pub fn concentration_config_from_args(args: &PieArgs) -> ConcentrationConfig {
    ConcentrationConfig::default().top(args.top).identifier(args.identifier.as_str())
}

pub fn distribution_config_from_args(args: &DistArgs) -> DistributionConfig {
    DistributionConfig::default()
        .buckets(args.buckets)
        .range(args.min, args.max)
        .labels(args.label_true.as_str(), args.label_false.as_str())
}

/// Chart defaults, with `--width/--height` taking precedence.
pub fn canvas_from_args(common: &CommonArgs, default: Canvas) -> Canvas {
    Canvas::new(
        common.width.unwrap_or(default.width),
        common.height.unwrap_or(default.height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use crate::domain::RangeBound;

    fn dist_args(argv: &[&str]) -> DistArgs {
        match Cli::try_parse_from(argv).unwrap().command {
            Command::Dist(args) => args,
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn unset_bounds_stay_observed() {
        let args = dist_args(&["eda", "dist", "--csv", "a.csv", "-f", "x", "-b", "y", "--max", "50"]);
        let config = distribution_config_from_args(&args);
        assert_eq!(config.min, RangeBound::Observed);
        assert_eq!(config.max, RangeBound::Fixed(50.0));
        assert_eq!(config.buckets, 8);
    }

    #[test]
    fn canvas_overrides() {
        let args = dist_args(&["eda", "dist", "--csv", "a.csv", "-f", "x", "-b", "y", "--width", "800"]);
        let canvas = canvas_from_args(&args.common, Canvas::distribution());
        assert_eq!(canvas.size(), (800, 900));
    }
}
