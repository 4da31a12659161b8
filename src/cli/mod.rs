//! Command-line parsing for the `eda` binary.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! analysis code. Arguments are mapped onto the library's config structs in
//! `crate::app`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "eda", version, about = "Quick exploratory charts for CSV datasets")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Top categories of a field by share, as a pie chart.
    Pie(PieArgs),
    /// Distribution of a continuous field for both classes of a binary field.
    Dist(DistArgs),
    /// Count and rate of a binary field per category, on two axes.
    Split(SplitArgs),
}

/// Options shared by every subcommand.
#[derive(Debug, Args, Clone)]
pub struct CommonArgs {
    /// Input CSV with a header row.
    #[arg(long, value_name = "CSV")]
    pub csv: PathBuf,

    /// Field to analyze.
    #[arg(short = 'f', long)]
    pub field: String,

    /// Chart width (pixels); defaults depend on the chart.
    #[arg(long)]
    pub width: Option<u32>,

    /// Chart height (pixels); defaults depend on the chart.
    #[arg(long)]
    pub height: Option<u32>,

    /// Export the summary table to CSV.
    #[arg(long, value_name = "CSV")]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct PieArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Number of top categories kept before the rest become `Others`.
    #[arg(long, default_value_t = 5)]
    pub top: usize,

    /// Field counted per category; rows where it is empty are skipped.
    #[arg(long, default_value = "VIN")]
    pub identifier: String,

    /// Output SVG.
    #[arg(long, default_value = "concentration.svg")]
    pub out: PathBuf,

    /// Export the summary table to JSON.
    #[arg(long, value_name = "JSON")]
    pub json: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct DistArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Binary field (0/1) splitting the rows into two classes.
    #[arg(short = 'b', long)]
    pub binary: String,

    /// Number of bucket boundaries (buckets - 1 intervals).
    #[arg(short = 'n', long, default_value_t = 8)]
    pub buckets: usize,

    /// Lower end of the bucketed range (default: observed minimum).
    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<f64>,

    /// Upper end of the bucketed range (default: observed maximum).
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<f64>,

    /// Legend label for rows where the binary field is 1.
    #[arg(long, default_value = "True")]
    pub label_true: String,

    /// Legend label for rows where the binary field is 0.
    #[arg(long, default_value = "False")]
    pub label_false: String,

    /// Output SVG.
    #[arg(long, default_value = "distribution.svg")]
    pub out: PathBuf,
}

#[derive(Debug, Args, Clone)]
pub struct SplitArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Binary field (0/1) whose rate is shown per category.
    #[arg(short = 'b', long)]
    pub binary: String,

    /// Output SVG.
    #[arg(long, default_value = "split.svg")]
    pub out: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pie_defaults() {
        let cli = Cli::try_parse_from(["eda", "pie", "--csv", "cars.csv", "-f", "make"]).unwrap();
        let Command::Pie(args) = cli.command else {
            panic!("expected pie");
        };
        assert_eq!(args.top, 5);
        assert_eq!(args.identifier, "VIN");
        assert_eq!(args.out, PathBuf::from("concentration.svg"));
        assert_eq!(args.common.field, "make");
    }

    #[test]
    fn dist_accepts_negative_bounds() {
        let cli = Cli::try_parse_from([
            "eda", "dist", "--csv", "x.csv", "-f", "temp", "-b", "rain", "--min", "-10", "--max", "35", "-n", "6",
        ])
        .unwrap();
        let Command::Dist(args) = cli.command else {
            panic!("expected dist");
        };
        assert_eq!(args.min, Some(-10.0));
        assert_eq!(args.max, Some(35.0));
        assert_eq!(args.buckets, 6);
        assert_eq!(args.label_true, "True");
    }

    #[test]
    fn split_requires_binary_field() {
        assert!(Cli::try_parse_from(["eda", "split", "--csv", "x.csv", "-f", "fuel"]).is_err());
    }
}
