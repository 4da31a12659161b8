//! Export summaries to CSV/JSON.
//!
//! The exports are meant to be easy to consume in spreadsheets or downstream
//! scripts, so shares are written as plain fractions rather than formatted
//! percentages.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::{SplitDistribution, SplitSummary, SummaryTable};
use crate::error::Result;

/// Write the concentration table as `label,count,concentration`.
pub fn write_summary_csv(path: &Path, table: &SummaryTable) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([table.field.as_str(), "count", "concentration"])?;
    for r in &table.rows {
        writer.write_record([r.label.clone(), r.count.to_string(), format!("{:.10}", r.concentration)])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the concentration table as pretty JSON.
pub fn write_summary_json(path: &Path, table: &SummaryTable) -> Result<()> {
    let mut file = File::create(path)?;
    serde_json::to_writer_pretty(&mut file, table)?;
    writeln!(file)?;
    Ok(())
}

/// One row per bucket with counts and shares for both classes.
pub fn write_distribution_csv(path: &Path, dist: &SplitDistribution) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "bucket".to_string(),
        "lower".to_string(),
        "upper".to_string(),
        format!("{}_count", dist.positive.label),
        format!("{}_share", dist.positive.label),
        format!("{}_count", dist.negative.label),
        format!("{}_share", dist.negative.label),
    ])?;

    let bounds = dist.buckets.boundaries();
    for (i, label) in dist.buckets.labels().into_iter().enumerate() {
        writer.write_record([
            label,
            bounds[i].to_string(),
            bounds[i + 1].to_string(),
            dist.positive.counts[i].to_string(),
            format!("{:.10}", dist.positive.fractions[i]),
            dist.negative.counts[i].to_string(),
            format!("{:.10}", dist.negative.fractions[i]),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write `label,count,sum,mean` per category.
pub fn write_split_csv(path: &Path, summary: &SplitSummary) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([summary.field.as_str(), "count", "sum", "mean"])?;
    for c in &summary.categories {
        writer.write_record([c.label.clone(), c.count.to_string(), c.sum.to_string(), format!("{:.10}", c.mean)])?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Buckets, CategoryStat, ClassHistogram, SummaryRow};

    fn table() -> SummaryTable {
        SummaryTable {
            field: "color".into(),
            total: 10,
            rows: vec![
                SummaryRow { label: "red".into(), count: 6, concentration: 0.6 },
                SummaryRow { label: "Others".into(), count: 4, concentration: 0.4 },
            ],
        }
    }

    #[test]
    fn summary_csv_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.csv");
        write_summary_csv(&path, &table()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "color,count,concentration");
        assert_eq!(lines[1], "red,6,0.6000000000");
        assert_eq!(lines[2], "Others,4,0.4000000000");
    }

    #[test]
    fn summary_json_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.json");
        write_summary_json(&path, &table()).unwrap();

        let back: SummaryTable = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back, table());
    }

    #[test]
    fn distribution_csv_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dist.csv");
        let dist = SplitDistribution {
            field: "price".into(),
            binary_field: "sold".into(),
            buckets: Buckets::linspace(0.0, 3.0, 4).unwrap(),
            positive: ClassHistogram {
                label: "True".into(),
                counts: vec![1, 3, 0],
                bucketed: 4,
                fractions: vec![0.25, 0.75, 0.0],
            },
            negative: ClassHistogram {
                label: "False".into(),
                counts: vec![2, 0, 2],
                bucketed: 4,
                fractions: vec![0.5, 0.0, 0.5],
            },
            excluded_rows: 0,
        };
        write_distribution_csv(&path, &dist).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "bucket,lower,upper,True_count,True_share,False_count,False_share");
        assert_eq!(lines[2], "\"(1, 2]\",1,2,3,0.7500000000,0,0.0000000000");
    }

    #[test]
    fn split_csv_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("split.csv");
        let summary = SplitSummary {
            field: "fuel".into(),
            binary_field: "churn".into(),
            categories: vec![CategoryStat { label: "diesel".into(), count: 4, sum: 1, mean: 0.25 }],
        };
        write_split_csv(&path, &summary).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().nth(1), Some("diesel,4,1,0.2500000000"));
    }
}
