//! Terminal tables and the number formatters shared with the charts.

use crate::domain::{SplitDistribution, SplitSummary, SummaryTable};

/// Integer with thousands separators, e.g. `1234567` → `1,234,567`.
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Fraction as a percentage with `decimals` places, e.g. `0.1234` → `12.34%`.
pub fn format_percent(fraction: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, fraction * 100.0)
}

/// Capitalize the first letter of every word; a word starts after any non-letter.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}

/// Concentration table: label, Count, Concentration.
pub fn format_summary_table(table: &SummaryTable) -> String {
    let width = label_width(table.rows.iter().map(|r| r.label.as_str()), &table.field);
    let mut out = String::new();

    out.push_str(&format!("{:<width$} {:>12} {:>14}\n", table.field, "Count", "Concentration"));
    out.push_str(&format!("{:-<width$} {:-<12} {:-<14}\n", "", "", ""));
    for r in &table.rows {
        out.push_str(&format!(
            "{:<width$} {:>12} {:>14}\n",
            r.label,
            format_count(r.count),
            format_percent(r.concentration, 2)
        ));
    }
    out
}

/// Bucket shares of both classes side by side.
pub fn format_distribution(dist: &SplitDistribution) -> String {
    let labels = dist.buckets.labels();
    let width = label_width(labels.iter().map(String::as_str), &dist.field);
    let col = dist.positive.label.len().max(dist.negative.label.len()).max(8);
    let mut out = String::new();

    out.push_str(&format!(
        "{:<width$} {:>col$} {:>col$}\n",
        dist.field, dist.positive.label, dist.negative.label
    ));
    out.push_str(&format!("{:-<width$} {:-<col$} {:-<col$}\n", "", "", ""));
    for (i, label) in labels.iter().enumerate() {
        out.push_str(&format!(
            "{:<width$} {:>col$} {:>col$}\n",
            label,
            format_percent(dist.positive.fractions[i], 2),
            format_percent(dist.negative.fractions[i], 2),
        ));
    }
    out.push_str(&format!(
        "rows in range: {} / {} | excluded by `{}`: {}\n",
        format_count(dist.positive.bucketed),
        format_count(dist.negative.bucketed),
        dist.binary_field,
        format_count(dist.excluded_rows as u64),
    ));
    out
}

/// Count, sum and rate per category.
pub fn format_split_summary(summary: &SplitSummary) -> String {
    let width = label_width(summary.categories.iter().map(|c| c.label.as_str()), &summary.field);
    let mut out = String::new();

    out.push_str(&format!("{:<width$} {:>12} {:>12} {:>9}\n", summary.field, "count", "sum", "mean"));
    out.push_str(&format!("{:-<width$} {:-<12} {:-<12} {:-<9}\n", "", "", "", ""));
    for c in &summary.categories {
        out.push_str(&format!(
            "{:<width$} {:>12} {:>12} {:>9}\n",
            c.label,
            format_count(c.count),
            format_count(c.sum),
            format_percent(c.mean, 2)
        ));
    }
    out
}

fn label_width<'a>(labels: impl Iterator<Item = &'a str>, header: &str) -> usize {
    labels.map(|l| l.chars().count()).chain([header.chars().count()]).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CategoryStat, SummaryRow};

    #[test]
    fn thousands_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn percent_two_decimals() {
        assert_eq!(format_percent(0.6, 2), "60.00%");
        assert_eq!(format_percent(0.1234, 2), "12.34%");
        assert_eq!(format_percent(1.0, 0), "100%");
    }

    #[test]
    fn title_case_words() {
        assert_eq!(title_case("engine_size"), "Engine_Size");
        assert_eq!(title_case("BODY type"), "Body Type");
        assert_eq!(title_case("mpg2city"), "Mpg2City");
    }

    #[test]
    fn summary_table_layout() {
        let table = SummaryTable {
            field: "color".into(),
            total: 10_000,
            rows: vec![
                SummaryRow { label: "red".into(), count: 6_000, concentration: 0.6 },
                SummaryRow { label: "Others".into(), count: 4_000, concentration: 0.4 },
            ],
        };
        let out = format_summary_table(&table);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("color"));
        assert!(lines[2].contains("6,000"));
        assert!(lines[2].ends_with("60.00%"));
        assert!(lines[3].starts_with("Others"));
    }

    #[test]
    fn split_summary_layout() {
        let summary = SplitSummary {
            field: "fuel".into(),
            binary_field: "churn".into(),
            categories: vec![CategoryStat { label: "diesel".into(), count: 4, sum: 1, mean: 0.25 }],
        };
        let out = format_split_summary(&summary);
        assert!(out.lines().nth(2).unwrap().ends_with("25.00%"));
    }
}
