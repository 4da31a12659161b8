//! Per-category frequency and rate of a binary indicator.

use std::collections::BTreeMap;

use log::{debug, warn};

use crate::domain::{CategoryKey, CategoryStat, Dataset, SplitSummary};
use crate::error::{EdaError, Result};

/// Count, sum and mean of `binary_field` for each category of `field`.
///
/// Categories come out in `CategoryKey` order. Rows with a missing binary cell
/// are skipped; any other value besides 0 or 1 is an error.
pub fn summarize_split(dataset: &Dataset, field: &str, binary_field: &str) -> Result<SplitSummary> {
    let field_idx = dataset.field_index(field)?;
    let binary_idx = dataset.field_index(binary_field)?;

    // (count, sum)
    let mut groups: BTreeMap<CategoryKey, (u64, u64)> = BTreeMap::new();
    let mut unlabeled = 0usize;
    for (row, values) in dataset.rows().iter().enumerate() {
        let Some(key) = values[field_idx].category_key() else {
            continue;
        };
        if values[binary_idx].is_missing() {
            unlabeled += 1;
            continue;
        }
        let hit = values[binary_idx].as_binary().ok_or_else(|| {
            EdaError::invalid_parameter(
                binary_field,
                format!("expected 0 or 1, found {:?} in record {}", values[binary_idx], row + 1),
            )
        })?;
        let entry = groups.entry(key).or_insert((0, 0));
        entry.0 += 1;
        entry.1 += u64::from(hit);
    }

    if unlabeled > 0 {
        warn!("`{binary_field}`: skipped {unlabeled} rows with no value");
    }
    if groups.is_empty() {
        return Err(EdaError::EmptyDataset(format!(
            "no rows with both `{field}` and `{binary_field}` present"
        )));
    }

    let categories: Vec<CategoryStat> = groups
        .into_iter()
        .map(|(key, (count, sum))| CategoryStat {
            label: key.label(),
            count,
            sum,
            mean: sum as f64 / count as f64,
        })
        .collect();

    debug!("`{field}` by `{binary_field}`: {} categories", categories.len());

    Ok(SplitSummary {
        field: field.to_string(),
        binary_field: binary_field.to_string(),
        categories,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Value;

    fn fuel() -> Dataset {
        let rows = [
            ("petrol", 1),
            ("diesel", 0),
            ("petrol", 0),
            ("electric", 1),
            ("petrol", 1),
            ("diesel", 1),
            ("electric", 1),
        ];
        let mut ds = Dataset::new(["fuel", "churn"]);
        for (fuel, churn) in rows {
            ds.push_row(vec![Value::from(fuel), Value::from(churn)]).unwrap();
        }
        ds
    }

    #[test]
    fn count_sum_mean_in_label_order() {
        let s = summarize_split(&fuel(), "fuel", "churn").unwrap();
        let labels: Vec<&str> = s.categories.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["diesel", "electric", "petrol"]);

        let petrol = &s.categories[2];
        assert_eq!((petrol.count, petrol.sum), (3, 2));
        for c in &s.categories {
            assert_eq!(c.mean, c.sum as f64 / c.count as f64);
        }
        assert_eq!(s.categories[1].mean, 1.0);
    }

    #[test]
    fn numeric_categories_sort_numerically() {
        let mut ds = Dataset::new(["doors", "flag"]);
        for (doors, flag) in [(5, 1), (10, 0), (2, 0), (5, 0)] {
            ds.push_row(vec![Value::from(doors), Value::from(flag)]).unwrap();
        }
        let s = summarize_split(&ds, "doors", "flag").unwrap();
        let labels: Vec<&str> = s.categories.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["2", "5", "10"]);
        assert_eq!(s.categories[1].count, 2);
        assert_eq!(s.categories[1].mean, 0.5);
    }

    #[test]
    fn missing_category_rows_are_skipped() {
        let ds = fuel().with_row([Value::Missing, Value::from(7)]).unwrap();
        let s = summarize_split(&ds, "fuel", "churn").unwrap();
        let total: u64 = s.categories.iter().map(|c| c.count).sum();
        assert_eq!(total, 7);
    }

    #[test]
    fn non_binary_value_is_rejected() {
        let ds = fuel().with_row([Value::from("lpg"), Value::from(2)]).unwrap();
        let err = summarize_split(&ds, "fuel", "churn").unwrap_err();
        assert!(matches!(err, EdaError::InvalidParameter { ref name, .. } if name == "churn"));
    }

    #[test]
    fn missing_binary_cells_are_skipped() {
        let ds = fuel()
            .with_row([Value::from("diesel"), Value::Missing])
            .unwrap()
            .with_row([Value::from("lpg"), Value::Missing])
            .unwrap();
        let s = summarize_split(&ds, "fuel", "churn").unwrap();
        let labels: Vec<&str> = s.categories.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["diesel", "electric", "petrol"]);
        assert_eq!((s.categories[0].count, s.categories[0].sum), (2, 1));
        assert_eq!(s.categories[0].mean, 0.5);
    }

    #[test]
    fn signed_zero_categories_merge() {
        let csv = "doors,flag\n0,1\n-0,0\n2,1\n";
        let ds = crate::io::read_dataset(csv.as_bytes()).unwrap().dataset;
        let s = summarize_split(&ds, "doors", "flag").unwrap();
        let got: Vec<(&str, u64)> = s.categories.iter().map(|c| (c.label.as_str(), c.count)).collect();
        assert_eq!(got, vec![("0", 2), ("2", 1)]);
        assert_eq!(s.categories[0].mean, 0.5);
    }

    #[test]
    fn missing_fields_fail() {
        let err = summarize_split(&fuel(), "colour", "churn").unwrap_err();
        assert!(matches!(err, EdaError::FieldNotFound { .. }));
        let err = summarize_split(&fuel(), "fuel", "sold").unwrap_err();
        assert!(matches!(err, EdaError::FieldNotFound { ref field } if field == "sold"));
    }

    #[test]
    fn no_grouped_rows_is_empty() {
        let ds = Dataset::new(["fuel", "churn"]);
        assert!(matches!(summarize_split(&ds, "fuel", "churn"), Err(EdaError::EmptyDataset(_))));
    }
}
