//! Continuous field distribution, split by a binary indicator.
//!
//! Rows are partitioned by the binary field, the continuous field is cut into
//! equal-width buckets, and each partition gets its own normalized histogram so
//! the two classes compare as shares rather than raw counts.

use log::{debug, warn};

use crate::domain::{BinaryPartition, Buckets, ClassHistogram, Dataset, DistributionConfig, RangeBound, SplitDistribution, Value};
use crate::error::{EdaError, Result};

/// Split row indices by `binary_field`: 1 → positive, 0 → negative, anything else excluded.
pub fn partition_binary(dataset: &Dataset, binary_field: &str) -> Result<BinaryPartition> {
    let mut partition = BinaryPartition::default();
    for (idx, value) in dataset.column(binary_field)?.enumerate() {
        match value.as_binary() {
            Some(true) => partition.positive.push(idx),
            Some(false) => partition.negative.push(idx),
            None => partition.excluded.push(idx),
        }
    }
    Ok(partition)
}

/// Compute the per-class bucket shares of `field`.
pub fn split_distribution(
    dataset: &Dataset,
    field: &str,
    binary_field: &str,
    config: &DistributionConfig,
) -> Result<SplitDistribution> {
    let field_idx = dataset.field_index(field)?;
    dataset.field_index(binary_field)?;

    if config.buckets < 2 {
        return Err(EdaError::invalid_parameter(
            "buckets",
            format!("need at least 2 boundary points to form a bucket, got {}", config.buckets),
        ));
    }

    let values = numeric_column(dataset, field, field_idx)?;
    let (min, max) = resolve_range(field, &values, config)?;
    let buckets = Buckets::linspace(min, max, config.buckets)?;

    let partition = partition_binary(dataset, binary_field)?;
    if !partition.excluded.is_empty() {
        debug!(
            "`{binary_field}`: {} rows are neither 0 nor 1 and are left out",
            partition.excluded.len()
        );
    }

    let positive = histogram(&config.label_true, &partition.positive, &values, &buckets);
    let negative = histogram(&config.label_false, &partition.negative, &values, &buckets);

    if positive.bucketed == 0 && negative.bucketed == 0 {
        return Err(EdaError::EmptyDataset(format!(
            "no `{field}` values fall in [{min}, {max}] for either class of `{binary_field}`"
        )));
    }
    for class in [&positive, &negative] {
        if class.bucketed == 0 {
            warn!("class `{}` of `{binary_field}` has no `{field}` values in range", class.label);
        }
    }

    debug!(
        "`{field}` by `{binary_field}`: {} buckets over [{min}, {max}], bucketed {}/{}",
        buckets.len(),
        positive.bucketed,
        negative.bucketed
    );

    Ok(SplitDistribution {
        field: field.to_string(),
        binary_field: binary_field.to_string(),
        buckets,
        positive,
        negative,
        excluded_rows: partition.excluded.len(),
    })
}

/// The field as numbers, one entry per row; text cells are rejected.
fn numeric_column(dataset: &Dataset, field: &str, field_idx: usize) -> Result<Vec<Option<f64>>> {
    dataset
        .rows()
        .iter()
        .enumerate()
        .map(|(row, values)| match &values[field_idx] {
            Value::Number(v) => Ok(Some(*v)),
            Value::Missing => Ok(None),
            Value::Text(s) => Err(EdaError::invalid_parameter(
                field,
                format!("expected a numeric field, found '{s}' in record {}", row + 1),
            )),
        })
        .collect()
}

fn resolve_range(field: &str, values: &[Option<f64>], config: &DistributionConfig) -> Result<(f64, f64)> {
    let observed = || {
        let mut it = values.iter().flatten().copied();
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    };

    let needs_observed = matches!(config.min, RangeBound::Observed) || matches!(config.max, RangeBound::Observed);
    let (obs_min, obs_max) = if needs_observed {
        observed().ok_or_else(|| EdaError::EmptyDataset(format!("`{field}` has no numeric values")))?
    } else {
        (f64::NAN, f64::NAN)
    };

    let min = match config.min {
        RangeBound::Observed => obs_min,
        RangeBound::Fixed(v) => v,
    };
    let max = match config.max {
        RangeBound::Observed => obs_max,
        RangeBound::Fixed(v) => v,
    };
    Ok((min, max))
}

fn histogram(label: &str, rows: &[usize], values: &[Option<f64>], buckets: &Buckets) -> ClassHistogram {
    let mut counts = vec![0u64; buckets.len()];
    for &row in rows {
        if let Some(bucket) = values[row].and_then(|v| buckets.bucket_of(v)) {
            counts[bucket] += 1;
        }
    }

    let bucketed: u64 = counts.iter().sum();
    let fractions = counts
        .iter()
        .map(|&c| if bucketed == 0 { 0.0 } else { c as f64 / bucketed as f64 })
        .collect();

    ClassHistogram {
        label: label.to_string(),
        counts,
        bucketed,
        fractions,
    }
}
