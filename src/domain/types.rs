//! Shared domain types.
//!
//! The summaries are kept plain and serializable so they can be:
//!
//! - inspected in-memory by callers and tests
//! - exported to CSV/JSON
//! - handed to the chart renderers without recomputation

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{EdaError, Result};

/// Label of the synthetic row that collects the long tail of categories.
pub const OTHERS_LABEL: &str = "Others";

/// A single cell of a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Number(f64),
    Text(String),
    Missing,
}

impl Value {
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// `Some(true)` for exactly 1, `Some(false)` for exactly 0, `None` otherwise.
    pub fn as_binary(&self) -> Option<bool> {
        match self {
            Value::Number(v) if *v == 1.0 => Some(true),
            Value::Number(v) if *v == 0.0 => Some(false),
            _ => None,
        }
    }

    /// Grouping key for categorical analyses (`None` when missing).
    pub fn category_key(&self) -> Option<CategoryKey> {
        match self {
            // `-0.0 + 0.0` is `0.0`, so both zeros share one category.
            Value::Number(v) => Some(CategoryKey::Number(*v + 0.0)),
            Value::Text(s) => Some(CategoryKey::Text(s.clone())),
            Value::Missing => None,
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        if v.is_finite() { Value::Number(v) } else { Value::Missing }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Number(v as f64)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Number(f64::from(v))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Missing)
    }
}

/// Distinct value of a categorical field.
///
/// Ordering: numbers before text, numbers by `f64::total_cmp`, text lexicographically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CategoryKey {
    Number(f64),
    Text(String),
}

impl CategoryKey {
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl Ord for CategoryKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (CategoryKey::Number(a), CategoryKey::Number(b)) => a.total_cmp(b),
            (CategoryKey::Number(_), CategoryKey::Text(_)) => Ordering::Less,
            (CategoryKey::Text(_), CategoryKey::Number(_)) => Ordering::Greater,
            (CategoryKey::Text(a), CategoryKey::Text(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for CategoryKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for CategoryKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CategoryKey {}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryKey::Number(v) if v.fract() == 0.0 && v.abs() < 1e15 => write!(f, "{v:.0}"),
            CategoryKey::Number(v) => write!(f, "{v}"),
            CategoryKey::Text(s) => f.write_str(s),
        }
    }
}

/// An ordered collection of records sharing one header.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    fields: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Dataset {
    pub fn new<S: Into<String>>(fields: impl IntoIterator<Item = S>) -> Self {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a record; its width must match the header.
    pub fn push_row(&mut self, row: Vec<Value>) -> Result<()> {
        if row.len() != self.fields.len() {
            return Err(EdaError::invalid_parameter(
                "row",
                format!(
                    "record {} has {} values, header has {} fields",
                    self.rows.len() + 1,
                    row.len(),
                    self.fields.len()
                ),
            ));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Builder-style `push_row`, handy for literal datasets.
    pub fn with_row<V: Into<Value>>(mut self, row: impl IntoIterator<Item = V>) -> Result<Self> {
        self.push_row(row.into_iter().map(Into::into).collect())?;
        Ok(self)
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f == name)
    }

    /// Position of `name` in the header.
    pub fn field_index(&self, name: &str) -> Result<usize> {
        self.fields
            .iter()
            .position(|f| f == name)
            .ok_or_else(|| EdaError::field_not_found(name))
    }

    /// All values of one field, in record order.
    pub fn column(&self, name: &str) -> Result<impl Iterator<Item = &Value> + '_> {
        let idx = self.field_index(name)?;
        Ok(self.rows.iter().map(move |row| &row[idx]))
    }
}

/// One row of a concentration summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub label: String,
    pub count: u64,
    /// Share of the grand total, in `[0, 1]`.
    pub concentration: f64,
}

/// Top categories by count followed by a trailing `Others` row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryTable {
    pub field: String,
    pub total: u64,
    /// Sorted by count descending; the last row is always `Others`.
    pub rows: Vec<SummaryRow>,
}

impl SummaryTable {
    /// Retained categories, without the `Others` row.
    pub fn top(&self) -> &[SummaryRow] {
        &self.rows[..self.rows.len().saturating_sub(1)]
    }

    pub fn others(&self) -> Option<&SummaryRow> {
        self.rows.last()
    }
}

/// `n` linearly spaced boundaries forming `n - 1` contiguous intervals.
///
/// Intervals are right-closed `(a, b]`; the first one also includes its left edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Buckets {
    boundaries: Vec<f64>,
}

impl Buckets {
    /// Equivalent of `linspace(min, max, n)`.
    pub fn linspace(min: f64, max: f64, n: usize) -> Result<Self> {
        if n < 2 {
            return Err(EdaError::invalid_parameter(
                "buckets",
                format!("need at least 2 boundary points to form a bucket, got {n}"),
            ));
        }
        if !(min.is_finite() && max.is_finite()) {
            return Err(EdaError::invalid_parameter(
                "range",
                format!("bounds must be finite, got [{min}, {max}]"),
            ));
        }
        if min >= max {
            return Err(EdaError::invalid_parameter(
                "range",
                format!("min must be below max, got [{min}, {max}]"),
            ));
        }

        let step = (max - min) / (n as f64 - 1.0);
        let mut boundaries: Vec<f64> = (0..n).map(|i| min + step * i as f64).collect();
        // Pin the last edge so the maximum is never lost to rounding.
        boundaries[n - 1] = max;

        if boundaries.windows(2).any(|w| w[1] <= w[0]) {
            return Err(EdaError::invalid_parameter(
                "range",
                format!("[{min}, {max}] is too narrow for {n} boundaries"),
            ));
        }

        Ok(Self { boundaries })
    }

    pub fn boundaries(&self) -> &[f64] {
        &self.boundaries
    }

    /// Number of intervals (one less than the boundary count).
    pub fn len(&self) -> usize {
        self.boundaries.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn min(&self) -> f64 {
        self.boundaries[0]
    }

    pub fn max(&self) -> f64 {
        self.boundaries[self.boundaries.len() - 1]
    }

    /// Interval index holding `value`, or `None` outside `[min, max]`.
    pub fn bucket_of(&self, value: f64) -> Option<usize> {
        if !value.is_finite() || value < self.min() || value > self.max() {
            return None;
        }
        let idx = self.boundaries.partition_point(|&b| b < value);
        Some(idx.saturating_sub(1))
    }

    /// Decimal places needed so that neighbouring boundaries print differently.
    fn label_decimals(&self) -> usize {
        let step = (self.max() - self.min()) / self.len() as f64;
        let needed = (-step.log10()).ceil() + 2.0;
        if needed.is_finite() { needed.clamp(3.0, 15.0) as usize } else { 3 }
    }

    /// Display label of interval `idx`, e.g. `(12.5, 25]`; `None` past the last interval.
    pub fn label(&self, idx: usize) -> Option<String> {
        if idx >= self.len() {
            return None;
        }
        let decimals = self.label_decimals();
        let lo = trim_float(self.boundaries[idx], decimals);
        let hi = trim_float(self.boundaries[idx + 1], decimals);
        Some(if idx == 0 {
            format!("[{lo}, {hi}]")
        } else {
            format!("({lo}, {hi}]")
        })
    }

    pub fn labels(&self) -> Vec<String> {
        (0..self.len()).filter_map(|i| self.label(i)).collect()
    }
}

fn trim_float(v: f64, decimals: usize) -> String {
    let s = format!("{v:.decimals$}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

/// Row indices split by a binary field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinaryPartition {
    /// Rows whose binary value equals 1.
    pub positive: Vec<usize>,
    /// Rows whose binary value equals 0.
    pub negative: Vec<usize>,
    /// Rows with any other value, missing included.
    pub excluded: Vec<usize>,
}

/// Normalized histogram of one partition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassHistogram {
    pub label: String,
    pub counts: Vec<u64>,
    /// Rows of this partition that landed in some bucket.
    pub bucketed: u64,
    /// `counts[i] / bucketed`, all zero when nothing was bucketed.
    pub fractions: Vec<f64>,
}

/// Output of the continuous split distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitDistribution {
    pub field: String,
    pub binary_field: String,
    pub buckets: Buckets,
    pub positive: ClassHistogram,
    pub negative: ClassHistogram,
    /// Rows left out of both partitions by the binary field.
    pub excluded_rows: usize,
}

/// Count, sum and rate of a binary field within one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStat {
    pub label: String,
    pub count: u64,
    pub sum: u64,
    pub mean: f64,
}

/// Output of the categorical split summary, in category order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitSummary {
    pub field: String,
    pub binary_field: String,
    pub categories: Vec<CategoryStat>,
}
