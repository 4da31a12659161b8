//! Per-operation configuration.
//!
//! Every optional knob has an explicit default here instead of being filled in
//! halfway through an analysis.

use serde::{Deserialize, Serialize};

/// Settings for the category concentration summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcentrationConfig {
    /// Number of top categories kept before the rest collapse into `Others` (default 5).
    pub top: usize,
    /// Field counted per category; rows where it is missing are not counted (default `VIN`).
    pub identifier: String,
}

impl Default for ConcentrationConfig {
    fn default() -> Self {
        Self {
            top: 5,
            identifier: "VIN".to_string(),
        }
    }
}

impl ConcentrationConfig {
    pub fn top(mut self, top: usize) -> Self {
        self.top = top;
        self
    }

    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = identifier.into();
        self
    }
}

/// Where one end of the bucketed range comes from.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum RangeBound {
    /// Observed extreme of the field over the whole dataset, ignoring missing values.
    #[default]
    Observed,
    /// Caller-supplied bound, useful to zoom past outliers.
    Fixed(f64),
}

impl From<Option<f64>> for RangeBound {
    fn from(v: Option<f64>) -> Self {
        v.map(RangeBound::Fixed).unwrap_or(RangeBound::Observed)
    }
}

impl From<f64> for RangeBound {
    fn from(v: f64) -> Self {
        RangeBound::Fixed(v)
    }
}

/// Settings for the continuous split distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionConfig {
    /// Number of boundary points; `buckets - 1` intervals are formed (default 8).
    pub buckets: usize,
    pub min: RangeBound,
    pub max: RangeBound,
    /// Legend label of the class where the binary field is 1 (default `True`).
    pub label_true: String,
    /// Legend label of the class where the binary field is 0 (default `False`).
    pub label_false: String,
}

impl Default for DistributionConfig {
    fn default() -> Self {
        Self {
            buckets: 8,
            min: RangeBound::Observed,
            max: RangeBound::Observed,
            label_true: "True".to_string(),
            label_false: "False".to_string(),
        }
    }
}

impl DistributionConfig {
    pub fn buckets(mut self, buckets: usize) -> Self {
        self.buckets = buckets;
        self
    }

    pub fn range(mut self, min: impl Into<RangeBound>, max: impl Into<RangeBound>) -> Self {
        self.min = min.into();
        self.max = max.into();
        self
    }

    pub fn labels(mut self, label_true: impl Into<String>, label_false: impl Into<String>) -> Self {
        self.label_true = label_true.into();
        self.label_false = label_false.into();
        self
    }
}

/// Size of the drawing surface a chart is rendered on, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Square surface for the concentration pie.
    pub fn pie() -> Self {
        Self::new(1000, 1000)
    }

    /// Wide surface for the grouped distribution bars.
    pub fn distribution() -> Self {
        Self::new(1500, 900)
    }

    /// Wide, short surface for the dual-axis split summary.
    pub fn split() -> Self {
        Self::new(1500, 600)
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
