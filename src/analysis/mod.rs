//! Pure aggregations behind each chart.
//!
//! Nothing here draws; the renderers in `crate::plot` consume these outputs.

pub mod concentration;
pub mod distribution;
pub mod split;

pub use concentration::summarize_concentration;
pub use distribution::{partition_binary, split_distribution};
pub use split::summarize_split;
