//! Category concentration: top-N categories by count plus an `Others` tail.

use std::collections::BTreeMap;

use log::debug;

use crate::domain::{CategoryKey, ConcentrationConfig, Dataset, SummaryRow, SummaryTable, OTHERS_LABEL};
use crate::error::{EdaError, Result};

const SHARE_TOLERANCE: f64 = 1e-9;

/// Rank the categories of `field` by the number of non-missing identifiers.
pub fn summarize_concentration(
    dataset: &Dataset,
    field: &str,
    config: &ConcentrationConfig,
) -> Result<SummaryTable> {
    let field_idx = dataset.field_index(field)?;
    let id_idx = dataset.field_index(&config.identifier)?;

    let mut groups: BTreeMap<CategoryKey, u64> = BTreeMap::new();
    for row in dataset.rows() {
        let Some(key) = row[field_idx].category_key() else {
            continue;
        };
        let counted = u64::from(!row[id_idx].is_missing());
        *groups.entry(key).or_insert(0) += counted;
    }

    let total: u64 = groups.values().sum();
    if total == 0 {
        return Err(EdaError::EmptyDataset(format!(
            "no rows with both `{field}` and `{}` present",
            config.identifier
        )));
    }

    // Stable sort keeps category order among equal counts.
    let mut ranked: Vec<(CategoryKey, u64)> = groups.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    debug!(
        "concentration of `{field}`: {} categories, total={total}, keeping top {}",
        ranked.len(),
        config.top
    );

    let mut rows: Vec<SummaryRow> = ranked
        .iter()
        .take(config.top)
        .map(|(key, count)| SummaryRow {
            label: key.label(),
            count: *count,
            concentration: *count as f64 / total as f64,
        })
        .collect();

    let kept_count: u64 = rows.iter().map(|r| r.count).sum();
    let others_count = total - kept_count;
    let others_share = if others_count == 0 {
        0.0
    } else {
        let kept_share: f64 = rows.iter().map(|r| r.concentration).sum();
        let share = 1.0 - kept_share;
        debug_assert!(
            (share - others_count as f64 / total as f64).abs() < SHARE_TOLERANCE,
            "`Others` share {share} disagrees with {others_count}/{total}"
        );
        share.max(0.0)
    };

    rows.push(SummaryRow {
        label: OTHERS_LABEL.to_string(),
        count: others_count,
        concentration: others_share,
    });

    Ok(SummaryTable {
        field: field.to_string(),
        total,
        rows,
    })
}
