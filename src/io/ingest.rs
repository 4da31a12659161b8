//! CSV ingest into a `Dataset`.
//!
//! This module is responsible for turning an arbitrary CSV export into typed
//! columns that the analyses can group and bucket.
//!
//! Design goals:
//! - **Column-level typing** (a column is numeric only if every present cell is)
//! - **Row-level validation** (skip bad rows, but report what happened)
//! - **Deterministic behavior** (no sampling, no hidden heuristics)

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use log::{debug, warn};

use crate::domain::{Dataset, Value};
use crate::error::{EdaError, Result};

/// Cell spellings treated as missing (compared case-insensitively).
const MISSING_MARKERS: [&str; 4] = ["na", "n/a", "nan", "null"];

/// A row-level problem encountered during ingest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    pub line: usize,
    pub message: String,
}

/// Ingest output: the dataset plus what was skipped along the way.
#[derive(Debug, Clone)]
pub struct IngestedData {
    pub dataset: Dataset,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
}

/// Load a CSV file from disk.
pub fn load_dataset(path: &Path) -> Result<IngestedData> {
    let file = File::open(path)?;
    debug!("reading dataset from '{}'", path.display());
    read_dataset(file)
}

/// Read a CSV document with a header row.
pub fn read_dataset<R: Read>(input: R) -> Result<IngestedData> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    let fields = normalize_headers(&headers);
    if fields.is_empty() || fields.iter().all(String::is_empty) {
        return Err(EdaError::EmptyDataset("CSV has no header row".to_string()));
    }

    let width = fields.len();
    let mut cells: Vec<Vec<Option<String>>> = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // +2: records() starts after the header and CSV lines are 1-based.
        let line = idx + 2;
        rows_read += 1;

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                row_errors.push(RowError {
                    line,
                    message: format!("CSV parse error: {e}"),
                });
                continue;
            }
        };

        if record.len() > width {
            row_errors.push(RowError {
                line,
                message: format!("{} values for {width} fields; extra values dropped", record.len()),
            });
        }

        let row = (0..width).map(|i| record.get(i).and_then(parse_cell)).collect();
        cells.push(row);
    }

    let numeric: Vec<bool> = (0..width)
        .map(|col| cells.iter().filter_map(|row| row[col].as_deref()).all(|s| parse_number(s).is_some()))
        .collect();

    let mut dataset = Dataset::new(fields);
    for row in cells {
        let values = row
            .into_iter()
            .zip(&numeric)
            .map(|(cell, &is_numeric)| match cell {
                None => Value::Missing,
                Some(s) if is_numeric => parse_number(&s).map(Value::Number).unwrap_or(Value::Missing),
                Some(s) => Value::Text(s),
            })
            .collect();
        dataset.push_row(values)?;
    }

    if !row_errors.is_empty() {
        warn!("{} of {rows_read} CSV rows had problems", row_errors.len());
    }
    debug!(
        "ingested {} rows x {} fields ({} numeric)",
        dataset.len(),
        width,
        numeric.iter().filter(|&&n| n).count()
    );

    Ok(IngestedData {
        dataset,
        row_errors,
        rows_read,
    })
}

fn normalize_headers(headers: &StringRecord) -> Vec<String> {
    headers
        .iter()
        // Excel and other tools sometimes emit UTF-8 CSVs with a BOM prefix on
        // the first header; without stripping it the first field can't be found.
        .map(|name| name.trim().trim_start_matches('\u{feff}').trim().to_string())
        .collect()
}

fn parse_cell(raw: &str) -> Option<String> {
    let s = raw.trim();
    if s.is_empty() || MISSING_MARKERS.iter().any(|m| s.eq_ignore_ascii_case(m)) {
        return None;
    }
    Some(s.to_string())
}

fn parse_number(s: &str) -> Option<f64> {
    let v = s.parse::<f64>().ok()?;
    if v.is_finite() { Some(v) } else { None }
}
