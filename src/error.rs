//! Error type shared by the library and the `eda` binary.
//!
//! Every variant carries enough context to name the offending field or
//! parameter, and maps to a process exit code for the CLI.

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EdaError {
    #[error("Field `{field}` not found in dataset")]
    FieldNotFound { field: String },

    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Empty dataset: {0}")]
    EmptyDataset(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Chart rendering failed: {0}")]
    Render(String),
}

impl EdaError {
    pub fn field_not_found(field: impl Into<String>) -> Self {
        Self::FieldNotFound { field: field.into() }
    }

    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Exit code used by the `eda` binary.
    ///
    /// - 2: usage, configuration or I/O problems
    /// - 3: the data cannot support the requested summary
    /// - 4: the drawing backend failed
    pub fn exit_code(&self) -> u8 {
        match self {
            EdaError::FieldNotFound { .. }
            | EdaError::InvalidParameter { .. }
            | EdaError::Io(_)
            | EdaError::Csv(_)
            | EdaError::Json(_) => 2,
            EdaError::EmptyDataset(_) => 3,
            EdaError::Render(_) => 4,
        }
    }
}

impl<E> From<DrawingAreaErrorKind<E>> for EdaError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        EdaError::Render(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EdaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let err = EdaError::field_not_found("color");
        assert_eq!(err.to_string(), "Field `color` not found in dataset");

        let err = EdaError::invalid_parameter("buckets", "must be at least 2, got 1");
        assert_eq!(err.to_string(), "Invalid parameter `buckets`: must be at least 2, got 1");
    }

    #[test]
    fn exit_codes_by_category() {
        assert_eq!(EdaError::field_not_found("x").exit_code(), 2);
        assert_eq!(EdaError::EmptyDataset("no rows".into()).exit_code(), 3);
        assert_eq!(EdaError::Render("backend".into()).exit_code(), 4);
    }
}
