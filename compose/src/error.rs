//! Composition error types.

use thiserror::Error;

/// Result type for composition operations.
pub type ComposeResult<T> = Result<T, ComposeError>;

/// Errors that can occur while composing a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    #[error("Missing required properties on {record}: {}", .fields.join(", "))]
    MissingRequiredFields { record: String, fields: Vec<String> },

    #[error("Invalid property type for {field} on {record}: expected {expected}, got {actual}")]
    TypeMismatch {
        record: String,
        field: String,
        expected: String,
        actual: String,
    },
}

impl ComposeError {
    pub fn missing_required<S: Into<String>>(
        record: impl Into<String>,
        fields: impl IntoIterator<Item = S>,
    ) -> Self {
        Self::MissingRequiredFields {
            record: record.into(),
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn type_mismatch(
        record: impl Into<String>,
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            record: record.into(),
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// The names of the missing required fields, empty for other errors.
    pub fn missing_fields(&self) -> &[String] {
        match self {
            Self::MissingRequiredFields { fields, .. } => fields,
            _ => &[],
        }
    }
}
