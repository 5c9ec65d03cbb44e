//! Error types for classification.

use thiserror::Error;

/// Why a text (or a request carrying texts) could not be classified.
///
/// The `Display` text of each variant is the exact message returned to API
/// clients in the `error` field.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifyError {
    /// Required field absent from the request body.
    #[error("Missing {field} field in request body")]
    MissingField { field: &'static str },

    #[error("Text cannot be empty")]
    EmptyText,

    /// Value is not a string (or, inside a batch, trims to nothing).
    #[error("Invalid text input")]
    InvalidInput,

    #[error("Texts must be a list")]
    InvalidBatchShape,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ClassifyError {
    pub fn missing_text() -> Self {
        ClassifyError::MissingField { field: "text" }
    }

    pub fn missing_texts() -> Self {
        ClassifyError::MissingField { field: "texts" }
    }

    /// Validation errors are detected before the scorer runs.
    pub fn is_validation(&self) -> bool {
        !matches!(self, ClassifyError::Internal(_))
    }
}

/// Polarity scorer failures
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScorerError {
    #[error("scorer returned out-of-range scores: {0}")]
    OutOfRange(String),

    #[error("scorer failed: {0}")]
    Failed(String),
}

impl From<ScorerError> for ClassifyError {
    fn from(err: ScorerError) -> Self {
        ClassifyError::Internal(err.to_string())
    }
}
