//! Error types for project record parsing and validation

use thiserror::Error;

/// Reasons a serialized project collection is rejected
#[derive(Debug, Error)]
pub enum RecordError {
    /// Body is not a JSON array of objects
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// A required field is absent or null
    #[error("project {index}: missing field `{field}`")]
    MissingField { index: usize, field: &'static str },
    /// A field that must carry text is empty or whitespace
    #[error("project {index}: field `{field}` is blank")]
    BlankField { index: usize, field: &'static str },
}
