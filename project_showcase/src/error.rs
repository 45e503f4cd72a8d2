//! Error types for project_showcase

use showcase_common::RecordError;
use thiserror::Error;

/// Unified error type for project_showcase operations
#[derive(Debug, Error)]
pub enum ShowcaseError {
    /// HTTP request failed (connection refused, DNS, TLS, ...)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// HTTP error status code
    #[error("HTTP error: {0}")]
    HttpStatus(reqwest::StatusCode),
    /// Failed to serialize records for storage
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    /// Stored or fetched body is not a valid project collection
    #[error("{0}")]
    Record(#[from] RecordError),
    /// Templates failed to compile
    #[error("Template error: {0}")]
    Template(String),
    /// Template rendering failed
    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),
    /// Storage file could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for project_showcase operations
pub type Result<T> = std::result::Result<T, ShowcaseError>;
