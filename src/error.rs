//! Error types for the document store

use thiserror::Error;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, DocVecError>;

/// Boxed error produced by an external embedding provider.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Error types that can occur in document store operations
#[derive(Error, Debug)]
pub enum DocVecError {
    #[error("Invalid dimension: {0} (must be positive)")]
    InvalidDimension(usize),

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Document not found: {id}")]
    NotFound { id: String },

    #[error("Batch validation failed: {}", .issues.join("; "))]
    Validation { issues: Vec<String> },

    #[error("Embedding provider error: {0}")]
    Embedding(String),

    #[error("Worker pool error: {0}")]
    WorkerPool(String),
}

impl DocVecError {
    /// Wrap a failure from the external embedding provider.
    pub(crate) fn embedding(err: BoxError) -> Self {
        DocVecError::Embedding(err.to_string())
    }
}
