//! Error types for the receipt toolkit

use thiserror::Error;

/// Receipt error types
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// IO error while reading receipt data or writing output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed receipt JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Image store failure
    #[error("Image store error: {0}")]
    Store(#[from] crate::store::StoreError),

    /// Invalid runtime configuration
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type for receipt operations
pub type ReceiptResult<T> = Result<T, ReceiptError>;
