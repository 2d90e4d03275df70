//! Error types for document generation and output.

use thiserror::Error;

/// Errors that can occur while building or writing a document.
#[derive(Debug, Error)]
pub enum DocsError {
    /// Failed to serialize the document to JSON.
    #[error("Failed to serialize OpenAPI document: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// An HTTP method name that has no slot in a path item.
    #[error("Unknown HTTP method '{method}'")]
    UnknownMethod {
        /// The rejected method name.
        method: String,
    },

    /// IO error when writing the document.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for documentation operations.
pub type DocsResult<T> = Result<T, DocsError>;
