//! Editor error types.

use thiserror::Error;

/// Result type for editor operations.
pub type EditorResult<T> = Result<T, EditorError>;

/// Errors that can occur during editor operations.
#[derive(Debug, Error)]
pub enum EditorError {
    /// An imported document was not valid JSON or lacked the required
    /// top-level `nodes` and `edges` arrays.
    #[error("malformed workflow document: {0}")]
    MalformedDocument(#[from] serde_json::Error),

    /// Serializing the workflow for export failed.
    #[error("failed to serialize workflow: {0}")]
    Serialize(#[source] serde_json::Error),

    /// An offered document exceeded the configured import size limit.
    #[error("workflow document too large: {size} bytes exceeds limit of {limit}")]
    DocumentTooLarge {
        /// Size of the offered document in bytes.
        size: u64,
        /// Configured limit in bytes.
        limit: u64,
    },

    /// Reading a document from disk failed before any import started.
    #[error("failed to read workflow document: {0}")]
    Io(#[from] std::io::Error),

    /// The editor service stopped before the request could complete.
    #[error("editor service unavailable")]
    ServiceClosed,
}
