use std::io;

use thiserror::Error;

/// Errors returned by mutating collection operations.
#[derive(Debug, Error)]
pub enum CollectionStoreError {
    /// Failed to determine the XDG data directory.
    #[error("failed to determine data directory: no valid home directory found")]
    NoDataDir,

    /// The backend rejected the write; the collection was not committed.
    #[error("failed to write collection '{collection}': {source}")]
    Write {
        /// Storage name of the collection.
        collection: String,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for collection store operations.
pub type Result<T> = std::result::Result<T, CollectionStoreError>;
