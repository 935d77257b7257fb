//! Error types for knowledge store operations.

use std::path::PathBuf;

/// Errors returned by knowledge stores.
#[derive(Debug, thiserror::Error)]
pub enum MemoryError {
    /// The stored document exists but is not a JSON array of records.
    #[error("knowledge store at {path} is corrupt: {source}")]
    StorageCorrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Reading the stored document failed.
    #[error("failed to read knowledge store at {path}: {source}")]
    StorageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Writing or replacing the stored document failed.
    #[error("failed to write knowledge store at {path}: {source}")]
    StorageWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Serializing records failed.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    /// A record failed validation before being stored.
    #[error("invalid record: {0}")]
    InvalidRecord(String),
}
