//! Error types for ct-store

use thiserror::Error;

/// Store operation errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// S001: Snapshot data file does not exist
    #[error("[S001] Snapshot file not found: {path}")]
    SnapshotNotFound { path: String },

    /// S002: Snapshot file is not valid JSON for the expected shape
    #[error("[S002] Failed to parse snapshot: {0}")]
    Parse(#[from] serde_json::Error),

    /// S003: IO error reading or persisting the snapshot file
    #[error("[S003] IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Domain error raised by the recording path; keeps its own code
    #[error(transparent)]
    Core(#[from] ct_core::CoreError),
}

/// Result type alias for StoreError
pub type StoreResult<T> = Result<T, StoreError>;
