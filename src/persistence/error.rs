//=========================================================================
// Persistence Errors
//=========================================================================

use std::path::PathBuf;

use thiserror::Error;

/// Failure of a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to write key {key:?} to {path}: {source}")]
    Write {
        key: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to remove key {key:?} at {path}: {source}")]
    Remove {
        key: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure while writing a save.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to encode save: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// One structural problem found in stored save text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{path} is missing")]
    Missing { path: String },

    #[error("{path} must be {expected}")]
    WrongType { path: String, expected: &'static str },
}

/// Reason a legacy migration was abandoned.
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("legacy save is not valid json: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("legacy save does not match the expected shape")]
    ShapeMismatch,

    #[error("legacy save could not be transformed: {0}")]
    Transform(#[source] serde_json::Error),

    #[error(transparent)]
    Persist(#[from] PersistenceError),
}
