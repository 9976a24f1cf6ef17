use std::path::PathBuf;
use thiserror::Error;

/// Result type for entry store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Everything an [`EntryStore`](crate::EntryStore) operation can fail with.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("an entry already exists for {key}")]
    AlreadyExists { key: String },

    #[error("no entry found for {key}")]
    NotFound { key: String },

    #[error("'{key}' is not a usable entry date: {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(self, StoreError::AlreadyExists { .. })
    }
}
