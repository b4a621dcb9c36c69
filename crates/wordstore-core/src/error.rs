//! Error types for wordstore-core.
//!
//! Storage failures are reported as [`StoreError`]. The statistics engine
//! wraps them in [`StatsError`], which also covers request validation
//! (order and limit) and scan deadlines.

use std::io;
use std::time::Duration;

use thiserror::Error;

use crate::models::FileIdentifier;

/// Errors raised by a file store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file name is empty, absolute, or escapes the store root.
    #[error("invalid file name '{0}'")]
    InvalidName(String),

    /// An add was requested for a file that is already stored.
    #[error("file already exists: {0}")]
    AlreadyExists(String),

    /// The named file is not stored.
    #[error("file not found: {0}")]
    NotFound(String),

    /// Underlying filesystem failure for the given path.
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors raised by the word statistics engine.
#[derive(Debug, Error)]
pub enum StatsError {
    /// Scanning one file failed. The whole statistics request is aborted.
    #[error("failed to scan '{file}': {source}")]
    Scan {
        file: FileIdentifier,
        #[source]
        source: StoreError,
    },

    /// The scan did not finish before the configured deadline.
    #[error("scan timed out after {elapsed:?} with {pending} file(s) outstanding")]
    ScanTimeout { elapsed: Duration, pending: usize },

    /// A scan worker went away without reporting a result.
    #[error("scan worker exited without reporting a result")]
    WorkerLost,

    /// The operating system refused to start a scan worker.
    #[error("could not start a scan worker for '{file}': {source}")]
    WorkerSpawn {
        file: FileIdentifier,
        #[source]
        source: io::Error,
    },

    /// The requested order is not one of ascending/descending.
    #[error("invalid order '{0}', expected asc or dsc")]
    InvalidOrder(String),

    /// The requested limit is negative.
    #[error("invalid limit {0}, expected a non-negative integer")]
    InvalidLimit(i64),

    /// The file list could not be obtained.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type alias for statistics operations.
pub type Result<T> = std::result::Result<T, StatsError>;

/// Result type alias for storage operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
