//! Persistence port for the whole task list.

use crate::task::domain::TaskRecord;
use camino::Utf8PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Result type for persistence operations.
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Storage contract for the task list.
///
/// The list is stored as a single value under one namespace; every save
/// replaces the previous value.
#[cfg_attr(test, mockall::automock)]
pub trait TaskPersistence: Send + Sync {
    /// Replaces the stored list with `records`.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] when the records cannot be encoded or
    /// written.
    fn save(&self, records: &[TaskRecord]) -> PersistenceResult<()>;

    /// Reads the stored list.
    ///
    /// Returns `None` when nothing has been saved yet or the stored value is
    /// malformed.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] when the underlying storage cannot be
    /// read.
    fn load(&self) -> PersistenceResult<Option<Vec<TaskRecord>>>;
}

/// Errors returned by persistence adapters.
#[derive(Debug, Clone, Error)]
pub enum PersistenceError {
    /// The records could not be encoded for storage.
    #[error("failed to encode task records: {0}")]
    Encode(String),

    /// Filesystem access failed.
    #[error("storage I/O failed at {path}: {source}")]
    Io {
        /// Path being accessed.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: Arc<std::io::Error>,
    },

    /// An adapter's shared state lock was poisoned.
    #[error("storage lock poisoned: {0}")]
    LockPoisoned(String),
}

impl PersistenceError {
    /// Wraps an encoding failure.
    #[must_use]
    pub fn encode(err: impl std::fmt::Display) -> Self {
        Self::Encode(err.to_string())
    }

    /// Wraps an I/O failure at `path`.
    #[must_use]
    pub fn io(path: impl Into<Utf8PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source: Arc::new(err),
        }
    }

    /// Wraps a poisoned lock.
    #[must_use]
    pub fn lock_poisoned(err: impl std::fmt::Display) -> Self {
        Self::LockPoisoned(err.to_string())
    }
}
