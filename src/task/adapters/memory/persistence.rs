//! In-memory key/value persistence for the task list.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    adapters::codec,
    config::{DEFAULT_NAMESPACE, StoreConfig},
    domain::TaskRecord,
    ports::{PersistenceError, PersistenceResult, TaskPersistence},
};

/// Thread-safe key/value persistence.
///
/// Models browser session storage: string payloads keyed by namespace.
/// Records pass through the JSON codec on every save and load, so a
/// round-trip exercises the same wire shape a real store would hold.
#[derive(Debug, Clone)]
pub struct InMemoryTaskPersistence {
    namespace: String,
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl Default for InMemoryTaskPersistence {
    fn default() -> Self {
        Self::with_namespace(DEFAULT_NAMESPACE)
    }
}

impl InMemoryTaskPersistence {
    /// Creates an empty store using the default namespace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store writing under `namespace`.
    #[must_use]
    pub fn with_namespace(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            entries: Arc::default(),
        }
    }

    /// Creates an empty store using the namespace from `config`.
    #[must_use]
    pub fn from_config(config: &StoreConfig) -> Self {
        Self::with_namespace(config.namespace.clone())
    }

    /// Returns the namespace this store reads and writes.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Stores a raw payload under the namespace, bypassing the codec.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::LockPoisoned`] if the state lock is
    /// poisoned.
    pub fn put_raw(&self, payload: impl Into<String>) -> PersistenceResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(PersistenceError::lock_poisoned)?;
        entries.insert(self.namespace.clone(), payload.into());
        Ok(())
    }

    /// Returns the raw payload stored under the namespace.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::LockPoisoned`] if the state lock is
    /// poisoned.
    pub fn raw(&self) -> PersistenceResult<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(PersistenceError::lock_poisoned)?;
        Ok(entries.get(&self.namespace).cloned())
    }
}

impl TaskPersistence for InMemoryTaskPersistence {
    fn save(&self, records: &[TaskRecord]) -> PersistenceResult<()> {
        let payload = codec::encode(records)?;
        self.put_raw(payload)
    }

    fn load(&self) -> PersistenceResult<Option<Vec<TaskRecord>>> {
        Ok(self.raw()?.as_deref().and_then(codec::decode))
    }
}
