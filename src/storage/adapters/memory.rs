//! In-memory persistence adapter for tests and embedding.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::storage::{PersistenceAdapter, PersistenceError, PersistenceResult, StorageKey};

/// Thread-safe in-memory key-value byte store.
///
/// Clones share the same underlying map, so a store reopened over a clone
/// sees everything written through the original.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPersistenceAdapter {
    state: Arc<RwLock<HashMap<StorageKey, Vec<u8>>>>,
}

impl InMemoryPersistenceAdapter {
    /// Creates an empty in-memory adapter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl ToString) -> PersistenceError {
    PersistenceError::Unavailable(err.to_string())
}

#[async_trait]
impl PersistenceAdapter for InMemoryPersistenceAdapter {
    async fn load(&self, key: &StorageKey) -> PersistenceResult<Option<Vec<u8>>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.get(key).cloned())
    }

    async fn save(&self, key: &StorageKey, bytes: &[u8]) -> PersistenceResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.insert(key.clone(), bytes.to_vec());
        Ok(())
    }
}
