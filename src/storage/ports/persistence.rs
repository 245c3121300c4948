//! Persistence port for opaque collection snapshots.

use crate::storage::StorageKey;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for persistence adapter operations.
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Durable key-value byte store.
///
/// Adapters know nothing about tasks or projects: they store and return the
/// serialized snapshot produced by the stores, one blob per key. Keys are
/// independent and no cross-key transaction is offered.
#[async_trait]
pub trait PersistenceAdapter: Send + Sync {
    /// Loads the bytes stored under `key`.
    ///
    /// Returns `None` when nothing has been saved under the key yet.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] when the backing store cannot be read.
    async fn load(&self, key: &StorageKey) -> PersistenceResult<Option<Vec<u8>>>;

    /// Replaces the bytes stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] when the write does not complete, for
    /// example when storage quota is exhausted.
    async fn save(&self, key: &StorageKey, bytes: &[u8]) -> PersistenceResult<()>;
}

/// Errors returned by persistence adapter implementations.
#[derive(Debug, Clone, Error)]
pub enum PersistenceError {
    /// The adapter's internal state is unusable (for example a poisoned lock).
    #[error("persistence adapter unavailable: {0}")]
    Unavailable(String),

    /// Backend failure while reading or writing.
    #[error("persistence error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl PersistenceError {
    /// Wraps a backend error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
