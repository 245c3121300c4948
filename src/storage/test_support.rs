//! Test doubles for the persistence port.

use crate::storage::{PersistenceAdapter, PersistenceError, PersistenceResult, StorageKey};
use async_trait::async_trait;

mockall::mock! {
    /// Mock persistence adapter for failure injection.
    pub Adapter {}

    #[async_trait]
    impl PersistenceAdapter for Adapter {
        async fn load(&self, key: &StorageKey) -> PersistenceResult<Option<Vec<u8>>>;
        async fn save(&self, key: &StorageKey, bytes: &[u8]) -> PersistenceResult<()>;
    }
}

/// Builds the error used to simulate an exhausted storage quota.
pub(crate) fn quota_exceeded() -> PersistenceError {
    PersistenceError::backend(std::io::Error::other("storage quota exceeded"))
}
