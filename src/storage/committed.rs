//! Mutation results paired with their persistence outcome.

use super::{PersistenceError, StorageKey, snapshot::SnapshotError};
use thiserror::Error;

/// Recoverable persistence problem observed by a store.
///
/// Warnings never abort an operation: on load the store falls back to an
/// empty collection, on save the in-memory change stands and the next
/// successful save writes the full collection again. After a failed read no
/// save is attempted until a later read succeeds.
#[derive(Debug, Clone, Error)]
pub enum PersistenceWarning {
    /// The adapter failed to read the collection.
    #[error("failed to load collection '{key}': {source}")]
    LoadFailed {
        /// Collection key.
        key: StorageKey,
        /// Adapter failure.
        #[source]
        source: PersistenceError,
    },

    /// Stored bytes could not be decoded and were discarded.
    #[error("discarded unreadable collection '{key}': {source}")]
    Unreadable {
        /// Collection key.
        key: StorageKey,
        /// Decoding failure.
        #[source]
        source: SnapshotError,
    },

    /// The collection could not be encoded, so nothing was written.
    #[error("failed to encode collection '{key}': {source}")]
    EncodeFailed {
        /// Collection key.
        key: StorageKey,
        /// Encoding failure.
        #[source]
        source: SnapshotError,
    },

    /// The adapter rejected the write.
    #[error("failed to save collection '{key}': {source}")]
    SaveFailed {
        /// Collection key.
        key: StorageKey,
        /// Adapter failure.
        #[source]
        source: PersistenceError,
    },

    /// The collection has not been read successfully, so writing it could
    /// replace records the store never saw. Nothing was written.
    #[error("skipped saving collection '{key}' because it has not been loaded")]
    WriteSuspended {
        /// Collection key.
        key: StorageKey,
    },
}

impl PersistenceWarning {
    /// Returns the key of the affected collection.
    #[must_use]
    pub const fn key(&self) -> &StorageKey {
        match self {
            Self::LoadFailed { key, .. }
            | Self::Unreadable { key, .. }
            | Self::EncodeFailed { key, .. }
            | Self::SaveFailed { key, .. }
            | Self::WriteSuspended { key } => key,
        }
    }
}

/// Outcome of a store mutation that has been applied in memory.
///
/// The wrapped value is the entity as it now exists in the store. When the
/// snapshot write failed the outcome also carries the warning, which the
/// caller may surface to the user.
#[derive(Debug, Clone)]
pub struct Committed<T> {
    value: T,
    warning: Option<PersistenceWarning>,
}

impl<T> Committed<T> {
    pub(crate) const fn new(value: T, warning: Option<PersistenceWarning>) -> Self {
        Self { value, warning }
    }

    /// Returns the committed value.
    #[must_use]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Consumes the outcome and returns the committed value.
    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }

    /// Returns the persistence warning, if the write failed.
    #[must_use]
    pub const fn warning(&self) -> Option<&PersistenceWarning> {
        self.warning.as_ref()
    }

    /// Returns `true` when the snapshot write succeeded.
    #[must_use]
    pub const fn is_durable(&self) -> bool {
        self.warning.is_none()
    }
}
