//! Load and save of a single collection snapshot.

use super::{
    Committed, PersistenceAdapter, PersistenceWarning, StorageKey,
    snapshot::{self, SnapshotRecord},
};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

/// Records read from storage when a store opens.
#[derive(Debug)]
pub struct LoadedCollection<T> {
    /// Decoded records, empty when nothing usable was stored.
    pub records: Vec<T>,
    /// Warning raised when stored data was unreadable.
    pub warning: Option<PersistenceWarning>,
}

/// Binds one storage key to a persistence adapter.
///
/// The slot always writes the whole collection. Failures are turned into
/// [`PersistenceWarning`] values and logged; they never propagate as errors.
///
/// When the adapter fails to read the key, the stored records are unknown
/// and writes are suspended until a later [`Self::load`] reaches the
/// adapter. Undecodable data does not suspend writes: the next save
/// replaces it.
pub struct CollectionSlot<P>
where
    P: PersistenceAdapter,
{
    adapter: Arc<P>,
    key: StorageKey,
    writes_suspended: bool,
}

impl<P> CollectionSlot<P>
where
    P: PersistenceAdapter,
{
    /// Creates a slot for `key` on `adapter`.
    #[must_use]
    pub const fn new(adapter: Arc<P>, key: StorageKey) -> Self {
        Self {
            adapter,
            key,
            writes_suspended: false,
        }
    }

    /// Returns the storage key.
    #[must_use]
    pub const fn key(&self) -> &StorageKey {
        &self.key
    }

    /// Returns `true` while saves are skipped because the last read failed.
    #[must_use]
    pub const fn writes_suspended(&self) -> bool {
        self.writes_suspended
    }

    /// Loads the collection.
    ///
    /// A missing key yields an empty collection without a warning. Read
    /// failures and undecodable bytes yield an empty collection with a
    /// warning; a read failure also suspends writes.
    pub async fn load<T: SnapshotRecord>(&mut self) -> LoadedCollection<T> {
        let read = self.adapter.load(&self.key).await;
        self.writes_suspended = read.is_err();
        let bytes = match read {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                return LoadedCollection {
                    records: Vec::new(),
                    warning: None,
                };
            }
            Err(source) => {
                return self.fallback(PersistenceWarning::LoadFailed {
                    key: self.key.clone(),
                    source,
                });
            }
        };

        match snapshot::decode(&bytes) {
            Ok(records) => LoadedCollection {
                records,
                warning: None,
            },
            Err(source) => self.fallback(PersistenceWarning::Unreadable {
                key: self.key.clone(),
                source,
            }),
        }
    }

    /// Saves the full collection and pairs `value` with the outcome.
    ///
    /// Nothing is written while writes are suspended.
    pub async fn save<T, V>(&self, records: &[T], value: V) -> Committed<V>
    where
        T: Serialize,
    {
        if self.writes_suspended {
            let warning = PersistenceWarning::WriteSuspended {
                key: self.key.clone(),
            };
            warn!(key = %self.key, error = %warning, "collection snapshot not saved");
            return Committed::new(value, Some(warning));
        }

        let warning = match snapshot::encode(records) {
            Ok(bytes) => self
                .adapter
                .save(&self.key, &bytes)
                .await
                .err()
                .map(|source| PersistenceWarning::SaveFailed {
                    key: self.key.clone(),
                    source,
                }),
            Err(source) => Some(PersistenceWarning::EncodeFailed {
                key: self.key.clone(),
                source,
            }),
        };

        if let Some(ref warning) = warning {
            warn!(key = %self.key, error = %warning, "collection snapshot not saved");
        }
        Committed::new(value, warning)
    }

    fn fallback<T>(&self, warning: PersistenceWarning) -> LoadedCollection<T> {
        warn!(
            key = %self.key,
            error = %warning,
            "starting with an empty collection"
        );
        LoadedCollection {
            records: Vec::new(),
            warning: Some(warning),
        }
    }
}
