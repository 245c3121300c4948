//! Durable snapshot storage for the task and project collections.
//!
//! Each store mirrors its whole collection to a single key after every
//! mutation. This module owns everything between the in-memory collection
//! and the bytes handed to a [`PersistenceAdapter`]:
//!
//! - [`StorageKey`]: validated key naming one collection
//! - [`ports`]: the schema-agnostic adapter contract
//! - [`snapshot`]: the versioned, checksummed JSON envelope
//! - [`CollectionSlot`]: load/save of one collection with warning handling
//! - [`adapters`]: in-memory and directory-backed adapter implementations

pub mod adapters;
mod collection;
mod committed;
mod key;
pub mod ports;
pub mod snapshot;

pub use collection::{CollectionSlot, LoadedCollection};
pub use committed::{Committed, PersistenceWarning};
pub use key::{StorageKey, StorageKeyError};
pub use ports::{PersistenceAdapter, PersistenceError, PersistenceResult};

#[cfg(test)]
pub(crate) mod test_support;

#[cfg(test)]
mod tests;
