//! Port contracts for collection persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the stores.

pub mod persistence;

pub use persistence::{PersistenceAdapter, PersistenceError, PersistenceResult};
