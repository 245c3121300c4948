//! Versioned snapshot envelope for persisted collections.
//!
//! A collection is stored as one JSON document:
//!
//! ```json
//! {
//!   "schemaVersion": 1,
//!   "checksum": "<sha256 of the records array, lowercase hex>",
//!   "records": [ ... ]
//! }
//! ```
//!
//! The checksum covers the compact JSON encoding of `records`. Decoding
//! re-encodes the parsed records and compares digests, so any edit that
//! changes the data without recomputing the checksum is reported as
//! [`SnapshotError::ChecksumMismatch`]. Record identifiers must be unique
//! within a snapshot.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;
use thiserror::Error;

/// Schema version written by this crate.
pub const SCHEMA_VERSION: u32 = 1;

/// Record type stored in a snapshot.
pub trait SnapshotRecord: Serialize + DeserializeOwned {
    /// Identifier that no two records of one snapshot may share.
    type Id: Eq + Hash + fmt::Display;

    /// Returns the record's identifier.
    fn record_id(&self) -> Self::Id;
}

/// Errors raised while encoding or decoding a snapshot.
#[derive(Debug, Clone, Error)]
pub enum SnapshotError {
    /// The records could not be serialized.
    #[error("failed to encode snapshot: {0}")]
    Encode(Arc<serde_json::Error>),

    /// The bytes are not a well-formed snapshot for this collection.
    #[error("malformed snapshot: {0}")]
    Malformed(Arc<serde_json::Error>),

    /// The envelope was written by an unknown schema version.
    #[error("unsupported snapshot schema version {found}, expected {expected}")]
    UnsupportedVersion {
        /// Version found in the envelope.
        found: u32,
        /// Version this crate reads and writes.
        expected: u32,
    },

    /// The records do not match the stored checksum.
    #[error("snapshot checksum mismatch: stored {stored}, computed {computed}")]
    ChecksumMismatch {
        /// Checksum recorded in the envelope.
        stored: String,
        /// Checksum of the records actually present.
        computed: String,
    },

    /// Two records share an identifier.
    #[error("snapshot contains duplicate record id {0}")]
    DuplicateId(String),
}

impl SnapshotError {
    fn encode(err: serde_json::Error) -> Self {
        Self::Encode(Arc::new(err))
    }

    fn malformed(err: serde_json::Error) -> Self {
        Self::Malformed(Arc::new(err))
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EnvelopeRef<'a, T> {
    schema_version: u32,
    checksum: String,
    records: &'a [T],
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EnvelopeHeader {
    schema_version: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Envelope<T> {
    checksum: String,
    records: Vec<T>,
}

/// Encodes a full collection into snapshot bytes.
///
/// # Errors
///
/// Returns [`SnapshotError::Encode`] if a record cannot be serialized.
pub fn encode<T: Serialize>(records: &[T]) -> Result<Vec<u8>, SnapshotError> {
    let payload = serde_json::to_vec(records).map_err(SnapshotError::encode)?;
    let envelope = EnvelopeRef {
        schema_version: SCHEMA_VERSION,
        checksum: checksum_hex(&payload),
        records,
    };
    serde_json::to_vec(&envelope).map_err(SnapshotError::encode)
}

/// Decodes snapshot bytes back into a collection.
///
/// # Errors
///
/// Returns [`SnapshotError::Malformed`] when the bytes are not a snapshot of
/// `T` records, [`SnapshotError::UnsupportedVersion`] when the envelope
/// carries another schema version, [`SnapshotError::ChecksumMismatch`]
/// when the records were altered, or [`SnapshotError::DuplicateId`] when two
/// records share an identifier.
pub fn decode<T: SnapshotRecord>(bytes: &[u8]) -> Result<Vec<T>, SnapshotError> {
    let header: EnvelopeHeader = serde_json::from_slice(bytes).map_err(SnapshotError::malformed)?;
    if header.schema_version != SCHEMA_VERSION {
        return Err(SnapshotError::UnsupportedVersion {
            found: header.schema_version,
            expected: SCHEMA_VERSION,
        });
    }

    let envelope: Envelope<T> = serde_json::from_slice(bytes).map_err(SnapshotError::malformed)?;
    let payload = serde_json::to_vec(&envelope.records).map_err(SnapshotError::encode)?;
    let computed = checksum_hex(&payload);
    if computed != envelope.checksum {
        return Err(SnapshotError::ChecksumMismatch {
            stored: envelope.checksum,
            computed,
        });
    }

    ensure_unique_ids(&envelope.records)?;
    Ok(envelope.records)
}

fn ensure_unique_ids<T: SnapshotRecord>(records: &[T]) -> Result<(), SnapshotError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        let id = record.record_id();
        if seen.contains(&id) {
            return Err(SnapshotError::DuplicateId(id.to_string()));
        }
        seen.insert(id);
    }
    Ok(())
}

fn checksum_hex(payload: &[u8]) -> String {
    Sha256::digest(payload)
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect()
}
