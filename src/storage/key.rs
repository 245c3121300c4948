//! Validated storage key type.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

/// Maximum key length; keys double as file names in the directory adapter.
const MAX_KEY_LENGTH: usize = 100;

/// Errors returned while validating a storage key.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageKeyError {
    /// The key is empty after trimming.
    #[error("storage key must not be empty")]
    Empty,

    /// The key contains characters outside `[a-z0-9._-]` or starts with a dot.
    #[error(
        "storage key '{0}' contains invalid characters (only lowercase alphanumerics, '.', '_' and '-' allowed, no leading '.')"
    )]
    InvalidCharacters(String),

    /// The key exceeds the length limit.
    #[error("storage key exceeds 100 character limit: {0}")]
    TooLong(String),
}

/// Name of one persisted collection, e.g. `taskflow-tasks`.
///
/// Keys are trimmed and lowercased. The accepted alphabet keeps every key a
/// safe, non-hidden file name so directory-backed adapters can use it
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StorageKey(Cow<'static, str>);

impl StorageKey {
    /// Creates a validated storage key.
    ///
    /// # Errors
    ///
    /// Returns [`StorageKeyError::Empty`] when the value is blank,
    /// [`StorageKeyError::TooLong`] when it exceeds 100 characters, or
    /// [`StorageKeyError::InvalidCharacters`] when it contains characters
    /// outside `[a-z0-9._-]` or begins with a dot.
    pub fn new(value: impl Into<String>) -> Result<Self, StorageKeyError> {
        let raw = value.into();
        let normalized = raw.trim().to_ascii_lowercase();

        if normalized.is_empty() {
            return Err(StorageKeyError::Empty);
        }

        if normalized.len() > MAX_KEY_LENGTH {
            return Err(StorageKeyError::TooLong(raw));
        }

        let has_valid_chars = normalized
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '.' | '_' | '-'));
        if !has_valid_chars || normalized.starts_with('.') {
            return Err(StorageKeyError::InvalidCharacters(raw));
        }

        Ok(Self(Cow::Owned(normalized)))
    }

    /// Wraps a compile-time key known to satisfy the validation rules.
    pub(crate) const fn from_static(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StorageKey {
    type Error = StorageKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StorageKey> for String {
    fn from(key: StorageKey) -> Self {
        key.0.into_owned()
    }
}

impl AsRef<str> for StorageKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
