//! Unit tests for snapshot storage.
