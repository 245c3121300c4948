//! Adapter implementations for the persistence port.

pub mod directory;
pub mod memory;
