//! Task tracking.
//!
//! A [`services::TaskStore`] owns the task collection, applies create,
//! status, edit and delete operations, mirrors the full collection to a
//! persistence adapter after each mutation, and derives summary statistics
//! and the recent-activity view on demand.
//!
//! - Domain types in [`domain`]
//! - The store service in [`services`]

pub mod domain;
pub mod services;
