//! Application services for project tracking.

mod store;

pub use store::{CreateProjectRequest, ProjectStore, ProjectStoreError, ProjectStoreResult};
