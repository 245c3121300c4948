//! Application services for task tracking.

mod store;

pub use store::{CreateTaskRequest, EditTaskRequest, TaskStore, TaskStoreError, TaskStoreResult};
