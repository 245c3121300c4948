//! Domain model for task tracking.
//!
//! Tasks are free-standing units of work. Their status moves freely between
//! pending, in-progress and completed; no transition is forbidden.

mod error;
mod filter;
mod ids;
mod stats;
mod task;

pub use error::{
    ParseTaskFilterError, ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError,
};
pub use filter::TaskFilter;
pub use ids::{TaskId, TaskTitle};
pub use stats::TaskStats;
pub use task::{NewTaskParams, Task, TaskEdit, TaskPriority, TaskStatus};
