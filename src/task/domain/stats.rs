//! Summary counts derived from the task collection.

use super::{Task, TaskStatus};
use serde::Serialize;

/// Task counts by status.
///
/// Always computed from a full scan; never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStats {
    /// Number of tasks.
    pub total: usize,
    /// Tasks with status `completed`.
    pub completed: usize,
    /// Tasks with status `in-progress`.
    pub in_progress: usize,
    /// Tasks with status `pending`.
    pub pending: usize,
}

impl TaskStats {
    /// Counts `tasks` by status.
    #[must_use]
    pub fn from_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        tasks
            .into_iter()
            .fold(Self::default(), |mut stats, task| {
                stats.total += 1;
                match task.status() {
                    TaskStatus::Completed => stats.completed += 1,
                    TaskStatus::InProgress => stats.in_progress += 1,
                    TaskStatus::Pending => stats.pending += 1,
                }
                stats
            })
    }

    /// Returns the count for a single status.
    #[must_use]
    pub const fn count(&self, status: TaskStatus) -> usize {
        match status {
            TaskStatus::Pending => self.pending,
            TaskStatus::InProgress => self.in_progress,
            TaskStatus::Completed => self.completed,
        }
    }
}
