//! Status filter for task listings.

use super::{ParseTaskFilterError, Task, TaskStatus};
use std::fmt;

/// Selects which tasks a listing returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TaskFilter {
    /// Every task.
    #[default]
    All,
    /// Only tasks with the given status.
    Status(TaskStatus),
}

impl TaskFilter {
    /// Returns `true` when `task` passes the filter.
    #[must_use]
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Status(status) => task.status() == status,
        }
    }

    /// Returns the canonical string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Status(status) => status.as_str(),
        }
    }
}

impl From<TaskStatus> for TaskFilter {
    fn from(status: TaskStatus) -> Self {
        Self::Status(status)
    }
}

impl fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskFilter {
    type Error = ParseTaskFilterError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        TaskStatus::try_from(value)
            .map(Self::Status)
            .map_err(|_| ParseTaskFilterError(value.to_owned()))
    }
}
