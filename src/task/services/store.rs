//! Task store: owns the task collection and mirrors it to storage.

use crate::config::TaskflowConfig;
use crate::storage::{
    CollectionSlot, Committed, PersistenceAdapter, PersistenceWarning, snapshot::SnapshotRecord,
};
use crate::task::domain::{
    NewTaskParams, Task, TaskDomainError, TaskEdit, TaskFilter, TaskId, TaskPriority, TaskStats,
    TaskStatus, TaskTitle,
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    priority: TaskPriority,
    status: TaskStatus,
}

impl CreateTaskRequest {
    /// Creates a request with the required title. Priority defaults to
    /// `medium` and status to `pending`.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            priority: TaskPriority::default(),
            status: TaskStatus::default(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the initial status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }
}

/// Request payload for editing an existing task in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditTaskRequest {
    title: Option<String>,
    description: Option<String>,
    priority: Option<TaskPriority>,
    status: Option<TaskStatus>,
}

impl EditTaskRequest {
    /// Creates a request that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description. A blank value clears it.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Replaces the status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Service-level errors for task store operations.
///
/// Only validation rejects an operation. Persistence problems surface as
/// [`PersistenceWarning`] values on the returned [`Committed`].
#[derive(Debug, Error)]
pub enum TaskStoreError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
}

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// In-memory owner of the task collection.
///
/// Every mutation rewrites the whole collection through the persistence
/// adapter before returning, unless a failed read suspended writes (see
/// [`TaskStore::reload`]). Lookups by an unknown id are no-ops and return
/// `None` without touching storage.
pub struct TaskStore<P, C>
where
    P: PersistenceAdapter,
    C: Clock + Send + Sync,
{
    tasks: Vec<Task>,
    slot: CollectionSlot<P>,
    clock: Arc<C>,
    recent_activity_limit: usize,
    load_warning: Option<PersistenceWarning>,
}

impl<P, C> TaskStore<P, C>
where
    P: PersistenceAdapter,
    C: Clock + Send + Sync,
{
    /// Opens the store, loading any previously saved tasks.
    ///
    /// Unreadable stored data never fails the call: the store starts empty
    /// and the problem is available from [`Self::load_warning`].
    pub async fn open(adapter: Arc<P>, clock: Arc<C>, config: &TaskflowConfig) -> Self {
        let mut slot = CollectionSlot::new(adapter, config.tasks_key().clone());
        let loaded = slot.load::<Task>().await;
        info!(key = %slot.key(), tasks = loaded.records.len(), "task store opened");

        Self {
            tasks: loaded.records,
            slot,
            clock,
            recent_activity_limit: config.recent_activity_limit(),
            load_warning: loaded.warning,
        }
    }

    /// Returns the warning raised while loading, if stored data was unusable.
    #[must_use]
    pub const fn load_warning(&self) -> Option<&PersistenceWarning> {
        self.load_warning.as_ref()
    }

    /// Reads the stored tasks again.
    ///
    /// After a failed read the store keeps working in memory, but every
    /// mutation reports [`PersistenceWarning::WriteSuspended`] instead of
    /// overwriting tasks it never saw. Once the adapter can be read, the
    /// stored tasks replace the in-memory ones, unsaved changes included,
    /// and writes resume. If the read fails again, the in-memory tasks
    /// are kept.
    ///
    /// Returns the new load warning, if any.
    pub async fn reload(&mut self) -> Option<&PersistenceWarning> {
        let loaded = self.slot.load::<Task>().await;
        if !self.slot.writes_suspended() {
            self.tasks = loaded.records;
        }
        info!(
            key = %self.slot.key(),
            tasks = self.tasks.len(),
            writes_suspended = self.slot.writes_suspended(),
            "task store reloaded"
        );
        self.load_warning = loaded.warning;
        self.load_warning.as_ref()
    }

    /// Creates a task and appends it to the collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Domain`] when the title is blank. The
    /// collection is left unchanged and nothing is written.
    pub async fn create(&mut self, request: CreateTaskRequest) -> TaskStoreResult<Committed<Task>> {
        let CreateTaskRequest {
            title,
            description,
            priority,
            status,
        } = request;

        let params = NewTaskParams {
            title: TaskTitle::new(title)?,
            description,
            priority,
            status,
        };
        let task = Task::new(params, &*self.clock);
        self.tasks.push(task.clone());
        Ok(self.commit(task).await)
    }

    /// Sets the status of the task with `id`.
    ///
    /// Returns `None`, writing nothing, when no such task exists.
    pub async fn update_status(&mut self, id: TaskId, status: TaskStatus) -> Option<Committed<Task>> {
        let task = self.tasks.iter_mut().find(|task| task.id() == id)?;
        task.set_status(status, &*self.clock);
        let updated = task.clone();
        Some(self.commit(updated).await)
    }

    /// Edits the task with `id` in place.
    ///
    /// Returns `Ok(None)`, writing nothing, when no such task exists.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Domain`] when a replacement title is blank.
    /// The task is left unchanged.
    pub async fn edit(
        &mut self,
        id: TaskId,
        request: EditTaskRequest,
    ) -> TaskStoreResult<Option<Committed<Task>>> {
        let EditTaskRequest {
            title,
            description,
            priority,
            status,
        } = request;

        let edit = TaskEdit {
            title: title.map(TaskTitle::new).transpose()?,
            description,
            priority,
            status,
        };

        let Some(task) = self.tasks.iter_mut().find(|task| task.id() == id) else {
            return Ok(None);
        };
        task.apply_edit(edit, &*self.clock);
        let updated = task.clone();
        Ok(Some(self.commit(updated).await))
    }

    /// Removes the task with `id`.
    ///
    /// Returns the removed task, or `None` when it was already absent; a
    /// repeated delete is therefore a no-op.
    pub async fn delete(&mut self, id: TaskId) -> Option<Committed<Task>> {
        let index = self.tasks.iter().position(|task| task.id() == id)?;
        let removed = self.tasks.remove(index);
        Some(self.commit(removed).await)
    }

    /// Lists tasks passing `filter`, in insertion order.
    pub fn list(&self, filter: TaskFilter) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(move |task| filter.matches(task))
    }

    /// Returns the task with `id`, if present.
    #[must_use]
    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns the most recently created tasks, newest first.
    ///
    /// Tasks sharing a creation timestamp keep their insertion order. The
    /// view holds at most the configured recent-activity limit.
    #[must_use]
    pub fn recent_activity(&self) -> Vec<&Task> {
        let mut recent: Vec<&Task> = self.tasks.iter().collect();
        recent.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        recent.truncate(self.recent_activity_limit);
        recent
    }

    /// Computes task counts from the current collection.
    #[must_use]
    pub fn stats(&self) -> TaskStats {
        TaskStats::from_tasks(&self.tasks)
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the store holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    async fn commit(&self, task: Task) -> Committed<Task> {
        let committed = self.slot.save(&self.tasks, task).await;
        let stats = self.stats();
        debug!(
            key = %self.slot.key(),
            total = stats.total,
            completed = stats.completed,
            in_progress = stats.in_progress,
            pending = stats.pending,
            "task collection updated"
        );
        committed
    }
}

impl SnapshotRecord for Task {
    type Id = TaskId;

    fn record_id(&self) -> TaskId {
        self.id()
    }
}
