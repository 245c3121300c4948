//! Shared world state for task store BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskflow::{
    config::TaskflowConfig,
    storage::adapters::memory::InMemoryPersistenceAdapter,
    task::{
        domain::{TaskFilter, TaskId},
        services::{TaskStore, TaskStoreError},
    },
};

/// Store type used by the BDD world.
pub type TestTaskStore = TaskStore<InMemoryPersistenceAdapter, DefaultClock>;

/// Scenario world for task store behaviour tests.
pub struct TaskStoreWorld {
    pub adapter: Arc<InMemoryPersistenceAdapter>,
    pub config: TaskflowConfig,
    pub store: Option<TestTaskStore>,
    pub listed_titles: Vec<String>,
    pub last_create_error: Option<TaskStoreError>,
}

impl TaskStoreWorld {
    /// Creates a world with a fresh backend and no open store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            adapter: Arc::new(InMemoryPersistenceAdapter::new()),
            config: TaskflowConfig::default(),
            store: None,
            listed_titles: Vec::new(),
            last_create_error: None,
        }
    }

    /// Opens a store over the world's backend, replacing any open store.
    pub fn open_store(&mut self) {
        let store = run_async(TaskStore::open(
            Arc::clone(&self.adapter),
            Arc::new(DefaultClock),
            &self.config,
        ));
        self.store = Some(store);
    }

    /// Returns the open store.
    ///
    /// # Errors
    ///
    /// Returns an error if no step has opened the store yet.
    pub fn store(&self) -> Result<&TestTaskStore, eyre::Report> {
        self.store
            .as_ref()
            .ok_or_else(|| eyre::eyre!("task store has not been opened in scenario world"))
    }

    /// Returns the open store mutably.
    ///
    /// # Errors
    ///
    /// Returns an error if no step has opened the store yet.
    pub fn store_mut(&mut self) -> Result<&mut TestTaskStore, eyre::Report> {
        self.store
            .as_mut()
            .ok_or_else(|| eyre::eyre!("task store has not been opened in scenario world"))
    }

    /// Looks up the identifier of the task titled `title`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is not open or holds no such task.
    pub fn task_id_by_title(&self, title: &str) -> Result<TaskId, eyre::Report> {
        self.store()?
            .list(TaskFilter::All)
            .find(|task| task.title().as_str() == title)
            .map(|task| task.id())
            .ok_or_else(|| eyre::eyre!("no task titled {title:?} in store"))
    }
}

impl Default for TaskStoreWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskStoreWorld {
    TaskStoreWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
