//! Store configuration.

use crate::storage::StorageKey;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default key for the task collection.
pub const DEFAULT_TASKS_KEY: &str = "taskflow-tasks";

/// Default key for the project collection.
pub const DEFAULT_PROJECTS_KEY: &str = "taskflow-projects";

/// Default number of entries in the recent-activity view.
pub const DEFAULT_RECENT_ACTIVITY_LIMIT: usize = 5;

/// Errors returned while assembling a configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Both collections were given the same storage key. Each store rewrites
    /// its key in full, so a shared key would let one erase the other.
    #[error("tasks and projects must use different storage keys, both use '{0}'")]
    SharedKey(StorageKey),
}

/// Configuration shared by the task and project stores.
///
/// Every field has a default, so a partial JSON document is enough:
///
/// ```
/// use taskflow::config::TaskflowConfig;
///
/// let config = TaskflowConfig::from_json_slice(br#"{"recentActivityLimit": 10}"#)
///     .expect("valid configuration");
/// assert_eq!(config.recent_activity_limit(), 10);
/// assert_eq!(config.tasks_key().as_str(), "taskflow-tasks");
/// ```
///
/// The two collection keys are always distinct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ConfigDocument", into = "ConfigDocument")]
pub struct TaskflowConfig {
    tasks_key: StorageKey,
    projects_key: StorageKey,
    recent_activity_limit: usize,
}

/// Serialized form, validated on the way into [`TaskflowConfig`].
#[derive(Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ConfigDocument {
    tasks_key: StorageKey,
    projects_key: StorageKey,
    recent_activity_limit: usize,
}

impl Default for ConfigDocument {
    fn default() -> Self {
        TaskflowConfig::default().into()
    }
}

impl TryFrom<ConfigDocument> for TaskflowConfig {
    type Error = ConfigError;

    fn try_from(document: ConfigDocument) -> Result<Self, Self::Error> {
        ensure_distinct(&document.tasks_key, &document.projects_key)?;
        Ok(Self {
            tasks_key: document.tasks_key,
            projects_key: document.projects_key,
            recent_activity_limit: document.recent_activity_limit,
        })
    }
}

impl From<TaskflowConfig> for ConfigDocument {
    fn from(config: TaskflowConfig) -> Self {
        Self {
            tasks_key: config.tasks_key,
            projects_key: config.projects_key,
            recent_activity_limit: config.recent_activity_limit,
        }
    }
}

fn ensure_distinct(tasks_key: &StorageKey, projects_key: &StorageKey) -> Result<(), ConfigError> {
    if tasks_key == projects_key {
        return Err(ConfigError::SharedKey(tasks_key.clone()));
    }
    Ok(())
}

impl Default for TaskflowConfig {
    fn default() -> Self {
        Self {
            tasks_key: StorageKey::from_static(DEFAULT_TASKS_KEY),
            projects_key: StorageKey::from_static(DEFAULT_PROJECTS_KEY),
            recent_activity_limit: DEFAULT_RECENT_ACTIVITY_LIMIT,
        }
    }
}

impl TaskflowConfig {
    /// Parses a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns the parse error when the document is not valid JSON, a key
    /// fails [`StorageKey`] validation, or both collections name the same
    /// key.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Returns the storage key for the task collection.
    #[must_use]
    pub const fn tasks_key(&self) -> &StorageKey {
        &self.tasks_key
    }

    /// Returns the storage key for the project collection.
    #[must_use]
    pub const fn projects_key(&self) -> &StorageKey {
        &self.projects_key
    }

    /// Returns the maximum number of tasks in the recent-activity view.
    #[must_use]
    pub const fn recent_activity_limit(&self) -> usize {
        self.recent_activity_limit
    }

    /// Sets the task collection key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SharedKey`] when `key` is the project key.
    pub fn with_tasks_key(mut self, key: StorageKey) -> Result<Self, ConfigError> {
        ensure_distinct(&key, &self.projects_key)?;
        self.tasks_key = key;
        Ok(self)
    }

    /// Sets the project collection key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SharedKey`] when `key` is the task key.
    pub fn with_projects_key(mut self, key: StorageKey) -> Result<Self, ConfigError> {
        ensure_distinct(&self.tasks_key, &key)?;
        self.projects_key = key;
        Ok(self)
    }

    /// Sets the recent-activity limit.
    #[must_use]
    pub const fn with_recent_activity_limit(mut self, limit: usize) -> Self {
        self.recent_activity_limit = limit;
        self
    }
}
