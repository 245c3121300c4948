//! Integration tests for snapshot durability and recovery.

use std::sync::Arc;

use super::helpers::{adapter, open_tasks, open_tasks_with};
use mockable::DefaultClock;
use rstest::rstest;
use taskflow::{
    config::TaskflowConfig,
    storage::{
        PersistenceAdapter, PersistenceWarning, StorageKey,
        adapters::memory::InMemoryPersistenceAdapter,
        snapshot::{self, SnapshotError},
    },
    task::{
        domain::{NewTaskParams, Task, TaskFilter, TaskPriority, TaskStatus, TaskTitle},
        services::CreateTaskRequest,
    },
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn corrupt_snapshot_opens_empty_with_warning(adapter: Arc<InMemoryPersistenceAdapter>) {
    let config = TaskflowConfig::default();
    adapter
        .save(config.tasks_key(), b"{not json")
        .await
        .expect("in-memory save should succeed");

    let store = open_tasks(&adapter).await;

    assert!(store.is_empty());
    assert!(matches!(
        store.load_warning(),
        Some(PersistenceWarning::Unreadable { .. })
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tampered_snapshot_is_discarded(adapter: Arc<InMemoryPersistenceAdapter>) {
    let mut store = open_tasks(&adapter).await;
    store
        .create(CreateTaskRequest::new("Write report"))
        .await
        .expect("task creation should succeed");
    let key = TaskflowConfig::default().tasks_key().clone();
    let bytes = adapter
        .load(&key)
        .await
        .expect("in-memory load should succeed")
        .expect("snapshot should exist");
    let tampered = String::from_utf8(bytes)
        .expect("snapshot is UTF-8")
        .replace("Write report", "Shred report");
    adapter
        .save(&key, tampered.as_bytes())
        .await
        .expect("in-memory save should succeed");

    let reopened = open_tasks(&adapter).await;

    assert!(reopened.is_empty());
    assert!(matches!(
        reopened.load_warning(),
        Some(PersistenceWarning::Unreadable { .. })
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn first_write_after_recovery_replaces_bad_snapshot(
    adapter: Arc<InMemoryPersistenceAdapter>,
) {
    let key = TaskflowConfig::default().tasks_key().clone();
    adapter
        .save(&key, b"[]")
        .await
        .expect("in-memory save should succeed");

    let mut store = open_tasks(&adapter).await;
    store
        .create(CreateTaskRequest::new("Start over"))
        .await
        .expect("task creation should succeed");

    let bytes = adapter
        .load(&key)
        .await
        .expect("in-memory load should succeed")
        .expect("snapshot should exist");
    let records: Vec<Task> = snapshot::decode(&bytes).expect("snapshot should decode");
    assert_eq!(records.len(), 1);
    assert_eq!(records.first().map(|task| task.title().as_str()), Some("Start over"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn custom_keys_isolate_collections(adapter: Arc<InMemoryPersistenceAdapter>) {
    let work = TaskflowConfig::default()
        .with_tasks_key(StorageKey::new("work-tasks").expect("valid key"))
        .expect("work key differs from the project key");
    let mut work_store = open_tasks_with(&adapter, &work).await;
    work_store
        .create(CreateTaskRequest::new("Ship release"))
        .await
        .expect("task creation should succeed");

    let default_store = open_tasks(&adapter).await;
    let reopened_work = open_tasks_with(&adapter, &work).await;

    assert!(default_store.is_empty());
    assert_eq!(reopened_work.list(TaskFilter::All).count(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn snapshot_with_repeated_task_id_is_discarded(adapter: Arc<InMemoryPersistenceAdapter>) {
    let task = Task::new(
        NewTaskParams {
            title: TaskTitle::new("Twice").expect("valid title"),
            description: None,
            priority: TaskPriority::default(),
            status: TaskStatus::default(),
        },
        &DefaultClock,
    );
    let bytes = snapshot::encode(&[task.clone(), task]).expect("encodable tasks");
    adapter
        .save(TaskflowConfig::default().tasks_key(), &bytes)
        .await
        .expect("in-memory save should succeed");

    let store = open_tasks(&adapter).await;

    assert!(store.is_empty());
    assert!(matches!(
        store.load_warning(),
        Some(PersistenceWarning::Unreadable {
            source: SnapshotError::DuplicateId(_),
            ..
        })
    ));
}
