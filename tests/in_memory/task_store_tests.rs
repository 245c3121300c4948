//! In-memory integration tests for the task store.

use std::sync::Arc;

use super::helpers::{adapter, open_tasks, open_tasks_with};
use rstest::rstest;
use taskflow::{
    config::TaskflowConfig,
    storage::adapters::memory::InMemoryPersistenceAdapter,
    task::{
        domain::{TaskFilter, TaskPriority, TaskStats, TaskStatus},
        services::{CreateTaskRequest, EditTaskRequest},
    },
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn filtered_listing_and_stats_track_mutations(adapter: Arc<InMemoryPersistenceAdapter>) {
    let mut store = open_tasks(&adapter).await;
    let report = store
        .create(CreateTaskRequest::new("Write report").with_priority(TaskPriority::High))
        .await
        .expect("task creation should succeed")
        .into_value();
    let review = store
        .create(
            CreateTaskRequest::new("Review PR")
                .with_priority(TaskPriority::Low)
                .with_status(TaskStatus::InProgress),
        )
        .await
        .expect("task creation should succeed")
        .into_value();

    assert_eq!(
        store.stats(),
        TaskStats {
            total: 2,
            completed: 0,
            in_progress: 1,
            pending: 1,
        }
    );

    store
        .update_status(report.id(), TaskStatus::Completed)
        .await
        .expect("task should exist");
    let completed: Vec<_> = store
        .list(TaskFilter::Status(TaskStatus::Completed))
        .map(|task| task.id())
        .collect();
    assert_eq!(completed, vec![report.id()]);

    store.delete(review.id()).await.expect("task should exist");
    assert_eq!(
        store.stats(),
        TaskStats {
            total: 1,
            completed: 1,
            in_progress: 0,
            pending: 0,
        }
    );
    assert_eq!(store.list(TaskFilter::All).count(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn edit_replaces_only_supplied_fields(adapter: Arc<InMemoryPersistenceAdapter>) {
    let mut store = open_tasks(&adapter).await;
    let task = store
        .create(
            CreateTaskRequest::new("Draft agenda")
                .with_description("For Monday")
                .with_priority(TaskPriority::Low),
        )
        .await
        .expect("task creation should succeed")
        .into_value();

    let edited = store
        .edit(
            task.id(),
            EditTaskRequest::new()
                .with_title("Final agenda")
                .with_priority(TaskPriority::High),
        )
        .await
        .expect("edit should succeed")
        .expect("task should exist")
        .into_value();

    assert_eq!(edited.title().as_str(), "Final agenda");
    assert_eq!(edited.priority(), TaskPriority::High);
    assert_eq!(edited.description(), Some("For Monday"));
    assert_eq!(edited.status(), TaskStatus::Pending);
    assert_eq!(edited.created_at(), task.created_at());

    let reopened = open_tasks(&adapter).await;
    assert_eq!(reopened.find(task.id()), Some(&edited));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn recent_activity_respects_configured_limit(adapter: Arc<InMemoryPersistenceAdapter>) {
    let config = TaskflowConfig::default().with_recent_activity_limit(2);
    let mut store = open_tasks_with(&adapter, &config).await;
    for title in ["One", "Two", "Three"] {
        store
            .create(CreateTaskRequest::new(title))
            .await
            .expect("task creation should succeed");
    }

    let recent = store.recent_activity();

    assert_eq!(recent.len(), 2);
    assert!(
        recent
            .windows(2)
            .all(|pair| matches!(pair, [newer, older] if newer.created_at() >= older.created_at()))
    );
    assert_eq!(store.len(), 3);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn blank_title_leaves_store_and_backend_untouched(adapter: Arc<InMemoryPersistenceAdapter>) {
    let mut store = open_tasks(&adapter).await;

    let result = store.create(CreateTaskRequest::new("   ")).await;

    assert!(result.is_err());
    assert!(store.is_empty());
    assert_eq!(store.stats(), TaskStats::default());
    let reopened = open_tasks(&adapter).await;
    assert!(reopened.is_empty());
    assert!(reopened.load_warning().is_none());
}
