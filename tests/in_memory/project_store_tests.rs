//! In-memory integration tests for the project store.

use std::sync::Arc;

use super::helpers::{adapter, open_projects, open_tasks};
use chrono::NaiveDate;
use rstest::rstest;
use taskflow::{
    project::{
        domain::{ProjectColor, ProjectStatus},
        services::CreateProjectRequest,
    },
    storage::adapters::memory::InMemoryPersistenceAdapter,
    task::services::CreateTaskRequest,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn project_round_trips_through_shared_backend(adapter: Arc<InMemoryPersistenceAdapter>) {
    let mut store = open_projects(&adapter).await;
    let start = NaiveDate::from_ymd_opt(2026, 10, 5).expect("valid date");
    let end = NaiveDate::from_ymd_opt(2026, 11, 30).expect("valid date");

    let created = store
        .create(
            CreateProjectRequest::new("Website redesign")
                .with_color(ProjectColor::Emerald)
                .with_client("Acme")
                .with_start_date(start)
                .with_end_date(end),
        )
        .await
        .expect("project creation should succeed");
    assert!(created.is_durable());

    let reopened = open_projects(&adapter).await;
    let project = reopened
        .find(created.value().id())
        .expect("project should be reloaded");

    assert_eq!(project.color(), ProjectColor::Emerald);
    assert_eq!(project.client(), Some("Acme"));
    assert_eq!(project.start_date(), Some(start));
    assert_eq!(project.end_date(), Some(end));
    assert_eq!(project.status(), ProjectStatus::Planning);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_and_project_collections_are_independent(adapter: Arc<InMemoryPersistenceAdapter>) {
    let mut tasks = open_tasks(&adapter).await;
    let mut projects = open_projects(&adapter).await;

    tasks
        .create(CreateTaskRequest::new("Write report"))
        .await
        .expect("task creation should succeed");
    projects
        .create(CreateProjectRequest::new("Quarterly review"))
        .await
        .expect("project creation should succeed");

    let reopened_tasks = open_tasks(&adapter).await;
    let reopened_projects = open_projects(&adapter).await;

    assert_eq!(reopened_tasks.len(), 1);
    assert_eq!(reopened_projects.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_changes_persist(adapter: Arc<InMemoryPersistenceAdapter>) {
    let mut store = open_projects(&adapter).await;
    let project = store
        .create(CreateProjectRequest::new("Migration"))
        .await
        .expect("project creation should succeed")
        .into_value();

    store
        .update_status(project.id(), ProjectStatus::OnHold)
        .await
        .expect("project should exist");

    let reopened = open_projects(&adapter).await;
    let reloaded = reopened.find(project.id()).expect("project should be reloaded");
    assert_eq!(reloaded.status(), ProjectStatus::OnHold);
    assert!(reloaded.updated_at().is_some());
}
