//! When steps for task store BDD scenarios.

use super::world::{TaskStoreWorld, run_async};
use rstest_bdd_macros::when;
use taskflow::task::{
    domain::{TaskFilter, TaskStatus},
    services::CreateTaskRequest,
};

#[when(r#"the task "{title}" is marked "{status}""#)]
fn mark_task(world: &mut TaskStoreWorld, title: String, status: String) -> Result<(), eyre::Report> {
    let target_status = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let id = world.task_id_by_title(&title)?;
    let store = world.store_mut()?;
    run_async(store.update_status(id, target_status))
        .ok_or_else(|| eyre::eyre!("task {title:?} vanished before update"))?;
    Ok(())
}

#[when(r#"the task "{title}" is deleted"#)]
fn delete_task(world: &mut TaskStoreWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.task_id_by_title(&title)?;
    let store = world.store_mut()?;
    run_async(store.delete(id)).ok_or_else(|| eyre::eyre!("task {title:?} vanished before delete"))?;
    Ok(())
}

#[when(r#"the tasks are filtered by "{filter}""#)]
fn filter_tasks(world: &mut TaskStoreWorld, filter: String) -> Result<(), eyre::Report> {
    let status_filter = TaskFilter::try_from(filter.as_str())
        .map_err(|err| eyre::eyre!("invalid filter in scenario: {err}"))?;
    let titles = world
        .store()?
        .list(status_filter)
        .map(|task| task.title().to_string())
        .collect();
    world.listed_titles = titles;
    Ok(())
}

#[when(r#"a task titled "{title}" is created"#)]
fn create_titled_task(world: &mut TaskStoreWorld, title: String) -> Result<(), eyre::Report> {
    let store = world.store_mut()?;
    let result = run_async(store.create(CreateTaskRequest::new(title)));
    world.last_create_error = result.err();
    Ok(())
}

#[when("the store is reopened")]
fn reopen_store(world: &mut TaskStoreWorld) {
    world.open_store();
}
