//! Then steps for task store BDD scenarios.

use super::world::TaskStoreWorld;
use rstest_bdd_macros::then;
use taskflow::task::{
    domain::{TaskDomainError, TaskStats},
    services::TaskStoreError,
};

#[then(
    "the stats are {total:usize} total, {completed:usize} completed, {in_progress:usize} in progress and {pending:usize} pending"
)]
fn stats_are(
    world: &TaskStoreWorld,
    total: usize,
    completed: usize,
    in_progress: usize,
    pending: usize,
) -> Result<(), eyre::Report> {
    let expected = TaskStats {
        total,
        completed,
        in_progress,
        pending,
    };
    let actual = world.store()?.stats();
    eyre::ensure!(actual == expected, "expected {expected:?}, found {actual:?}");
    Ok(())
}

#[then(r#"the listing contains only "{title}""#)]
fn listing_contains_only(world: &TaskStoreWorld, title: String) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.listed_titles == [title.as_str()],
        "expected only {title:?}, found {:?}",
        world.listed_titles
    );
    Ok(())
}

#[then("the creation fails with an empty title error")]
fn creation_fails_with_empty_title(world: &TaskStoreWorld) -> Result<(), eyre::Report> {
    let error = world
        .last_create_error
        .as_ref()
        .ok_or_else(|| eyre::eyre!("expected task creation to fail"))?;

    if !matches!(
        error,
        TaskStoreError::Domain(TaskDomainError::EmptyTaskTitle)
    ) {
        return Err(eyre::eyre!("expected EmptyTaskTitle error, got {error:?}"));
    }

    Ok(())
}

#[then("the store holds {count:usize} tasks")]
fn store_holds(world: &TaskStoreWorld, count: usize) -> Result<(), eyre::Report> {
    let len = world.store()?.len();
    eyre::ensure!(len == count, "expected {count} tasks, found {len}");
    Ok(())
}

#[then("no load warning was reported")]
fn no_load_warning(world: &TaskStoreWorld) -> Result<(), eyre::Report> {
    let warning = world.store()?.load_warning();
    eyre::ensure!(warning.is_none(), "unexpected load warning: {warning:?}");
    Ok(())
}
