//! Then steps for maintenance task BDD scenarios.

use super::world::{TaskMaintenanceWorld, run_async};
use rstest_bdd_macros::then;
use service_manual::task::{
    domain::{Task, TaskStatus},
    ports::TaskRepository,
    services::{TaskInputError, TaskServiceError},
};

fn listing(world: &TaskMaintenanceWorld) -> Result<&Result<Vec<Task>, TaskServiceError>, eyre::Report> {
    world
        .last_listing
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing listing result"))
}

fn edit_result(world: &TaskMaintenanceWorld) -> Result<&Result<Task, TaskServiceError>, eyre::Report> {
    world
        .last_edit
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing edit result"))
}

fn edited_task(world: &TaskMaintenanceWorld) -> Result<&Task, eyre::Report> {
    edit_result(world)?
        .as_ref()
        .map_err(|err| eyre::eyre!("edit failed: {err}"))
}

#[then("{count:usize} task is listed")]
fn count_listed(world: &TaskMaintenanceWorld, count: usize) -> Result<(), eyre::Report> {
    let tasks = listing(world)?
        .as_ref()
        .map_err(|err| eyre::eyre!("listing failed: {err}"))?;
    eyre::ensure!(
        tasks.len() == count,
        "expected {count} tasks, found {}",
        tasks.len()
    );
    Ok(())
}

#[then(r#"the listed severities are "{severities}""#)]
fn listed_severities(world: &TaskMaintenanceWorld, severities: String) -> Result<(), eyre::Report> {
    let tasks = listing(world)?
        .as_ref()
        .map_err(|err| eyre::eyre!("listing failed: {err}"))?;
    let listed: Vec<&str> = tasks.iter().map(|task| task.severity().as_str()).collect();
    let expected: Vec<&str> = severities.split(',').collect();
    eyre::ensure!(listed == expected, "expected {expected:?}, found {listed:?}");
    Ok(())
}

#[then("the listing fails with an unknown parameter error")]
fn listing_fails_unknown_parameter(world: &TaskMaintenanceWorld) -> Result<(), eyre::Report> {
    let result = listing(world)?;
    eyre::ensure!(
        matches!(
            result,
            Err(TaskServiceError::Input(
                TaskInputError::UnknownParameter { .. }
            ))
        ),
        "expected UnknownParameter error, got {result:?}"
    );
    Ok(())
}

#[then(r#"the task description is "{description}""#)]
fn task_description_is(
    world: &TaskMaintenanceWorld,
    description: String,
) -> Result<(), eyre::Report> {
    let task = edited_task(world)?;
    eyre::ensure!(
        task.description().as_str() == description,
        "expected description {description}, found {}",
        task.description()
    );
    Ok(())
}

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskMaintenanceWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let task = edited_task(world)?;
    eyre::ensure!(
        task.status() == expected,
        "expected status {expected}, found {}",
        task.status()
    );
    Ok(())
}

#[then("the edit fails with an empty body error")]
fn edit_fails_empty_body(world: &TaskMaintenanceWorld) -> Result<(), eyre::Report> {
    let result = edit_result(world)?;
    eyre::ensure!(
        matches!(
            result,
            Err(TaskServiceError::Input(TaskInputError::EmptyBody))
        ),
        "expected EmptyBody error, got {result:?}"
    );
    Ok(())
}

#[then("the edit fails because the device is missing")]
fn edit_fails_missing_device(world: &TaskMaintenanceWorld) -> Result<(), eyre::Report> {
    let result = edit_result(world)?;
    eyre::ensure!(
        matches!(result, Err(TaskServiceError::DeviceNotFound(_))),
        "expected DeviceNotFound error, got {result:?}"
    );
    Ok(())
}

#[then("the stored task is unchanged")]
fn stored_task_unchanged(world: &TaskMaintenanceWorld) -> Result<(), eyre::Report> {
    let task = world
        .last_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;
    let stored = run_async(world.tasks.find_by_id(task.id()))
        .map_err(|err| eyre::eyre!("lookup failed: {err}"))?;
    eyre::ensure!(
        stored.as_ref() == Some(task),
        "expected {task:?}, found {stored:?}"
    );
    Ok(())
}
