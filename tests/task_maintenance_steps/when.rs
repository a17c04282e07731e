//! When steps for maintenance task BDD scenarios.

use super::world::{TaskMaintenanceWorld, run_async};
use rstest_bdd_macros::when;
use service_manual::task::services::RawParameters;

fn list(world: &mut TaskMaintenanceWorld, params: &RawParameters) {
    let result = run_async(world.service.list_tasks(params)).map(|resolved| resolved.tasks);
    world.last_listing = Some(result);
}

fn edit(world: &mut TaskMaintenanceWorld, body: &RawParameters) -> Result<(), eyre::Report> {
    let task = world
        .last_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;
    let result = run_async(world.service.edit_task(task.id(), body));
    world.last_edit = Some(result);
    Ok(())
}

#[when("all tasks are listed")]
fn all_tasks_listed(world: &mut TaskMaintenanceWorld) {
    list(world, &RawParameters::new());
}

#[when(r#"the tasks are filtered by status "{status}" and severity "{severity}""#)]
fn filtered_by_status_and_severity(
    world: &mut TaskMaintenanceWorld,
    status: String,
    severity: String,
) {
    let params = RawParameters::new()
        .with("status", status)
        .with("severity", severity);
    list(world, &params);
}

#[when(r#"the tasks are filtered by "{name}" set to "{value}""#)]
fn filtered_by_parameter(world: &mut TaskMaintenanceWorld, name: String, value: String) {
    list(world, &RawParameters::new().with(name, value));
}

#[when(r#"the task description is changed to "{description}""#)]
fn description_changed(
    world: &mut TaskMaintenanceWorld,
    description: String,
) -> Result<(), eyre::Report> {
    edit(world, &RawParameters::new().with("description", description))
}

#[when("the task is edited with no properties")]
fn edited_without_properties(world: &mut TaskMaintenanceWorld) -> Result<(), eyre::Report> {
    edit(world, &RawParameters::new())
}

#[when("the task is moved to device {device_id:i64}")]
fn moved_to_device(world: &mut TaskMaintenanceWorld, device_id: i64) -> Result<(), eyre::Report> {
    edit(
        world,
        &RawParameters::new().with("deviceId", device_id.to_string()),
    )
}
