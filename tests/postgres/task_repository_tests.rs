//! Task repository behaviour against `PostgreSQL`.

use super::helpers::{Stores, at, device, stores};
use rstest::rstest;
use service_manual::device::domain::{Device, DeviceId};
use service_manual::task::{
    domain::{NewTask, Task, TaskDescription, TaskId, TaskPatch, TaskSeverity, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
};

async fn store(
    stores: &Stores,
    device: &Device,
    severity: TaskSeverity,
    status: TaskStatus,
    day: u32,
) -> Task {
    let description = TaskDescription::new("Calibrate <axis>").expect("valid description");
    let task = NewTask::new(device.id(), severity, status, description, at(day, 6));
    stores.tasks.insert(&task).await.expect("task insert")
}

fn ids(tasks: &[Task]) -> Vec<TaskId> {
    tasks.iter().map(Task::id).collect()
}

#[tokio::test(flavor = "multi_thread")]
async fn device_listing_is_ordered_by_severity_then_time() {
    let Some(stores) = stores() else {
        return;
    };
    let arm = device(&stores, "Arm ordering").await;
    let critical = store(&stores, &arm, TaskSeverity::Critical, TaskStatus::Open, 1).await;
    let late = store(&stores, &arm, TaskSeverity::Important, TaskStatus::Open, 9).await;
    let early = store(&stores, &arm, TaskSeverity::Important, TaskStatus::Closed, 2).await;

    let listed = stores
        .tasks
        .find_by_device(arm.id())
        .await
        .expect("listing should succeed");

    assert_eq!(ids(&listed), vec![early.id(), late.id(), critical.id()]);
    assert_eq!(
        listed.first().map(|task| task.description().as_str()),
        Some("Calibrate &lt;axis&gt;")
    );
}

#[rstest]
#[case(Some(TaskStatus::Open), None, 2)]
#[case(None, Some(TaskSeverity::Critical), 2)]
#[case(Some(TaskStatus::Open), Some(TaskSeverity::Critical), 1)]
#[tokio::test(flavor = "multi_thread")]
async fn combined_device_filters_narrow_the_listing(
    #[case] status: Option<TaskStatus>,
    #[case] severity: Option<TaskSeverity>,
    #[case] expected: usize,
) {
    let Some(stores) = stores() else {
        return;
    };
    let arm = device(&stores, "Arm filters").await;
    store(&stores, &arm, TaskSeverity::Critical, TaskStatus::Open, 1).await;
    store(&stores, &arm, TaskSeverity::Critical, TaskStatus::Closed, 2).await;
    store(&stores, &arm, TaskSeverity::Unimportant, TaskStatus::Open, 3).await;

    let listed = match (status, severity) {
        (Some(wanted_status), Some(wanted_severity)) => stores
            .tasks
            .find_by_device_and_status_and_severity(arm.id(), wanted_status, wanted_severity)
            .await,
        (Some(wanted_status), None) => {
            stores
                .tasks
                .find_by_device_and_status(arm.id(), wanted_status)
                .await
        }
        (None, Some(wanted_severity)) => {
            stores
                .tasks
                .find_by_device_and_severity(arm.id(), wanted_severity)
                .await
        }
        (None, None) => stores.tasks.find_by_device(arm.id()).await,
    }
    .expect("listing should succeed");

    assert_eq!(listed.len(), expected);
    assert!(listed.iter().all(|task| task.device_id() == arm.id()));
}

#[tokio::test(flavor = "multi_thread")]
async fn save_overwrites_every_field() {
    let Some(stores) = stores() else {
        return;
    };
    let first = device(&stores, "Arm save A").await;
    let second = device(&stores, "Arm save B").await;
    let task = store(&stores, &first, TaskSeverity::Unimportant, TaskStatus::Open, 4).await;
    let edited = task.apply(
        TaskPatch::new()
            .with_device_id(second.id())
            .with_status(TaskStatus::Closed)
            .with_severity(TaskSeverity::Critical),
    );

    let saved = stores.tasks.save(&edited).await.expect("save should succeed");
    let found = stores
        .tasks
        .find_by_id(task.id())
        .await
        .expect("lookup should succeed");

    assert_eq!(saved, edited);
    assert_eq!(found, Some(edited));
}

#[tokio::test(flavor = "multi_thread")]
async fn insert_for_an_unknown_device_is_rejected() {
    let Some(stores) = stores() else {
        return;
    };
    let description = TaskDescription::new("Orphan").expect("valid description");
    let task = NewTask::new(
        DeviceId::new(i64::MAX),
        TaskSeverity::Important,
        TaskStatus::Open,
        description,
        at(5, 5),
    );

    let result = stores.tasks.insert(&task).await;

    assert!(matches!(result, Err(TaskRepositoryError::UnknownDevice(_))));
}

#[tokio::test(flavor = "multi_thread")]
async fn deletes_report_what_was_removed() {
    let Some(stores) = stores() else {
        return;
    };
    let arm = device(&stores, "Arm delete").await;
    let kept = store(&stores, &arm, TaskSeverity::Important, TaskStatus::Open, 1).await;
    let single = store(&stores, &arm, TaskSeverity::Important, TaskStatus::Open, 2).await;
    let batch_a = store(&stores, &arm, TaskSeverity::Critical, TaskStatus::Open, 3).await;
    let batch_b = store(&stores, &arm, TaskSeverity::Critical, TaskStatus::Open, 4).await;

    let deleted = stores
        .tasks
        .delete_by_id(single.id())
        .await
        .expect("delete should succeed");
    let deleted_again = stores
        .tasks
        .delete_by_id(single.id())
        .await
        .expect("delete should succeed");
    let removed = stores
        .tasks
        .delete_many(&[batch_a.id(), batch_b.id()])
        .await
        .expect("bulk delete should succeed");
    let remaining = stores
        .tasks
        .find_by_device(arm.id())
        .await
        .expect("listing should succeed");

    assert!(deleted);
    assert!(!deleted_again);
    assert_eq!(removed, 2);
    assert_eq!(ids(&remaining), vec![kept.id()]);
}
