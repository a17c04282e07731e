//! Task route behaviour over HTTP.

use super::helpers::{TestApp, at, listed_ids};
use axum::http::{Method, StatusCode};
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use service_manual::task::domain::{TaskId, TaskSeverity, TaskStatus};
use service_manual::task::ports::TaskRepository;

#[fixture]
fn app() -> TestApp {
    TestApp::with_base_url("")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_orders_by_severity_then_registration(app: TestApp) {
    let device = app.device("Press 1").await;
    let critical = app
        .task(&device, TaskSeverity::Critical, TaskStatus::Open, at(1, 8))
        .await;
    let late_minor = app
        .task(&device, TaskSeverity::Unimportant, TaskStatus::Open, at(3, 8))
        .await;
    let early_minor = app
        .task(&device, TaskSeverity::Unimportant, TaskStatus::Closed, at(2, 8))
        .await;

    let (status, body) = app.call(Method::GET, "/api/tasks").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        listed_ids(&body),
        vec![
            early_minor.id().value(),
            late_minor.id().value(),
            critical.id().value()
        ]
    );
    assert_eq!(body.pointer("/_links/self/href"), Some(&json!("/api/tasks")));
    assert!(body.pointer("/_links/device").is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_filters_by_device_and_links_the_device(app: TestApp) {
    let press = app.device("Press 1").await;
    let lathe = app.device("Lathe 2").await;
    let kept = app
        .task(&lathe, TaskSeverity::Important, TaskStatus::Open, at(1, 9))
        .await;
    app.task(&press, TaskSeverity::Important, TaskStatus::Open, at(1, 9))
        .await;

    let uri = format!("/api/tasks?deviceId={}", lathe.id());
    let (status, body) = app.call(Method::GET, &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed_ids(&body), vec![kept.id().value()]);
    assert_eq!(body.pointer("/_links/device/href"), Some(&json!(uri)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_combines_status_and_severity(app: TestApp) {
    let device = app.device("Press 1").await;
    let wanted = app
        .task(&device, TaskSeverity::Critical, TaskStatus::Closed, at(1, 9))
        .await;
    app.task(&device, TaskSeverity::Critical, TaskStatus::Open, at(1, 9))
        .await;
    app.task(&device, TaskSeverity::Important, TaskStatus::Closed, at(1, 9))
        .await;

    let (status, body) = app
        .call(Method::GET, "/api/tasks?status=CLOSED&severity=CRITICAL")
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed_ids(&body), vec![wanted.id().value()]);
}

#[rstest]
#[case("/api/tasks?colour=red", "UNKNOWN_PARAMETER")]
#[case("/api/tasks?status=open", "UNCONVERTIBLE_VALUE")]
#[case("/api/tasks?deviceId=abc", "UNCONVERTIBLE_VALUE")]
#[case("/api/tasks?severity=", "UNCONVERTIBLE_VALUE")]
#[tokio::test(flavor = "multi_thread")]
async fn listing_rejects_bad_parameters(app: TestApp, #[case] uri: &str, #[case] code: &str) {
    let (status, body) = app.call(Method::GET, uri).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.get("code"), Some(&json!(code)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_parameter_message_lists_the_accepted_names(app: TestApp) {
    let (_, body) = app.call(Method::GET, "/api/tasks?colour=red").await;

    assert_eq!(
        body.get("message"),
        Some(&json!(
            "unknown parameter 'colour', available: deviceId, status, severity"
        ))
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_returns_the_stored_task_with_links(app: TestApp) {
    let device = app.device("Press 1").await;

    let (status, body) = app
        .call_json(
            Method::POST,
            "/api/tasks",
            &json!({
                "deviceId": device.id().value(),
                "status": "OPEN",
                "severity": "CRITICAL",
                "description": "Seal <leaking> valve",
                "registered": "2023-03-04T05:06:07"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    let id = body.get("id").and_then(Value::as_i64).expect("task id");
    assert_eq!(body.get("deviceId"), Some(&json!(device.id().value())));
    assert_eq!(body.get("severity"), Some(&json!("CRITICAL")));
    assert_eq!(body.get("status"), Some(&json!("OPEN")));
    assert_eq!(
        body.get("description"),
        Some(&json!("Seal &lt;leaking&gt; valve"))
    );
    assert_eq!(body.get("registered"), Some(&json!("2023-03-04T05:06:07")));
    assert_eq!(
        body.pointer("/_links/self/href"),
        Some(&json!(format!("/api/tasks/{id}")))
    );
    assert_eq!(
        body.pointer("/_links/device/href"),
        Some(&json!(format!("/api/tasks?deviceId={}", device.id())))
    );
    let stored = app
        .tasks
        .find_by_id(TaskId::new(id))
        .await
        .expect("lookup");
    assert!(stored.is_some());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_a_missing_device(app: TestApp) {
    let (status, body) = app
        .call_json(
            Method::POST,
            "/api/tasks",
            &json!({
                "deviceId": 77,
                "status": "OPEN",
                "severity": "IMPORTANT",
                "description": "Inspect"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body.get("message"),
        Some(&json!("could not find factory device 77"))
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_requires_every_mandatory_property(app: TestApp) {
    let device = app.device("Press 1").await;

    let (status, body) = app
        .call_json(
            Method::POST,
            "/api/tasks",
            &json!({ "deviceId": device.id().value(), "status": "OPEN" }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.get("code"), Some(&json!("MISSING_PROPERTY")));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_returns_one_task_or_not_found(app: TestApp) {
    let device = app.device("Press 1").await;
    let task = app
        .task(&device, TaskSeverity::Important, TaskStatus::Open, at(1, 9))
        .await;

    let (found, body) = app
        .call(Method::GET, &format!("/api/tasks/{}", task.id()))
        .await;
    let (missing, error) = app.call(Method::GET, "/api/tasks/999").await;

    assert_eq!(found, StatusCode::OK);
    assert_eq!(body.get("id"), Some(&json!(task.id().value())));
    assert_eq!(missing, StatusCode::NOT_FOUND);
    assert_eq!(
        error.get("message"),
        Some(&json!("could not find maintenance task 999"))
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn patch_changes_only_the_supplied_fields(app: TestApp) {
    let device = app.device("Press 1").await;
    let task = app
        .task(&device, TaskSeverity::Unimportant, TaskStatus::Open, at(1, 9))
        .await;

    let (status, body) = app
        .call_json(
            Method::PATCH,
            &format!("/api/tasks/{}", task.id()),
            &json!({ "status": "CLOSED", "description": "Done" }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.get("status"), Some(&json!("CLOSED")));
    assert_eq!(body.get("description"), Some(&json!("Done")));
    assert_eq!(body.get("severity"), Some(&json!("UNIMPORTANT")));
    assert_eq!(body.get("registered"), Some(&json!("2023-03-01T09:00:00")));
}

#[rstest]
#[case(json!({}), StatusCode::BAD_REQUEST, "EMPTY_BODY")]
#[case(json!({ "status": null }), StatusCode::BAD_REQUEST, "UNCONVERTIBLE_VALUE")]
#[case(json!({ "description": "" }), StatusCode::BAD_REQUEST, "EMPTY_DESCRIPTION")]
#[case(json!({ "owner": "me" }), StatusCode::BAD_REQUEST, "UNKNOWN_PARAMETER")]
#[case(json!({ "deviceId": 404 }), StatusCode::NOT_FOUND, "NOT_FOUND")]
#[tokio::test(flavor = "multi_thread")]
async fn patch_rejects_invalid_bodies_without_saving(
    app: TestApp,
    #[case] body: Value,
    #[case] expected_status: StatusCode,
    #[case] code: &str,
) {
    let device = app.device("Press 1").await;
    let task = app
        .task(&device, TaskSeverity::Important, TaskStatus::Open, at(1, 9))
        .await;

    let (status, error) = app
        .call_json(Method::PATCH, &format!("/api/tasks/{}", task.id()), &body)
        .await;

    assert_eq!(status, expected_status);
    assert_eq!(error.get("code"), Some(&json!(code)));
    let stored = app.tasks.find_by_id(task.id()).await.expect("lookup");
    assert_eq!(stored, Some(task));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn patch_of_a_missing_task_is_not_found(app: TestApp) {
    let (status, _) = app
        .call_json(Method::PATCH, "/api/tasks/41", &json!({ "status": "OPEN" }))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn malformed_json_is_rejected(app: TestApp) {
    let device = app.device("Press 1").await;
    let task = app
        .task(&device, TaskSeverity::Important, TaskStatus::Open, at(1, 9))
        .await;
    let request = axum::http::Request::builder()
        .method(Method::PATCH)
        .uri(format!("/api/tasks/{}", task.id()))
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from("{not json"))
        .expect("valid request");

    let (status, body) = app.send(request).await;

    assert!(status.is_client_error());
    assert_eq!(body.get("code"), Some(&json!("MALFORMED_BODY")));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_by_id_removes_once(app: TestApp) {
    let device = app.device("Press 1").await;
    let task = app
        .task(&device, TaskSeverity::Important, TaskStatus::Open, at(1, 9))
        .await;
    let uri = format!("/api/tasks/{}", task.id());

    let (first, body) = app.call(Method::DELETE, &uri).await;
    let (second, _) = app.call(Method::DELETE, &uri).await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(body, json!({ "deleted": 1 }));
    assert_eq!(second, StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_matching_removes_only_filtered_tasks(app: TestApp) {
    let device = app.device("Press 1").await;
    app.task(&device, TaskSeverity::Important, TaskStatus::Closed, at(1, 9))
        .await;
    app.task(&device, TaskSeverity::Critical, TaskStatus::Closed, at(1, 9))
        .await;
    let open = app
        .task(&device, TaskSeverity::Critical, TaskStatus::Open, at(1, 9))
        .await;

    let (status, body) = app.call(Method::DELETE, "/api/tasks?status=CLOSED").await;
    let (_, remaining) = app.call(Method::GET, "/api/tasks").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "deleted": 2 }));
    assert_eq!(listed_ids(&remaining), vec![open.id().value()]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn links_use_the_configured_base_url() {
    let app = TestApp::with_base_url("https://manual.example");
    let device = app.device("Press 1").await;
    let task = app
        .task(&device, TaskSeverity::Important, TaskStatus::Open, at(1, 9))
        .await;

    let (_, body) = app
        .call(Method::GET, &format!("/api/tasks/{}", task.id()))
        .await;

    assert_eq!(
        body.pointer("/_links/tasks/href"),
        Some(&json!("https://manual.example/api/tasks"))
    );
}
