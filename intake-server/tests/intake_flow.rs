//! End-to-end intake flow tests
//!
//! Drive the full router in-process against a scratch work directory:
//! landing page, validation failures (nothing persisted), and the
//! validate → diagnose → persist → render pipeline.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use intake_server::db::repository::submission;
use intake_server::{Config, ServerState, build_app, calculate_response_status};

/// Fresh state + router over a scratch work dir.
///
/// The TempDir must stay alive for the duration of the test, otherwise the
/// database directory disappears under the pool.
async fn test_app() -> (tempfile::TempDir, ServerState, Router) {
    let dir = tempfile::tempdir().expect("create tempdir");
    let config = Config::with_overrides(dir.path().to_string_lossy().to_string(), 0);
    let state = ServerState::initialize(&config)
        .await
        .expect("initialize state");
    let app = build_app().with_state(state.clone());
    (dir, state, app)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8_lossy(&bytes).to_string())
}

async fn post_form(app: &Router, body: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/process_input")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8_lossy(&bytes).to_string())
}

#[tokio::test]
async fn test_home_page_renders_form() {
    let (_dir, _state, app) = test_app().await;

    let (status, html) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<form action=\"/process_input\" method=\"post\">"));
    assert!(html.contains("name=\"device_serial_number\""));
    assert!(html.contains("name=\"light3\""));
}

#[tokio::test]
async fn test_health_reports_ok() {
    let (_dir, _state, app) = test_app().await;

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);

    let health: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(health["status"], "ok");
    assert_eq!(health["database"]["status"], "ok");
}

#[tokio::test]
async fn test_invalid_user_id_rejected_and_not_persisted() {
    let (_dir, state, app) = test_app().await;

    let (status, html) = post_form(
        &app,
        "user_id=abc&problem_description=Test&device_serial_number=24-X-125447-DC&light1=on&light2=on&light3=off",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<li>Invalid user ID.</li>"));
    assert_eq!(submission::count(&state.pool).await.unwrap(), 0);
}

#[tokio::test]
async fn test_empty_serial_reports_required_only() {
    let (_dir, _state, app) = test_app().await;

    let (_, html) = post_form(
        &app,
        "user_id=123&problem_description=Test&device_serial_number=&light1=on&light2=on&light3=off",
    )
    .await;

    assert!(html.contains("<li>Device serial number is required.</li>"));
    assert!(!html.contains("Device serial number cannot exceed 64 characters."));
}

#[tokio::test]
async fn test_missing_light_field_rejected() {
    let (_dir, state, app) = test_app().await;

    // light2 omitted entirely
    let (status, html) = post_form(
        &app,
        "user_id=123&problem_description=Test&device_serial_number=24-X-125447-DC&light1=on&light3=off",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<li>Please select a status for all indicator lights.</li>"));
    assert_eq!(submission::count(&state.pool).await.unwrap(), 0);
}

#[tokio::test]
async fn test_long_description_rejected() {
    let (_dir, _state, app) = test_app().await;

    let long = "a".repeat(301);
    let (_, html) = post_form(
        &app,
        &format!(
            "user_id=123&problem_description={long}&device_serial_number=24-X-1&light1=on&light2=on&light3=on"
        ),
    )
    .await;

    assert!(html.contains("<li>Problem description cannot exceed 300 characters.</li>"));
}

#[tokio::test]
async fn test_multiple_errors_rendered_together() {
    let (_dir, _state, app) = test_app().await;

    let long_desc = "a".repeat(301);
    let long_serial = "X".repeat(65);
    let (_, html) = post_form(
        &app,
        &format!(
            "user_id=abc&problem_description={long_desc}&device_serial_number={long_serial}&light1=on&light3=off"
        ),
    )
    .await;

    assert!(html.contains("<li>Invalid user ID.</li>"));
    assert!(html.contains("<li>Problem description cannot exceed 300 characters.</li>"));
    assert!(html.contains("<li>Device serial number cannot exceed 64 characters.</li>"));
    assert!(html.contains("<li>Please select a status for all indicator lights.</li>"));
}

#[tokio::test]
async fn test_valid_submission_persists_and_renders_status() {
    let (_dir, state, app) = test_app().await;

    let (status, html) = post_form(
        &app,
        "user_id=123&problem_description=Test+problem&device_serial_number=24-X-125447-DC&light1=off&light2=off&light3=off",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Please upgrade your device"));

    let record = submission::find_first(&state.pool)
        .await
        .unwrap()
        .expect("record persisted");
    assert_eq!(record.user_id, "123");
    assert_eq!(record.problem_description, "Test problem");
    assert_eq!(record.device_serial_number, "24-X-125447-DC");
    assert_eq!(record.light1, "off");
    assert_eq!(record.light2, "off");
    assert_eq!(record.light3, "off");
    assert_eq!(record.response_status, "Please upgrade your device");
    assert!(record.created_at > 0);
    assert_eq!(submission::count(&state.pool).await.unwrap(), 1);
}

#[tokio::test]
async fn test_stored_status_matches_rule_engine() {
    let (_dir, state, app) = test_app().await;

    let (_, html) = post_form(
        &app,
        "user_id=42&problem_description=Humming&device_serial_number=36-X-789012&light1=on&light2=on&light3=on",
    )
    .await;

    let expected = calculate_response_status("36-X-789012", "on", "on", "on");
    assert!(html.contains(expected.as_str()));

    let record = submission::find_first(&state.pool)
        .await
        .unwrap()
        .expect("record persisted");
    assert_eq!(record.response_status, expected.as_str());
}

#[tokio::test]
async fn test_missing_description_treated_as_empty() {
    let (_dir, state, app) = test_app().await;

    // problem_description omitted entirely
    let (status, html) = post_form(
        &app,
        "user_id=7&device_serial_number=51-B-1&light1=on&light2=on&light3=off",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("ALL is ok"));

    let record = submission::find_first(&state.pool)
        .await
        .unwrap()
        .expect("record persisted");
    assert_eq!(record.problem_description, "");
}
