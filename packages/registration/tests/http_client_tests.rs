//! `HttpRegistrationClient` against an in-process axum service.

mod common;

use crate::common::filled_workflow;
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;
use flowt_registration::{
    HttpRegistrationClient, RegistrationClient, RegistrationConfig, RegistrationDraft,
    RegistrationError,
};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use std::time::Duration;

const PATH: &str = "/v1/pre-register";

#[derive(Debug, Clone)]
struct Captured {
    content_type: Option<String>,
    body: Value,
}

type Inbox = Arc<Mutex<Vec<Captured>>>;

/// Start a registration service that answers every POST with `status`.
async fn spawn_service(status: StatusCode, delay: Duration) -> (String, Inbox) {
    let inbox: Inbox = Arc::new(Mutex::new(Vec::new()));
    let state = Arc::clone(&inbox);

    let app = Router::new().route(
        PATH,
        post(move |headers: HeaderMap, body: String| {
            let state = Arc::clone(&state);
            async move {
                state.lock().unwrap().push(Captured {
                    content_type: headers
                        .get(header::CONTENT_TYPE)
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_owned),
                    body: serde_json::from_str(&body).unwrap_or(Value::Null),
                });
                tokio::time::sleep(delay).await;
                status
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}{PATH}"), inbox)
}

fn client_for(endpoint: &str) -> HttpRegistrationClient {
    HttpRegistrationClient::new(RegistrationConfig::default().with_endpoint(endpoint)).unwrap()
}

// =============================================================================
// Request shape
// =============================================================================

#[tokio::test]
async fn posts_json_with_five_keys() {
    let (endpoint, inbox) = spawn_service(StatusCode::OK, Duration::ZERO).await;
    let workflow = filled_workflow(client_for(&endpoint));

    workflow.submit().await.expect("service accepts");

    let inbox = inbox.lock().unwrap();
    assert_eq!(inbox.len(), 1);
    assert_eq!(inbox[0].content_type.as_deref(), Some("application/json"));
    assert_eq!(
        inbox[0].body,
        serde_json::json!({
            "name": "Jane Doe",
            "email": "jane@x.com",
            "phone": "9876543210",
            "occupation": "Business Owner",
            "organization": ""
        })
    );
    assert_eq!(workflow.draft(), RegistrationDraft::default());
}

// =============================================================================
// Outcomes
// =============================================================================

#[tokio::test]
async fn created_counts_as_success() {
    let (endpoint, _inbox) = spawn_service(StatusCode::CREATED, Duration::ZERO).await;
    let workflow = filled_workflow(client_for(&endpoint));

    assert_eq!(workflow.submit().await, Ok(()));
}

#[tokio::test]
async fn server_error_maps_to_rejection() {
    let (endpoint, inbox) = spawn_service(StatusCode::INTERNAL_SERVER_ERROR, Duration::ZERO).await;
    let workflow = filled_workflow(client_for(&endpoint));
    let before = workflow.draft();

    let err = workflow.submit().await.unwrap_err();

    assert_eq!(err, RegistrationError::ServerRejected { status: 500 });
    assert_eq!(inbox.lock().unwrap().len(), 1);
    assert_eq!(workflow.draft(), before);
    assert!(!workflow.is_submitting());
}

#[tokio::test]
async fn client_error_maps_to_rejection() {
    let (endpoint, _inbox) = spawn_service(StatusCode::CONFLICT, Duration::ZERO).await;
    let client = client_for(&endpoint);
    let registration = filled_workflow(client.clone()).prepare().unwrap().registration().clone();

    let err = client.register(&registration).await.unwrap_err();

    assert_eq!(err, RegistrationError::ServerRejected { status: 409 });
}

#[tokio::test]
async fn closed_port_is_a_transport_failure() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let workflow = filled_workflow(client_for(&format!("http://{addr}{PATH}")));
    let before = workflow.draft();

    let err = workflow.submit().await.unwrap_err();

    assert!(matches!(err, RegistrationError::Transport { .. }), "got {err:?}");
    assert_eq!(workflow.draft(), before);
    assert!(!workflow.is_submitting());
}

#[tokio::test]
async fn timeout_is_a_transport_failure() {
    let (endpoint, _inbox) = spawn_service(StatusCode::OK, Duration::from_secs(5)).await;
    let config = RegistrationConfig::default()
        .with_endpoint(endpoint)
        .with_timeout(Duration::from_millis(200));
    let workflow = filled_workflow(HttpRegistrationClient::new(config).unwrap());

    let err = workflow.submit().await.unwrap_err();

    assert!(matches!(err, RegistrationError::Transport { .. }), "got {err:?}");
    assert!(!workflow.is_submitting());
}
