//! HttpBackend against an in-process registration service.

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use wahire_web::registration::{
    HttpBackend, RegistrationBackend, RegistrationDraft, RegistrationError,
};

// ============================================================================
// Test Helpers
// ============================================================================

#[derive(Clone, Default)]
struct Recorded {
    requests: Arc<Mutex<Vec<(String, Value)>>>,
}

async fn initiate(State(recorded): State<Recorded>, Json(body): Json<Value>) -> Json<Value> {
    recorded
        .requests
        .lock()
        .unwrap()
        .push(("initiate".to_string(), body));
    Json(json!({ "success": true }))
}

async fn verify(
    State(recorded): State<Recorded>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let accepted = body["otp"] == "123456";
    recorded
        .requests
        .lock()
        .unwrap()
        .push(("verify".to_string(), body));
    if accepted {
        (StatusCode::OK, Json(json!({ "success": true })))
    } else {
        (
            StatusCode::OK,
            Json(json!({ "success": false, "message": "Incorrect code" })),
        )
    }
}

async fn resend(State(recorded): State<Recorded>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    recorded
        .requests
        .lock()
        .unwrap()
        .push(("resend".to_string(), body));
    (
        StatusCode::TOO_MANY_REQUESTS,
        Json(json!({ "success": false, "message": "Wait before requesting another code" })),
    )
}

/// Start the fake service and return its base URL
async fn spawn_service(recorded: Recorded) -> String {
    let app = Router::new()
        .route("/register/initiate", post(initiate))
        .route("/register/verify", post(verify))
        .route("/register/resend", post(resend))
        .with_state(recorded);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

fn draft() -> RegistrationDraft {
    RegistrationDraft {
        name: "Asha".to_string(),
        phone: "9876543210".to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_initiate_posts_name_and_phone() {
    let recorded = Recorded::default();
    let backend = HttpBackend::new(spawn_service(recorded.clone()).await);

    backend.initiate(&draft()).await.unwrap();

    let requests = recorded.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].0, "initiate");
    assert_eq!(requests[0].1, json!({ "name": "Asha", "phone": "9876543210" }));
}

#[tokio::test]
async fn test_verify_accepts_and_rejects() {
    let recorded = Recorded::default();
    let backend = HttpBackend::new(spawn_service(recorded.clone()).await);

    backend.verify("9876543210", "123456").await.unwrap();

    let err = backend.verify("9876543210", "000000").await.unwrap_err();
    match err {
        RegistrationError::Rejected { status, message } => {
            assert_eq!(status, 200);
            assert_eq!(message, "Incorrect code");
        }
        other => panic!("expected Rejected, got {other:?}"),
    }

    let requests = recorded.requests.lock().unwrap();
    assert_eq!(requests[1].1, json!({ "phone": "9876543210", "otp": "000000" }));
}

#[tokio::test]
async fn test_non_success_status_is_rejected() {
    let backend = HttpBackend::new(spawn_service(Recorded::default()).await);

    let err = backend.resend("9876543210").await.unwrap_err();
    match err {
        RegistrationError::Rejected { status, message } => {
            assert_eq!(status, 429);
            assert_eq!(message, "Wait before requesting another code");
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_service_is_network_error() {
    // Bind then drop to get a port nothing listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let backend = HttpBackend::new(format!("http://{}", addr));
    let err = backend.initiate(&draft()).await.unwrap_err();
    assert!(matches!(err, RegistrationError::Network(_)));
}
