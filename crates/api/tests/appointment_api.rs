//! Integration tests for the appointment intake endpoint's validation
//! behaviour. These run without a database handle, which also proves that
//! validation rejects bad payloads before any persistence is attempted.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json};
use serde_json::json;

// ---------------------------------------------------------------------------
// Test: missing required phone field is rejected by the JSON extractor
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_phone_is_rejected() {
    let app = common::build_test_app(None);
    let response = post_json(
        app,
        "/api/appointment",
        json!({
            "full_name": "Jane Doe",
            "email": "jane@example.com",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// ---------------------------------------------------------------------------
// Test: malformed email yields a validation error, not a database error
// ---------------------------------------------------------------------------

#[tokio::test]
async fn malformed_email_is_rejected_before_persistence() {
    let app = common::build_test_app(None);
    let response = post_json(
        app,
        "/api/appointment",
        json!({
            "full_name": "Jane Doe",
            "phone": "555-0100",
            "email": "not-an-email",
        }),
    )
    .await;

    // With no database handle, reaching persistence would produce a
    // DATABASE_ERROR; a VALIDATION_ERROR proves validation ran first.
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Test: a valid payload without a database surfaces the persistence error
// ---------------------------------------------------------------------------

#[tokio::test]
async fn valid_payload_without_database_returns_server_error() {
    let app = common::build_test_app(None);
    let response = post_json(
        app,
        "/api/appointment",
        json!({
            "full_name": "Jane Doe",
            "phone": "555-0100",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["code"], "DATABASE_ERROR");
    assert!(body["error"].as_str().is_some_and(|msg| !msg.is_empty()));
}
