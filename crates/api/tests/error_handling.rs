//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests verify that each `AppError` variant produces the uniform
//! `{"success": false, "error": …}` envelope under HTTP 200. They do NOT
//! need an HTTP server -- they call `IntoResponse` directly on
//! `AppError` values.

use axum::response::IntoResponse;
use cinematch_api::error::AppError;
use cinematch_core::error::CoreError;
use http_body_util::BodyExt;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (axum::http::StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: CoreError::NotFound answers 200 with a generic message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_answers_envelope() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Session",
        code: "AB12CD34".to_string(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::OK);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Session not found");

    // The code the caller sent is logged, not echoed.
    assert!(
        !json.to_string().contains("AB12CD34"),
        "envelope must not echo the looked-up code"
    );
}

// ---------------------------------------------------------------------------
// Test: CoreError::Validation carries its message through
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_error_answers_envelope() {
    let err = AppError::Core(CoreError::Validation(
        "Participant number must be 1 or 2".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::OK);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Participant number must be 1 or 2");
}

// ---------------------------------------------------------------------------
// Test: AppError::BadRequest carries its message through
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bad_request_error_answers_envelope() {
    let err = AppError::BadRequest("Session ID is required".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::OK);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Session ID is required");
}

// ---------------------------------------------------------------------------
// Test: AppError::Internal carries its caller-safe message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn internal_error_answers_envelope() {
    let err = AppError::Internal("Failed to create session".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::OK);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Failed to create session");
}

// ---------------------------------------------------------------------------
// Test: AppError::Database sanitizes the detail
// ---------------------------------------------------------------------------

#[tokio::test]
async fn database_error_answers_sanitized_envelope() {
    let err = AppError::Database(sqlx::Error::RowNotFound);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::OK);
    assert_eq!(json["success"], false);

    // The response body must NOT leak driver-level details.
    let body_text = json.to_string();
    assert!(
        !body_text.contains("row"),
        "database error response must not leak sqlx details"
    );
    assert_eq!(json["error"], "Storage error");
}
