use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cinematch_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the uniform envelope: every
/// application-level failure is HTTP 200 with
/// `{"success": false, "error": …}`, reserving non-200 statuses for
/// transport-level failures (timeouts, panics, unknown routes).
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `cinematch_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a caller-facing message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal failure with a caller-safe message.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, .. } => format!("{entity} not found"),
                CoreError::Validation(msg) => msg.clone(),
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => msg.clone(),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                msg.clone()
            }
        };

        let body = json!({
            "success": false,
            "error": message,
        });

        (StatusCode::OK, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into the caller-facing envelope message.
///
/// A foreign-key violation against a `session_code` column means the
/// caller named a session that does not exist, which reads as NotFound
/// rather than a server fault. Everything else logs the detail and
/// answers a sanitized "Storage error".
fn classify_sqlx_error(err: &sqlx::Error) -> String {
    if let sqlx::Error::Database(db_err) = err {
        // PostgreSQL foreign-key violation: error code 23503.
        if db_err.code().as_deref() == Some("23503")
            && db_err.constraint().is_some_and(|c| c.contains("session_code"))
        {
            return "Session not found".to_string();
        }
    }
    tracing::error!(error = %err, "Database error");
    "Storage error".to_string()
}
