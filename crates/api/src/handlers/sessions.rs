//! Handlers for session creation, joining, and updates.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use cinematch_core::error::CoreError;
use cinematch_db::models::session::{Session, UpdateSession};
use cinematch_db::repositories::SessionRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::response::SuccessResponse;
use crate::state::AppState;

/// Request body for joining an existing session.
#[derive(Debug, Deserialize)]
pub struct JoinSessionRequest {
    pub session_code: Option<String>,
}

/// Payload carrying just the session code.
#[derive(Debug, Serialize)]
pub struct SessionCodePayload {
    pub session_code: String,
}

/// Payload returned to a joining participant.
#[derive(Debug, Serialize)]
pub struct JoinSessionPayload {
    pub session_code: String,
    pub category: String,
}

/// Payload carrying the full session row.
#[derive(Debug, Serialize)]
pub struct SessionPayload {
    pub session: Session,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/sessions
///
/// Create a session under a freshly generated code with the default
/// category.
pub async fn create(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let session = SessionRepo::create(&state.pool)
        .await?
        .ok_or_else(|| AppError::Internal("Failed to create session".to_string()))?;
    tracing::info!(session_code = %session.session_code, "Session created");
    Ok(Json(SuccessResponse::new(SessionCodePayload {
        session_code: session.session_code,
    })))
}

/// POST /api/v1/sessions/join
///
/// Look up a session by code so a second participant can enter it.
pub async fn join(
    State(state): State<AppState>,
    Json(body): Json<JoinSessionRequest>,
) -> AppResult<impl IntoResponse> {
    let code = body
        .session_code
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AppError::BadRequest("Session ID is required".to_string()))?;

    let session = SessionRepo::find_by_code(&state.pool, &code)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Session",
            code,
        }))?;

    Ok(Json(SuccessResponse::new(JoinSessionPayload {
        session_code: session.session_code,
        category: session.category,
    })))
}

/// PATCH /api/v1/sessions/{code}
///
/// Apply a patch to a session. The updatable field set is closed
/// (currently: category); a body carrying none of the known fields is
/// rejected without touching the row.
pub async fn update(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(patch): Json<UpdateSession>,
) -> AppResult<impl IntoResponse> {
    if patch.is_empty() {
        return Err(AppError::BadRequest("No fields to update".to_string()));
    }

    let session = SessionRepo::update(&state.pool, &code, &patch)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Session",
            code,
        }))?;

    tracing::info!(
        session_code = %session.session_code,
        category = %session.category,
        "Session updated"
    );
    Ok(Json(SuccessResponse::new(SessionPayload { session })))
}
