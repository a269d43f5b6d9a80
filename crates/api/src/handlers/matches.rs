//! Handler for listing a session's matches.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use cinematch_db::models::matches::MatchedMovie;
use cinematch_db::repositories::MatchRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::SuccessResponse;
use crate::state::AppState;

/// Payload carrying a session's matched movies, newest first.
#[derive(Debug, Serialize)]
pub struct MatchesPayload {
    pub matches: Vec<MatchedMovie>,
}

/// GET /api/v1/sessions/{code}/matches
///
/// List every match the session has discovered. Codes with no matches,
/// including codes that never existed, yield an empty list.
pub async fn list(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<impl IntoResponse> {
    let matches = MatchRepo::list_with_movies(&state.pool, &code).await?;
    Ok(Json(SuccessResponse::new(MatchesPayload { matches })))
}
