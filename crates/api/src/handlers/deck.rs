//! Handler for serving a participant's swipe deck.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use cinematch_core::participant::validate_participant_number;
use cinematch_db::models::deck::DeckMovie;
use serde::{Deserialize, Serialize};

use crate::engine::deck::DeckEngine;
use crate::error::AppResult;
use crate::response::SuccessResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DeckParams {
    pub participant_number: Option<i64>,
}

/// Payload carrying the movies a participant still has to swipe on.
#[derive(Debug, Serialize)]
pub struct DeckPayload {
    pub movies: Vec<DeckMovie>,
    pub category: String,
}

/// GET /api/v1/sessions/{code}/deck
///
/// Deal the session deck on first request, then return the entries the
/// given participant has not swiped yet. Both participants see the same
/// deck in the same order.
pub async fn for_participant(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Query(params): Query<DeckParams>,
) -> AppResult<impl IntoResponse> {
    let participant_number = validate_participant_number(params.participant_number.unwrap_or(1))?;

    let view =
        DeckEngine::deck_for_participant(&state.pool, &state.catalog, &code, participant_number)
            .await?;

    Ok(Json(SuccessResponse::new(DeckPayload {
        movies: view.movies,
        category: view.category,
    })))
}
