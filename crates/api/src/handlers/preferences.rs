//! Handler for recording swipe decisions.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use cinematch_core::participant::validate_participant_number;
use cinematch_db::models::preference::RecordPreference;
use cinematch_db::repositories::{MatchRepo, PreferenceRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::{Ack, SuccessResponse};
use crate::state::AppState;

/// Request body for recording a swipe.
#[derive(Debug, Deserialize)]
pub struct RecordPreferenceRequest {
    pub session_code: Option<String>,
    pub movie_id: Option<i64>,
    pub participant_number: Option<i64>,
    #[serde(default)]
    pub liked: bool,
}

/// POST /api/v1/preferences
///
/// Record one participant's decision on one movie. Re-submitting the
/// same (session, movie, participant) slot overwrites the earlier
/// decision. A liked swipe triggers match detection inline; detection
/// failure is logged without failing the recorded swipe.
pub async fn record(
    State(state): State<AppState>,
    Json(body): Json<RecordPreferenceRequest>,
) -> AppResult<impl IntoResponse> {
    let session_code = body.session_code.filter(|c| !c.is_empty());
    let movie_id = body.movie_id.filter(|id| *id != 0);
    let (session_code, movie_id) = match (session_code, movie_id) {
        (Some(code), Some(id)) => (code, id),
        _ => {
            return Err(AppError::BadRequest(
                "Session ID and Movie ID are required".to_string(),
            ))
        }
    };
    let participant_number = validate_participant_number(body.participant_number.unwrap_or(1))?;

    let preference = PreferenceRepo::upsert(
        &state.pool,
        &RecordPreference {
            session_code,
            movie_id,
            participant_number,
            liked: body.liked,
        },
    )
    .await?;

    if preference.liked {
        match MatchRepo::evaluate(&state.pool, &preference.session_code, preference.movie_id).await
        {
            Ok(true) => {
                tracing::info!(
                    session_code = %preference.session_code,
                    movie_id = preference.movie_id,
                    "Match discovered"
                );
            }
            Ok(false) => {}
            Err(err) => {
                tracing::error!(
                    session_code = %preference.session_code,
                    movie_id = preference.movie_id,
                    error = %err,
                    "Match detection failed"
                );
            }
        }
    }

    Ok(Json(SuccessResponse::new(Ack {})))
}
