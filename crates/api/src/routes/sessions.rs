//! Route definitions for sessions and their scoped resources.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::{deck, matches, sessions};
use crate::state::AppState;

/// Routes mounted at `/sessions`.
///
/// ```text
/// POST   /                 -> create
/// POST   /join             -> join
/// PATCH  /{code}           -> update
/// GET    /{code}/deck      -> deck::for_participant
/// GET    /{code}/matches   -> matches::list
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(sessions::create))
        .route("/join", post(sessions::join))
        .route("/{code}", patch(sessions::update))
        .route("/{code}/deck", get(deck::for_participant))
        .route("/{code}/matches", get(matches::list))
}
