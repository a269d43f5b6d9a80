pub mod health;
pub mod preferences;
pub mod sessions;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /sessions                       create session (POST)
/// /sessions/join                  join by code (POST)
/// /sessions/{code}                update category (PATCH)
/// /sessions/{code}/deck           participant deck (GET, ?participant_number)
/// /sessions/{code}/matches        list matches (GET)
///
/// /preferences                    record swipe (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Session lifecycle plus session-scoped deck and match reads.
        .nest("/sessions", sessions::router())
        // Swipe recording with inline match detection.
        .nest("/preferences", preferences::router())
}
