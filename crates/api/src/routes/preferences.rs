//! Route definitions for swipe recording.

use axum::routing::post;
use axum::Router;

use crate::handlers::preferences;
use crate::state::AppState;

/// Routes mounted at `/preferences`.
///
/// ```text
/// POST   /   -> record
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(preferences::record))
}
