//! Session deck models.

use cinematch_core::types::{DbId, MovieId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A deck slot row from `session_decks`.
#[derive(Debug, Clone, FromRow)]
pub struct DeckEntry {
    pub id: DbId,
    pub session_code: String,
    pub movie_id: MovieId,
    pub position: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Movie fields served to a swiping participant, in deck order.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DeckMovie {
    pub movie_id: MovieId,
    pub title: String,
    pub poster_path: Option<String>,
    pub release_year: Option<i32>,
    pub vote_average: Option<f64>,
    pub overview: Option<String>,
}
