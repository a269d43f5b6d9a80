//! Match projection model.
//!
//! Match rows themselves are write-only bookkeeping (insert-if-absent,
//! never updated); every read joins the movie cache, so the joined shape
//! is the only one modeled.

use cinematch_core::types::{MovieId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A match joined with its movie fields, served newest first.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MatchedMovie {
    pub movie_id: MovieId,
    pub title: String,
    pub poster_path: Option<String>,
    pub release_year: Option<i32>,
    pub vote_average: Option<f64>,
    pub overview: Option<String>,
    pub discovered_at: Timestamp,
}
