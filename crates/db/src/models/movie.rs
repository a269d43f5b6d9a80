//! Movie cache model and write DTO.

use cinematch_core::types::{MovieId, Timestamp};
use sqlx::FromRow;

/// A movie row from the shared `movies` cache.
#[derive(Debug, Clone, FromRow)]
pub struct Movie {
    pub movie_id: MovieId,
    pub title: String,
    pub poster_path: Option<String>,
    pub release_year: Option<i32>,
    pub vote_average: Option<f64>,
    pub overview: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for caching a movie fetched from the upstream catalog.
#[derive(Debug, Clone)]
pub struct NewMovie {
    pub movie_id: MovieId,
    pub title: String,
    pub poster_path: Option<String>,
    pub release_year: Option<i32>,
    pub vote_average: Option<f64>,
    pub overview: Option<String>,
}
