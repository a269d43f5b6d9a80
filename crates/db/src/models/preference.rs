//! Preference ledger model and write DTO.

use cinematch_core::types::{DbId, MovieId, Timestamp};
use sqlx::FromRow;

/// A preference row from `preferences`.
#[derive(Debug, Clone, FromRow)]
pub struct Preference {
    pub id: DbId,
    pub session_code: String,
    pub movie_id: MovieId,
    pub participant_number: i16,
    pub liked: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for recording a swipe.
#[derive(Debug, Clone)]
pub struct RecordPreference {
    pub session_code: String,
    pub movie_id: MovieId,
    pub participant_number: i16,
    pub liked: bool,
}
