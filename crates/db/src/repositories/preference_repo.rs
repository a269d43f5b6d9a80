//! Repository for the `preferences` ledger.

use cinematch_core::types::MovieId;
use sqlx::PgPool;

use crate::models::preference::{Preference, RecordPreference};

const COLUMNS: &str =
    "id, session_code, movie_id, participant_number, liked, created_at, updated_at";

/// Provides upsert access to participant swipe decisions.
pub struct PreferenceRepo;

impl PreferenceRepo {
    /// Record a swipe, overwriting any earlier decision in the same
    /// (session, movie, participant) slot.
    pub async fn upsert(pool: &PgPool, input: &RecordPreference) -> Result<Preference, sqlx::Error> {
        let query = format!(
            "INSERT INTO preferences (session_code, movie_id, participant_number, liked)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (session_code, movie_id, participant_number)
             DO UPDATE SET liked = EXCLUDED.liked
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Preference>(&query)
            .bind(&input.session_code)
            .bind(input.movie_id)
            .bind(input.participant_number)
            .bind(input.liked)
            .fetch_one(pool)
            .await
    }

    /// Count current likes for one movie within a session.
    pub async fn count_likes(
        pool: &PgPool,
        code: &str,
        movie_id: MovieId,
    ) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM preferences
             WHERE session_code = $1 AND movie_id = $2 AND liked = true",
        )
        .bind(code)
        .bind(movie_id)
        .fetch_one(pool)
        .await?;
        Ok(count)
    }
}
