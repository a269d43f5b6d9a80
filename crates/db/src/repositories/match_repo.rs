//! Repository for the `matches` table, including match detection.

use cinematch_core::types::MovieId;
use sqlx::PgPool;

use crate::models::matches::MatchedMovie;
use crate::repositories::PreferenceRepo;

/// Likes required for a match: one per participant slot.
const LIKES_FOR_MATCH: i64 = 2;

/// Provides match detection and the results listing.
pub struct MatchRepo;

impl MatchRepo {
    /// Re-evaluate one (session, movie) pair after a liked swipe.
    ///
    /// Counts current likes and records a match once both slots agree.
    /// Safe to call redundantly: concurrent or repeated evaluations
    /// collapse into the single existing row. Returns `true` only when
    /// this call created the match.
    pub async fn evaluate(pool: &PgPool, code: &str, movie_id: MovieId) -> Result<bool, sqlx::Error> {
        let likes = PreferenceRepo::count_likes(pool, code, movie_id).await?;
        if likes < LIKES_FOR_MATCH {
            return Ok(false);
        }
        Self::insert_if_absent(pool, code, movie_id).await
    }

    /// Record a match unless one already exists for the pair.
    ///
    /// Matches are permanent: nothing ever updates or deletes the row,
    /// even if a participant later flips their like.
    pub async fn insert_if_absent(
        pool: &PgPool,
        code: &str,
        movie_id: MovieId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO matches (session_code, movie_id)
             VALUES ($1, $2)
             ON CONFLICT (session_code, movie_id) DO NOTHING",
        )
        .bind(code)
        .bind(movie_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List a session's matches with movie details, newest discovery
    /// first. Unknown codes yield an empty list.
    pub async fn list_with_movies(
        pool: &PgPool,
        code: &str,
    ) -> Result<Vec<MatchedMovie>, sqlx::Error> {
        sqlx::query_as::<_, MatchedMovie>(
            "SELECT mt.movie_id, m.title, m.poster_path, m.release_year, m.vote_average,
                    m.overview, mt.discovered_at
             FROM matches mt
             JOIN movies m ON m.movie_id = mt.movie_id
             WHERE mt.session_code = $1
             ORDER BY mt.discovered_at DESC, mt.id DESC",
        )
        .bind(code)
        .fetch_all(pool)
        .await
    }
}
