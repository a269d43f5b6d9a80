//! Repository for the `session_decks` table.
//!
//! Deck rows are written exactly once per session, inside the engine's
//! transaction, while the session row lock is held. Reads go through the
//! pool as usual.

use cinematch_core::types::MovieId;
use sqlx::{PgConnection, PgPool};

use crate::models::deck::{DeckEntry, DeckMovie};

const COLUMNS: &str = "id, session_code, movie_id, position, created_at, updated_at";

/// Provides deck slot storage and the per-participant projection.
pub struct DeckRepo;

impl DeckRepo {
    /// Count deck slots already dealt to a session.
    pub async fn count_for_session(
        conn: &mut PgConnection,
        code: &str,
    ) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM session_decks WHERE session_code = $1")
                .bind(code)
                .fetch_one(conn)
                .await?;
        Ok(count)
    }

    /// Deal a deck: one slot per movie, positions following input order.
    pub async fn insert_batch(
        conn: &mut PgConnection,
        code: &str,
        movie_ids: &[MovieId],
    ) -> Result<(), sqlx::Error> {
        for (position, movie_id) in movie_ids.iter().enumerate() {
            sqlx::query(
                "INSERT INTO session_decks (session_code, movie_id, position)
                 VALUES ($1, $2, $3)",
            )
            .bind(code)
            .bind(movie_id)
            .bind(position as i32)
            .execute(&mut *conn)
            .await?;
        }
        Ok(())
    }

    /// List a session's deck slots in position order.
    pub async fn list_for_session(pool: &PgPool, code: &str) -> Result<Vec<DeckEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM session_decks WHERE session_code = $1 ORDER BY position"
        );
        sqlx::query_as::<_, DeckEntry>(&query)
            .bind(code)
            .fetch_all(pool)
            .await
    }

    /// The deck as one participant sees it: movies they have not yet
    /// swiped, in the original deal order.
    pub async fn list_unswiped(
        pool: &PgPool,
        code: &str,
        participant_number: i16,
    ) -> Result<Vec<DeckMovie>, sqlx::Error> {
        sqlx::query_as::<_, DeckMovie>(
            "SELECT m.movie_id, m.title, m.poster_path, m.release_year, m.vote_average, m.overview
             FROM session_decks d
             JOIN movies m ON m.movie_id = d.movie_id
             WHERE d.session_code = $1
               AND NOT EXISTS (
                   SELECT 1 FROM preferences p
                   WHERE p.session_code = d.session_code
                     AND p.movie_id = d.movie_id
                     AND p.participant_number = $2
               )
             ORDER BY d.position",
        )
        .bind(code)
        .bind(participant_number)
        .fetch_all(pool)
        .await
    }
}
