//! Repository for the `sessions` table.

use cinematch_core::session_code::generate_session_code;
use sqlx::{PgConnection, PgPool};

use crate::models::session::{Session, UpdateSession};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, session_code, category, last_active_at, created_at, updated_at";

/// How many generated codes to try before giving up on creation.
const MAX_CODE_ATTEMPTS: usize = 5;

/// Provides CRUD operations for sessions.
pub struct SessionRepo;

impl SessionRepo {
    /// Create a session under a freshly generated code.
    ///
    /// Codes are claimed with an insert-if-absent rather than a
    /// check-then-insert, so two racing creators can never end up sharing
    /// one; the loser of a collision simply draws again. Returns `None`
    /// if no free code was found within the attempt budget, which with an
    /// eight-character code space means something is badly wrong.
    pub async fn create(pool: &PgPool) -> Result<Option<Session>, sqlx::Error> {
        let query = format!(
            "INSERT INTO sessions (session_code)
             VALUES ($1)
             ON CONFLICT (session_code) DO NOTHING
             RETURNING {COLUMNS}"
        );
        for _ in 0..MAX_CODE_ATTEMPTS {
            let code = generate_session_code();
            let created = sqlx::query_as::<_, Session>(&query)
                .bind(&code)
                .fetch_optional(pool)
                .await?;
            if created.is_some() {
                return Ok(created);
            }
        }
        Ok(None)
    }

    /// Find a session by its code.
    pub async fn find_by_code(pool: &PgPool, code: &str) -> Result<Option<Session>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sessions WHERE session_code = $1");
        sqlx::query_as::<_, Session>(&query)
            .bind(code)
            .fetch_optional(pool)
            .await
    }

    /// Find a session by code, locking its row for the transaction.
    ///
    /// Serializes deck initialization: whoever holds this lock is the
    /// only writer allowed to deal the session's deck.
    pub async fn find_by_code_locked(
        conn: &mut PgConnection,
        code: &str,
    ) -> Result<Option<Session>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sessions WHERE session_code = $1 FOR UPDATE");
        sqlx::query_as::<_, Session>(&query)
            .bind(code)
            .fetch_optional(conn)
            .await
    }

    /// Apply a patch to a session, returning the updated row.
    ///
    /// Callers are expected to reject empty patches before getting here.
    pub async fn update(
        pool: &PgPool,
        code: &str,
        input: &UpdateSession,
    ) -> Result<Option<Session>, sqlx::Error> {
        let query = format!(
            "UPDATE sessions
             SET category = COALESCE($2, category)
             WHERE session_code = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(code)
            .bind(&input.category)
            .fetch_optional(pool)
            .await
    }

    /// Refresh a session's activity timestamp. Returns `true` if the row
    /// exists.
    pub async fn touch_last_active(pool: &PgPool, code: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE sessions SET last_active_at = NOW() WHERE session_code = $1")
            .bind(code)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
