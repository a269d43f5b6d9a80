//! Repository for the shared `movies` cache.

use cinematch_core::types::MovieId;
use sqlx::{PgConnection, PgPool};

use crate::models::movie::{Movie, NewMovie};

const COLUMNS: &str =
    "movie_id, title, poster_path, release_year, vote_average, overview, created_at, updated_at";

/// Provides access to the movie cache.
pub struct MovieRepo;

impl MovieRepo {
    /// Cache a batch of upstream movies, skipping ids already present.
    ///
    /// First writer wins: a cached row is never overwritten, even if the
    /// upstream has since changed its fields. Runs on the caller's
    /// connection so deck initialization can include it in its
    /// transaction. Returns the number of newly cached rows.
    pub async fn insert_missing(
        conn: &mut PgConnection,
        movies: &[NewMovie],
    ) -> Result<u64, sqlx::Error> {
        let mut inserted = 0;
        for movie in movies {
            let result = sqlx::query(
                "INSERT INTO movies (movie_id, title, poster_path, release_year, vote_average, overview)
                 VALUES ($1, $2, $3, $4, $5, $6)
                 ON CONFLICT (movie_id) DO NOTHING",
            )
            .bind(movie.movie_id)
            .bind(&movie.title)
            .bind(&movie.poster_path)
            .bind(movie.release_year)
            .bind(movie.vote_average)
            .bind(&movie.overview)
            .execute(&mut *conn)
            .await?;
            inserted += result.rows_affected();
        }
        Ok(inserted)
    }

    /// Look up a cached movie by its upstream id.
    pub async fn find_by_id(pool: &PgPool, movie_id: MovieId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE movie_id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(movie_id)
            .fetch_optional(pool)
            .await
    }
}
