//! Deck Assignment Engine.
//!
//! Deals each session exactly one deck: a fixed, ordered page of movies
//! fetched from the upstream catalog the first time either participant
//! asks for it. Initialization runs inside a transaction that holds the
//! session row lock, so two participants racing on a cold session
//! serialize; the second one observes the first's committed deck and
//! skips the fetch.

use std::collections::HashSet;

use cinematch_catalog::{CatalogClient, CatalogMovie};
use cinematch_core::category::Category;
use cinematch_core::deck::{page_for_code, DECK_SIZE};
use cinematch_core::error::CoreError;
use cinematch_db::models::deck::DeckMovie;
use cinematch_db::models::movie::NewMovie;
use cinematch_db::models::session::Session;
use cinematch_db::repositories::{DeckRepo, MovieRepo, SessionRepo};
use cinematch_db::DbPool;

use crate::error::{AppError, AppResult};

/// A participant's view of a session deck.
#[derive(Debug)]
pub struct DeckView {
    /// Unswiped movies in deal order.
    pub movies: Vec<DeckMovie>,
    /// The session's current category, verbatim as stored.
    pub category: String,
}

/// Coordinates deck initialization and the per-participant projection.
pub struct DeckEngine;

impl DeckEngine {
    /// Return the deck as `participant_number` sees it, dealing it first
    /// if the session has none yet.
    ///
    /// Refreshes the session's activity timestamp on the way out. An
    /// unknown code is NotFound; an unreachable catalog leaves the deck
    /// empty for this call and the next request retries.
    pub async fn deck_for_participant(
        pool: &DbPool,
        catalog: &CatalogClient,
        code: &str,
        participant_number: i16,
    ) -> AppResult<DeckView> {
        let session = Self::ensure_deck(pool, catalog, code).await?;
        let movies = DeckRepo::list_unswiped(pool, code, participant_number).await?;
        SessionRepo::touch_last_active(pool, code).await?;
        Ok(DeckView {
            movies,
            category: session.category,
        })
    }

    /// Deal the session's deck if it has none.
    ///
    /// Holds the session row lock across "check emptiness, fetch
    /// upstream, insert rows" so at most one caller ever deals. Returns
    /// the session row read under the lock.
    async fn ensure_deck(
        pool: &DbPool,
        catalog: &CatalogClient,
        code: &str,
    ) -> AppResult<Session> {
        let mut tx = pool.begin().await?;

        let session = SessionRepo::find_by_code_locked(&mut *tx, code)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Session",
                code: code.to_string(),
            }))?;

        if DeckRepo::count_for_session(&mut *tx, code).await? > 0 {
            tx.commit().await?;
            return Ok(session);
        }

        let page = page_for_code(code);
        let category = Category::parse_lenient(&session.category);
        let candidates = dedupe_by_id(catalog.fetch_movies(DECK_SIZE, Some(page), category).await);

        if candidates.is_empty() {
            // Release the lock and leave the session undealt so a later
            // request can retry against a recovered upstream.
            tx.rollback().await?;
            tracing::warn!(
                session_code = code,
                page,
                "Catalog returned no candidates, deck left undealt"
            );
            return Ok(session);
        }

        MovieRepo::insert_missing(&mut *tx, &to_new_movies(&candidates)).await?;
        let movie_ids: Vec<_> = candidates.iter().map(|c| c.id).collect();
        DeckRepo::insert_batch(&mut *tx, code, &movie_ids).await?;
        tx.commit().await?;

        tracing::info!(
            session_code = code,
            page,
            category = category.as_str(),
            count = movie_ids.len(),
            "Deck dealt"
        );
        Ok(session)
    }
}

/// Drop repeated ids, keeping each movie's first appearance in page order.
fn dedupe_by_id(candidates: Vec<CatalogMovie>) -> Vec<CatalogMovie> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|c| seen.insert(c.id))
        .collect()
}

/// Map upstream entries onto movie-cache rows, deriving the release year
/// from the upstream date string.
fn to_new_movies(candidates: &[CatalogMovie]) -> Vec<NewMovie> {
    candidates
        .iter()
        .map(|c| NewMovie {
            movie_id: c.id,
            title: c.title.clone(),
            poster_path: c.poster_path.clone(),
            release_year: c.release_year(),
            vote_average: c.vote_average,
            overview: c.overview.clone(),
        })
        .collect()
}
