//! REST API client for the movie catalog's listing endpoints.
//!
//! Wraps the catalog HTTP API (category listings, trending feeds) using
//! [`reqwest`]. Responses come back as pages of [`CatalogMovie`] entries
//! in the catalog's own field names.

use std::time::Duration;

use cinematch_core::category::Category;
use serde::Deserialize;

/// HTTP request timeout for a single catalog call.
///
/// Deck building runs this call while holding a session row lock, so it
/// must stay below the database `lock_timeout` for waiting transactions.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Language sent with every listing request.
const DEFAULT_LANGUAGE: &str = "en-US";

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Errors from the catalog REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The HTTP request itself failed (network, DNS, timeout, body decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The catalog returned a non-2xx status code.
    #[error("Catalog API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// One movie entry as the catalog serves it.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogMovie {
    /// Catalog-assigned movie identifier.
    pub id: i64,
    /// Display title. The catalog occasionally omits this on trending
    /// entries, so it defaults to empty rather than failing the page.
    #[serde(default)]
    pub title: String,
    /// Relative poster image path, when the catalog has artwork.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Release date in `YYYY-MM-DD` form. Unreleased titles may carry an
    /// empty string here.
    #[serde(default)]
    pub release_date: Option<String>,
    /// Short plot synopsis.
    #[serde(default)]
    pub overview: Option<String>,
    /// Aggregate user rating on the catalog's 0-10 scale.
    #[serde(default)]
    pub vote_average: Option<f64>,
}

impl CatalogMovie {
    /// Release year parsed from the leading `YYYY` of [`release_date`].
    ///
    /// Returns `None` when the date is missing, empty, or malformed.
    ///
    /// [`release_date`]: CatalogMovie::release_date
    pub fn release_year(&self) -> Option<i32> {
        self.release_date.as_deref()?.get(..4)?.parse().ok()
    }
}

/// Paged listing response envelope.
#[derive(Debug, Deserialize)]
struct PageResponse {
    results: Vec<CatalogMovie>,
}

// ---------------------------------------------------------------------------
// CatalogClient
// ---------------------------------------------------------------------------

/// HTTP client for a single movie catalog instance.
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl CatalogClient {
    /// Create a new client for the catalog at `base_url`.
    ///
    /// * `base_url` - API root, e.g. `https://api.themoviedb.org/3`.
    /// * `api_key` - Key sent as the `api_key` query parameter.
    pub fn new(base_url: String, api_key: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self {
            client,
            base_url,
            api_key,
        }
    }

    /// Fetch up to `count` movies from one page of a category listing.
    ///
    /// This is the fail-soft surface used by deck building: any transport,
    /// status, or decoding failure is logged and collapses to an empty
    /// list, which callers treat as "no candidates right now".
    pub async fn fetch_movies(
        &self,
        count: usize,
        page: Option<u32>,
        category: Category,
    ) -> Vec<CatalogMovie> {
        match self.try_fetch(count, page, category).await {
            Ok(movies) => movies,
            Err(e) => {
                tracing::warn!(
                    category = category.as_str(),
                    page,
                    error = %e,
                    "Catalog fetch failed, returning no candidates"
                );
                Vec::new()
            }
        }
    }

    /// Fetch one listing page, propagating failures.
    async fn try_fetch(
        &self,
        count: usize,
        page: Option<u32>,
        category: Category,
    ) -> Result<Vec<CatalogMovie>, CatalogError> {
        let url = format!("{}{}", self.base_url, category.endpoint_path());
        let mut request = self.client.get(url).query(&[
            ("api_key", self.api_key.as_str()),
            ("language", DEFAULT_LANGUAGE),
        ]);
        if let Some(page) = page {
            request = request.query(&[("page", page.to_string())]);
        }

        let response = request.send().await?;
        let response = Self::ensure_success(response).await?;
        let page_data = response.json::<PageResponse>().await?;

        let mut movies = page_data.results;
        movies.truncate(count);
        Ok(movies)
    }

    /// Ensure the response has a success status code. Returns the response
    /// unchanged on success, or a [`CatalogError::Api`] containing the
    /// status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, CatalogError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(CatalogError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
