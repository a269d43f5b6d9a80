//! Typed HTTP client for the CineMatch API.
//!
//! Every application-level answer arrives as HTTP 200 carrying the
//! `{"success": …}` envelope; a non-200 status means the request never
//! reached a handler (unknown route, timeout, panic recovery) and
//! surfaces as [`ClientError::Http`].

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Bound on any single API request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for one CineMatch server.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Errors from the API client layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered outside the envelope protocol.
    #[error("API error ({status}): {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The envelope reported an application-level failure.
    #[error("API error: {0}")]
    Api(String),

    /// The envelope claimed success but its payload did not decode.
    #[error("Failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// A movie entry from a participant's deck.
#[derive(Debug, Clone, Deserialize)]
pub struct DeckMovie {
    pub movie_id: i64,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_year: Option<i32>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub overview: Option<String>,
}

/// A participant's remaining deck together with the session's category.
#[derive(Debug, Clone, Deserialize)]
pub struct Deck {
    pub movies: Vec<DeckMovie>,
    pub category: String,
}

/// A movie both participants liked.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchedMovie {
    pub movie_id: i64,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_year: Option<i32>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub overview: Option<String>,
    pub discovered_at: DateTime<Utc>,
}

/// The session fields a client acts on.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionInfo {
    pub session_code: String,
    pub category: String,
}

/// Answer to a join request.
#[derive(Debug, Clone, Deserialize)]
pub struct JoinedSession {
    pub session_code: String,
    pub category: String,
}

#[derive(Debug, Deserialize)]
struct CreatedSession {
    session_code: String,
}

#[derive(Debug, Deserialize)]
struct UpdatedSession {
    session: SessionInfo,
}

#[derive(Debug, Deserialize)]
struct MatchListing {
    matches: Vec<MatchedMovie>,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

impl ApiClient {
    /// Create a new client for the given server.
    ///
    /// * `base_url` - Server root, e.g. `http://localhost:3000`.
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { client, base_url }
    }

    /// Start a new session, returning its code.
    pub async fn create_session(&self) -> Result<String, ClientError> {
        let response = self
            .client
            .post(format!("{}/api/v1/sessions", self.base_url))
            .send()
            .await?;

        let created: CreatedSession = Self::parse_envelope(response).await?;
        Ok(created.session_code)
    }

    /// Join an existing session by its code.
    pub async fn join_session(&self, session_code: &str) -> Result<JoinedSession, ClientError> {
        let body = serde_json::json!({ "session_code": session_code });

        let response = self
            .client
            .post(format!("{}/api/v1/sessions/join", self.base_url))
            .json(&body)
            .send()
            .await?;

        Self::parse_envelope(response).await
    }

    /// Change the session's catalog category.
    pub async fn update_category(
        &self,
        session_code: &str,
        category: &str,
    ) -> Result<SessionInfo, ClientError> {
        let body = serde_json::json!({ "category": category });

        let response = self
            .client
            .patch(format!("{}/api/v1/sessions/{}", self.base_url, session_code))
            .json(&body)
            .send()
            .await?;

        let updated: UpdatedSession = Self::parse_envelope(response).await?;
        Ok(updated.session)
    }

    /// Fetch the movies the given participant has not swiped yet.
    pub async fn fetch_deck(
        &self,
        session_code: &str,
        participant_number: i16,
    ) -> Result<Deck, ClientError> {
        let response = self
            .client
            .get(format!(
                "{}/api/v1/sessions/{}/deck",
                self.base_url, session_code
            ))
            .query(&[("participant_number", participant_number)])
            .send()
            .await?;

        Self::parse_envelope(response).await
    }

    /// Record a swipe decision.
    pub async fn record_swipe(
        &self,
        session_code: &str,
        movie_id: i64,
        participant_number: i16,
        liked: bool,
    ) -> Result<(), ClientError> {
        let body = serde_json::json!({
            "session_code": session_code,
            "movie_id": movie_id,
            "participant_number": participant_number,
            "liked": liked,
        });

        let response = self
            .client
            .post(format!("{}/api/v1/preferences", self.base_url))
            .json(&body)
            .send()
            .await?;

        Self::check_envelope(response).await?;
        Ok(())
    }

    /// List the session's matches, newest discovery first.
    pub async fn list_matches(&self, session_code: &str) -> Result<Vec<MatchedMovie>, ClientError> {
        let response = self
            .client
            .get(format!(
                "{}/api/v1/sessions/{}/matches",
                self.base_url, session_code
            ))
            .send()
            .await?;

        let listing: MatchListing = Self::parse_envelope(response).await?;
        Ok(listing.matches)
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`ClientError::Http`]
    /// containing the status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ClientError::Http {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Validate transport status and envelope success, returning the raw
    /// envelope for payload extraction.
    async fn check_envelope(response: reqwest::Response) -> Result<serde_json::Value, ClientError> {
        let response = Self::ensure_success(response).await?;
        let body: serde_json::Value = response.json().await?;
        if let Some(message) = envelope_failure(&body) {
            return Err(ClientError::Api(message));
        }
        Ok(body)
    }

    /// Parse a successful envelope's payload into the expected type.
    async fn parse_envelope<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let body = Self::check_envelope(response).await?;
        Ok(serde_json::from_value(body)?)
    }
}

/// Extract the failure message from an envelope, if it reports one.
///
/// A missing or non-true `success` flag counts as failure; a failure
/// without an `error` field gets a generic message.
fn envelope_failure(body: &serde_json::Value) -> Option<String> {
    if body["success"] == true {
        return None;
    }
    Some(
        body["error"]
            .as_str()
            .unwrap_or("Unknown error")
            .to_string(),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
