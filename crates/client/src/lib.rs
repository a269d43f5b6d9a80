//! Participant-side library for the CineMatch API.
//!
//! [`ApiClient`] is a typed HTTP client for the server's envelope
//! protocol; [`MatchPoller`] drives the waiting screen's cancellable
//! polling loop on top of it.

pub mod api;
pub mod poller;

pub use api::{ApiClient, ClientError, Deck, DeckMovie, JoinedSession, MatchedMovie, SessionInfo};
pub use poller::{CheckNowHandle, MatchPoller, MatchSource, PollOutcome};
