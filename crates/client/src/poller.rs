//! Cancellable polling loop behind the waiting screen.
//!
//! Whoever finishes swiping first waits for the other participant by
//! polling the match list. [`MatchPoller`] owns that loop: it drives the
//! pure [`MatchWait`] bookkeeping against a [`MatchSource`], ticking at
//! [`POLL_INTERVAL`], until the wait surfaces results or the caller
//! cancels.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use cinematch_core::polling::{MatchWait, WaitOutcome, POLL_INTERVAL};
use tokio_util::sync::CancellationToken;

use crate::api::{ApiClient, ClientError, MatchedMovie};

/// Source of a session's current match list.
///
/// [`ApiClient`] is the production implementation; tests substitute a
/// scripted stub.
#[async_trait]
pub trait MatchSource: Send + Sync {
    async fn poll_matches(&self, session_code: &str) -> Result<Vec<MatchedMovie>, ClientError>;
}

#[async_trait]
impl MatchSource for ApiClient {
    async fn poll_matches(&self, session_code: &str) -> Result<Vec<MatchedMovie>, ClientError> {
        self.list_matches(session_code).await
    }
}

/// How the waiting phase ended.
#[derive(Debug)]
pub enum PollOutcome {
    /// Move to the results screen with these matches (possibly none).
    Results(Vec<MatchedMovie>),
    /// The wait was abandoned before results were due.
    Cancelled,
}

/// Handle for the waiting screen's manual "check now" action.
///
/// Pressing it makes the poller surface results on its next completed
/// poll, match or no match; pressing repeatedly is harmless. The screen
/// is expected to offer the action only once
/// [`MatchWait::check_now_available`] would report true.
#[derive(Debug, Clone)]
pub struct CheckNowHandle {
    requested: Arc<AtomicBool>,
}

impl CheckNowHandle {
    /// Ask the poller to surface results on its next completed poll.
    pub fn press(&self) {
        self.requested.store(true, Ordering::SeqCst);
    }
}

/// Drives one participant's waiting phase to completion.
pub struct MatchPoller<S> {
    source: S,
    session_code: String,
    wait: MatchWait,
    check_now: Arc<AtomicBool>,
}

impl<S: MatchSource> MatchPoller<S> {
    /// Poller for the first finisher: polls through the waiting phase.
    pub fn new(source: S, session_code: impl Into<String>) -> Self {
        Self {
            source,
            session_code: session_code.into(),
            wait: MatchWait::new(),
            check_now: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Poller for the second finisher: one poll, straight to results.
    pub fn immediate(source: S, session_code: impl Into<String>) -> Self {
        let mut poller = Self::new(source, session_code);
        poller.wait.request_check_now();
        poller
    }

    /// Handle for the "check now" action. Grab it before
    /// [`run`](Self::run), which consumes the poller.
    pub fn check_now_handle(&self) -> CheckNowHandle {
        CheckNowHandle {
            requested: Arc::clone(&self.check_now),
        }
    }

    /// Drive the waiting phase to its end.
    ///
    /// Polls the source every [`POLL_INTERVAL`], crediting completed
    /// polls to the wait bookkeeping, until results surface, the hard
    /// cap lands, or the token is cancelled. A failed poll is logged and
    /// retried on the next tick without crediting wait time.
    pub async fn run(mut self, cancel: CancellationToken) -> PollOutcome {
        let mut interval = tokio::time::interval(POLL_INTERVAL);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!(session_code = %self.session_code, "Match polling cancelled");
                    return PollOutcome::Cancelled;
                }
                _ = interval.tick() => {
                    if self.check_now.swap(false, Ordering::SeqCst) {
                        self.wait.request_check_now();
                    }
                    match self.source.poll_matches(&self.session_code).await {
                        Ok(matches) => {
                            let outcome = self.wait.record_poll(matches.len());
                            if outcome == WaitOutcome::ShowResults || self.wait.hard_cap_reached() {
                                return PollOutcome::Results(matches);
                            }
                        }
                        Err(err) => {
                            tracing::warn!(
                                session_code = %self.session_code,
                                error = %err,
                                "Match poll failed"
                            );
                        }
                    }
                }
            }
        }
    }
}
