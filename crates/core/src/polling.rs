//! Waiting-phase protocol for the participant who finishes swiping first.
//!
//! Whoever finishes their deck first sits on a waiting screen polling the
//! match list. [`MatchWait`] is the pure bookkeeping behind that screen:
//! it owns no timer and performs no I/O, it just advances a simulated
//! clock as completed polls are recorded and decides when the participant
//! moves on to results. The driving loop lives in the client crate.

use std::time::Duration;

// ---------------------------------------------------------------------------
// Timing constants
// ---------------------------------------------------------------------------

/// How often the waiting participant polls for matches.
pub const POLL_INTERVAL: Duration = Duration::from_secs(3);

/// Matches found before this much waiting are held back, and the manual
/// check-now action is not offered until it has passed.
pub const CHECK_NOW_AFTER: Duration = Duration::from_secs(15);

/// Hard cap: once this much waiting has elapsed the participant is shown
/// results unconditionally, matches or not.
pub const GIVE_UP_AFTER: Duration = Duration::from_secs(30);

// ---------------------------------------------------------------------------
// State machine
// ---------------------------------------------------------------------------

/// Decision returned by [`MatchWait::record_poll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitOutcome {
    /// Stay on the waiting screen and poll again after [`POLL_INTERVAL`].
    KeepWaiting,
    /// Move to the results screen.
    ShowResults,
}

/// Bookkeeping for one participant's waiting phase.
///
/// The clock only advances through [`record_poll`](Self::record_poll), so
/// callers must not record polls that failed in transport; a failed poll
/// costs wall time but no waiting credit, and the next tick simply tries
/// again.
///
/// Drivers are expected to consult [`hard_cap_reached`](Self::hard_cap_reached)
/// before each poll and stop polling once it reports true.
#[derive(Debug, Default)]
pub struct MatchWait {
    elapsed: Duration,
    check_now_requested: bool,
}

impl MatchWait {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed poll that found `match_count` matches.
    ///
    /// A pending check-now request wins outright, whatever the count.
    /// Otherwise matches surface only once [`CHECK_NOW_AFTER`] has
    /// elapsed; early matches are held back and the participant keeps
    /// waiting (the next poll will re-fetch them).
    pub fn record_poll(&mut self, match_count: usize) -> WaitOutcome {
        if self.check_now_requested {
            return WaitOutcome::ShowResults;
        }
        if match_count > 0 && self.elapsed >= CHECK_NOW_AFTER {
            return WaitOutcome::ShowResults;
        }
        self.elapsed += POLL_INTERVAL;
        WaitOutcome::KeepWaiting
    }

    /// Force results on the next completed poll, match or no match.
    ///
    /// Backs the manual "check now" action on the waiting screen, and is
    /// also how the second finisher skips the waiting phase entirely: arm
    /// it before the first poll and that poll goes straight to results.
    pub fn request_check_now(&mut self) {
        self.check_now_requested = true;
    }

    /// Whether the manual check-now action should be offered yet.
    pub fn check_now_available(&self) -> bool {
        self.elapsed >= CHECK_NOW_AFTER
    }

    /// Whether the hard waiting cap has been reached.
    pub fn hard_cap_reached(&self) -> bool {
        self.elapsed >= GIVE_UP_AFTER
    }

    /// Total waiting time credited so far.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
