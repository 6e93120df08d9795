use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::evaluate::CandidateScore;
use crate::frame::Frame;

/// How a search ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStatus {
    /// Every candidate was evaluated and at least one had a defined score.
    Optimal,
    /// Every candidate was evaluated and none had a defined score.
    AllCandidatesInvalid,
    /// Cancelled or timed out before all candidates were evaluated.
    Partial,
}

impl std::fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Optimal => write!(f, "Optimal"),
            Self::AllCandidatesInvalid => write!(f, "All candidates invalid"),
            Self::Partial => write!(f, "Partial"),
        }
    }
}

/// One evaluated candidate, in enumeration order.
#[derive(Clone, Debug, PartialEq)]
pub struct CandidateRecord {
    pub threshold: i32,
    pub score: CandidateScore,
    /// Best score seen up to and including this candidate.
    pub best_score: f64,
}

/// Outcome of a phase-threshold search.
#[derive(Clone, Debug)]
pub struct SearchResult {
    /// Winning threshold, or the fallback when no candidate scored.
    pub threshold: i32,
    /// Pearson correlation at `threshold`; `f64::NEG_INFINITY` when degenerate.
    pub score: f64,
    /// Source frame binarized at `threshold`.
    pub binarized: Frame,
    pub status: SearchStatus,
    /// Number of candidates the bounds produced.
    pub candidates: usize,
    /// Number of candidates actually evaluated.
    pub evaluated: usize,
    /// Number of evaluated candidates without a defined score.
    pub skipped: usize,
    pub history: Vec<CandidateRecord>,
}

impl SearchResult {
    /// No candidate produced a defined score.
    pub fn is_degenerate(&self) -> bool {
        self.score == f64::NEG_INFINITY
    }

    pub fn is_partial(&self) -> bool {
        self.status == SearchStatus::Partial
    }

    /// `(threshold, score)` of every candidate with a defined score.
    pub fn valid_scores(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.history
            .iter()
            .filter_map(|r| r.score.ok().map(|s| (r.threshold, s)))
    }
}

/// Thread-safe progress reporting for the search.
///
/// All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    /// The search is about to evaluate `total` candidates.
    fn begin(&self, _total: usize) {}

    /// `done` candidates have been evaluated so far.
    fn advance(&self, _done: usize) {}

    /// No more candidates will be evaluated.
    fn finish(&self) {}
}

/// No-op progress reporter.
pub struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}

/// Cooperative cancellation flag shared between a search and its caller.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Optional cancellation and deadline for a search.
///
/// Checked before each candidate; a candidate already being evaluated
/// runs to completion.
#[derive(Clone, Debug, Default)]
pub struct SearchControl {
    pub cancel: Option<CancelToken>,
    pub deadline: Option<Instant>,
}

impl SearchControl {
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    pub fn should_stop(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
            || self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}
