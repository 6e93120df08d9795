//! Threshold search: scan candidate thresholds and keep the one whose
//! binarization best preserves the frame's phase spectrum.

pub mod config;
mod types;

use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::binarize::binarize;
use crate::consts::PARALLEL_CANDIDATE_THRESHOLD;
use crate::error::Result;
use crate::evaluate::{CandidateEvaluator, CandidateScore};
use crate::frame::Frame;
use crate::spectral::SpectralEncoder;

pub use config::SearchConfig;
pub use types::{
    CancelToken, CandidateRecord, NoOpReporter, ProgressReporter, SearchControl, SearchResult,
    SearchStatus,
};

/// Search `[low, high)` in steps of `step` with default options.
pub fn search_threshold(frame: &Frame, low: i32, high: i32, step: i32) -> Result<SearchResult> {
    search_threshold_configured(frame, &SearchConfig::with_bounds(low, high, step))
}

/// Search with explicit configuration, no cancellation and no progress.
pub fn search_threshold_configured(frame: &Frame, config: &SearchConfig) -> Result<SearchResult> {
    search_threshold_controlled(frame, config, &SearchControl::default(), &NoOpReporter)
}

/// Search with cancellation/deadline and a progress reporter.
///
/// Frame and bounds are validated before any transform. Candidates may be
/// evaluated in any order, but the winner is picked by a sequential pass in
/// ascending threshold order, so ties always go to the lowest threshold.
pub fn search_threshold_controlled(
    frame: &Frame,
    config: &SearchConfig,
    control: &SearchControl,
    reporter: &dyn ProgressReporter,
) -> Result<SearchResult> {
    frame.validate()?;
    let candidates = config.candidates()?;

    let encoder = SpectralEncoder::for_frame(frame)?;
    let reference = encoder.encode(frame)?;
    let evaluator = CandidateEvaluator::with_encoder(frame, &reference, encoder)?;

    info!(
        rows = frame.rows(),
        cols = frame.cols(),
        candidates = candidates.len(),
        bounds = %config,
        "Searching phase threshold"
    );

    reporter.begin(candidates.len());
    let parallel = config.parallel && candidates.len() >= PARALLEL_CANDIDATE_THRESHOLD;
    let outcomes = if parallel {
        evaluate_parallel(&evaluator, &candidates, control, reporter)
    } else {
        evaluate_sequential(&evaluator, &candidates, control, reporter)
    };
    reporter.finish();

    let mut tracker = BestTracker::new(config.fallback_threshold);
    let mut history = Vec::with_capacity(candidates.len());
    for (&threshold, outcome) in candidates.iter().zip(outcomes) {
        let Some(score) = outcome else {
            continue;
        };
        match score {
            Ok(s) => debug!(threshold, score = s, "Candidate scored"),
            Err(reason) => debug!(threshold, %reason, "Candidate skipped"),
        }
        history.push(tracker.observe(threshold, score));
    }

    let status = if history.len() < candidates.len() {
        SearchStatus::Partial
    } else if tracker.best().is_none() {
        SearchStatus::AllCandidatesInvalid
    } else {
        SearchStatus::Optimal
    };

    let (threshold, score) = tracker.best_or_fallback();
    match status {
        SearchStatus::Optimal => info!(threshold, score, "Phase threshold found"),
        SearchStatus::AllCandidatesInvalid => warn!(
            fallback = threshold,
            "No candidate produced a defined phase correlation"
        ),
        SearchStatus::Partial => warn!(
            evaluated = history.len(),
            candidates = candidates.len(),
            threshold,
            score,
            "Search stopped early; result is partial"
        ),
    }

    Ok(SearchResult {
        threshold,
        score,
        binarized: binarize(frame, threshold),
        status,
        candidates: candidates.len(),
        evaluated: history.len(),
        skipped: tracker.skipped,
        history,
    })
}

/// One outcome per candidate, in candidate order. `None` = not evaluated.
fn evaluate_sequential(
    evaluator: &CandidateEvaluator<'_>,
    candidates: &[i32],
    control: &SearchControl,
    reporter: &dyn ProgressReporter,
) -> Vec<Option<CandidateScore>> {
    let mut outcomes = Vec::with_capacity(candidates.len());
    for (i, &threshold) in candidates.iter().enumerate() {
        if control.should_stop() {
            break;
        }
        outcomes.push(Some(evaluator.evaluate(threshold)));
        reporter.advance(i + 1);
    }
    outcomes.resize(candidates.len(), None);
    outcomes
}

fn evaluate_parallel(
    evaluator: &CandidateEvaluator<'_>,
    candidates: &[i32],
    control: &SearchControl,
    reporter: &dyn ProgressReporter,
) -> Vec<Option<CandidateScore>> {
    let done = AtomicUsize::new(0);
    candidates
        .par_iter()
        .map(|&threshold| {
            if control.should_stop() {
                return None;
            }
            let score = evaluator.evaluate(threshold);
            let completed = done.fetch_add(1, Ordering::Relaxed) + 1;
            reporter.advance(completed);
            Some(score)
        })
        .collect()
}

/// Running maximum over candidate scores.
///
/// Only a strictly greater score replaces the best, so when fed in ascending
/// threshold order the earliest threshold wins ties. Invalid scores are
/// counted and otherwise ignored.
#[derive(Clone, Debug)]
pub struct BestTracker {
    fallback_threshold: i32,
    best: Option<(i32, f64)>,
    pub skipped: usize,
}

impl BestTracker {
    pub fn new(fallback_threshold: i32) -> Self {
        Self {
            fallback_threshold,
            best: None,
            skipped: 0,
        }
    }

    /// Feed the next candidate and return its history record.
    pub fn observe(&mut self, threshold: i32, score: CandidateScore) -> CandidateRecord {
        match score {
            Ok(s) if s > self.best_score() => self.best = Some((threshold, s)),
            Ok(_) => {}
            Err(_) => self.skipped += 1,
        }
        CandidateRecord {
            threshold,
            score,
            best_score: self.best_score(),
        }
    }

    pub fn best(&self) -> Option<(i32, f64)> {
        self.best
    }

    pub fn best_score(&self) -> f64 {
        self.best.map_or(f64::NEG_INFINITY, |(_, s)| s)
    }

    /// The best candidate, or `(fallback_threshold, -inf)` if none scored.
    pub fn best_or_fallback(&self) -> (i32, f64) {
        self.best
            .unwrap_or((self.fallback_threshold, f64::NEG_INFINITY))
    }
}
