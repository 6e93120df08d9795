use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_FALLBACK_THRESHOLD, DEFAULT_THRESHOLD_HIGH, DEFAULT_THRESHOLD_LOW,
    DEFAULT_THRESHOLD_STEP,
};
use crate::error::{PhasebinError, Result};

/// Bounds and execution options of a phase-threshold search.
///
/// Candidates are `low, low + step, low + 2*step, ...` while `< high`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Inclusive lower bound.
    #[serde(default = "default_low")]
    pub low: i32,
    /// Exclusive upper bound.
    #[serde(default = "default_high")]
    pub high: i32,
    /// Distance between candidates. Must be positive.
    #[serde(default = "default_step")]
    pub step: i32,
    /// Threshold reported when no candidate has a defined score.
    #[serde(default = "default_fallback_threshold")]
    pub fallback_threshold: i32,
    /// Evaluate candidates on the Rayon thread pool.
    #[serde(default = "default_true")]
    pub parallel: bool,
}

fn default_low() -> i32 {
    DEFAULT_THRESHOLD_LOW
}
fn default_high() -> i32 {
    DEFAULT_THRESHOLD_HIGH
}
fn default_step() -> i32 {
    DEFAULT_THRESHOLD_STEP
}
fn default_fallback_threshold() -> i32 {
    DEFAULT_FALLBACK_THRESHOLD
}
fn default_true() -> bool {
    true
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            low: DEFAULT_THRESHOLD_LOW,
            high: DEFAULT_THRESHOLD_HIGH,
            step: DEFAULT_THRESHOLD_STEP,
            fallback_threshold: DEFAULT_FALLBACK_THRESHOLD,
            parallel: true,
        }
    }
}

impl SearchConfig {
    /// Default options with the given bounds.
    pub fn with_bounds(low: i32, high: i32, step: i32) -> Self {
        Self {
            low,
            high,
            step,
            ..Default::default()
        }
    }

    /// Fail with `EmptySearchSpace` if the bounds yield no candidate.
    pub fn validate(&self) -> Result<()> {
        if self.step <= 0 || self.low >= self.high {
            return Err(PhasebinError::EmptySearchSpace {
                low: self.low,
                high: self.high,
                step: self.step,
            });
        }
        Ok(())
    }

    /// Candidate thresholds in ascending order.
    pub fn candidates(&self) -> Result<Vec<i32>> {
        self.validate()?;
        Ok((self.low..self.high).step_by(self.step as usize).collect())
    }

    /// Number of candidates the bounds produce (0 when invalid).
    pub fn candidate_count(&self) -> usize {
        if self.validate().is_err() {
            return 0;
        }
        let span = self.high as i64 - self.low as i64;
        ((span + self.step as i64 - 1) / self.step as i64) as usize
    }
}

impl std::fmt::Display for SearchConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}) step {}", self.low, self.high, self.step)
    }
}
