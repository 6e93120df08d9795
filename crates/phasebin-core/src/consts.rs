/// Default inclusive lower bound of the threshold search.
pub const DEFAULT_THRESHOLD_LOW: i32 = 10;

/// Default exclusive upper bound of the threshold search.
pub const DEFAULT_THRESHOLD_HIGH: i32 = 245;

/// Default distance between consecutive candidate thresholds.
pub const DEFAULT_THRESHOLD_STEP: i32 = 5;

/// Threshold reported when no candidate produced a defined score.
pub const DEFAULT_FALLBACK_THRESHOLD: i32 = 0;

/// Output level for samples at or below the threshold.
pub const BINARY_LOW: u8 = 0;

/// Output level for samples strictly above the threshold.
pub const BINARY_HIGH: u8 = 255;

/// Minimum candidate count to evaluate candidates with Rayon.
pub const PARALLEL_CANDIDATE_THRESHOLD: usize = 4;

/// Spectral coefficients with magnitude below this fraction of the largest
/// magnitude are treated as exact zeros (phase 0.0).
pub const PHASE_MAGNITUDE_EPSILON: f64 = 1e-9;

/// Mean squared deviation below which a phase sequence counts as constant.
pub const VARIANCE_EPSILON: f64 = 1e-20;

/// Number of histogram bins for Otsu's thresholding of 8-bit frames.
pub const OTSU_HISTOGRAM_BINS: usize = 256;
