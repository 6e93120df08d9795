use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhasebinError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid image dimensions: {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Empty search space: low={low}, high={high}, step={step}")]
    EmptySearchSpace { low: i32, high: i32, step: i32 },

    #[error("Candidate evaluation failed: {0}")]
    Evaluation(#[from] InvalidScore),
}

pub type Result<T> = std::result::Result<T, PhasebinError>;

/// Why a candidate threshold has no defined similarity score.
///
/// Recoverable: the search records it and moves on to the next candidate.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum InvalidScore {
    #[error("phase sequence has zero variance")]
    ZeroVariance,

    #[error("phase sequences differ in length ({left} vs {right})")]
    LengthMismatch { left: usize, right: usize },

    #[error("shape {found:?} does not match frame shape {expected:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("frame has no samples")]
    EmptyFrame,

    #[error("correlation is not finite")]
    NonFinite,
}
