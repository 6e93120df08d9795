pub mod correlation;

use crate::binarize::binarize_array;
use crate::error::InvalidScore;
use crate::frame::{Frame, PhaseMap};
use crate::spectral::SpectralEncoder;

pub use correlation::{pearson, pearson_slices};

/// Score of a single candidate threshold, or why it has none.
pub type CandidateScore = std::result::Result<f64, InvalidScore>;

/// Scores candidate thresholds of one frame against its reference phase map.
///
/// Holds the FFT plans for the frame's shape, so repeated evaluations only
/// pay for the transforms themselves. Shared read-only across threads.
#[derive(Debug)]
pub struct CandidateEvaluator<'a> {
    frame: &'a Frame,
    reference: &'a PhaseMap,
    encoder: SpectralEncoder,
}

impl<'a> CandidateEvaluator<'a> {
    /// Plan an encoder for `frame`.
    ///
    /// Fails with `EmptyFrame` for an empty shape and `ShapeMismatch` when the
    /// reference was not computed for a frame of this shape.
    pub fn new(
        frame: &'a Frame,
        reference: &'a PhaseMap,
    ) -> std::result::Result<Self, InvalidScore> {
        if frame.data.is_empty() {
            return Err(InvalidScore::EmptyFrame);
        }
        let encoder = SpectralEncoder::for_frame(frame).map_err(|_| InvalidScore::EmptyFrame)?;
        Self::with_encoder(frame, reference, encoder)
    }

    /// Reuse an encoder already planned for `frame`'s shape.
    pub fn with_encoder(
        frame: &'a Frame,
        reference: &'a PhaseMap,
        encoder: SpectralEncoder,
    ) -> std::result::Result<Self, InvalidScore> {
        let expected = frame.data.dim();
        for found in [reference.dim(), encoder.dim()] {
            if found != expected {
                return Err(InvalidScore::ShapeMismatch { expected, found });
            }
        }
        Ok(Self {
            frame,
            reference,
            encoder,
        })
    }

    /// Binarize at `threshold`, encode, and correlate with the reference.
    pub fn evaluate(&self, threshold: i32) -> CandidateScore {
        let binarized = binarize_array(self.frame.data.view(), threshold);
        let candidate = self.encoder.encode_planned(binarized.view());
        // ndarray iterates in logical row-major order.
        pearson(self.reference.iter(), candidate.iter())
    }
}

/// Score one candidate threshold against a precomputed reference phase map.
pub fn evaluate_candidate(frame: &Frame, reference: &PhaseMap, threshold: i32) -> CandidateScore {
    CandidateEvaluator::new(frame, reference)?.evaluate(threshold)
}
