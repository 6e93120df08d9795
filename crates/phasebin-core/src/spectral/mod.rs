//! Spectral encoding: the phase signature of a frame's 2-D DFT.

pub mod fft;

use std::f64::consts::PI;

use ndarray::{Array2, ArrayView2};
use num_complex::Complex;

use crate::consts::PHASE_MAGNITUDE_EPSILON;
use crate::error::{PhasebinError, Result};
use crate::frame::{Frame, PhaseMap};

pub use fft::Fft2d;

/// Encodes frames of one fixed shape into phase maps, reusing FFT plans.
#[derive(Clone, Debug)]
pub struct SpectralEncoder {
    plan: Fft2d,
}

impl SpectralEncoder {
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(PhasebinError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            plan: Fft2d::new(rows, cols),
        })
    }

    /// Encoder planned for the shape of `frame`.
    pub fn for_frame(frame: &Frame) -> Result<Self> {
        Self::new(frame.rows(), frame.cols())
    }

    pub fn dim(&self) -> (usize, usize) {
        self.plan.dim()
    }

    /// Phase map of `frame`, which must match the planned shape.
    pub fn encode(&self, frame: &Frame) -> Result<PhaseMap> {
        self.encode_view(frame.data.view())
    }

    pub fn encode_view(&self, data: ArrayView2<'_, u8>) -> Result<PhaseMap> {
        if data.dim() != self.plan.dim() {
            let (h, w) = self.plan.dim();
            let (th, tw) = data.dim();
            return Err(PhasebinError::InvalidInput(format!(
                "Array size mismatch: {}x{} vs planned {}x{}",
                th, tw, h, w
            )));
        }
        Ok(self.encode_planned(data))
    }

    /// `encode_view` for callers that already checked the shape.
    pub(crate) fn encode_planned(&self, data: ArrayView2<'_, u8>) -> PhaseMap {
        debug_assert_eq!(data.dim(), self.plan.dim());
        phase_angles(&self.plan.forward(data))
    }
}

/// Compute the phase map of a frame's full-grid 2-D DFT.
pub fn encode_phase(frame: &Frame) -> Result<PhaseMap> {
    frame.validate()?;
    SpectralEncoder::for_frame(frame)?.encode(frame)
}

/// Element-wise phase of a spectrum, in (-π, π].
///
/// Coefficients that are zero up to rounding noise get phase 0.0, so the
/// phase of an exactly-zero coefficient does not depend on the sign of the
/// FFT's residual error. For the same reason an imaginary part below the
/// noise floor is treated as zero: a real negative coefficient always maps
/// to π rather than to either side of the branch cut.
pub fn phase_angles(spectrum: &Array2<Complex<f64>>) -> PhaseMap {
    let peak = spectrum.iter().map(|c| c.norm()).fold(0.0_f64, f64::max);
    let floor = peak * PHASE_MAGNITUDE_EPSILON;

    spectrum.mapv(|c| {
        if c.norm() <= floor {
            0.0
        } else if c.im.abs() <= floor {
            if c.re < 0.0 {
                PI
            } else {
                0.0
            }
        } else {
            fold_angle(c.arg())
        }
    })
}

/// Map -π onto π so angles lie in (-π, π].
fn fold_angle(angle: f64) -> f64 {
    if angle <= -PI {
        PI
    } else {
        angle
    }
}
