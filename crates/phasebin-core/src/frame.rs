use ndarray::Array2;

use crate::error::{PhasebinError, Result};

/// Phase angles (radians, in (-π, π]) of a frame's 2-D spectrum.
pub type PhaseMap = Array2<f64>;

/// A single-channel 8-bit grayscale frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// Pixel data, row-major, shape = (rows, cols)
    pub data: Array2<u8>,
}

impl Frame {
    /// Wrap an existing array, rejecting empty shapes.
    pub fn new(data: Array2<u8>) -> Result<Self> {
        let (rows, cols) = data.dim();
        if rows == 0 || cols == 0 {
            return Err(PhasebinError::InvalidDimensions { rows, cols });
        }
        Ok(Self { data })
    }

    /// Build a frame from a dense row-major sample buffer.
    pub fn from_raw(rows: usize, cols: usize, samples: Vec<u8>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(PhasebinError::InvalidDimensions { rows, cols });
        }
        let expected = rows
            .checked_mul(cols)
            .ok_or(PhasebinError::InvalidDimensions { rows, cols })?;
        if samples.len() != expected {
            return Err(PhasebinError::InvalidInput(format!(
                "buffer holds {} samples, expected {}x{} = {}",
                samples.len(),
                rows,
                cols,
                expected
            )));
        }
        let data = Array2::from_shape_vec((rows, cols), samples)
            .map_err(|e| PhasebinError::InvalidInput(e.to_string()))?;
        Ok(Self { data })
    }

    /// Build a frame from a closure over `(row, col)`.
    pub fn from_fn(rows: usize, cols: usize, f: impl FnMut((usize, usize)) -> u8) -> Result<Self> {
        Self::new(Array2::from_shape_fn((rows, cols), f))
    }

    /// A frame where every sample equals `value`.
    pub fn filled(rows: usize, cols: usize, value: u8) -> Result<Self> {
        Self::new(Array2::from_elem((rows, cols), value))
    }

    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    pub fn width(&self) -> usize {
        self.cols()
    }

    pub fn height(&self) -> usize {
        self.rows()
    }

    /// Fail if the frame has an empty shape.
    ///
    /// `data` is public, so a frame can be reshaped after construction.
    pub fn validate(&self) -> Result<()> {
        let (rows, cols) = self.data.dim();
        if rows == 0 || cols == 0 {
            return Err(PhasebinError::InvalidDimensions { rows, cols });
        }
        Ok(())
    }

    /// Min, max and mean intensity.
    pub fn intensity_stats(&self) -> IntensityStats {
        let mut min = u8::MAX;
        let mut max = u8::MIN;
        let mut sum = 0u64;
        for &v in self.data.iter() {
            min = min.min(v);
            max = max.max(v);
            sum += v as u64;
        }
        let n = self.data.len();
        let mean = if n == 0 { 0.0 } else { sum as f64 / n as f64 };
        IntensityStats { min, max, mean }
    }
}

/// Summary statistics of a frame's samples.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntensityStats {
    pub min: u8,
    pub max: u8,
    pub mean: f64,
}
