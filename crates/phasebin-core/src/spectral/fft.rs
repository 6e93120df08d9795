use std::sync::Arc;

use ndarray::{Array2, ArrayView2};
use num_complex::Complex;
use rustfft::{Fft, FftPlanner};

/// Forward 2-D FFT plans for one grid shape.
///
/// Plans are immutable after construction and shared freely between threads.
#[derive(Clone)]
pub struct Fft2d {
    rows: usize,
    cols: usize,
    fft_row: Arc<dyn Fft<f64>>,
    fft_col: Arc<dyn Fft<f64>>,
}

impl Fft2d {
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut planner = FftPlanner::new();
        let fft_row = planner.plan_fft_forward(cols);
        let fft_col = planner.plan_fft_forward(rows);
        Self {
            rows,
            cols,
            fft_row,
            fft_col,
        }
    }

    pub fn dim(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Full-grid forward transform: row-wise FFT, then column-wise FFT.
    ///
    /// No windowing and no padding. `data` must have the planned shape.
    pub fn forward(&self, data: ArrayView2<'_, u8>) -> Array2<Complex<f64>> {
        let (h, w) = (self.rows, self.cols);
        debug_assert_eq!(data.dim(), (h, w));

        // Row-major buffer: each chunk of `w` values is one row.
        let mut by_row: Vec<Complex<f64>> =
            data.iter().map(|&v| Complex::new(v as f64, 0.0)).collect();
        self.fft_row.process(&mut by_row);

        // Column-major buffer: each chunk of `h` values is one column.
        let mut by_col = vec![Complex::new(0.0, 0.0); h * w];
        for row in 0..h {
            for col in 0..w {
                by_col[col * h + row] = by_row[row * w + col];
            }
        }
        self.fft_col.process(&mut by_col);

        Array2::from_shape_fn((h, w), |(row, col)| by_col[col * h + row])
    }
}

impl std::fmt::Debug for Fft2d {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fft2d")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .finish()
    }
}
