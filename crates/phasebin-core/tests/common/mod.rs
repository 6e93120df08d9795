#![allow(dead_code)]

use phasebin_core::frame::Frame;

/// An asymmetric 4x4 frame whose samples are all 0 or 255.
pub fn binary_4x4() -> Frame {
    #[rustfmt::skip]
    let samples = vec![
        255,   0,   0,   0,
        255, 255,   0,   0,
          0, 255,   0,   0,
          0,   0,   0, 255,
    ];
    Frame::from_raw(4, 4, samples).expect("valid 4x4 frame")
}

/// Frame with two intensity levels: a bright off-center blob on a dark background.
pub fn two_level_frame(rows: usize, cols: usize, dark: u8, bright: u8) -> Frame {
    Frame::from_fn(rows, cols, |(r, c)| {
        let in_blob = r >= rows / 4 && r < rows / 2 + 1 && c >= cols / 3 && c < cols - 1;
        if in_blob {
            bright
        } else {
            dark
        }
    })
    .expect("valid two-level frame")
}

/// Deterministic pseudo-random frame (LCG), covering the full 8-bit range.
pub fn noise_frame(rows: usize, cols: usize, seed: u32) -> Frame {
    let mut state = seed.wrapping_mul(2_654_435_761).wrapping_add(1);
    let mut samples = Vec::with_capacity(rows * cols);
    for _ in 0..rows * cols {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        samples.push((state >> 24) as u8);
    }
    Frame::from_raw(rows, cols, samples).expect("valid noise frame")
}

/// Bright disc plus a horizontal ramp, with mild deterministic noise.
pub fn disc_on_ramp(rows: usize, cols: usize) -> Frame {
    let noise = noise_frame(rows, cols, 7);
    let (cy, cx) = (rows as f64 * 0.45, cols as f64 * 0.55);
    let radius = rows.min(cols) as f64 * 0.3;
    Frame::from_fn(rows, cols, |(r, c)| {
        let ramp = 20.0 + 60.0 * c as f64 / cols as f64;
        let d = ((r as f64 - cy).powi(2) + (c as f64 - cx).powi(2)).sqrt();
        let base = if d < radius { 190.0 } else { ramp };
        let jitter = noise.data[[r, c]] as f64 / 255.0 * 16.0 - 8.0;
        (base + jitter).clamp(0.0, 255.0) as u8
    })
    .expect("valid disc frame")
}
