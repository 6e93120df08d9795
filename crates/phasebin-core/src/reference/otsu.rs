use crate::binarize::binarize;
use crate::consts::OTSU_HISTOGRAM_BINS;
use crate::frame::Frame;

/// A histogram-based binarization, kept only for side-by-side reporting.
#[derive(Clone, Debug)]
pub struct ReferenceBinarization {
    pub threshold: u8,
    pub binarized: Frame,
}

/// 256-bin intensity histogram.
pub fn histogram(frame: &Frame) -> [u64; OTSU_HISTOGRAM_BINS] {
    let mut hist = [0u64; OTSU_HISTOGRAM_BINS];
    for &v in frame.data.iter() {
        hist[v as usize] += 1;
    }
    hist
}

/// Otsu's thresholding: the level that maximizes between-class variance.
///
/// Pixels `<= threshold` form the background class. Returns 0 for a
/// frame with a single intensity level.
pub fn otsu_threshold(frame: &Frame) -> u8 {
    let hist = histogram(frame);
    let total = frame.data.len() as f64;

    let mut sum_all: f64 = 0.0;
    for (i, &count) in hist.iter().enumerate() {
        sum_all += i as f64 * count as f64;
    }

    let mut weight_bg: f64 = 0.0;
    let mut sum_bg: f64 = 0.0;
    let mut best_variance = 0.0_f64;
    let mut best_level = 0usize;

    for (i, &count) in hist.iter().enumerate() {
        weight_bg += count as f64;
        if weight_bg == 0.0 {
            continue;
        }
        let weight_fg = total - weight_bg;
        if weight_fg == 0.0 {
            break;
        }
        sum_bg += i as f64 * count as f64;
        let mean_bg = sum_bg / weight_bg;
        let mean_fg = (sum_all - sum_bg) / weight_fg;
        let between_variance = weight_bg * weight_fg * (mean_bg - mean_fg).powi(2);

        if between_variance > best_variance {
            best_variance = between_variance;
            best_level = i;
        }
    }

    best_level as u8
}

/// Otsu threshold plus the frame binarized at it.
pub fn otsu_binarize(frame: &Frame) -> ReferenceBinarization {
    let threshold = otsu_threshold(frame);
    ReferenceBinarization {
        threshold,
        binarized: binarize(frame, threshold as i32),
    }
}
