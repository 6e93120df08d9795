//! Reference binarizers, reported next to the phase threshold for comparison.

pub mod otsu;

pub use otsu::{otsu_binarize, otsu_threshold, ReferenceBinarization};
