use std::path::Path;

use image::{GrayImage, ImageFormat};

use crate::error::{PhasebinError, Result};
use crate::frame::Frame;

/// Load any image file the `image` crate can decode as 8-bit grayscale.
pub fn load_gray(path: &Path) -> Result<Frame> {
    let img = image::open(path)?;
    frame_from_gray(&img.to_luma8())
}

/// Convert an 8-bit luma buffer into a frame.
pub fn frame_from_gray(gray: &GrayImage) -> Result<Frame> {
    let (w, h) = gray.dimensions();
    Frame::from_raw(h as usize, w as usize, gray.as_raw().clone())
}

/// Convert a frame into an 8-bit luma buffer.
pub fn frame_to_gray(frame: &Frame) -> Result<GrayImage> {
    let h = frame.rows();
    let w = frame.cols();
    let pixels: Vec<u8> = frame.data.iter().copied().collect();
    GrayImage::from_raw(w as u32, h as u32, pixels)
        .ok_or(PhasebinError::InvalidDimensions { rows: h, cols: w })
}

/// Save a frame as 8-bit grayscale PNG.
pub fn save_png(frame: &Frame, path: &Path) -> Result<()> {
    frame_to_gray(frame)?.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save a frame, choosing the format from the file extension (PNG if unknown).
pub fn save_image(frame: &Frame, path: &Path) -> Result<()> {
    match ImageFormat::from_path(path) {
        Ok(format) => {
            frame_to_gray(frame)?.save_with_format(path, format)?;
            Ok(())
        }
        Err(_) => save_png(frame, path),
    }
}

