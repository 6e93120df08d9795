use ndarray::{Array2, ArrayView2};

use crate::consts::{BINARY_HIGH, BINARY_LOW};
use crate::frame::Frame;

/// Binarize a frame: samples strictly above `threshold` become 255, the rest 0.
pub fn binarize(frame: &Frame, threshold: i32) -> Frame {
    Frame {
        data: binarize_array(frame.data.view(), threshold),
    }
}

pub fn binarize_array(data: ArrayView2<'_, u8>, threshold: i32) -> Array2<u8> {
    data.mapv(|v| {
        if i32::from(v) > threshold {
            BINARY_HIGH
        } else {
            BINARY_LOW
        }
    })
}

/// True when every sample is either 0 or 255.
pub fn is_binary(frame: &Frame) -> bool {
    frame
        .data
        .iter()
        .all(|&v| v == BINARY_LOW || v == BINARY_HIGH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        let frame = Frame::from_raw(1, 4, vec![99, 100, 101, 255]).unwrap();
        let out = binarize(&frame, 100);
        assert_eq!(out.data.as_slice().unwrap(), &[0, 0, 255, 255]);
    }

    #[test]
    fn out_of_range_thresholds() {
        let frame = Frame::from_raw(1, 3, vec![0, 128, 255]).unwrap();
        assert!(binarize(&frame, -1).data.iter().all(|&v| v == BINARY_HIGH));
        assert!(binarize(&frame, 255).data.iter().all(|&v| v == BINARY_LOW));
    }

    #[test]
    fn binary_frames_are_fixed_points() {
        let frame = Frame::from_raw(2, 2, vec![0, 255, 255, 0]).unwrap();
        assert!(is_binary(&frame));
        for t in [0, 127, 254] {
            assert_eq!(binarize(&frame, t), frame);
        }
        assert!(!is_binary(&Frame::filled(1, 1, 7).unwrap()));
    }
}
