mod common;

use approx::assert_relative_eq;
use ndarray::Array2;

use phasebin_core::error::InvalidScore;
use phasebin_core::evaluate::{evaluate_candidate, CandidateEvaluator};
use phasebin_core::frame::Frame;
use phasebin_core::spectral::{encode_phase, SpectralEncoder};

use common::{binary_4x4, disc_on_ramp, noise_frame, two_level_frame};

#[test]
fn test_binary_frame_matches_itself() {
    let frame = binary_4x4();
    let reference = encode_phase(&frame).unwrap();
    let score = evaluate_candidate(&frame, &reference, 127).unwrap();
    assert_relative_eq!(score, 1.0, epsilon = 1e-12);
}

#[test]
fn test_two_level_frame_scores_one_between_levels() {
    // Binarizing between the levels is an affine map of the frame, which only
    // changes the DC magnitude, so every phase is preserved.
    let frame = two_level_frame(16, 16, 40, 200);
    let reference = encode_phase(&frame).unwrap();
    for threshold in [40, 100, 199] {
        let score = evaluate_candidate(&frame, &reference, threshold).unwrap();
        assert_relative_eq!(score, 1.0, epsilon = 1e-6);
    }
}

#[test]
fn test_uniform_frame_is_invalid_everywhere() {
    let frame = Frame::filled(8, 8, 100).unwrap();
    let reference = encode_phase(&frame).unwrap();
    for threshold in [0, 50, 99, 100, 150, 254] {
        assert_eq!(
            evaluate_candidate(&frame, &reference, threshold),
            Err(InvalidScore::ZeroVariance),
            "threshold {threshold}"
        );
    }
}

#[test]
fn test_threshold_outside_intensity_range_is_invalid() {
    let frame = two_level_frame(12, 12, 40, 200);
    let reference = encode_phase(&frame).unwrap();
    // Below the darkest sample: all 255. At or above the brightest: all 0.
    assert_eq!(
        evaluate_candidate(&frame, &reference, 39),
        Err(InvalidScore::ZeroVariance)
    );
    assert_eq!(
        evaluate_candidate(&frame, &reference, 200),
        Err(InvalidScore::ZeroVariance)
    );
    assert_eq!(
        evaluate_candidate(&frame, &reference, -5),
        Err(InvalidScore::ZeroVariance)
    );
    assert_eq!(
        evaluate_candidate(&frame, &reference, 1000),
        Err(InvalidScore::ZeroVariance)
    );
}

#[test]
fn test_scores_lie_in_correlation_range() {
    let frame = disc_on_ramp(24, 32);
    let reference = encode_phase(&frame).unwrap();
    for threshold in (0..256).step_by(15) {
        if let Ok(score) = evaluate_candidate(&frame, &reference, threshold) {
            assert!((-1.0..=1.0).contains(&score), "score {score} at {threshold}");
        }
    }
}

#[test]
fn test_reusable_evaluator_matches_free_function() {
    let frame = noise_frame(10, 14, 11);
    let reference = encode_phase(&frame).unwrap();
    let evaluator = CandidateEvaluator::new(&frame, &reference).unwrap();
    for threshold in [30, 90, 128, 200] {
        assert_eq!(
            evaluator.evaluate(threshold),
            evaluate_candidate(&frame, &reference, threshold)
        );
    }
}

#[test]
fn test_evaluation_does_not_mutate_frame() {
    let frame = noise_frame(6, 6, 12);
    let before = frame.clone();
    let reference = encode_phase(&frame).unwrap();
    let _ = evaluate_candidate(&frame, &reference, 128);
    assert_eq!(frame, before);
}

#[test]
fn test_mismatched_reference_shape_is_invalid() {
    let frame = noise_frame(4, 4, 13);
    let reference = Array2::<f64>::zeros((3, 3));
    assert_eq!(
        evaluate_candidate(&frame, &reference, 128),
        Err(InvalidScore::ShapeMismatch {
            expected: (4, 4),
            found: (3, 3)
        })
    );
}

#[test]
fn test_reference_with_same_count_but_other_shape_is_invalid() {
    let frame = noise_frame(4, 4, 13);
    let reference = encode_phase(&noise_frame(2, 8, 99)).unwrap();
    assert_eq!(
        evaluate_candidate(&frame, &reference, 128),
        Err(InvalidScore::ShapeMismatch {
            expected: (4, 4),
            found: (2, 8)
        })
    );
    assert!(matches!(
        CandidateEvaluator::new(&frame, &reference),
        Err(InvalidScore::ShapeMismatch { .. })
    ));
}

#[test]
fn test_encoder_planned_for_other_shape_is_rejected() {
    let frame = noise_frame(4, 4, 14);
    let reference = encode_phase(&frame).unwrap();
    let encoder = SpectralEncoder::new(2, 8).unwrap();
    assert!(matches!(
        CandidateEvaluator::with_encoder(&frame, &reference, encoder),
        Err(InvalidScore::ShapeMismatch {
            expected: (4, 4),
            found: (2, 8)
        })
    ));
}

#[test]
fn test_empty_frame_is_invalid() {
    let frame = Frame {
        data: Array2::<u8>::zeros((0, 0)),
    };
    let reference = Array2::<f64>::zeros((0, 0));
    assert_eq!(
        evaluate_candidate(&frame, &reference, 10),
        Err(InvalidScore::EmptyFrame)
    );
}
