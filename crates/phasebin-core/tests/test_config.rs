use phasebin_core::consts::{
    DEFAULT_FALLBACK_THRESHOLD, DEFAULT_THRESHOLD_HIGH, DEFAULT_THRESHOLD_LOW,
    DEFAULT_THRESHOLD_STEP,
};
use phasebin_core::error::PhasebinError;
use phasebin_core::search::{SearchConfig, SearchStatus};

#[test]
fn test_default_bounds() {
    let config = SearchConfig::default();
    assert_eq!(config.low, DEFAULT_THRESHOLD_LOW);
    assert_eq!(config.high, DEFAULT_THRESHOLD_HIGH);
    assert_eq!(config.step, DEFAULT_THRESHOLD_STEP);
    assert_eq!(config.fallback_threshold, DEFAULT_FALLBACK_THRESHOLD);
    assert!(config.parallel);
}

#[test]
fn test_default_candidates() {
    let candidates = SearchConfig::default().candidates().unwrap();
    assert_eq!(candidates.len(), 47);
    assert_eq!(candidates.first(), Some(&10));
    assert_eq!(candidates.last(), Some(&240));
}

#[test]
fn test_candidate_count_matches_candidates() {
    for (low, high, step) in [(10, 245, 5), (10, 15, 5), (0, 256, 32), (3, 200, 7), (-20, 7, 9)] {
        let config = SearchConfig::with_bounds(low, high, step);
        assert_eq!(
            config.candidate_count(),
            config.candidates().unwrap().len(),
            "bounds {config}"
        );
    }
    assert_eq!(SearchConfig::with_bounds(100, 90, 5).candidate_count(), 0);
}

#[test]
fn test_validate_rejects_empty_ranges() {
    for (low, high, step) in [(100, 90, 5), (10, 10, 5), (10, 245, 0), (10, 245, -1)] {
        let err = SearchConfig::with_bounds(low, high, step).validate().unwrap_err();
        assert!(matches!(err, PhasebinError::EmptySearchSpace { .. }));
    }
}

#[test]
fn test_config_display() {
    assert_eq!(format!("{}", SearchConfig::default()), "[10, 245) step 5");
}

#[test]
fn test_config_toml_roundtrip() {
    let config = SearchConfig {
        low: 20,
        high: 200,
        step: 2,
        fallback_threshold: 127,
        parallel: false,
    };
    let text = toml::to_string_pretty(&config).unwrap();
    let parsed: SearchConfig = toml::from_str(&text).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_partial_toml_uses_defaults() {
    let parsed: SearchConfig = toml::from_str("step = 1\n").unwrap();
    assert_eq!(parsed.step, 1);
    assert_eq!(parsed.low, DEFAULT_THRESHOLD_LOW);
    assert_eq!(parsed.high, DEFAULT_THRESHOLD_HIGH);
    assert!(parsed.parallel);
}

#[test]
fn test_status_display() {
    assert_eq!(format!("{}", SearchStatus::Optimal), "Optimal");
    assert_eq!(
        format!("{}", SearchStatus::AllCandidatesInvalid),
        "All candidates invalid"
    );
    assert_eq!(format!("{}", SearchStatus::Partial), "Partial");
}
