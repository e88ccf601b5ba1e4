// ABOUTME: Unit tests for analysis configuration
// ABOUTME: Validates defaults, validation rules, and environment overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use lift_intelligence::analysis_config::AnalysisConfig;
use lift_intelligence::models::MuscleCategory;
use serial_test::serial;

#[test]
fn test_default_config_validates() {
    let config = AnalysisConfig::default();
    assert!(config.validate().is_ok());
}

#[test]
fn test_default_thresholds() {
    let config = AnalysisConfig::default();
    assert!((config.risk.volume_spike_ratio - 1.5).abs() < 1e-9);
    assert!((config.risk.min_sessions_per_week - 2.0).abs() < 1e-9);
    assert_eq!(config.share_precision, 1);
    assert!(config
        .risk
        .expected_categories
        .contains(&MuscleCategory::Leg));
    // arm volume accrues through compound work; not expected by default
    assert!(!config
        .risk
        .expected_categories
        .contains(&MuscleCategory::Arm));
}

#[test]
fn test_spike_ratio_must_exceed_one() {
    let mut config = AnalysisConfig::default();
    config.risk.volume_spike_ratio = 0.9;
    assert!(config.validate().is_err());
}

#[test]
fn test_recovery_frequency_cannot_exceed_default() {
    let mut config = AnalysisConfig::default();
    config.plan.recovery_frequency = 6;
    config.plan.default_frequency = 4;
    assert!(config.validate().is_err());
}

#[test]
fn test_frequency_bounds() {
    let mut config = AnalysisConfig::default();
    config.plan.default_frequency = 9;
    assert!(config.validate().is_err());
}

#[test]
#[serial]
fn test_environment_variable_override() {
    std::env::set_var("LIFT_SPIKE_RATIO", "1.8");
    std::env::set_var("LIFT_TARGET_SETS", "12");

    let config = AnalysisConfig::from_environment().unwrap();
    assert!((config.risk.volume_spike_ratio - 1.8).abs() < 1e-9);
    assert_eq!(config.plan.target_sets_per_muscle, 12);

    std::env::remove_var("LIFT_SPIKE_RATIO");
    std::env::remove_var("LIFT_TARGET_SETS");
}

#[test]
#[serial]
fn test_unparseable_environment_value_is_rejected() {
    std::env::set_var("LIFT_MIN_SESSIONS_PER_WEEK", "often");

    let result = AnalysisConfig::from_environment();
    assert!(result.is_err());

    std::env::remove_var("LIFT_MIN_SESSIONS_PER_WEEK");
}
