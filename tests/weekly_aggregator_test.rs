// ABOUTME: Unit tests for weekly training-load aggregation
// ABOUTME: Validates bucketing, running maxima, volume conservation, and zero-fill
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use lift_intelligence::prelude::*;

mod common;
use common::{date, set_on};

const EPSILON: f64 = 1e-6;

#[test]
fn test_monday_scenario() {
    let records = vec![
        set_on("2025-01-06", MuscleCategory::Chest, 10, 100.0),
        set_on("2025-01-06", MuscleCategory::Chest, 8, 105.0),
    ];

    let weeks = aggregate_weekly(&records).unwrap();
    assert_eq!(weeks.len(), 1);

    let agg = weeks.get(&date("2025-01-06")).unwrap();
    assert!((agg.total_volume - 1840.0).abs() < EPSILON);
    assert_eq!(agg.total_sets, 2);
    assert_eq!(agg.total_reps, 18);
    assert!((agg.top_set_weight - 105.0).abs() < EPSILON);
    // max(100 * 4/3, 105 * 38/30) = 133.33...
    let best = agg.best_est_one_rep_max.unwrap();
    assert!((best - 100.0 * (1.0 + 10.0 / 30.0)).abs() < EPSILON);
}

#[test]
fn test_total_volume_is_conserved_across_weeks() {
    let records = vec![
        set_on("2025-01-06", MuscleCategory::Chest, 10, 100.0),
        set_on("2025-01-09", MuscleCategory::Back, 8, 80.0),
        set_on("2025-01-14", MuscleCategory::Leg, 5, 140.0),
        set_on("2025-02-03", MuscleCategory::Shoulder, 12, 40.0),
        set_on("2025-02-05", MuscleCategory::Arm, 0, 20.0),
    ];

    let per_set_total: f64 = records
        .iter()
        .map(|r| set_volume(r.reps, r.weight_kg))
        .sum();
    let weeks = aggregate_weekly(&records).unwrap();
    let per_week_total: f64 = weeks.values().map(|w| w.total_volume).sum();

    assert!((per_week_total - per_set_total).abs() < EPSILON);
}

#[test]
fn test_weeks_without_records_are_absent() {
    let records = vec![
        set_on("2025-01-06", MuscleCategory::Chest, 10, 100.0),
        set_on("2025-01-20", MuscleCategory::Chest, 10, 100.0),
    ];

    let weeks = aggregate_weekly(&records).unwrap();
    assert_eq!(weeks.len(), 2);
    assert!(!weeks.contains_key(&date("2025-01-13")));
}

#[test]
fn test_zero_rep_sets_count_toward_volume_but_not_best_estimate() {
    let records = vec![set_on("2025-01-06", MuscleCategory::Leg, 0, 60.0)];

    let weeks = aggregate_weekly(&records).unwrap();
    let agg = weeks.get(&date("2025-01-06")).unwrap();
    assert_eq!(agg.total_sets, 1);
    assert!(agg.total_volume.abs() < EPSILON);
    assert!((agg.top_set_weight - 60.0).abs() < EPSILON);
    assert!(agg.best_est_one_rep_max.is_none());
}

#[test]
fn test_empty_input_yields_empty_map() {
    let weeks = aggregate_weekly(&[]).unwrap();
    assert!(weeks.is_empty());
}

#[test]
fn test_invalid_record_is_rejected() {
    let mut record = set_on("2025-01-06", MuscleCategory::Chest, 10, 100.0);
    record.weight_kg = -5.0;

    let err = aggregate_weekly(std::slice::from_ref(&record)).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvariantViolation);
}

#[test]
fn test_zero_fill_produces_dense_series() {
    let records = vec![
        set_on("2025-01-06", MuscleCategory::Chest, 10, 100.0),
        set_on("2025-01-22", MuscleCategory::Back, 8, 80.0),
    ];
    let weeks = aggregate_weekly(&records).unwrap();

    let filled = zero_fill_weeks(&weeks, date("2025-01-06"), date("2025-01-26"));
    assert_eq!(filled.len(), 3);
    assert_eq!(filled[0].week_start, date("2025-01-06"));
    assert_eq!(filled[1].week_start, date("2025-01-13"));
    assert_eq!(filled[1].total_sets, 0);
    assert!(filled[1].total_volume.abs() < EPSILON);
    assert_eq!(filled[2].week_start, date("2025-01-20"));
    assert_eq!(filled[2].total_sets, 1);
}
