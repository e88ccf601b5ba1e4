// ABOUTME: Unit tests for per-day workout summarization
// ABOUTME: Validates item grouping, first-appearance ordering, and invariants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use lift_intelligence::prelude::*;
use uuid::Uuid;

mod common;
use common::{date, set_in_record};

const EPSILON: f64 = 1e-6;

#[test]
fn test_groups_sets_by_exercise_item() {
    let record_id = Uuid::new_v4();
    let bench = Uuid::new_v4();
    let row = Uuid::new_v4();
    let records = vec![
        set_in_record(record_id, bench, "Bench Press", "2025-01-06", MuscleCategory::Chest, 1, 10, 100.0),
        set_in_record(record_id, row, "Barbell Row", "2025-01-06", MuscleCategory::Back, 1, 8, 80.0),
        set_in_record(record_id, bench, "Bench Press", "2025-01-06", MuscleCategory::Chest, 2, 8, 105.0),
    ];

    let summary = summarize_day(
        record_id,
        date("2025-01-06"),
        "heavy upper day",
        WorkoutIntensity::Hard,
        &records,
    )
    .unwrap();

    assert_eq!(summary.total_sets, 3);
    assert!((summary.total_volume - (1000.0 + 640.0 + 840.0)).abs() < EPSILON);
    assert_eq!(summary.items.len(), 2);

    // first-appearance order, not sorted
    assert_eq!(summary.items[0].exercise_name, "Bench Press");
    assert_eq!(summary.items[0].set_count, 2);
    assert!((summary.items[0].volume - 1840.0).abs() < EPSILON);
    assert_eq!(summary.items[1].exercise_name, "Barbell Row");
    assert_eq!(summary.items[1].set_count, 1);
}

#[test]
fn test_item_sums_reconcile_with_day_totals() {
    let record_id = Uuid::new_v4();
    let records: Vec<_> = (1..=5)
        .map(|n| {
            set_in_record(
                record_id,
                Uuid::new_v4(),
                "Squat",
                "2025-01-06",
                MuscleCategory::Leg,
                n,
                5,
                100.0 + f64::from(n),
            )
        })
        .collect();

    let summary = summarize_day(
        record_id,
        date("2025-01-06"),
        "",
        WorkoutIntensity::Normal,
        &records,
    )
    .unwrap();

    let item_sets: u32 = summary.items.iter().map(|i| i.set_count).sum();
    let item_volume: f64 = summary.items.iter().map(|i| i.volume).sum();
    assert_eq!(item_sets, summary.total_sets);
    assert!((item_volume - summary.total_volume).abs() < EPSILON);
}

#[test]
fn test_empty_day_yields_zero_totals() {
    let summary = summarize_day(
        Uuid::new_v4(),
        date("2025-01-06"),
        "rest day logged by mistake",
        WorkoutIntensity::Easy,
        &[],
    )
    .unwrap();

    assert_eq!(summary.total_sets, 0);
    assert!(summary.total_volume.abs() < EPSILON);
    assert!(summary.items.is_empty());
}

#[test]
fn test_record_from_another_day_is_rejected() {
    let record_id = Uuid::new_v4();
    let records = vec![set_in_record(
        record_id,
        Uuid::new_v4(),
        "Bench Press",
        "2025-01-07",
        MuscleCategory::Chest,
        1,
        10,
        100.0,
    )];

    let err = summarize_day(
        record_id,
        date("2025-01-06"),
        "",
        WorkoutIntensity::Normal,
        &records,
    )
    .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvariantViolation);
}

#[test]
fn test_conflicting_exercise_names_for_one_item_are_rejected() {
    let record_id = Uuid::new_v4();
    let item = Uuid::new_v4();
    let records = vec![
        set_in_record(record_id, item, "Bench Press", "2025-01-06", MuscleCategory::Chest, 1, 10, 100.0),
        set_in_record(record_id, item, "Incline Press", "2025-01-06", MuscleCategory::Chest, 2, 10, 80.0),
    ];

    let err = summarize_day(
        record_id,
        date("2025-01-06"),
        "",
        WorkoutIntensity::Normal,
        &records,
    )
    .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvariantViolation);
}
