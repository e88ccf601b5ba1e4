// ABOUTME: Shared fixtures for lift-intelligence integration tests
// ABOUTME: Builders for exercise-set records with sensible defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(dead_code)]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use lift_intelligence::prelude::*;
use uuid::Uuid;

/// Parse a test date, panicking on typos in the fixture itself
pub fn date(s: &str) -> NaiveDate {
    parse_workout_date(s).unwrap()
}

/// A single set with fresh record/item ids
pub fn set_on(
    date_str: &str,
    category: MuscleCategory,
    reps: u32,
    weight_kg: f64,
) -> ExerciseSetRecord {
    ExerciseSetRecord {
        record_id: Uuid::new_v4(),
        item_id: Uuid::new_v4(),
        exercise_name: "Bench Press".into(),
        category,
        set_number: 1,
        reps,
        weight_kg,
        date: date(date_str),
    }
}

/// A set pinned to a specific day record and exercise item
pub fn set_in_record(
    record_id: Uuid,
    item_id: Uuid,
    exercise_name: &str,
    date_str: &str,
    category: MuscleCategory,
    set_number: u32,
    reps: u32,
    weight_kg: f64,
) -> ExerciseSetRecord {
    ExerciseSetRecord {
        record_id,
        item_id,
        exercise_name: exercise_name.into(),
        category,
        set_number,
        reps,
        weight_kg,
        date: date(date_str),
    }
}
