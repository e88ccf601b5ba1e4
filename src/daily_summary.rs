// ABOUTME: Per-day workout summarization grouped by exercise item
// ABOUTME: Produces day totals plus per-item set counts and volumes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculators::set_volume;
use crate::errors::{AppError, AppResult};
use crate::models::{ExerciseSetRecord, MuscleCategory, WorkoutIntensity};

/// Tolerance for reconciling per-item sums against day totals
const RECONCILE_EPSILON: f64 = 1e-6;

/// Per-exercise-item rollup within one workout day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseItemSummary {
    /// Exercise item identifier
    pub item_id: Uuid,
    /// Exercise display name
    pub exercise_name: String,
    /// Muscle category of the exercise
    pub category: MuscleCategory,
    /// Sets performed for this exercise
    pub set_count: u32,
    /// Volume accumulated by this exercise
    pub volume: f64,
}

/// Summary of one workout day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayRecordSummary {
    /// Identifier of the day's workout record
    pub record_id: Uuid,
    /// Workout date
    pub date: NaiveDate,
    /// Free-text memo attached to the day
    pub memo: String,
    /// Subjective intensity tag for the day
    pub intensity: WorkoutIntensity,
    /// Total sets across all exercises
    pub total_sets: u32,
    /// Total volume across all exercises
    pub total_volume: f64,
    /// Per-exercise rollups in first-appearance order
    pub items: Vec<ExerciseItemSummary>,
}

/// Summarize one workout day's records
///
/// `records` must all belong to the day identified by `record_id`/`date`;
/// items appear in the order their first set occurs in the input, not
/// sorted. An empty day yields zero totals and no items.
///
/// # Errors
/// Returns `AppError::InvariantViolation` when a record belongs to another
/// day or record, when one item id carries conflicting exercise names, or
/// when per-item sums fail to reconcile with the day totals.
pub fn summarize_day(
    record_id: Uuid,
    date: NaiveDate,
    memo: impl Into<String>,
    intensity: WorkoutIntensity,
    records: &[ExerciseSetRecord],
) -> AppResult<DayRecordSummary> {
    let mut items: Vec<ExerciseItemSummary> = Vec::new();
    let mut index_by_item: HashMap<Uuid, usize> = HashMap::new();
    let mut total_sets: u32 = 0;
    let mut total_volume = 0.0;

    for record in records {
        record.validate()?;
        if record.record_id != record_id || record.date != date {
            return Err(AppError::invariant_violation(format!(
                "set {} of {} belongs to record {} on {}, not record {} on {}",
                record.set_number,
                record.exercise_name,
                record.record_id,
                record.date,
                record_id,
                date
            )));
        }

        let volume = set_volume(record.reps, record.weight_kg);
        total_sets += 1;
        total_volume += volume;

        if let Some(&index) = index_by_item.get(&record.item_id) {
            let item = &mut items[index];
            if item.exercise_name != record.exercise_name {
                return Err(AppError::invariant_violation(format!(
                    "item {} named both '{}' and '{}'",
                    record.item_id, item.exercise_name, record.exercise_name
                )));
            }
            item.set_count += 1;
            item.volume += volume;
        } else {
            index_by_item.insert(record.item_id, items.len());
            items.push(ExerciseItemSummary {
                item_id: record.item_id,
                exercise_name: record.exercise_name.clone(),
                category: record.category.clone(),
                set_count: 1,
                volume,
            });
        }
    }

    let item_sets: u32 = items.iter().map(|item| item.set_count).sum();
    let item_volume: f64 = items.iter().map(|item| item.volume).sum();
    if item_sets != total_sets || (item_volume - total_volume).abs() > RECONCILE_EPSILON {
        return Err(AppError::invariant_violation(format!(
            "day totals do not reconcile: {item_sets}/{total_sets} sets, \
             {item_volume}/{total_volume} volume"
        )));
    }

    Ok(DayRecordSummary {
        record_id,
        date,
        memo: memo.into(),
        intensity,
        total_sets,
        total_volume,
        items,
    })
}
