// ABOUTME: Rolling-window activity summarization over recent set records
// ABOUTME: Computes session counts, weekly frequency, and per-category volume
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculators::set_volume;
use crate::errors::{AppError, AppResult};
use crate::models::{ExerciseSetRecord, MuscleCategory};

/// Summary of training activity over a lookback window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentStats {
    /// Number of distinct workout days in the window
    pub session_count: u32,
    /// Session count divided by elapsed weeks
    pub avg_sessions_per_week: f64,
    /// Total sets across the window
    pub total_sets: u32,
    /// Total volume across the window
    pub total_volume: f64,
    /// Summed volume per category; zero-volume categories are absent
    pub volume_by_category: HashMap<MuscleCategory, f64>,
}

impl RecentStats {
    /// Stats for a window with no recorded training
    #[must_use]
    pub fn empty() -> Self {
        Self {
            session_count: 0,
            avg_sessions_per_week: 0.0,
            total_sets: 0,
            total_volume: 0.0,
            volume_by_category: HashMap::new(),
        }
    }
}

/// Summarize records over a lookback window
///
/// `elapsed_weeks` is the window length in weeks, partial weeks rounded up
/// by the caller; it must be at least 1.
///
/// # Errors
/// Returns `AppError::InvariantViolation` when `elapsed_weeks` is zero or a
/// record fails boundary validation.
pub fn summarize_recent(
    records: &[ExerciseSetRecord],
    elapsed_weeks: u32,
) -> AppResult<RecentStats> {
    if elapsed_weeks == 0 {
        return Err(AppError::invariant_violation(
            "lookback window must span at least one week",
        ));
    }

    if records.is_empty() {
        return Ok(RecentStats::empty());
    }

    let mut session_days: HashSet<NaiveDate> = HashSet::new();
    let mut volume_by_category: HashMap<MuscleCategory, f64> = HashMap::new();
    let mut total_sets: u32 = 0;
    let mut total_volume = 0.0;

    for record in records {
        record.validate()?;
        session_days.insert(record.date);
        let volume = set_volume(record.reps, record.weight_kg);
        total_sets += 1;
        total_volume += volume;
        *volume_by_category
            .entry(record.category.clone())
            .or_insert(0.0) += volume;
    }

    // Categories whose sets carried no load add nothing to the breakdown.
    volume_by_category.retain(|_, volume| *volume > 0.0);

    let session_count = session_days.len() as u32;
    let avg_sessions_per_week = f64::from(session_count) / f64::from(elapsed_weeks);

    debug!(
        session_count,
        elapsed_weeks, total_sets, "summarized recent activity window"
    );

    Ok(RecentStats {
        session_count,
        avg_sessions_per_week,
        total_sets,
        total_volume,
        volume_by_category,
    })
}
