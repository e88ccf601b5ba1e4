// ABOUTME: Weekly training-load aggregation from per-set exercise records
// ABOUTME: Folds records into per-ISO-week volume, set, rep, and best-lift totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculators::{estimated_one_rep_max, set_volume};
use crate::errors::AppResult;
use crate::models::ExerciseSetRecord;
use crate::week_bucket::iso_week_start;

/// Aggregated training load for one ISO week
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekAgg {
    /// Monday starting this week
    pub week_start: NaiveDate,
    /// Sum of reps x weight across all sets in the week
    pub total_volume: f64,
    /// Number of sets performed
    pub total_sets: u32,
    /// Sum of repetitions
    pub total_reps: u32,
    /// Heaviest single-set weight in kilograms
    pub top_set_weight: f64,
    /// Best Epley one-rep-max estimate; `None` when no set had reps >= 1
    pub best_est_one_rep_max: Option<f64>,
}

impl WeekAgg {
    /// An empty aggregate for a week with no recorded sets
    #[must_use]
    pub const fn empty(week_start: NaiveDate) -> Self {
        Self {
            week_start,
            total_volume: 0.0,
            total_sets: 0,
            total_reps: 0,
            top_set_weight: 0.0,
            best_est_one_rep_max: None,
        }
    }

    fn accumulate(&mut self, record: &ExerciseSetRecord) {
        self.total_volume += set_volume(record.reps, record.weight_kg);
        self.total_sets += 1;
        self.total_reps += record.reps;
        if record.weight_kg > self.top_set_weight {
            self.top_set_weight = record.weight_kg;
        }
        if let Some(estimate) = estimated_one_rep_max(record.reps, record.weight_kg) {
            let best = self
                .best_est_one_rep_max
                .map_or(estimate, |current| current.max(estimate));
            self.best_est_one_rep_max = Some(best);
        }
    }
}

/// Fold a collection of set records into per-week aggregates
///
/// Records may arrive in any order; output keys are week-start Mondays in
/// chronological order. Weeks without records are absent — see
/// [`zero_fill_weeks`] for callers that need a dense series.
///
/// # Errors
/// Returns `AppError::InvariantViolation` when a record fails boundary
/// validation.
pub fn aggregate_weekly(
    records: &[ExerciseSetRecord],
) -> AppResult<BTreeMap<NaiveDate, WeekAgg>> {
    let mut weeks: BTreeMap<NaiveDate, WeekAgg> = BTreeMap::new();

    for record in records {
        record.validate()?;
        let week_start = iso_week_start(record.date);
        weeks
            .entry(week_start)
            .or_insert_with(|| WeekAgg::empty(week_start))
            .accumulate(record);
    }

    debug!(
        record_count = records.len(),
        week_count = weeks.len(),
        "aggregated weekly training load"
    );
    Ok(weeks)
}

/// Expand a sparse weekly aggregation into a dense series over a window
///
/// Every week between the weeks containing `window_start` and `window_end`
/// (inclusive) appears in the output, missing ones as empty aggregates.
/// Chart callers use this; the analytics paths keep the sparse form.
#[must_use]
pub fn zero_fill_weeks(
    weeks: &BTreeMap<NaiveDate, WeekAgg>,
    window_start: NaiveDate,
    window_end: NaiveDate,
) -> Vec<WeekAgg> {
    let mut filled = Vec::new();
    let last = iso_week_start(window_end.max(window_start));
    let mut cursor = iso_week_start(window_start.min(window_end));

    while cursor <= last {
        let agg = weeks
            .get(&cursor)
            .cloned()
            .unwrap_or_else(|| WeekAgg::empty(cursor));
        filled.push(agg);
        match cursor.checked_add_days(Days::new(7)) {
            Some(next) => cursor = next,
            None => break,
        }
    }

    filled
}
