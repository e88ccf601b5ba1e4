// ABOUTME: Personal-record trend tracking over weekly best one-rep-max estimates
// ABOUTME: Projects the weekly aggregation into a sparse chronological series
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::AppResult;
use crate::models::ExerciseSetRecord;
use crate::weekly_aggregator::aggregate_weekly;

/// One point of the PR trend: the best estimate observed in a week
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrTrendPoint {
    /// Monday starting the week
    pub week_start: NaiveDate,
    /// Best Epley one-rep-max estimate across the week's qualifying sets
    pub best_est_one_rep_max: f64,
}

/// Chronologically ascending best-estimate series, one point per week with
/// at least one qualifying (reps >= 1) set. Sparse: quiet weeks are absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrTrend {
    /// Trend points, oldest first
    pub points: Vec<PrTrendPoint>,
}

/// Compute the PR trend over an arbitrary history of set records
///
/// Recomputed fresh on every call; an empty history yields an empty trend.
///
/// # Errors
/// Returns `AppError::InvariantViolation` when a record fails boundary
/// validation.
pub fn pr_trend(records: &[ExerciseSetRecord]) -> AppResult<PrTrend> {
    let weeks = aggregate_weekly(records)?;

    // BTreeMap iteration already yields week starts oldest-first.
    let points = weeks
        .values()
        .filter_map(|agg| {
            agg.best_est_one_rep_max.map(|best| PrTrendPoint {
                week_start: agg.week_start,
                best_est_one_rep_max: best,
            })
        })
        .collect();

    Ok(PrTrend { points })
}
