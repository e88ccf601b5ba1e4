// ABOUTME: ISO week bucketing for day-granularity workout dates
// ABOUTME: Maps any calendar date to the Monday starting its ISO week
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Date normalization used by every aggregator: a record's date maps to
//! exactly one week bucket, keyed by the Monday of its ISO week.

use chrono::{Datelike, Days, NaiveDate};

use crate::errors::{AppError, AppResult};

/// Date format used across the record store
const DATE_FORMAT: &str = "%Y-%m-%d";

/// The Monday starting the ISO week that contains `date`
///
/// Idempotent: Mondays map to themselves.
#[must_use]
pub fn iso_week_start(date: NaiveDate) -> NaiveDate {
    let offset = u64::from(date.weekday().num_days_from_monday());
    // Subtracting at most 6 days cannot underflow the chrono date range
    // for any date the store can hold.
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}

/// Parse a `YYYY-MM-DD` workout date
///
/// # Errors
/// Returns `AppError::InvalidDateFormat` when the input is not a valid
/// calendar date in store format.
pub fn parse_workout_date(input: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|_| AppError::invalid_date_format(input))
}

/// Format a week-start date back into store format
#[must_use]
pub fn format_week_start(week_start: NaiveDate) -> String {
    week_start.format(DATE_FORMAT).to_string()
}

/// String-to-string convenience for store-facing callers: parse a workout
/// date and return its formatted ISO week start
///
/// # Errors
/// Returns `AppError::InvalidDateFormat` when the input cannot be parsed.
pub fn iso_week_start_str(input: &str) -> AppResult<String> {
    let date = parse_workout_date(input)?;
    Ok(format_week_start(iso_week_start(date)))
}
