// ABOUTME: Category volume breakdown with percentage shares
// ABOUTME: Computes each muscle group's slice of total training volume
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::calculators::set_volume;
use crate::errors::AppResult;
use crate::models::{ExerciseSetRecord, MuscleCategory};

/// One category's slice of the training volume
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryShare {
    /// Muscle category
    pub category: MuscleCategory,
    /// Volume attributed to the category
    pub volume: f64,
    /// Percentage of total volume, rounded to the configured precision
    pub share_percent: f64,
}

/// Volume distribution across muscle categories for an analysis window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    /// Total volume across the window
    pub total_volume: f64,
    /// Per-category shares, largest first; zero-volume categories omitted
    pub entries: Vec<CategoryShare>,
}

/// Compute the category breakdown over an analysis window
///
/// Shares are `volume / total x 100`, rounded to `precision` decimal
/// places. A window with zero total volume yields an empty breakdown
/// rather than a division by zero.
///
/// # Errors
/// Returns `AppError::InvariantViolation` when a record fails boundary
/// validation.
pub fn breakdown_by_category(
    records: &[ExerciseSetRecord],
    precision: u32,
) -> AppResult<CategoryBreakdown> {
    let mut volume_by_category: HashMap<MuscleCategory, f64> = HashMap::new();
    let mut total_volume = 0.0;

    for record in records {
        record.validate()?;
        let volume = set_volume(record.reps, record.weight_kg);
        total_volume += volume;
        *volume_by_category
            .entry(record.category.clone())
            .or_insert(0.0) += volume;
    }

    if total_volume <= 0.0 {
        return Ok(CategoryBreakdown {
            total_volume: 0.0,
            entries: Vec::new(),
        });
    }

    let scale = 10_f64.powi(precision as i32);
    let mut entries: Vec<CategoryShare> = volume_by_category
        .into_iter()
        .filter(|(_, volume)| *volume > 0.0)
        .map(|(category, volume)| {
            let share = volume / total_volume * 100.0;
            CategoryShare {
                category,
                volume,
                share_percent: (share * scale).round() / scale,
            }
        })
        .collect();

    // Largest share first; tag as tiebreaker keeps output deterministic.
    entries.sort_by(|a, b| {
        b.volume
            .total_cmp(&a.volume)
            .then_with(|| a.category.as_tag().cmp(b.category.as_tag()))
    });

    Ok(CategoryBreakdown {
        total_volume,
        entries,
    })
}
