// ABOUTME: Per-set training-load calculators: volume and estimated one-rep max
// ABOUTME: Pure functions shared by every aggregator in the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// Training volume of a single set: reps x weight
///
/// Zero reps or zero weight yield zero volume; warm-up and bodyweight
/// entries are valid sets, not errors.
#[must_use]
pub fn set_volume(reps: u32, weight_kg: f64) -> f64 {
    f64::from(reps) * weight_kg
}

/// Estimated one-rep max via the Epley formula: weight x (1 + reps/30)
///
/// Returns `None` for zero-rep sets. A zero-rep set carries no strength
/// signal; treating it as a 0 kg estimate would drag "best" tracking down.
#[must_use]
pub fn estimated_one_rep_max(reps: u32, weight_kg: f64) -> Option<f64> {
    if reps == 0 {
        return None;
    }
    Some(weight_kg * (1.0 + f64::from(reps) / 30.0))
}
