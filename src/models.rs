// ABOUTME: Core data models for strength-training analytics
// ABOUTME: Defines ExerciseSetRecord, muscle categories, and workout intensity tags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Data Models
//!
//! Input records and shared enums used throughout the engine.
//!
//! ## Design Principles
//!
//! - **Explicitly typed**: raw store documents are mapped to tagged record
//!   types before the engine runs; nothing is coerced silently
//! - **Serializable**: all models support JSON serialization across the
//!   request boundary
//! - **Validated**: boundary validation rejects structurally impossible
//!   records instead of propagating them into aggregates

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// Muscle group a set is attributed to
///
/// The `Other` variant carries category tags that don't map to the standard
/// groups, so records from older clients are never dropped on ingest.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MuscleCategory {
    /// Chest exercises (press, fly)
    Chest,
    /// Back exercises (row, pulldown)
    Back,
    /// Shoulder exercises (overhead press, raise)
    Shoulder,
    /// Leg exercises (squat, lunge, hinge)
    Leg,
    /// Arm exercises (curl, extension)
    Arm,
    /// Abdominal/core exercises
    Abdomen,
    /// Unrecognized category tag, preserved verbatim
    Other(String),
}

impl MuscleCategory {
    /// Map a category tag to its enum value
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "chest" => Self::Chest,
            "back" => Self::Back,
            "shoulder" => Self::Shoulder,
            "leg" => Self::Leg,
            "arm" => Self::Arm,
            "abdomen" => Self::Abdomen,
            other => Self::Other(other.to_owned()),
        }
    }

    /// The canonical string tag for this category
    #[must_use]
    pub fn as_tag(&self) -> &str {
        match self {
            Self::Chest => "chest",
            Self::Back => "back",
            Self::Shoulder => "shoulder",
            Self::Leg => "leg",
            Self::Arm => "arm",
            Self::Abdomen => "abdomen",
            Self::Other(tag) => tag,
        }
    }
}

impl Display for MuscleCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_tag())
    }
}

impl FromStr for MuscleCategory {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_tag(s))
    }
}

// Serialized as a bare string so categories work as JSON map keys.
impl Serialize for MuscleCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_tag())
    }
}

impl<'de> Deserialize<'de> for MuscleCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}

/// Subjective intensity tag attached to a workout day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutIntensity {
    /// Demanding session
    Hard,
    /// Typical session
    Normal,
    /// Light/recovery session
    Easy,
}

impl Display for WorkoutIntensity {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let tag = match self {
            Self::Hard => "hard",
            Self::Normal => "normal",
            Self::Easy => "easy",
        };
        f.write_str(tag)
    }
}

/// One performed set of one exercise, as fetched from the record store
///
/// Records are read-only to the engine; all derived aggregates are computed
/// fresh from a caller-supplied snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseSetRecord {
    /// Identifier of the workout-day record this set belongs to
    pub record_id: Uuid,
    /// Identifier of the exercise item within the day
    pub item_id: Uuid,
    /// Display name of the exercise (e.g., "Bench Press")
    pub exercise_name: String,
    /// Muscle category the set is attributed to
    pub category: MuscleCategory,
    /// Set number within its exercise item, starting at 1
    pub set_number: u32,
    /// Repetition count; 0 represents a logged warm-up/bodyweight entry
    pub reps: u32,
    /// Weight lifted in kilograms; 0 for unloaded movements
    pub weight_kg: f64,
    /// Calendar date of the set, day granularity
    pub date: NaiveDate,
}

impl ExerciseSetRecord {
    /// Validate structural constraints on a record before aggregation
    ///
    /// # Errors
    /// Returns `AppError::InvariantViolation` for non-finite or negative
    /// weight, or a zero set number.
    pub fn validate(&self) -> AppResult<()> {
        if !self.weight_kg.is_finite() || self.weight_kg < 0.0 {
            return Err(AppError::invariant_violation(format!(
                "set {} of {}: weight must be a non-negative finite number, got {}",
                self.set_number, self.exercise_name, self.weight_kg
            )));
        }
        if self.set_number == 0 {
            return Err(AppError::invariant_violation(format!(
                "{}: set numbers start at 1",
                self.exercise_name
            )));
        }
        Ok(())
    }
}
