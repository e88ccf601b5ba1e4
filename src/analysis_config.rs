// ABOUTME: Configuration-driven thresholds for risk analysis and plan generation
// ABOUTME: Replaces magic numbers with type-safe, environment-configurable parameters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::MuscleCategory;

/// Analysis configuration errors
#[derive(Debug, Error)]
pub enum AnalysisConfigError {
    /// An environment override held an unparseable value
    #[error("Invalid threshold: {0}")]
    InvalidThreshold(String),

    /// Configuration values are structurally inconsistent
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

/// Thresholds for the risk assessment heuristics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskThresholds {
    /// Week-over-week volume ratio above which a spike warning fires
    pub volume_spike_ratio: f64,

    /// Average sessions per week below which a frequency warning fires
    pub min_sessions_per_week: f64,

    /// Categories expected to appear in a balanced training window;
    /// any of these with zero volume share triggers a neglect warning
    pub expected_categories: Vec<MuscleCategory>,
}

/// Parameters for the next-period plan rule table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanParameters {
    /// Weekly training frequency proposed by the balanced default plan
    pub default_frequency: u32,

    /// Reduced weekly frequency proposed when recovery is indicated
    pub recovery_frequency: u32,

    /// Baseline working sets per target muscle per week
    pub target_sets_per_muscle: u32,

    /// Extra weekly sets added for a neglected focus category
    pub neglect_extra_sets: u32,

    /// Effort band recommended for the balanced plan
    pub default_effort_range: String,

    /// Effort band recommended when recovery is indicated
    pub recovery_effort_range: String,
}

/// Main analysis configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Risk assessment thresholds
    pub risk: RiskThresholds,
    /// Plan generation parameters
    pub plan: PlanParameters,
    /// Decimal places used for category share percentages
    pub share_precision: u32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            risk: RiskThresholds {
                volume_spike_ratio: 1.5,
                min_sessions_per_week: 2.0,
                // Arm work accumulates through pressing/pulling, so its
                // absence alone is not treated as neglect.
                expected_categories: vec![
                    MuscleCategory::Chest,
                    MuscleCategory::Back,
                    MuscleCategory::Shoulder,
                    MuscleCategory::Leg,
                    MuscleCategory::Abdomen,
                ],
            },
            plan: PlanParameters {
                default_frequency: 4,
                recovery_frequency: 3,
                target_sets_per_muscle: 10,
                neglect_extra_sets: 2,
                default_effort_range: "RPE 7-8".into(),
                recovery_effort_range: "RPE 6-7".into(),
            },
            share_precision: 1,
        }
    }
}

impl AnalysisConfig {
    /// Load configuration from environment variables with fallback to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values
    pub fn from_environment() -> Result<Self, AnalysisConfigError> {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("LIFT_SPIKE_RATIO") {
            config.risk.volume_spike_ratio = val
                .parse()
                .map_err(|_| AnalysisConfigError::InvalidThreshold("LIFT_SPIKE_RATIO".into()))?;
        }

        if let Ok(val) = std::env::var("LIFT_MIN_SESSIONS_PER_WEEK") {
            config.risk.min_sessions_per_week = val.parse().map_err(|_| {
                AnalysisConfigError::InvalidThreshold("LIFT_MIN_SESSIONS_PER_WEEK".into())
            })?;
        }

        if let Ok(val) = std::env::var("LIFT_DEFAULT_FREQUENCY") {
            config.plan.default_frequency = val.parse().map_err(|_| {
                AnalysisConfigError::InvalidThreshold("LIFT_DEFAULT_FREQUENCY".into())
            })?;
        }

        if let Ok(val) = std::env::var("LIFT_RECOVERY_FREQUENCY") {
            config.plan.recovery_frequency = val.parse().map_err(|_| {
                AnalysisConfigError::InvalidThreshold("LIFT_RECOVERY_FREQUENCY".into())
            })?;
        }

        if let Ok(val) = std::env::var("LIFT_TARGET_SETS") {
            config.plan.target_sets_per_muscle = val
                .parse()
                .map_err(|_| AnalysisConfigError::InvalidThreshold("LIFT_TARGET_SETS".into()))?;
        }

        if let Ok(val) = std::env::var("LIFT_SHARE_PRECISION") {
            config.share_precision = val
                .parse()
                .map_err(|_| AnalysisConfigError::InvalidThreshold("LIFT_SHARE_PRECISION".into()))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), AnalysisConfigError> {
        if self.risk.volume_spike_ratio <= 1.0 {
            return Err(AnalysisConfigError::ValidationFailed(
                "volume_spike_ratio must be > 1.0".into(),
            ));
        }

        if self.risk.min_sessions_per_week <= 0.0 {
            return Err(AnalysisConfigError::ValidationFailed(
                "min_sessions_per_week must be > 0".into(),
            ));
        }

        if !(1..=7).contains(&self.plan.default_frequency) {
            return Err(AnalysisConfigError::ValidationFailed(
                "default_frequency must be between 1 and 7".into(),
            ));
        }

        if !(1..=7).contains(&self.plan.recovery_frequency) {
            return Err(AnalysisConfigError::ValidationFailed(
                "recovery_frequency must be between 1 and 7".into(),
            ));
        }

        if self.plan.recovery_frequency > self.plan.default_frequency {
            return Err(AnalysisConfigError::ValidationFailed(
                "recovery_frequency must be <= default_frequency".into(),
            ));
        }

        if self.plan.target_sets_per_muscle == 0 {
            return Err(AnalysisConfigError::ValidationFailed(
                "target_sets_per_muscle must be > 0".into(),
            ));
        }

        if self.share_precision > 6 {
            return Err(AnalysisConfigError::ValidationFailed(
                "share_precision must be <= 6".into(),
            ));
        }

        Ok(())
    }
}
