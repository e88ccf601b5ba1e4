// ABOUTME: Next-period training plan generation from recent stats and risk findings
// ABOUTME: Deterministic rule table proposing split, frequency, set targets, and effort
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis_config::PlanParameters;
use crate::models::MuscleCategory;
use crate::recent_activity::RecentStats;
use crate::risk_analyzer::{RiskKind, RiskReport};

/// Weekly training split structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingSplit {
    /// Every session trains the whole body
    FullBody,
    /// Alternating upper-body and lower-body sessions
    UpperLower,
    /// Push / pull / legs rotation
    PushPullLegs,
}

impl Display for TrainingSplit {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Self::FullBody => "full body",
            Self::UpperLower => "upper/lower",
            Self::PushPullLegs => "push/pull/legs",
        };
        f.write_str(name)
    }
}

/// Proposed training plan for the upcoming period
///
/// Always fully populated; ambiguous or absent signals degrade to the
/// balanced default plan. Generated fresh per request, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextWeekPlan {
    /// Whether generation completed
    pub success: bool,
    /// Proposed split
    pub split: TrainingSplit,
    /// Proposed sessions per week
    pub weekly_frequency: u32,
    /// Weekly working sets per target muscle
    pub sets_per_target_muscle: u32,
    /// Recommended effort band (RPE)
    pub effort_range: String,
    /// Categories to prioritize next period
    pub focus_targets: Vec<MuscleCategory>,
    /// Free-text guidance composed from the fired findings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Next-period plan generator
pub struct PlanGenerator {
    params: PlanParameters,
}

impl PlanGenerator {
    /// Create a generator with the given plan parameters
    #[must_use]
    pub const fn new(params: PlanParameters) -> Self {
        Self { params }
    }

    /// Generate the next-period plan from recent stats and risk findings
    ///
    /// Rule table, applied in order:
    /// - frequency risk fired: recovery frequency, full-body split, easier
    ///   effort band
    /// - volume spike fired: hold frequency, easier effort band
    /// - neglected categories: added to focus targets with a raised set
    ///   target
    /// - otherwise: balanced default split at moderate frequency
    #[must_use]
    pub fn generate(&self, recent: &RecentStats, risks: &RiskReport) -> NextWeekPlan {
        let frequency_fired = risks
            .findings
            .iter()
            .any(|f| f.kind == RiskKind::InsufficientFrequency);
        let spike_fired = risks.findings.iter().any(|f| f.kind == RiskKind::VolumeSpike);
        let neglected: Vec<MuscleCategory> = risks
            .findings
            .iter()
            .filter_map(|f| match &f.kind {
                RiskKind::CategoryNeglect(category) => Some(category.clone()),
                _ => None,
            })
            .collect();

        let weekly_frequency = if frequency_fired {
            self.params.recovery_frequency
        } else {
            self.params.default_frequency
        };

        let split = if frequency_fired {
            TrainingSplit::FullBody
        } else {
            Self::split_for_frequency(weekly_frequency)
        };

        let effort_range = if frequency_fired || spike_fired {
            self.params.recovery_effort_range.clone()
        } else {
            self.params.default_effort_range.clone()
        };

        let sets_per_target_muscle = if neglected.is_empty() {
            self.params.target_sets_per_muscle
        } else {
            self.params.target_sets_per_muscle + self.params.neglect_extra_sets
        };

        let notes = Self::compose_notes(recent, risks, frequency_fired, spike_fired, &neglected);

        debug!(
            %split,
            weekly_frequency,
            focus_count = neglected.len(),
            "generated next-period plan"
        );

        NextWeekPlan {
            success: true,
            split,
            weekly_frequency,
            sets_per_target_muscle,
            effort_range,
            focus_targets: neglected,
            notes,
        }
    }

    /// Default split structure for a weekly session count
    const fn split_for_frequency(frequency: u32) -> TrainingSplit {
        match frequency {
            0..=3 => TrainingSplit::FullBody,
            4 => TrainingSplit::UpperLower,
            _ => TrainingSplit::PushPullLegs,
        }
    }

    fn compose_notes(
        recent: &RecentStats,
        risks: &RiskReport,
        frequency_fired: bool,
        spike_fired: bool,
        neglected: &[MuscleCategory],
    ) -> Option<String> {
        if risks.findings.is_empty() {
            if recent.session_count == 0 {
                return Some(
                    "No recent training history; starting with the balanced default plan".into(),
                );
            }
            return None;
        }

        let mut parts = Vec::new();
        if frequency_fired {
            parts.push("prioritize consistent session frequency at a reduced workload".to_owned());
        }
        if spike_fired {
            parts.push("hold weekly volume steady after the recent jump".to_owned());
        }
        if !neglected.is_empty() {
            let names: Vec<String> = neglected.iter().map(ToString::to_string).collect();
            parts.push(format!("add direct work for: {}", names.join(", ")));
        }

        Some(format!("Next period: {}", parts.join("; ")))
    }
}
