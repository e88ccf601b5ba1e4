// ABOUTME: Overtraining and imbalance risk assessment over recent aggregates
// ABOUTME: Fires volume-spike, category-neglect, and frequency findings from config thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use chrono::Days;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis_config::RiskThresholds;
use crate::category_breakdown::CategoryBreakdown;
use crate::errors::{AppError, AppResult};
use crate::models::MuscleCategory;
use crate::recent_activity::RecentStats;
use crate::weekly_aggregator::WeekAgg;

/// Kind of risk signal detected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskKind {
    /// Week-over-week volume jump beyond the configured ratio
    VolumeSpike,
    /// An expected category received no training volume
    CategoryNeglect(MuscleCategory),
    /// Average weekly session count below the configured floor
    InsufficientFrequency,
}

/// One advisory risk finding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskFinding {
    /// Signal classification
    pub kind: RiskKind,
    /// Human-readable advisory text
    pub message: String,
}

/// Overall risk level summarizing a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    /// No findings
    Low,
    /// One finding - monitor
    Moderate,
    /// Two or more findings - back off
    High,
}

/// Result of a risk assessment
///
/// An empty finding list is success, not an error: no detected risks is a
/// valid, representable outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskReport {
    /// Whether the assessment completed
    pub success: bool,
    /// Advisory findings, possibly empty
    pub findings: Vec<RiskFinding>,
}

impl RiskReport {
    /// Summarize findings into an overall risk level
    #[must_use]
    pub fn risk_level(&self) -> RiskLevel {
        match self.findings.len() {
            0 => RiskLevel::Low,
            1 => RiskLevel::Moderate,
            _ => RiskLevel::High,
        }
    }
}

/// Risk assessment engine over explicit, caller-supplied aggregates
///
/// The analyzer never recomputes "now": the caller supplies the ordered
/// adjacent week pair it wants compared.
pub struct RiskAnalyzer {
    thresholds: RiskThresholds,
}

impl RiskAnalyzer {
    /// Create an analyzer with the given thresholds
    #[must_use]
    pub const fn new(thresholds: RiskThresholds) -> Self {
        Self { thresholds }
    }

    /// Assess recent training for overtraining and imbalance signals
    ///
    /// `prior_week` and `current_week` must be adjacent ISO weeks in
    /// chronological order. Findings are independent; any subset may fire.
    ///
    /// # Errors
    /// Returns `AppError::InvariantViolation` when the week pair is out of
    /// order or not adjacent.
    pub fn assess(
        &self,
        prior_week: &WeekAgg,
        current_week: &WeekAgg,
        recent: &RecentStats,
        breakdown: &CategoryBreakdown,
    ) -> AppResult<RiskReport> {
        let expected_current = prior_week
            .week_start
            .checked_add_days(Days::new(7))
            .ok_or_else(|| AppError::internal("week start out of calendar range"))?;
        if current_week.week_start != expected_current {
            return Err(AppError::invariant_violation(format!(
                "weeks {} and {} are not adjacent in order",
                prior_week.week_start, current_week.week_start
            )));
        }

        let mut findings = Vec::new();

        // Volume spike: undefined off a zero-volume prior week.
        if prior_week.total_volume > 0.0 {
            let ratio = current_week.total_volume / prior_week.total_volume;
            if ratio > self.thresholds.volume_spike_ratio {
                findings.push(RiskFinding {
                    kind: RiskKind::VolumeSpike,
                    message: format!(
                        "Weekly volume jumped {ratio:.1}x over the prior week \
                         (threshold {:.1}x) - ramp load more gradually",
                        self.thresholds.volume_spike_ratio
                    ),
                });
            }
        }

        // Neglect only applies once there is training history to compare.
        if breakdown.total_volume > 0.0 {
            for category in &self.thresholds.expected_categories {
                let trained = breakdown
                    .entries
                    .iter()
                    .any(|entry| entry.category == *category);
                if !trained {
                    findings.push(RiskFinding {
                        kind: RiskKind::CategoryNeglect(category.clone()),
                        message: format!(
                            "No training volume recorded for {category} in this window"
                        ),
                    });
                }
            }
        }

        if recent.avg_sessions_per_week < self.thresholds.min_sessions_per_week {
            findings.push(RiskFinding {
                kind: RiskKind::InsufficientFrequency,
                message: format!(
                    "Averaging {:.1} sessions/week, below the {:.1} minimum for \
                     steady progress",
                    recent.avg_sessions_per_week, self.thresholds.min_sessions_per_week
                ),
            });
        }

        debug!(finding_count = findings.len(), "risk assessment complete");
        Ok(RiskReport {
            success: true,
            findings,
        })
    }
}
