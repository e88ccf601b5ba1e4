// ABOUTME: Library entry point for the lift-intelligence analytics engine
// ABOUTME: Aggregates per-set workout records into weekly stats, trends, risks, and plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Lift Intelligence
//!
//! A pure, synchronous training-load aggregation and analytics engine for
//! strength-training data. The engine ingests per-set exercise records
//! fetched by the calling boundary and produces time-bucketed summaries,
//! risk findings, and a next-period training plan.
//!
//! ## Components
//!
//! Data flows strictly upward through the layers:
//!
//! - **Week bucketing** ([`week_bucket`]): ISO week-start normalization
//! - **Calculators** ([`calculators`]): per-set volume and Epley one-rep-max
//! - **Weekly aggregation** ([`weekly_aggregator`]): per-week totals and bests
//! - **Recent activity** ([`recent_activity`]): rolling-window session stats
//! - **Daily summaries** ([`daily_summary`]): per-day, per-exercise rollups
//! - **Category breakdown** ([`category_breakdown`]): volume share per muscle group
//! - **PR trend** ([`pr_trend`]): best-estimate time series
//! - **Risk analysis** ([`risk_analyzer`]): spike/neglect/frequency findings
//! - **Plan generation** ([`plan_generator`]): next-period split proposal
//!
//! ## Boundary contract
//!
//! The engine trusts the caller for authentication, parameter validation,
//! and record fetching; it performs structural validation only and reports
//! failures as typed [`errors::AppError`] values. Every computation is
//! stateless and deterministic, so concurrent invocations over the same
//! snapshot need no coordination.
//!
//! ## Example
//!
//! ```rust
//! use lift_intelligence::prelude::*;
//!
//! let records: Vec<ExerciseSetRecord> = Vec::new();
//! let weeks = aggregate_weekly(&records)?;
//! assert!(weeks.is_empty());
//! # Ok::<(), lift_intelligence::errors::AppError>(())
//! ```

/// Configuration-driven analysis thresholds
pub mod analysis_config;
/// Per-set volume and strength calculators
pub mod calculators;
/// Category volume breakdown
pub mod category_breakdown;
/// Per-day workout summarization
pub mod daily_summary;
/// Engine error types
pub mod errors;
/// Input record models and shared enums
pub mod models;
/// Next-period plan generation
pub mod plan_generator;
/// Personal-record trend tracking
pub mod pr_trend;
/// Rolling-window activity summarization
pub mod recent_activity;
/// Risk assessment over recent aggregates
pub mod risk_analyzer;
/// ISO week bucketing and date parsing
pub mod week_bucket;
/// Weekly training-load aggregation
pub mod weekly_aggregator;

/// Convenience re-exports for boundary callers
pub mod prelude {
    pub use crate::analysis_config::{AnalysisConfig, PlanParameters, RiskThresholds};
    pub use crate::calculators::{estimated_one_rep_max, set_volume};
    pub use crate::category_breakdown::{
        breakdown_by_category, CategoryBreakdown, CategoryShare,
    };
    pub use crate::daily_summary::{summarize_day, DayRecordSummary, ExerciseItemSummary};
    pub use crate::errors::{AppError, AppResult, ErrorCode};
    pub use crate::models::{ExerciseSetRecord, MuscleCategory, WorkoutIntensity};
    pub use crate::plan_generator::{NextWeekPlan, PlanGenerator, TrainingSplit};
    pub use crate::pr_trend::{pr_trend, PrTrend, PrTrendPoint};
    pub use crate::recent_activity::{summarize_recent, RecentStats};
    pub use crate::risk_analyzer::{
        RiskAnalyzer, RiskFinding, RiskKind, RiskLevel, RiskReport,
    };
    pub use crate::week_bucket::{
        format_week_start, iso_week_start, iso_week_start_str, parse_workout_date,
    };
    pub use crate::weekly_aggregator::{aggregate_weekly, zero_fill_weeks, WeekAgg};
}
