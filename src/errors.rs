// ABOUTME: Unified error handling for the lift-intelligence analytics engine
// ABOUTME: Defines error codes, the AppError type, and the AppResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Unified Error Handling
//!
//! Centralized error types for the analytics engine. The engine produces a
//! typed error signal; the calling boundary owns transport formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes emitted by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// A supplied date string could not be parsed as a calendar date
    #[serde(rename = "INVALID_DATE_FORMAT")]
    InvalidDateFormat,
    /// Caller-supplied records violate an engine consistency contract
    #[serde(rename = "INVARIANT_VIOLATION")]
    InvariantViolation,
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// Human-readable description for this error code
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidDateFormat => "Date could not be parsed",
            Self::InvariantViolation => "Input records violate an engine invariant",
            Self::InternalError => "Internal error occurred",
        }
    }
}

/// Unified error type for the analytics engine
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new error with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// A date string failed to parse
    pub fn invalid_date_format(input: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InvalidDateFormat,
            format!("invalid date format: {}", input.into()),
        )
    }

    /// Caller-supplied input breaks an engine contract
    pub fn invariant_violation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvariantViolation, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
