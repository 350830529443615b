// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types shared by peak detection and symbolization.
//!
//! Both halves of the crate are pure functions, so every failure is an input
//! validation failure reported synchronously to the caller. Empty results
//! (no peaks, no valid embedding indices) are values, not errors.

use thiserror::Error;

pub type TdteResult<T> = Result<T, TdteError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TdteError {
    /// A parameter is outside its admissible domain.
    #[error("Invalid configuration: {parameter} {reason}")]
    InvalidConfiguration {
        parameter: &'static str,
        reason: String,
    },

    /// Two sequences that must be index-aligned have different lengths.
    #[error("Shape mismatch: {what} has length {actual}, expected {expected}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The lag grid is too short or not strictly increasing.
    #[error("Invalid lag grid: {0}")]
    InvalidLagGrid(String),
}

impl TdteError {
    pub fn invalid_configuration(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            parameter,
            reason: reason.into(),
        }
    }

    pub fn shape_mismatch(what: &'static str, expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch {
            what,
            expected,
            actual,
        }
    }
}
