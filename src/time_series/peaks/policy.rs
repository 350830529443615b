// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Caller-side decision on the coupling delay.
//!
//! [`detect_peaks`](crate::time_series::peaks::detection::detect_peaks) never
//! invents a peak. Pipelines that need a single delay layer this policy on top:
//! take the strongest detected peak, or assume zero-lag coupling when the curve
//! has none.

use serde::{Deserialize, Serialize};

use crate::time_series::peaks::detection::{Peak, PeakSet};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CouplingLag {
    /// Lag of the strongest detected peak.
    Detected {
        lag: i64,
        strength: f64,
        significant: bool,
    },
    /// No peak was detected; coupling is assumed to be instantaneous.
    AssumedZero,
}

impl CouplingLag {
    pub fn lag(&self) -> i64 {
        match self {
            CouplingLag::Detected { lag, .. } => *lag,
            CouplingLag::AssumedZero => 0,
        }
    }

    pub fn is_detected(&self) -> bool {
        matches!(self, CouplingLag::Detected { .. })
    }
}

/// Pick the strongest peak (earliest lag on ties), or [`CouplingLag::AssumedZero`].
pub fn resolve_coupling_lag(peaks: &PeakSet) -> CouplingLag {
    let mut best: Option<&Peak> = None;
    for peak in peaks {
        match best {
            Some(b) if peak.strength <= b.strength => {}
            _ => best = Some(peak),
        }
    }
    match best {
        Some(p) => CouplingLag::Detected {
            lag: p.lag,
            strength: p.strength,
            significant: p.is_significant,
        },
        None => CouplingLag::AssumedZero,
    }
}
