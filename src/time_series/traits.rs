// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::time_series::peaks::find_peaks::PeakConstraints;

/// Constrained local-maxima extraction over a real-valued sequence.
///
/// Implementations must honour every constraint in [`PeakConstraints`]
/// simultaneously and return indices in strictly increasing order.
pub trait PeakFinder {
    fn find_peaks(&self, signal: &[f64], constraints: &PeakConstraints) -> Vec<usize>;
}
