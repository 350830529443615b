// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Peak analysis of time-delayed transfer entropy curves.

pub mod detection;
pub mod find_peaks;
pub mod policy;
pub mod significance;

pub use detection::{
    LagStatistics, Peak, PeakDetectionConfig, PeakSet, ResolvedPeakConfig, detect_peaks,
    detect_peaks_with,
};
pub use find_peaks::{LocalMaximaFinder, PeakConstraints};
pub use policy::{CouplingLag, resolve_coupling_lag};
pub use significance::{BackgroundReference, background_reference};
