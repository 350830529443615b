// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # tdte
//!
//! Post-processing for time-delayed transfer entropy (TE) analysis of paired
//! time series: locating significant peaks in a TE-versus-lag curve, and turning
//! raw real-valued series into ordinal-pattern symbols for discrete entropy
//! estimators.
//!
//! ## Quick Start
//!
//! ```rust
//! use tdte::time_series::peaks::{LagStatistics, PeakDetectionConfig, detect_peaks};
//! use tdte::time_series::symbolic::symbolize_continuous;
//! use ndarray::array;
//!
//! // Peak of a TE curve over six lags
//! let lags = [0, 1, 2, 3, 4, 5];
//! let stats = LagStatistics::from_pairs(&[
//!     (0.1, 0.01), (0.1, 0.01), (0.9, 0.02), (0.2, 0.01), (0.1, 0.01), (0.1, 0.01),
//! ]);
//! let peaks = detect_peaks(1, &lags, &stats, 0.3, &PeakDetectionConfig::default()).unwrap();
//! assert_eq!(peaks.lags(), vec![2]);
//!
//! // Ordinal symbols of two series on a shared index set
//! let x = array![1.0, 3.0, 2.0, 5.0, 4.0];
//! let y = array![0.5, 0.1, 0.7, 0.2, 0.9];
//! let (sx, sy) = symbolize_continuous(&x, &y, 2, 1, 1).unwrap();
//! assert_eq!(sx.len(), sy.len());
//! ```
//!
//! ## Components
//!
//! | Component | Entry point | Output |
//! |-----------|-------------|--------|
//! | Peak analysis | [`detect_peaks`](time_series::peaks::detect_peaks) | [`PeakSet`](time_series::peaks::PeakSet) |
//! | Coupling policy | [`resolve_coupling_lag`](time_series::peaks::resolve_coupling_lag) | [`CouplingLag`](time_series::peaks::CouplingLag) |
//! | Symbolization | [`symbolize_continuous`](time_series::symbolic::symbolize_continuous) | two `Array1<usize>` |
//!
//! Both components are pure functions: no shared state, no I/O. Diagnostics are
//! emitted through `tracing` at debug and trace level.
//!
//! The TE estimator and the background/CI computation live upstream; this crate
//! only interprets their results.

pub mod errors;
pub mod time_series;

pub use errors::{TdteError, TdteResult};
