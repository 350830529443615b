// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Peak extraction from a time-delayed transfer entropy curve.
//!
//! The TE curve is given as a lag grid plus one `(mean, std)` pair per lag.
//! Candidate peaks are extracted from the mean curve under height, distance and
//! prominence constraints, then each peak is tested against the CI upper bound
//! and the background formed by the edge bins of the curve.
//!
//! No peak means an empty [`PeakSet`]. Falling back to zero lag is the caller's
//! decision, see [`crate::time_series::peaks::policy`].

use ndarray::Array1;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::errors::{TdteError, TdteResult};
use crate::time_series::peaks::find_peaks::{LocalMaximaFinder, PeakConstraints};
use crate::time_series::peaks::significance::{background_reference, is_significant};
use crate::time_series::traits::PeakFinder;

/// Default minimum prominence of an accepted peak.
pub const DEFAULT_PROMINENCE: f64 = 0.01;

/// Per-lag mean and standard deviation of the TE estimate, index-aligned.
#[derive(Debug, Clone, PartialEq)]
pub struct LagStatistics {
    means: Array1<f64>,
    stds: Array1<f64>,
}

impl LagStatistics {
    /// Build from parallel arrays; both must have the same length.
    pub fn new(means: Array1<f64>, stds: Array1<f64>) -> TdteResult<Self> {
        if means.len() != stds.len() {
            return Err(TdteError::shape_mismatch("stds", means.len(), stds.len()));
        }
        Ok(Self { means, stds })
    }

    /// Build from `(mean, std)` pairs, one per lag.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        let means = pairs.iter().map(|p| p.0).collect::<Array1<f64>>();
        let stds = pairs.iter().map(|p| p.1).collect::<Array1<f64>>();
        Self { means, stds }
    }

    pub fn means(&self) -> &Array1<f64> {
        &self.means
    }

    pub fn stds(&self) -> &Array1<f64> {
        &self.stds
    }

    pub fn len(&self) -> usize {
        self.means.len()
    }

    pub fn is_empty(&self) -> bool {
        self.means.is_empty()
    }
}

/// Optional overrides for peak detection. Unset fields take their defaults
/// when resolved against a concrete detection call.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PeakDetectionConfig {
    /// Minimum peak height; defaults to the CI upper bound.
    pub threshold: Option<f64>,
    /// Minimum separation in samples; defaults to twice the characteristic time,
    /// saturating at `usize::MAX` (which keeps only the tallest candidate).
    pub min_distance: Option<usize>,
    /// Minimum prominence; defaults to [`DEFAULT_PROMINENCE`].
    pub prominence: Option<f64>,
}

impl PeakDetectionConfig {
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn with_min_distance(mut self, min_distance: usize) -> Self {
        self.min_distance = Some(min_distance);
        self
    }

    pub fn with_prominence(mut self, prominence: f64) -> Self {
        self.prominence = Some(prominence);
        self
    }

    /// Fill in defaults and validate.
    pub fn resolve(
        &self,
        characteristic_time: usize,
        ci_upper_bound: f64,
        n_lags: usize,
    ) -> TdteResult<ResolvedPeakConfig> {
        let threshold = self.threshold.unwrap_or(ci_upper_bound);
        if threshold.is_nan() {
            return Err(TdteError::invalid_configuration(
                "threshold",
                "must not be NaN",
            ));
        }

        let min_distance = match self.min_distance {
            Some(d) => d,
            None => {
                if characteristic_time == 0 {
                    return Err(TdteError::invalid_configuration(
                        "characteristic_time",
                        "must be positive to derive the default min_distance",
                    ));
                }
                characteristic_time.saturating_mul(2)
            }
        };
        if min_distance < 1 {
            return Err(TdteError::invalid_configuration(
                "min_distance",
                format!("must be at least 1, got {min_distance}"),
            ));
        }

        let prominence = self.prominence.unwrap_or(DEFAULT_PROMINENCE);
        if !prominence.is_finite() {
            return Err(TdteError::invalid_configuration(
                "prominence",
                format!("must be finite, got {prominence}"),
            ));
        }

        Ok(ResolvedPeakConfig {
            threshold,
            min_distance,
            prominence,
            window_length: (n_lags / 2).max(2),
        })
    }
}

/// Fully determined detection parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPeakConfig {
    pub threshold: f64,
    pub min_distance: usize,
    pub prominence: f64,
    pub window_length: usize,
}

impl ResolvedPeakConfig {
    pub fn constraints(&self) -> PeakConstraints {
        PeakConstraints::new()
            .with_height(self.threshold)
            .with_distance(self.min_distance)
            .with_prominence(self.prominence)
            .with_window_length(self.window_length)
    }
}

/// A detected peak of the TE curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Peak {
    /// Position in the lag grid.
    pub index: usize,
    pub lag: i64,
    /// Mean TE at this lag.
    pub strength: f64,
    /// Standard deviation of TE at this lag.
    pub dispersion: f64,
    pub is_significant: bool,
}

/// Detected peaks in ascending lag order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PeakSet {
    peaks: Vec<Peak>,
}

impl PeakSet {
    pub fn peaks(&self) -> &[Peak] {
        &self.peaks
    }

    pub fn len(&self) -> usize {
        self.peaks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peaks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Peak> {
        self.peaks.iter()
    }

    pub fn indices(&self) -> Vec<usize> {
        self.peaks.iter().map(|p| p.index).collect()
    }

    pub fn lags(&self) -> Vec<i64> {
        self.peaks.iter().map(|p| p.lag).collect()
    }

    pub fn strengths(&self) -> Vec<f64> {
        self.peaks.iter().map(|p| p.strength).collect()
    }

    pub fn dispersions(&self) -> Vec<f64> {
        self.peaks.iter().map(|p| p.dispersion).collect()
    }

    pub fn significance(&self) -> Vec<bool> {
        self.peaks.iter().map(|p| p.is_significant).collect()
    }

    pub fn significant(&self) -> impl Iterator<Item = &Peak> {
        self.peaks.iter().filter(|p| p.is_significant)
    }

    pub fn into_vec(self) -> Vec<Peak> {
        self.peaks
    }
}

impl<'a> IntoIterator for &'a PeakSet {
    type Item = &'a Peak;
    type IntoIter = std::slice::Iter<'a, Peak>;

    fn into_iter(self) -> Self::IntoIter {
        self.peaks.iter()
    }
}

/// Detect peaks of a time-delayed TE curve with the default [`LocalMaximaFinder`].
///
/// # Arguments
///
/// * `characteristic_time` - Lag scale of the dependent series; only used to
///   derive the default `min_distance`.
/// * `lag_grid` - Tested delays, strictly increasing, at least two entries.
/// * `stats` - Mean and std of TE per lag, aligned with `lag_grid`.
/// * `ci_upper_bound` - Background CI upper bound; default threshold and first
///   significance leg.
/// * `config` - Optional overrides.
///
/// # Errors
///
/// [`TdteError::InvalidLagGrid`] and [`TdteError::ShapeMismatch`] for malformed
/// inputs, [`TdteError::InvalidConfiguration`] for unusable parameters.
pub fn detect_peaks(
    characteristic_time: usize,
    lag_grid: &[i64],
    stats: &LagStatistics,
    ci_upper_bound: f64,
    config: &PeakDetectionConfig,
) -> TdteResult<PeakSet> {
    detect_peaks_with(
        &LocalMaximaFinder,
        characteristic_time,
        lag_grid,
        stats,
        ci_upper_bound,
        config,
    )
}

/// Like [`detect_peaks`], delegating candidate extraction to `finder`.
pub fn detect_peaks_with<F: PeakFinder + ?Sized>(
    finder: &F,
    characteristic_time: usize,
    lag_grid: &[i64],
    stats: &LagStatistics,
    ci_upper_bound: f64,
    config: &PeakDetectionConfig,
) -> TdteResult<PeakSet> {
    validate_lag_grid(lag_grid)?;
    if stats.len() != lag_grid.len() {
        return Err(TdteError::shape_mismatch(
            "lag statistics",
            lag_grid.len(),
            stats.len(),
        ));
    }
    let resolved = config.resolve(characteristic_time, ci_upper_bound, lag_grid.len())?;

    let means = stats.means();
    let stds = stats.stds();
    let signal = means.to_vec();
    let candidates = finder.find_peaks(&signal, &resolved.constraints());
    debug!(
        n_lags = lag_grid.len(),
        threshold = resolved.threshold,
        min_distance = resolved.min_distance,
        prominence = resolved.prominence,
        window_length = resolved.window_length,
        n_candidates = candidates.len(),
        "extracted TE peak candidates"
    );

    if candidates.is_empty() {
        return Ok(PeakSet::default());
    }

    let reference = background_reference(means);
    match &reference {
        Some(bg) => debug!(
            mean = bg.mean,
            std = bg.std,
            size = bg.size,
            "edge-bin background reference"
        ),
        None => debug!("lag grid too short for a background reference, peaks are not significant"),
    }

    let peaks = candidates
        .into_iter()
        .map(|index| {
            let strength = means[index];
            let is_significant = is_significant(strength, ci_upper_bound, reference.as_ref());
            trace!(index, lag = lag_grid[index], strength, is_significant, "peak");
            Peak {
                index,
                lag: lag_grid[index],
                strength,
                dispersion: stds[index],
                is_significant,
            }
        })
        .collect();

    Ok(PeakSet { peaks })
}

fn validate_lag_grid(lag_grid: &[i64]) -> TdteResult<()> {
    if lag_grid.len() < 2 {
        return Err(TdteError::InvalidLagGrid(format!(
            "need at least 2 lags, got {}",
            lag_grid.len()
        )));
    }
    if let Some(w) = lag_grid.windows(2).find(|w| w[0] >= w[1]) {
        return Err(TdteError::InvalidLagGrid(format!(
            "lags must be strictly increasing, found {} followed by {}",
            w[0], w[1]
        )));
    }
    Ok(())
}
