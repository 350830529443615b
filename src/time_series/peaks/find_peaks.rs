// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Local-maxima extraction with height, distance and prominence constraints.
//!
//! The filters are applied in a fixed order: local maxima (plateaus resolved to
//! their midpoint), then minimum height, then minimum horizontal distance
//! (higher peaks win), then minimum prominence measured inside an optional
//! window around each peak.

use crate::time_series::traits::PeakFinder;

/// Constraints applied by a [`PeakFinder`]. `None` disables a filter.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PeakConstraints {
    /// Minimum peak height (inclusive).
    pub height: Option<f64>,
    /// Minimum horizontal distance in samples between neighbouring peaks (≥ 1).
    pub distance: Option<usize>,
    /// Minimum peak prominence (inclusive).
    pub prominence: Option<f64>,
    /// Window length in samples for the prominence search; values < 2 mean "whole signal".
    pub window_length: Option<usize>,
}

impl PeakConstraints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_distance(mut self, distance: usize) -> Self {
        self.distance = Some(distance);
        self
    }

    pub fn with_prominence(mut self, prominence: f64) -> Self {
        self.prominence = Some(prominence);
        self
    }

    pub fn with_window_length(mut self, window_length: usize) -> Self {
        self.window_length = Some(window_length);
        self
    }
}

/// Default [`PeakFinder`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalMaximaFinder;

impl PeakFinder for LocalMaximaFinder {
    fn find_peaks(&self, signal: &[f64], constraints: &PeakConstraints) -> Vec<usize> {
        let mut peaks = local_maxima(signal);

        if let Some(height) = constraints.height {
            peaks.retain(|&p| signal[p] >= height);
        }

        if let Some(distance) = constraints.distance {
            peaks = select_by_distance(signal, &peaks, distance);
        }

        if let Some(min_prominence) = constraints.prominence {
            let prominences = peak_prominences(signal, &peaks, constraints.window_length);
            peaks = peaks
                .into_iter()
                .zip(prominences)
                .filter(|&(_, prom)| prom >= min_prominence)
                .map(|(p, _)| p)
                .collect();
        }

        peaks
    }
}

/// Indices of all local maxima, excluding the first and last sample.
///
/// A flat plateau counts as one maximum located at its midpoint (rounded down)
/// when both neighbours of the plateau are strictly lower.
pub fn local_maxima(signal: &[f64]) -> Vec<usize> {
    let n = signal.len();
    let mut peaks = Vec::new();
    if n < 3 {
        return peaks;
    }

    let i_max = n - 1;
    let mut i = 1;
    while i < i_max {
        if signal[i - 1] < signal[i] {
            let mut i_ahead = i + 1;
            while i_ahead < i_max && signal[i_ahead] == signal[i] {
                i_ahead += 1;
            }
            if signal[i_ahead] < signal[i] {
                let left = i;
                let right = i_ahead - 1;
                peaks.push((left + right) / 2);
                i = i_ahead;
            }
        }
        i += 1;
    }
    peaks
}

/// Keep peaks that are at least `distance` samples apart, preferring higher ones.
///
/// Peaks are visited from highest to lowest; equal heights are visited from the
/// rightmost to the leftmost. Each kept peak removes its lower neighbours that
/// lie closer than `distance`.
pub fn select_by_distance(signal: &[f64], peaks: &[usize], distance: usize) -> Vec<usize> {
    let n_peaks = peaks.len();
    if n_peaks == 0 || distance <= 1 {
        return peaks.to_vec();
    }

    let mut by_priority: Vec<usize> = (0..n_peaks).collect();
    by_priority.sort_by(|&a, &b| {
        signal[peaks[a]]
            .partial_cmp(&signal[peaks[b]])
            .unwrap_or(core::cmp::Ordering::Equal)
    });

    let mut keep = vec![true; n_peaks];
    for &j in by_priority.iter().rev() {
        if !keep[j] {
            continue;
        }
        let mut k = j;
        while k > 0 && peaks[j] - peaks[k - 1] < distance {
            keep[k - 1] = false;
            k -= 1;
        }
        let mut k = j + 1;
        while k < n_peaks && peaks[k] - peaks[j] < distance {
            keep[k] = false;
            k += 1;
        }
    }

    peaks
        .iter()
        .zip(keep)
        .filter(|&(_, kept)| kept)
        .map(|(&p, _)| p)
        .collect()
}

/// Prominence of each peak: its height above the higher of its two bases.
///
/// Each base is the minimum reached while walking away from the peak until a
/// strictly higher sample or the search boundary is met. With a window length
/// of at least 2 the search is restricted to `peak ± window_length / 2`.
pub fn peak_prominences(signal: &[f64], peaks: &[usize], window_length: Option<usize>) -> Vec<f64> {
    let n = signal.len();
    let mut out = Vec::with_capacity(peaks.len());
    if n == 0 {
        return out;
    }

    for &peak in peaks {
        let mut i_min = 0usize;
        let mut i_max = n - 1;
        if let Some(wlen) = window_length.filter(|&w| w >= 2) {
            let half = wlen / 2;
            i_min = peak.saturating_sub(half);
            i_max = (peak + half).min(n - 1);
        }

        let top = signal[peak];

        let mut left_min = top;
        let mut i = peak as isize;
        while i >= i_min as isize && signal[i as usize] <= top {
            left_min = left_min.min(signal[i as usize]);
            i -= 1;
        }

        let mut right_min = top;
        let mut i = peak;
        while i <= i_max && signal[i] <= top {
            right_min = right_min.min(signal[i]);
            i += 1;
        }

        out.push(top - left_min.max(right_min));
    }
    out
}
