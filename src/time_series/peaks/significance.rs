// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, s};
use serde::{Deserialize, Serialize};

/// Number of standard deviations above the background mean a peak must reach
/// (about 99% under a normal background).
pub const BACKGROUND_SIGMAS: f64 = 3.0;

/// Mean and population standard deviation of the edge bins of a TE curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BackgroundReference {
    pub mean: f64,
    pub std: f64,
    /// Number of values in the reference sample (2·N).
    pub size: usize,
}

impl BackgroundReference {
    /// Smallest strength that clears the background leg of the test.
    pub fn bound(&self) -> f64 {
        self.mean + BACKGROUND_SIGMAS * self.std
    }
}

/// Build the background reference from the first and last `len / 10` means.
///
/// Returns `None` when the curve has fewer than 10 lags, since the edge sample
/// is then empty and its statistics are undefined.
pub fn background_reference(means: &Array1<f64>) -> Option<BackgroundReference> {
    let n_edge = means.len() / 10;
    if n_edge == 0 {
        return None;
    }

    let len = means.len();
    let mut sample = Vec::with_capacity(2 * n_edge);
    sample.extend(means.slice(s![..n_edge]).iter().copied());
    sample.extend(means.slice(s![len - n_edge..]).iter().copied());
    let sample = Array1::from(sample);

    let mean = sample.mean()?;
    let std = sample.std(0.0);
    Some(BackgroundReference {
        mean,
        std,
        size: sample.len(),
    })
}

/// A peak is significant iff it exceeds the CI upper bound and the background bound.
///
/// Without a background reference no peak is significant.
pub fn is_significant(
    strength: f64,
    ci_upper_bound: f64,
    reference: Option<&BackgroundReference>,
) -> bool {
    match reference {
        Some(bg) => strength > ci_upper_bound && strength > bg.bound(),
        None => false,
    }
}
