// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::ops::Range;

use ndarray::{Array1, Array2};

/// Time indices at which every delay window of both series is in bounds.
///
/// The range starts at `(m - 1) * max(tau_x, tau_y)` for both series, so the
/// two embeddings share one index set even when their delays differ. It is
/// empty when the series are too short, including spans too large to represent.
pub fn shared_valid_range(
    len_x: usize,
    len_y: usize,
    order: usize,
    tau_x: usize,
    tau_y: usize,
) -> Range<usize> {
    let end = len_x.min(len_y);
    match order.saturating_sub(1).checked_mul(tau_x.max(tau_y)) {
        Some(start) if start < end => start..end,
        _ => 0..0,
    }
}

/// Delay embedding of `series` at the given indices.
///
/// Row `r` holds `series[idx - (m-1)·tau], .., series[idx - tau], series[idx]`
/// for `idx = indices.start + r`, oldest sample first.
pub(crate) fn embed_series(
    series: &Array1<f64>,
    indices: Range<usize>,
    order: usize,
    tau: usize,
) -> Array2<f64> {
    let n_rows = indices.len();
    let mut embedded = Array2::zeros((n_rows, order));

    for (row, base_idx) in indices.enumerate() {
        for j in 0..order {
            let offset = (order - 1 - j) * tau;
            embedded[(row, j)] = series[base_idx - offset];
        }
    }
    embedded
}
