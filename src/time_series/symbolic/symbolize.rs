// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Continuous ordinal symbolization of paired series.
//!
//! Both series are delay-embedded on one shared index set, each window is
//! reduced to the rank order of its samples, and the rank order is mapped to a
//! symbol: its lexicographic rank, the same numbering as
//! [`PatternDictionary`](super::ordinal_utils::PatternDictionary).

use ndarray::{Array1, Array2};
use tracing::debug;

use crate::errors::{TdteError, TdteResult};
use crate::time_series::symbolic::embedding::{embed_series, shared_valid_range};
use crate::time_series::symbolic::ordinal_utils::{
    argsort, factorials, lehmer_code_with_fact, validate_order,
};

/// Symbolize `x` and `y` into index-aligned ordinal symbol sequences.
///
/// # Arguments
///
/// * `x`, `y` - Raw series; only their overlapping range is used.
/// * `order` - Embedding dimension `m` (1 ≤ m ≤ [`MAX_ORDER`](super::ordinal_utils::MAX_ORDER)).
/// * `tau_x`, `tau_y` - Embedding delays of `x` and `y` in samples (≥ 1).
///
/// # Returns
///
/// Two sequences of symbols in `[0, m!)`, one per index in
/// `(m-1)·max(tau_x, tau_y) .. min(len x, len y)`. Both are empty when the
/// series are too short.
///
/// # Errors
///
/// [`TdteError::InvalidConfiguration`] for an unusable order or delay.
pub fn symbolize_continuous(
    x: &Array1<f64>,
    y: &Array1<f64>,
    order: usize,
    tau_x: usize,
    tau_y: usize,
) -> TdteResult<(Array1<usize>, Array1<usize>)> {
    validate_order(order)?;
    validate_delay("tau_x", tau_x)?;
    validate_delay("tau_y", tau_y)?;

    let indices = shared_valid_range(x.len(), y.len(), order, tau_x, tau_y);
    debug!(
        order,
        tau_x,
        tau_y,
        start = indices.start,
        n_valid = indices.len(),
        "continuous symbolization"
    );

    let x_embed = embed_series(x, indices.clone(), order, tau_x);
    let y_embed = embed_series(y, indices, order, tau_y);
    Ok((symbols_of(&x_embed), symbols_of(&y_embed)))
}

/// Symbolize a single series with delay `tau`.
///
/// Equivalent to the `x` half of [`symbolize_continuous`] with `tau_y = tau_x`.
pub fn symbolize_series(series: &Array1<f64>, order: usize, tau: usize) -> TdteResult<Array1<usize>> {
    validate_order(order)?;
    validate_delay("tau", tau)?;

    let indices = shared_valid_range(series.len(), series.len(), order, tau, tau);
    let embedded = embed_series(series, indices, order, tau);
    Ok(symbols_of(&embedded))
}

/// Map each embedding row to the symbol of its rank order.
///
/// The symbol is the lexicographic rank of the argsort pattern, i.e. its index
/// in [`PatternDictionary`](super::ordinal_utils::PatternDictionary).
fn symbols_of(embedded: &Array2<f64>) -> Array1<usize> {
    let order = embedded.ncols();
    let fact = factorials(order);
    let mut window = vec![0.0; order];
    let mut idx = vec![0usize; order];
    let mut out = Vec::with_capacity(embedded.nrows());

    for row in embedded.rows() {
        for (w, &v) in window.iter_mut().zip(row.iter()) {
            *w = v;
        }
        argsort(&window, &mut idx);
        out.push(lehmer_code_with_fact(&idx, &fact) as usize);
    }
    Array1::from(out)
}

fn validate_delay(parameter: &'static str, tau: usize) -> TdteResult<()> {
    if tau < 1 {
        return Err(TdteError::invalid_configuration(
            parameter,
            "embedding delay must be at least 1",
        ));
    }
    Ok(())
}
