// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::errors::{TdteError, TdteResult};

/// Largest embedding dimension accepted; a [`PatternDictionary`] holds `m!` patterns.
pub const MAX_ORDER: usize = 10;

/// Stable argsort for f64 values.
///
/// Writes into `idx` the positions that would sort `window` ascending. Ties keep
/// their original order, and NaNs sort after every number.
pub fn argsort(window: &[f64], idx: &mut [usize]) {
    for (i, val) in idx.iter_mut().enumerate() {
        *val = i;
    }
    // sort_by is stable, so equal keys stay in position order
    idx.sort_by(|&i, &j| {
        let (a, b) = (window[i], window[j]);
        a.is_nan()
            .cmp(&b.is_nan())
            .then_with(|| a.partial_cmp(&b).unwrap_or(Ordering::Equal))
    });
}

/// Lexicographic rank (Lehmer code) of a permutation.
///
/// Works on any permutation of distinct integers, so both 0-based and 1-based
/// patterns give the same rank. Only meaningful for `perm.len() <= 20`.
pub fn lehmer_code(perm: &[usize]) -> u64 {
    lehmer_code_with_fact(perm, &factorials(perm.len()))
}

/// `fact[i] = i!` for `i < n` (at least one entry).
pub(crate) fn factorials(n: usize) -> Vec<u64> {
    let mut fact = vec![1u64; n.max(1)];
    for i in 1..n {
        fact[i] = fact[i - 1] * i as u64;
    }
    fact
}

/// [`lehmer_code`] with precomputed factorials from [`factorials`].
pub(crate) fn lehmer_code_with_fact(perm: &[usize], fact: &[u64]) -> u64 {
    let n = perm.len();
    let mut acc = 0u64;
    for i in 0..n {
        let smaller_after = perm[i + 1..].iter().filter(|&&p| p < perm[i]).count() as u64;
        acc += smaller_after * fact[n - 1 - i];
    }
    acc
}

/// Bijection between ordinal patterns of `{1..m}` and symbols `0..m!`.
///
/// Symbols follow the lexicographic order of the patterns, so `(1, 2, .., m)`
/// is symbol 0 and `(m, .., 2, 1)` is symbol `m! - 1`.
#[derive(Debug, Clone)]
pub struct PatternDictionary {
    order: usize,
    patterns: Vec<Vec<usize>>,
    symbols: HashMap<Vec<usize>, usize>,
}

impl PatternDictionary {
    pub fn new(order: usize) -> TdteResult<Self> {
        validate_order(order)?;

        let mut patterns = Vec::new();
        let mut current: Vec<usize> = (1..=order).collect();
        loop {
            patterns.push(current.clone());
            if !next_permutation(&mut current) {
                break;
            }
        }

        let symbols = patterns
            .iter()
            .enumerate()
            .map(|(symbol, p)| (p.clone(), symbol))
            .collect();

        Ok(Self {
            order,
            patterns,
            symbols,
        })
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of patterns, `m!`.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Symbol of a 1-based pattern, `None` if it is not a permutation of `{1..m}`.
    pub fn symbol_of(&self, pattern: &[usize]) -> Option<usize> {
        self.symbols.get(pattern).copied()
    }

    pub fn pattern_of(&self, symbol: usize) -> Option<&[usize]> {
        self.patterns.get(symbol).map(Vec::as_slice)
    }
}

pub(crate) fn validate_order(order: usize) -> TdteResult<()> {
    if order < 1 {
        return Err(TdteError::invalid_configuration(
            "m",
            "embedding dimension must be at least 1",
        ));
    }
    if order > MAX_ORDER {
        return Err(TdteError::invalid_configuration(
            "m",
            format!("embedding dimension {order} exceeds the supported maximum of {MAX_ORDER}"),
        ));
    }
    Ok(())
}

/// Advance `perm` to the next permutation in lexicographic order.
/// Returns `false` once `perm` is the last one.
fn next_permutation(perm: &mut [usize]) -> bool {
    let n = perm.len();
    if n < 2 {
        return false;
    }
    let mut i = n - 1;
    while i > 0 && perm[i - 1] >= perm[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let mut j = n - 1;
    while perm[j] <= perm[i - 1] {
        j -= 1;
    }
    perm.swap(i - 1, j);
    perm[i..].reverse();
    true
}
