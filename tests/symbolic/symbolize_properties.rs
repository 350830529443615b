// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::test_helpers::{factorial, generate_gaussian_series, generate_uniform_series};
use tdte::time_series::symbolic::ordinal_utils::argsort;
use tdte::time_series::symbolic::{PatternDictionary, symbolize_continuous, symbolize_series};

#[test]
fn lengths_match_the_valid_index_count() {
    let x = generate_gaussian_series(200, 0.0, 1.0, 42);
    let y = generate_uniform_series(180, 7);

    for m in 1..=5usize {
        for tau_x in 1..=3usize {
            for tau_y in 1..=3usize {
                let (sx, sy) = symbolize_continuous(&x, &y, m, tau_x, tau_y).unwrap();
                let start = (m - 1) * tau_x.max(tau_y);
                let expected = 180usize.saturating_sub(start);
                assert_eq!(sx.len(), expected, "m={m} tau_x={tau_x} tau_y={tau_y}");
                assert_eq!(sy.len(), expected, "m={m} tau_x={tau_x} tau_y={tau_y}");
            }
        }
    }
}

#[test]
fn symbols_stay_in_range() {
    let x = generate_gaussian_series(500, 0.0, 2.0, 1);
    let y = generate_gaussian_series(500, 1.0, 0.5, 2);

    for m in 2..=6usize {
        let (sx, sy) = symbolize_continuous(&x, &y, m, 2, 3).unwrap();
        let bound = factorial(m);
        assert!(sx.iter().all(|&s| s < bound));
        assert!(sy.iter().all(|&s| s < bound));
    }
}

#[test]
fn symbolization_is_deterministic() {
    let x = generate_uniform_series(300, 11);
    let y = generate_uniform_series(300, 12);

    let first = symbolize_continuous(&x, &y, 4, 2, 1).unwrap();
    let _other = symbolize_continuous(&y, &x, 3, 1, 1).unwrap();
    let second = symbolize_continuous(&x, &y, 4, 2, 1).unwrap();
    assert_eq!(first, second);
}

#[test]
fn equal_delays_match_single_series_symbolization() {
    let x = generate_gaussian_series(120, 0.0, 1.0, 3);
    let y = generate_gaussian_series(150, 0.0, 1.0, 4);

    let (sx, sy) = symbolize_continuous(&x, &y, 3, 2, 2).unwrap();
    assert_eq!(sx, symbolize_series(&x, 3, 2).unwrap());

    let y_head = y.slice(ndarray::s![..120]).to_owned();
    assert_eq!(sy, symbolize_series(&y_head, 3, 2).unwrap());
}

#[test]
fn all_patterns_appear_in_a_long_random_series() {
    let x = generate_uniform_series(5_000, 99);
    let symbols = symbolize_series(&x, 3, 1).unwrap();
    let mut seen = [false; 6];
    for &s in symbols.iter() {
        seen[s] = true;
    }
    assert!(seen.iter().all(|&b| b));
}

#[test]
fn symbols_agree_with_dictionary_lookup() {
    let x = generate_gaussian_series(400, 0.0, 1.0, 21);
    let (m, tau) = (4usize, 2usize);
    let dict = PatternDictionary::new(m).unwrap();

    let symbols = symbolize_series(&x, m, tau).unwrap();
    let start = (m - 1) * tau;
    assert_eq!(symbols.len(), x.len() - start);

    let mut idx = vec![0usize; m];
    for (row, &symbol) in symbols.iter().enumerate() {
        let t = start + row;
        let window: Vec<f64> = (0..m).map(|j| x[t - (m - 1 - j) * tau]).collect();
        argsort(&window, &mut idx);
        let pattern: Vec<usize> = idx.iter().map(|&i| i + 1).collect();
        assert_eq!(dict.symbol_of(&pattern), Some(symbol), "row {row}");
    }
}
