// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::test_helpers::te_curve_with_bump;
use tdte::time_series::peaks::{
    CouplingLag, LagStatistics, PeakDetectionConfig, PeakSet, detect_peaks, resolve_coupling_lag,
};

#[test]
fn no_peak_means_zero_lag() {
    let decision = resolve_coupling_lag(&PeakSet::default());
    assert_eq!(decision, CouplingLag::AssumedZero);
    assert_eq!(decision.lag(), 0);
    assert!(!decision.is_detected());
}

#[test]
fn strongest_peak_sets_the_lag() {
    let lags: Vec<i64> = (0..20).collect();
    let mut pairs = te_curve_with_bump(20, 0.1, 12, 0.9);
    pairs[4] = (0.5, 0.02);
    let stats = LagStatistics::from_pairs(&pairs);

    let peaks = detect_peaks(1, &lags, &stats, 0.3, &PeakDetectionConfig::default()).unwrap();
    assert_eq!(peaks.lags(), vec![4, 12]);

    match resolve_coupling_lag(&peaks) {
        CouplingLag::Detected {
            lag,
            strength,
            significant,
        } => {
            assert_eq!(lag, 12);
            assert_eq!(strength, 0.9);
            assert!(significant);
        }
        CouplingLag::AssumedZero => panic!("expected a detected lag"),
    }
}

#[test]
fn equal_peaks_prefer_the_earliest_lag() {
    let lags: Vec<i64> = (0..30).collect();
    let mut pairs = te_curve_with_bump(30, 0.1, 5, 0.8);
    pairs[20] = (0.8, 0.01);
    let stats = LagStatistics::from_pairs(&pairs);

    let peaks = detect_peaks(1, &lags, &stats, 0.3, &PeakDetectionConfig::default()).unwrap();
    assert_eq!(peaks.lags(), vec![5, 20]);
    assert_eq!(resolve_coupling_lag(&peaks).lag(), 5);
}
