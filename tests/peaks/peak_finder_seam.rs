// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::test_helpers::te_curve_with_bump;
use tdte::time_series::PeakFinder;
use tdte::time_series::peaks::{
    LagStatistics, LocalMaximaFinder, PeakConstraints, PeakDetectionConfig, detect_peaks,
    detect_peaks_with,
};

/// Reports the global maximum if it clears the height constraint.
struct ArgMaxFinder;

impl PeakFinder for ArgMaxFinder {
    fn find_peaks(&self, signal: &[f64], constraints: &PeakConstraints) -> Vec<usize> {
        let best = signal
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .map(|(i, _)| i);
        match (best, constraints.height) {
            (Some(i), Some(h)) if signal[i] >= h => vec![i],
            (Some(i), None) => vec![i],
            _ => Vec::new(),
        }
    }
}

#[test]
fn custom_finder_receives_resolved_constraints() {
    // Edge maximum: a local-maxima finder never reports it, the argmax finder does.
    let lags: Vec<i64> = (0..10).collect();
    let stats = LagStatistics::from_pairs(&te_curve_with_bump(10, 0.1, 0, 0.9));
    let cfg = PeakDetectionConfig::default();

    let default = detect_peaks(1, &lags, &stats, 0.3, &cfg).unwrap();
    assert!(default.is_empty());

    let custom = detect_peaks_with(&ArgMaxFinder, 1, &lags, &stats, 0.3, &cfg).unwrap();
    assert_eq!(custom.lags(), vec![0]);

    let high = cfg.with_threshold(0.95);
    let custom = detect_peaks_with(&ArgMaxFinder, 1, &lags, &stats, 0.3, &high).unwrap();
    assert!(custom.is_empty());
}

#[test]
fn finder_works_behind_a_trait_object() {
    let lags: Vec<i64> = (0..12).collect();
    let stats = LagStatistics::from_pairs(&te_curve_with_bump(12, 0.1, 6, 0.7));
    let finder: &dyn PeakFinder = &LocalMaximaFinder;

    let peaks = detect_peaks_with(finder, 1, &lags, &stats, 0.3, &PeakDetectionConfig::default())
        .unwrap();
    assert_eq!(peaks.indices(), vec![6]);
}
