//! Property-based tests for the statistics core.

use proptest::prelude::*;
use repeatability_stats::{
    descriptive::DescriptiveStats,
    histogram::{Histogram, HistogramError},
    percentiles::compute_percentile,
    regression::TrendLine,
};

/// Finite sample values in a range typical of dial readings and angles.
fn sample_strategy(min_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1000.0_f64..1000.0, min_len..64)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_quartiles_are_ordered(values in sample_strategy(1)) {
        let stats = DescriptiveStats::new(values.iter().copied()).unwrap();
        prop_assert!(stats.min <= stats.q1);
        prop_assert!(stats.q1 <= stats.median);
        prop_assert!(stats.median <= stats.q3);
        prop_assert!(stats.q3 <= stats.max);
        prop_assert!(stats.iqr >= 0.0);
        prop_assert!(stats.whisker_low <= stats.whisker_high);
    }

    #[test]
    fn test_outliers_lie_outside_fences(values in sample_strategy(1)) {
        let stats = DescriptiveStats::new(values.iter().copied()).unwrap();
        let expected = values.iter().filter(|&&v| stats.is_outlier(v)).count();
        prop_assert_eq!(stats.outlier_count, expected);
        prop_assert!(stats.outliers.len() <= stats.outlier_count);
        prop_assert!(stats.outliers.is_sorted_by(|a, b| a < b));
    }

    #[test]
    fn test_percentile_is_monotonic(values in sample_strategy(1), a in 0.0_f64..100.0, b in 0.0_f64..100.0) {
        let mut sorted = values;
        sorted.sort_by(f64::total_cmp);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(compute_percentile(&sorted, lo).unwrap() <= compute_percentile(&sorted, hi).unwrap());
    }

    #[test]
    fn test_histogram_counts_every_value(values in sample_strategy(1), num_bins in 1_usize..32) {
        match Histogram::new(&values, None, num_bins) {
            Ok(histogram) => {
                prop_assert_eq!(histogram.bins.len(), num_bins);
                prop_assert_eq!(histogram.total_count(), values.len() as u64);
                for bin in &histogram.bins {
                    prop_assert_eq!(bin.linked.is_some(), bin.count > 0);
                }
            }
            Err(HistogramError::DegenerateRange { .. }) => {
                prop_assert!(values.iter().all(|&v| v == values[0]));
            }
            Err(err) => prop_assert!(false, "unexpected error: {err}"),
        }
    }

    #[test]
    fn test_histogram_members_respect_bounds(values in sample_strategy(2), num_bins in 1_usize..32) {
        let Ok(histogram) = Histogram::new(&values, None, num_bins) else {
            return Ok(());
        };
        let last = histogram.bins.len() - 1;
        for (i, bin) in histogram.bins.iter().enumerate() {
            let Some(linked) = bin.linked else { continue };
            // Without a linked field the sample itself is tracked.
            prop_assert!(linked.min >= bin.lower);
            if i == last {
                prop_assert!(linked.max <= bin.upper);
            } else {
                prop_assert!(linked.max < bin.upper);
            }
        }
    }

    #[test]
    fn test_trend_line_recovers_exact_line(
        slope in -10.0_f64..10.0,
        intercept in -100.0_f64..100.0,
        xs in prop::collection::btree_set(-500_i32..500, 2..32),
    ) {
        let x = xs.into_iter().map(f64::from).collect::<Vec<_>>();
        let y = x.iter().map(|x| slope * x + intercept).collect::<Vec<_>>();
        let line = TrendLine::fit(&x, &y).unwrap();
        prop_assert!((line.slope - slope).abs() < 1e-6);
        prop_assert!((line.intercept - intercept).abs() < 1e-6);
    }
}

#[test]
fn test_empty_sample_is_rejected() {
    assert!(DescriptiveStats::new(std::iter::empty::<f64>()).is_err());
}

#[test]
fn test_constant_sample_has_degenerate_range() {
    assert_eq!(
        Histogram::new(&[1.0, 1.0, 1.0, 1.0, 1.0], None, 10).unwrap_err(),
        HistogramError::DegenerateRange { value: 1.0 }
    );
}
