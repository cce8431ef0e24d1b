use std::num::NonZeroUsize;

use braille_bars::{
    ChartError, Config, histogram, histogram_chart,
    render::{duplicate_elements, duplication_factor},
};

fn bins(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).expect("non-zero")
}

#[test]
fn equal_width_bins_close_the_last_edge() {
    let counts = histogram(&[0.0, 1.0, 2.0, 3.0, 4.0], bins(4)).expect("histogram");
    assert_eq!(counts, vec![1.0, 1.0, 1.0, 2.0]);
}

#[test]
fn constant_samples_widen_the_range() {
    let counts = histogram(&[3.0, 3.0, 3.0], bins(2)).expect("histogram");
    assert_eq!(counts, vec![0.0, 3.0]);
}

#[test]
fn non_finite_samples_are_skipped() {
    let counts = histogram(&[f64::NAN, 0.0, 1.0, f64::INFINITY], bins(2)).expect("histogram");
    assert_eq!(counts, vec![1.0, 1.0]);
}

#[test]
fn range_wider_than_f64_max_still_bins() {
    let counts = histogram(&[-1e308, 0.0, 1e308], bins(3)).expect("histogram");
    assert_eq!(counts, vec![1.0, 1.0, 1.0]);

    let counts = histogram(&[-f64::MAX, f64::MAX], bins(2)).expect("histogram");
    assert_eq!(counts, vec![1.0, 1.0]);
}

#[test]
fn no_finite_samples_is_degenerate() {
    assert_eq!(histogram(&[], bins(3)), Err(ChartError::EmptyOrDegenerate));
    assert_eq!(
        histogram(&[f64::NAN], bins(3)),
        Err(ChartError::EmptyOrDegenerate)
    );
}

#[test]
fn counts_sum_to_sample_count() {
    let samples: Vec<f64> = (0..997).map(|i| (f64::from(i) * 0.37).sin()).collect();
    let counts = histogram(&samples, bins(13)).expect("histogram");
    assert_eq!(counts.len(), 13);
    assert!((counts.iter().sum::<f64>() - 997.0).abs() < f64::EPSILON);
}

#[test]
fn duplication_fills_target_width() {
    assert_eq!(duplication_factor(150, 50), 3);
    assert_eq!(duplication_factor(150, 10), 15);
    assert_eq!(duplication_factor(10, 50), 1);
    assert_eq!(duplication_factor(7, 0), 1);
}

#[test]
fn duplicate_elements_keeps_order() {
    assert_eq!(
        duplicate_elements(&[1.0, 2.0], 3),
        vec![1.0, 1.0, 1.0, 2.0, 2.0, 2.0]
    );
    assert_eq!(duplicate_elements(&[1.0, 2.0], 1), vec![1.0, 2.0]);
}

#[test]
fn histogram_chart_stretches_bins_over_the_width() {
    // counts [2, 1], width 2 cells = 4 values -> [2, 2, 1, 1]
    let cfg = Config::builder(1).max_width(2).bins(2).build().expect("config");
    let chart = histogram_chart(&[1.0, 1.0, 2.0], &cfg).expect("chart");
    assert_eq!(chart, "\u{28FF}\u{28E4}");
}

#[test]
fn histogram_chart_defaults_to_ten_bins() {
    let cfg = Config::builder(2).max_width(5).build().expect("config");
    let samples: Vec<f64> = (0..100).map(f64::from).collect();
    let chart = histogram_chart(&samples, &cfg).expect("chart");
    // ten equal bins, factor 1, five glyphs per row
    for row in chart.lines() {
        assert_eq!(row.chars().count(), 5);
    }
    assert_eq!(chart.lines().count(), 2);
}
