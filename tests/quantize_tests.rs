use braille_bars::{ChartError, quantize, render::round_four};

#[test]
fn full_value_fills_every_cell() {
    assert_eq!(quantize(1.0, 1.0, 1), Ok(4));
    assert_eq!(quantize(3.0, 3.0, 5), Ok(20));
}

#[test]
fn eighths_of_a_single_cell() {
    let got: Vec<usize> = (0..=8)
        .map(|i| quantize(f64::from(i) / 8.0, 1.0, 1).expect("quantize"))
        .collect();
    assert_eq!(got, vec![0, 1, 1, 2, 2, 3, 3, 4, 4]);
}

#[test]
fn whole_cells_plus_rounded_remainder() {
    // 2.5 of 2 over 2 cells -> 2.5 cells -> 8 + 2 dots
    assert_eq!(quantize(2.5, 2.0, 2), Ok(10));
    // 1.5 cells -> 4 + 2
    assert_eq!(quantize(3.0, 4.0, 2), Ok(6));
}

#[test]
fn huge_cell_budget_does_not_overflow() {
    let dots = quantize(1.0, 1.0, usize::MAX / 2).expect("quantize");
    assert!(dots >= 1 << 30);
    assert!(quantize(0.5, 1.0, usize::MAX).is_ok());
}

#[test]
fn negative_values_draw_nothing() {
    assert_eq!(quantize(-0.5, 1.0, 1), Ok(0));
    assert_eq!(quantize(-3.0, 1.0, 2), Ok(0));
}

#[test]
fn non_positive_maximum_is_degenerate() {
    assert_eq!(quantize(1.0, 0.0, 3), Err(ChartError::EmptyOrDegenerate));
    assert_eq!(quantize(1.0, -2.0, 3), Err(ChartError::EmptyOrDegenerate));
    assert_eq!(quantize(1.0, f64::NAN, 3), Err(ChartError::EmptyOrDegenerate));
}

#[test]
fn round_four_is_exposed_with_the_eighth_bias() {
    assert_eq!(round_four(0.0), 0);
    assert_eq!(round_four(0.875), 4);
    assert_eq!(round_four(0.6), 2);
}
