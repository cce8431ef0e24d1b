use braille_bars::{
    ChartError, Config, GraphError, bar_chart, core::constants::MAX_GRAPH_HEIGHT,
    horizontal_bar_chart, render::window,
};

fn cfg(max_height: usize) -> Config {
    Config::builder(max_height).build().expect("config")
}

#[test]
fn single_row_chart() {
    let chart = horizontal_bar_chart(&[1.0, 2.0, 3.0, 4.0], &cfg(1)).expect("chart");
    assert_eq!(chart, "\u{28E0}\u{28FE}");
}

#[test]
fn two_row_chart_grows_bottom_up() {
    let chart = horizontal_bar_chart(&[1.0, 2.0, 3.0, 4.0], &cfg(2)).expect("chart");
    assert_eq!(chart, " \u{28FC}\n\u{28FC}\u{28FF}");
}

#[test]
fn equal_values_fill_every_row() {
    let chart = horizontal_bar_chart(&[5.0; 4], &cfg(4)).expect("chart");
    let rows: Vec<&str> = chart.lines().collect();
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|r| *r == "\u{28FF}\u{28FF}"));
}

#[test]
fn equal_values_odd_count_leaves_last_right_column_empty() {
    let chart = horizontal_bar_chart(&[5.0; 3], &cfg(4)).expect("chart");
    let rows: Vec<&str> = chart.lines().collect();
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|r| *r == "\u{28FF}\u{2847}"));
}

#[test]
fn zero_values_render_as_blank_cells() {
    let chart = horizontal_bar_chart(&[0.0, 0.0, 4.0, 4.0], &cfg(1)).expect("chart");
    assert_eq!(chart, " \u{28FF}");
}

#[test]
fn degenerate_input_is_an_error() {
    assert_eq!(
        horizontal_bar_chart(&[], &cfg(3)),
        Err(ChartError::EmptyOrDegenerate)
    );
    assert_eq!(
        horizontal_bar_chart(&[0.0, 0.0, 0.0], &cfg(3)),
        Err(ChartError::EmptyOrDegenerate)
    );
}

#[test]
fn window_keeps_most_recent_values() {
    let values: Vec<f64> = (1..=20).map(f64::from).collect();
    assert_eq!(window(&values, Some(3)), &values[12..]);
    assert_eq!(window(&values, Some(100)), &values[..]);
    assert_eq!(window(&values, Some(0)), &values[..]);
    assert_eq!(window(&values, None), &values[..]);
}

#[test]
fn width_limit_scales_against_the_window_maximum() {
    // The spike falls outside the window, so the tail is scaled on its own.
    let mut values = vec![100.0];
    values.extend([1.0; 4]);
    let cfg = Config::builder(1).max_width(1).build().expect("config");
    let chart = horizontal_bar_chart(&values, &cfg).expect("chart");
    assert_eq!(chart, "\u{28FF}\u{28FF}");
}

#[test]
fn oversized_height_is_bounded() {
    let cfg = Config {
        max_height: 1 << 40,
        max_width: None,
        bins: None,
    };
    let chart = horizontal_bar_chart(&[1.0, 0.5], &cfg).expect("chart");
    assert_eq!(chart.lines().count(), MAX_GRAPH_HEIGHT);
}

#[test]
fn bar_chart_helper_validates_config() {
    assert!(matches!(bar_chart(&[1.0], 0, 0), Err(GraphError::Config(_))));
    assert!(matches!(
        bar_chart(&[], 2, 0),
        Err(GraphError::Chart(ChartError::EmptyOrDegenerate))
    ));
    assert_eq!(bar_chart(&[2.0, 1.0], 1, 0).expect("chart"), "\u{28E7}");
}
