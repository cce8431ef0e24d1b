use std::{
    io::{Write, stdout},
    thread,
    time::{Duration, Instant},
};

use tracing::debug;

use crate::{
    core::{
        bounds::{fit_width, terminal_geometry},
        config::Config,
        constants::{DEFAULT_HIST_WIDTH, DEMO_HIST_BATCH},
        data::read_values_from_path,
        error::GraphError,
        rng::Lcg,
    },
    render::{HiddenCursor, Painter, histogram_chart, horizontal_bar_chart},
};

use super::parse::{BarsArgs, DemoHistArgs, HistArgs, TimeseriesArgs};

/// Histogram width: explicit request, else the default clamped to the terminal.
fn hist_width(requested: Option<usize>) -> usize {
    requested.unwrap_or_else(|| fit_width(DEFAULT_HIST_WIDTH, terminal_geometry()))
}

fn frame_pause(fps: u64) -> Duration {
    Duration::from_micros(1_000_000 / fps.max(1))
}

pub fn bars(a: &BarsArgs) -> Result<(), GraphError> {
    let t_ingest = Instant::now();
    let values = read_values_from_path(&a.input.file)?;
    debug!(
        rows = values.len(),
        micros = t_ingest.elapsed().as_micros(),
        "ingest"
    );

    let cfg = Config::builder(a.height).max_width_opt(a.width).build()?;

    let t_render = Instant::now();
    let chart = horizontal_bar_chart(&values, &cfg)?;
    debug!(micros = t_render.elapsed().as_micros(), "render");

    writeln!(stdout().lock(), "{chart}")?;
    Ok(())
}

pub fn hist(a: &HistArgs) -> Result<(), GraphError> {
    let t_ingest = Instant::now();
    let samples = read_values_from_path(&a.input.file)?;
    debug!(
        rows = samples.len(),
        micros = t_ingest.elapsed().as_micros(),
        "ingest"
    );

    let cfg = Config::builder(a.height)
        .max_width(hist_width(a.width))
        .bins_opt(a.bins)
        .build()?;

    let t_render = Instant::now();
    let chart = histogram_chart(&samples, &cfg)?;
    debug!(micros = t_render.elapsed().as_micros(), "render");

    writeln!(stdout().lock(), "{chart}")?;
    Ok(())
}

/// Sequential data `4·|sin(i/30)| + U(0,1)`; once the series is wider than
/// the chart the oldest values scroll off.
#[allow(clippy::cast_precision_loss)]
pub fn demo_timeseries(a: &TimeseriesArgs) -> Result<(), GraphError> {
    let cfg = Config::builder(a.height).max_width(a.width).build()?;
    let mut rng = Lcg::seed_from_time();
    let mut painter = Painter::stdout();
    let _cursor = HiddenCursor::new();
    let pause = frame_pause(a.fps);

    let mut nums = Vec::with_capacity(a.samples);
    let mut total_render_us: u128 = 0;
    for i in 0..a.samples {
        nums.push(4.0 * (i as f64 / 30.0).sin().abs() + rng.uniform());

        let t0 = Instant::now();
        let chart = horizontal_bar_chart(&nums, &cfg)?;
        painter.draw(&chart)?;
        total_render_us += t0.elapsed().as_micros();

        thread::sleep(pause);
    }

    if a.samples > 0 {
        debug!(
            frames = a.samples,
            avg_render_us = total_render_us as f64 / a.samples as f64,
            "demo complete"
        );
    }
    Ok(())
}

/// Two off-centre Gaussians (means -2 and +2) accumulating round by round.
#[allow(clippy::cast_precision_loss)]
pub fn demo_hist(a: &DemoHistArgs) -> Result<(), GraphError> {
    let cfg = Config::builder(a.height)
        .max_width(hist_width(a.width))
        .bins(a.bins)
        .build()?;
    let mut rng = Lcg::seed_from_time();
    let mut painter = Painter::stdout();
    let _cursor = HiddenCursor::new();
    let pause = frame_pause(a.fps);

    let mut vals = Vec::with_capacity(a.rounds * DEMO_HIST_BATCH * 2);
    let mut total_render_us: u128 = 0;
    for _ in 0..a.rounds {
        vals.extend((0..DEMO_HIST_BATCH).map(|_| rng.normal(-2.0)));
        vals.extend((0..DEMO_HIST_BATCH).map(|_| rng.normal(2.0)));

        let t0 = Instant::now();
        let chart = histogram_chart(&vals, &cfg)?;
        painter.draw(&chart)?;
        total_render_us += t0.elapsed().as_micros();

        thread::sleep(pause);
    }

    if a.rounds > 0 {
        debug!(
            frames = a.rounds,
            samples = vals.len(),
            avg_render_us = total_render_us as f64 / a.rounds as f64,
            "demo complete"
        );
    }
    Ok(())
}
