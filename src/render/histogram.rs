//! Equal-width binning + width filling for histogram charts.

use std::num::NonZeroUsize;

use tracing::debug;

use crate::{
    core::{
        bounds::finite_extrema,
        config::Config,
        constants::{BRAILLE_HORIZONTAL_RESOLUTION as HR, DEFAULT_BIN_COUNT, DEFAULT_HIST_WIDTH},
        error::ChartError,
    },
    render::chart::horizontal_bar_chart,
};

/// Count samples into `bins` equal-width bins spanning `[min, max]`.
///
/// * Every bin is half-open except the last, which also takes `max`.
/// * If all samples are equal the range widens to `[v - 0.5, v + 0.5]`.
/// * Non-finite samples are ignored.
///
/// # Errors
/// [`ChartError::EmptyOrDegenerate`] when there is no finite sample.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub fn histogram(samples: &[f64], bins: NonZeroUsize) -> Result<Vec<f64>, ChartError> {
    let (mut low, mut high) = finite_extrema(samples).ok_or(ChartError::EmptyOrDegenerate)?;
    if high - low == 0.0 {
        low -= 0.5;
        high += 0.5;
    }

    // Work on halves so `high - low` stays finite for any finite range.
    let n = bins.get();
    let half_low = low / 2.0;
    let half_span = high / 2.0 - half_low;
    let half_edge = |i: usize| half_low + half_span * (i as f64 / n as f64);

    let mut counts = vec![0.0; n];
    for &s in samples.iter().filter(|s| s.is_finite()) {
        let half = s / 2.0;
        let mut idx = (((half - half_low) / half_span * n as f64) as usize).min(n - 1);
        // Float error in the fast index can land one bin off; settle it
        // against the actual edges.
        if idx > 0 && half < half_edge(idx) {
            idx -= 1;
        } else if idx + 1 < n && half >= half_edge(idx + 1) {
            idx += 1;
        }
        counts[idx] += 1.0;
    }
    Ok(counts)
}

/// How many times to repeat each bin so `bin_count` bins fill `target_width`
/// values. Never less than one.
#[inline]
#[must_use]
pub fn duplication_factor(target_width: usize, bin_count: usize) -> usize {
    if bin_count == 0 {
        return 1;
    }
    (target_width / bin_count).max(1)
}

/// Repeat every element `n` times, keeping order: `[a, b], 2 -> [a, a, b, b]`.
#[must_use]
pub fn duplicate_elements(values: &[f64], n: usize) -> Vec<f64> {
    values
        .iter()
        .flat_map(|&v| std::iter::repeat_n(v, n))
        .collect()
}

/// Histogram of `samples` drawn as a bar chart.
///
/// `cfg.bins` picks the bin count (automatic rule: ten bins) and
/// `cfg.max_width` the width in glyph cells the bins are stretched over;
/// the bar chart itself is not windowed.
///
/// # Errors
/// [`ChartError::EmptyOrDegenerate`] without finite samples.
pub fn histogram_chart(samples: &[f64], cfg: &Config) -> Result<String, ChartError> {
    let bins = cfg
        .bins
        .and_then(NonZeroUsize::new)
        .or(NonZeroUsize::new(DEFAULT_BIN_COUNT))
        .unwrap_or(NonZeroUsize::MIN);
    let counts = histogram(samples, bins)?;

    let target = cfg.width_limit().unwrap_or(DEFAULT_HIST_WIDTH) * HR;
    let factor = duplication_factor(target, counts.len());
    debug!(
        samples = samples.len(),
        bins = bins.get(),
        factor,
        "binned histogram"
    );

    let bar_cfg = Config {
        max_width: None,
        ..cfg.clone()
    };
    horizontal_bar_chart(&duplicate_elements(&counts, factor), &bar_cfg)
}
