//! Pair values into glyph columns.

use crate::{
    core::{constants::MAX_GRAPH_HEIGHT, error::ChartError},
    render::{
        pack::{GlyphColumn, pack},
        quantize::quantize,
    },
};

/// Two values at a time in input order; an odd tail is paired with `0.0`.
#[must_use]
pub fn pair(values: &[f64]) -> Vec<(f64, f64)> {
    let chunks = values.chunks_exact(2);
    let tail = chunks.remainder().first().map(|&l| (l, 0.0));
    chunks.map(|c| (c[0], c[1])).chain(tail).collect()
}

/// Largest value in the series, `None` when empty or not positive.
#[must_use]
pub fn positive_max(values: &[f64]) -> Option<f64> {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    (max.is_finite() && max > 0.0).then_some(max)
}

/// Quantize each pair against the maximum of the whole series and stack the
/// resulting dots. `max_height` is clamped to `MAX_GRAPH_HEIGHT`.
///
/// # Errors
/// [`ChartError::EmptyOrDegenerate`] if `values` is empty or has no
/// positive element.
pub fn layout(values: &[f64], max_height: usize) -> Result<Vec<GlyphColumn>, ChartError> {
    let max_value = positive_max(values).ok_or(ChartError::EmptyOrDegenerate)?;
    let max_height = max_height.min(MAX_GRAPH_HEIGHT);

    pair(values)
        .into_iter()
        .map(|(l, r)| {
            let left = quantize(l, max_value, max_height)?;
            let right = quantize(r, max_value, max_height)?;
            Ok(pack(left, right))
        })
        .collect()
}
