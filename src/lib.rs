//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod render;
pub mod telemetry;

pub use crate::core::{
    config::{Config, ConfigBuilder},
    data::{ParseErrorKind, ParseInputError, read_values},
    error::{ChartError, ConfigError, GraphError},
};

pub use render::{
    GlyphCell, GlyphColumn, Grid, Painter, compose, glyph, histogram, histogram_chart,
    horizontal_bar_chart, layout, pack, pair, quantize,
};

/// Convenience wrapper: bar chart of `values` at most `max_height` rows tall
/// and `max_width` glyph cells wide (`0` = unbounded).
///
/// # Errors
/// [`GraphError::Config`] for a zero height, [`GraphError::Chart`] when the
/// series has no positive value.
pub fn bar_chart(values: &[f64], max_height: usize, max_width: usize) -> Result<String, GraphError> {
    let cfg = Config::builder(max_height).max_width(max_width).build()?;
    Ok(horizontal_bar_chart(values, &cfg)?)
}
