//! Top-level bar chart entry point.
//!
//! ### Workflow
//! 1. keep only the most recent `2 * max_width + 2` values when a width
//!    limit is set,
//! 2. pair neighbours and quantize each side against the series maximum,
//! 3. pack dots into bottom-up glyph columns,
//! 4. pad + transpose the columns into rows and render them.

use tracing::trace;

use crate::{
    core::{
        config::Config,
        constants::{BRAILLE_HORIZONTAL_RESOLUTION as HR, WINDOW_SLACK},
        error::ChartError,
    },
    render::{grid::compose, layout::layout},
};

/// Most recent slice of `values` that fits `max_width` glyph cells.
/// `None` or `Some(0)` keeps everything.
#[inline]
#[must_use]
pub fn window(values: &[f64], max_width: Option<usize>) -> &[f64] {
    match max_width {
        Some(w) if w > 0 => {
            let keep = w.saturating_mul(HR).saturating_add(WINDOW_SLACK);
            &values[values.len().saturating_sub(keep)..]
        }
        _ => values,
    }
}

/// Render `values` as a bar chart at most `cfg.max_height` glyph rows tall.
///
/// Each glyph shows two consecutive values as its left and right dot
/// columns; a value equal to the series maximum fills `max_height` rows.
///
/// # Errors
/// [`ChartError::EmptyOrDegenerate`] if the (windowed) series is empty or
/// holds no positive value.
pub fn horizontal_bar_chart(values: &[f64], cfg: &Config) -> Result<String, ChartError> {
    let values = window(values, cfg.width_limit());
    let columns = layout(values, cfg.max_height)?;
    let grid = compose(&columns);
    trace!(
        values = values.len(),
        columns = columns.len(),
        rows = grid.height(),
        "composed bar chart"
    );
    grid.render()
}
