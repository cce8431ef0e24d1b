//! Column-major glyph stacks to row-major text.

use crate::{
    core::error::ChartError,
    render::{glyph::GlyphCell, pack::GlyphColumn},
};

/// Rectangular cell matrix, `rows[0]` is the top of the chart.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<GlyphCell>>,
}

impl Grid {
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Vec<GlyphCell>] {
        &self.rows
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// One line per row, top first, joined with `\n` (no trailing newline).
    ///
    /// # Errors
    /// [`ChartError::InvalidCell`] if any cell holds more than four dots on
    /// a side.
    pub fn render(&self) -> Result<String, ChartError> {
        // Braille glyphs are three UTF-8 bytes each.
        let mut out = String::with_capacity(self.height() * (self.width() * 3 + 1));
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            for cell in row {
                out.push(cell.glyph()?);
            }
        }
        Ok(out)
    }
}

/// Top-pad every column with empty cells to the tallest height, then
/// transpose so that `rows[r][c] == columns[c][height - 1 - r]`.
#[must_use]
pub fn compose(columns: &[GlyphColumn]) -> Grid {
    let height = columns.iter().map(Vec::len).max().unwrap_or(0);

    let rows = (0..height)
        .rev()
        .map(|level| {
            columns
                .iter()
                .map(|col| col.get(level).copied().unwrap_or(GlyphCell::EMPTY))
                .collect()
        })
        .collect();

    Grid { rows }
}
