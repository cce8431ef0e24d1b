//! Split per-side dot totals into a bottom-up stack of glyph cells.

use crate::{
    core::constants::{BRAILLE_VERTICAL_RESOLUTION as VR, MAX_GRAPH_HEIGHT},
    render::glyph::GlyphCell,
};

/// Cells of one value pair, index 0 at the bottom.
pub type GlyphColumn = Vec<GlyphCell>;

/// Fill cells bottom-up, at most four dots per side each, until both totals
/// are used up. Every column holds at least one cell.
///
/// ```text
/// 0 0 -> [(0,0)]
/// 5 4 -> [(4,4), (1,0)]
/// 7 9 -> [(4,4), (3,4), (0,1)]
/// 9 1 -> [(4,1), (4,0), (1,0)]
/// ```
#[must_use]
pub fn pack(mut left: usize, mut right: usize) -> GlyphColumn {
    let cells = left.max(right).div_ceil(VR).clamp(1, MAX_GRAPH_HEIGHT);
    let mut column = GlyphColumn::with_capacity(cells);
    while left > 0 || right > 0 {
        let take_left = left.min(VR);
        let take_right = right.min(VR);
        column.push(GlyphCell::new(take_left, take_right));
        left -= take_left;
        right -= take_right;
    }
    if column.is_empty() {
        column.push(GlyphCell::EMPTY);
    }
    column
}
