//! Dot-count pair to braille glyph lookup.
//!
//! A cell is two dot columns, each filled from the bottom up with 0..=4
//! dots. Braille numbers its dots
//!
//! ```text
//!   1 4        0x01 0x08
//!   2 5        0x02 0x10
//!   3 6        0x04 0x20
//!   7 8        0x40 0x80
//! ```
//!
//! so "n dots from the bottom" is a fixed mask per column; a cell's scalar
//! is `U+2800 | left_mask | right_mask`. The table is built once at compile
//! time and indexed by `left * 5 + right`.

use crate::core::{constants::BRAILLE_VERTICAL_RESOLUTION as VR, error::ChartError};

/// Left column filled bottom-up with 0..=4 dots (7, 3, 2, 1).
const LEFT_MASKS: [u32; VR + 1] = [0x00, 0x40, 0x44, 0x46, 0x47];
/// Right column filled bottom-up with 0..=4 dots (8, 6, 5, 4).
const RIGHT_MASKS: [u32; VR + 1] = [0x00, 0x80, 0xA0, 0xB0, 0xB8];

const BRAILLE_BASE: u32 = 0x2800;
const SIDE: usize = VR + 1;

static GLYPHS: [char; SIDE * SIDE] = build_table();

const fn build_table() -> [char; SIDE * SIDE] {
    let mut table = [' '; SIDE * SIDE];
    let mut left = 0;
    while left < SIDE {
        let mut right = 0;
        while right < SIDE {
            // (0, 0) stays a plain space, not the blank braille pattern.
            if left != 0 || right != 0 {
                let scalar = BRAILLE_BASE | LEFT_MASKS[left] | RIGHT_MASKS[right];
                table[left * SIDE + right] = match char::from_u32(scalar) {
                    Some(c) => c,
                    None => panic!("braille scalar out of range"),
                };
            }
            right += 1;
        }
        left += 1;
    }
    table
}

/// One character cell: dots stacked from the bottom in each column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GlyphCell {
    pub left: usize,
    pub right: usize,
}

impl GlyphCell {
    /// The empty cell, rendered as a space.
    pub const EMPTY: Self = Self { left: 0, right: 0 };

    #[inline]
    #[must_use]
    pub const fn new(left: usize, right: usize) -> Self {
        Self { left, right }
    }

    #[inline]
    pub fn glyph(self) -> Result<char, ChartError> {
        glyph(self.left, self.right)
    }
}

impl From<(usize, usize)> for GlyphCell {
    #[inline]
    fn from((left, right): (usize, usize)) -> Self {
        Self { left, right }
    }
}

/// Character for `left` and `right` bottom-aligned dots.
#[inline]
pub fn glyph(left: usize, right: usize) -> Result<char, ChartError> {
    if left > VR || right > VR {
        return Err(ChartError::InvalidCell { left, right });
    }
    Ok(GLYPHS[left * SIDE + right])
}
