pub mod chart;
pub mod glyph;
pub mod grid;
pub mod histogram;
pub mod layout;
pub mod pack;
pub mod painter;
pub mod quantize;

pub use chart::{horizontal_bar_chart, window};
pub use glyph::{GlyphCell, glyph};
pub use grid::{Grid, compose};
pub use histogram::{duplicate_elements, duplication_factor, histogram, histogram_chart};
pub use layout::{layout, pair};
pub use pack::{GlyphColumn, pack};
pub use painter::{HiddenCursor, Painter};
pub use quantize::{quantize, round_four};
