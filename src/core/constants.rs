//! A collection of constants.

/// Braille has 2 horizontal dots, so one glyph shows two values side by side
pub const BRAILLE_HORIZONTAL_RESOLUTION: usize = 2;
/// Braille has 4 vertical dots per column
pub const BRAILLE_VERTICAL_RESOLUTION: usize = 4;

/// Extra raw values kept beyond `2 * max_width` when windowing a series.
pub const WINDOW_SLACK: usize = 2;

/// Tallest chart accepted, in glyph rows
pub const MAX_GRAPH_HEIGHT: usize = 1024;

/// `bars` subcommand: rows of glyphs
pub const DEFAULT_BAR_HEIGHT: usize = 3;
/// `hist` subcommand: rows of glyphs
pub const DEFAULT_HIST_HEIGHT: usize = 6;
/// Histogram width in glyph cells (150 values)
pub const DEFAULT_HIST_WIDTH: usize = 75;
/// Bin count used when the caller does not pick one
pub const DEFAULT_BIN_COUNT: usize = 10;

pub const DEMO_TIMESERIES_SAMPLES: usize = 200;
pub const DEMO_TIMESERIES_HEIGHT: usize = 3;
pub const DEMO_TIMESERIES_WIDTH: usize = 25;

pub const DEMO_HIST_ROUNDS: usize = 500;
/// Samples drawn from each Gaussian per round
pub const DEMO_HIST_BATCH: usize = 15;
pub const DEMO_HIST_BINS: usize = 50;
pub const DEMO_HIST_HEIGHT: usize = 10;

pub const DEMO_FPS: u64 = 10;

/// Columns assumed when the terminal size cannot be queried
pub const FALLBACK_TERMINAL_WIDTH: u16 = 80;
