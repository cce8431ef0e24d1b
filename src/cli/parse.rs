use clap::{Args, Parser, Subcommand};

use crate::core::constants::{
    DEFAULT_BAR_HEIGHT, DEFAULT_HIST_HEIGHT, DEMO_FPS, DEMO_HIST_BINS, DEMO_HIST_HEIGHT,
    DEMO_HIST_ROUNDS, DEMO_TIMESERIES_HEIGHT, DEMO_TIMESERIES_SAMPLES, DEMO_TIMESERIES_WIDTH,
};

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "braille-bars",
    about = "Compact bar charts and histograms in braille glyphs"
)]
pub struct Cli {
    /// Emit debug logs and timings on stderr
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Bar chart of numbers, one per line
    Bars(BarsArgs),
    /// Histogram of numbers, one per line
    Hist(HistArgs),
    /// Animated sliding-window time series demo
    DemoTimeseries(TimeseriesArgs),
    /// Animated histogram of two Gaussians
    DemoHist(DemoHistArgs),
}

/// Where the numbers come from.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Input path (use `-` for stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,
}

/// `braille-bars bars …`
#[derive(Args, Debug)]
pub struct BarsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Tallest bar, in glyph rows
    #[arg(long, default_value_t = DEFAULT_BAR_HEIGHT)]
    pub height: usize,

    /// Keep only the most recent values that fit this many glyph cells
    #[arg(long)]
    pub width: Option<usize>,
}

/// `braille-bars hist …`
#[derive(Args, Debug)]
pub struct HistArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Tallest bin, in glyph rows
    #[arg(long, default_value_t = DEFAULT_HIST_HEIGHT)]
    pub height: usize,

    /// Target width in glyph cells (defaults to the terminal width, at most 75)
    #[arg(long)]
    pub width: Option<usize>,

    /// Number of bins (automatic if omitted)
    #[arg(long)]
    pub bins: Option<usize>,
}

/// `braille-bars demo-timeseries …`
#[derive(Args, Debug)]
pub struct TimeseriesArgs {
    #[arg(long, default_value_t = DEMO_TIMESERIES_SAMPLES)]
    pub samples: usize,
    #[arg(long, default_value_t = DEMO_TIMESERIES_HEIGHT)]
    pub height: usize,
    #[arg(long, default_value_t = DEMO_TIMESERIES_WIDTH)]
    pub width: usize,
    #[arg(long, default_value_t = DEMO_FPS)]
    pub fps: u64,
}

/// `braille-bars demo-hist …`
#[derive(Args, Debug)]
pub struct DemoHistArgs {
    #[arg(long, default_value_t = DEMO_HIST_ROUNDS)]
    pub rounds: usize,
    #[arg(long, default_value_t = DEMO_HIST_BINS)]
    pub bins: usize,
    #[arg(long, default_value_t = DEMO_HIST_HEIGHT)]
    pub height: usize,
    /// Target width in glyph cells (defaults to the terminal width, at most 75)
    #[arg(long)]
    pub width: Option<usize>,
    #[arg(long, default_value_t = DEMO_FPS)]
    pub fps: u64,
}
