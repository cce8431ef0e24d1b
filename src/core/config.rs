//! Run-time configuration object + fluent builder.

use crate::core::{constants::MAX_GRAPH_HEIGHT, error::ConfigError};

/// Immutable display parameters handed to the chart builders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Tallest bar, in glyph rows.
    pub max_height: usize,
    /// Widest chart, in glyph cells. `None` means unbounded.
    pub max_width: Option<usize>,
    /// Histogram bin count. `None` picks the automatic rule.
    pub bins: Option<usize>,
}

impl Config {
    #[inline]
    pub fn builder(max_height: usize) -> ConfigBuilder {
        ConfigBuilder::new(max_height)
    }

    /// Width limit with the "zero means unbounded" convention folded in.
    #[inline]
    #[must_use]
    pub fn width_limit(&self) -> Option<usize> {
        self.max_width.filter(|&w| w > 0)
    }
}

/// Fluent builder, validated in `build`.
#[derive(Debug)]
pub struct ConfigBuilder {
    max_height: usize,
    max_width: Option<usize>,
    bins: Option<usize>,
}

impl ConfigBuilder {
    pub(crate) fn new(max_height: usize) -> Self {
        Self {
            max_height,
            max_width: None,
            bins: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn max_width(mut self, cells: usize) -> Self {
        self.max_width = Some(cells);
        self
    }
    #[inline]
    #[must_use]
    pub fn max_width_opt(mut self, cells: Option<usize>) -> Self {
        if let Some(w) = cells {
            self.max_width = Some(w);
        }
        self
    }
    #[inline]
    #[must_use]
    pub fn bins(mut self, n: usize) -> Self {
        self.bins = Some(n);
        self
    }
    #[inline]
    #[must_use]
    pub fn bins_opt(mut self, n: Option<usize>) -> Self {
        if let Some(b) = n {
            self.bins = Some(b);
        }
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        if self.max_height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if self.max_height > MAX_GRAPH_HEIGHT {
            return Err(ConfigError::HeightTooLarge {
                got: self.max_height,
                max: MAX_GRAPH_HEIGHT,
            });
        }
        if self.bins == Some(0) {
            return Err(ConfigError::ZeroBins);
        }
        Ok(Config {
            max_height: self.max_height,
            max_width: self.max_width,
            bins: self.bins,
        })
    }
}

/// Ergonomic `?` on a builder chain.
impl From<ConfigBuilder> for Result<Config, ConfigError> {
    fn from(b: ConfigBuilder) -> Self {
        b.build()
    }
}
