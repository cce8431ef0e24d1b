//! Centralised error types used across the crate.

use std::io;

use thiserror::Error;

use crate::core::data::ParseInputError;

/// Faults raised by the rendering core.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    /// No values, or the largest value is not positive.
    #[error("chart needs at least one positive value")]
    EmptyOrDegenerate,
    /// A glyph cell carried more than four dots on one side.
    #[error("glyph cell ({left}, {right}) out of range, each side must be 0..=4")]
    InvalidCell { left: usize, right: usize },
}

/// Precise configuration faults.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_height must be at least one glyph row")]
    ZeroHeight,
    #[error("max_height {got} exceeds the limit of {max} glyph rows")]
    HeightTooLarge { got: usize, max: usize },
    #[error("bin count must be at least 1")]
    ZeroBins,
}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Input(#[from] ParseInputError),
    #[error(transparent)]
    Chart(#[from] ChartError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
