//! Geometry helpers: sample extrema + terminal size plumbing.

use terminal_size::{Height, Width, terminal_size};

use crate::core::constants::FALLBACK_TERMINAL_WIDTH;

/// Inclusive `(min, max)` over the finite samples, `None` if there are none.
#[must_use]
pub fn finite_extrema(samples: &[f64]) -> Option<(f64, f64)> {
    let (mut low, mut high) = (f64::INFINITY, f64::NEG_INFINITY);
    for &s in samples.iter().filter(|s| s.is_finite()) {
        low = low.min(s);
        high = high.max(s);
    }
    if low.is_finite() && high.is_finite() {
        Some((low, high))
    } else {
        None
    }
}

/// Current terminal geometry (80 column fallback).
#[inline]
#[must_use]
pub fn terminal_geometry() -> (Width, Height) {
    terminal_size().unwrap_or((Width(FALLBACK_TERMINAL_WIDTH), Height(30)))
}

/// Clamp a requested chart width (glyph cells) to what the terminal can show.
/// One column is left free so the cursor never wraps.
#[inline]
#[must_use]
pub fn fit_width(requested: usize, (w, _): (Width, Height)) -> usize {
    let available = usize::from(w.0).saturating_sub(1).max(1);
    requested.min(available)
}
