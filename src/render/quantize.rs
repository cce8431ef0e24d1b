//! Magnitude to dot count.

use crate::core::{constants::BRAILLE_VERTICAL_RESOLUTION as VR, error::ChartError};

/// Map a fraction in `[0, 1]` to a whole number of dots in `0..=4`.
///
/// Adds one eighth before scaling and truncating, so anything at or above
/// 7/8 becomes a full column. Negative input counts as zero.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn round_four(x: f64) -> usize {
    ((x.max(0.0) + 1.0 / (2.0 * VR as f64)) * VR as f64) as usize
}

/// Number of dots needed to draw `value` when `max_value` spans
/// `max_cells` glyph rows.
///
/// Every whole cell contributes four dots; the fractional remainder is
/// rounded with [`round_four`]. The result is not capped at `4 * max_cells`.
/// Values below zero produce zero dots.
///
/// # Errors
/// [`ChartError::EmptyOrDegenerate`] when `max_value` is not a positive,
/// finite number.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub fn quantize(value: f64, max_value: f64, max_cells: usize) -> Result<usize, ChartError> {
    if !(max_value.is_finite() && max_value > 0.0) {
        return Err(ChartError::EmptyOrDegenerate);
    }

    let cells = value / max_value * max_cells as f64;
    let whole = cells.trunc();
    // `as` saturates, so a huge cell count pins at i64::MAX instead of wrapping.
    let mut dots = (whole as i64).saturating_mul(VR as i64);

    let remainder = cells - whole;
    let mut extra = round_four(remainder.abs()) as i64;
    // Only reachable for negative values.
    if remainder < 0.0 {
        extra = -extra;
    }
    dots = dots.saturating_add(extra);

    Ok(usize::try_from(dots.max(0)).unwrap_or(usize::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_four_thresholds() {
        assert_eq!(round_four(0.0), 0);
        assert_eq!(round_four(0.124), 0);
        assert_eq!(round_four(0.125), 1);
        assert_eq!(round_four(0.5), 2);
        assert_eq!(round_four(0.874), 3);
        assert_eq!(round_four(0.875), 4);
        assert_eq!(round_four(1.0), 4);
        assert_eq!(round_four(-3.0), 0);
    }
}
