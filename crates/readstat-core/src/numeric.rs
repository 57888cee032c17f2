//! Numeric conventions shared by every exposed feature.
//!
//! Features are always finite: ratios go through [`safe_div`] and exposed
//! values are cut to two decimals with [`truncate_two_decimals`].

/// Quotients with a magnitude above this resolve to `0.0` in [`safe_div`].
pub const MAX_RATIO: f64 = 10_000.0;

/// Truncate toward zero to two decimal places.
///
/// This is not rounding: `1.279` becomes `1.27` and `-1.279` becomes `-1.27`.
/// Non-finite input yields `0.0`.
pub fn truncate_two_decimals(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    (value * 100.0).trunc() / 100.0
}

/// Divide, resolving degenerate quotients to `0.0`.
///
/// Returns `0.0` when the denominator is zero, when the quotient is not
/// finite, or when its magnitude exceeds [`MAX_RATIO`].
pub fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    let quotient = numerator / denominator;
    if !quotient.is_finite() || quotient.abs() > MAX_RATIO {
        return 0.0;
    }
    quotient
}

/// Lossless-enough conversion for counts used as formula operands.
#[allow(clippy::cast_precision_loss)]
pub(crate) const fn count(n: usize) -> f64 {
    n as f64
}
