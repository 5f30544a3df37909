//! Babylonian-method square roots.
//!
//! Unrelated to the card game; kept in the crate because it ships with it.

/// Convergence threshold used when the caller does not pick one.
pub const DEFAULT_PRECISION: f64 = 1e-10;

/// Approximate `sqrt(number)` by Babylonian iteration.
///
/// Refines `x ← (x + number / x) / 2` until two successive estimates are
/// within `precision` of each other. A precision of `0.0` still terminates:
/// the iteration reaches an exact f64 fixed point. Non-positive input
/// returns `0.0` rather than erroring.
///
/// ```
/// use crazy_eights::babylonian::{sqrt_approx, DEFAULT_PRECISION};
///
/// let root = sqrt_approx(9.0, DEFAULT_PRECISION);
/// assert!((root - 3.0).abs() < 1e-10);
/// assert_eq!(sqrt_approx(-4.0, DEFAULT_PRECISION), 0.0);
/// ```
#[must_use]
pub fn sqrt_approx(number: f64, precision: f64) -> f64 {
    if number <= 0.0 {
        return 0.0;
    }
    refine(number, number / 2.0, precision)
}

fn refine(number: f64, estimate: f64, precision: f64) -> f64 {
    let next = (estimate + number / estimate) / 2.0;
    // The bound is inclusive so a zero precision stops at the fixed point
    // instead of recursing forever.
    if (next - estimate).abs() <= precision {
        next
    } else {
        refine(number, next, precision)
    }
}
