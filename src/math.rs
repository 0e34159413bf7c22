//! Scalar helpers shared by the style and color code.

/// Linear interpolation, exact at both ends: `a` at `t = 0`, `b` at `t = 1`.
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Clamp `value` into `[min, max]`.
///
/// Returns the stored value and whether the input had to be corrected.
/// NaN maps to `min`.
pub(crate) fn clamp_range(value: f64, min: f64, max: f64) -> (f64, bool) {
    if value.is_nan() {
        return (min, true);
    }
    let clamped = value.clamp(min, max);
    (clamped, clamped != value)
}
