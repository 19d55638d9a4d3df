/// Rounds `value` to `decimals` places, resolving ties to the even neighbour.
///
/// The value is scaled by `10^decimals`, rounded half-to-even and scaled back, so a tie is
/// judged on the scaled binary value: `0.125` becomes `0.12` and `0.666` becomes `0.67`.
/// Non-finite values are returned unchanged.
pub fn round_half_even(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(decimals);
    (value * scale).round_ties_even() / scale
}

/// Tries to read `value` as an exact integer.
pub fn as_integral(value: f64) -> Option<i64> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}
