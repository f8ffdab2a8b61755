//! Small numeric helpers.

/// Square of a value. Useful for avoiding `powi(2)`.
#[inline]
pub fn sq(x: f64) -> f64 {
    x * x
}

/// Compute `a1 * b1 + a2 * b2`.
///
/// Uses a fused multiply-add for the second product, which keeps one
/// rounding step out of the sum.
#[inline]
pub fn linear_combination(a1: f64, b1: f64, a2: f64, b2: f64) -> f64 {
    a2.mul_add(b2, a1 * b1)
}

/// Normalize an angle to `[0, 2π)`.
#[inline]
pub fn normalize_angle_positive(angle: f64) -> f64 {
    let a = angle.rem_euclid(std::f64::consts::TAU);
    // rem_euclid can round up to TAU for tiny negative inputs
    if a >= std::f64::consts::TAU { 0.0 } else { a }
}
