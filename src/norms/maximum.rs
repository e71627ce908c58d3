//! Maximum (L-infinity) norm.

/// Compute the maximum norm of `values`, the largest absolute value.
///
/// Unlike [`f64::max`], a NaN element is never skipped: once seen it is the
/// result.
///
/// Special cases:
///
/// - Any NaN element gives NaN.
/// - Any infinite element (and no NaN) gives `+inf`.
/// - An empty input gives `0.0`.
pub fn maximum_iter<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    values.into_iter().fold(0.0, |max, v| {
        let x = v.abs();
        // NaN compares false, so it has to be let through explicitly
        if x > max || x.is_nan() {
            x
        } else {
            max
        }
    })
}

/// Compute the maximum norm (L-infinity norm) of `v`, `max(|v[0]|, ..., |v[n-1]|)`.
///
/// # Example
///
/// ```rust
/// use accunorm::maximum;
///
/// assert_eq!(maximum(&[-1.0, 2.0, -3.0]), 3.0);
/// assert!(maximum(&[1.0, f64::NAN]).is_nan());
/// ```
pub fn maximum(v: &[f64]) -> f64 {
    maximum_iter(v.iter().copied())
}

/// Compute the maximum norm of a single value, `|x|`.
pub fn maximum_1d(x: f64) -> f64 {
    x.abs()
}

/// Compute the maximum norm of two values, `max(|x|, |y|)`.
pub fn maximum_2d(x: f64, y: f64) -> f64 {
    maximum(&[x, y])
}

/// Compute the maximum norm of three values, `max(|x|, |y|, |z|)`.
pub fn maximum_3d(x: f64, y: f64, z: f64) -> f64 {
    maximum(&[x, y, z])
}
