//! Manhattan (L1, taxicab) norm.
//!
//! The absolute values are added with the compensated summation from
//! [`crate::math::summation`], including its fallback to plain addition for
//! non-finite results.

use crate::math::summation::sum_iter;

/// Compute the Manhattan norm of `values`, the sum of their absolute values.
///
/// Special cases:
///
/// - Any NaN element gives NaN.
/// - Any infinite element (and no NaN) gives `+inf`.
/// - An empty input gives `0.0`.
pub fn manhattan_iter<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
    I::IntoIter: Clone,
{
    sum_iter(values.into_iter().map(f64::abs))
}

/// Compute the Manhattan norm (L1 norm) of `v`, `|v[0]| + ... + |v[n-1]|`.
///
/// # Example
///
/// ```rust
/// use accunorm::manhattan;
///
/// assert_eq!(manhattan(&[-1.0, 2.0, -3.0]), 6.0);
/// assert_eq!(manhattan(&[]), 0.0);
/// ```
pub fn manhattan(v: &[f64]) -> f64 {
    manhattan_iter(v.iter().copied())
}

/// Compute the Manhattan norm of a single value, `|x|`.
pub fn manhattan_1d(x: f64) -> f64 {
    x.abs()
}

/// Compute the Manhattan norm of two values, `|x| + |y|`.
pub fn manhattan_2d(x: f64, y: f64) -> f64 {
    manhattan(&[x, y])
}

/// Compute the Manhattan norm of three values, `|x| + |y| + |z|`.
pub fn manhattan_3d(x: f64, y: f64, z: f64) -> f64 {
    manhattan(&[x, y, z])
}
