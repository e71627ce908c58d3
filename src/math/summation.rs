//! Compensated summation of `f64` values.
//!
//! Each partial sum carries the exact rounding error of its last addition
//! (see [`two_sum_low`]); the errors are accumulated separately and folded
//! back in at the end. For well-scaled inputs the result is within 1 ULP of
//! the exact sum.
//!
//! When the compensated result is not finite the sum is recomputed with
//! plain sequential addition. The compensation terms can turn into NaN
//! when an intermediate is infinite, while IEEE-754 addition would produce a
//! clean infinity; the fallback restores the standard special-case results.

use super::extended_precision::two_sum_low;

/// Running `(sum, correction)` pair.
#[derive(Clone, Copy, Debug, Default)]
struct Compensated {
    sum: f64,
    corr: f64,
}

impl Compensated {
    #[inline]
    fn add(&mut self, x: f64) {
        let s = self.sum + x;
        self.corr += two_sum_low(self.sum, x, s);
        self.sum = s;
    }

    #[inline]
    fn value(self) -> f64 {
        self.sum + self.corr
    }
}

/// Compute the sum of `values` with two-sum compensation.
///
/// The iterator is walked a second time only when the compensated result is
/// not finite, which is why it must be `Clone`.
///
/// Special cases:
///
/// - An empty input sums to `0.0`.
/// - Any NaN element gives NaN.
/// - Infinite elements (and no NaN) give an infinity with the sign of the
///   IEEE-754 sum; infinities of both signs give NaN.
pub fn sum_iter<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
    I::IntoIter: Clone,
{
    let iter = values.into_iter();

    let mut acc = Compensated::default();
    for x in iter.clone() {
        acc.add(x);
    }

    let result = acc.value();
    if !result.is_finite() {
        log::trace!("compensated sum is {result}; falling back to standard summation");
        return iter.fold(0.0, |sum, x| sum + x);
    }
    result
}

/// Compute the sum of the values in `v`.
///
/// # Example
///
/// ```rust
/// use accunorm::sum;
///
/// // naive left-to-right addition loses the 1.0 entirely
/// let v = [1e100, 1.0, -1e100];
/// assert_eq!(v.iter().sum::<f64>(), 0.0);
/// assert_eq!(sum(&v), 1.0);
/// ```
pub fn sum(v: &[f64]) -> f64 {
    sum_iter(v.iter().copied())
}

/// Compute `a + b + c` with compensation.
pub fn sum3(a: f64, b: f64, c: f64) -> f64 {
    sum(&[a, b, c])
}

/// Compute `a + b + c + d` with compensation.
pub fn sum4(a: f64, b: f64, c: f64, d: f64) -> f64 {
    sum(&[a, b, c, d])
}

/// Compute `a + b + c + d + e` with compensation.
pub fn sum5(a: f64, b: f64, c: f64, d: f64, e: f64) -> f64 {
    sum(&[a, b, c, d, e])
}

/// Compute `a + b + c + d + e + f` with compensation.
pub fn sum6(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> f64 {
    sum(&[a, b, c, d, e, f])
}
