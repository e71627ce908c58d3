//! Error-free transformations for `f64` addition and squaring.
//!
//! Each function returns the low-order part of a double-double result: the
//! exact rounding error left behind by a standard `f64` operation that the
//! caller has already performed. No wider type is involved; the error is
//! recovered with a fixed sequence of rounded operations.

/// Dekker splitting multiplier, `2^27 + 1`.
///
/// Multiplying by this value and subtracting splits a 53-bit significand
/// into two non-overlapping 26-bit halves.
const MULTIPLIER: f64 = 134_217_729.0;

/// Compute the low part of the double-length sum `a + b`.
///
/// `sum` must be the rounded `a + b`. The result is the exact value of
/// `(a + b) - sum`, so `(sum, two_sum_low(a, b, sum))` is the exact sum as a
/// double-double pair. This holds for any finite `a` and `b` whose sum does
/// not overflow; for non-finite input the returned value is meaningless
/// (but the call never panics).
///
/// # Example
///
/// ```rust
/// use accunorm::math::two_sum_low;
///
/// let a = 1.0;
/// let b = 1e-20;
/// let sum = a + b;
/// assert_eq!(sum, 1.0);
/// assert_eq!(two_sum_low(a, b, sum), 1e-20);
/// ```
#[inline]
pub fn two_sum_low(a: f64, b: f64, sum: f64) -> f64 {
    let b_virtual = sum - a;
    // a_virtual = sum - b_virtual
    (a - (sum - b_virtual)) + (b - b_virtual)
}

/// Compute the low part of the double-length square `x * x`.
///
/// `p` must be the rounded `x * x`. The result is the exact value of
/// `x * x - p`.
///
/// No scaling is applied. The caller must keep `|x|` small enough that
/// neither the square nor the Dekker split overflows (`|x| < 2^500` is
/// comfortably safe) and large enough that the square does not lose bits to
/// the subnormal range. Out-of-range input yields a meaningless value.
#[inline]
pub fn square_low_unscaled(x: f64, p: f64) -> f64 {
    let hx = high_part_unscaled(x);
    let lx = x - hx;
    square_low(hx, lx, p)
}

/// Split `value` with Dekker's method and return the high half.
///
/// The low half is `value - high_part_unscaled(value)`. Overflows to a
/// non-finite value when `|value|` is within `2^27` of `f64::MAX`.
#[inline]
pub fn high_part_unscaled(value: f64) -> f64 {
    let c = MULTIPLIER * value;
    c - (c - value)
}

/// Compute the low part of the square of a split number.
///
/// `hx` and `lx` are the Dekker halves of `x` and `xx` is the rounded
/// `x * x`. Returns `x * x - xx` exactly, provided no intermediate product
/// underflows.
#[inline]
pub fn square_low(hx: f64, lx: f64, xx: f64) -> f64 {
    lx * lx - ((xx - hx * hx) - 2.0 * lx * hx)
}
