//! Shared helpers for integration tests: an exact oracle and random vectors.
//!
//! Every finite `f64` is a dyadic rational `m * 2^e`, so sums and squares of
//! doubles can be computed exactly with big integers. [`Dyadic`] does that,
//! and rounds back to the nearest `f64` for comparison.

#![allow(dead_code)]

use num_bigint::{BigInt, BigUint, Sign};
use rand::Rng;

/// Exact value `m * 2^e`.
#[derive(Clone, Debug)]
pub struct Dyadic {
    m: BigInt,
    e: i64,
}

impl Dyadic {
    pub fn zero() -> Self {
        Self {
            m: BigInt::from(0u8),
            e: 0,
        }
    }

    /// Exact value of a finite double.
    pub fn from_f64(x: f64) -> Self {
        assert!(x.is_finite(), "oracle only handles finite values, got {}", x);
        let bits = x.to_bits();
        let negative = bits >> 63 == 1;
        let exp_field = ((bits >> 52) & 0x7ff) as i64;
        let frac = bits & ((1u64 << 52) - 1);
        let (mantissa, e) = if exp_field == 0 {
            (frac, -1074)
        } else {
            (frac | (1u64 << 52), exp_field - 1075)
        };
        let sign = if mantissa == 0 {
            Sign::NoSign
        } else if negative {
            Sign::Minus
        } else {
            Sign::Plus
        };
        Self {
            m: BigInt::from_biguint(sign, BigUint::from(mantissa)),
            e,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.m.sign() == Sign::NoSign
    }

    pub fn add(&self, other: &Dyadic) -> Dyadic {
        if self.is_zero() {
            return other.clone();
        }
        if other.is_zero() {
            return self.clone();
        }
        let e = self.e.min(other.e);
        let a = &self.m << ((self.e - e) as usize);
        let b = &other.m << ((other.e - e) as usize);
        Dyadic { m: a + b, e }
    }

    pub fn neg(&self) -> Dyadic {
        Dyadic {
            m: -&self.m,
            e: self.e,
        }
    }

    pub fn mul(&self, other: &Dyadic) -> Dyadic {
        Dyadic {
            m: &self.m * &other.m,
            e: self.e + other.e,
        }
    }

    pub fn exactly_equals(&self, other: &Dyadic) -> bool {
        self.add(&other.neg()).is_zero()
    }

    /// Round to the nearest double (ties to even).
    pub fn to_f64(&self) -> f64 {
        let (sign, mag) = self.m.clone().into_parts();
        let value = round_to_f64(mag, self.e, false);
        if sign == Sign::Minus {
            -value
        } else {
            value
        }
    }

    /// Round the square root of a non-negative value to the nearest double.
    pub fn sqrt_to_f64(&self) -> f64 {
        assert!(self.m.sign() != Sign::Minus, "sqrt of negative value");
        if self.is_zero() {
            return 0.0;
        }
        let (_, mut mag) = self.m.clone().into_parts();
        let mut e = self.e;
        if e % 2 != 0 {
            mag <<= 1usize;
            e -= 1;
        }
        // 128 extra bits give a root of at least 64 significant bits
        let scaled = mag << 128usize;
        let root = scaled.sqrt();
        let inexact = &root * &root != scaled;
        round_to_f64(root, e / 2 - 64, inexact)
    }
}

/// Round `mag * 2^exp` to the nearest double. `inexact` marks a value that
/// is strictly greater than `mag * 2^exp` by less than one unit of `mag`.
///
/// Results in the subnormal range may be double rounded; the tests only rely
/// on normal results.
fn round_to_f64(mut mag: BigUint, mut exp: i64, inexact: bool) -> f64 {
    let bits = mag.bits() as i64;
    if bits == 0 {
        return 0.0;
    }
    if bits < 64 {
        mag <<= (64 - bits) as usize;
        exp -= 64 - bits;
    }
    let shift = (mag.bits() - 64) as usize;
    let top = &mag >> shift;
    let sticky = inexact || (&top << shift) != mag;
    let top = top.to_u64_digits().first().copied().unwrap_or(0);
    // 11 bits are rounded off; the lowest one stands in for everything below
    let approx = (top | sticky as u64) as f64;
    ldexp(approx, exp + shift as i64)
}

/// `x * 2^e`, exact unless the result is subnormal.
pub fn ldexp(mut x: f64, mut e: i64) -> f64 {
    fn pow2(k: i64) -> f64 {
        f64::from_bits(((k + 1023) as u64) << 52)
    }
    while e > 1000 {
        x *= pow2(1000);
        e -= 1000;
    }
    while e < -1000 {
        x *= pow2(-1000);
        e += 1000;
    }
    x * pow2(e)
}

/// Correctly rounded sum of finite values.
pub fn exact_sum(v: &[f64]) -> f64 {
    v.iter()
        .fold(Dyadic::zero(), |acc, &x| acc.add(&Dyadic::from_f64(x)))
        .to_f64()
}

/// Correctly rounded Euclidean norm of finite values.
pub fn exact_euclidean(v: &[f64]) -> f64 {
    v.iter()
        .fold(Dyadic::zero(), |acc, &x| {
            let d = Dyadic::from_f64(x);
            acc.add(&d.mul(&d))
        })
        .sqrt_to_f64()
}

/// Naive `sqrt(sum(x^2))`.
pub fn direct_euclidean(v: &[f64]) -> f64 {
    let mut n = 0.0;
    for x in v {
        n += x * x;
    }
    n.sqrt()
}

/// Distance in ULPs between two doubles (0 when bit-identical, signed zeros equal).
pub fn ulp_difference(a: f64, b: f64) -> u64 {
    fn ordered(x: f64) -> i64 {
        let bits = x.to_bits() as i64;
        if bits < 0 {
            i64::MIN - bits
        } else {
            bits
        }
    }
    ordered(a).abs_diff(ordered(b))
}

/// Random double with an exponent in `[min_exp, max_exp)` and random sign
/// and mantissa bits.
pub fn random_double<R: Rng>(rng: &mut R, min_exp: i32, max_exp: i32) -> f64 {
    let mask = ((1u64 << 52) - 1) | (1u64 << 63);
    let bits = rng.gen::<u64>() & mask;
    let exp = (rng.gen_range(min_exp..max_exp) + 1023) as u64;
    f64::from_bits(bits | (exp << 52))
}

/// Random vector of `len` doubles, see [`random_double`].
pub fn random_vector<R: Rng>(rng: &mut R, len: usize, min_exp: i32, max_exp: i32) -> Vec<f64> {
    (0..len).map(|_| random_double(rng, min_exp, max_exp)).collect()
}

/// Every element multiplied by `scale`.
pub fn scaled(v: &[f64], scale: f64) -> Vec<f64> {
    v.iter().map(|x| x * scale).collect()
}
