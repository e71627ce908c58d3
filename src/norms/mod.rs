//! Vector norms over `f64` values.
//!
//! | Norm | Definition | Accuracy |
//! |------|------------|----------|
//! | [`manhattan`] | `sum(abs(x))` | compensated sum, ~1 ULP |
//! | [`euclidean`] | `sqrt(sum(x^2))` | scaled compensated sum of squares, ~1 ULP over the full range |
//! | [`maximum`] | `max(abs(x))` | exact |
//!
//! Every norm has a slice form, a generic iterator form (`*_iter`) and
//! fixed-arity forms for one to three scalars (`*_1d`, `*_2d`, `*_3d`).

pub mod euclidean;
pub mod manhattan;
pub mod maximum;

pub use euclidean::{euclidean, euclidean_1d, euclidean_2d, euclidean_3d, euclidean_iter};
pub use manhattan::{manhattan, manhattan_1d, manhattan_2d, manhattan_3d, manhattan_iter};
pub use maximum::{maximum, maximum_1d, maximum_2d, maximum_3d, maximum_iter};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NormError;

/// Norm selection.
///
/// Lets callers pick a norm at runtime, e.g. from a config file or a
/// command-line flag.
///
/// # Example
///
/// ```rust
/// use accunorm::Norm;
///
/// let norm: Norm = "l2".parse().unwrap();
/// assert_eq!(norm, Norm::Euclidean);
/// assert_eq!(norm.of(&[3.0, -4.0]), 5.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Norm {
    /// L1 norm, sum of absolute values
    Manhattan,
    /// L2 norm, square root of the sum of squares
    Euclidean,
    /// L-infinity norm, largest absolute value
    Maximum,
}

impl Norm {
    /// All norms, in L1, L2, L-infinity order.
    pub const ALL: [Norm; 3] = [Norm::Manhattan, Norm::Euclidean, Norm::Maximum];

    /// Evaluate this norm over `v`.
    pub fn of(self, v: &[f64]) -> f64 {
        match self {
            Norm::Manhattan => manhattan(v),
            Norm::Euclidean => euclidean(v),
            Norm::Maximum => maximum(v),
        }
    }

    /// Evaluate this norm over an iterator of values.
    pub fn of_iter<I>(self, values: I) -> f64
    where
        I: IntoIterator<Item = f64>,
        I::IntoIter: Clone,
    {
        match self {
            Norm::Manhattan => manhattan_iter(values),
            Norm::Euclidean => euclidean_iter(values),
            Norm::Maximum => maximum_iter(values),
        }
    }

    /// Canonical lowercase name, as used by serde and [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Norm::Manhattan => "manhattan",
            Norm::Euclidean => "euclidean",
            Norm::Maximum => "maximum",
        }
    }
}

impl fmt::Display for Norm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Norm {
    type Err = NormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manhattan" | "taxicab" | "l1" => Ok(Norm::Manhattan),
            "euclidean" | "l2" => Ok(Norm::Euclidean),
            "maximum" | "max" | "infinity" | "linf" => Ok(Norm::Maximum),
            _ => Err(NormError::UnknownNorm(s.to_string())),
        }
    }
}
