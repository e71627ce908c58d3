//! Extended-precision arithmetic for Accunorm.
//!
//! Provides the low-level building blocks used by the norm computations:
//!
//! - [`extended_precision`] - Error-free transformations (two-sum, Dekker square)
//! - [`summation`] - Compensated summation

pub mod extended_precision;
pub mod summation;

pub use extended_precision::{high_part_unscaled, square_low, square_low_unscaled, two_sum_low};
pub use summation::{sum, sum3, sum4, sum5, sum6, sum_iter};
