//! # Accunorm: accurate vector norms and summation
//!
//! Accunorm computes vector norms and sums of `f64` values to within about
//! one unit in the last place of the exact result, across the entire
//! double-precision range. Inputs whose squares would overflow (`1e300`) or
//! underflow (`1e-320`) still produce finite, accurate Euclidean norms.
//!
//! ## Norms
//!
//! - [`manhattan()`] - L1 norm, compensated sum of absolute values
//! - [`euclidean()`] - L2 norm, scaled three-bucket compensated sum of squares
//! - [`maximum()`] - L-infinity norm, NaN-propagating maximum
//!
//! ## Summation
//!
//! - [`sum()`] - Two-sum compensated summation with IEEE-754 special cases
//!
//! ## Arrays
//!
//! [`arrays::NormExt`] adds the same functions to `ndarray` arrays, and
//! [`arrays::lane_norms`] evaluates one norm per row or column in parallel.
//!
//! All numeric functions are total: NaN and infinities propagate according
//! to IEEE-754, and the scalar functions neither panic nor allocate.

#![deny(missing_docs)]

pub mod arrays;
pub mod error;
pub mod math;
pub mod norms;

// Re-exports
pub use error::NormError;
pub use math::{sum, sum3, sum4, sum5, sum6, sum_iter};
pub use norms::Norm;
pub use norms::{euclidean, euclidean_1d, euclidean_2d, euclidean_3d, euclidean_iter};
pub use norms::{manhattan, manhattan_1d, manhattan_2d, manhattan_3d, manhattan_iter};
pub use norms::{maximum, maximum_1d, maximum_2d, maximum_3d, maximum_iter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Python bindings via PyO3
#[cfg(feature = "python")]
mod python {
    use numpy::PyReadonlyArray1;
    use pyo3::prelude::*;

    use crate::arrays::NormExt;
    use crate::{Norm, NormError};

    fn norm_err(e: NormError) -> PyErr {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}", e))
    }

    /// Manhattan (L1) norm of a 1-D float64 array.
    #[pyfunction]
    fn manhattan(v: PyReadonlyArray1<'_, f64>) -> f64 {
        v.as_array().manhattan_norm()
    }

    /// Euclidean (L2) norm of a 1-D float64 array.
    #[pyfunction]
    fn euclidean(v: PyReadonlyArray1<'_, f64>) -> f64 {
        v.as_array().euclidean_norm()
    }

    /// Maximum (L-infinity) norm of a 1-D float64 array.
    #[pyfunction]
    fn maximum(v: PyReadonlyArray1<'_, f64>) -> f64 {
        v.as_array().maximum_norm()
    }

    /// Compensated sum of a 1-D float64 array.
    #[pyfunction]
    fn sum(v: PyReadonlyArray1<'_, f64>) -> f64 {
        v.as_array().accurate_sum()
    }

    /// Norm of a 1-D float64 array selected by name ("l1", "l2", "linf", ...).
    #[pyfunction]
    fn norm(v: PyReadonlyArray1<'_, f64>, name: &str) -> PyResult<f64> {
        let norm: Norm = name.parse().map_err(norm_err)?;
        Ok(v.as_array().norm(norm))
    }

    #[pymodule]
    fn _core(_py: Python, m: &PyModule) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(manhattan, m)?)?;
        m.add_function(wrap_pyfunction!(euclidean, m)?)?;
        m.add_function(wrap_pyfunction!(maximum, m)?)?;
        m.add_function(wrap_pyfunction!(sum, m)?)?;
        m.add_function(wrap_pyfunction!(norm, m)?)?;
        m.add("__version__", crate::VERSION)?;
        Ok(())
    }
}
