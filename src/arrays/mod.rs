//! `ndarray` integration.
//!
//! - [`NormExt`] - norms and accurate sums of any `f64` array, contiguous or not
//! - [`lane_norms`] - one norm per row or column of a 2-D array, computed in parallel

use ndarray::{Array1, ArrayBase, Axis, Data, Dimension, Ix2};
use rayon::prelude::*;

use crate::error::NormError;
use crate::math::summation::sum_iter;
use crate::norms::{euclidean_iter, manhattan_iter, maximum_iter, Norm};

/// Accurate norms over the elements of an `ndarray` array.
///
/// The array is treated as a flat vector of its elements in logical order.
/// Results are bit-identical to the slice functions applied to the same
/// elements in the same order.
///
/// # Example
///
/// ```rust
/// use accunorm::arrays::NormExt;
/// use ndarray::array;
///
/// let m = array![[3.0, 0.0], [0.0, -4.0]];
/// assert_eq!(m.euclidean_norm(), 5.0);
/// assert_eq!(m.t().manhattan_norm(), 7.0);
/// ```
pub trait NormExt {
    /// Manhattan (L1) norm of all elements.
    fn manhattan_norm(&self) -> f64;

    /// Euclidean (L2) norm of all elements.
    fn euclidean_norm(&self) -> f64;

    /// Maximum (L-infinity) norm of all elements.
    fn maximum_norm(&self) -> f64;

    /// Compensated sum of all elements.
    fn accurate_sum(&self) -> f64;

    /// Evaluate the selected norm over all elements.
    fn norm(&self, norm: Norm) -> f64 {
        match norm {
            Norm::Manhattan => self.manhattan_norm(),
            Norm::Euclidean => self.euclidean_norm(),
            Norm::Maximum => self.maximum_norm(),
        }
    }
}

impl<S, D> NormExt for ArrayBase<S, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    fn manhattan_norm(&self) -> f64 {
        manhattan_iter(self.iter().copied())
    }

    fn euclidean_norm(&self) -> f64 {
        euclidean_iter(self.iter().copied())
    }

    fn maximum_norm(&self) -> f64 {
        maximum_iter(self.iter().copied())
    }

    fn accurate_sum(&self) -> f64 {
        sum_iter(self.iter().copied())
    }
}

/// Compute `norm` of every lane of `array` along `axis`.
///
/// `Axis(1)` reduces along the columns and yields one value per row;
/// `Axis(0)` yields one value per column. Lanes are evaluated in parallel on
/// the rayon thread pool, each with the sequential algorithm, so the output
/// does not depend on scheduling.
///
/// # Errors
///
/// Returns [`NormError::InvalidAxis`] if `axis` is not 0 or 1.
///
/// # Example
///
/// ```rust
/// use accunorm::{arrays::lane_norms, Norm};
/// use ndarray::{array, Axis};
///
/// let m = array![[3.0, 4.0], [-6.0, 8.0]];
/// let rows = lane_norms(&m, Axis(1), Norm::Euclidean).unwrap();
/// assert_eq!(rows, array![5.0, 10.0]);
/// ```
pub fn lane_norms<S>(
    array: &ArrayBase<S, Ix2>,
    axis: Axis,
    norm: Norm,
) -> Result<Array1<f64>, NormError>
where
    S: Data<Elem = f64> + Sync,
{
    let outer = match axis.index() {
        0 => Axis(1),
        1 => Axis(0),
        other => {
            return Err(NormError::InvalidAxis {
                axis: other,
                ndim: array.ndim(),
            })
        }
    };

    let n_lanes = array.len_of(outer);
    log::debug!(
        "computing {} {norm} norms along axis {} of {:?} array",
        n_lanes,
        axis.index(),
        array.dim()
    );

    let result_vec: Vec<f64> = (0..n_lanes)
        .into_par_iter()
        .map(|lane_idx| array.index_axis(outer, lane_idx).norm(norm))
        .collect();

    Ok(Array1::from_vec(result_vec))
}
