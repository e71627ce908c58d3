//! Error types for Accunorm
//!
//! The numeric functions never fail; they follow IEEE-754 and return NaN or
//! infinity instead. Errors only come from the selection and array layers.

use thiserror::Error;

/// All possible errors in Accunorm
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormError {
    /// Norm name did not match any known norm
    #[error("Unknown norm '{0}'. Use 'manhattan', 'euclidean', or 'maximum'")]
    UnknownNorm(String),

    /// Axis is out of range for the array
    #[error("Invalid axis {axis} for array with {ndim} dimensions")]
    InvalidAxis {
        /// Requested axis
        axis: usize,
        /// Number of dimensions of the array
        ndim: usize,
    },
}
