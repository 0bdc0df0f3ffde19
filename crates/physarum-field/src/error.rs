//! Error types for grid construction.

use thiserror::Error;

/// Errors from [`GridGeometry::new`](crate::GridGeometry::new) and
/// [`Kernel3x3::new`](crate::Kernel3x3::new).
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GridError {
    /// A world dimension or the cell size was non-finite or not positive.
    #[error("{name} must be finite and positive, got {value}")]
    InvalidDimension {
        /// Which dimension (`"width"`, `"height"`, `"cell_size"`).
        name: &'static str,
        /// The rejected value.
        value: f32,
    },
    /// The world is smaller than a single cell along some axis.
    #[error("world {width}x{height} holds no {cell_size}-unit cell")]
    EmptyGrid {
        /// World width.
        width: f32,
        /// World height.
        height: f32,
        /// Requested cell size.
        cell_size: f32,
    },
    /// A kernel weight was negative or non-finite.
    #[error("kernel weight at ({row}, {col}) is invalid: {value}")]
    InvalidWeight {
        /// Kernel row (0..3).
        row: usize,
        /// Kernel column (0..3).
        col: usize,
        /// The rejected weight.
        value: f32,
    },
    /// Kernel weights do not sum to one.
    #[error("kernel weights sum to {sum}, expected 1.0")]
    UnnormalisedKernel {
        /// The actual sum.
        sum: f32,
    },
}
