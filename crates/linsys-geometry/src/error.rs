//! Geometry error taxonomy.

use linsys_decimal::ScalarError;
use thiserror::Error;

/// Errors that can occur in vector and hyperplane operations.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GeometryError {
    /// Two operands live in different dimensions.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Dimension required by the operation.
        expected: usize,
        /// Dimension that was supplied.
        found: usize,
    },

    /// The operation is only defined in specific dimensions.
    #[error("{operation} is not defined in dimension {dimension}")]
    UnsupportedDimension {
        /// Name of the operation.
        operation: &'static str,
        /// Dimension that was supplied.
        dimension: usize,
    },

    /// The operation has no meaning for a zero vector.
    #[error("{0} is undefined for the zero vector")]
    ZeroVector(&'static str),

    /// Coincident lines: infinitely many intersection points.
    #[error("lines are equal, every point is an intersection")]
    LinesEqual,

    /// Parallel, distinct lines: no intersection point.
    #[error("lines are parallel and never intersect")]
    LinesParallel,

    /// A coordinate or constant could not be turned into a scalar.
    #[error(transparent)]
    Scalar(#[from] ScalarError),
}
