//! Error types for linear systems.

use linsys_decimal::ScalarError;
use linsys_geometry::GeometryError;
use thiserror::Error;

/// Errors that can occur while building or reducing a [`crate::LinearSystem`].
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SystemError {
    /// A system needs at least one equation to fix its dimension.
    #[error("a linear system needs at least one equation")]
    Empty,

    /// A row does not live in the system's dimension.
    #[error("equation {row} has dimension {found}, system has dimension {expected}")]
    DimensionMismatch {
        /// Zero-based index of the offending row.
        row: usize,
        /// Dimension of the system.
        expected: usize,
        /// Dimension of the row.
        found: usize,
    },

    /// A row index past the end of the system.
    #[error("row {index} out of bounds for a system of {len} equations")]
    RowOutOfBounds {
        /// The requested index.
        index: usize,
        /// Number of equations in the system.
        len: usize,
    },

    /// A row operation failed in the geometry layer.
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// A pivot division failed.
    #[error(transparent)]
    Scalar(#[from] ScalarError),
}
