//! The seam between geometry and the linear system solver.

use std::fmt::{Debug, Display};

use crate::{GeometryError, Hyperplane};

/// A row of a linear system: anything that is a hyperplane underneath.
///
/// The solver performs its row operations on the underlying [`Hyperplane`]
/// and rebuilds the concrete type with [`Equation::from_hyperplane`], so a
/// system of `Plane`s stays a system of `Plane`s.
///
/// # Laws
///
/// - `E::from_hyperplane(e.hyperplane().clone()) == Ok(e)`
/// - `from_hyperplane` only fails on a dimension the type cannot hold
pub trait Equation: Clone + PartialEq + Debug + Display {
    /// Name used when rendering rows, e.g. `"Plane"`.
    const KIND: &'static str;

    /// Returns the underlying hyperplane.
    fn hyperplane(&self) -> &Hyperplane;

    /// Wraps a hyperplane produced by a row operation.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if the hyperplane's
    /// dimension is not one this type can represent.
    fn from_hyperplane(hyperplane: Hyperplane) -> Result<Self, GeometryError>;

    /// Returns the dimension of the ambient space.
    fn dimension(&self) -> usize {
        self.hyperplane().dimension()
    }
}

impl Equation for Hyperplane {
    const KIND: &'static str = "Hyperplane";

    fn hyperplane(&self) -> &Hyperplane {
        self
    }

    fn from_hyperplane(hyperplane: Hyperplane) -> Result<Self, GeometryError> {
        Ok(hyperplane)
    }
}
