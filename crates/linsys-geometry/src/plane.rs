//! Planes in three dimensions.

use std::fmt;
use std::ops::Deref;

use linsys_decimal::Scalar;

use crate::format::{DisplayWith, FormatConfig};
use crate::{Equation, GeometryError, Hyperplane, Vector};

/// A plane `a x_0 + b x_1 + c x_2 = k`.
#[derive(Clone, PartialEq)]
pub struct Plane(Hyperplane);

impl Plane {
    /// Dimension of every plane.
    pub const DIMENSION: usize = 3;

    /// Creates a plane from a 3-D normal vector and constant term.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if the normal vector is
    /// not three dimensional.
    pub fn new(normal_vector: Vector, constant_term: impl Into<Scalar>) -> Result<Self, GeometryError> {
        Self::from_hyperplane(Hyperplane::new(normal_vector, constant_term))
    }

    /// Consumes the plane, returning the underlying hyperplane.
    #[must_use]
    pub fn into_hyperplane(self) -> Hyperplane {
        self.0
    }
}

impl Deref for Plane {
    type Target = Hyperplane;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Equation for Plane {
    const KIND: &'static str = "Plane";

    fn hyperplane(&self) -> &Hyperplane {
        &self.0
    }

    fn from_hyperplane(hyperplane: Hyperplane) -> Result<Self, GeometryError> {
        if hyperplane.dimension() != Self::DIMENSION {
            return Err(GeometryError::DimensionMismatch {
                expected: Self::DIMENSION,
                found: hyperplane.dimension(),
            });
        }
        Ok(Self(hyperplane))
    }
}

impl DisplayWith for Plane {
    fn fmt_with(&self, f: &mut fmt::Formatter<'_>, config: &FormatConfig) -> fmt::Result {
        self.0.render(f, Self::KIND, config)
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with(f, &FormatConfig::default())
    }
}

impl fmt::Debug for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
