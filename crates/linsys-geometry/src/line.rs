//! Lines in two dimensions and their pairwise intersection.

use std::fmt;
use std::ops::Deref;

use linsys_decimal::Scalar;
use num_traits::Zero;

use crate::format::{DisplayWith, FormatConfig};
use crate::{Equation, GeometryError, Hyperplane, Vector};

/// A line `a x_0 + b x_1 = k`.
#[derive(Clone, PartialEq)]
pub struct Line(Hyperplane);

/// Outcome of intersecting two lines.
#[derive(Clone, Debug, PartialEq)]
pub enum Intersection {
    /// The lines cross at exactly one point.
    Point(Vector),
    /// The lines are equal; every point of this line is shared.
    Coincident(Line),
    /// The lines are parallel and distinct.
    Empty,
}

impl Line {
    /// Dimension of every line.
    pub const DIMENSION: usize = 2;

    /// Creates a line from a 2-D normal vector and constant term.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if the normal vector is
    /// not two dimensional.
    pub fn new(normal_vector: Vector, constant_term: impl Into<Scalar>) -> Result<Self, GeometryError> {
        Self::from_hyperplane(Hyperplane::new(normal_vector, constant_term))
    }

    /// Consumes the line, returning the underlying hyperplane.
    #[must_use]
    pub fn into_hyperplane(self) -> Hyperplane {
        self.0
    }

    /// Intersection point of two lines, failing on the degenerate cases.
    ///
    /// # Errors
    ///
    /// - [`GeometryError::LinesEqual`] if the lines coincide
    /// - [`GeometryError::LinesParallel`] if they are parallel and distinct
    pub fn try_intersection(&self, other: &Self) -> Result<Vector, GeometryError> {
        if self == other {
            return Err(GeometryError::LinesEqual);
        }
        if self.is_parallel(other)? {
            return Err(GeometryError::LinesParallel);
        }

        // Cramer's rule on [[a, b], [c, d]] (x, y) = (k1, k2)
        let (a, b) = (&self.normal_vector()[0], &self.normal_vector()[1]);
        let (c, d) = (&other.normal_vector()[0], &other.normal_vector()[1]);
        let (k1, k2) = (self.constant_term(), other.constant_term());

        // Non-parallel normals can still have a determinant below tolerance
        // when the coefficients are small, so only an exact zero is rejected.
        let determinant = a * d - b * c;
        if determinant == Scalar::zero() {
            return Err(GeometryError::LinesParallel);
        }
        let x = (d * k1 - b * k2) / &determinant;
        let y = (a * k2 - c * k1) / &determinant;
        Ok(Vector::new(vec![x, y]))
    }

    /// Intersection of two lines, reporting the degenerate cases as values.
    ///
    /// ```
    /// use linsys_geometry::{Intersection, Line, Vector};
    ///
    /// let a = Line::new(Vector::from_ints([2, 3]), 5).unwrap();
    /// let b = Line::new(Vector::from_ints([4, 6]), 3).unwrap();
    /// assert_eq!(a.intersection(&b).unwrap(), Intersection::Empty);
    /// ```
    ///
    /// # Errors
    ///
    /// Only fails for errors other than the two degenerate outcomes, which
    /// two well-formed lines never produce.
    pub fn intersection(&self, other: &Self) -> Result<Intersection, GeometryError> {
        match self.try_intersection(other) {
            Ok(point) => Ok(Intersection::Point(point)),
            Err(GeometryError::LinesEqual) => Ok(Intersection::Coincident(self.clone())),
            Err(GeometryError::LinesParallel) => Ok(Intersection::Empty),
            Err(e) => Err(e),
        }
    }
}

impl Deref for Line {
    type Target = Hyperplane;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Equation for Line {
    const KIND: &'static str = "Line";

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

impl DisplayWith for Line {
    fn fmt_with(&self, f: &mut fmt::Formatter<'_>, config: &FormatConfig) -> fmt::Result {
        self.0.render(f, Self::KIND, config)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with(f, &FormatConfig::default())
    }
}

impl fmt::Debug for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
