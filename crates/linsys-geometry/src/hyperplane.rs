//! Affine hyperplanes `n · x = k` of any dimension.
//!
//! [`crate::Line`] and [`crate::Plane`] pin the dimension to two and three
//! and defer to this type for base points, parallelism, equality and row
//! arithmetic.

use std::fmt;

use linsys_decimal::{approx_eq, Scalar};
use num_traits::Zero;

use crate::format::{DisplayWith, FormatConfig};
use crate::{GeometryError, Vector};

/// The set of points `x` with `normal_vector · x = constant_term`.
///
/// `base_point` is computed once at construction: the point carrying the
/// whole constant on the first nonzero coordinate of the normal. It is
/// `None` for degenerate hyperplanes whose normal vector is zero.
#[derive(Clone)]
pub struct Hyperplane {
    normal_vector: Vector,
    constant_term: Scalar,
    base_point: Option<Vector>,
}

impl Hyperplane {
    /// Creates the hyperplane `normal_vector · x = constant_term`.
    pub fn new(normal_vector: Vector, constant_term: impl Into<Scalar>) -> Self {
        let constant_term = constant_term.into();
        let base_point = normal_vector.first_nonzero_index().map(|i| {
            let mut coordinates = vec![Scalar::zero(); normal_vector.dimension()];
            coordinates[i] = &constant_term / &normal_vector[i];
            Vector::new(coordinates)
        });
        Self {
            normal_vector,
            constant_term,
            base_point,
        }
    }

    /// Returns the dimension of the ambient space.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.normal_vector.dimension()
    }

    /// Returns the normal vector.
    #[must_use]
    pub fn normal_vector(&self) -> &Vector {
        &self.normal_vector
    }

    /// Returns the constant term.
    #[must_use]
    pub fn constant_term(&self) -> &Scalar {
        &self.constant_term
    }

    /// Returns a point on the hyperplane, if it is not degenerate.
    #[must_use]
    pub fn base_point(&self) -> Option<&Vector> {
        self.base_point.as_ref()
    }

    /// Returns the coefficient of `x_index`.
    #[must_use]
    pub fn coefficient(&self, index: usize) -> Option<&Scalar> {
        self.normal_vector.coordinates().get(index)
    }

    /// Index of the first (near-)nonzero coefficient.
    #[must_use]
    pub fn first_nonzero_index(&self) -> Option<usize> {
        self.normal_vector.first_nonzero_index()
    }

    /// Returns true if the normal vector is zero, i.e. the row reads `0 = k`.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.base_point.is_none()
    }

    /// Returns true for `0 = k` with `k` nonzero, a row no point satisfies.
    #[must_use]
    pub fn is_inconsistent(&self) -> bool {
        self.is_degenerate() && !self.constant_term.is_zero()
    }

    /// Returns true if the normal vectors are parallel.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if the dimensions differ.
    pub fn is_parallel(&self, other: &Self) -> Result<bool, GeometryError> {
        self.normal_vector.is_parallel(&other.normal_vector)
    }

    /// Returns true if both describe the same point set.
    ///
    /// Two degenerate hyperplanes coincide when their constants agree; a
    /// degenerate and a proper hyperplane never do. Otherwise they must be
    /// parallel with the segment between their base points lying in them.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if the dimensions differ.
    pub fn coincides_with(&self, other: &Self) -> Result<bool, GeometryError> {
        if self.dimension() != other.dimension() {
            return Err(GeometryError::DimensionMismatch {
                expected: self.dimension(),
                found: other.dimension(),
            });
        }
        match (&self.base_point, &other.base_point) {
            (None, None) => Ok(approx_eq(&self.constant_term, &other.constant_term)),
            (None, Some(_)) | (Some(_), None) => Ok(false),
            (Some(p), Some(q)) => {
                if !self.is_parallel(other)? {
                    return Ok(false);
                }
                let between = p.subtract(q)?;
                self.normal_vector.is_orthogonal(&between)
            }
        }
    }

    /// Adds two equations term by term.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if the dimensions differ.
    pub fn add(&self, other: &Self) -> Result<Self, GeometryError> {
        Ok(Self::new(
            self.normal_vector.add(&other.normal_vector)?,
            &self.constant_term + &other.constant_term,
        ))
    }

    /// Multiplies both sides of the equation by `k`.
    #[must_use]
    pub fn scale(&self, k: &Scalar) -> Self {
        Self::new(self.normal_vector.scale(k), &self.constant_term * k)
    }

    /// Writes `label(2x_0+3x_1=5)`, or `label(0=k)` when degenerate.
    pub(crate) fn render(
        &self,
        f: &mut fmt::Formatter<'_>,
        label: &str,
        config: &FormatConfig,
    ) -> fmt::Result {
        let constant = config.scalar(&self.constant_term);
        if self.is_degenerate() {
            return write!(f, "{label}(0={constant})");
        }

        let terms: String = self
            .normal_vector
            .iter()
            .enumerate()
            .filter_map(|(i, c)| config.term(c, i))
            .collect();
        let terms = terms.strip_prefix('+').unwrap_or(terms.as_str());
        let terms = if terms.is_empty() { "0" } else { terms };
        write!(f, "{label}({terms}={constant})")
    }
}

impl PartialEq for Hyperplane {
    /// Geometric equality; hyperplanes of different dimension are unequal.
    fn eq(&self, other: &Self) -> bool {
        self.coincides_with(other).unwrap_or(false)
    }
}

impl DisplayWith for Hyperplane {
    fn fmt_with(&self, f: &mut fmt::Formatter<'_>, config: &FormatConfig) -> fmt::Result {
        self.render(f, "Hyperplane", config)
    }
}

impl fmt::Display for Hyperplane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with(f, &FormatConfig::default())
    }
}

impl fmt::Debug for Hyperplane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
