//! Fixed-dimension vectors over exact decimal scalars.

use std::fmt;
use std::ops::Index;

use linsys_decimal::{approx_eq, first_nonzero_index, Scalar};
use num_traits::{One, Zero};

use crate::format::{DisplayWith, FormatConfig};
use crate::GeometryError;

/// An immutable tuple of decimal coordinates.
///
/// Equality is exact and coordinate-wise; use [`Vector::approx_eq`] for the
/// tolerance-based comparison.
#[derive(Clone, PartialEq)]
pub struct Vector {
    coordinates: Vec<Scalar>,
}

/// The decomposition of a vector relative to a basis vector.
#[derive(Clone, Debug, PartialEq)]
pub struct Projection {
    /// Component along the basis vector.
    pub parallel: Vector,
    /// Remainder, orthogonal to the basis vector.
    pub orthogonal: Vector,
}

impl Vector {
    /// Creates a vector from its coordinates.
    #[must_use]
    pub fn new(coordinates: Vec<Scalar>) -> Self {
        Self { coordinates }
    }

    /// Creates the zero vector of the given dimension.
    #[must_use]
    pub fn zero(dimension: usize) -> Self {
        Self::new(vec![Scalar::zero(); dimension])
    }

    /// Creates a vector from integer coordinates.
    pub fn from_ints<I: IntoIterator<Item = i64>>(values: I) -> Self {
        Self::new(values.into_iter().map(Scalar::from).collect())
    }

    /// Creates a vector from decimal strings such as `"8.218"`.
    ///
    /// # Errors
    ///
    /// Fails if any coordinate is not a decimal number.
    pub fn parse<I, S>(values: I) -> Result<Self, GeometryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let coordinates = values
            .into_iter()
            .map(|s| s.as_ref().parse::<Scalar>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(coordinates))
    }

    /// Creates a vector from floating point coordinates.
    ///
    /// # Errors
    ///
    /// Fails if any coordinate is NaN or infinite.
    pub fn from_f64s<I: IntoIterator<Item = f64>>(values: I) -> Result<Self, GeometryError> {
        let coordinates = values
            .into_iter()
            .map(Scalar::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(coordinates))
    }

    /// Returns the number of coordinates.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.coordinates.len()
    }

    /// Returns the coordinates as a slice.
    #[must_use]
    pub fn coordinates(&self) -> &[Scalar] {
        &self.coordinates
    }

    /// Iterates over the coordinates.
    pub fn iter(&self) -> std::slice::Iter<'_, Scalar> {
        self.coordinates.iter()
    }

    fn check_dimension(&self, other: &Self) -> Result<(), GeometryError> {
        if self.dimension() == other.dimension() {
            Ok(())
        } else {
            Err(GeometryError::DimensionMismatch {
                expected: self.dimension(),
                found: other.dimension(),
            })
        }
    }

    fn zip_with<F>(&self, other: &Self, op: F) -> Result<Self, GeometryError>
    where
        F: Fn(&Scalar, &Scalar) -> Scalar,
    {
        self.check_dimension(other)?;
        Ok(Self::new(
            self.iter().zip(other.iter()).map(|(a, b)| op(a, b)).collect(),
        ))
    }

    /// Coordinate-wise sum.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if the dimensions differ.
    pub fn add(&self, other: &Self) -> Result<Self, GeometryError> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Coordinate-wise difference.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if the dimensions differ.
    pub fn subtract(&self, other: &Self) -> Result<Self, GeometryError> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Multiplies every coordinate by `k`.
    #[must_use]
    pub fn scale(&self, k: &Scalar) -> Self {
        Self::new(self.iter().map(|c| c * k).collect())
    }

    /// Dot product.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if the dimensions differ.
    pub fn dot(&self, other: &Self) -> Result<Scalar, GeometryError> {
        self.check_dimension(other)?;
        Ok(self.iter().zip(other.iter()).map(|(a, b)| a * b).sum())
    }

    /// Right-handed cross product of two 3-D vectors.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::UnsupportedDimension`] unless both vectors
    /// are three dimensional.
    pub fn cross(&self, other: &Self) -> Result<Self, GeometryError> {
        self.check_dimension(other)?;
        if self.dimension() != 3 {
            return Err(GeometryError::UnsupportedDimension {
                operation: "cross product",
                dimension: self.dimension(),
            });
        }
        let [x1, y1, z1] = [&self[0], &self[1], &self[2]];
        let [x2, y2, z2] = [&other[0], &other[1], &other[2]];
        Ok(Self::new(vec![
            y1 * z2 - z1 * y2,
            z1 * x2 - x1 * z2,
            x1 * y2 - y1 * x2,
        ]))
    }

    /// Euclidean length.
    #[must_use]
    pub fn magnitude(&self) -> Scalar {
        let squares: Scalar = self.iter().map(|c| c * c).sum();
        // A sum of squares is never negative, so the root always exists.
        squares.sqrt().unwrap_or_else(|_| Scalar::zero())
    }

    /// Returns true if every coordinate is (near-)zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.iter().all(Zero::is_zero)
    }

    /// The unit vector in the same direction, or the zero vector if `self`
    /// has zero magnitude.
    #[must_use]
    pub fn unit(&self) -> Self {
        let magnitude = self.magnitude();
        if magnitude.is_zero() {
            return Self::zero(self.dimension());
        }
        Self::new(self.iter().map(|c| c / &magnitude).collect())
    }

    /// Angle between two vectors in radians.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if either vector is zero, since
    /// the angle is meaningless there, and
    /// [`GeometryError::DimensionMismatch`] if the dimensions differ.
    pub fn angle_to(&self, other: &Self) -> Result<Scalar, GeometryError> {
        self.check_dimension(other)?;
        if self.is_zero() || other.is_zero() {
            return Err(GeometryError::ZeroVector("angle"));
        }
        let cosine = self.unit().dot(&other.unit())?;
        Ok(cosine.acos()?)
    }

    /// Angle between two vectors in degrees.
    ///
    /// # Errors
    ///
    /// Same as [`Vector::angle_to`].
    pub fn angle_to_degrees(&self, other: &Self) -> Result<Scalar, GeometryError> {
        let radians = self.angle_to(other)?;
        Ok(Scalar::try_from(radians.to_f64().to_degrees())?)
    }

    /// Returns true if the vectors are scalar multiples of each other.
    ///
    /// The zero vector is parallel to everything. Otherwise a single ratio
    /// must relate every pair of coordinates, and a coordinate that is zero
    /// in one vector but not the other rules parallelism out.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if the dimensions differ.
    pub fn is_parallel(&self, other: &Self) -> Result<bool, GeometryError> {
        self.check_dimension(other)?;
        if self.is_zero() || other.is_zero() {
            return Ok(true);
        }

        let mut ratio: Option<Scalar> = None;
        for (a, b) in self.iter().zip(other.iter()) {
            match (a.is_zero(), b.is_zero()) {
                (true, true) => continue,
                (true, false) | (false, true) => return Ok(false),
                (false, false) => {
                    let r = a / b;
                    match &ratio {
                        None => ratio = Some(r),
                        Some(k) if !approx_eq(k, &r) => return Ok(false),
                        Some(_) => {}
                    }
                }
            }
        }
        Ok(true)
    }

    /// Returns true if the dot product is (near-)zero.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if the dimensions differ.
    pub fn is_orthogonal(&self, other: &Self) -> Result<bool, GeometryError> {
        Ok(self.dot(other)?.is_zero())
    }

    /// Splits `self` into components parallel and orthogonal to `basis`.
    ///
    /// Projecting onto the zero vector yields a zero parallel component and
    /// leaves all of `self` in the orthogonal one.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if the dimensions differ.
    pub fn project_on(&self, basis: &Self) -> Result<Projection, GeometryError> {
        let direction = basis.unit();
        let parallel = direction.scale(&self.dot(&direction)?);
        let orthogonal = self.subtract(&parallel)?;
        Ok(Projection {
            parallel,
            orthogonal,
        })
    }

    /// Index of the first (near-)nonzero coordinate.
    #[must_use]
    pub fn first_nonzero_index(&self) -> Option<usize> {
        first_nonzero_index(&self.coordinates)
    }

    /// Coordinate-wise comparison within the shared tolerance.
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.dimension() == other.dimension()
            && self.iter().zip(other.iter()).all(|(a, b)| approx_eq(a, b))
    }

    /// The `i`-th standard basis vector.
    #[must_use]
    pub fn basis(dimension: usize, i: usize) -> Self {
        let mut coordinates = vec![Scalar::zero(); dimension];
        if let Some(c) = coordinates.get_mut(i) {
            *c = Scalar::one();
        }
        Self::new(coordinates)
    }
}

impl Index<usize> for Vector {
    type Output = Scalar;

    fn index(&self, index: usize) -> &Self::Output {
        &self.coordinates[index]
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a Scalar;
    type IntoIter = std::slice::Iter<'a, Scalar>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Vec<Scalar>> for Vector {
    fn from(coordinates: Vec<Scalar>) -> Self {
        Self::new(coordinates)
    }
}

impl DisplayWith for Vector {
    fn fmt_with(&self, f: &mut fmt::Formatter<'_>, config: &FormatConfig) -> fmt::Result {
        let rendered: Vec<String> = self.iter().map(|c| config.scalar(c)).collect();
        write!(f, "Vector({})", rendered.join(", "))
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with(f, &FormatConfig::default())
    }
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
