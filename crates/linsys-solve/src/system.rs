//! Linear systems as owned, ordered lists of equations.
//!
//! Rows are addressed by position. The row operations mutate the system in
//! place; the reductions in [`crate::elimination`] always work on a clone.

use std::fmt;
use std::ops::Index;

use linsys_decimal::Scalar;
use linsys_geometry::format::{DisplayWith, FormatConfig};
use linsys_geometry::Equation;

use crate::SystemError;

/// An ordered list of equations sharing one dimension.
///
/// The equation count and dimension are fixed at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearSystem<E> {
    /// Equations in row order.
    rows: Vec<E>,
    /// Dimension shared by every row.
    dimension: usize,
}

impl<E: Equation> LinearSystem<E> {
    /// Creates a system from its rows.
    ///
    /// # Errors
    ///
    /// - [`SystemError::Empty`] if `rows` is empty
    /// - [`SystemError::DimensionMismatch`] if a row's dimension differs
    ///   from the first row's
    pub fn new(rows: Vec<E>) -> Result<Self, SystemError> {
        let dimension = rows.first().ok_or(SystemError::Empty)?.dimension();
        if let Some((row, found)) = rows
            .iter()
            .map(Equation::dimension)
            .enumerate()
            .find(|&(_, d)| d != dimension)
        {
            return Err(SystemError::DimensionMismatch {
                row,
                expected: dimension,
                found,
            });
        }
        Ok(Self { rows, dimension })
    }

    /// Returns the dimension shared by every row.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the number of equations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false: a system holds at least one equation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the rows as a slice.
    #[must_use]
    pub fn rows(&self) -> &[E] {
        &self.rows
    }

    /// Consumes the system, returning its rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<E> {
        self.rows
    }

    /// Iterates over the rows in order.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.rows.iter()
    }

    /// Returns the row at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&E> {
        self.rows.get(index)
    }

    /// Replaces the row at `index`.
    ///
    /// # Errors
    ///
    /// - [`SystemError::RowOutOfBounds`] if `index` is past the end
    /// - [`SystemError::DimensionMismatch`] if `row` has another dimension
    pub fn set(&mut self, index: usize, row: E) -> Result<(), SystemError> {
        self.check_index(index)?;
        if row.dimension() != self.dimension {
            return Err(SystemError::DimensionMismatch {
                row: index,
                expected: self.dimension,
                found: row.dimension(),
            });
        }
        self.rows[index] = row;
        Ok(())
    }

    /// Swaps rows `i` and `j`.
    ///
    /// # Errors
    ///
    /// Returns [`SystemError::RowOutOfBounds`] if either index is past the end.
    pub fn swap_rows(&mut self, i: usize, j: usize) -> Result<(), SystemError> {
        self.check_index(i)?;
        self.check_index(j)?;
        self.rows.swap(i, j);
        Ok(())
    }

    /// Replaces row `i` with `k` times row `i`.
    ///
    /// # Errors
    ///
    /// Returns [`SystemError::RowOutOfBounds`] if `i` is past the end.
    pub fn scale_row(&mut self, k: &Scalar, i: usize) -> Result<(), SystemError> {
        self.check_index(i)?;
        let scaled = self.rows[i].hyperplane().scale(k);
        self.rows[i] = E::from_hyperplane(scaled)?;
        Ok(())
    }

    /// Replaces row `dst` with row `dst` plus `k` times row `src`.
    ///
    /// # Errors
    ///
    /// Returns [`SystemError::RowOutOfBounds`] if either index is past the end.
    pub fn add_scaled_row(&mut self, k: &Scalar, src: usize, dst: usize) -> Result<(), SystemError> {
        self.check_index(src)?;
        self.check_index(dst)?;
        let addend = self.rows[src].hyperplane().scale(k);
        let sum = self.rows[dst].hyperplane().add(&addend)?;
        self.rows[dst] = E::from_hyperplane(sum)?;
        Ok(())
    }

    /// Column of the first (near-)nonzero coefficient in each row, `None`
    /// for rows whose coefficients all vanish.
    #[must_use]
    pub fn pivot_columns(&self) -> Vec<Option<usize>> {
        self.rows
            .iter()
            .map(|row| row.hyperplane().first_nonzero_index())
            .collect()
    }

    /// Coefficient of `x_col` in row `row`.
    pub(crate) fn coefficient(&self, row: usize, col: usize) -> &Scalar {
        &self.rows[row].hyperplane().normal_vector()[col]
    }

    fn check_index(&self, index: usize) -> Result<(), SystemError> {
        if index < self.rows.len() {
            Ok(())
        } else {
            Err(SystemError::RowOutOfBounds {
                index,
                len: self.rows.len(),
            })
        }
    }
}

impl<E> Index<usize> for LinearSystem<E> {
    type Output = E;

    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}

impl<'a, E> IntoIterator for &'a LinearSystem<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl<E: DisplayWith> DisplayWith for LinearSystem<E> {
    fn fmt_with(&self, f: &mut fmt::Formatter<'_>, config: &FormatConfig) -> fmt::Result {
        write!(f, "Linear System:")?;
        for (i, row) in self.rows.iter().enumerate() {
            write!(f, "\nEquation {}: ", i + 1)?;
            row.fmt_with(f, config)?;
        }
        Ok(())
    }
}

impl<E: DisplayWith> fmt::Display for LinearSystem<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with(f, &FormatConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linsys_geometry::{Hyperplane, Line, Plane, Vector};

    fn plane(normal: [i64; 3], k: i64) -> Plane {
        Plane::new(Vector::from_ints(normal), k).unwrap()
    }

    fn four_planes() -> [Plane; 4] {
        [
            plane([1, 1, 1], 1),
            plane([0, 1, 0], 2),
            plane([1, 1, -1], 3),
            plane([1, 0, -2], 2),
        ]
    }

    #[test]
    fn test_new_rejects_empty_and_mixed() {
        assert_eq!(
            LinearSystem::<Plane>::new(Vec::new()).unwrap_err(),
            SystemError::Empty
        );

        let mixed = vec![
            Hyperplane::new(Vector::from_ints([1, 1]), 1),
            Hyperplane::new(Vector::from_ints([1, 1, 1]), 1),
        ];
        assert_eq!(
            LinearSystem::new(mixed).unwrap_err(),
            SystemError::DimensionMismatch {
                row: 1,
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn test_swap_rows() {
        let [p0, p1, p2, p3] = four_planes();
        let mut s = LinearSystem::new(vec![p0.clone(), p1.clone(), p2.clone(), p3.clone()]).unwrap();

        s.swap_rows(0, 1).unwrap();
        assert_eq!(s.rows(), &[p1.clone(), p0.clone(), p2.clone(), p3.clone()]);
        s.swap_rows(1, 3).unwrap();
        assert_eq!(s.rows(), &[p1.clone(), p3.clone(), p2.clone(), p0.clone()]);
        s.swap_rows(3, 1).unwrap();
        assert_eq!(s.rows(), &[p1, p0, p2, p3]);
    }

    #[test]
    fn test_scale_row() {
        let [p0, p1, p2, p3] = four_planes();
        let mut s = LinearSystem::new(vec![p1.clone(), p0, p2, p3.clone()]).unwrap();

        s.scale_row(&Scalar::from(1), 0).unwrap();
        s.scale_row(&Scalar::from(-1), 2).unwrap();
        s.scale_row(&Scalar::from(10), 1).unwrap();

        assert_eq!(s[0], p1);
        assert_eq!(s[1], plane([10, 10, 10], 10));
        assert_eq!(s[2], plane([-1, -1, 1], -3));
        assert_eq!(s[3], p3);
    }

    #[test]
    fn test_add_scaled_row() {
        let p1 = plane([0, 1, 0], 2);
        let p3 = plane([1, 0, -2], 2);
        let mut s = LinearSystem::new(vec![
            p1.clone(),
            plane([10, 10, 10], 10),
            plane([-1, -1, 1], -3),
            p3.clone(),
        ])
        .unwrap();

        s.add_scaled_row(&Scalar::from(0), 0, 1).unwrap();
        assert_eq!(s[1], plane([10, 10, 10], 10));

        s.add_scaled_row(&Scalar::from(1), 0, 1).unwrap();
        assert_eq!(s[0], p1);
        assert_eq!(s[1], plane([10, 11, 10], 12));

        s.add_scaled_row(&Scalar::from(-1), 1, 0).unwrap();
        assert_eq!(s[0], plane([-10, -10, -10], -10));
        assert_eq!(s[1], plane([10, 11, 10], 12));
        assert_eq!(s[2], plane([-1, -1, 1], -3));
        assert_eq!(s[3], p3);
    }

    #[test]
    fn test_row_bounds() {
        let mut s = LinearSystem::new(four_planes().to_vec()).unwrap();
        assert_eq!(
            s.swap_rows(0, 4).unwrap_err(),
            SystemError::RowOutOfBounds { index: 4, len: 4 }
        );
        assert!(s.scale_row(&Scalar::from(2), 9).is_err());
        assert!(s.add_scaled_row(&Scalar::from(2), 9, 0).is_err());
        assert!(s.get(4).is_none());
    }

    #[test]
    fn test_set_checks_dimension() {
        let mut s = LinearSystem::new(vec![
            Hyperplane::new(Vector::from_ints([1, 0]), 1),
            Hyperplane::new(Vector::from_ints([0, 1]), 1),
        ])
        .unwrap();

        s.set(1, Hyperplane::new(Vector::from_ints([2, 2]), 4)).unwrap();
        assert_eq!(s[1], Hyperplane::new(Vector::from_ints([1, 1]), 2));

        assert!(matches!(
            s.set(0, Hyperplane::new(Vector::from_ints([1, 1, 1]), 1)),
            Err(SystemError::DimensionMismatch { row: 0, .. })
        ));
    }

    #[test]
    fn test_pivot_columns() {
        let s = LinearSystem::new(vec![
            plane([1, 1, 1], 1),
            plane([0, 0, 3], 2),
            plane([0, 0, 0], 0),
        ])
        .unwrap();
        assert_eq!(s.pivot_columns(), vec![Some(0), Some(2), None]);
    }

    #[test]
    fn test_display() {
        let s = LinearSystem::new(vec![
            Line::new(Vector::from_ints([1, 2]), 3).unwrap(),
            Line::new(Vector::from_ints([0, -1]), 0).unwrap(),
        ])
        .unwrap();
        assert_eq!(
            s.to_string(),
            "Linear System:\nEquation 1: Line(x_0+2x_1=3)\nEquation 2: Line(-x_1=0)"
        );
    }
}
