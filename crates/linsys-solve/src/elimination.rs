//! Gaussian elimination: triangular form and reduced row-echelon form.
//!
//! Both reductions clone the system first and return the reduced copy, so
//! the receiver is never modified.

use log::{debug, trace};
use num_traits::Zero;

use linsys_geometry::Equation;

use crate::{LinearSystem, SystemError};

impl<E: Equation> LinearSystem<E> {
    /// Forward elimination.
    ///
    /// Pivot column `c` is processed against row `c` for
    /// `c < min(dimension, len)`. A vanishing pivot is replaced by the first
    /// row below with a nonzero entry in that column; when there is none the
    /// column is skipped. Every row below the pivot then has column `c`
    /// eliminated.
    ///
    /// ```
    /// use linsys_geometry::{Plane, Vector};
    /// use linsys_solve::LinearSystem;
    ///
    /// let s = LinearSystem::new(vec![
    ///     Plane::new(Vector::from_ints([1, 1, 1]), 1).unwrap(),
    ///     Plane::new(Vector::from_ints([1, 1, 1]), 2).unwrap(),
    /// ])
    /// .unwrap();
    /// let t = s.triangular_form().unwrap();
    /// assert!(t[1].is_inconsistent());
    /// ```
    ///
    /// # Errors
    ///
    /// Propagates row operation failures, which a well-formed system never
    /// produces.
    pub fn triangular_form(&self) -> Result<Self, SystemError> {
        let mut system = self.clone();
        let equations = system.len();
        let cycles = system.dimension().min(equations);
        debug!(
            "triangular form: {equations} equations in dimension {}",
            system.dimension()
        );

        for c in 0..cycles {
            if system.coefficient(c, c).is_zero() {
                let Some(swap) = (c + 1..equations).find(|&j| !system.coefficient(j, c).is_zero())
                else {
                    trace!("column {c}: no pivot");
                    continue;
                };
                trace!("column {c}: swapping rows {c} and {swap}");
                system.swap_rows(c, swap)?;
            }

            for j in c + 1..equations {
                if system.coefficient(j, c).is_zero() {
                    continue;
                }
                let factor = -(system.coefficient(j, c) / system.coefficient(c, c));
                trace!("column {c}: row {j} += {factor} * row {c}");
                system.add_scaled_row(&factor, c, j)?;
            }
        }

        debug!("triangular form: done");
        Ok(system)
    }

    /// Back substitution on top of [`LinearSystem::triangular_form`].
    ///
    /// Rows are visited bottom to top. A row with a pivot is scaled so the
    /// pivot is one, then that column is cleared from every row above it. A
    /// row reading `0 = k` with `k` nonzero is scaled to `0 = 1`; `0 = 0`
    /// rows are left alone.
    ///
    /// # Errors
    ///
    /// Propagates row operation failures, which a well-formed system never
    /// produces.
    pub fn reduced_row_echelon_form(&self) -> Result<Self, SystemError> {
        let mut system = self.triangular_form()?;
        debug!("reduced row-echelon form: {} equations", system.len());

        for i in (0..system.len()).rev() {
            let row = system[i].hyperplane();
            let Some(pivot) = row.first_nonzero_index() else {
                let constant = row.constant_term();
                if !constant.is_zero() {
                    trace!("row {i}: inconsistent, normalizing 0 = {constant}");
                    let normalizer = constant.recip()?;
                    system.scale_row(&normalizer, i)?;
                }
                continue;
            };

            let normalizer = system.coefficient(i, pivot).recip()?;
            trace!("row {i}: pivot in column {pivot}, scaling by {normalizer}");
            system.scale_row(&normalizer, i)?;

            for k in (0..i).rev() {
                let factor = -system.coefficient(k, pivot);
                if factor.is_zero() {
                    continue;
                }
                trace!("column {pivot}: row {k} += {factor} * row {i}");
                system.add_scaled_row(&factor, i, k)?;
            }
        }

        debug!("reduced row-echelon form: done");
        Ok(system)
    }
}

#[cfg(test)]
mod tests {
    use linsys_decimal::Scalar;
    use linsys_geometry::{Plane, Vector};

    use crate::LinearSystem;

    fn plane(normal: [i64; 3], k: impl Into<Scalar>) -> Plane {
        Plane::new(Vector::from_ints(normal), k).unwrap()
    }

    fn system(rows: Vec<Plane>) -> LinearSystem<Plane> {
        LinearSystem::new(rows).unwrap()
    }

    fn ninths(n: i64) -> Scalar {
        Scalar::from(n) / Scalar::from(9)
    }

    #[test]
    fn test_triangular_already_triangular() {
        let s = system(vec![plane([1, 1, 1], 1), plane([0, 1, 1], 2)]);
        let t = s.triangular_form().unwrap();
        assert_eq!(t.rows(), s.rows());
    }

    #[test]
    fn test_triangular_inconsistent_pair() {
        let s = system(vec![plane([1, 1, 1], 1), plane([1, 1, 1], 2)]);
        let t = s.triangular_form().unwrap();
        assert_eq!(t[0], plane([1, 1, 1], 1));
        assert_eq!(t[1], plane([0, 0, 0], 1));
        assert!(t[1].is_inconsistent());
    }

    #[test]
    fn test_triangular_four_planes() {
        let s = system(vec![
            plane([1, 1, 1], 1),
            plane([0, 1, 0], 2),
            plane([1, 1, -1], 3),
            plane([1, 0, -2], 2),
        ]);
        let t = s.triangular_form().unwrap();
        assert_eq!(t[0], plane([1, 1, 1], 1));
        assert_eq!(t[1], plane([0, 1, 0], 2));
        assert_eq!(t[2], plane([0, 0, -2], 2));
        assert_eq!(t[3], plane([0, 0, 0], 0));
    }

    #[test]
    fn test_triangular_swaps_missing_pivot() {
        let s = system(vec![
            plane([0, 1, 1], 1),
            plane([1, -1, 1], 2),
            plane([1, 2, -5], 3),
        ]);
        let t = s.triangular_form().unwrap();
        assert_eq!(t[0], plane([1, -1, 1], 2));
        assert_eq!(t[1], plane([0, 1, 1], 1));
        assert_eq!(t[2], plane([0, 0, -9], -2));
    }

    #[test]
    fn test_triangular_leaves_input_untouched() {
        let s = system(vec![plane([0, 1, 1], 1), plane([1, -1, 1], 2)]);
        let before = s.clone();
        let _ = s.triangular_form().unwrap();
        let _ = s.reduced_row_echelon_form().unwrap();
        assert_eq!(s, before);
        assert_eq!(s[0].normal_vector(), &Vector::from_ints([0, 1, 1]));
    }

    #[test]
    fn test_rref_two_planes() {
        let s = system(vec![plane([1, 1, 1], 1), plane([0, 1, 1], 2)]);
        let r = s.reduced_row_echelon_form().unwrap();
        assert_eq!(r[0], plane([1, 0, 0], -1));
        assert_eq!(r[1], plane([0, 1, 1], 2));
    }

    #[test]
    fn test_rref_inconsistent_pair() {
        let s = system(vec![plane([1, 1, 1], 1), plane([1, 1, 1], 2)]);
        let r = s.reduced_row_echelon_form().unwrap();
        assert_eq!(r[0], plane([1, 1, 1], 1));
        assert_eq!(r[1], plane([0, 0, 0], 1));
        assert_eq!(r[1].constant_term(), &Scalar::from(1));
    }

    #[test]
    fn test_rref_four_planes() {
        let s = system(vec![
            plane([1, 1, 1], 1),
            plane([0, 1, 0], 2),
            plane([1, 1, -1], 3),
            plane([1, 0, -2], 2),
        ]);
        let r = s.reduced_row_echelon_form().unwrap();
        assert_eq!(r[0], plane([1, 0, 0], 0));
        assert_eq!(r[1], plane([0, 1, 0], 2));
        assert_eq!(r[2], plane([0, 0, -2], 2));
        assert_eq!(r[3], plane([0, 0, 0], 0));
    }

    #[test]
    fn test_rref_unique_solution() {
        let s = system(vec![
            plane([0, 1, 1], 1),
            plane([1, -1, 1], 2),
            plane([1, 2, -5], 3),
        ]);
        let r = s.reduced_row_echelon_form().unwrap();
        assert_eq!(r[0], plane([1, 0, 0], ninths(23)));
        assert_eq!(r[1], plane([0, 1, 0], ninths(7)));
        assert_eq!(r[2], plane([0, 0, 1], ninths(2)));
    }

    #[test]
    fn test_rref_is_idempotent() {
        let s = system(vec![
            plane([0, 1, 1], 1),
            plane([1, -1, 1], 2),
            plane([1, 2, -5], 3),
        ]);
        let once = s.reduced_row_echelon_form().unwrap();
        let twice = once.reduced_row_echelon_form().unwrap();
        assert_eq!(once, twice);
    }
}
