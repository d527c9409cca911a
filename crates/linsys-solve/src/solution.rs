//! Reading a solution set off the reduced row-echelon form.

use std::fmt;

use log::debug;
use num_traits::{One, Zero};

use linsys_decimal::Scalar;
use linsys_geometry::format::{DisplayWith, FormatConfig};
use linsys_geometry::{Equation, GeometryError, Vector};

use crate::{LinearSystem, SystemError};

/// The solution set of a linear system.
#[derive(Clone, Debug, PartialEq)]
pub enum Solution {
    /// Some row reduces to `0 = k` with `k` nonzero.
    Inconsistent,
    /// Exactly one point satisfies every equation.
    Unique(Vector),
    /// An affine family with one parameter per free variable.
    Infinite(Parametrization),
}

/// The affine set `basepoint + t_0 d_0 + t_1 d_1 + ...`.
#[derive(Clone, Debug, PartialEq)]
pub struct Parametrization {
    basepoint: Vector,
    direction_vectors: Vec<Vector>,
}

impl Parametrization {
    /// Creates a parametrization from a base point and direction vectors.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if a direction vector
    /// does not match the base point's dimension.
    pub fn new(basepoint: Vector, direction_vectors: Vec<Vector>) -> Result<Self, SystemError> {
        if let Some(d) = direction_vectors
            .iter()
            .find(|d| d.dimension() != basepoint.dimension())
        {
            return Err(GeometryError::DimensionMismatch {
                expected: basepoint.dimension(),
                found: d.dimension(),
            }
            .into());
        }
        Ok(Self {
            basepoint,
            direction_vectors,
        })
    }

    /// The point reached with every parameter set to zero.
    #[must_use]
    pub fn basepoint(&self) -> &Vector {
        &self.basepoint
    }

    /// One direction per free variable.
    #[must_use]
    pub fn direction_vectors(&self) -> &[Vector] {
        &self.direction_vectors
    }

    /// Dimension of the ambient space.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.basepoint.dimension()
    }

    /// Number of free parameters.
    #[must_use]
    pub fn free_variables(&self) -> usize {
        self.direction_vectors.len()
    }

    /// Evaluates the family at the given parameter values.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] unless exactly one value
    /// is given per free variable.
    pub fn point_at(&self, parameters: &[Scalar]) -> Result<Vector, SystemError> {
        if parameters.len() != self.free_variables() {
            return Err(GeometryError::DimensionMismatch {
                expected: self.free_variables(),
                found: parameters.len(),
            }
            .into());
        }
        let mut point = self.basepoint.clone();
        for (t, direction) in parameters.iter().zip(&self.direction_vectors) {
            point = point.add(&direction.scale(t))?;
        }
        Ok(point)
    }
}

impl DisplayWith for Parametrization {
    /// One line per coordinate, e.g. `x_0 = 1 + -1 t_0`.
    fn fmt_with(&self, f: &mut fmt::Formatter<'_>, config: &FormatConfig) -> fmt::Result {
        for i in 0..self.dimension() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "x_{i} = {}", config.scalar(&self.basepoint[i]))?;
            for (t, direction) in self.direction_vectors.iter().enumerate() {
                if !direction[i].is_zero() {
                    write!(f, " + {} t_{t}", config.scalar(&direction[i]))?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for Parametrization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with(f, &FormatConfig::default())
    }
}

impl DisplayWith for Solution {
    fn fmt_with(&self, f: &mut fmt::Formatter<'_>, config: &FormatConfig) -> fmt::Result {
        match self {
            Self::Inconsistent => write!(f, "No solutions"),
            Self::Unique(point) => {
                write!(f, "Unique solution: ")?;
                point.fmt_with(f, config)
            }
            Self::Infinite(parametrization) => {
                writeln!(f, "Infinitely many solutions:")?;
                parametrization.fmt_with(f, config)
            }
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with(f, &FormatConfig::default())
    }
}

impl<E: Equation> LinearSystem<E> {
    /// Solves the system.
    ///
    /// Reduces to row-echelon form, reports an inconsistent row if there is
    /// one, and otherwise back-substitutes every pivot variable in terms of
    /// the free ones. Columns without a pivot become parameters, in column
    /// order.
    ///
    /// ```
    /// use linsys_geometry::format::{DisplayWith, FormatConfig};
    /// use linsys_geometry::{Line, Vector};
    /// use linsys_solve::{LinearSystem, Solution};
    ///
    /// let s = LinearSystem::new(vec![
    ///     Line::new(Vector::from_ints([3, 3]), 6).unwrap(),
    ///     Line::new(Vector::from_ints([3, -3]), 3).unwrap(),
    /// ])
    /// .unwrap();
    /// let Solution::Unique(p) = s.solve().unwrap() else { panic!() };
    /// assert_eq!(
    ///     p.display_with(FormatConfig::fixed(1)).to_string(),
    ///     "Vector(1.5, 0.5)"
    /// );
    /// ```
    ///
    /// # Errors
    ///
    /// Propagates row operation failures, which a well-formed system never
    /// produces.
    pub fn solve(&self) -> Result<Solution, SystemError> {
        let rref = self.reduced_row_echelon_form()?;
        if rref.iter().any(|row| row.hyperplane().is_inconsistent()) {
            debug!("solve: inconsistent");
            return Ok(Solution::Inconsistent);
        }

        let dimension = rref.dimension();
        let mut pivots: Vec<(usize, usize)> = rref
            .pivot_columns()
            .into_iter()
            .enumerate()
            .filter_map(|(row, col)| col.map(|col| (row, col)))
            .collect();
        let free: Vec<usize> = (0..dimension)
            .filter(|col| pivots.iter().all(|&(_, p)| p != *col))
            .collect();
        debug!("solve: {} pivots, free columns {free:?}", pivots.len());

        // x_i = constants[i] + sum over t of weights[i][t] * t_t
        let mut constants = vec![Scalar::zero(); dimension];
        let mut weights = vec![vec![Scalar::zero(); free.len()]; dimension];
        for (t, &col) in free.iter().enumerate() {
            weights[col][t] = Scalar::one();
        }

        // Right to left, so every later variable is already expressed.
        pivots.sort_by(|a, b| b.1.cmp(&a.1));
        for (row, col) in pivots {
            let equation = rref[row].hyperplane();
            let normal = equation.normal_vector();
            let mut constant = equation.constant_term().clone();
            let mut weight = vec![Scalar::zero(); free.len()];
            for j in col + 1..dimension {
                let a = &normal[j];
                if a.is_zero() {
                    continue;
                }
                constant = constant - a * &constants[j];
                for (w, v) in weight.iter_mut().zip(&weights[j]) {
                    *w = &*w - &(a * v);
                }
            }

            let lead = &normal[col];
            constants[col] = constant.checked_div(lead)?;
            weights[col] = weight
                .iter()
                .map(|w| w.checked_div(lead))
                .collect::<Result<_, _>>()?;
        }

        let basepoint = Vector::new(constants);
        if free.is_empty() {
            return Ok(Solution::Unique(basepoint));
        }
        let direction_vectors = (0..free.len())
            .map(|t| Vector::new(weights.iter().map(|w| w[t].clone()).collect()))
            .collect();
        Ok(Solution::Infinite(Parametrization::new(
            basepoint,
            direction_vectors,
        )?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linsys_geometry::{Line, Plane};

    fn decimal_plane(normal: [&str; 3], k: &str) -> Plane {
        Plane::new(Vector::parse(normal).unwrap(), k.parse::<Scalar>().unwrap()).unwrap()
    }

    fn plane(normal: [i64; 3], k: i64) -> Plane {
        Plane::new(Vector::from_ints(normal), k).unwrap()
    }

    fn close(a: &Scalar, expected: f64) -> bool {
        (a.to_f64() - expected).abs() < 1e-9
    }

    #[test]
    fn test_inconsistent() {
        let s = LinearSystem::new(vec![
            decimal_plane(["5.862", "1.178", "-10.366"], "-8.15"),
            decimal_plane(["-2.931", "-0.589", "5.183"], "-4.075"),
        ])
        .unwrap();
        assert_eq!(s.solve().unwrap(), Solution::Inconsistent);
    }

    #[test]
    fn test_unique_overdetermined() {
        let s = LinearSystem::new(vec![
            decimal_plane(["5.262", "2.739", "-9.878"], "-3.441"),
            decimal_plane(["5.111", "6.358", "7.638"], "-2.152"),
            decimal_plane(["2.016", "-9.924", "-1.367"], "-9.278"),
            decimal_plane(["2.167", "-13.543", "-18.883"], "-10.567"),
        ])
        .unwrap();
        let Solution::Unique(p) = s.solve().unwrap() else {
            panic!("expected a unique solution");
        };
        assert!(close(&p[0], -1.177_201_875_79));
        assert!(close(&p[1], 0.707_150_558_14));
        assert!(close(&p[2], -0.082_663_584_90));
    }

    #[test]
    fn test_infinite_one_parameter() {
        let s = LinearSystem::new(vec![
            decimal_plane(["0.786", "0.786", "0.588"], "-0.714"),
            decimal_plane(["-0.138", "-0.138", "0.244"], "0.319"),
        ])
        .unwrap();
        let Solution::Infinite(family) = s.solve().unwrap() else {
            panic!("expected infinitely many solutions");
        };
        assert_eq!(family.free_variables(), 1);
        let base = family.basepoint();
        assert!(close(&base[0], -1.325_580_372_85));
        assert!(base[1].is_zero());
        assert!(close(&base[2], 0.557_663_559_62));
        assert!(family.direction_vectors()[0].approx_eq(&Vector::from_ints([-1, 1, 0])));
    }

    #[test]
    fn test_infinite_two_parameters() {
        let s = LinearSystem::new(vec![
            decimal_plane(["0.935", "1.76", "-9.365"], "-9.955"),
            decimal_plane(["0.187", "0.352", "-1.873"], "-1.991"),
            decimal_plane(["0.374", "0.704", "-3.746"], "-3.982"),
            decimal_plane(["-0.561", "-1.056", "5.619"], "5.973"),
        ])
        .unwrap();
        let Solution::Infinite(family) = s.solve().unwrap() else {
            panic!("expected infinitely many solutions");
        };
        assert_eq!(family.free_variables(), 2);
        assert!(close(&family.basepoint()[0], -10.647_058_823_53));

        // Every member of the family satisfies every equation.
        let point = family.point_at(&[Scalar::from(2), Scalar::from(-3)]).unwrap();
        for row in &s {
            let lhs = row.normal_vector().dot(&point).unwrap();
            assert!(close(&(lhs - row.constant_term()), 0.0));
        }
    }

    #[test]
    fn test_free_column_before_pivots() {
        let s = LinearSystem::new(vec![plane([0, 1, 1], 1), plane([0, 1, 2], 0)]).unwrap();
        let Solution::Infinite(family) = s.solve().unwrap() else {
            panic!("expected infinitely many solutions");
        };
        assert!(family.basepoint().approx_eq(&Vector::from_ints([0, 2, -1])));
        assert!(family.direction_vectors()[0].approx_eq(&Vector::from_ints([1, 0, 0])));
        assert_eq!(family.to_string(), "x_0 = 0 + 1 t_0\nx_1 = 2\nx_2 = -1");
    }

    #[test]
    fn test_lines() {
        let coincident = LinearSystem::new(vec![
            Line::new(Vector::from_ints([2, 3]), 5).unwrap(),
            Line::new(Vector::from_ints([4, 6]), 10).unwrap(),
        ])
        .unwrap();
        assert!(matches!(coincident.solve().unwrap(), Solution::Infinite(_)));

        let parallel = LinearSystem::new(vec![
            Line::new(Vector::from_ints([2, 3]), 5).unwrap(),
            Line::new(Vector::from_ints([4, 6]), 3).unwrap(),
        ])
        .unwrap();
        assert_eq!(parallel.solve().unwrap(), Solution::Inconsistent);
    }

    #[test]
    fn test_point_at_checks_arity() {
        let family =
            Parametrization::new(Vector::from_ints([1, 0]), vec![Vector::from_ints([-1, 1])])
                .unwrap();
        assert_eq!(
            family.point_at(&[Scalar::from(3)]).unwrap(),
            Vector::from_ints([-2, 3])
        );
        assert!(family.point_at(&[]).is_err());
        assert!(Parametrization::new(Vector::from_ints([1, 0]), vec![Vector::from_ints([1])]).is_err());
    }

    #[test]
    fn test_display() {
        let family =
            Parametrization::new(Vector::from_ints([1, 0]), vec![Vector::from_ints([-1, 1])])
                .unwrap();
        assert_eq!(family.to_string(), "x_0 = 1 + -1 t_0\nx_1 = 0 + 1 t_0");
        assert_eq!(
            Solution::Unique(Vector::from_ints([1, 2])).to_string(),
            "Unique solution: Vector(1, 2)"
        );
        assert_eq!(Solution::Inconsistent.to_string(), "No solutions");
    }
}
