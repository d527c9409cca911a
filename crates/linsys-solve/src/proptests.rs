//! Property-based tests for elimination and solving.

#[cfg(test)]
mod tests {
    use linsys_decimal::Scalar;
    use linsys_geometry::{Hyperplane, Vector};
    use proptest::prelude::*;

    use crate::{LinearSystem, Solution};

    // Small integer rows keep every intermediate well inside the working
    // precision.
    fn system() -> impl Strategy<Value = LinearSystem<Hyperplane>> {
        (1usize..5, 1usize..5).prop_flat_map(|(equations, dimension)| {
            prop::collection::vec(
                (prop::collection::vec(-3i64..=3, dimension), -3i64..=3),
                equations,
            )
            .prop_map(|rows| {
                let rows = rows
                    .into_iter()
                    .map(|(normal, k)| Hyperplane::new(Vector::from_ints(normal), k))
                    .collect();
                LinearSystem::new(rows).unwrap()
            })
        })
    }

    fn residual(row: &Hyperplane, point: &Vector) -> f64 {
        (row.normal_vector().dot(point).unwrap() - row.constant_term())
            .abs()
            .to_f64()
    }

    proptest! {
        #[test]
        fn rref_is_idempotent(s in system()) {
            let once = s.reduced_row_echelon_form().unwrap();
            let twice = once.reduced_row_echelon_form().unwrap();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn reductions_preserve_shape(s in system()) {
            let r = s.reduced_row_echelon_form().unwrap();
            prop_assert_eq!(r.len(), s.len());
            prop_assert_eq!(r.dimension(), s.dimension());
        }

        #[test]
        fn solutions_satisfy_every_equation(s in system(), t in -5i64..=5) {
            match s.solve().unwrap() {
                Solution::Inconsistent => {}
                Solution::Unique(point) => {
                    for row in &s {
                        prop_assert!(residual(row, &point) < 1e-9);
                    }
                }
                Solution::Infinite(family) => {
                    let parameters = vec![Scalar::from(t); family.free_variables()];
                    let point = family.point_at(&parameters).unwrap();
                    for row in &s {
                        prop_assert!(residual(row, &point) < 1e-9);
                    }
                }
            }
        }
    }
}
