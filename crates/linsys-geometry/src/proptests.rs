//! Property-based tests for vector algebra.

#[cfg(test)]
mod tests {
    use linsys_decimal::Scalar;
    use proptest::prelude::*;

    use crate::Vector;

    fn decimal() -> impl Strategy<Value = Scalar> {
        (-50_000i64..50_000i64).prop_map(|n| Scalar::from_parts(n, -3))
    }

    fn vector(dimension: usize) -> impl Strategy<Value = Vector> {
        prop::collection::vec(decimal(), dimension).prop_map(Vector::new)
    }

    fn vector_pair() -> impl Strategy<Value = (Vector, Vector)> {
        (1usize..6).prop_flat_map(|n| (vector(n), vector(n)))
    }

    proptest! {
        #[test]
        fn add_then_subtract_roundtrips((a, b) in vector_pair()) {
            prop_assert_eq!(a.add(&b).unwrap().subtract(&b).unwrap(), a);
        }

        #[test]
        fn add_commutative((a, b) in vector_pair()) {
            prop_assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
        }

        #[test]
        fn parallel_to_itself(a in vector(4)) {
            prop_assert!(a.is_parallel(&a).unwrap());
        }

        #[test]
        fn zero_parallel_to_everything(a in vector(3)) {
            let zero = Vector::zero(3);
            prop_assert!(zero.is_parallel(&a).unwrap());
            prop_assert!(a.is_parallel(&zero).unwrap());
        }

        #[test]
        fn unit_has_magnitude_one(a in vector(3)) {
            prop_assume!(!a.is_zero());
            let magnitude = a.unit().magnitude().to_f64();
            prop_assert!((magnitude - 1.0).abs() < 1e-6);
        }

        #[test]
        fn projection_decomposes((v, w) in vector_pair()) {
            let projection = v.project_on(&w).unwrap();
            let recombined = projection.parallel.add(&projection.orthogonal).unwrap();
            prop_assert!(recombined.approx_eq(&v));
            prop_assert!(projection.orthogonal.is_orthogonal(&w).unwrap());
        }

        #[test]
        fn cross_orthogonal_to_operands(a in vector(3), b in vector(3)) {
            let c = a.cross(&b).unwrap();
            prop_assert!(c.is_orthogonal(&a).unwrap());
            prop_assert!(c.is_orthogonal(&b).unwrap());
        }
    }
}
