//! Property-based tests for decimal arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::{approx_eq, Scalar};

    // Decimals with up to three fractional digits
    fn small_decimal() -> impl Strategy<Value = Scalar> {
        (-100_000i64..100_000i64).prop_map(|n| Scalar::from_parts(n, -3))
    }

    fn non_negligible_decimal() -> impl Strategy<Value = Scalar> {
        prop_oneof![(-100_000i64..=-1i64), (1i64..=100_000i64)]
            .prop_map(|n| Scalar::from_parts(n, -3))
    }

    proptest! {
        #[test]
        fn add_commutative(a in small_decimal(), b in small_decimal()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn add_then_sub_roundtrips(a in small_decimal(), b in small_decimal()) {
            prop_assert_eq!((&a + &b) - &b, a);
        }

        #[test]
        fn mul_distributes(a in small_decimal(), b in small_decimal(), c in small_decimal()) {
            let lhs = &a * &(&b + &c);
            let rhs = &(&a * &b) + &(&a * &c);
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn div_inverts_mul(a in small_decimal(), b in non_negligible_decimal()) {
            let q = &(&a * &b) / &b;
            prop_assert!(approx_eq(&q, &a));
        }

        #[test]
        fn sqrt_squares_back(a in non_negligible_decimal()) {
            let a = a.abs();
            let root = a.sqrt().unwrap();
            prop_assert!(approx_eq(&(&root * &root), &a));
        }

        #[test]
        fn display_parses_back(a in small_decimal()) {
            let text = a.to_string();
            prop_assert_eq!(text.parse::<Scalar>().unwrap(), a);
        }

        #[test]
        fn negation_is_zero_sum(a in small_decimal()) {
            prop_assert!((&a + &(-&a)).is_zero());
        }
    }
}
