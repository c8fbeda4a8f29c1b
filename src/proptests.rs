//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use std::cmp::Ordering;

    use crate::Polynomial;

    // Small integer coefficients keep every product and sum exact in f64.
    fn small_coeff() -> impl Strategy<Value = f64> {
        (-50i32..50i32).prop_map(f64::from)
    }

    // Polynomials with 1..=6 stored coefficients (degree 0-5)
    fn small_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec(small_coeff(), 1..=6)
            .prop_map(|cf| Polynomial::from_coeffs(cf).expect("non-empty"))
    }

    // Narrower range for composition, whose coefficients grow quickly
    fn tiny_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec((-4i32..=4).prop_map(f64::from), 1..=4)
            .prop_map(|cf| Polynomial::from_coeffs(cf).expect("non-empty"))
    }

    fn nonzero_poly() -> impl Strategy<Value = Polynomial> {
        small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    fn poly_of_degree(d: usize) -> impl Strategy<Value = Polynomial> {
        (
            proptest::collection::vec(small_coeff(), d),
            small_coeff().prop_filter("leading coefficient must be non-zero", |c| *c != 0.0),
        )
            .prop_map(|(mut cf, lead)| {
                cf.push(lead);
                Polynomial::from_coeffs(cf).expect("non-empty")
            })
    }

    proptest! {
        #[test]
        fn poly_from_term_degree(a in small_coeff(), i in 0i64..10) {
            let p = Polynomial::from_term(a, i).unwrap();
            prop_assert_eq!(p.degree() as i64, i);
            let at_zero = if i == 0 { a } else { 0.0 };
            prop_assert_eq!(p.evaluate(0.0), at_zero);
        }

        #[test]
        fn poly_from_term_negative(a in small_coeff(), i in i64::MIN..0) {
            prop_assert!(Polynomial::from_term(a, i).is_err());
        }

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.plus(&b), b.plus(&a));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.times(&b), b.times(&a));
        }

        #[test]
        fn poly_minus_self(a in small_poly()) {
            prop_assert_eq!(a.minus(&a), Polynomial::zero());
        }

        #[test]
        fn poly_add_then_sub(a in small_poly(), b in small_poly()) {
            // evaluate rather than compare: the sum can leave a -0.0 behind
            let back = a.plus(&b).minus(&b);
            for x in [-2.0, -1.0, 0.0, 1.0, 2.0] {
                prop_assert_eq!(back.evaluate(x), a.evaluate(x));
            }
        }

        #[test]
        fn poly_mul_degree(a in nonzero_poly(), b in nonzero_poly()) {
            prop_assert_eq!(a.times(&b).degree(), a.degree() + b.degree());
        }

        #[test]
        fn poly_mul_evaluates(a in small_poly(), b in small_poly(), x in -3i32..=3) {
            let x = f64::from(x);
            prop_assert_eq!(a.times(&b).evaluate(x), a.evaluate(x) * b.evaluate(x));
        }

        #[test]
        fn poly_derive_degree(a in nonzero_poly()) {
            let d = a.derive();
            prop_assert_eq!(d.degree(), a.degree().saturating_sub(1));
        }

        #[test]
        fn poly_derive_power_rule(c in small_coeff(), n in 1i64..8, x in -3i32..=3) {
            let x = f64::from(x);
            let d = Polynomial::from_term(c, n).unwrap().derive();
            prop_assert_eq!(d.evaluate(x), n as f64 * c * x.powi(n as i32 - 1));
        }

        #[test]
        fn poly_compose_evaluates(a in tiny_poly(), b in tiny_poly(), x in -2i32..=2) {
            let x = f64::from(x);
            prop_assert_eq!(a.compose(&b).evaluate(x), a.evaluate(b.evaluate(x)));
        }

        #[test]
        fn poly_degree_dominates_order(a in poly_of_degree(3), b in poly_of_degree(2)) {
            prop_assert_eq!(a.cmp(&b), Ordering::Greater);
            prop_assert_eq!(b.cmp(&a), Ordering::Less);
        }

        #[test]
        fn poly_order_consistent_with_eq(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.cmp(&b) == Ordering::Equal, a == b);
        }
    }
}
