//! Property-based tests for polynomial operations
//!
//! This module tests:
//! - Euclidean and pseudo division
//! - GCD and square-free parts
//! - Derivatives and resultants
//! - Conversion between multivariate and univariate forms

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};
use oxiz_ran::polynomial::{Polynomial, UnivariatePolynomial};
use proptest::prelude::*;

type UPoly = UnivariatePolynomial<BigRational>;

/// Strategy for generating small polynomial coefficients
fn coeff_strategy() -> impl Strategy<Value = i64> {
    -10i64..10i64
}

/// Strategy for non-zero univariate polynomials of degree at most 5
fn upoly_strategy() -> impl Strategy<Value = UPoly> {
    prop::collection::vec(coeff_strategy(), 1..6)
        .prop_filter("non-zero", |cs| cs.iter().any(|c| *c != 0))
        .prop_map(|cs| UnivariatePolynomial::from_coeffs_int(0, &cs))
}

/// Helper to create rational
fn rat(n: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

fn linear(root: i64) -> UPoly {
    UnivariatePolynomial::from_coeffs_int(0, &[-root, 1])
}

#[cfg(test)]
mod division_properties {
    use super::*;

    proptest! {
        /// Test that quotient and remainder reconstruct the dividend
        #[test]
        fn div_rem_reconstructs(p in upoly_strategy(), d in upoly_strategy()) {
            let (q, r) = p.div_rem(&d);
            prop_assert_eq!(&(&q * &d) + &r, p);
            prop_assert!(r.is_zero() || r.degree() < d.degree());
        }

        /// Test that the pseudo-remainder has lower degree than the divisor
        #[test]
        fn pseudo_remainder_degree(p in upoly_strategy(), d in upoly_strategy()) {
            prop_assume!(!d.is_constant());
            let r = p.pseudo_remainder(&d);
            prop_assert!(r.is_zero() || r.degree() < d.degree());
        }

        /// Test that the gcd divides both arguments
        #[test]
        fn gcd_divides_both(p in upoly_strategy(), d in upoly_strategy()) {
            let g = p.gcd(&d);
            prop_assert!(p.rem(&g).is_zero());
            prop_assert!(d.rem(&g).is_zero());
        }

        /// Test that a common factor survives in the gcd
        #[test]
        fn gcd_keeps_common_factor(p in upoly_strategy(), d in upoly_strategy(), a in -5i64..5i64) {
            let common = linear(a);
            let g = p.mul(&common).gcd(&d.mul(&common));
            prop_assert!(g.rem(&common).is_zero());
        }
    }
}

#[cfg(test)]
mod square_free_properties {
    use super::*;

    proptest! {
        /// Test that squaring does not change the square-free part
        #[test]
        fn square_free_part_of_square(p in upoly_strategy()) {
            prop_assume!(!p.is_constant());
            prop_assert_eq!(p.mul(&p).square_free_part(), p.square_free_part());
        }

        /// Test that the square-free part is square-free and divides the input
        #[test]
        fn square_free_part_is_square_free(p in upoly_strategy()) {
            let sf = p.square_free_part();
            prop_assert!(sf.is_square_free());
            prop_assert!(p.rem(&sf).is_zero());
        }
    }
}

#[cfg(test)]
mod derivative_properties {
    use super::*;

    proptest! {
        /// Test the product rule
        #[test]
        fn derivative_product_rule(p in upoly_strategy(), q in upoly_strategy()) {
            let lhs = p.mul(&q).derivative();
            let rhs = &p.derivative().mul(&q) + &p.mul(&q.derivative());
            prop_assert_eq!(lhs, rhs);
        }

        /// Test that the derivative of a constant is zero
        #[test]
        fn derivative_of_constant(c in coeff_strategy()) {
            let p = UnivariatePolynomial::from_coeffs_int(0, &[c]);
            prop_assert!(p.derivative().is_zero());
        }
    }
}

#[cfg(test)]
mod resultant_properties {
    use super::*;

    proptest! {
        /// Test that the resultant of two linear factors is their root distance
        #[test]
        fn resultant_of_linear_factors(a in -20i64..20i64, b in -20i64..20i64) {
            let res = linear(a).resultant(&linear(b));
            prop_assert_eq!(res.abs(), rat((a - b).abs()));
        }

        /// Test that the resultant vanishes exactly on a common root
        #[test]
        fn resultant_vanishes_on_common_root(
            a in -5i64..5i64,
            b in -5i64..5i64,
            c in -5i64..5i64,
        ) {
            let p = linear(a).mul(&linear(b));
            let q = linear(a).mul(&linear(c));
            prop_assert!(p.resultant(&q).is_zero());
        }

        /// Test that the resultant is symmetric up to sign
        #[test]
        fn resultant_symmetric_up_to_sign(p in upoly_strategy(), q in upoly_strategy()) {
            prop_assert_eq!(p.resultant(&q).abs(), q.resultant(&p).abs());
        }
    }
}

#[cfg(test)]
mod multivariate_properties {
    use super::*;

    proptest! {
        /// Test that polynomial addition and multiplication commute
        #[test]
        fn add_mul_commutative(c1 in coeff_strategy(), c2 in coeff_strategy(), c3 in coeff_strategy()) {
            let p = Polynomial::from_coeffs_int(&[(c1, &[(0, 1)]), (c2, &[(1, 2)])]);
            let q = Polynomial::from_coeffs_int(&[(c3, &[(0, 1), (1, 1)]), (1, &[])]);
            prop_assert_eq!(&p + &q, &q + &p);
            prop_assert_eq!(&p * &q, &q * &p);
        }

        /// Test that splitting off a variable and joining again is the identity
        #[test]
        fn univariate_view_round_trip(c1 in coeff_strategy(), c2 in coeff_strategy(), c3 in coeff_strategy()) {
            let p = Polynomial::from_coeffs_int(&[
                (c1, &[(0, 2), (1, 1)]),
                (c2, &[(1, 3)]),
                (c3, &[(0, 1)]),
            ]);
            prop_assert_eq!(p.to_univariate(1).to_polynomial(), p.clone());
            prop_assert_eq!(p.to_univariate(0).to_polynomial(), p);
        }

        /// Test that substituting every variable yields the value
        #[test]
        fn eval_at_every_variable(c1 in coeff_strategy(), c2 in coeff_strategy(), x in -5i64..5i64, y in -5i64..5i64) {
            let p = Polynomial::from_coeffs_int(&[(c1, &[(0, 2)]), (c2, &[(0, 1), (1, 1)]), (7, &[])]);
            let value = p.eval_at(0, &rat(x)).eval_at(1, &rat(y));
            prop_assert!(value.is_number());
            prop_assert_eq!(value.constant_value(), rat(c1 * x * x + c2 * x * y + 7));
        }
    }
}

