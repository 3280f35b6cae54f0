//! Property-based tests for real algebraic numbers
//!
//! This module tests:
//! - Ordering against other numbers and rationals
//! - Sample points between numbers
//! - Refinement and evaluation at algebraic points

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::One;
use oxiz_ran::evaluation::{evaluate, Assignment};
use oxiz_ran::interval::Interval;
use oxiz_ran::polynomial::{Polynomial, UnivariatePolynomial};
use oxiz_ran::ran::sample_between;
use oxiz_ran::{RealAlgebraicNumber, Sign};
use proptest::prelude::*;

/// Strategy for radicands that are not perfect squares
fn radicand_strategy() -> impl Strategy<Value = i64> {
    (2i64..80i64).prop_filter("non-square", |n| {
        let s = (*n as f64).sqrt() as i64;
        s * s != *n && (s + 1) * (s + 1) != *n
    })
}

/// Helper to create rational
fn rat(n: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

fn frac(n: i64, d: i64) -> BigRational {
    BigRational::new(BigInt::from(n), BigInt::from(d))
}

fn square(n: i64) -> UnivariatePolynomial<BigRational> {
    UnivariatePolynomial::from_coeffs_int(0, &[-n, 0, 1])
}

fn sqrt(n: i64) -> RealAlgebraicNumber {
    RealAlgebraicNumber::from_root(&square(n), Interval::open(rat(0), rat(n)))
}

#[cfg(test)]
mod ordering_properties {
    use super::*;

    proptest! {
        /// Test that square roots are ordered like their radicands
        #[test]
        fn ordering_matches_radicands(a in radicand_strategy(), b in radicand_strategy()) {
            prop_assert_eq!(sqrt(a).cmp(&sqrt(b)), a.cmp(&b));
        }

        /// Test comparison with positive rationals against squares
        #[test]
        fn comparison_with_rationals(a in radicand_strategy(), n in 1i64..100i64, d in 1i64..10i64) {
            let q = frac(n, d);
            let s = sqrt(a);
            prop_assert_eq!(s < q, rat(a) < &q * &q);
            prop_assert!(s != q);
        }

        /// Test floor and ceiling of square roots
        #[test]
        fn floor_and_ceiling(a in radicand_strategy()) {
            let s = sqrt(a);
            let fl = s.floor();
            prop_assert!(&fl * &fl < rat(a));
            let next = &fl + BigRational::one();
            prop_assert!(&next * &next > rat(a));
            prop_assert_eq!(s.ceil(), next);
            prop_assert!(!s.is_integer());
        }
    }
}

#[cfg(test)]
mod sampling_properties {
    use super::*;

    proptest! {
        /// Test that samples lie strictly between distinct numbers
        #[test]
        fn sample_is_strictly_between(a in radicand_strategy(), b in radicand_strategy()) {
            prop_assume!(a != b);
            let (lo, hi) = if a < b { (sqrt(a), sqrt(b)) } else { (sqrt(b), sqrt(a)) };
            let q = sample_between(&lo, &hi);
            prop_assert!(lo < q);
            prop_assert!(hi > q);
        }
    }
}

#[cfg(test)]
mod refinement_properties {
    use super::*;

    proptest! {
        /// Test that refinement narrows the interval and keeps the root inside
        #[test]
        fn refinement_keeps_root(a in radicand_strategy(), e in 1i64..40i64) {
            let s = sqrt(a);
            let alias = s.clone();
            let width = BigRational::new(BigInt::one(), BigInt::from(2).pow(e as u32));
            s.refine_to_width(&width);
            let interval = alias.interval();
            prop_assert!(interval.diameter().expect("bounded") <= width);
            let p = square(a);
            prop_assert!(p.sign_at(interval.lower()) != p.sign_at(interval.upper()));
            prop_assert_eq!(alias.sign(), Sign::Positive);
        }

        /// Test that squaring a square root gives back the radicand
        #[test]
        fn square_of_square_root(a in radicand_strategy()) {
            let mut assignment = Assignment::new();
            assignment.insert(0, sqrt(a));
            let p = Polynomial::from_coeffs_int(&[(1, &[(0, 2)])]);
            let value = evaluate(&p, &assignment).and_then(|v| v.value());
            prop_assert_eq!(value, Some(rat(a)));
        }

        /// Test that the product of a number with itself is exact
        #[test]
        fn product_with_copy(a in radicand_strategy()) {
            let s = sqrt(a);
            let mut assignment = Assignment::new();
            assignment.insert(0, s.clone());
            assignment.insert(1, s.deep_clone());
            let p = Polynomial::from_coeffs_int(&[(1, &[(0, 1), (1, 1)])]);
            let value = evaluate(&p, &assignment).and_then(|v| v.value());
            prop_assert_eq!(value, Some(rat(a)));
        }
    }
}
