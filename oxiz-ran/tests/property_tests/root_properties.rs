//! Property-based tests for real root isolation
//!
//! This module tests:
//! - Rational roots come back exact and in order
//! - Isolated roots are roots and strictly increasing
//! - Sturm and Descartes counting agree

use num_bigint::BigInt;
use num_rational::BigRational;
use oxiz_ran::interval::Interval;
use oxiz_ran::isolate::{real_roots, IsolationConfig, RootCounting, RootIsolator};
use oxiz_ran::polynomial::UnivariatePolynomial;
use oxiz_ran::RealAlgebraicNumber;
use proptest::prelude::*;

type UPoly = UnivariatePolynomial<BigRational>;

/// Strategy for generating polynomial coefficients
fn root_coeff_strategy() -> impl Strategy<Value = i64> {
    -5i64..5i64
}

/// Strategy for non-constant polynomials of degree at most 5
fn upoly_strategy() -> impl Strategy<Value = UPoly> {
    prop::collection::vec(root_coeff_strategy(), 2..7)
        .prop_map(|cs| UnivariatePolynomial::from_coeffs_int(0, &cs))
        .prop_filter("non-constant", |p| !p.is_constant())
}

/// Helper to create rational
fn rat(n: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

fn isolate_all(p: &UPoly) -> Vec<RealAlgebraicNumber> {
    real_roots(p, &Interval::unbounded()).into_roots().unwrap_or_default()
}

#[cfg(test)]
mod rational_root_properties {
    use super::*;

    proptest! {
        /// Test that a product of linear factors has exactly its integer roots
        #[test]
        fn integer_roots_are_exact(roots in prop::collection::btree_set(-8i64..8i64, 1..5)) {
            let p = roots.iter().fold(UnivariatePolynomial::from_coeffs_int(0, &[1]), |acc, r| {
                acc.mul(&UnivariatePolynomial::from_coeffs_int(0, &[-*r, 1]))
            });
            let found: Vec<Option<BigRational>> = isolate_all(&p).iter().map(|r| r.value()).collect();
            let expected: Vec<Option<BigRational>> = roots.iter().map(|r| Some(rat(*r))).collect();
            prop_assert_eq!(found, expected);
        }

        /// Test that repeated factors are reported once
        #[test]
        fn multiplicities_are_ignored(a in -6i64..6i64, b in -6i64..6i64) {
            prop_assume!(a != b);
            let la = UnivariatePolynomial::from_coeffs_int(0, &[-a, 1]);
            let lb = UnivariatePolynomial::from_coeffs_int(0, &[-b, 1]);
            let p = la.mul(&la).mul(&la).mul(&lb);
            prop_assert_eq!(isolate_all(&p).len(), 2);
        }
    }
}

#[cfg(test)]
mod irrational_root_properties {
    use super::*;

    proptest! {
        /// Test that x^2 - n has two opposite roots for a non-square n
        #[test]
        fn square_roots_are_opposite(n in 2i64..200i64) {
            let s = (n as f64).sqrt() as i64;
            prop_assume!(s * s != n && (s + 1) * (s + 1) != n);
            let p = UnivariatePolynomial::from_coeffs_int(0, &[-n, 0, 1]);
            let roots = isolate_all(&p);
            prop_assert_eq!(roots.len(), 2);
            prop_assert!(roots[0] < rat(0));
            prop_assert!(roots[1] > rat(0));
            prop_assert!(roots[0].abs() == roots[1]);
            prop_assert!(roots[1].is_root_of(&p));
        }

        /// Test that isolated roots are roots, in strictly increasing order
        #[test]
        fn roots_are_sorted_roots(p in upoly_strategy()) {
            let roots = isolate_all(&p);
            prop_assert!(roots.len() <= p.degree());
            for r in &roots {
                prop_assert!(r.is_root_of(&p));
            }
            for w in roots.windows(2) {
                prop_assert!(w[0] < w[1]);
            }
        }

        /// Test that the counting method does not change the roots
        #[test]
        fn sturm_and_descartes_agree(p in upoly_strategy()) {
            let mut descartes = RootIsolator::new(IsolationConfig {
                counting: RootCounting::Descartes,
                seed_with_approximation: false,
                ..IsolationConfig::default()
            });
            let lhs = isolate_all(&p);
            let rhs = descartes.isolate(&p, &Interval::unbounded()).into_roots().unwrap_or_default();
            prop_assert_eq!(lhs, rhs);
        }

        /// Test that restricting the interval keeps exactly the roots inside it
        #[test]
        fn interval_restriction(p in upoly_strategy(), lo in -4i64..0i64, hi in 1i64..4i64) {
            let inside = Interval::open(rat(lo), rat(hi));
            let restricted = real_roots(&p, &inside).into_roots().unwrap_or_default();
            let expected: Vec<RealAlgebraicNumber> = isolate_all(&p)
                .into_iter()
                .filter(|r| *r > rat(lo) && *r < rat(hi))
                .collect();
            prop_assert_eq!(restricted, expected);
        }
    }
}
