//! End-to-end scenarios for real algebraic numbers, root isolation and
//! evaluation at algebraic points.

use num_bigint::BigInt;
use num_rational::BigRational;
use oxiz_ran::evaluation::{evaluate, evaluate_constraint, real_roots_multivariate, Assignment};
use oxiz_ran::interval::Interval;
use oxiz_ran::isolate::real_roots;
use oxiz_ran::polynomial::{Polynomial, UnivariatePolynomial, Var};
use oxiz_ran::ran::{compare, compare_rational};
use oxiz_ran::{
    BuchbergerBackend, Constraint, Evaluator, EvaluatorConfig, RealAlgebraicNumber, Relation, Sign,
    SubstitutionStrategy, Tribool,
};
use proptest::prelude::*;

type UPoly = UnivariatePolynomial<BigRational>;

fn rat(n: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

fn frac(n: i64, d: i64) -> BigRational {
    BigRational::new(BigInt::from(n), BigInt::from(d))
}

fn upoly(coeffs: &[i64]) -> UPoly {
    UnivariatePolynomial::from_coeffs_int(0, coeffs)
}

fn poly(terms: &[(i64, &[(Var, u32)])]) -> Polynomial {
    Polynomial::from_coeffs_int(terms)
}

fn single_root(p: &UPoly, interval: Interval) -> RealAlgebraicNumber {
    let mut roots = real_roots(p, &interval).into_roots().unwrap_or_default();
    assert_eq!(roots.len(), 1, "expected one root of {} in {}", p, interval);
    roots.remove(0)
}

fn sqrt2() -> RealAlgebraicNumber {
    single_root(&upoly(&[-2, 0, 1]), Interval::open(rat(1), rat(2)))
}

fn sqrt3() -> RealAlgebraicNumber {
    single_root(&upoly(&[-3, 0, 1]), Interval::open(rat(1), rat(2)))
}

const RELATIONS: [Relation; 6] = [
    Relation::Eq,
    Relation::Neq,
    Relation::Less,
    Relation::Leq,
    Relation::Greater,
    Relation::Geq,
];

proptest! {
    #[test]
    fn rationals_are_numeric(n in -1000i64..1000i64, d in 1i64..100i64) {
        let q = frac(n, d);
        let r = RealAlgebraicNumber::from_rational(q.clone());
        prop_assert!(r.is_numeric());
        prop_assert_eq!(r.value(), Some(q));
    }

    #[test]
    fn ordering_is_stable_under_refinement(n in -30i64..30i64, d in 1i64..10i64, steps in 0usize..12) {
        let q = frac(n, d);
        let x = sqrt2();
        let before: Vec<bool> = RELATIONS.iter().map(|rel| compare_rational(&x, &q, *rel)).collect();
        for _ in 0..steps {
            x.refine();
            prop_assert!(compare(&x, &x, Relation::Eq));
        }
        let after: Vec<bool> = RELATIONS.iter().map(|rel| compare_rational(&x, &q, *rel)).collect();
        prop_assert_eq!(before, after);
    }
}

#[test]
fn sqrt2_in_unit_interval() {
    let p = upoly(&[-2, 0, 1]);
    let r = single_root(&p, Interval::open(rat(1), rat(2)));
    assert!(r > frac(14, 10));
    assert!(r < frac(15, 10));
    assert_eq!(r.sgn(&p), Sign::Zero);
}

#[test]
fn negative_root_of_sqrt2() {
    let p = upoly(&[-2, 0, 1]);
    let negative = single_root(&p, Interval::open(rat(-2), rat(-1)));
    let positive = single_root(&p, Interval::open(rat(1), rat(2)));
    assert!(negative < frac(-14, 10) && negative > frac(-15, 10));
    assert!(negative < positive);
    assert!(compare(&negative, &positive, Relation::Less));
    assert!(!compare(&negative, &positive, Relation::Geq));
}

#[test]
fn zero_and_constant_polynomials() {
    let zero = UnivariatePolynomial::zero(0);
    for interval in [Interval::unbounded(), Interval::open(rat(-1), rat(1))] {
        assert!(real_roots(&zero, &interval).is_nullified());
        let roots = real_roots(&upoly(&[5]), &interval).into_roots();
        assert_eq!(roots.map(|r| r.len()), Some(0));
    }
}

#[test]
fn difference_of_one_number_vanishes() {
    let x = sqrt2();
    let mut assignment = Assignment::new();
    assignment.insert(0, x.clone());
    assignment.insert(1, x);
    let value = evaluate(&poly(&[(1, &[(0, 1)]), (-1, &[(1, 1)])]), &assignment).expect("value exists");
    assert!(value.is_numeric());
    assert!(value.is_zero());
}

#[test]
fn sum_of_sqrt2_and_sqrt3() {
    let mut assignment = Assignment::new();
    assignment.insert(0, sqrt2());
    assignment.insert(1, sqrt3());
    let value = evaluate(&poly(&[(1, &[(0, 1)]), (1, &[(1, 1)])]), &assignment).expect("value exists");
    let defining = value.polynomial().expect("irrational sum");
    assert_eq!(defining.replace_var(0), upoly(&[1, 0, -10, 0, 1]));
    assert!(value > frac(31, 10));
    assert!(value < frac(32, 10));
}

#[test]
fn sum_with_every_strategy() {
    for strategy in [
        SubstitutionStrategy::Resultant,
        SubstitutionStrategy::Groebner,
        SubstitutionStrategy::FieldExtension,
    ] {
        let mut evaluator = Evaluator::with_backend(
            EvaluatorConfig {
                strategy,
                ..EvaluatorConfig::default()
            },
            Box::new(BuchbergerBackend::default()),
        );
        let mut assignment = Assignment::new();
        assignment.insert(0, sqrt2());
        assignment.insert(1, sqrt3());
        let value = evaluator
            .evaluate(&poly(&[(1, &[(0, 1)]), (1, &[(1, 1)])]), &assignment)
            .expect("value exists");
        assert!(value > frac(31, 10) && value < frac(32, 10), "strategy {}", strategy);
    }
}

#[test]
fn constraints_at_sqrt2() {
    let mut assignment = Assignment::new();
    assignment.insert(0, sqrt2());
    let lhs = poly(&[(1, &[(0, 2)]), (-2, &[])]);
    assert_eq!(
        evaluate_constraint(&Constraint::new(lhs.clone(), Relation::Eq), &assignment),
        Tribool::True
    );
    assert_eq!(
        evaluate_constraint(&Constraint::new(lhs, Relation::Less), &assignment),
        Tribool::False
    );
}

#[test]
fn roots_round_trip() {
    // x^3 - 3x + 1 has roots near -1.88, 0.35 and 1.53
    let p = upoly(&[1, -3, 0, 1]);
    let r = single_root(&p, Interval::open(rat(1), rat(2)));
    let interval = r.interval();
    let widened = Interval::open(
        interval.lower() - frac(1, 100),
        interval.upper() + frac(1, 100),
    );
    let defining = r.polynomial().expect("irrational root");
    let again = single_root(&defining, widened);
    assert!(compare(&again, &r, Relation::Eq));
}

#[test]
fn roots_over_algebraic_assignment() {
    // y^2 - x y - 1 at x = sqrt(2): y = (sqrt(2) ± sqrt(6)) / 2
    let p = poly(&[(1, &[(1, 2)]), (-1, &[(0, 1), (1, 1)]), (-1, &[])]);
    let mut assignment = Assignment::new();
    assignment.insert(0, sqrt2());
    let roots = real_roots_multivariate(&p, 1, &assignment, &Interval::unbounded())
        .into_roots()
        .unwrap_or_default();
    assert_eq!(roots.len(), 2);
    assert!(roots[0] > frac(-52, 100) && roots[0] < frac(-51, 100));
    assert!(roots[1] > frac(193, 100) && roots[1] < frac(194, 100));
}
