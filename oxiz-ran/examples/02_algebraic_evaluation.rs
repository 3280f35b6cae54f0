//! # Algebraic Evaluation Example
//!
//! This example evaluates multivariate polynomials at algebraic points.
//! It covers:
//! - Values of polynomials at irrational assignments
//! - Sign constraints
//! - Roots in one variable over an algebraic assignment
//! - Substitution strategies and backends
//!
//! ## See Also
//! - [`Evaluator`](oxiz_ran::Evaluator)
//! - [`SubstitutionStrategy`](oxiz_ran::SubstitutionStrategy)

use num_bigint::BigInt;
use num_rational::BigRational;
use oxiz_ran::{
    Assignment, BuchbergerBackend, Constraint, Evaluator, EvaluatorConfig, Interval, Polynomial,
    RealAlgebraicNumber, Relation, SubstitutionStrategy, UnivariatePolynomial,
};

fn rat(n: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

fn sqrt(n: i64) -> RealAlgebraicNumber {
    RealAlgebraicNumber::from_root(
        &UnivariatePolynomial::from_coeffs_int(0, &[-n, 0, 1]),
        Interval::open(rat(0), rat(n)),
    )
}

fn main() {
    println!("=== OxiZ RAN: Algebraic Evaluation ===\n");

    let mut assignment = Assignment::new();
    assignment.insert(0, sqrt(2));
    assignment.insert(1, sqrt(3));
    println!("x = {}", assignment[&0]);
    println!("y = {}", assignment[&1]);

    // x + y
    let sum = Polynomial::from_coeffs_int(&[(1, &[(0, 1)]), (1, &[(1, 1)])]);
    // x^2 y^2
    let square = Polynomial::from_coeffs_int(&[(1, &[(0, 2), (1, 2)])]);

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
        println!("\nStrategy: {}", strategy);
        match evaluator.evaluate(&sum, &assignment) {
            Some(value) => println!("  x + y = {}", value),
            None => println!("  x + y could not be evaluated"),
        }
        match evaluator.evaluate(&square, &assignment) {
            Some(value) => println!("  x^2 y^2 = {}", value),
            None => println!("  x^2 y^2 could not be evaluated"),
        }
        println!("  stats: {:?}", evaluator.stats());
    }

    let mut evaluator = Evaluator::default_config();
    println!("\nConstraints:");
    for relation in [Relation::Less, Relation::Eq, Relation::Greater] {
        // x y - 5/2 ~ 0
        let c = Constraint::new(
            Polynomial::from_coeffs_int(&[(2, &[(0, 1), (1, 1)]), (-5, &[])]),
            relation,
        );
        println!("  {}: {:?}", c, evaluator.evaluate_constraint(&c, &assignment));
    }

    // z^2 - x z - y
    let p = Polynomial::from_coeffs_int(&[(1, &[(2, 2)]), (-1, &[(0, 1), (2, 1)]), (-1, &[(1, 1)])]);
    println!("\nRoots in z of {}:", p);
    let roots = evaluator.real_roots_multivariate(&p, 2, &assignment, &Interval::unbounded());
    for r in roots.roots().unwrap_or_default() {
        println!("  {}", r);
    }
}
