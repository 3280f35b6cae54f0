//! # Root Isolation Example
//!
//! This example isolates the real roots of univariate polynomials.
//! It covers:
//! - Rational and irrational roots
//! - Restricting the search interval
//! - Refining an isolating interval
//! - Ordering and sample points between roots
//!
//! ## See Also
//! - [`RootIsolator`](oxiz_ran::isolate::RootIsolator)
//! - [`RealAlgebraicNumber`](oxiz_ran::RealAlgebraicNumber)

use num_bigint::BigInt;
use num_rational::BigRational;
use oxiz_ran::interval::Interval;
use oxiz_ran::isolate::{IsolationConfig, RootCounting, RootIsolator};
use oxiz_ran::polynomial::UnivariatePolynomial;
use oxiz_ran::ran::sample_between;

fn rat(n: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

fn main() {
    println!("=== OxiZ RAN: Root Isolation ===\n");

    let mut isolator = RootIsolator::default_config();

    // (x - 1/2)(x^2 - 2)(x^3 - 3x + 1)
    let p = UnivariatePolynomial::from_coeffs_int(0, &[-2, 1])
        .mul(&UnivariatePolynomial::from_coeffs_int(0, &[-2, 0, 1]))
        .mul(&UnivariatePolynomial::from_coeffs_int(0, &[1, -3, 0, 1]));
    println!("p = {}", p);

    let roots = isolator
        .isolate(&p, &Interval::unbounded())
        .into_roots()
        .unwrap_or_default();
    for r in &roots {
        println!("  root {}", r);
    }

    println!("\nRoots in (0, 2):");
    let inside = isolator
        .isolate(&p, &Interval::open(rat(0), rat(2)))
        .into_roots()
        .unwrap_or_default();
    for r in &inside {
        println!("  root {}", r);
    }

    if let Some(largest) = roots.last() {
        println!("\nRefining the largest root to width 2^-30:");
        largest.refine_to_width(&BigRational::new(BigInt::from(1), BigInt::from(1u64 << 30)));
        println!("  {}", largest);
    }

    println!("\nSample points between consecutive roots:");
    for w in roots.windows(2) {
        println!("  {} < {} < {}", w[0], sample_between(&w[0], &w[1]), w[1]);
    }

    let mut descartes = RootIsolator::new(IsolationConfig {
        counting: RootCounting::Descartes,
        seed_with_approximation: false,
        ..IsolationConfig::default()
    });
    let again = descartes
        .isolate(&p, &Interval::unbounded())
        .into_roots()
        .unwrap_or_default();
    println!("\nDescartes counting agrees: {}", again == roots);
    println!("Sturm isolator stats: {:?}", isolator.stats());
    println!("Descartes isolator stats: {:?}", descartes.stats());
}
