//! OxiZ-RAN: Exact Real Algebraic Numbers
//!
//! This crate provides the real algebraic number kernel used by the
//! nonlinear real arithmetic procedures of OxiZ:
//! - **Numbers**: rationals and irrational roots of square-free polynomials,
//!   represented by an isolating interval that is refined on demand
//! - **Comparison**: exact ordering, equality and rational sample points
//! - **Root Isolation**: all real roots of a univariate polynomial, in order
//! - **Evaluation**: values and constraint signs of multivariate polynomials
//!   at algebraic points
//!
//! # Architecture
//!
//! An irrational number is the unique root of its defining polynomial inside
//! an open interval. Refinement shrinks the interval in place; clones share
//! the refinement.
//!
//! Evaluating `p` at algebraic values eliminates the assigned variables from
//! `t - p` for a fresh `t` (iterated resultants, a lex Gröbner basis, or
//! Lazard reduction over a tower of field extensions) and picks the root of
//! the eliminated polynomial that lies in the interval enclosure of `p`.
//!
//! # Examples
//!
//! ## Isolating Roots
//!
//! ```rust
//! use oxiz_ran::interval::Interval;
//! use oxiz_ran::isolate::real_roots;
//! use oxiz_ran::polynomial::UnivariatePolynomial;
//!
//! // x^2 - 2
//! let p = UnivariatePolynomial::from_coeffs_int(0, &[-2, 0, 1]);
//! let roots = real_roots(&p, &Interval::unbounded()).into_roots().unwrap_or_default();
//! assert_eq!(roots.len(), 2);
//! assert!(roots[0] < roots[1]);
//! ```
//!
//! ## Evaluating at an Algebraic Point
//!
//! ```rust
//! use oxiz_ran::evaluation::{evaluate, Assignment};
//! use oxiz_ran::interval::Interval;
//! use oxiz_ran::polynomial::{Polynomial, UnivariatePolynomial};
//! use oxiz_ran::rational::rat;
//! use oxiz_ran::RealAlgebraicNumber;
//!
//! let sqrt2 = RealAlgebraicNumber::from_root(
//!     &UnivariatePolynomial::from_coeffs_int(0, &[-2, 0, 1]),
//!     Interval::open(rat(1), rat(2)),
//! );
//! let mut assignment = Assignment::new();
//! assignment.insert(0, sqrt2);
//!
//! // x^2 at x = sqrt(2)
//! let p = Polynomial::from_coeffs_int(&[(1, &[(0, 2)])]);
//! let value = evaluate(&p, &assignment).and_then(|v| v.value());
//! assert_eq!(value, Some(rat(2)));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

/// Error types
pub mod error;

/// Signs, relations and three-valued truth
pub mod sign;

/// Rational helpers
pub mod rational;

/// Sparse multivariate and dense univariate polynomials
pub mod polynomial;

/// Intervals with open, closed and infinite bounds
pub mod interval;

/// Gröbner bases
pub mod grobner;

/// Floating-point root approximation
pub mod approximation;

/// Real algebraic numbers
pub mod ran;

/// Real root isolation
pub mod isolate;

/// Elimination of algebraic assignments
pub mod substitution;

/// Towers of algebraic extensions and Lazard evaluation
pub mod field_extension;

/// Evaluation at algebraic points
pub mod evaluation;

/// Fresh variables
pub mod vars;

/// Sign constraints
pub mod constraint;

// Re-export commonly used types
pub use constraint::Constraint;
pub use error::{RanError, RanResult};
pub use evaluation::{Assignment, Evaluator, EvaluatorConfig, IncrementalEvaluator};
pub use interval::{BoundType, Interval};
pub use isolate::{IsolationConfig, RootIsolator, RootsResult};
pub use polynomial::{Polynomial, UnivariatePolynomial, Var};
pub use ran::RealAlgebraicNumber;
pub use sign::{Relation, Sign, Tribool};
pub use substitution::{Backend, BuchbergerBackend, ResultantOnly, SubstitutionStrategy};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
