//! Error types for the algebraic number kernel.
//!
//! Contract breaches inside the kernel are debug assertions; the variants here
//! cover validated construction and strategy selection, where a caller can
//! recover (for example by falling back to the resultant strategy).

use crate::polynomial::Var;
use thiserror::Error;

/// Errors reported by the algebraic number kernel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RanError {
    /// A non-zero polynomial was required.
    #[error("zero polynomial where a non-zero polynomial is required")]
    ZeroPolynomial,

    /// The interval is not a point and not a bounded open interval.
    #[error("invalid isolating interval: {0}")]
    InvalidInterval(String),

    /// The interval does not isolate exactly one root of the polynomial.
    #[error("interval {interval} contains {roots} roots of {polynomial}, expected exactly one")]
    NotIsolating {
        /// Polynomial being checked.
        polynomial: String,
        /// Offending interval.
        interval: String,
        /// Number of real roots found inside.
        roots: usize,
    },

    /// The configured backend cannot provide the requested operation.
    #[error("backend `{backend}` does not provide {operation}")]
    BackendUnavailable {
        /// Backend name.
        backend: &'static str,
        /// Missing operation.
        operation: &'static str,
    },

    /// Elimination did not leave a univariate polynomial.
    #[error("polynomial is not univariate in x{0} after elimination")]
    NonUnivariate(Var),

    /// A variable of the polynomial has no value in the assignment.
    #[error("variable x{0} is not assigned")]
    UnassignedVariable(Var),
}

/// Result type for kernel operations.
pub type RanResult<T> = Result<T, RanError>;
