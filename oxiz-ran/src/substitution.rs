//! Algebraic substitution.
//!
//! Eliminates the variables of an algebraic assignment from a polynomial,
//! leaving a univariate polynomial in one free variable whose roots include
//! every value the polynomial can take at the assignment.
//!
//! ## Strategies
//!
//! - **Resultant** (always available): pseudo-remainder then resultant
//!   against each defining polynomial, lowest degree first
//! - **Gröbner**: a lex basis of the relations and the polynomial, keeping
//!   the element in the free variable only
//! - **Field extension**: Lazard-style reduction over the tower of
//!   extensions, followed by resultants against the remaining relations
//!
//! Strategies other than the resultant one need a [`Backend`]; when the
//! backend does not provide the operation they fall back to resultants.

use crate::error::{RanError, RanResult};
use crate::field_extension::LazardEvaluation;
use crate::grobner::{eliminate_all_but, Buchberger, BuchbergerConfig, BuchbergerStats};
use crate::polynomial::factorization::{
    Factor, FactorizationConfig, FactorizationStats, PolynomialFactorizer,
};
use crate::polynomial::{Polynomial, UnivariatePolynomial, Var};
use crate::ran::RealAlgebraicNumber;
use num_rational::BigRational;
use std::fmt;
use tracing::{debug, trace, warn};

type UPoly = UnivariatePolynomial<BigRational>;

/// A defining relation `rel(var) = 0` of an assigned variable.
pub type AlgebraicRelation = (Var, UnivariatePolynomial<Polynomial>);

/// Optional computer algebra services used by the non-resultant strategies.
pub trait Backend: fmt::Debug {
    /// Name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Generators of `<polys> ∩ Q[keep]`; `None` if unavailable.
    fn groebner_basis(&mut self, _polys: &[Polynomial], _keep: Var) -> Option<Vec<Polynomial>> {
        None
    }

    /// Factorization over the rationals; `None` if unavailable.
    fn factor(&mut self, _p: &UPoly) -> Option<Vec<Factor>> {
        None
    }
}

/// Backend without Gröbner bases or factorization.
#[derive(Debug, Default, Clone, Copy)]
pub struct ResultantOnly;

impl Backend for ResultantOnly {
    fn name(&self) -> &'static str {
        "resultant-only"
    }
}

/// Backend built on the crate's Buchberger engine and factorizer.
#[derive(Debug, Default)]
pub struct BuchbergerBackend {
    grobner: Buchberger,
    factorizer: PolynomialFactorizer,
}

impl BuchbergerBackend {
    /// Create a backend from engine configurations.
    pub fn new(grobner: BuchbergerConfig, factorization: FactorizationConfig) -> Self {
        Self {
            grobner: Buchberger::new(grobner),
            factorizer: PolynomialFactorizer::new(factorization),
        }
    }

    /// Gröbner engine statistics.
    pub fn grobner_stats(&self) -> &BuchbergerStats {
        self.grobner.stats()
    }

    /// Factorizer statistics.
    pub fn factorization_stats(&self) -> &FactorizationStats {
        self.factorizer.stats()
    }
}

impl Backend for BuchbergerBackend {
    fn name(&self) -> &'static str {
        "buchberger"
    }

    fn groebner_basis(&mut self, polys: &[Polynomial], keep: Var) -> Option<Vec<Polynomial>> {
        eliminate_all_but(&mut self.grobner, polys, keep)
    }

    fn factor(&mut self, p: &UPoly) -> Option<Vec<Factor>> {
        Some(self.factorizer.factor(p))
    }
}

/// Elimination strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubstitutionStrategy {
    /// Iterated resultants.
    #[default]
    Resultant,
    /// Lex Gröbner basis.
    Groebner,
    /// Lazard reduction over the extension tower.
    FieldExtension,
}

impl fmt::Display for SubstitutionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubstitutionStrategy::Resultant => write!(f, "resultant"),
            SubstitutionStrategy::Groebner => write!(f, "groebner"),
            SubstitutionStrategy::FieldExtension => write!(f, "field-extension"),
        }
    }
}

/// The relation `ran(var) = 0` as a polynomial in `var`.
pub fn relation_of(var: Var, ran: &RealAlgebraicNumber) -> AlgebraicRelation {
    (var, ran.defining_polynomial(var).to_univariate(var))
}

/// Eliminate the relation variables from `p` with resultants.
///
/// Relations are applied in order, first to last. Returns `None` unless the
/// result is univariate in `target`.
pub fn resultant_elimination(
    p: &Polynomial,
    target: Var,
    relations: &[AlgebraicRelation],
) -> Option<UPoly> {
    let mut cur = p.clone();
    for (var, rel) in relations {
        if !cur.has_var(*var) {
            continue;
        }
        let reduced = cur.to_univariate(*var).pseudo_remainder(rel);
        cur = reduced.resultant(rel);
        trace!(var, terms = cur.num_terms(), "eliminated by resultant");
    }
    let result = cur.to_univariate_rational(target);
    if result.is_none() {
        debug!(poly = %cur, target, "resultant elimination left other variables");
    }
    result
}

/// Eliminate the relation variables from `p` with a Gröbner basis.
pub fn groebner_elimination(
    p: &Polynomial,
    target: Var,
    relations: &[AlgebraicRelation],
    backend: &mut dyn Backend,
) -> RanResult<UPoly> {
    let mut system: Vec<Polynomial> = relations.iter().map(|(_, rel)| rel.to_polynomial()).collect();
    system.push(p.clone());
    let basis = backend
        .groebner_basis(&system, target)
        .ok_or(RanError::BackendUnavailable {
            backend: backend.name(),
            operation: "Gröbner bases",
        })?;
    basis
        .iter()
        .find_map(|g| g.to_univariate_rational(target))
        .ok_or(RanError::NonUnivariate(target))
}

/// Eliminate the non-numeric `assignment` from `p`, leaving a univariate
/// polynomial in `target`.
///
/// Operands are taken in increasing degree of their defining polynomials.
/// Strategies that the backend cannot serve fall back to resultants.
pub fn eliminate(
    p: &Polynomial,
    target: Var,
    assignment: &[(Var, RealAlgebraicNumber)],
    strategy: SubstitutionStrategy,
    backend: &mut dyn Backend,
) -> RanResult<UPoly> {
    let ordered = by_degree(assignment);
    let relations: Vec<AlgebraicRelation> =
        ordered.iter().map(|(v, r)| relation_of(*v, r)).collect();
    let attempt = match strategy {
        SubstitutionStrategy::Resultant => None,
        SubstitutionStrategy::Groebner => Some(groebner_elimination(p, target, &relations, backend)),
        SubstitutionStrategy::FieldExtension => Some(field_extension_elimination(p, target, &ordered, backend)),
    };
    match attempt {
        Some(Err(err @ RanError::BackendUnavailable { .. })) => {
            warn!(%strategy, %err, "falling back to resultant elimination");
        }
        Some(result) => return result,
        None => {}
    }
    resultant_elimination(p, target, &relations).ok_or(RanError::NonUnivariate(target))
}

/// The assignment stably sorted by the degree of the defining polynomials,
/// numbers first.
pub(crate) fn by_degree(assignment: &[(Var, RealAlgebraicNumber)]) -> Vec<(Var, RealAlgebraicNumber)> {
    let mut ordered = assignment.to_vec();
    ordered.sort_by_key(|(_, r)| r.polynomial().map_or(0, |q| q.degree()));
    ordered
}

fn field_extension_elimination(
    p: &Polynomial,
    target: Var,
    assignment: &[(Var, RealAlgebraicNumber)],
    backend: &mut dyn Backend,
) -> RanResult<UPoly> {
    let mut lazard = LazardEvaluation::new(p.clone());
    for (var, ran) in assignment {
        lazard.substitute(*var, ran, backend)?;
    }
    let relations = lazard.extensions().relations();
    resultant_elimination(lazard.lifting_polynomial(), target, &relations)
        .ok_or(RanError::NonUnivariate(target))
}
