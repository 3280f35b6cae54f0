//! Field-extension towers and Lazard evaluation.
//!
//! Substituting algebraic numbers one variable at a time, a polynomial is
//! kept reduced modulo the defining relations of the numbers assigned so
//! far. A number equal (up to sign) to an earlier one, or a root of a linear
//! factor of its defining polynomial, is substituted directly instead of
//! adding a new relation.
//!
//! Relations are irreducible over Q only up to the factorizer's guarantees,
//! not over the tower, so a reduced coefficient may still vanish at the
//! assignment. Such coefficients are detected with an exact sign evaluation
//! and dropped.
//!
//! ## References
//!
//! - Lazard, "An improved projection for cylindrical algebraic
//!   decomposition", 1994
//! - McCallum, Parusiński, Paunescu, "Validity proof of Lazard's method for
//!   CAD construction", 2019

use crate::error::{RanError, RanResult};
use crate::evaluation::sign_at;
use crate::polynomial::{Monomial, Polynomial, Term, UnivariatePolynomial, Var};
use crate::ran::RealAlgebraicNumber;
use crate::sign::Sign;
use crate::substitution::{AlgebraicRelation, Backend};
use num_rational::BigRational;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

type UPoly = UnivariatePolynomial<BigRational>;

/// How an assigned variable is removed from a polynomial.
#[derive(Debug, Clone, PartialEq)]
pub enum Extension {
    /// Replace the variable by a polynomial in earlier tower variables.
    Substitution(Polynomial),
    /// Reduce modulo this monic polynomial in the variable.
    Relation(UPoly),
}

#[derive(Debug, Clone)]
struct Entry {
    var: Var,
    value: RealAlgebraicNumber,
    extension: Extension,
}

/// A tower of algebraic extensions of the rationals.
#[derive(Debug, Clone, Default)]
pub struct FieldExtensions {
    entries: Vec<Entry>,
}

impl FieldExtensions {
    /// The empty tower.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of assigned variables.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is no variable assigned?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// How `var` is eliminated, if it is assigned.
    pub fn extension(&self, var: Var) -> Option<&Extension> {
        self.entries.iter().find(|e| e.var == var).map(|e| &e.extension)
    }

    /// Assign `ran` to `var`.
    ///
    /// The relation is the factor over Q of the defining polynomial that has
    /// `ran` as a root. It is not factored over the tower, so a number such as
    /// `sqrt(8)` over `Q(sqrt(2))` gets a quadratic relation rather than the
    /// substitution `2 sqrt(2)`.
    ///
    /// Fails with [`RanError::BackendUnavailable`] when a new relation would
    /// be needed and the backend cannot factor.
    pub fn extend(
        &mut self,
        var: Var,
        ran: &RealAlgebraicNumber,
        backend: &mut dyn Backend,
    ) -> RanResult<&Extension> {
        let extension = self.extension_for(ran, backend)?;
        debug!(var, ?extension, "extended tower");
        self.entries.push(Entry {
            var,
            value: ran.clone(),
            extension,
        });
        Ok(&self.entries[self.entries.len() - 1].extension)
    }

    fn extension_for(
        &self,
        ran: &RealAlgebraicNumber,
        backend: &mut dyn Backend,
    ) -> RanResult<Extension> {
        if let Some(q) = ran.value() {
            return Ok(Extension::Substitution(Polynomial::constant(q)));
        }
        for entry in &self.entries {
            if entry.value.is_numeric() {
                continue;
            }
            let term = match &entry.extension {
                Extension::Substitution(t) => t.clone(),
                Extension::Relation(_) => Polynomial::from_var(entry.var),
            };
            if entry.value == *ran {
                return Ok(Extension::Substitution(term));
            }
            if entry.value.sign() != ran.sign() && entry.value.abs() == ran.abs() {
                return Ok(Extension::Substitution(term.neg()));
            }
        }

        let Some(p) = ran.polynomial() else {
            return Err(RanError::ZeroPolynomial);
        };
        let factors = backend.factor(&p).ok_or(RanError::BackendUnavailable {
            backend: backend.name(),
            operation: "factorization",
        })?;
        let factor = factors
            .into_iter()
            .map(|f| f.poly)
            .find(|f| ran.is_root_of(f))
            .unwrap_or(p)
            .normalized();
        if factor.degree() == 1 {
            trace!(%factor, "linear factor over Q");
            return Ok(Extension::Substitution(Polynomial::constant(-factor.coeff(0))));
        }
        Ok(Extension::Relation(factor))
    }

    /// The relations of the tower, in assignment order.
    pub fn relations(&self) -> Vec<AlgebraicRelation> {
        self.entries
            .iter()
            .filter_map(|e| match &e.extension {
                Extension::Relation(f) => Some((e.var, f.replace_var(e.var).to_polynomial_coeffs())),
                Extension::Substitution(_) => None,
            })
            .collect()
    }

    /// Variables that carry a relation, with their values.
    pub fn tower_assignment(&self) -> Vec<(Var, RealAlgebraicNumber)> {
        self.entries
            .iter()
            .filter(|e| matches!(e.extension, Extension::Relation(_)))
            .map(|e| (e.var, e.value.clone()))
            .collect()
    }

    /// Eliminate every substituted variable from `p` and reduce it modulo
    /// the relations.
    pub fn reduce(&self, p: &Polynomial) -> Polynomial {
        // Substitution terms only mention earlier variables.
        self.entries
            .iter()
            .rev()
            .fold(p.clone(), |acc, e| apply(&acc, e.var, &e.extension))
    }
}

fn apply(p: &Polynomial, var: Var, extension: &Extension) -> Polynomial {
    match extension {
        Extension::Substitution(t) => p.substitute(var, t),
        Extension::Relation(f) => {
            if p.degree(var) < f.degree() as u32 {
                return p.clone();
            }
            // Monic divisor: the pseudo-remainder is the remainder.
            let divisor = f.replace_var(var).to_polynomial_coeffs();
            p.to_univariate(var).pseudo_remainder(&divisor).to_polynomial()
        }
    }
}

fn divisor_of(var: Var, extension: &Extension) -> Polynomial {
    match extension {
        Extension::Substitution(t) => Polynomial::from_var(var) - t.clone(),
        Extension::Relation(f) => f.replace_var(var).to_polynomial(),
    }
}

/// Evaluation of a polynomial at an algebraic point, one variable at a time,
/// over a growing extension tower.
#[derive(Debug, Clone)]
pub struct LazardEvaluation {
    lifting: Polynomial,
    extensions: FieldExtensions,
}

impl LazardEvaluation {
    /// Start from the polynomial `p`.
    pub fn new(p: Polynomial) -> Self {
        Self {
            lifting: p,
            extensions: FieldExtensions::new(),
        }
    }

    /// The current, reduced polynomial.
    pub fn lifting_polynomial(&self) -> &Polynomial {
        &self.lifting
    }

    /// The extension tower built so far.
    pub fn extensions(&self) -> &FieldExtensions {
        &self.extensions
    }

    /// Assign `ran` to `var` and reduce the lifting polynomial.
    ///
    /// When the reduced polynomial vanishes identically, the factor that
    /// made it vanish is divided out of the lifting polynomial first.
    /// Relations must be assigned in dependency order.
    pub fn substitute(
        &mut self,
        var: Var,
        ran: &RealAlgebraicNumber,
        backend: &mut dyn Backend,
    ) -> RanResult<()> {
        let extension = self.extensions.extend(var, ran, backend)?.clone();
        loop {
            let reduced = self.drop_vanishing_coefficients(apply(&self.lifting, var, &extension));
            if !reduced.is_zero() {
                self.lifting = reduced;
                return Ok(());
            }
            match self.lifting.exact_div(&divisor_of(var, &extension)) {
                Some(q) if !q.is_zero() => {
                    trace!(var, "lifting polynomial vanished, dividing out");
                    self.lifting = q;
                }
                _ => {
                    debug!(var, "lifting polynomial nullified");
                    self.lifting = reduced;
                    return Ok(());
                }
            }
        }
    }

    /// Remove the terms whose coefficient, a polynomial in the tower
    /// variables, is zero at the assignment.
    fn drop_vanishing_coefficients(&self, p: Polynomial) -> Polynomial {
        let tower = self.extensions.tower_assignment();
        if tower.is_empty() || p.is_zero() {
            return p;
        }
        let order = p.order();
        let mut groups: FxHashMap<Monomial, Vec<Term>> = FxHashMap::default();
        for term in p.terms() {
            let (inner, outer): (Vec<_>, Vec<_>) = term
                .monomial
                .vars()
                .iter()
                .map(|vp| (vp.var, vp.power))
                .partition(|(v, _)| tower.iter().any(|(t, _)| t == v));
            groups
                .entry(Monomial::from_powers(outer))
                .or_default()
                .push(Term::new(term.coeff.clone(), Monomial::from_powers(inner)));
        }
        let mut kept = Vec::new();
        for (outer, terms) in groups {
            let coeff = Polynomial::from_terms(terms.iter().cloned(), order);
            if !coeff.is_number() && sign_at(&coeff, &tower) == Some(Sign::Zero) {
                trace!(%coeff, "coefficient vanishes at the assignment");
                continue;
            }
            kept.extend(
                terms
                    .into_iter()
                    .map(|t| Term::new(t.coeff, t.monomial.mul(&outer))),
            );
        }
        Polynomial::from_terms(kept, order)
    }
}
