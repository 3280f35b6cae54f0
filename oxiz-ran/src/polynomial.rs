//! Polynomial arithmetic for the algebraic number kernel.
//!
//! This module provides the sparse multivariate representation used for
//! constraints and algebraic relations, together with the dense univariate
//! view (see [`univariate`]) used by resultants, Sturm sequences and root
//! isolation.
//!
//! Reference: Z3's `math/polynomial/` directory.

pub mod coefficient;
pub mod factorization;
pub mod root_bounds;
pub mod root_counting;
pub mod univariate;

pub use coefficient::Coefficient;
pub use univariate::UnivariatePolynomial;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Variable identifier for polynomials.
pub type Var = u32;

/// Null variable constant (indicates no variable).
pub const NULL_VAR: Var = u32::MAX;

/// Power of a variable (variable, exponent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VarPower {
    /// The variable identifier.
    pub var: Var,
    /// The exponent of the variable.
    pub power: u32,
}

impl VarPower {
    /// Create a new variable power.
    #[inline]
    pub fn new(var: Var, power: u32) -> Self {
        Self { var, power }
    }
}

/// A monomial is a product of variables with exponents.
/// Represented as a list of (variable, power) pairs sorted by variable.
/// The unit monomial (1) is the empty list.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Monomial {
    vars: SmallVec<[VarPower; 4]>,
}

impl Monomial {
    /// Create the unit monomial (1).
    #[inline]
    pub fn unit() -> Self {
        Self {
            vars: SmallVec::new(),
        }
    }

    /// Create the monomial `var`.
    #[inline]
    pub fn from_var(var: Var) -> Self {
        Self::from_var_power(var, 1)
    }

    /// Create the monomial `var^power`.
    pub fn from_var_power(var: Var, power: u32) -> Self {
        let mut vars = SmallVec::new();
        if power > 0 {
            vars.push(VarPower::new(var, power));
        }
        Self { vars }
    }

    /// Create a monomial from unsorted (variable, power) pairs.
    pub fn from_powers(powers: impl IntoIterator<Item = (Var, u32)>) -> Self {
        let mut vars: SmallVec<[VarPower; 4]> = SmallVec::new();
        for (var, power) in powers {
            if power == 0 {
                continue;
            }
            match vars.binary_search_by_key(&var, |vp| vp.var) {
                Ok(i) => vars[i].power += power,
                Err(i) => vars.insert(i, VarPower::new(var, power)),
            }
        }
        Self { vars }
    }

    /// Returns true if this is the unit monomial.
    #[inline]
    pub fn is_unit(&self) -> bool {
        self.vars.is_empty()
    }

    /// Returns the total degree.
    pub fn total_degree(&self) -> u32 {
        self.vars.iter().map(|vp| vp.power).sum()
    }

    /// Returns the variable-power pairs.
    #[inline]
    pub fn vars(&self) -> &[VarPower] {
        &self.vars
    }

    /// Degree of `var` in this monomial.
    pub fn degree(&self, var: Var) -> u32 {
        self.vars
            .binary_search_by_key(&var, |vp| vp.var)
            .map(|i| self.vars[i].power)
            .unwrap_or(0)
    }

    /// The largest variable, or `NULL_VAR` for the unit monomial.
    pub fn max_var(&self) -> Var {
        self.vars.last().map(|vp| vp.var).unwrap_or(NULL_VAR)
    }

    /// Multiply two monomials.
    pub fn mul(&self, other: &Monomial) -> Monomial {
        if self.is_unit() {
            return other.clone();
        }
        if other.is_unit() {
            return self.clone();
        }
        let mut vars: SmallVec<[VarPower; 4]> = SmallVec::new();
        let (mut i, mut j) = (0, 0);
        while i < self.vars.len() && j < other.vars.len() {
            let (a, b) = (self.vars[i], other.vars[j]);
            match a.var.cmp(&b.var) {
                Ordering::Less => {
                    vars.push(a);
                    i += 1;
                }
                Ordering::Greater => {
                    vars.push(b);
                    j += 1;
                }
                Ordering::Equal => {
                    vars.push(VarPower::new(a.var, a.power + b.power));
                    i += 1;
                    j += 1;
                }
            }
        }
        vars.extend_from_slice(&self.vars[i..]);
        vars.extend_from_slice(&other.vars[j..]);
        Monomial { vars }
    }

    /// Quotient `self / other`, if `other` divides `self`.
    pub fn div(&self, other: &Monomial) -> Option<Monomial> {
        let mut vars: SmallVec<[VarPower; 4]> = SmallVec::new();
        let mut j = 0;
        for vp in &self.vars {
            if j < other.vars.len() && other.vars[j].var < vp.var {
                return None;
            }
            if j < other.vars.len() && other.vars[j].var == vp.var {
                let d = other.vars[j].power;
                if vp.power < d {
                    return None;
                }
                if vp.power > d {
                    vars.push(VarPower::new(vp.var, vp.power - d));
                }
                j += 1;
            } else {
                vars.push(*vp);
            }
        }
        if j < other.vars.len() {
            return None;
        }
        Some(Monomial { vars })
    }

    /// Least common multiple of two monomials.
    pub fn lcm(&self, other: &Monomial) -> Monomial {
        let mut powers: Vec<(Var, u32)> = self.vars.iter().map(|vp| (vp.var, vp.power)).collect();
        for vp in &other.vars {
            match powers.iter_mut().find(|(v, _)| *v == vp.var) {
                Some(entry) => entry.1 = entry.1.max(vp.power),
                None => powers.push((vp.var, vp.power)),
            }
        }
        Monomial::from_powers(powers)
    }

    /// Is the gcd of the two monomials 1?
    pub fn is_coprime(&self, other: &Monomial) -> bool {
        self.vars
            .iter()
            .all(|vp| other.degree(vp.var) == 0)
    }

    /// Remove `var` from the monomial, returning the remaining part and the exponent.
    pub fn split_var(&self, var: Var) -> (Monomial, u32) {
        let mut rest = self.clone();
        match rest.vars.binary_search_by_key(&var, |vp| vp.var) {
            Ok(i) => {
                let vp = rest.vars.remove(i);
                (rest, vp.power)
            }
            Err(_) => (rest, 0),
        }
    }

    /// Lexicographic comparison; smaller variable indices are more significant.
    pub fn lex_cmp(&self, other: &Monomial) -> Ordering {
        for (a, b) in self.vars.iter().zip(other.vars.iter()) {
            match a.var.cmp(&b.var) {
                Ordering::Less => return Ordering::Greater,
                Ordering::Greater => return Ordering::Less,
                Ordering::Equal => match a.power.cmp(&b.power) {
                    Ordering::Equal => {}
                    ord => return ord,
                },
            }
        }
        self.vars.len().cmp(&other.vars.len())
    }

    /// Graded lexicographic comparison (total degree first, then lex).
    pub fn grlex_cmp(&self, other: &Monomial) -> Ordering {
        self.total_degree()
            .cmp(&other.total_degree())
            .then_with(|| self.lex_cmp(other))
    }

    /// Graded reverse lexicographic comparison.
    pub fn grevlex_cmp(&self, other: &Monomial) -> Ordering {
        self.total_degree()
            .cmp(&other.total_degree())
            .then_with(|| {
                for (a, b) in self.vars.iter().rev().zip(other.vars.iter().rev()) {
                    match a.var.cmp(&b.var) {
                        Ordering::Less => return Ordering::Greater,
                        Ordering::Greater => return Ordering::Less,
                        Ordering::Equal => match a.power.cmp(&b.power) {
                            Ordering::Equal => {}
                            ord => return ord.reverse(),
                        },
                    }
                }
                other.vars.len().cmp(&self.vars.len())
            })
    }
}

impl fmt::Debug for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unit() {
            return write!(f, "1");
        }
        for (i, vp) in self.vars.iter().enumerate() {
            if i > 0 {
                write!(f, "*")?;
            }
            if vp.power == 1 {
                write!(f, "x{}", vp.var)?;
            } else {
                write!(f, "x{}^{}", vp.var, vp.power)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A term is a coefficient multiplied by a monomial.
#[derive(Clone, PartialEq, Eq)]
pub struct Term {
    /// The coefficient of the term.
    pub coeff: BigRational,
    /// The monomial part of the term.
    pub monomial: Monomial,
}

impl Term {
    /// Create a new term.
    #[inline]
    pub fn new(coeff: BigRational, monomial: Monomial) -> Self {
        Self { coeff, monomial }
    }

    /// Create a constant term.
    #[inline]
    pub fn constant(c: BigRational) -> Self {
        Self::new(c, Monomial::unit())
    }

    /// Check if this term is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coeff.is_zero()
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.monomial.is_unit() {
            write!(f, "{}", self.coeff)
        } else if self.coeff.is_one() {
            write!(f, "{:?}", self.monomial)
        } else if self.coeff == -BigRational::one() {
            write!(f, "-{:?}", self.monomial)
        } else {
            write!(f, "{}*{:?}", self.coeff, self.monomial)
        }
    }
}

/// Monomial ordering for polynomial canonicalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonomialOrder {
    /// Lexicographic order.
    Lex,
    /// Graded lexicographic order.
    #[default]
    GrLex,
    /// Graded reverse lexicographic order.
    GRevLex,
}

impl MonomialOrder {
    /// Compare two monomials using this ordering.
    pub fn compare(&self, a: &Monomial, b: &Monomial) -> Ordering {
        match self {
            MonomialOrder::Lex => a.lex_cmp(b),
            MonomialOrder::GrLex => a.grlex_cmp(b),
            MonomialOrder::GRevLex => a.grevlex_cmp(b),
        }
    }
}

/// A multivariate polynomial over the rationals.
/// Represented as a sum of terms, sorted decreasingly by monomial order.
#[derive(Clone)]
pub struct Polynomial {
    terms: Vec<Term>,
    order: MonomialOrder,
}

impl Polynomial {
    /// Create the zero polynomial.
    #[inline]
    pub fn zero() -> Self {
        Self {
            terms: Vec::new(),
            order: MonomialOrder::default(),
        }
    }

    /// Create the one polynomial.
    #[inline]
    pub fn one() -> Self {
        Self::constant(BigRational::one())
    }

    /// Create a constant polynomial.
    pub fn constant(c: BigRational) -> Self {
        Self::from_terms([Term::constant(c)], MonomialOrder::default())
    }

    /// Create the polynomial `var`.
    pub fn from_var(var: Var) -> Self {
        Self::from_var_power(var, 1)
    }

    /// Create the polynomial `var^power`.
    pub fn from_var_power(var: Var, power: u32) -> Self {
        Self::from_terms(
            [Term::new(
                BigRational::one(),
                Monomial::from_var_power(var, power),
            )],
            MonomialOrder::default(),
        )
    }

    /// Create a polynomial from terms. Combines like terms and drops zeros.
    pub fn from_terms(terms: impl IntoIterator<Item = Term>, order: MonomialOrder) -> Self {
        let mut poly = Self {
            terms: terms.into_iter().filter(|t| !t.is_zero()).collect(),
            order,
        };
        poly.normalize();
        poly
    }

    /// Create a polynomial from integer coefficients and (variable, power) lists.
    pub fn from_coeffs_int(coeffs: &[(i64, &[(Var, u32)])]) -> Self {
        let terms = coeffs.iter().map(|(c, powers)| {
            Term::new(
                BigRational::from_integer(BigInt::from(*c)),
                Monomial::from_powers(powers.iter().copied()),
            )
        });
        Self::from_terms(terms, MonomialOrder::default())
    }

    /// Create a univariate polynomial; `coeffs[i]` is the coefficient of `var^i`.
    pub fn univariate(var: Var, coeffs: &[BigRational]) -> Self {
        let terms = coeffs
            .iter()
            .enumerate()
            .map(|(i, c)| Term::new(c.clone(), Monomial::from_var_power(var, i as u32)));
        Self::from_terms(terms, MonomialOrder::default())
    }

    /// Check if the polynomial is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Check if the polynomial is a non-zero constant.
    #[inline]
    pub fn is_constant(&self) -> bool {
        self.terms.len() == 1 && self.terms[0].monomial.is_unit()
    }

    /// Check if the polynomial is zero or a constant.
    #[inline]
    pub fn is_number(&self) -> bool {
        self.is_zero() || self.is_constant()
    }

    /// The constant value if the polynomial is a number, zero otherwise.
    pub fn constant_value(&self) -> BigRational {
        if self.is_constant() {
            self.terms[0].coeff.clone()
        } else {
            BigRational::zero()
        }
    }

    /// Check if the polynomial is one.
    pub fn is_one(&self) -> bool {
        self.is_constant() && self.terms[0].coeff.is_one()
    }

    /// Check if at most one variable occurs.
    pub fn is_univariate(&self) -> bool {
        self.vars().len() <= 1
    }

    /// Get the number of terms.
    #[inline]
    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    /// Get the terms, largest first.
    #[inline]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// The monomial order the terms are sorted by.
    #[inline]
    pub fn order(&self) -> MonomialOrder {
        self.order
    }

    /// Get the total degree of the polynomial.
    pub fn total_degree(&self) -> u32 {
        self.terms
            .iter()
            .map(|t| t.monomial.total_degree())
            .max()
            .unwrap_or(0)
    }

    /// Get the degree with respect to a variable.
    pub fn degree(&self, var: Var) -> u32 {
        self.terms
            .iter()
            .map(|t| t.monomial.degree(var))
            .max()
            .unwrap_or(0)
    }

    /// Get the maximum variable in the polynomial, or `NULL_VAR` if constant.
    pub fn max_var(&self) -> Var {
        self.terms
            .iter()
            .map(|t| t.monomial.max_var())
            .filter(|&v| v != NULL_VAR)
            .max()
            .unwrap_or(NULL_VAR)
    }

    /// Get all variables, sorted.
    pub fn vars(&self) -> Vec<Var> {
        let mut vars: Vec<Var> = self
            .terms
            .iter()
            .flat_map(|t| t.monomial.vars().iter().map(|vp| vp.var))
            .collect();
        vars.sort_unstable();
        vars.dedup();
        vars
    }

    /// Does `var` occur in the polynomial?
    pub fn has_var(&self, var: Var) -> bool {
        self.terms.iter().any(|t| t.monomial.degree(var) > 0)
    }

    /// Get the leading term (with respect to the monomial order).
    #[inline]
    pub fn leading_term(&self) -> Option<&Term> {
        self.terms.first()
    }

    /// Get the leading coefficient.
    pub fn leading_coeff(&self) -> BigRational {
        self.terms
            .first()
            .map(|t| t.coeff.clone())
            .unwrap_or_else(BigRational::zero)
    }

    /// Get the leading monomial.
    pub fn leading_monomial(&self) -> Option<&Monomial> {
        self.terms.first().map(|t| &t.monomial)
    }

    /// Coefficient polynomial of `var^k`.
    pub fn coeff(&self, var: Var, k: u32) -> Polynomial {
        let terms = self.terms.iter().filter_map(|t| {
            let (rest, d) = t.monomial.split_var(var);
            (d == k).then(|| Term::new(t.coeff.clone(), rest))
        });
        Polynomial::from_terms(terms, self.order)
    }

    /// Sort terms by the monomial order and combine like terms.
    fn normalize(&mut self) {
        let order = self.order;
        self.terms
            .sort_by(|a, b| order.compare(&b.monomial, &a.monomial));
        let mut merged: Vec<Term> = Vec::with_capacity(self.terms.len());
        for term in self.terms.drain(..) {
            match merged.last_mut() {
                Some(last) if last.monomial == term.monomial => last.coeff += term.coeff,
                _ => merged.push(term),
            }
        }
        merged.retain(|t| !t.coeff.is_zero());
        self.terms = merged;
    }

    /// The same polynomial sorted under another monomial order.
    pub fn reorder(&self, order: MonomialOrder) -> Polynomial {
        if order == self.order {
            return self.clone();
        }
        Polynomial::from_terms(self.terms.iter().cloned(), order)
    }

    /// Negate the polynomial.
    pub fn neg(&self) -> Polynomial {
        Polynomial {
            terms: self
                .terms
                .iter()
                .map(|t| Term::new(-t.coeff.clone(), t.monomial.clone()))
                .collect(),
            order: self.order,
        }
    }

    /// Add two polynomials.
    pub fn add(&self, other: &Polynomial) -> Polynomial {
        let mut terms = self.terms.clone();
        terms.extend(other.terms.iter().cloned());
        Polynomial::from_terms(terms, self.order)
    }

    /// Subtract two polynomials.
    pub fn sub(&self, other: &Polynomial) -> Polynomial {
        self.add(&other.neg())
    }

    /// Multiply by a scalar.
    pub fn scale(&self, c: &BigRational) -> Polynomial {
        if c.is_zero() {
            return Polynomial {
                terms: Vec::new(),
                order: self.order,
            };
        }
        Polynomial {
            terms: self
                .terms
                .iter()
                .map(|t| Term::new(&t.coeff * c, t.monomial.clone()))
                .collect(),
            order: self.order,
        }
    }

    /// Multiply two polynomials.
    pub fn mul(&self, other: &Polynomial) -> Polynomial {
        if self.is_zero() || other.is_zero() {
            return Polynomial::zero();
        }
        let mut terms = Vec::with_capacity(self.terms.len() * other.terms.len());
        for t1 in &self.terms {
            for t2 in &other.terms {
                terms.push(Term::new(
                    &t1.coeff * &t2.coeff,
                    t1.monomial.mul(&t2.monomial),
                ));
            }
        }
        Polynomial::from_terms(terms, self.order)
    }

    /// Multiply by a single term.
    pub fn mul_term(&self, coeff: &BigRational, m: &Monomial) -> Polynomial {
        Polynomial::from_terms(
            self.terms
                .iter()
                .map(|t| Term::new(&t.coeff * coeff, t.monomial.mul(m))),
            self.order,
        )
    }

    /// Compute `p^k` by repeated squaring.
    pub fn pow(&self, k: u32) -> Polynomial {
        let mut result = Polynomial::one();
        let mut base = self.clone();
        let mut exp = k;
        while exp > 0 {
            if exp & 1 == 1 {
                result = Polynomial::mul(&result, &base);
            }
            exp >>= 1;
            if exp > 0 {
                base = Polynomial::mul(&base, &base);
            }
        }
        result
    }

    /// Partial derivative with respect to `var`.
    pub fn derivative(&self, var: Var) -> Polynomial {
        let terms = self.terms.iter().filter_map(|t| {
            let (rest, d) = t.monomial.split_var(var);
            (d > 0).then(|| {
                Term::new(
                    &t.coeff * BigRational::from_integer(BigInt::from(d)),
                    rest.mul(&Monomial::from_var_power(var, d - 1)),
                )
            })
        });
        Polynomial::from_terms(terms, self.order)
    }

    /// Substitute a rational value for `var`.
    pub fn eval_at(&self, var: Var, value: &BigRational) -> Polynomial {
        let terms = self.terms.iter().map(|t| {
            let (rest, d) = t.monomial.split_var(var);
            if d == 0 {
                t.clone()
            } else {
                Term::new(&t.coeff * value.pow(d as i32), rest)
            }
        });
        Polynomial::from_terms(terms, self.order)
    }

    /// Evaluate completely; `None` if some variable has no value.
    pub fn eval(&self, assignment: &FxHashMap<Var, BigRational>) -> Option<BigRational> {
        let mut result = BigRational::zero();
        for term in &self.terms {
            let mut val = term.coeff.clone();
            for vp in term.monomial.vars() {
                val *= assignment.get(&vp.var)?.pow(vp.power as i32);
            }
            result += val;
        }
        Some(result)
    }

    /// Substitute a polynomial for a variable.
    pub fn substitute(&self, var: Var, replacement: &Polynomial) -> Polynomial {
        let mut result = Polynomial {
            terms: Vec::new(),
            order: self.order,
        };
        for term in &self.terms {
            let (rest, d) = term.monomial.split_var(var);
            let part = Polynomial::from_terms([Term::new(term.coeff.clone(), rest)], self.order);
            let part = if d == 0 {
                part
            } else {
                Polynomial::mul(&part, &replacement.pow(d))
            };
            result = Polynomial::add(&result, &part);
        }
        result
    }

    /// Rename variable `from` to `to`.
    pub fn rename_var(&self, from: Var, to: Var) -> Polynomial {
        let terms = self.terms.iter().map(|t| {
            let (rest, d) = t.monomial.split_var(from);
            Term::new(t.coeff.clone(), rest.mul(&Monomial::from_var_power(to, d)))
        });
        Polynomial::from_terms(terms, self.order)
    }

    /// Multivariate division by leading terms: returns `(q, r)` with
    /// `self = q * divisor + r` and no term of `r` divisible by the leading
    /// monomial of `divisor`.
    pub fn div_rem(&self, divisor: &Polynomial) -> (Polynomial, Polynomial) {
        let divisor = divisor.reorder(self.order);
        let mut quotient = Polynomial {
            terms: Vec::new(),
            order: self.order,
        };
        let mut remainder: Vec<Term> = Vec::new();
        let Some(lead) = divisor.leading_term().cloned() else {
            return (quotient, self.clone());
        };
        let mut p = self.clone();
        while let Some(t) = p.leading_term().cloned() {
            match t.monomial.div(&lead.monomial) {
                Some(m) => {
                    let c = &t.coeff / &lead.coeff;
                    p = Polynomial::sub(&p, &divisor.mul_term(&c, &m));
                    quotient = Polynomial::add(&quotient, &Polynomial::from_terms([Term::new(c, m)], self.order));
                }
                None => {
                    remainder.push(t);
                    p.terms.remove(0);
                }
            }
        }
        (quotient, Polynomial::from_terms(remainder, self.order))
    }

    /// Exact quotient `self / divisor`, or `None` if the division leaves a remainder.
    pub fn exact_div(&self, divisor: &Polynomial) -> Option<Polynomial> {
        if divisor.is_zero() {
            return None;
        }
        let (q, r) = self.div_rem(divisor);
        r.is_zero().then_some(q)
    }

    /// View as a univariate polynomial in `var` with polynomial coefficients.
    pub fn to_univariate(&self, var: Var) -> UnivariatePolynomial<Polynomial> {
        let coeffs = (0..=self.degree(var)).map(|k| self.coeff(var, k)).collect();
        UnivariatePolynomial::new(var, coeffs)
    }

    /// View as a univariate polynomial with rational coefficients, if only
    /// `var` occurs.
    pub fn to_univariate_rational(&self, var: Var) -> Option<UnivariatePolynomial<BigRational>> {
        if self.vars().iter().any(|&v| v != var) {
            return None;
        }
        let coeffs = (0..=self.degree(var))
            .map(|k| self.coeff(var, k).constant_value())
            .collect();
        Some(UnivariatePolynomial::new(var, coeffs))
    }
}

impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        if self.order == other.order {
            self.terms == other.terms
        } else {
            self.terms == other.reorder(self.order).terms
        }
    }
}

impl Eq for Polynomial {}

impl Default for Polynomial {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<BigRational> for Polynomial {
    fn from(c: BigRational) -> Self {
        Polynomial::constant(c)
    }
}

impl fmt::Debug for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        for (i, term) in self.terms.iter().enumerate() {
            if i == 0 {
                write!(f, "{:?}", term)?;
            } else if term.coeff.is_negative() {
                write!(
                    f,
                    " - {:?}",
                    Term::new(-term.coeff.clone(), term.monomial.clone())
                )?;
            } else {
                write!(f, " + {:?}", term)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Self::Output {
        Polynomial::neg(&self)
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Self::Output {
        Polynomial::neg(self)
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Self) -> Self::Output {
        Polynomial::add(&self, &rhs)
    }
}

impl Add<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Self::Output {
        Polynomial::add(self, rhs)
    }
}

impl Sub for Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Self) -> Self::Output {
        Polynomial::sub(&self, &rhs)
    }
}

impl Sub<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &Polynomial) -> Self::Output {
        Polynomial::sub(self, rhs)
    }
}

impl Mul for Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Self) -> Self::Output {
        Polynomial::mul(&self, &rhs)
    }
}

impl Mul<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &Polynomial) -> Self::Output {
        Polynomial::mul(self, rhs)
    }
}

impl Zero for Polynomial {
    fn zero() -> Self {
        Polynomial::zero()
    }

    fn is_zero(&self) -> bool {
        Polynomial::is_zero(self)
    }
}

impl One for Polynomial {
    fn one() -> Self {
        Polynomial::one()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rat(n: i64) -> BigRational {
        BigRational::from_integer(BigInt::from(n))
    }

    #[test]
    fn test_monomial_mul_div() {
        let m1 = Monomial::from_powers([(0, 2), (1, 1)]);
        let m2 = Monomial::from_powers([(1, 2), (2, 1)]);
        let m3 = m1.mul(&m2);
        assert_eq!(m3.degree(0), 2);
        assert_eq!(m3.degree(1), 3);
        assert_eq!(m3.degree(2), 1);
        assert_eq!(m3.div(&m2), Some(m1.clone()));
        assert!(m1.div(&m2).is_none());
    }

    #[test]
    fn test_monomial_lex() {
        // x0 > x1^5 in lex with x0 most significant
        let a = Monomial::from_var(0);
        let b = Monomial::from_var_power(1, 5);
        assert_eq!(a.lex_cmp(&b), Ordering::Greater);
        assert_eq!(a.grlex_cmp(&b), Ordering::Less);
        assert_eq!(Monomial::unit().lex_cmp(&b), Ordering::Less);
    }

    #[test]
    fn test_monomial_lcm() {
        let a = Monomial::from_powers([(0, 2), (1, 1)]);
        let b = Monomial::from_powers([(0, 1), (2, 3)]);
        let l = a.lcm(&b);
        assert_eq!(l.degree(0), 2);
        assert_eq!(l.degree(1), 1);
        assert_eq!(l.degree(2), 3);
        assert!(!a.is_coprime(&b));
        assert!(Monomial::from_var(1).is_coprime(&Monomial::from_var(2)));
    }

    #[test]
    fn test_polynomial_arith() {
        // (x + 1)(x - 1) = x^2 - 1
        let p = Polynomial::from_coeffs_int(&[(1, &[(0, 1)]), (1, &[])]);
        let q = Polynomial::from_coeffs_int(&[(1, &[(0, 1)]), (-1, &[])]);
        let r = &p * &q;
        assert_eq!(r, Polynomial::from_coeffs_int(&[(1, &[(0, 2)]), (-1, &[])]));
        assert!((&p - &p).is_zero());
        assert_eq!(p.pow(2).num_terms(), 3);
    }

    #[test]
    fn test_polynomial_eval_at_and_substitute() {
        // p = x*y + y^2
        let p = Polynomial::from_coeffs_int(&[(1, &[(0, 1), (1, 1)]), (1, &[(1, 2)])]);
        let at = p.eval_at(0, &rat(2));
        assert_eq!(at, Polynomial::from_coeffs_int(&[(2, &[(1, 1)]), (1, &[(1, 2)])]));
        // substitute y := x
        let s = p.substitute(1, &Polynomial::from_var(0));
        assert_eq!(s, Polynomial::from_coeffs_int(&[(2, &[(0, 2)])]));
    }

    #[test]
    fn test_polynomial_derivative() {
        // d/dx (x^3 y + 2x) = 3x^2 y + 2
        let p = Polynomial::from_coeffs_int(&[(1, &[(0, 3), (1, 1)]), (2, &[(0, 1)])]);
        let d = p.derivative(0);
        assert_eq!(d, Polynomial::from_coeffs_int(&[(3, &[(0, 2), (1, 1)]), (2, &[])]));
    }

    #[test]
    fn test_polynomial_exact_div() {
        // (x^2 - y^2) / (x - y) = x + y
        let p = Polynomial::from_coeffs_int(&[(1, &[(0, 2)]), (-1, &[(1, 2)])]);
        let d = Polynomial::from_coeffs_int(&[(1, &[(0, 1)]), (-1, &[(1, 1)])]);
        let q = p.exact_div(&d);
        assert_eq!(q, Some(Polynomial::from_coeffs_int(&[(1, &[(0, 1)]), (1, &[(1, 1)])])));
        let not_divisible = Polynomial::from_coeffs_int(&[(1, &[(0, 2)]), (1, &[])]);
        assert!(not_divisible.exact_div(&d).is_none());
    }

    #[test]
    fn test_polynomial_eval() {
        let p = Polynomial::from_coeffs_int(&[(1, &[(0, 2)]), (3, &[(1, 1)])]);
        let mut assignment = FxHashMap::default();
        assignment.insert(0, rat(2));
        assert_eq!(p.eval(&assignment), None);
        assignment.insert(1, rat(-1));
        assert_eq!(p.eval(&assignment), Some(rat(1)));
    }

    #[test]
    fn test_polynomial_reorder_equality() {
        let p = Polynomial::from_coeffs_int(&[(1, &[(0, 1)]), (1, &[(1, 3)])]);
        let lex = p.reorder(MonomialOrder::Lex);
        assert_eq!(p, lex);
        assert_eq!(lex.leading_monomial(), Some(&Monomial::from_var(0)));
        assert_eq!(p.leading_monomial(), Some(&Monomial::from_var_power(1, 3)));
    }

    #[test]
    fn test_polynomial_rename_and_univariate_view() {
        let p = Polynomial::from_coeffs_int(&[(1, &[(0, 2), (1, 1)]), (-2, &[])]);
        let r = p.rename_var(0, 5);
        assert!(r.has_var(5));
        assert!(!r.has_var(0));
        let u = p.to_univariate(0);
        assert_eq!(u.degree(), 2);
        assert_eq!(u.coeffs()[2], Polynomial::from_var(1));
        assert_eq!(u.coeffs()[0], Polynomial::constant(rat(-2)));
        assert!(p.to_univariate_rational(0).is_none());
    }
}
