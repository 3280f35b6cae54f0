//! Dense univariate polynomials over a coefficient ring.
//!
//! `UnivariatePolynomial<BigRational>` is the workhorse of root isolation;
//! `UnivariatePolynomial<Polynomial>` is the recursive view used to eliminate
//! one variable at a time with pseudo-remainders and resultants.
//!
//! ## Algorithms
//!
//! - **Pseudo-division**: `lc(b)^(deg a - deg b + 1) * a = q * b + r`
//! - **Resultant**: subresultant polynomial remainder sequence, exact in any
//!   integral domain
//! - **Square-free part**: `p / gcd(p, p')`
//!
//! ## References
//!
//! - Cohen, "A Course in Computational Algebraic Number Theory", Alg. 3.3.7
//! - Z3's `math/polynomial/upolynomial.cpp`

use super::{Coefficient, Polynomial, Var};
use crate::sign::Sign;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A univariate polynomial `sum coeffs[i] * var^i`.
///
/// Coefficients are stored lowest degree first, with no trailing zeros; the
/// zero polynomial has no coefficients.
#[derive(Debug, Clone, PartialEq)]
pub struct UnivariatePolynomial<C> {
    var: Var,
    coeffs: Vec<C>,
}

impl<C: Coefficient> UnivariatePolynomial<C> {
    /// Create a polynomial from coefficients, lowest degree first.
    pub fn new(var: Var, coeffs: Vec<C>) -> Self {
        let mut poly = Self { var, coeffs };
        poly.trim();
        poly
    }

    /// The zero polynomial in `var`.
    pub fn zero(var: Var) -> Self {
        Self {
            var,
            coeffs: Vec::new(),
        }
    }

    /// A constant polynomial.
    pub fn constant(var: Var, c: C) -> Self {
        Self::new(var, vec![c])
    }

    /// The polynomial `c * var^k`.
    pub fn monomial(var: Var, c: C, k: usize) -> Self {
        let mut coeffs = vec![C::zero(); k];
        coeffs.push(c);
        Self::new(var, coeffs)
    }

    fn trim(&mut self) {
        while self.coeffs.last().is_some_and(|c| c.is_zero()) {
            self.coeffs.pop();
        }
    }

    /// The main variable.
    #[inline]
    pub fn var(&self) -> Var {
        self.var
    }

    /// Coefficients, lowest degree first.
    #[inline]
    pub fn coeffs(&self) -> &[C] {
        &self.coeffs
    }

    /// Check if this is the zero polynomial.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Check if the degree is zero (zero polynomial included).
    #[inline]
    pub fn is_constant(&self) -> bool {
        self.coeffs.len() <= 1
    }

    /// Degree in the main variable; 0 for the zero polynomial.
    #[inline]
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// Coefficient of `var^k`.
    pub fn coeff(&self, k: usize) -> C {
        self.coeffs.get(k).cloned().unwrap_or_else(C::zero)
    }

    /// Leading coefficient; zero for the zero polynomial.
    pub fn lcoeff(&self) -> C {
        self.coeffs.last().cloned().unwrap_or_else(C::zero)
    }

    /// Same coefficients in another main variable.
    pub fn replace_var(&self, var: Var) -> Self {
        Self {
            var,
            coeffs: self.coeffs.clone(),
        }
    }

    /// Multiply every coefficient by `c`.
    pub fn scale(&self, c: &C) -> Self {
        Self::new(
            self.var,
            self.coeffs.iter().map(|a| a.clone() * c.clone()).collect(),
        )
    }

    /// Divide every coefficient exactly by `c`.
    pub fn exact_div_coeffs(&self, c: &C) -> Self {
        Self::new(
            self.var,
            self.coeffs.iter().map(|a| a.exact_quotient(c)).collect(),
        )
    }

    /// Multiply by `var^k`.
    pub fn shift(&self, k: usize) -> Self {
        if self.is_zero() {
            return self.clone();
        }
        let mut coeffs = vec![C::zero(); k];
        coeffs.extend(self.coeffs.iter().cloned());
        Self {
            var: self.var,
            coeffs,
        }
    }

    fn zip_with(&self, other: &Self, f: impl Fn(C, C) -> C) -> Self {
        debug_assert!(self.is_constant() || other.is_constant() || self.var == other.var);
        let n = self.coeffs.len().max(other.coeffs.len());
        let coeffs = (0..n).map(|i| f(self.coeff(i), other.coeff(i))).collect();
        Self::new(self.var, coeffs)
    }

    /// Sum of two polynomials.
    pub fn add(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a + b)
    }

    /// Difference of two polynomials.
    pub fn sub(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a - b)
    }

    /// Product of two polynomials.
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero(self.var);
        }
        let mut coeffs = vec![C::zero(); self.coeffs.len() + other.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in other.coeffs.iter().enumerate() {
                let prod = a.clone() * b.clone();
                coeffs[i + j] = coeffs[i + j].clone() + prod;
            }
        }
        Self::new(self.var, coeffs)
    }

    /// Negation.
    pub fn neg(&self) -> Self {
        Self {
            var: self.var,
            coeffs: self.coeffs.iter().map(|c| -c.clone()).collect(),
        }
    }

    /// Derivative with respect to the main variable.
    pub fn derivative(&self) -> Self {
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, c)| c.clone() * C::from_rational(BigRational::from_integer(BigInt::from(i))))
            .collect();
        Self::new(self.var, coeffs)
    }

    /// Pseudo-remainder: `r` with `lc(d)^(deg self - deg d + 1) * self = q * d + r`
    /// and `deg r < deg d`. Returns `self` unchanged when `deg self < deg d`.
    pub fn pseudo_remainder(&self, divisor: &Self) -> Self {
        debug_assert!(!divisor.is_zero());
        if self.is_zero() || self.degree() < divisor.degree() {
            return self.clone();
        }
        let db = divisor.degree();
        let l = divisor.lcoeff();
        let mut e = self.degree() - db + 1;
        let mut r = self.clone();
        while !r.is_zero() && r.degree() >= db {
            let shift = r.degree() - db;
            let lr = r.lcoeff();
            r = r.scale(&l).sub(&divisor.scale(&lr).shift(shift));
            e -= 1;
        }
        r.scale(&l.power(e as u32))
    }

    /// Resultant with respect to the main variable.
    pub fn resultant(&self, other: &Self) -> C {
        debug_assert!(self.is_constant() || other.is_constant() || self.var == other.var);
        if self.is_zero() || other.is_zero() {
            return C::zero();
        }
        let (mut a, mut b) = (self.clone(), other.clone());
        let mut s = C::one();
        if a.degree() < b.degree() {
            std::mem::swap(&mut a, &mut b);
            if a.degree() % 2 == 1 && b.degree() % 2 == 1 {
                s = -s;
            }
        }
        if b.degree() == 0 {
            return s * b.lcoeff().power(a.degree() as u32);
        }

        let mut g = C::one();
        let mut h = C::one();
        loop {
            let delta = (a.degree() - b.degree()) as u32;
            if a.degree() % 2 == 1 && b.degree() % 2 == 1 {
                s = -s;
            }
            let r = a.pseudo_remainder(&b);
            a = b;
            if r.is_zero() {
                return C::zero();
            }
            b = r.exact_div_coeffs(&(g.clone() * h.power(delta)));
            g = a.lcoeff();
            if delta > 0 {
                h = g.power(delta).exact_quotient(&h.power(delta - 1));
            }
            if b.degree() == 0 {
                break;
            }
        }
        let l = a.degree() as u32;
        s * b.lcoeff().power(l).exact_quotient(&h.power(l - 1))
    }
}

impl UnivariatePolynomial<BigRational> {
    /// Create from integer coefficients, lowest degree first.
    pub fn from_coeffs_int(var: Var, coeffs: &[i64]) -> Self {
        Self::new(
            var,
            coeffs
                .iter()
                .map(|&c| BigRational::from_integer(BigInt::from(c)))
                .collect(),
        )
    }

    /// Evaluate at a rational point (Horner's method).
    pub fn eval(&self, x: &BigRational) -> BigRational {
        let mut result = BigRational::zero();
        for c in self.coeffs.iter().rev() {
            result = result * x + c;
        }
        result
    }

    /// Sign of the polynomial at a rational point.
    pub fn sign_at(&self, x: &BigRational) -> Sign {
        Sign::of(&self.eval(x))
    }

    /// Is `x` a root?
    pub fn is_root(&self, x: &BigRational) -> bool {
        self.eval(x).is_zero()
    }

    /// Euclidean division: `(q, r)` with `self = q * divisor + r`, `deg r < deg divisor`.
    pub fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        debug_assert!(!divisor.is_zero());
        if self.degree() < divisor.degree() || self.is_zero() {
            return (Self::zero(self.var), self.clone());
        }
        let db = divisor.degree();
        let lead = divisor.lcoeff();
        let mut rem = self.coeffs.clone();
        let mut quot = vec![BigRational::zero(); self.degree() - db + 1];
        for k in (0..quot.len()).rev() {
            let factor = &rem[k + db] / &lead;
            if factor.is_zero() {
                continue;
            }
            for (i, d) in divisor.coeffs.iter().enumerate() {
                rem[k + i] = &rem[k + i] - &factor * d;
            }
            quot[k] = factor;
        }
        rem.truncate(db);
        (Self::new(self.var, quot), Self::new(self.var, rem))
    }

    /// Remainder of Euclidean division.
    pub fn rem(&self, divisor: &Self) -> Self {
        self.div_rem(divisor).1
    }

    /// Monic normalization; the zero polynomial is returned unchanged.
    pub fn normalized(&self) -> Self {
        if self.is_zero() {
            return self.clone();
        }
        let lc = self.lcoeff();
        Self::new(self.var, self.coeffs.iter().map(|c| c / &lc).collect())
    }

    /// Monic greatest common divisor.
    pub fn gcd(&self, other: &Self) -> Self {
        let mut a = self.clone();
        let mut b = other.replace_var(self.var);
        while !b.is_zero() {
            let r = a.rem(&b);
            a = b;
            b = r;
        }
        a.normalized()
    }

    /// Monic square-free part `p / gcd(p, p')`.
    pub fn square_free_part(&self) -> Self {
        if self.is_constant() {
            return self.normalized();
        }
        let g = self.gcd(&self.derivative());
        self.div_rem(&g).0.normalized()
    }

    /// Is the polynomial square-free?
    pub fn is_square_free(&self) -> bool {
        self.is_constant() || self.gcd(&self.derivative()).is_constant()
    }

    /// Strip the factor `var^k` of maximal `k`; returns the cofactor and `k`.
    pub fn strip_zero_roots(&self) -> (Self, usize) {
        let k = self.coeffs.iter().take_while(|c| c.is_zero()).count();
        if self.is_zero() {
            return (self.clone(), 0);
        }
        (Self::new(self.var, self.coeffs[k..].to_vec()), k)
    }

    /// Exact division by `var - root`; `root` must be a root.
    pub fn divide_by_root(&self, root: &BigRational) -> Self {
        debug_assert!(self.is_root(root));
        let linear = Self::new(self.var, vec![-root.clone(), BigRational::one()]);
        self.div_rem(&linear).0
    }

    /// `p(-x)`.
    pub fn negate_variable(&self) -> Self {
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .map(|(i, c)| if i % 2 == 1 { -c.clone() } else { c.clone() })
            .collect();
        Self::new(self.var, coeffs)
    }

    /// `x^n * p(1/x)` where `n` is the degree.
    pub fn reverse(&self) -> Self {
        let mut coeffs = self.coeffs.clone();
        coeffs.reverse();
        Self::new(self.var, coeffs)
    }

    /// Largest absolute value among the coefficients.
    pub fn max_abs_coeff(&self) -> BigRational {
        self.coeffs
            .iter()
            .map(|c| c.abs())
            .max()
            .unwrap_or_else(BigRational::zero)
    }

    /// As a multivariate polynomial.
    pub fn to_polynomial(&self) -> Polynomial {
        Polynomial::univariate(self.var, &self.coeffs)
    }

    /// Same polynomial with constant polynomial coefficients.
    pub fn to_polynomial_coeffs(&self) -> UnivariatePolynomial<Polynomial> {
        UnivariatePolynomial::new(
            self.var,
            self.coeffs.iter().cloned().map(Polynomial::constant).collect(),
        )
    }
}

impl UnivariatePolynomial<Polynomial> {
    /// Flatten into a multivariate polynomial.
    pub fn to_polynomial(&self) -> Polynomial {
        let mut result = Polynomial::zero();
        for (k, c) in self.coeffs.iter().enumerate() {
            let term = c * &Polynomial::from_var_power(self.var, k as u32);
            result = &result + &term;
        }
        result
    }

    /// Re-express with `var` as the main variable.
    pub fn switch_main_var(&self, var: Var) -> Self {
        self.to_polynomial().to_univariate(var)
    }

    /// Does `var` occur (as main variable or inside a coefficient)?
    pub fn has_var(&self, var: Var) -> bool {
        (self.var == var && self.degree() > 0) || self.coeffs.iter().any(|c| c.has_var(var))
    }

    /// All variables that occur, main variable included.
    pub fn vars(&self) -> Vec<Var> {
        self.to_polynomial().vars()
    }

    /// Are all coefficients numbers?
    pub fn is_univariate(&self) -> bool {
        self.coeffs.iter().all(Polynomial::is_number)
    }

    /// Rational coefficients, if every coefficient is a number.
    pub fn to_rational_coeffs(&self) -> Option<UnivariatePolynomial<BigRational>> {
        let coeffs = self
            .coeffs
            .iter()
            .map(Coefficient::as_rational)
            .collect::<Option<Vec<_>>>()?;
        Some(UnivariatePolynomial::new(self.var, coeffs))
    }

    /// Substitute a rational for `var`, which may be the main variable.
    pub fn substitute(&self, var: Var, value: &BigRational) -> Self {
        if var == self.var {
            let p = self.to_polynomial().eval_at(var, value);
            return UnivariatePolynomial::constant(self.var, p);
        }
        Self::new(
            self.var,
            self.coeffs.iter().map(|c| c.eval_at(var, value)).collect(),
        )
    }
}

impl<C: Coefficient> Add for &UnivariatePolynomial<C> {
    type Output = UnivariatePolynomial<C>;

    fn add(self, rhs: Self) -> Self::Output {
        UnivariatePolynomial::add(self, rhs)
    }
}

impl<C: Coefficient> Sub for &UnivariatePolynomial<C> {
    type Output = UnivariatePolynomial<C>;

    fn sub(self, rhs: Self) -> Self::Output {
        UnivariatePolynomial::sub(self, rhs)
    }
}

impl<C: Coefficient> Mul for &UnivariatePolynomial<C> {
    type Output = UnivariatePolynomial<C>;

    fn mul(self, rhs: Self) -> Self::Output {
        UnivariatePolynomial::mul(self, rhs)
    }
}

impl<C: Coefficient> Neg for &UnivariatePolynomial<C> {
    type Output = UnivariatePolynomial<C>;

    fn neg(self) -> Self::Output {
        UnivariatePolynomial::neg(self)
    }
}

impl<C: Coefficient> fmt::Display for UnivariatePolynomial<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let mut first = true;
        for (k, c) in self.coeffs.iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }
            if !first {
                write!(f, " + ")?;
            }
            first = false;
            match k {
                0 => write!(f, "({})", c)?,
                1 => write!(f, "({})*x{}", c, self.var)?,
                _ => write!(f, "({})*x{}^{}", c, self.var, k)?,
            }
        }
        Ok(())
    }
}
