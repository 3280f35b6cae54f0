//! Coefficient rings for univariate polynomials.
//!
//! Univariate polynomials appear with two kinds of coefficients: plain
//! rationals (root isolation, Sturm sequences) and multivariate polynomials
//! (elimination of one variable at a time). Both share pseudo-division and
//! subresultants, which only need exact ring arithmetic.

use super::Polynomial;
use num_rational::BigRational;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// An integral domain usable as the coefficient type of a
/// [`UnivariatePolynomial`](super::UnivariatePolynomial).
pub trait Coefficient:
    Clone
    + PartialEq
    + fmt::Debug
    + fmt::Display
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// Quotient of an exact division; `divisor` must divide `self`.
    fn exact_quotient(&self, divisor: &Self) -> Self;

    /// Embed a rational constant.
    fn from_rational(q: BigRational) -> Self;

    /// The rational value, if this coefficient is a constant.
    fn as_rational(&self) -> Option<BigRational>;

    /// `self^k`.
    fn power(&self, k: u32) -> Self {
        let mut result = Self::one();
        for _ in 0..k {
            result = result * self.clone();
        }
        result
    }
}

impl Coefficient for BigRational {
    fn exact_quotient(&self, divisor: &Self) -> Self {
        self / divisor
    }

    fn from_rational(q: BigRational) -> Self {
        q
    }

    fn as_rational(&self) -> Option<BigRational> {
        Some(self.clone())
    }

    fn power(&self, k: u32) -> Self {
        self.pow(k as i32)
    }
}

impl Coefficient for Polynomial {
    fn exact_quotient(&self, divisor: &Self) -> Self {
        let (q, r) = self.div_rem(divisor);
        debug_assert!(r.is_zero(), "{} does not divide {}", divisor, self);
        q
    }

    fn from_rational(q: BigRational) -> Self {
        Polynomial::constant(q)
    }

    fn as_rational(&self) -> Option<BigRational> {
        self.is_number().then(|| self.constant_value())
    }

    fn power(&self, k: u32) -> Self {
        self.pow(k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    fn rat(n: i64) -> BigRational {
        BigRational::from_integer(BigInt::from(n))
    }

    #[test]
    fn test_rational_coefficient() {
        assert_eq!(rat(6).exact_quotient(&rat(4)), BigRational::new(3.into(), 2.into()));
        assert_eq!(rat(3).power(3), rat(27));
        assert_eq!(rat(3).as_rational(), Some(rat(3)));
    }

    #[test]
    fn test_polynomial_coefficient() {
        // (y^2 - 1) / (y + 1) = y - 1
        let p = Polynomial::from_coeffs_int(&[(1, &[(1, 2)]), (-1, &[])]);
        let d = Polynomial::from_coeffs_int(&[(1, &[(1, 1)]), (1, &[])]);
        let q = p.exact_quotient(&d);
        assert_eq!(q, Polynomial::from_coeffs_int(&[(1, &[(1, 1)]), (-1, &[])]));
        assert_eq!(Polynomial::from_rational(rat(4)).as_rational(), Some(rat(4)));
        assert_eq!(Polynomial::zero().as_rational(), Some(rat(0)));
        assert_eq!(d.as_rational(), None);
    }
}
