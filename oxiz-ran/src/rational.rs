//! Helpers over exact rationals.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{FromPrimitive, One, Signed};

/// Build a rational from an integer.
#[inline]
pub fn rat(n: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

/// Build the rational `n / d`.
#[inline]
pub fn frac(n: i64, d: i64) -> BigRational {
    BigRational::new(BigInt::from(n), BigInt::from(d))
}

/// Largest integer `<= q`.
#[inline]
pub fn floor(q: &BigRational) -> BigRational {
    q.floor()
}

/// Smallest integer `>= q`.
#[inline]
pub fn ceil(q: &BigRational) -> BigRational {
    q.ceil()
}

/// `2^e` for a possibly negative exponent.
pub fn pow2(e: i64) -> BigRational {
    let magnitude = BigInt::one() << (e.unsigned_abs() as usize);
    if e >= 0 {
        BigRational::from_integer(magnitude)
    } else {
        BigRational::new(BigInt::one(), magnitude)
    }
}

/// Bit size of a rational: bits of the numerator plus bits of the denominator.
pub fn bit_size(q: &BigRational) -> u64 {
    q.numer().bits() + q.denom().bits()
}

/// Exact square root of `q`, if `q` is the square of a rational.
pub fn exact_sqrt(q: &BigRational) -> Option<BigRational> {
    if q.is_negative() {
        return None;
    }
    let n = q.numer().sqrt();
    let d = q.denom().sqrt();
    if &n * &n == *q.numer() && &d * &d == *q.denom() {
        Some(BigRational::new(n, d))
    } else {
        None
    }
}

/// Square root as a pair of bounds.
///
/// Returns `(s, s)` when `q` has an exact rational square root. Otherwise
/// returns `(lo, hi)` with `0 < lo < sqrt(q) < hi`. Requires `q >= 0`.
pub fn sqrt_pair(q: &BigRational) -> (BigRational, BigRational) {
    debug_assert!(!q.is_negative());
    if let Some(s) = exact_sqrt(q) {
        return (s.clone(), s);
    }
    // sqrt(n/d) = sqrt(n*d)/d
    let d = q.denom().clone();
    let m = q.numer() * &d;
    let s = m.sqrt();
    let lo = BigRational::new(s.clone(), d.clone());
    let hi = BigRational::new(s + BigInt::one(), d);
    (lo, hi)
}

/// Round a float to a multiple of `10^-digits` and convert it exactly.
///
/// Returns `None` for non-finite input.
pub fn from_f64_rounded(x: f64, digits: u32) -> Option<BigRational> {
    if !x.is_finite() {
        return None;
    }
    let scale = 10f64.powi(digits as i32);
    let scaled = (x * scale).round();
    let numer = BigInt::from_f64(scaled)?;
    Some(BigRational::new(numer, BigInt::from(10).pow(digits)))
}

/// Midpoint of two rationals.
#[inline]
pub fn midpoint(a: &BigRational, b: &BigRational) -> BigRational {
    (a + b) / rat(2)
}

/// Absolute value, returned as a fresh rational.
#[inline]
pub fn abs(q: &BigRational) -> BigRational {
    if q.is_negative() { -q } else { q.clone() }
}
