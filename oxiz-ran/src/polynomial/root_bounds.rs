//! Root bounds for univariate polynomials.
//!
//! All bounds are over-approximated by powers of two, which keeps the
//! rationals small and avoids exact k-th roots.
//!
//! ## Algorithms
//!
//! - **Fujiwara**: `|z| <= 2 max |a_i / a_n|^(1/(n-i))`
//! - **Kioustelidis**: positive roots `<= 2 max_{a_i < 0} |a_i / a_n|^(1/(n-i))`
//! - Lower bounds on positive roots via the reversed polynomial.
//!
//! ## References
//!
//! - Fujiwara, "Über die obere Schranke des absoluten Betrages der Wurzeln
//!   einer algebraischen Gleichung", 1916
//! - Kioustelidis, "Bounds for positive roots of polynomials", 1986

use super::UnivariatePolynomial;
use crate::rational::pow2;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

type UPoly = UnivariatePolynomial<BigRational>;

/// Smallest `e` with `(2^e)^k >= r`, for `r > 0` and `k >= 1`.
fn power_of_two_root(r: &BigRational, k: u32) -> i64 {
    debug_assert!(r.is_positive() && k > 0);
    let k = k as i64;
    // log2(r) > bits(numer) - bits(denom) - 1
    let estimate = r.numer().bits() as i64 - r.denom().bits() as i64 - 1;
    let mut e = estimate.div_euclid(k) - 1;
    while &pow2(e * k) < r {
        e += 1;
    }
    e
}

fn max_exponent<'a>(
    p: &'a UPoly,
    include: impl Fn(&BigRational) -> bool + 'a,
) -> Option<i64> {
    let n = p.degree();
    let lc = p.lcoeff();
    p.coeffs()[..n]
        .iter()
        .enumerate()
        .filter(|(_, c)| !c.is_zero() && include(c))
        .map(|(i, c)| power_of_two_root(&(c / &lc).abs(), (n - i) as u32))
        .max()
}

/// Bound `B` with `|z| < B` for every complex root `z` of a non-zero `p`.
pub fn lagrange_bound(p: &UPoly) -> BigRational {
    debug_assert!(!p.is_zero());
    match max_exponent(p, |_| true) {
        Some(e) => pow2(e + 1),
        None => pow2(0),
    }
}

/// Upper bound on the positive real roots of `p`; zero if `p` has none by
/// the sign pattern of its coefficients.
pub fn positive_upper_bound(p: &UPoly) -> BigRational {
    if p.is_constant() {
        return BigRational::zero();
    }
    let p = if p.lcoeff().is_negative() { p.neg() } else { p.clone() };
    match max_exponent(&p, |c| c.is_negative()) {
        Some(e) => pow2(e + 1),
        None => BigRational::zero(),
    }
}

/// Lower bound on the positive real roots of `p`; zero if there are none.
pub fn lagrange_positive_lower_bound(p: &UPoly) -> BigRational {
    let (q, _) = p.strip_zero_roots();
    let ub = positive_upper_bound(&q.reverse());
    if ub.is_zero() {
        ub
    } else {
        ub.recip()
    }
}

/// Upper bound on the negative real roots of `p`; zero if there are none.
pub fn lagrange_negative_upper_bound(p: &UPoly) -> BigRational {
    -lagrange_positive_lower_bound(&p.negate_variable())
}
