//! Polynomial Root Counting.
//!
//! Counting real roots of univariate polynomials in intervals, using Sturm
//! sequences (exact) and Descartes' rule of signs after a Möbius transform
//! (an upper bound that is exact when it is 0 or 1).
//!
//! ## Algorithms
//!
//! - **Sturm Sequence**: `V(a) - V(b)` distinct roots in `(a, b]`
//! - **Tarski Query**: generalized Sturm sequence of `p` and `p' * q` counts
//!   roots of `p` where `q > 0` minus roots where `q < 0`
//! - **Descartes' Rule**: sign variations of `(1 + x)^n p((a + b x)/(1 + x))`
//!
//! ## References
//!
//! - "Algorithms in Real Algebraic Geometry" (Basu, Pollack, Roy, 2006)
//! - Z3's `math/polynomial/upolynomial.cpp`

use super::UnivariatePolynomial;
use crate::interval::{BoundType, Interval};
use crate::sign::Sign;
use num_rational::BigRational;
use num_traits::{One, Zero};

type UPoly = UnivariatePolynomial<BigRational>;

/// Sturm sequence `p, p', -rem(p, p'), ...`.
pub fn sturm_sequence(p: &UPoly) -> Vec<UPoly> {
    generalized_sturm_sequence(p, &p.derivative())
}

/// Signed remainder sequence starting with `p, q`.
pub fn generalized_sturm_sequence(p: &UPoly, q: &UPoly) -> Vec<UPoly> {
    let mut seq = vec![p.clone()];
    if q.is_zero() {
        return seq;
    }
    seq.push(q.replace_var(p.var()));
    loop {
        let n = seq.len();
        let r = seq[n - 2].rem(&seq[n - 1]);
        if r.is_zero() {
            break;
        }
        seq.push(r.neg());
    }
    seq
}

/// Number of sign changes in a sequence, zeros skipped.
pub fn sign_variations(signs: impl IntoIterator<Item = Sign>) -> usize {
    let mut count = 0;
    let mut last = Sign::Zero;
    for s in signs {
        if s == Sign::Zero {
            continue;
        }
        if last != Sign::Zero && s != last {
            count += 1;
        }
        last = s;
    }
    count
}

/// Sign of `p(x)` as `x` tends to `+oo` (or `-oo`).
pub fn sign_at_infinity(p: &UPoly, positive: bool) -> Sign {
    let s = Sign::of(&p.lcoeff());
    if positive || p.degree() % 2 == 0 {
        s
    } else {
        s.negate()
    }
}

fn variations_at_lower(seq: &[UPoly], interval: &Interval) -> usize {
    match interval.lower_type() {
        BoundType::Infty => sign_variations(seq.iter().map(|p| sign_at_infinity(p, false))),
        _ => sign_variations(seq.iter().map(|p| p.sign_at(interval.lower()))),
    }
}

fn variations_at_upper(seq: &[UPoly], interval: &Interval) -> usize {
    match interval.upper_type() {
        BoundType::Infty => sign_variations(seq.iter().map(|p| sign_at_infinity(p, true))),
        _ => sign_variations(seq.iter().map(|p| p.sign_at(interval.upper()))),
    }
}

/// `V(lower) - V(upper)` for a (generalized) Sturm sequence.
///
/// For a Sturm sequence of a square-free `p` this is the number of real roots
/// of `p` in the interval; the endpoints must not be roots of `p`. For a
/// generalized sequence of `p` and `p' * q` it is the Tarski query of `q`.
pub fn count_real_roots(seq: &[UPoly], interval: &Interval) -> i64 {
    variations_at_lower(seq, interval) as i64 - variations_at_upper(seq, interval) as i64
}

/// Tarski query: number of roots of `p` in the interval where `q > 0` minus
/// those where `q < 0`.
pub fn tarski_query(p: &UPoly, q: &UPoly, interval: &Interval) -> i64 {
    let pq = p.derivative().mul(&q.replace_var(p.var()));
    count_real_roots(&generalized_sturm_sequence(p, &pq), interval)
}

/// Descartes bound on the number of roots of `p` in the open interval `(a, b)`.
///
/// Exact when the result is 0 or 1; otherwise an upper bound with the same
/// parity as the true count.
pub fn descartes_bound(p: &UPoly, a: &BigRational, b: &BigRational) -> usize {
    let var = p.var();
    let n = p.degree();
    let lower = UPoly::new(var, vec![a.clone(), b.clone()]);
    let one_plus_x = UPoly::new(var, vec![BigRational::one(), BigRational::one()]);

    let mut lower_pows = vec![UPoly::constant(var, BigRational::one())];
    let mut shift_pows = vec![UPoly::constant(var, BigRational::one())];
    for i in 1..=n {
        lower_pows.push(lower_pows[i - 1].mul(&lower));
        shift_pows.push(shift_pows[i - 1].mul(&one_plus_x));
    }

    let mut transformed = UPoly::zero(var);
    for (i, c) in p.coeffs().iter().enumerate() {
        if c.is_zero() {
            continue;
        }
        let term = lower_pows[i].mul(&shift_pows[n - i]).scale(c);
        transformed = transformed.add(&term);
    }
    sign_variations(transformed.coeffs().iter().map(Sign::of))
}
