//! Rational intervals with open, closed and unbounded endpoints.
//!
//! Besides the set operations needed for isolation (`contains`, `intersect`,
//! `sample`), this module provides conservative interval arithmetic: every
//! result interval contains all values of the operation over its operands,
//! and an endpoint is only marked strict when it is certainly not attained.
//!
//! ## References
//!
//! - Moore, Kearfott, Cloud, "Introduction to Interval Analysis", 2009

use crate::polynomial::{Polynomial, Var};
use crate::rational;
use crate::sign::{Relation, Sign, Tribool};
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::fmt;

/// Kind of an interval endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundType {
    /// Open endpoint: the bound value is excluded.
    Strict,
    /// Closed endpoint: the bound value is included.
    Weak,
    /// No bound in this direction.
    Infty,
}

impl BoundType {
    fn weaker(self, other: BoundType) -> BoundType {
        match (self, other) {
            (BoundType::Infty, _) | (_, BoundType::Infty) => BoundType::Infty,
            (BoundType::Weak, _) | (_, BoundType::Weak) => BoundType::Weak,
            _ => BoundType::Strict,
        }
    }

    /// Kind of an endpoint combined from two endpoints, as in a sum or an
    /// intersection at equal values: unbounded wins, then strict.
    fn stricter(self, other: BoundType) -> BoundType {
        match (self, other) {
            (BoundType::Infty, _) | (_, BoundType::Infty) => BoundType::Infty,
            (BoundType::Strict, _) | (_, BoundType::Strict) => BoundType::Strict,
            _ => BoundType::Weak,
        }
    }
}

/// An interval of rationals.
///
/// The value stored for an `Infty` endpoint is meaningless and kept at zero.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Interval {
    lower: BigRational,
    lower_type: BoundType,
    upper: BigRational,
    upper_type: BoundType,
}

impl Interval {
    /// Create an interval from its endpoints.
    pub fn new(
        lower: BigRational,
        lower_type: BoundType,
        upper: BigRational,
        upper_type: BoundType,
    ) -> Self {
        let lower = if lower_type == BoundType::Infty {
            BigRational::zero()
        } else {
            lower
        };
        let upper = if upper_type == BoundType::Infty {
            BigRational::zero()
        } else {
            upper
        };
        Self {
            lower,
            lower_type,
            upper,
            upper_type,
        }
    }

    /// The point interval `[q, q]`.
    pub fn point(q: BigRational) -> Self {
        Self::new(q.clone(), BoundType::Weak, q, BoundType::Weak)
    }

    /// The open interval `(a, b)`.
    pub fn open(a: BigRational, b: BigRational) -> Self {
        Self::new(a, BoundType::Strict, b, BoundType::Strict)
    }

    /// The closed interval `[a, b]`.
    pub fn closed(a: BigRational, b: BigRational) -> Self {
        Self::new(a, BoundType::Weak, b, BoundType::Weak)
    }

    /// The whole real line.
    pub fn unbounded() -> Self {
        Self::new(
            BigRational::zero(),
            BoundType::Infty,
            BigRational::zero(),
            BoundType::Infty,
        )
    }

    /// Lower bound value (zero when unbounded below).
    #[inline]
    pub fn lower(&self) -> &BigRational {
        &self.lower
    }

    /// Upper bound value (zero when unbounded above).
    #[inline]
    pub fn upper(&self) -> &BigRational {
        &self.upper
    }

    /// Lower bound kind.
    #[inline]
    pub fn lower_type(&self) -> BoundType {
        self.lower_type
    }

    /// Upper bound kind.
    #[inline]
    pub fn upper_type(&self) -> BoundType {
        self.upper_type
    }

    /// Lower bound, `None` when unbounded below.
    pub fn lower_bound(&self) -> Option<&BigRational> {
        (self.lower_type != BoundType::Infty).then_some(&self.lower)
    }

    /// Upper bound, `None` when unbounded above.
    pub fn upper_bound(&self) -> Option<&BigRational> {
        (self.upper_type != BoundType::Infty).then_some(&self.upper)
    }

    /// Are both endpoints finite?
    pub fn is_bounded(&self) -> bool {
        self.lower_type != BoundType::Infty && self.upper_type != BoundType::Infty
    }

    /// Is this a single point?
    pub fn is_point(&self) -> bool {
        self.lower_type == BoundType::Weak
            && self.upper_type == BoundType::Weak
            && self.lower == self.upper
    }

    /// Are both endpoints strict?
    pub fn is_open(&self) -> bool {
        self.lower_type == BoundType::Strict && self.upper_type == BoundType::Strict
    }

    /// Does the interval contain no value?
    pub fn is_empty(&self) -> bool {
        if !self.is_bounded() {
            return false;
        }
        match self.lower.cmp(&self.upper) {
            Ordering::Greater => true,
            Ordering::Equal => !self.is_point(),
            Ordering::Less => false,
        }
    }

    /// Width of a bounded interval.
    pub fn diameter(&self) -> Option<BigRational> {
        self.is_bounded().then(|| &self.upper - &self.lower)
    }

    /// Is `q` inside the interval?
    pub fn contains(&self, q: &BigRational) -> bool {
        let above = match self.lower_type {
            BoundType::Infty => true,
            BoundType::Strict => q > &self.lower,
            BoundType::Weak => q >= &self.lower,
        };
        let below = match self.upper_type {
            BoundType::Infty => true,
            BoundType::Strict => q < &self.upper,
            BoundType::Weak => q <= &self.upper,
        };
        above && below
    }

    /// Is `q` strictly between the endpoints?
    pub fn contains_strictly(&self, q: &BigRational) -> bool {
        (self.lower_type == BoundType::Infty || q > &self.lower)
            && (self.upper_type == BoundType::Infty || q < &self.upper)
    }

    /// Does the interval contain an integer?
    pub fn contains_integer(&self) -> bool {
        if self.is_empty() {
            return false;
        }
        match self.lower_type {
            BoundType::Infty => true,
            _ => {
                let mut candidate = rational::ceil(&self.lower);
                if self.lower_type == BoundType::Strict && candidate == self.lower {
                    candidate += BigRational::one();
                }
                self.contains(&candidate)
            }
        }
    }

    /// Intersection of two intervals (possibly empty).
    pub fn intersect(&self, other: &Interval) -> Interval {
        let (lower, lower_type) = match (self.lower_type, other.lower_type) {
            (BoundType::Infty, _) => (other.lower.clone(), other.lower_type),
            (_, BoundType::Infty) => (self.lower.clone(), self.lower_type),
            _ => match self.lower.cmp(&other.lower) {
                Ordering::Greater => (self.lower.clone(), self.lower_type),
                Ordering::Less => (other.lower.clone(), other.lower_type),
                Ordering::Equal => (
                    self.lower.clone(),
                    self.lower_type.stricter(other.lower_type),
                ),
            },
        };
        let (upper, upper_type) = match (self.upper_type, other.upper_type) {
            (BoundType::Infty, _) => (other.upper.clone(), other.upper_type),
            (_, BoundType::Infty) => (self.upper.clone(), self.upper_type),
            _ => match self.upper.cmp(&other.upper) {
                Ordering::Less => (self.upper.clone(), self.upper_type),
                Ordering::Greater => (other.upper.clone(), other.upper_type),
                Ordering::Equal => (
                    self.upper.clone(),
                    self.upper_type.stricter(other.upper_type),
                ),
            },
        };
        Interval::new(lower, lower_type, upper, upper_type)
    }

    /// Do the two intervals share a value?
    pub fn intersects(&self, other: &Interval) -> bool {
        !self.intersect(other).is_empty()
    }

    /// Is `other` a subset of `self`?
    pub fn contains_interval(&self, other: &Interval) -> bool {
        if other.is_empty() {
            return true;
        }
        let lower_ok = match (self.lower_type, other.lower_type) {
            (BoundType::Infty, _) => true,
            (_, BoundType::Infty) => false,
            (BoundType::Strict, BoundType::Weak) => self.lower < other.lower,
            _ => self.lower <= other.lower,
        };
        let upper_ok = match (self.upper_type, other.upper_type) {
            (BoundType::Infty, _) => true,
            (_, BoundType::Infty) => false,
            (BoundType::Strict, BoundType::Weak) => self.upper > other.upper,
            _ => self.upper >= other.upper,
        };
        lower_ok && upper_ok
    }

    /// Does `x ~ 0` hold for every, some or no `x` in the interval?
    pub fn evaluate_relation(&self, relation: Relation) -> Tribool {
        let possible = [
            (
                Sign::Negative,
                self.lower_type == BoundType::Infty || self.lower.is_negative(),
            ),
            (Sign::Zero, self.contains(&BigRational::zero())),
            (
                Sign::Positive,
                self.upper_type == BoundType::Infty || self.upper.is_positive(),
            ),
        ];
        let mut holds = possible
            .iter()
            .filter(|(_, p)| *p)
            .map(|(s, _)| relation.evaluate(*s));
        let Some(first) = holds.next() else {
            return Tribool::Unknown;
        };
        if holds.all(|h| h == first) {
            Tribool::from(first)
        } else {
            Tribool::Unknown
        }
    }

    /// A center point; for half-bounded intervals the integer one beyond
    /// the finite endpoint.
    pub fn center(&self) -> BigRational {
        match (self.lower_type, self.upper_type) {
            (BoundType::Infty, BoundType::Infty) => BigRational::zero(),
            (BoundType::Infty, _) => rational::floor(&self.upper) - BigRational::one(),
            (_, BoundType::Infty) => rational::ceil(&self.lower) + BigRational::one(),
            _ => rational::midpoint(&self.lower, &self.upper),
        }
    }

    /// A point of small representation near the center.
    ///
    /// Prefers the integers next to the center; with `include_bounds ==
    /// false` the result lies strictly between the endpoints.
    pub fn sample(&self, include_bounds: bool) -> BigRational {
        debug_assert!(!self.is_empty());
        debug_assert!(include_bounds || !self.is_point());
        let mid = self.center();
        let fl = rational::floor(&mid);
        if self.contains(&fl)
            && (include_bounds || self.lower_type == BoundType::Infty || self.lower < fl)
        {
            return fl;
        }
        let cl = rational::ceil(&mid);
        if self.contains(&cl)
            && (include_bounds || self.upper_type == BoundType::Infty || self.upper > cl)
        {
            return cl;
        }
        mid
    }

    /// `-self`.
    pub fn neg(&self) -> Interval {
        Interval::new(
            -self.upper.clone(),
            self.upper_type,
            -self.lower.clone(),
            self.lower_type,
        )
    }

    /// `self + other`.
    pub fn add(&self, other: &Interval) -> Interval {
        Interval::new(
            &self.lower + &other.lower,
            self.lower_type.stricter(other.lower_type),
            &self.upper + &other.upper,
            self.upper_type.stricter(other.upper_type),
        )
    }

    /// `c * self`.
    pub fn scale(&self, c: &BigRational) -> Interval {
        if c.is_zero() {
            return Interval::point(BigRational::zero());
        }
        let scaled = Interval::new(
            &self.lower * c,
            self.lower_type,
            &self.upper * c,
            self.upper_type,
        );
        if c.is_positive() {
            scaled
        } else {
            Interval::new(
                scaled.upper,
                scaled.upper_type,
                scaled.lower,
                scaled.lower_type,
            )
        }
    }

    /// `self * other`.
    pub fn mul(&self, other: &Interval) -> Interval {
        let zero = Interval::point(BigRational::zero());
        if self == &zero || other == &zero {
            return zero;
        }
        if !self.is_bounded() || !other.is_bounded() {
            return Interval::unbounded();
        }
        // Each corner: (value, attained).
        let corners: Vec<(BigRational, bool)> = [
            (&self.lower, self.lower_type, &other.lower, other.lower_type),
            (&self.lower, self.lower_type, &other.upper, other.upper_type),
            (&self.upper, self.upper_type, &other.lower, other.lower_type),
            (&self.upper, self.upper_type, &other.upper, other.upper_type),
        ]
        .into_iter()
        .map(|(a, at, b, bt)| {
            let attained = (at == BoundType::Weak && bt == BoundType::Weak)
                || (a.is_zero() && at == BoundType::Weak)
                || (b.is_zero() && bt == BoundType::Weak);
            (a * b, attained)
        })
        .collect();
        let bound = |pick: fn(&BigRational, &BigRational) -> bool| {
            let mut best = corners[0].0.clone();
            for (v, _) in &corners[1..] {
                if pick(v, &best) {
                    best = v.clone();
                }
            }
            let attained = corners.iter().any(|(v, a)| *a && v == &best);
            let kind = if attained {
                BoundType::Weak
            } else {
                BoundType::Strict
            };
            (best, kind)
        };
        let (lo, lo_type) = bound(|v, best| v < best);
        let (hi, hi_type) = bound(|v, best| v > best);
        Interval::new(lo, lo_type, hi, hi_type)
    }

    /// `self^n`.
    pub fn pow(&self, n: u32) -> Interval {
        if n == 0 {
            return Interval::point(BigRational::one());
        }
        let lo = self.lower.pow(n as i32);
        let hi = self.upper.pow(n as i32);
        if n % 2 == 1 {
            return Interval::new(lo, self.lower_type, hi, self.upper_type);
        }
        let nonneg = self.lower_type != BoundType::Infty && !self.lower.is_negative();
        let nonpos = self.upper_type != BoundType::Infty && !self.upper.is_positive();
        if nonneg {
            Interval::new(lo, self.lower_type, hi, self.upper_type)
        } else if nonpos {
            Interval::new(hi, self.upper_type, lo, self.lower_type)
        } else {
            let (top, top_type) = match (self.lower_type, self.upper_type) {
                (BoundType::Infty, _) | (_, BoundType::Infty) => {
                    (BigRational::zero(), BoundType::Infty)
                }
                _ => match lo.cmp(&hi) {
                    Ordering::Greater => (lo, self.lower_type),
                    Ordering::Less => (hi, self.upper_type),
                    Ordering::Equal => (lo, self.lower_type.weaker(self.upper_type)),
                },
            };
            Interval::new(BigRational::zero(), BoundType::Weak, top, top_type)
        }
    }

    /// Interval enclosure of `poly` when each variable ranges over its
    /// interval; variables without an interval range over the whole line.
    pub fn evaluate(poly: &Polynomial, intervals: &FxHashMap<Var, Interval>) -> Interval {
        let mut result = Interval::point(BigRational::zero());
        for term in poly.terms() {
            let mut value = Interval::point(term.coeff.clone());
            for vp in term.monomial.vars() {
                let factor = intervals
                    .get(&vp.var)
                    .map(|i| i.pow(vp.power))
                    .unwrap_or_else(Interval::unbounded);
                value = value.mul(&factor);
            }
            result = result.add(&value);
        }
        result
    }
}

impl fmt::Debug for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lower_type {
            BoundType::Infty => write!(f, "(-oo")?,
            BoundType::Strict => write!(f, "({}", self.lower)?,
            BoundType::Weak => write!(f, "[{}", self.lower)?,
        }
        write!(f, ", ")?;
        match self.upper_type {
            BoundType::Infty => write!(f, "oo)"),
            BoundType::Strict => write!(f, "{})", self.upper),
            BoundType::Weak => write!(f, "{}]", self.upper),
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
