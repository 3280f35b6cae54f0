//! Real algebraic numbers in interval representation.
//!
//! A [`RealAlgebraicNumber`] is either a rational (a point interval) or the
//! unique root of a square-free polynomial inside an open isolating interval
//! that contains no integer. Clones share one mutable record: refining any
//! handle narrows the interval seen by all of them, and the interval only
//! ever shrinks.
//!
//! ## Algorithms
//!
//! - **Bisection** at an interval sample, keeping the half whose endpoints
//!   differ in sign (the sign at the lower end is cached)
//! - **Tarski queries** to decide the sign of another polynomial at the root
//!
//! ## References
//!
//! - Basu, Pollack, Roy, "Algorithms in Real Algebraic Geometry", Ch. 10

mod compare;
mod sampling;

pub use compare::{compare, compare_rational};
pub use sampling::{
    sample_above, sample_below, sample_between, sample_between_rational_ran,
    sample_between_ran_rational,
};

use crate::error::{RanError, RanResult};
use crate::interval::Interval;
use crate::polynomial::root_counting::{count_real_roots, sturm_sequence, tarski_query};
use crate::polynomial::{Polynomial, UnivariatePolynomial, Var, NULL_VAR};
use crate::rational;
use crate::sign::Sign;
use num_rational::BigRational;
use num_traits::{Signed, Zero};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use tracing::trace;

type UPoly = UnivariatePolynomial<BigRational>;

/// Main variable of every stored defining polynomial.
const RAN_VAR: Var = NULL_VAR;

#[derive(Debug, Clone)]
struct Content {
    /// `None` exactly when the interval is a point.
    polynomial: Option<UPoly>,
    interval: Interval,
    /// Sign of the polynomial at the lower bound.
    lower_sign: Sign,
}

impl Content {
    fn point(q: BigRational) -> Self {
        Self {
            polynomial: None,
            interval: Interval::point(q),
            lower_sign: Sign::Zero,
        }
    }
}

/// An exact real algebraic number.
///
/// Cloning aliases the underlying state; use [`deep_clone`](Self::deep_clone)
/// for an independent copy.
#[derive(Clone)]
pub struct RealAlgebraicNumber {
    content: Rc<RefCell<Content>>,
}

impl RealAlgebraicNumber {
    /// The rational `q`.
    pub fn from_rational(q: BigRational) -> Self {
        Self::from_content(Content::point(q))
    }

    /// Zero.
    pub fn zero() -> Self {
        Self::from_rational(BigRational::zero())
    }

    fn from_content(content: Content) -> Self {
        Self {
            content: Rc::new(RefCell::new(content)),
        }
    }

    /// The root of `p` inside `interval`.
    ///
    /// `p` must be square-free and non-constant, and `interval` must be either
    /// a point or a bounded open interval that contains exactly one root of
    /// `p` and has no root at its endpoints. These preconditions are only
    /// checked in debug builds; see [`try_from_root`](Self::try_from_root).
    pub fn from_root(p: &UPoly, interval: Interval) -> Self {
        debug_assert!(!p.is_zero() && p.degree() > 0, "constant defining polynomial {}", p);
        debug_assert!(interval.is_point() || (interval.is_open() && interval.is_bounded()));
        if interval.is_point() {
            return Self::from_rational(interval.lower().clone());
        }
        let p = p.replace_var(RAN_VAR).normalized();
        if p.degree() == 1 {
            return Self::from_rational(-p.coeff(0) / p.coeff(1));
        }
        let lower_sign = p.sign_at(interval.lower());
        let ran = Self::from_content(Content {
            polynomial: Some(p),
            interval,
            lower_sign,
        });
        ran.refine_using(&BigRational::zero());
        ran.refine_to_integrality();
        debug_assert!(ran.is_consistent(), "inconsistent {}", ran);
        ran
    }

    /// Like [`from_root`](Self::from_root), taking the square-free part first.
    pub fn from_root_safe(p: &UPoly, interval: Interval) -> Self {
        Self::from_root(&p.square_free_part(), interval)
    }

    /// Validated construction for polynomial and interval pairs from outside
    /// the kernel.
    pub fn try_from_root(p: &UPoly, interval: Interval) -> RanResult<Self> {
        if p.is_zero() {
            return Err(RanError::ZeroPolynomial);
        }
        let not_isolating = |roots| RanError::NotIsolating {
            polynomial: p.to_string(),
            interval: interval.to_string(),
            roots,
        };
        if interval.is_point() {
            return if p.is_root(interval.lower()) {
                Ok(Self::from_rational(interval.lower().clone()))
            } else {
                Err(not_isolating(0))
            };
        }
        if !interval.is_open() || !interval.is_bounded() || interval.is_empty() {
            return Err(RanError::InvalidInterval(format!(
                "{} is neither a point nor a bounded open interval",
                interval
            )));
        }
        let sf = p.square_free_part();
        if sf.is_root(interval.lower()) || sf.is_root(interval.upper()) {
            return Err(RanError::InvalidInterval(format!(
                "{} has a root of {} at an endpoint",
                interval, p
            )));
        }
        let roots = count_real_roots(&sturm_sequence(&sf), &interval);
        if roots != 1 {
            return Err(not_isolating(roots.max(0) as usize));
        }
        Ok(Self::from_root(&sf, interval))
    }

    /// Is the number a plain rational?
    pub fn is_numeric(&self) -> bool {
        self.content.borrow().polynomial.is_none()
    }

    /// The rational value of a numeric number.
    pub fn value(&self) -> Option<BigRational> {
        let c = self.content.borrow();
        c.polynomial.is_none().then(|| c.interval.lower().clone())
    }

    /// The current isolating interval (a point for numeric numbers).
    pub fn interval(&self) -> Interval {
        self.content.borrow().interval.clone()
    }

    /// The defining polynomial of a non-numeric number.
    pub fn polynomial(&self) -> Option<UPoly> {
        self.content.borrow().polynomial.clone()
    }

    /// Sign of the defining polynomial at the lower bound.
    pub fn lower_sign(&self) -> Sign {
        self.content.borrow().lower_sign
    }

    /// A polynomial in `var` that vanishes at this number: `var - q` for a
    /// rational `q`, the defining polynomial otherwise.
    pub fn defining_polynomial(&self, var: Var) -> Polynomial {
        let c = self.content.borrow();
        match &c.polynomial {
            Some(p) => p.replace_var(var).to_polynomial(),
            None => Polynomial::from_var(var) - Polynomial::constant(c.interval.lower().clone()),
        }
    }

    /// Do both handles share one record?
    pub fn same_record(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.content, &other.content)
    }

    /// An independent copy that no longer shares refinement with `self`.
    pub fn deep_clone(&self) -> Self {
        Self::from_content(self.content.borrow().clone())
    }

    fn is_consistent(&self) -> bool {
        let c = self.content.borrow();
        let Some(p) = &c.polynomial else {
            return c.interval.is_point() && c.lower_sign == Sign::Zero;
        };
        if c.interval.contains_integer() || !c.interval.is_open() {
            return false;
        }
        if !p.is_square_free() {
            return false;
        }
        let lower = p.sign_at(c.interval.lower());
        let upper = p.sign_at(c.interval.upper());
        lower != Sign::Zero && upper != Sign::Zero && lower != upper && lower == c.lower_sign
    }

    /// Bisect at `pivot`, which must lie strictly inside the interval of a
    /// non-numeric number. Returns the sign of `self - pivot`.
    fn refine_internal(&self, pivot: &BigRational) -> Sign {
        let mut c = self.content.borrow_mut();
        debug_assert!(c.interval.contains_strictly(pivot));
        let s = match &c.polynomial {
            Some(p) => p.sign_at(pivot),
            None => return Sign::of(&(c.interval.lower() - pivot)),
        };
        if s == Sign::Zero {
            *c = Content::point(pivot.clone());
            trace!(value = %pivot, "refinement hit the root");
            Sign::Zero
        } else if s == c.lower_sign {
            c.interval = Interval::open(pivot.clone(), c.interval.upper().clone());
            Sign::Positive
        } else {
            c.interval = Interval::open(c.interval.lower().clone(), pivot.clone());
            Sign::Negative
        }
    }

    /// Halve the isolating interval (or collapse it if the sample is the root).
    pub fn refine(&self) {
        if self.is_numeric() {
            return;
        }
        let pivot = self.content.borrow().interval.sample(false);
        self.refine_internal(&pivot);
    }

    /// Refine at `pivot` if it lies strictly inside the interval.
    ///
    /// Returns the sign of `self - pivot` when it is decided by this step;
    /// numeric numbers always decide.
    pub fn refine_using(&self, pivot: &BigRational) -> Option<Sign> {
        if let Some(v) = self.value() {
            return Some(Sign::of(&(v - pivot)));
        }
        if self.content.borrow().interval.contains_strictly(pivot) {
            Some(self.refine_internal(pivot))
        } else {
            None
        }
    }

    /// Refine until the interval is at most `width` wide.
    pub fn refine_to_width(&self, width: &BigRational) {
        while let Some(d) = self.interval().diameter() {
            if self.is_numeric() || &d <= width {
                break;
            }
            self.refine();
        }
    }

    fn refine_to_integrality(&self) {
        loop {
            let interval = self.interval();
            if interval.is_point() || !interval.contains_integer() {
                break;
            }
            self.refine();
        }
    }

    /// Replace the defining polynomial by a factor that still has the root
    /// inside the current interval.
    fn set_polynomial(&self, p: &UPoly) {
        {
            let mut c = self.content.borrow_mut();
            debug_assert!(!c.interval.is_point());
            let p = p.replace_var(RAN_VAR).normalized();
            let lower_sign = p.sign_at(c.interval.lower());
            c.lower_sign = lower_sign;
            c.polynomial = Some(p);
        }
        debug_assert!(self.is_consistent());
    }

    /// Sign of the number itself.
    pub fn sign(&self) -> Sign {
        let c = self.content.borrow();
        if c.polynomial.is_none() {
            return Sign::of(c.interval.lower());
        }
        // The interval contains no integer, so in particular not zero.
        if c.interval.lower().is_negative() {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }

    /// Is the number zero?
    pub fn is_zero(&self) -> bool {
        self.sign() == Sign::Zero
    }

    /// Sign of `q` evaluated at this number.
    pub fn sgn(&self, q: &UPoly) -> Sign {
        let c = self.content.borrow();
        match &c.polynomial {
            None => q.sign_at(c.interval.lower()),
            Some(p) => {
                let q = q.replace_var(RAN_VAR);
                if q.is_zero() {
                    return Sign::Zero;
                }
                if p == &q.normalized() {
                    return Sign::Zero;
                }
                let count = tarski_query(p, &q, &c.interval);
                debug_assert!((-1..=1).contains(&count), "Tarski query {}", count);
                Sign::from_i32(count as i32)
            }
        }
    }

    /// Is this number a root of `q`?
    pub fn is_root_of(&self, q: &UPoly) -> bool {
        self.sgn(q) == Sign::Zero
    }

    /// `|self|`.
    pub fn abs(&self) -> Self {
        if self.sign() != Sign::Negative {
            return self.clone();
        }
        let c = self.content.borrow();
        match &c.polynomial {
            None => Self::from_rational(-c.interval.lower().clone()),
            Some(p) => Self::from_root(&p.negate_variable(), c.interval.neg()),
        }
    }

    /// Is the number an integer?
    pub fn is_integer(&self) -> bool {
        self.value().is_some_and(|v| v.is_integer())
    }

    /// Largest integer at most the lower bound, hence at most the number.
    pub fn integer_below(&self) -> BigRational {
        rational::floor(self.content.borrow().interval.lower())
    }

    /// Representation size: bit sizes of the bounds plus the degree.
    pub fn size(&self) -> u64 {
        let c = self.content.borrow();
        let bounds = rational::bit_size(c.interval.lower()) + rational::bit_size(c.interval.upper());
        bounds + c.polynomial.as_ref().map_or(0, |p| p.degree() as u64)
    }

    /// Is the number inside `interval`? Refines at the finite bounds of
    /// `interval` that cut the isolating interval.
    pub fn contained_in(&self, interval: &Interval) -> bool {
        for bound in [interval.lower_bound(), interval.upper_bound()].into_iter().flatten() {
            if !self.is_numeric() && self.interval().contains_strictly(bound) {
                self.refine_internal(bound);
            }
        }
        interval.contains_interval(&self.interval())
    }

    /// A rational close to the number, suitable for case splits.
    pub fn branching_point(&self) -> BigRational {
        self.interval().sample(true)
    }

    /// Smallest integer at least as large as the number.
    pub fn ceil(&self) -> BigRational {
        rational::ceil(self.content.borrow().interval.upper())
    }

    /// Largest integer at most as large as the number.
    pub fn floor(&self) -> BigRational {
        rational::floor(self.content.borrow().interval.lower())
    }
}

impl From<BigRational> for RealAlgebraicNumber {
    fn from(q: BigRational) -> Self {
        Self::from_rational(q)
    }
}

impl Default for RealAlgebraicNumber {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for RealAlgebraicNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.content.borrow();
        match &c.polynomial {
            Some(p) => write!(f, "(IR {}, {})", c.interval, p),
            None => write!(f, "(NR {})", c.interval.lower()),
        }
    }
}

impl fmt::Debug for RealAlgebraicNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
