//! Rational sample points around and between real algebraic numbers.

use super::{compare, compare_rational, RealAlgebraicNumber};
use crate::interval::{BoundType, Interval};
use crate::rational;
use crate::sign::Relation;
use num_rational::BigRational;
use num_traits::One;

/// An integer strictly above `ran`.
pub fn sample_above(ran: &RealAlgebraicNumber) -> BigRational {
    match ran.value() {
        Some(v) => rational::floor(&v) + BigRational::one(),
        // Irrational intervals are open, so the ceiling of the upper bound is above.
        None => rational::ceil(ran.interval().upper()),
    }
}

/// An integer strictly below `ran`.
pub fn sample_below(ran: &RealAlgebraicNumber) -> BigRational {
    match ran.value() {
        Some(v) => rational::ceil(&v) - BigRational::one(),
        None => rational::floor(ran.interval().lower()),
    }
}

/// A rational strictly between `lower` and `upper`.
///
/// Requires `lower < upper`; otherwise the refinement does not terminate.
pub fn sample_between(lower: &RealAlgebraicNumber, upper: &RealAlgebraicNumber) -> BigRational {
    debug_assert!(compare(lower, upper, Relation::Less), "{} is not below {}", lower, upper);
    loop {
        match (lower.value(), upper.value()) {
            (Some(a), Some(b)) => return Interval::open(a, b).sample(false),
            (Some(a), None) => return sample_between_rational_ran(&a, upper),
            (None, Some(b)) => return sample_between_ran_rational(lower, &b),
            (None, None) => {}
        }
        let li = lower.interval();
        let ui = upper.interval();
        if li.upper() <= ui.lower() {
            // Both bounds lie strictly between the two numbers.
            return Interval::closed(li.upper().clone(), ui.lower().clone()).sample(true);
        }
        lower.refine_using(ui.lower());
        upper.refine_using(li.upper());
        if lower.interval() == li && upper.interval() == ui {
            lower.refine();
            upper.refine();
        }
    }
}

/// A rational strictly between `lower` and `upper`; requires `lower < upper`.
pub fn sample_between_ran_rational(lower: &RealAlgebraicNumber, upper: &BigRational) -> BigRational {
    debug_assert!(compare_rational(lower, upper, Relation::Less), "{} is not below {}", lower, upper);
    lower.refine_using(upper);
    loop {
        let Some(li) = (!lower.is_numeric()).then(|| lower.interval()) else {
            let value = lower.interval().lower().clone();
            return Interval::open(value, upper.clone()).sample(false);
        };
        if li.upper() < upper {
            let gap = Interval::new(li.upper().clone(), BoundType::Weak, upper.clone(), BoundType::Strict);
            return gap.sample(true);
        }
        lower.refine();
    }
}

/// A rational strictly between `lower` and `upper`; requires `lower < upper`.
pub fn sample_between_rational_ran(lower: &BigRational, upper: &RealAlgebraicNumber) -> BigRational {
    debug_assert!(compare_rational(upper, lower, Relation::Greater), "{} is not below {}", lower, upper);
    upper.refine_using(lower);
    loop {
        let Some(ui) = (!upper.is_numeric()).then(|| upper.interval()) else {
            let value = upper.interval().lower().clone();
            return Interval::open(lower.clone(), value).sample(false);
        };
        if ui.lower() > lower {
            let gap = Interval::new(lower.clone(), BoundType::Strict, ui.lower().clone(), BoundType::Weak);
            return gap.sample(true);
        }
        upper.refine();
    }
}
