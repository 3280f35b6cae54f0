//! Exact comparison of real algebraic numbers.
//!
//! Two non-numeric numbers are compared by refining both at the bounds of the
//! intersection of their intervals until the intervals are disjoint or equal.
//! Equal intervals hold the same number exactly when the gcd of the defining
//! polynomials changes sign across the interval; in that case both numbers
//! adopt the gcd as their new, smaller defining polynomial.

use super::RealAlgebraicNumber;
use crate::sign::{Relation, Sign};
use num_rational::BigRational;
use std::cmp::Ordering;
use tracing::trace;

/// Decide `lhs ~ rhs`.
pub fn compare(lhs: &RealAlgebraicNumber, rhs: &RealAlgebraicNumber, relation: Relation) -> bool {
    loop {
        if lhs.same_record(rhs) {
            return relation.evaluate(Sign::Zero);
        }
        match (lhs.value(), rhs.value()) {
            (Some(a), Some(b)) => return relation.holds(a.cmp(&b)),
            (None, Some(b)) => return compare_rational(lhs, &b, relation),
            (Some(a), None) => return compare_rational(rhs, &a, relation.inverse()),
            (None, None) => {}
        }

        let li = lhs.interval();
        let ri = rhs.interval();
        if li == ri {
            let (Some(lp), Some(rp)) = (lhs.polynomial(), rhs.polynomial()) else {
                continue;
            };
            if lp == rp {
                return relation.evaluate(Sign::Zero);
            }
            let g = lp.gcd(&rp);
            if g.degree() > 0 && g.sign_at(li.lower()) != g.sign_at(li.upper()) {
                trace!(gcd = %g, "equal numbers with different defining polynomials");
                lhs.set_polynomial(&g);
                rhs.set_polynomial(&g);
                return relation.evaluate(Sign::Zero);
            }
            match relation {
                Relation::Eq => return false,
                Relation::Neq => return true,
                _ => {
                    lhs.refine();
                    rhs.refine();
                }
            }
        } else if li.intersects(&ri) {
            let common = li.intersect(&ri);
            lhs.refine_using(common.lower());
            rhs.refine_using(common.lower());
            if !common.is_point() {
                lhs.refine_using(common.upper());
                rhs.refine_using(common.upper());
            }
        } else if li.upper() <= ri.lower() {
            return relation.holds(Ordering::Less);
        } else {
            return relation.holds(Ordering::Greater);
        }
    }
}

/// Decide `ran ~ q`.
pub fn compare_rational(ran: &RealAlgebraicNumber, q: &BigRational, relation: Relation) -> bool {
    if let Some(s) = ran.refine_using(q) {
        return relation.evaluate(s);
    }
    // q is outside the open isolating interval, so it differs from the number.
    let interval = ran.interval();
    match relation {
        Relation::Eq => false,
        Relation::Neq => true,
        Relation::Less | Relation::Leq => interval.upper() <= q,
        Relation::Greater | Relation::Geq => interval.lower() >= q,
    }
}

impl PartialEq for RealAlgebraicNumber {
    fn eq(&self, other: &Self) -> bool {
        compare(self, other, Relation::Eq)
    }
}

impl Eq for RealAlgebraicNumber {}

impl PartialOrd for RealAlgebraicNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RealAlgebraicNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        if compare(self, other, Relation::Eq) {
            Ordering::Equal
        } else if compare(self, other, Relation::Less) {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}

impl PartialEq<BigRational> for RealAlgebraicNumber {
    fn eq(&self, other: &BigRational) -> bool {
        compare_rational(self, other, Relation::Eq)
    }
}

impl PartialOrd<BigRational> for RealAlgebraicNumber {
    fn partial_cmp(&self, other: &BigRational) -> Option<Ordering> {
        Some(if compare_rational(self, other, Relation::Eq) {
            Ordering::Equal
        } else if compare_rational(self, other, Relation::Less) {
            Ordering::Less
        } else {
            Ordering::Greater
        })
    }
}
