//! Signs, relations and three-valued verdicts.

use num_rational::BigRational;
use num_traits::{Signed, Zero};
use std::cmp::Ordering;
use std::fmt;

/// Sign of a real number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sign {
    /// Strictly negative.
    Negative,
    /// Zero.
    Zero,
    /// Strictly positive.
    Positive,
}

impl Sign {
    /// Sign of a rational.
    pub fn of(q: &BigRational) -> Self {
        if q.is_zero() {
            Sign::Zero
        } else if q.is_positive() {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }

    /// Sign of an integer count such as a Tarski query.
    pub fn from_i32(n: i32) -> Self {
        match n.cmp(&0) {
            Ordering::Less => Sign::Negative,
            Ordering::Equal => Sign::Zero,
            Ordering::Greater => Sign::Positive,
        }
    }

    /// The sign as -1, 0 or 1.
    pub fn to_i32(self) -> i32 {
        match self {
            Sign::Negative => -1,
            Sign::Zero => 0,
            Sign::Positive => 1,
        }
    }

    /// Flip the sign.
    pub fn negate(self) -> Self {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
        }
    }

    /// Sign of a product.
    pub fn mul(self, other: Sign) -> Self {
        Sign::from_i32(self.to_i32() * other.to_i32())
    }

    /// Interpret the sign of `a - b` as an ordering of `a` and `b`.
    pub fn to_ordering(self) -> Ordering {
        match self {
            Sign::Negative => Ordering::Less,
            Sign::Zero => Ordering::Equal,
            Sign::Positive => Ordering::Greater,
        }
    }
}

impl From<Ordering> for Sign {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Less => Sign::Negative,
            Ordering::Equal => Sign::Zero,
            Ordering::Greater => Sign::Positive,
        }
    }
}

/// Relation of a polynomial constraint `p ~ 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// `=`
    Eq,
    /// `!=`
    Neq,
    /// `<`
    Less,
    /// `<=`
    Leq,
    /// `>`
    Greater,
    /// `>=`
    Geq,
}

impl Relation {
    /// Does `s ~ 0` hold for a value of sign `s`?
    pub fn evaluate(self, s: Sign) -> bool {
        self.holds(s.to_ordering())
    }

    /// Does `a ~ b` hold when `a.cmp(b) == ord`?
    pub fn holds(self, ord: Ordering) -> bool {
        match self {
            Relation::Eq => ord == Ordering::Equal,
            Relation::Neq => ord != Ordering::Equal,
            Relation::Less => ord == Ordering::Less,
            Relation::Leq => ord != Ordering::Greater,
            Relation::Greater => ord == Ordering::Greater,
            Relation::Geq => ord != Ordering::Less,
        }
    }

    /// The relation obtained by swapping the operands.
    pub fn inverse(self) -> Self {
        match self {
            Relation::Eq => Relation::Eq,
            Relation::Neq => Relation::Neq,
            Relation::Less => Relation::Greater,
            Relation::Leq => Relation::Geq,
            Relation::Greater => Relation::Less,
            Relation::Geq => Relation::Leq,
        }
    }

    /// The logical negation.
    pub fn negation(self) -> Self {
        match self {
            Relation::Eq => Relation::Neq,
            Relation::Neq => Relation::Eq,
            Relation::Less => Relation::Geq,
            Relation::Leq => Relation::Greater,
            Relation::Greater => Relation::Leq,
            Relation::Geq => Relation::Less,
        }
    }

    /// Is this `<`, `>` or `!=`?
    pub fn is_strict(self) -> bool {
        matches!(self, Relation::Less | Relation::Greater | Relation::Neq)
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Relation::Eq => "=",
            Relation::Neq => "!=",
            Relation::Less => "<",
            Relation::Leq => "<=",
            Relation::Greater => ">",
            Relation::Geq => ">=",
        };
        f.write_str(s)
    }
}

/// Three-valued verdict of a constraint evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tribool {
    /// The constraint holds.
    True,
    /// The constraint does not hold.
    False,
    /// Could not be decided.
    #[default]
    Unknown,
}

impl Tribool {
    /// Is the verdict `True`?
    pub fn is_true(self) -> bool {
        self == Tribool::True
    }

    /// Is the verdict `False`?
    pub fn is_false(self) -> bool {
        self == Tribool::False
    }

    /// Is the verdict `Unknown`?
    pub fn is_unknown(self) -> bool {
        self == Tribool::Unknown
    }
}

impl From<bool> for Tribool {
    fn from(b: bool) -> Self {
        if b { Tribool::True } else { Tribool::False }
    }
}
