//! Polynomial sign constraints `p ~ 0`.

use crate::polynomial::Polynomial;
use crate::sign::{Relation, Sign};
use std::fmt;

/// The constraint `lhs ~ 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    /// Left-hand side.
    pub lhs: Polynomial,
    /// Relation to zero.
    pub relation: Relation,
}

impl Constraint {
    /// Create the constraint `lhs ~ 0`.
    pub fn new(lhs: Polynomial, relation: Relation) -> Self {
        Self { lhs, relation }
    }

    /// Does a left-hand side of sign `s` satisfy the constraint?
    pub fn satisfied_by_sign(&self, s: Sign) -> bool {
        self.relation.evaluate(s)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} 0", self.lhs, self.relation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_satisfied_by_sign() {
        let c = Constraint::new(Polynomial::from_var(0), Relation::Leq);
        assert!(c.satisfied_by_sign(Sign::Negative));
        assert!(c.satisfied_by_sign(Sign::Zero));
        assert!(!c.satisfied_by_sign(Sign::Positive));
    }
}
