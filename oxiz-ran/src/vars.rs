//! Fresh variable allocation.

use crate::polynomial::{Polynomial, Var, NULL_VAR};

/// Source of variables that do not occur in any polynomial seen so far.
#[derive(Debug, Clone, Default)]
pub struct VarPool {
    next: Var,
}

impl VarPool {
    /// A pool whose first fresh variable is `first`.
    pub fn new(first: Var) -> Self {
        Self { next: first }
    }

    /// Never hand out `var` or anything below it.
    pub fn reserve(&mut self, var: Var) {
        if var != NULL_VAR && var >= self.next {
            self.next = var + 1;
        }
    }

    /// Reserve every variable of `p`.
    pub fn reserve_all(&mut self, p: &Polynomial) {
        for v in p.vars() {
            self.reserve(v);
        }
    }

    /// A variable that has not been handed out or reserved.
    pub fn fresh(&mut self) -> Var {
        let v = self.next;
        self.next += 1;
        v
    }
}
