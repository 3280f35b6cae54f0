//! Evaluation at algebraic points.
//!
//! Computes the value of a multivariate polynomial, the truth of a sign
//! constraint, or the real roots of a polynomial in one variable when all
//! other variables are assigned real algebraic numbers.
//!
//! ## Algorithms
//!
//! 1. Substitute rational values, refining the algebraic ones first so that
//!    some of them collapse to rationals.
//! 2. Decide with the univariate sign of a single algebraic operand, or with
//!    interval arithmetic over the isolating intervals.
//! 3. Otherwise eliminate the operands from `t - p` for a fresh `t` and
//!    refine the operands until the interval enclosure of `p` isolates one
//!    root of the eliminated polynomial.
//!
//! ## References
//!
//! - Collins, Loos, "Real zeros of polynomials", 1982
//! - Z3's `math/polynomial/algebraic_numbers.cpp` (`eval_sign_at`)

use crate::constraint::Constraint;
use crate::error::{RanError, RanResult};
use crate::interval::{BoundType, Interval};
use crate::isolate::{IsolationConfig, IsolationStats, RootIsolator, RootsResult};
use crate::polynomial::root_bounds::{lagrange_negative_upper_bound, lagrange_positive_lower_bound};
use crate::polynomial::root_counting::{count_real_roots, sturm_sequence};
use crate::polynomial::{Polynomial, UnivariatePolynomial, Var};
use crate::ran::RealAlgebraicNumber;
use crate::rational::pow2;
use crate::sign::{Relation, Sign, Tribool};
use crate::substitution::{eliminate, Backend, ResultantOnly, SubstitutionStrategy};
use crate::vars::VarPool;
use num_rational::BigRational;
use num_traits::Zero;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use tracing::{debug, trace};

type UPoly = UnivariatePolynomial<BigRational>;

/// Values of variables.
pub type Assignment = BTreeMap<Var, RealAlgebraicNumber>;

/// Configuration for the evaluator.
#[derive(Debug, Clone)]
pub struct EvaluatorConfig {
    /// Refine algebraic operands before substituting.
    pub refine_model: bool,
    /// Operands are refined to width `2^-min_width_exponent`.
    pub min_width_exponent: u32,
    /// Try to decide constraints with root bounds of the eliminated polynomial.
    pub use_root_bounds: bool,
    /// Elimination strategy.
    pub strategy: SubstitutionStrategy,
    /// Configuration of the root isolator.
    pub isolation: IsolationConfig,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            refine_model: true,
            min_width_exponent: 20,
            use_root_bounds: true,
            strategy: SubstitutionStrategy::Resultant,
            isolation: IsolationConfig::default(),
        }
    }
}

/// Statistics for the evaluator.
#[derive(Debug, Clone, Default)]
pub struct EvaluatorStats {
    /// Polynomial evaluations.
    pub evaluations: u64,
    /// Constraint evaluations.
    pub constraint_evaluations: u64,
    /// Results found without elimination.
    pub direct_results: u64,
    /// Constraints decided by interval arithmetic.
    pub interval_decisions: u64,
    /// Constraints decided by root bounds.
    pub root_bound_decisions: u64,
    /// Eliminations performed.
    pub eliminations: u64,
    /// Rounds of operand refinement after elimination.
    pub refinement_rounds: u64,
}

/// A polynomial after substitution of the rational part of an assignment.
struct Reduced {
    poly: Polynomial,
    remaining: Vec<(Var, RealAlgebraicNumber)>,
}

/// Evaluator for polynomials and constraints at algebraic points.
#[derive(Debug)]
pub struct Evaluator {
    config: EvaluatorConfig,
    stats: EvaluatorStats,
    vars: VarPool,
    backend: Box<dyn Backend>,
    isolator: RootIsolator,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Evaluator {
    /// Create an evaluator without Gröbner or factorization support.
    pub fn new(config: EvaluatorConfig) -> Self {
        Self::with_backend(config, Box::new(ResultantOnly))
    }

    /// Create an evaluator with a substitution backend.
    pub fn with_backend(config: EvaluatorConfig, backend: Box<dyn Backend>) -> Self {
        let isolator = RootIsolator::new(config.isolation.clone());
        Self {
            config,
            stats: EvaluatorStats::default(),
            vars: VarPool::default(),
            backend,
            isolator,
        }
    }

    /// Create with the default configuration.
    pub fn default_config() -> Self {
        Self::new(EvaluatorConfig::default())
    }

    /// The configuration.
    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Get statistics.
    pub fn stats(&self) -> &EvaluatorStats {
        &self.stats
    }

    /// Statistics of the embedded root isolator.
    pub fn isolation_stats(&self) -> &IsolationStats {
        self.isolator.stats()
    }

    /// Reset statistics.
    pub fn reset_stats(&mut self) {
        self.stats = EvaluatorStats::default();
        self.isolator.reset_stats();
    }

    fn prepare(&mut self, p: &Polynomial, assignment: &Assignment, free: Option<Var>) -> RanResult<Reduced> {
        let mut operands = Vec::new();
        for v in p.vars() {
            if Some(v) == free {
                continue;
            }
            let r = assignment.get(&v).ok_or(RanError::UnassignedVariable(v))?;
            operands.push((v, r.clone()));
        }
        if self.config.refine_model {
            let width = pow2(-i64::from(self.config.min_width_exponent));
            for (_, r) in &operands {
                r.refine_to_width(&width);
            }
        }
        let mut poly = p.clone();
        let mut remaining = Vec::new();
        for (v, r) in operands {
            match r.value() {
                Some(q) => poly = poly.eval_at(v, &q),
                None => remaining.push((v, r)),
            }
        }
        Ok(Reduced { poly, remaining })
    }

    fn witness(&mut self, reduced: &Reduced) -> RanResult<UPoly> {
        self.vars.reserve_all(&reduced.poly);
        let t = self.vars.fresh();
        let w = Polynomial::from_var(t) - reduced.poly.clone();
        let res = eliminate(&w, t, &reduced.remaining, self.config.strategy, self.backend.as_mut())?;
        self.stats.eliminations += 1;
        if res.is_zero() {
            return Err(RanError::ZeroPolynomial);
        }
        trace!(witness = %res, "eliminated algebraic operands");
        Ok(res.square_free_part())
    }

    /// Refine the operands until the enclosure of the polynomial isolates
    /// one root of `res`, which is then its value.
    fn isolate_value(&mut self, reduced: &Reduced, res: &UPoly) -> RealAlgebraicNumber {
        let sturm = sturm_sequence(res);
        loop {
            let bound = enclosure(reduced);
            if bound.is_point() {
                return RealAlgebraicNumber::from_rational(bound.lower().clone());
            }
            let (l, u) = (bound.lower(), bound.upper());
            if bound.is_bounded() && !res.is_root(l) && !res.is_root(u) {
                let candidate = Interval::open(l.clone(), u.clone());
                if count_real_roots(&sturm, &candidate) == 1 {
                    return RealAlgebraicNumber::from_root(res, candidate);
                }
            }
            for (_, r) in &reduced.remaining {
                r.refine();
            }
            self.stats.refinement_rounds += 1;
        }
    }

    /// The value of `p` at `assignment`, with the reason when it cannot be
    /// computed.
    pub fn try_evaluate(&mut self, p: &Polynomial, assignment: &Assignment) -> RanResult<RealAlgebraicNumber> {
        self.stats.evaluations += 1;
        let reduced = self.prepare(p, assignment, None)?;
        if reduced.poly.is_number() {
            self.stats.direct_results += 1;
            return Ok(RealAlgebraicNumber::from_rational(reduced.poly.constant_value()));
        }
        if let [(v, r)] = reduced.remaining.as_slice() {
            if let Some(up) = reduced.poly.to_univariate_rational(*v) {
                if r.is_root_of(&up) {
                    self.stats.direct_results += 1;
                    return Ok(RealAlgebraicNumber::zero());
                }
            }
        }
        let bound = enclosure(&reduced);
        if bound.is_point() {
            self.stats.direct_results += 1;
            return Ok(RealAlgebraicNumber::from_rational(bound.lower().clone()));
        }
        let res = self.witness(&reduced)?;
        let value = self.isolate_value(&reduced, &res);
        debug!(%value, "evaluated polynomial");
        Ok(value)
    }

    /// The value of `p` at `assignment`.
    pub fn evaluate(&mut self, p: &Polynomial, assignment: &Assignment) -> Option<RealAlgebraicNumber> {
        self.try_evaluate(p, assignment).ok()
    }

    /// Does `c` hold at `assignment`, with the reason when it cannot be
    /// decided?
    pub fn try_evaluate_constraint(&mut self, c: &Constraint, assignment: &Assignment) -> RanResult<Tribool> {
        self.stats.constraint_evaluations += 1;
        let reduced = self.prepare(&c.lhs, assignment, None)?;
        if reduced.poly.is_number() {
            self.stats.direct_results += 1;
            return Ok(c.satisfied_by_sign(Sign::of(&reduced.poly.constant_value())).into());
        }
        if let [(v, r)] = reduced.remaining.as_slice() {
            if let Some(up) = reduced.poly.to_univariate_rational(*v) {
                self.stats.direct_results += 1;
                return Ok(c.satisfied_by_sign(r.sgn(&up)).into());
            }
        }
        let bound = enclosure(&reduced);
        let verdict = bound.evaluate_relation(c.relation);
        if !verdict.is_unknown() {
            self.stats.interval_decisions += 1;
            return Ok(verdict);
        }
        let res = self.witness(&reduced)?;
        if self.config.use_root_bounds {
            if let Some(verdict) = root_bound_verdict(&res, &bound, c.relation) {
                self.stats.root_bound_decisions += 1;
                return Ok(verdict);
            }
        }
        let value = self.isolate_value(&reduced, &res);
        Ok(c.satisfied_by_sign(value.sign()).into())
    }

    /// Does `c` hold at `assignment`? `Unknown` when it cannot be decided.
    pub fn evaluate_constraint(&mut self, c: &Constraint, assignment: &Assignment) -> Tribool {
        match self.try_evaluate_constraint(c, assignment) {
            Ok(verdict) => verdict,
            Err(err) => {
                debug!(%err, constraint = %c, "constraint undecided");
                Tribool::Unknown
            }
        }
    }

    /// Real roots of a univariate polynomial inside `interval`.
    pub fn real_roots(&mut self, p: &UPoly, interval: &Interval) -> RootsResult {
        self.isolator.isolate(p, interval)
    }

    /// Real roots in `var` of `p` with every other variable taken from
    /// `assignment`, inside `interval`.
    pub fn real_roots_multivariate(
        &mut self,
        p: &Polynomial,
        var: Var,
        assignment: &Assignment,
        interval: &Interval,
    ) -> RootsResult {
        if p.vars().iter().any(|v| *v != var && !assignment.contains_key(v)) {
            return RootsResult::NonUnivariate;
        }
        // Coefficients that vanish at the assignment do not contribute.
        let mut kept = Polynomial::zero();
        for (k, c) in p.to_univariate(var).coeffs().iter().enumerate() {
            if c.is_zero() {
                continue;
            }
            match self.try_evaluate(c, assignment) {
                Ok(value) if value.is_zero() => {}
                Ok(_) => kept = kept + c * &Polynomial::from_var_power(var, k as u32),
                Err(_) => return RootsResult::NonUnivariate,
            }
        }
        if kept.is_zero() {
            return RootsResult::Nullified;
        }

        let reduced = match self.prepare(&kept, assignment, Some(var)) {
            Ok(reduced) => reduced,
            Err(_) => return RootsResult::NonUnivariate,
        };
        if reduced.remaining.is_empty() {
            return match reduced.poly.to_univariate_rational(var) {
                Some(up) => self.isolator.isolate(&up, interval),
                None => RootsResult::NonUnivariate,
            };
        }
        let res = match eliminate(
            &reduced.poly,
            var,
            &reduced.remaining,
            self.config.strategy,
            self.backend.as_mut(),
        ) {
            Ok(res) => res,
            Err(_) => return RootsResult::NonUnivariate,
        };
        self.stats.eliminations += 1;
        let RootsResult::Roots(candidates) = self.isolator.isolate(&res, interval) else {
            return RootsResult::Nullified;
        };

        // The eliminated polynomial also vanishes at conjugate points.
        let on_curve = Constraint::new(kept, Relation::Eq);
        let mut roots = Vec::with_capacity(candidates.len());
        for r in candidates {
            let mut point = assignment.clone();
            point.insert(var, r.clone());
            if self.evaluate_constraint(&on_curve, &point).is_true() {
                roots.push(r);
            } else {
                trace!(root = %r, "dropped spurious root");
            }
        }
        RootsResult::Roots(roots)
    }
}

/// Interval enclosure of the reduced polynomial over the operand intervals.
fn enclosure(reduced: &Reduced) -> Interval {
    let intervals: FxHashMap<Var, Interval> = reduced
        .remaining
        .iter()
        .map(|(v, r)| (*v, r.interval()))
        .collect();
    Interval::evaluate(&reduced.poly, &intervals)
}

/// Decide `value ~ 0` for a root `value` of `res` inside `bound`, using
/// bounds on the positive and negative roots of `res`.
fn root_bound_verdict(res: &UPoly, bound: &Interval, relation: Relation) -> Option<Tribool> {
    let positive_lower = lagrange_positive_lower_bound(res);
    let negative_upper = lagrange_negative_upper_bound(res);
    let mut signs = Vec::with_capacity(3);
    if res.is_root(&BigRational::zero()) && bound.contains(&BigRational::zero()) {
        signs.push(Sign::Zero);
    }
    let below = Interval::new(BigRational::zero(), BoundType::Infty, negative_upper.clone(), BoundType::Weak);
    if !negative_upper.is_zero() && bound.intersects(&below) {
        signs.push(Sign::Negative);
    }
    let above = Interval::new(positive_lower.clone(), BoundType::Weak, BigRational::zero(), BoundType::Infty);
    if !positive_lower.is_zero() && bound.intersects(&above) {
        signs.push(Sign::Positive);
    }
    let first = relation.evaluate(*signs.first()?);
    signs
        .iter()
        .all(|s| relation.evaluate(*s) == first)
        .then_some(Tribool::from(first))
}

/// Sign of `p` at an assignment of all its variables.
pub(crate) fn sign_at(p: &Polynomial, assignment: &[(Var, RealAlgebraicNumber)]) -> Option<Sign> {
    let assignment: Assignment = assignment.iter().cloned().collect();
    Evaluator::default_config()
        .try_evaluate(p, &assignment)
        .ok()
        .map(|value| value.sign())
}

/// Real roots of `p` in `var` at `assignment` with the default evaluator.
pub fn real_roots_multivariate(
    p: &Polynomial,
    var: Var,
    assignment: &Assignment,
    interval: &Interval,
) -> RootsResult {
    Evaluator::default_config().real_roots_multivariate(p, var, assignment, interval)
}

/// Value of `p` at `assignment` with the default evaluator.
pub fn evaluate(p: &Polynomial, assignment: &Assignment) -> Option<RealAlgebraicNumber> {
    Evaluator::default_config().evaluate(p, assignment)
}

/// Truth of `c` at `assignment` with the default evaluator.
pub fn evaluate_constraint(c: &Constraint, assignment: &Assignment) -> Tribool {
    Evaluator::default_config().evaluate_constraint(c, assignment)
}

/// Evaluates one polynomial while its variables are assigned one by one.
///
/// Rational values are substituted as soon as they are assigned.
#[derive(Debug)]
pub struct IncrementalEvaluator {
    poly: Polynomial,
    assignment: Assignment,
    evaluator: Evaluator,
}

impl IncrementalEvaluator {
    /// Start evaluating `p` with the default evaluator.
    pub fn new(p: Polynomial) -> Self {
        Self::with_evaluator(p, Evaluator::default_config())
    }

    /// Start evaluating `p` with a configured evaluator.
    pub fn with_evaluator(p: Polynomial, evaluator: Evaluator) -> Self {
        Self {
            poly: p,
            assignment: Assignment::new(),
            evaluator,
        }
    }

    /// Assign `value` to `var`.
    pub fn assign(&mut self, var: Var, value: RealAlgebraicNumber) {
        match value.value() {
            Some(q) => {
                self.poly = self.poly.eval_at(var, &q);
                self.assignment.remove(&var);
            }
            None => {
                self.assignment.insert(var, value);
            }
        }
    }

    /// The polynomial with all rational values substituted.
    pub fn polynomial(&self) -> &Polynomial {
        &self.poly
    }

    /// Is every variable of the polynomial assigned?
    pub fn has_value(&self) -> bool {
        self.poly.vars().iter().all(|v| self.assignment.contains_key(v))
    }

    /// The value, once every variable is assigned.
    pub fn value(&mut self) -> Option<RealAlgebraicNumber> {
        if !self.has_value() {
            return None;
        }
        self.evaluator.evaluate(&self.poly, &self.assignment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rational::{frac, rat};
    use crate::substitution::BuchbergerBackend;

    fn poly(terms: &[(i64, &[(Var, u32)])]) -> Polynomial {
        Polynomial::from_coeffs_int(terms)
    }

    fn sqrt(n: i64) -> RealAlgebraicNumber {
        RealAlgebraicNumber::from_root(
            &UnivariatePolynomial::from_coeffs_int(0, &[-n, 0, 1]),
            Interval::open(rat(0), rat(n)),
        )
    }

    fn assignment(values: &[(Var, RealAlgebraicNumber)]) -> Assignment {
        values.iter().cloned().collect()
    }

    fn x_plus_y() -> Polynomial {
        poly(&[(1, &[(0, 1)]), (1, &[(1, 1)])])
    }

    fn x_minus_y() -> Polynomial {
        poly(&[(1, &[(0, 1)]), (-1, &[(1, 1)])])
    }

    #[test]
    fn test_evaluate_rational_point() {
        let a = assignment(&[
            (0, RealAlgebraicNumber::from_rational(frac(1, 2))),
            (1, RealAlgebraicNumber::from_rational(rat(3))),
        ]);
        let value = evaluate(&x_plus_y(), &a).and_then(|v| v.value());
        assert_eq!(value, Some(frac(7, 2)));
    }

    #[test]
    fn test_same_number_difference_is_zero() {
        let s2 = sqrt(2);
        let a = assignment(&[(0, s2.clone()), (1, s2)]);
        let value = evaluate(&x_minus_y(), &a);
        assert_eq!(value.and_then(|v| v.value()), Some(rat(0)));
    }

    #[test]
    fn test_sum_of_square_roots() {
        let expected = poly(&[(1, &[(0, 4)]), (-10, &[(0, 2)]), (1, &[])]);
        for strategy in [
            SubstitutionStrategy::Resultant,
            SubstitutionStrategy::Groebner,
            SubstitutionStrategy::FieldExtension,
        ] {
            let mut evaluator = Evaluator::with_backend(
                EvaluatorConfig {
                    strategy,
                    ..EvaluatorConfig::default()
                },
                Box::new(BuchbergerBackend::default()),
            );
            let a = assignment(&[(0, sqrt(2)), (1, sqrt(3))]);
            let value = evaluator.evaluate(&x_plus_y(), &a).expect("value exists");
            assert!(!value.is_numeric());
            assert_eq!(value.defining_polynomial(0), expected, "strategy {}", strategy);
            assert!(value > frac(31, 10));
            assert!(value < frac(32, 10));
            assert_eq!(evaluator.stats().eliminations, 1);
        }
    }

    #[test]
    fn test_univariate_shortcut() {
        let a = assignment(&[(0, sqrt(2))]);
        let p = poly(&[(1, &[(0, 2)]), (-2, &[])]);
        assert_eq!(evaluate(&p, &a).and_then(|v| v.value()), Some(rat(0)));
        let q = poly(&[(1, &[(0, 2)])]);
        let mut evaluator = Evaluator::default_config();
        let value = evaluator.evaluate(&q, &a).expect("value exists");
        assert_eq!(value.value(), Some(rat(2)));
    }

    #[test]
    fn test_unassigned_variable() {
        let a = assignment(&[(0, sqrt(2))]);
        let mut evaluator = Evaluator::default_config();
        assert_eq!(
            evaluator.try_evaluate(&x_plus_y(), &a).err(),
            Some(RanError::UnassignedVariable(1))
        );
        let c = Constraint::new(x_plus_y(), Relation::Greater);
        assert_eq!(evaluator.evaluate_constraint(&c, &a), Tribool::Unknown);
    }

    #[test]
    fn test_constraint_on_sqrt2() {
        let a = assignment(&[(0, sqrt(2))]);
        let p = poly(&[(1, &[(0, 2)]), (-2, &[])]);
        assert_eq!(evaluate_constraint(&Constraint::new(p.clone(), Relation::Eq), &a), Tribool::True);
        assert_eq!(evaluate_constraint(&Constraint::new(p.clone(), Relation::Less), &a), Tribool::False);
        assert_eq!(evaluate_constraint(&Constraint::new(p, Relation::Geq), &a), Tribool::True);
    }

    #[test]
    fn test_constraint_by_intervals() {
        let a = assignment(&[(0, sqrt(2)), (1, sqrt(3))]);
        let mut evaluator = Evaluator::default_config();
        let c = Constraint::new(x_plus_y() - Polynomial::constant(rat(3)), Relation::Greater);
        assert_eq!(evaluator.evaluate_constraint(&c, &a), Tribool::True);
        assert_eq!(evaluator.stats().interval_decisions, 1);
        assert_eq!(evaluator.stats().eliminations, 0);
    }

    #[test]
    fn test_constraint_by_root_bounds() {
        let s2 = sqrt(2);
        let a = assignment(&[(0, s2.clone()), (1, s2.deep_clone())]);
        let c = Constraint::new(x_minus_y(), Relation::Eq);

        let mut evaluator = Evaluator::default_config();
        assert_eq!(evaluator.evaluate_constraint(&c, &a), Tribool::True);
        assert_eq!(evaluator.stats().root_bound_decisions, 1);

        let mut evaluator = Evaluator::new(EvaluatorConfig {
            use_root_bounds: false,
            ..EvaluatorConfig::default()
        });
        assert_eq!(evaluator.evaluate_constraint(&c, &a), Tribool::True);
        assert_eq!(evaluator.stats().root_bound_decisions, 0);
        let neq = Constraint::new(x_minus_y(), Relation::Neq);
        assert_eq!(evaluator.evaluate_constraint(&neq, &a), Tribool::False);
    }

    #[test]
    fn test_real_roots_multivariate() {
        // y^2 - x
        let p = poly(&[(1, &[(1, 2)]), (-1, &[(0, 1)])]);
        let a = assignment(&[(0, RealAlgebraicNumber::from_rational(rat(2)))]);
        let roots = real_roots_multivariate(&p, 1, &a, &Interval::unbounded());
        assert_eq!(roots.roots().map(|r| r.len()), Some(2));

        // x = sqrt(2): roots are the fourth roots of 2
        let a = assignment(&[(0, sqrt(2))]);
        let roots = real_roots_multivariate(&p, 1, &a, &Interval::unbounded())
            .into_roots()
            .unwrap_or_default();
        assert_eq!(roots.len(), 2);
        assert!(roots[1] > frac(118, 100) && roots[1] < frac(119, 100));
        assert!(roots[0] < frac(-118, 100));
    }

    #[test]
    fn test_real_roots_drops_conjugates() {
        // y - x with x = sqrt(2): only sqrt(2), not -sqrt(2)
        let p = poly(&[(1, &[(1, 1)]), (-1, &[(0, 1)])]);
        let a = assignment(&[(0, sqrt(2))]);
        let roots = real_roots_multivariate(&p, 1, &a, &Interval::unbounded())
            .into_roots()
            .unwrap_or_default();
        assert_eq!(roots.len(), 1);
        assert!(roots[0] == sqrt(2));
    }

    #[test]
    fn test_real_roots_nullified_and_non_univariate() {
        // (x^2 - 2) z vanishes for every z at x = sqrt(2)
        let p = poly(&[(1, &[(0, 2), (2, 1)]), (-2, &[(2, 1)])]);
        let a = assignment(&[(0, sqrt(2))]);
        assert!(real_roots_multivariate(&p, 2, &a, &Interval::unbounded()).is_nullified());
        let q = poly(&[(1, &[(0, 1), (1, 1), (2, 1)])]);
        assert!(real_roots_multivariate(&q, 2, &a, &Interval::unbounded()).is_non_univariate());
    }

    #[test]
    fn test_incremental_evaluator() {
        let mut incremental = IncrementalEvaluator::new(x_plus_y());
        assert!(!incremental.has_value());
        assert!(incremental.value().is_none());
        incremental.assign(1, RealAlgebraicNumber::from_rational(rat(1)));
        assert_eq!(incremental.polynomial(), &poly(&[(1, &[(0, 1)]), (1, &[])]));
        incremental.assign(0, sqrt(2));
        assert!(incremental.has_value());
        let value = incremental.value().expect("fully assigned");
        assert!(value > frac(24, 10) && value < frac(25, 10));
    }

    #[test]
    fn test_stats_reset() {
        let mut evaluator = Evaluator::default_config();
        let a = assignment(&[(0, sqrt(2)), (1, sqrt(3))]);
        evaluator.evaluate(&x_plus_y(), &a);
        assert_eq!(evaluator.stats().evaluations, 1);
        evaluator.reset_stats();
        assert_eq!(evaluator.stats().evaluations, 0);
    }
}
