//! Real root isolation.
//!
//! Produces the real roots of a univariate polynomial inside a search
//! interval as sorted [`RealAlgebraicNumber`]s. Rational roots come back as
//! numeric numbers; every other root carries an isolating interval.
//!
//! ## Algorithms
//!
//! - **Closed forms** for degree at most two, bracketing an inexact square
//!   root of the discriminant
//! - **Bisection** driven by Sturm sequences (exact) or Descartes' rule
//! - **Seeding** of the bisection queue with floating-point approximations
//!   of the roots (companion matrix eigenvalues)
//!
//! ## References
//!
//! - "Algorithms in Real Algebraic Geometry" (Basu et al., 2006)
//! - Z3's `math/polynomial/algebraic_numbers.cpp`

use crate::approximation::rational_approximations;
use crate::interval::{BoundType, Interval};
use crate::polynomial::root_bounds::lagrange_bound;
use crate::polynomial::root_counting::{count_real_roots, descartes_bound, sturm_sequence};
use crate::polynomial::UnivariatePolynomial;
use crate::ran::RealAlgebraicNumber;
use crate::rational::{self, rat};
use num_rational::BigRational;
use num_traits::{Signed, Zero};
use tracing::{debug, trace};

type UPoly = UnivariatePolynomial<BigRational>;

/// Outcome of a root query.
#[derive(Debug, Clone)]
pub enum RootsResult {
    /// The polynomial vanished identically, so every value is a root.
    Nullified,
    /// Elimination left more than one variable.
    NonUnivariate,
    /// The real roots inside the search interval, ascending.
    Roots(Vec<RealAlgebraicNumber>),
}

impl RootsResult {
    /// Did the polynomial vanish identically?
    pub fn is_nullified(&self) -> bool {
        matches!(self, RootsResult::Nullified)
    }

    /// Did elimination fail to produce a univariate polynomial?
    pub fn is_non_univariate(&self) -> bool {
        matches!(self, RootsResult::NonUnivariate)
    }

    /// The roots, if the query produced a root list.
    pub fn roots(&self) -> Option<&[RealAlgebraicNumber]> {
        match self {
            RootsResult::Roots(roots) => Some(roots),
            _ => None,
        }
    }

    /// Take the root list.
    pub fn into_roots(self) -> Option<Vec<RealAlgebraicNumber>> {
        match self {
            RootsResult::Roots(roots) => Some(roots),
            _ => None,
        }
    }
}

/// How to count roots during bisection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RootCounting {
    /// Exact counts from one Sturm sequence.
    #[default]
    Sturm,
    /// Descartes' rule of signs after a Möbius transform per interval.
    Descartes,
}

/// Configuration for root isolation.
#[derive(Debug, Clone)]
pub struct IsolationConfig {
    /// Seed bisection with floating-point root approximations.
    pub seed_with_approximation: bool,
    /// Root counting method.
    pub counting: RootCounting,
    /// Decimal digits kept from each approximation.
    pub approximation_precision: u32,
}

impl Default for IsolationConfig {
    fn default() -> Self {
        Self {
            seed_with_approximation: true,
            counting: RootCounting::Sturm,
            approximation_precision: 3,
        }
    }
}

/// Statistics for root isolation.
#[derive(Debug, Clone, Default)]
pub struct IsolationStats {
    /// Isolation calls.
    pub isolations: u64,
    /// Polynomials of degree at most two solved in closed form.
    pub trivial_solves: u64,
    /// Sturm sequences computed.
    pub sturm_sequences: u64,
    /// Intervals taken from the bisection queue.
    pub bisection_steps: u64,
    /// Calls seeded by approximations.
    pub approximation_seeds: u64,
    /// Roots reported.
    pub roots_found: u64,
}

/// Root isolator.
#[derive(Debug, Default)]
pub struct RootIsolator {
    config: IsolationConfig,
    stats: IsolationStats,
}

impl RootIsolator {
    /// Create a new root isolator.
    pub fn new(config: IsolationConfig) -> Self {
        Self {
            config,
            stats: IsolationStats::default(),
        }
    }

    /// Create with default configuration.
    pub fn default_config() -> Self {
        Self::new(IsolationConfig::default())
    }

    /// The configuration.
    pub fn config(&self) -> &IsolationConfig {
        &self.config
    }

    /// Get statistics.
    pub fn stats(&self) -> &IsolationStats {
        &self.stats
    }

    /// Reset statistics.
    pub fn reset_stats(&mut self) {
        self.stats = IsolationStats::default();
    }

    /// All real roots of `p` inside `interval`, ascending.
    pub fn isolate(&mut self, p: &UPoly, interval: &Interval) -> RootsResult {
        self.stats.isolations += 1;
        if p.is_zero() {
            return RootsResult::Nullified;
        }
        let mut roots = Vec::new();
        let mut p = p.square_free_part();
        if p.is_constant() {
            return RootsResult::Roots(roots);
        }

        let (stripped, zeros) = p.strip_zero_roots();
        if zeros > 0 {
            if interval.contains(&BigRational::zero()) {
                roots.push(RealAlgebraicNumber::zero());
            }
            p = stripped;
        }

        let mut search = interval.clone();
        loop {
            if p.degree() <= 2 {
                self.solve_trivial(&p, &search, &mut roots);
                return self.finish(roots);
            }
            let bound = lagrange_bound(&p);
            search = search.intersect(&Interval::closed(-bound.clone(), bound));
            if search.is_empty() {
                return self.finish(roots);
            }
            if !self.divide_endpoint_roots(&mut p, &search, &mut roots) {
                break;
            }
        }
        if search.is_point() {
            return self.finish(roots);
        }

        let search = Interval::open(search.lower().clone(), search.upper().clone());
        let mut queue = self.seed_queue(&mut p, &search, &mut roots);
        self.bisect(&mut p, &mut queue, &mut roots);
        self.finish(roots)
    }

    fn finish(&mut self, mut roots: Vec<RealAlgebraicNumber>) -> RootsResult {
        roots.sort();
        self.stats.roots_found += roots.len() as u64;
        debug!(roots = roots.len(), "isolated real roots");
        RootsResult::Roots(roots)
    }

    /// Record the roots at the weak endpoints of a bounded `search` and
    /// divide out roots at any finite endpoint. Returns whether `p` changed.
    fn divide_endpoint_roots(
        &mut self,
        p: &mut UPoly,
        search: &Interval,
        roots: &mut Vec<RealAlgebraicNumber>,
    ) -> bool {
        let mut endpoints = vec![(search.lower().clone(), search.lower_type())];
        if !search.is_point() {
            endpoints.push((search.upper().clone(), search.upper_type()));
        }
        let mut changed = false;
        for (e, kind) in endpoints {
            if kind == BoundType::Infty || !p.is_root(&e) {
                continue;
            }
            if kind == BoundType::Weak {
                roots.push(RealAlgebraicNumber::from_rational(e.clone()));
            }
            *p = p.divide_by_root(&e);
            changed = true;
        }
        changed
    }

    fn solve_trivial(&mut self, p: &UPoly, search: &Interval, roots: &mut Vec<RealAlgebraicNumber>) {
        self.stats.trivial_solves += 1;
        match p.degree() {
            1 => {
                let r = -p.coeff(0) / p.coeff(1);
                if search.contains(&r) {
                    roots.push(RealAlgebraicNumber::from_rational(r));
                }
            }
            2 => {
                let a = p.coeff(2);
                let b = p.coeff(1);
                let c = p.coeff(0);
                let disc = &b * &b - rat(4) * &a * &c;
                if disc.is_negative() {
                    return;
                }
                let two_a = rat(2) * &a;
                let (lo, hi) = rational::sqrt_pair(&disc);
                if lo == hi {
                    for r in [(-&b - &lo) / &two_a, (-&b + &lo) / &two_a] {
                        if search.contains(&r) {
                            roots.push(RealAlgebraicNumber::from_rational(r));
                        }
                    }
                    return;
                }
                for (x, y) in [(-&hi, -&lo), (lo, hi)] {
                    let (x, y) = ((-&b + x) / &two_a, (-&b + y) / &two_a);
                    let enclosure = if x < y { Interval::open(x, y) } else { Interval::open(y, x) };
                    let root = RealAlgebraicNumber::from_root(p, enclosure);
                    if root.contained_in(search) {
                        roots.push(root);
                    }
                }
            }
            _ => {}
        }
    }

    /// Split the open `search` interval at points between consecutive root
    /// approximations. Exact rational roots met on the way are recorded and
    /// divided out of `p`.
    fn seed_queue(
        &mut self,
        p: &mut UPoly,
        search: &Interval,
        roots: &mut Vec<RealAlgebraicNumber>,
    ) -> Vec<Interval> {
        if !self.config.seed_with_approximation {
            return vec![search.clone()];
        }
        let Some(approximations) = rational_approximations(p, self.config.approximation_precision) else {
            trace!("approximation failed, seeding with the search interval");
            return vec![search.clone()];
        };
        self.stats.approximation_seeds += 1;
        let approximations: Vec<BigRational> =
            approximations.into_iter().filter(|r| search.contains(r)).collect();
        for r in &approximations {
            if p.is_root(r) {
                roots.push(RealAlgebraicNumber::from_rational(r.clone()));
                *p = p.divide_by_root(r);
            }
        }

        let mut cuts = vec![search.lower().clone()];
        for pair in approximations.windows(2) {
            let cut = Interval::open(pair[0].clone(), pair[1].clone()).sample(false);
            if p.is_root(&cut) {
                roots.push(RealAlgebraicNumber::from_rational(cut.clone()));
                *p = p.divide_by_root(&cut);
            }
            cuts.push(cut);
        }
        cuts.push(search.upper().clone());
        trace!(cuts = cuts.len(), "seeded bisection queue");
        cuts.windows(2)
            .map(|w| Interval::open(w[0].clone(), w[1].clone()))
            .collect()
    }

    fn count(&mut self, p: &UPoly, sturm: &[UPoly], interval: &Interval) -> usize {
        match self.config.counting {
            RootCounting::Sturm => count_real_roots(sturm, interval).max(0) as usize,
            RootCounting::Descartes => descartes_bound(p, interval.lower(), interval.upper()),
        }
    }

    fn bisect(&mut self, p: &mut UPoly, queue: &mut Vec<Interval>, roots: &mut Vec<RealAlgebraicNumber>) {
        if p.is_constant() {
            return;
        }
        let mut sturm = sturm_sequence(p);
        self.stats.sturm_sequences += 1;
        while let Some(interval) = queue.pop() {
            self.stats.bisection_steps += 1;
            match self.count(p, &sturm, &interval) {
                0 => {}
                1 => roots.push(RealAlgebraicNumber::from_root(p, interval)),
                _ => {
                    let pivot = interval.sample(false);
                    if p.is_root(&pivot) {
                        roots.push(RealAlgebraicNumber::from_rational(pivot.clone()));
                        *p = p.divide_by_root(&pivot);
                        sturm = sturm_sequence(p);
                        self.stats.sturm_sequences += 1;
                    }
                    queue.push(Interval::open(interval.lower().clone(), pivot.clone()));
                    queue.push(Interval::open(pivot, interval.upper().clone()));
                }
            }
        }
    }
}

/// Real roots of `p` inside `interval` with the default isolator.
pub fn real_roots(p: &UPoly, interval: &Interval) -> RootsResult {
    RootIsolator::default_config().isolate(p, interval)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rational::frac;
    use crate::sign::Sign;

    fn upoly(coeffs: &[i64]) -> UPoly {
        UnivariatePolynomial::from_coeffs_int(0, coeffs)
    }

    fn roots_of(coeffs: &[i64], interval: Interval) -> Vec<RealAlgebraicNumber> {
        real_roots(&upoly(coeffs), &interval).into_roots().unwrap_or_default()
    }

    #[test]
    fn test_zero_and_constant() {
        assert!(real_roots(&upoly(&[]), &Interval::unbounded()).is_nullified());
        let r = real_roots(&upoly(&[5]), &Interval::unbounded());
        assert_eq!(r.roots().map(|r| r.len()), Some(0));
    }

    #[test]
    fn test_sqrt2_positive() {
        let roots = roots_of(&[-2, 0, 1], Interval::open(rat(1), rat(2)));
        assert_eq!(roots.len(), 1);
        let r = &roots[0];
        assert!(*r > frac(7, 5));
        assert!(*r < frac(3, 2));
        assert_eq!(r.sgn(&upoly(&[-2, 0, 1])), Sign::Zero);
    }

    #[test]
    fn test_sqrt2_negative() {
        let neg = roots_of(&[-2, 0, 1], Interval::open(rat(-2), rat(-1)));
        let pos = roots_of(&[-2, 0, 1], Interval::open(rat(1), rat(2)));
        assert_eq!(neg.len(), 1);
        assert!(neg[0] < pos[0]);
    }

    #[test]
    fn test_rational_roots() {
        // (x - 1)(x - 2)(x - 3)(2x + 1)
        let roots = roots_of(&[-6, -1, 16, -11, 2], Interval::unbounded());
        let values: Vec<_> = roots.iter().filter_map(|r| r.value()).collect();
        assert_eq!(values, vec![frac(-1, 2), rat(1), rat(2), rat(3)]);
    }

    #[test]
    fn test_zero_root_and_interval_filter() {
        // x^3 - x
        let all = roots_of(&[0, -1, 0, 1], Interval::unbounded());
        assert_eq!(all.len(), 3);
        let nonneg = roots_of(&[0, -1, 0, 1], Interval::closed(rat(0), rat(5)));
        let values: Vec<_> = nonneg.iter().filter_map(|r| r.value()).collect();
        assert_eq!(values, vec![rat(0), rat(1)]);
        let open = roots_of(&[0, -1, 0, 1], Interval::open(rat(0), rat(1)));
        assert!(open.is_empty());
    }

    #[test]
    fn test_square_free_part_taken() {
        // (x^2 - 2)^2
        let roots = roots_of(&[4, 0, -4, 0, 1], Interval::unbounded());
        assert_eq!(roots.len(), 2);
        assert!(roots[0] < roots[1]);
    }

    #[test]
    fn test_irrational_cubic_roots() {
        // x^3 - 3x + 1 has three irrational roots in (-2, -1), (0, 1), (1, 2)
        for counting in [RootCounting::Sturm, RootCounting::Descartes] {
            for seed in [true, false] {
                let mut isolator = RootIsolator::new(IsolationConfig {
                    seed_with_approximation: seed,
                    counting,
                    ..IsolationConfig::default()
                });
                let roots = isolator
                    .isolate(&upoly(&[1, -3, 0, 1]), &Interval::unbounded())
                    .into_roots()
                    .unwrap_or_default();
                assert_eq!(roots.len(), 3);
                assert!(roots[0] < rat(-1) && roots[0] > rat(-2));
                assert!(roots[1] > rat(0) && roots[1] < rat(1));
                assert!(roots[2] > rat(1) && roots[2] < rat(2));
                assert!(roots.iter().all(|r| !r.is_numeric()));
                assert!(isolator.stats().bisection_steps > 0);
            }
        }
    }

    #[test]
    fn test_quadratic_irrational_pair() {
        // x^2 - x - 1: golden ratio and its conjugate
        let roots = roots_of(&[-1, -1, 1], Interval::unbounded());
        assert_eq!(roots.len(), 2);
        assert!(roots[0] < rat(0) && roots[0] > rat(-1));
        assert!(roots[1] > frac(8, 5) && roots[1] < frac(17, 10));
        let only_positive = roots_of(&[-1, -1, 1], Interval::open(rat(0), rat(10)));
        assert_eq!(only_positive.len(), 1);
    }

    #[test]
    fn test_endpoint_roots() {
        // (x - 1)(x - 2)(x - 4)(x^2 - 3) over [1, 2): 1 and sqrt(3)
        let p = upoly(&[-8, 14, -7, 1]).mul(&upoly(&[-3, 0, 1]));
        let roots = real_roots(
            &p,
            &Interval::new(rat(1), BoundType::Weak, rat(2), BoundType::Strict),
        )
        .into_roots()
        .unwrap_or_default();
        assert_eq!(roots.len(), 2);
        assert_eq!(roots[0].value(), Some(rat(1)));
        assert!(roots[1].is_root_of(&upoly(&[-3, 0, 1])));
    }

    #[test]
    fn test_stats() {
        let mut isolator = RootIsolator::default_config();
        isolator.isolate(&upoly(&[-2, 0, 1]), &Interval::unbounded());
        assert_eq!(isolator.stats().isolations, 1);
        assert_eq!(isolator.stats().trivial_solves, 1);
        assert_eq!(isolator.stats().roots_found, 2);
        isolator.reset_stats();
        assert_eq!(isolator.stats().roots_found, 0);
    }
}
