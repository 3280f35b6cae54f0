//! Gröbner Basis Computation
//!
//! Buchberger's algorithm over the rationals, used to eliminate the
//! algebraic variables of an assignment from a polynomial system.
//!
//! ## Algorithms
//!
//! - **Buchberger** with a sugar-ordered pair queue
//! - **Product criterion** (Buchberger's first criterion): pairs with coprime
//!   leading monomials reduce to zero and are skipped
//! - **Reduced basis**: minimalization followed by inter-reduction
//! - **Elimination**: lex order with the kept variable least significant
//!
//! ## References
//!
//! - Buchberger, "Ein Algorithmus zum Auffinden der Basiselemente des
//!   Restklassenringes nach einem nulldimensionalen Polynomideal", 1965
//! - Giovini et al., "One sugar cube, please", ISSAC 1991

use crate::polynomial::{Monomial, MonomialOrder, Polynomial, Term, Var};
use num_rational::BigRational;
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::{debug, trace};

/// Critical pair for S-polynomial computation.
#[derive(Debug, Clone)]
struct CriticalPair {
    i: usize,
    j: usize,
    degree: u32,
    sugar: u32,
}

impl Ord for CriticalPair {
    fn cmp(&self, other: &Self) -> Ordering {
        // Lower sugar first, then lower degree, then older pairs.
        other
            .sugar
            .cmp(&self.sugar)
            .then_with(|| other.degree.cmp(&self.degree))
            .then_with(|| other.j.cmp(&self.j))
            .then_with(|| other.i.cmp(&self.i))
    }
}

impl PartialOrd for CriticalPair {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for CriticalPair {
    fn eq(&self, other: &Self) -> bool {
        self.i == other.i && self.j == other.j
    }
}

impl Eq for CriticalPair {}

/// Statistics for Buchberger's algorithm.
#[derive(Debug, Clone, Default)]
pub struct BuchbergerStats {
    /// S-polynomials computed
    pub s_polynomials_computed: u64,
    /// S-polynomials that reduced to zero
    pub zero_reductions: u64,
    /// Pairs skipped by the product criterion
    pub pairs_eliminated_product: u64,
    /// Polynomials added to the basis
    pub polynomials_added: u64,
    /// Single reduction steps
    pub reduction_steps: u64,
}

/// Configuration for Buchberger's algorithm.
#[derive(Debug, Clone)]
pub struct BuchbergerConfig {
    /// Enable the product criterion
    pub use_product_criterion: bool,
    /// Select pairs by sugar degree instead of plain lcm degree
    pub use_sugar_strategy: bool,
    /// Give up after this many S-polynomials
    pub max_s_polynomials: Option<u64>,
}

impl Default for BuchbergerConfig {
    fn default() -> Self {
        Self {
            use_product_criterion: true,
            use_sugar_strategy: true,
            max_s_polynomials: None,
        }
    }
}

/// Buchberger's algorithm.
#[derive(Debug, Default)]
pub struct Buchberger {
    config: BuchbergerConfig,
    stats: BuchbergerStats,
}

impl Buchberger {
    /// Create a new Gröbner basis engine.
    pub fn new(config: BuchbergerConfig) -> Self {
        Self {
            config,
            stats: BuchbergerStats::default(),
        }
    }

    /// Create with the default configuration.
    pub fn default_config() -> Self {
        Self::new(BuchbergerConfig::default())
    }

    /// Reduced Gröbner basis of the ideal generated by `generators`.
    ///
    /// Returns `None` if the configured S-polynomial limit is hit.
    pub fn compute_basis(
        &mut self,
        generators: &[Polynomial],
        order: MonomialOrder,
    ) -> Option<Vec<Polynomial>> {
        let mut basis: Vec<Polynomial> = generators
            .iter()
            .filter(|p| !p.is_zero())
            .map(|p| monic(&p.reorder(order)))
            .collect();
        let mut sugar: Vec<u32> = basis.iter().map(Polynomial::total_degree).collect();
        let mut pairs = BinaryHeap::new();
        for j in 0..basis.len() {
            for i in 0..j {
                self.push_pair(&mut pairs, &basis, &sugar, i, j);
            }
        }

        let mut computed = 0u64;
        while let Some(pair) = pairs.pop() {
            if let Some(limit) = self.config.max_s_polynomials {
                if computed >= limit {
                    debug!(limit, "Gröbner basis computation aborted");
                    return None;
                }
            }
            computed += 1;
            self.stats.s_polynomials_computed += 1;

            let s = s_polynomial(&basis[pair.i], &basis[pair.j]);
            let r = self.reduce_counted(&s, &basis);
            if r.is_zero() {
                self.stats.zero_reductions += 1;
                continue;
            }
            let r = monic(&r);
            if r.is_constant() {
                trace!("ideal is trivial");
                return Some(vec![Polynomial::from_terms(
                    [Term::constant(BigRational::one())],
                    order,
                )]);
            }
            basis.push(r);
            sugar.push(pair.sugar);
            self.stats.polynomials_added += 1;
            let new = basis.len() - 1;
            for i in 0..new {
                self.push_pair(&mut pairs, &basis, &sugar, i, new);
            }
        }

        Some(self.reduce_basis(basis))
    }

    fn push_pair(
        &mut self,
        pairs: &mut BinaryHeap<CriticalPair>,
        basis: &[Polynomial],
        sugar: &[u32],
        i: usize,
        j: usize,
    ) {
        let (Some(lm_i), Some(lm_j)) = (basis[i].leading_monomial(), basis[j].leading_monomial())
        else {
            return;
        };
        if self.config.use_product_criterion && lm_i.is_coprime(lm_j) {
            self.stats.pairs_eliminated_product += 1;
            return;
        }
        let lcm = lm_i.lcm(lm_j);
        let degree = lcm.total_degree();
        let pair_sugar = if self.config.use_sugar_strategy {
            let si = sugar[i] + degree - lm_i.total_degree();
            let sj = sugar[j] + degree - lm_j.total_degree();
            si.max(sj)
        } else {
            degree
        };
        pairs.push(CriticalPair {
            i,
            j,
            degree,
            sugar: pair_sugar,
        });
    }

    fn reduce_counted(&mut self, p: &Polynomial, basis: &[Polynomial]) -> Polynomial {
        let (r, steps) = reduce_with_steps(p, basis);
        self.stats.reduction_steps += steps;
        r
    }

    /// Minimalize and inter-reduce a Gröbner basis.
    fn reduce_basis(&mut self, mut basis: Vec<Polynomial>) -> Vec<Polynomial> {
        // Drop elements whose leading monomial is divisible by another one.
        let mut i = 0;
        while i < basis.len() {
            let redundant = basis.iter().enumerate().any(|(j, g)| {
                j != i
                    && match (basis[i].leading_monomial(), g.leading_monomial()) {
                        (Some(a), Some(b)) => a.div(b).is_some() && (a != b || j < i),
                        _ => false,
                    }
            });
            if redundant {
                basis.remove(i);
            } else {
                i += 1;
            }
        }
        for i in 0..basis.len() {
            let others: Vec<Polynomial> = basis
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, g)| g.clone())
                .collect();
            let r = self.reduce_counted(&basis[i], &others);
            basis[i] = monic(&r);
        }
        basis.sort_by(|a, b| match (a.leading_monomial(), b.leading_monomial()) {
            (Some(x), Some(y)) => a.order().compare(x, y),
            _ => Ordering::Equal,
        });
        basis
    }

    /// Get statistics.
    pub fn stats(&self) -> &BuchbergerStats {
        &self.stats
    }

    /// Reset statistics.
    pub fn reset_stats(&mut self) {
        self.stats = BuchbergerStats::default();
    }
}

fn monic(p: &Polynomial) -> Polynomial {
    let lc = p.leading_coeff();
    if lc.is_zero() || lc.is_one() {
        return p.clone();
    }
    p.scale(&lc.recip())
}

/// S-polynomial `lcm/lt(f) * f - lcm/lt(g) * g`, in the order of `f`.
pub fn s_polynomial(f: &Polynomial, g: &Polynomial) -> Polynomial {
    let g = g.reorder(f.order());
    let (Some(lt_f), Some(lt_g)) = (f.leading_term(), g.leading_term()) else {
        return Polynomial::from_terms([], f.order());
    };
    let lcm = lt_f.monomial.lcm(&lt_g.monomial);
    let (Some(mf), Some(mg)) = (lcm.div(&lt_f.monomial), lcm.div(&lt_g.monomial)) else {
        return Polynomial::from_terms([], f.order());
    };
    let a = f.mul_term(&lt_f.coeff.recip(), &mf);
    let b = g.mul_term(&lt_g.coeff.recip(), &mg);
    Polynomial::sub(&a, &b)
}

fn reduce_with_steps(p: &Polynomial, basis: &[Polynomial]) -> (Polynomial, u64) {
    let order = p.order();
    let basis: Vec<Polynomial> = basis.iter().map(|g| g.reorder(order)).collect();
    let mut p = p.clone();
    let mut remainder = Vec::new();
    let mut steps = 0;
    while let Some(lt) = p.leading_term().cloned() {
        let reducer = basis.iter().find_map(|g| {
            let lead = g.leading_term()?;
            let m: Monomial = lt.monomial.div(&lead.monomial)?;
            Some((g, &lt.coeff / &lead.coeff, m))
        });
        match reducer {
            Some((g, c, m)) => {
                p = Polynomial::sub(&p, &g.mul_term(&c, &m));
                steps += 1;
            }
            None => {
                p = Polynomial::sub(&p, &Polynomial::from_terms([lt.clone()], order));
                remainder.push(lt);
            }
        }
    }
    (Polynomial::from_terms(remainder, order), steps)
}

/// Normal form of `p` with respect to `basis`: every term is reduced.
pub fn reduce(p: &Polynomial, basis: &[Polynomial]) -> Polynomial {
    reduce_with_steps(p, basis).0
}

/// Reduced Gröbner basis with the default engine.
pub fn grobner_basis(polys: &[Polynomial], order: MonomialOrder) -> Vec<Polynomial> {
    Buchberger::default_config()
        .compute_basis(polys, order)
        .unwrap_or_default()
}

/// Is `p` in the ideal generated by `polys`?
pub fn ideal_membership(p: &Polynomial, polys: &[Polynomial]) -> bool {
    let basis = grobner_basis(polys, MonomialOrder::GRevLex);
    reduce(&p.reorder(MonomialOrder::GRevLex), &basis).is_zero()
}

/// Generators of the elimination ideal `<polys> ∩ Q[keep]`, found with a
/// lex basis in which `keep` is the least significant variable.
pub fn eliminate_all_but(
    engine: &mut Buchberger,
    polys: &[Polynomial],
    keep: Var,
) -> Option<Vec<Polynomial>> {
    // Lex compares smaller indices first; move `keep` past every other variable.
    let top = polys
        .iter()
        .flat_map(Polynomial::vars)
        .filter(|&v| v != keep)
        .max()
        .map_or(keep, |v| v.max(keep));
    let renamed = top.checked_add(1)?;
    let system: Vec<Polynomial> = polys.iter().map(|p| p.rename_var(keep, renamed)).collect();
    let basis = engine.compute_basis(&system, MonomialOrder::Lex)?;
    Some(
        basis
            .into_iter()
            .filter(|g| !g.is_number() && g.vars() == [renamed])
            .map(|g| g.rename_var(renamed, keep))
            .collect(),
    )
}
