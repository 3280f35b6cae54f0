//! Polynomial Factorization over the Rationals.
//!
//! Splits a univariate polynomial into coprime square-free factors with
//! multiplicities. Every linear factor over Q is found, and so is every
//! split of a biquadratic quartic into two quadratics. Factors of degree at
//! most 3 are therefore irreducible; larger factors may still split further.
//!
//! ## Algorithms
//!
//! - **Yun's square-free decomposition**
//! - **Rational Root Theorem** on the integer-scaled polynomial
//! - **Biquadratic splitting**: `x^4 + b x^2 + c = (x^2 - r1)(x^2 - r2)` when
//!   the discriminant is a rational square
//!
//! ## References
//!
//! - Yun, "On square-free decomposition algorithms", SYMSAC 1976
//! - von zur Gathen, Gerhard, "Modern Computer Algebra", 3rd ed., Ch. 14

use super::UnivariatePolynomial;
use crate::rational;
use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use rustc_hash::FxHashMap;
use tracing::trace;

type UPoly = UnivariatePolynomial<BigRational>;

/// A polynomial factor with multiplicity.
#[derive(Debug, Clone, PartialEq)]
pub struct Factor {
    /// The monic factor.
    pub poly: UPoly,
    /// Multiplicity in the factored polynomial.
    pub multiplicity: u32,
}

/// Configuration for factorization.
#[derive(Debug, Clone)]
pub struct FactorizationConfig {
    /// Coefficients (after integer scaling) with more bits than this are not
    /// searched for rational roots.
    pub max_divisor_bits: u64,
    /// Cache results by coefficient vector.
    pub use_cache: bool,
}

impl Default for FactorizationConfig {
    fn default() -> Self {
        Self {
            max_divisor_bits: 40,
            use_cache: true,
        }
    }
}

/// Factorization statistics.
#[derive(Debug, Clone, Default)]
pub struct FactorizationStats {
    /// Number of factorizations performed
    pub factorizations: u64,
    /// Cache hits
    pub cache_hits: u64,
    /// Square-free decompositions
    pub square_free_decompositions: u64,
    /// Rational roots extracted
    pub rational_roots: u64,
    /// Quartics split into quadratics
    pub quadratic_splits: u64,
}

/// Polynomial factorization engine.
#[derive(Debug, Default)]
pub struct PolynomialFactorizer {
    config: FactorizationConfig,
    cache: FxHashMap<Vec<BigRational>, Vec<Factor>>,
    stats: FactorizationStats,
}

impl PolynomialFactorizer {
    /// Create a new polynomial factorizer.
    pub fn new(config: FactorizationConfig) -> Self {
        Self {
            config,
            cache: FxHashMap::default(),
            stats: FactorizationStats::default(),
        }
    }

    /// Create with the default configuration.
    pub fn default_config() -> Self {
        Self::new(FactorizationConfig::default())
    }

    /// Factor a non-constant polynomial into monic, pairwise coprime,
    /// square-free factors. Constants yield an empty list.
    pub fn factor(&mut self, p: &UPoly) -> Vec<Factor> {
        self.stats.factorizations += 1;
        if p.is_constant() {
            return Vec::new();
        }

        let key = p.normalized().coeffs().to_vec();
        if self.config.use_cache {
            if let Some(cached) = self.cache.get(&key) {
                self.stats.cache_hits += 1;
                return cached
                    .iter()
                    .map(|f| Factor {
                        poly: f.poly.replace_var(p.var()),
                        multiplicity: f.multiplicity,
                    })
                    .collect();
            }
        }

        self.stats.square_free_decompositions += 1;
        let mut factors = Vec::new();
        for (part, multiplicity) in square_free_decomposition(p) {
            for poly in self.split_square_free(&part) {
                factors.push(Factor { poly, multiplicity });
            }
        }
        trace!(poly = %p, factors = factors.len(), "factored");

        if self.config.use_cache {
            self.cache.insert(key, factors.clone());
        }
        factors
    }

    fn split_square_free(&mut self, p: &UPoly) -> Vec<UPoly> {
        let var = p.var();
        let mut result = Vec::new();
        let mut rest = p.clone();

        let (stripped, zeros) = rest.strip_zero_roots();
        if zeros > 0 {
            result.push(UPoly::monomial(var, BigRational::one(), 1));
            rest = stripped;
        }

        for root in rational_roots(&rest, self.config.max_divisor_bits) {
            self.stats.rational_roots += 1;
            rest = rest.divide_by_root(&root);
            result.push(UPoly::new(var, vec![-root, BigRational::one()]));
        }

        if rest.degree() == 4 {
            if let Some((a, b)) = split_biquadratic(&rest) {
                self.stats.quadratic_splits += 1;
                result.push(a);
                result.push(b);
                return result;
            }
        }
        if !rest.is_constant() {
            result.push(rest.normalized());
        }
        result
    }

    /// Get statistics.
    pub fn stats(&self) -> &FactorizationStats {
        &self.stats
    }

    /// Reset statistics.
    pub fn reset_stats(&mut self) {
        self.stats = FactorizationStats::default();
    }

    /// Drop all cached factorizations.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}

/// Factor with a throwaway factorizer.
pub fn factor(p: &UPoly) -> Vec<Factor> {
    PolynomialFactorizer::default_config().factor(p)
}

/// Yun's square-free decomposition: monic `(a_i, i)` with `p = c * prod a_i^i`,
/// omitting constant `a_i`.
pub fn square_free_decomposition(p: &UPoly) -> Vec<(UPoly, u32)> {
    let mut result = Vec::new();
    if p.is_constant() {
        return result;
    }
    let f = p.normalized();
    let df = f.derivative();
    let a0 = f.gcd(&df);
    let mut b = f.div_rem(&a0).0;
    let c = df.div_rem(&a0).0;
    let mut d = c.sub(&b.derivative());
    let mut i = 1;
    while !b.is_constant() {
        let a = b.gcd(&d);
        b = b.div_rem(&a).0;
        let c = d.div_rem(&a).0;
        d = c.sub(&b.derivative());
        if !a.is_constant() {
            result.push((a, i));
        }
        i += 1;
    }
    result
}

/// Coefficients scaled by the lcm of the denominators and divided by their
/// content, lowest degree first.
pub fn to_integer_coeffs(p: &UPoly) -> Vec<BigInt> {
    let lcm = p
        .coeffs()
        .iter()
        .fold(BigInt::one(), |acc, c| acc.lcm(c.denom()));
    let scaled: Vec<BigInt> = p
        .coeffs()
        .iter()
        .map(|c| (c * BigRational::from_integer(lcm.clone())).to_integer())
        .collect();
    let content = scaled.iter().fold(BigInt::zero(), |acc, c| acc.gcd(c));
    if content.is_zero() || content.is_one() {
        return scaled;
    }
    scaled.into_iter().map(|c| c / &content).collect()
}

fn divisors(n: &BigInt) -> Vec<BigInt> {
    let n = n.abs();
    let mut small = Vec::new();
    let mut large = Vec::new();
    let mut d = BigInt::one();
    while &d * &d <= n {
        if (&n % &d).is_zero() {
            let q = &n / &d;
            if q != d {
                large.push(q);
            }
            small.push(d.clone());
        }
        d += 1;
    }
    small.extend(large.into_iter().rev());
    small
}

/// Distinct non-zero rational roots of `p`, ascending. Empty when the
/// extreme coefficients exceed `max_bits` after integer scaling.
pub fn rational_roots(p: &UPoly, max_bits: u64) -> Vec<BigRational> {
    let (p, _) = p.strip_zero_roots();
    if p.is_constant() {
        return Vec::new();
    }
    let coeffs = to_integer_coeffs(&p);
    let (Some(a0), Some(an)) = (coeffs.first(), coeffs.last()) else {
        return Vec::new();
    };
    if a0.bits() > max_bits || an.bits() > max_bits {
        return Vec::new();
    }
    let mut roots = Vec::new();
    let mut rest = p.clone();
    for num in divisors(a0) {
        for den in divisors(an) {
            if !num.gcd(&den).is_one() {
                continue;
            }
            for candidate in [
                BigRational::new(num.clone(), den.clone()),
                BigRational::new(-num.clone(), den.clone()),
            ] {
                if rest.degree() > 0 && rest.is_root(&candidate) {
                    rest = rest.divide_by_root(&candidate);
                    roots.push(candidate);
                }
            }
        }
    }
    roots.sort();
    roots
}

/// `x^4 + b x^2 + c` split as `(x^2 - r1)(x^2 - r2)` with rational `r1, r2`.
fn split_biquadratic(p: &UPoly) -> Option<(UPoly, UPoly)> {
    let p = p.normalized();
    if !p.coeff(1).is_zero() || !p.coeff(3).is_zero() {
        return None;
    }
    let b = p.coeff(2);
    let c = p.coeff(0);
    let disc = &b * &b - BigRational::from_integer(BigInt::from(4)) * &c;
    if disc.is_negative() {
        return None;
    }
    let s = rational::exact_sqrt(&disc)?;
    let two = BigRational::from_integer(BigInt::from(2));
    let r1 = (-&b + &s) / &two;
    let r2 = (-&b - &s) / &two;
    let quad = |r: BigRational| UPoly::new(p.var(), vec![-r, BigRational::zero(), BigRational::one()]);
    Some((quad(r1), quad(r2)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rational::{frac, rat};

    fn upoly(coeffs: &[i64]) -> UPoly {
        UnivariatePolynomial::from_coeffs_int(0, coeffs)
    }

    fn product(factors: &[Factor]) -> UPoly {
        let mut result = upoly(&[1]);
        for f in factors {
            for _ in 0..f.multiplicity {
                result = result.mul(&f.poly);
            }
        }
        result
    }

    #[test]
    fn test_square_free_decomposition() {
        // (x - 1)^2 (x + 2)^3
        let p = upoly(&[-1, 1]).mul(&upoly(&[-1, 1])).mul(&upoly(&[2, 1]).mul(&upoly(&[2, 1])).mul(&upoly(&[2, 1])));
        let parts = square_free_decomposition(&p);
        assert_eq!(parts, vec![(upoly(&[-1, 1]), 2), (upoly(&[2, 1]), 3)]);
    }

    #[test]
    fn test_square_free_decomposition_of_square_free() {
        let p = upoly(&[-2, 0, 1]);
        assert_eq!(square_free_decomposition(&p), vec![(p.clone(), 1)]);
    }

    #[test]
    fn test_rational_roots() {
        // 6x^3 - 11x^2 + 6x - 1 = (2x - 1)(3x - 1)(x - 1)
        let p = upoly(&[-1, 6, -11, 6]);
        assert_eq!(rational_roots(&p, 64), vec![frac(1, 3), frac(1, 2), rat(1)]);
        assert!(rational_roots(&upoly(&[-2, 0, 1]), 64).is_empty());
    }

    #[test]
    fn test_to_integer_coeffs() {
        let p = UPoly::new(0, vec![frac(1, 2), frac(-3, 4)]);
        assert_eq!(to_integer_coeffs(&p), vec![BigInt::from(2), BigInt::from(-3)]);
    }

    #[test]
    fn test_factor_mixed() {
        // x (x - 1)^2 (x^2 - 2)
        let p = upoly(&[0, 1])
            .mul(&upoly(&[-1, 1]))
            .mul(&upoly(&[-1, 1]))
            .mul(&upoly(&[-2, 0, 1]));
        let mut factorizer = PolynomialFactorizer::default_config();
        let factors = factorizer.factor(&p);
        assert_eq!(factors.len(), 3);
        assert_eq!(product(&factors), p.normalized());
        assert!(factors.contains(&Factor { poly: upoly(&[-1, 1]), multiplicity: 2 }));
        assert!(factors.contains(&Factor { poly: upoly(&[-2, 0, 1]), multiplicity: 1 }));
    }

    #[test]
    fn test_factor_biquadratic() {
        // x^4 - 5x^2 + 6 = (x^2 - 2)(x^2 - 3)
        let factors = factor(&upoly(&[6, 0, -5, 0, 1]));
        assert_eq!(factors.len(), 2);
        // x^4 - 10x^2 + 1 is irreducible
        let factors = factor(&upoly(&[1, 0, -10, 0, 1]));
        assert_eq!(factors.len(), 1);
    }

    #[test]
    fn test_factor_cache() {
        let mut factorizer = PolynomialFactorizer::default_config();
        let p = upoly(&[-1, 0, 1]);
        let first = factorizer.factor(&p);
        let second = factorizer.factor(&p.replace_var(3));
        assert_eq!(factorizer.stats().cache_hits, 1);
        assert_eq!(first.len(), second.len());
        assert!(second.iter().all(|f| f.poly.var() == 3));
    }

    #[test]
    fn test_factor_constant() {
        assert!(factor(&upoly(&[5])).is_empty());
    }
}
