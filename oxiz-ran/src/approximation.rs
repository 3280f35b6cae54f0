//! Floating-point root approximation.
//!
//! The roots of a monic polynomial are the eigenvalues of its companion
//! matrix. The approximations are only used to seed the bisection queue of
//! root isolation; nothing downstream relies on their accuracy.

use crate::polynomial::UnivariatePolynomial;
use nalgebra::DMatrix;
use nalgebra::linalg::Schur;
use num_rational::BigRational;
use num_traits::ToPrimitive;
use tracing::trace;

/// Relative size of the imaginary part below which an eigenvalue counts as real.
const IMAGINARY_TOLERANCE: f64 = 1e-6;
/// Iteration cap for the Schur decomposition.
const MAX_SCHUR_ITERATIONS: usize = 200;

/// Approximate the real roots of `p` in floating point.
///
/// Returns `None` when a coefficient does not fit into an `f64` or the
/// eigenvalue iteration does not converge.
pub fn approximate_real_roots(p: &UnivariatePolynomial<BigRational>) -> Option<Vec<f64>> {
    let n = p.degree();
    if n == 0 {
        return Some(Vec::new());
    }
    let lc = p.lcoeff().to_f64()?;
    let coeffs = p
        .coeffs()
        .iter()
        .map(|c| c.to_f64().map(|c| c / lc))
        .collect::<Option<Vec<f64>>>()?;
    if coeffs.iter().any(|c| !c.is_finite()) {
        return None;
    }

    // Companion matrix: ones on the subdiagonal, -a_i in the last column.
    let mut companion = DMatrix::<f64>::zeros(n, n);
    for i in 1..n {
        companion[(i, i - 1)] = 1.0;
    }
    for (i, c) in coeffs[..n].iter().enumerate() {
        companion[(i, n - 1)] = -c;
    }

    let schur = Schur::try_new(companion, f64::EPSILON, MAX_SCHUR_ITERATIONS)?;
    let roots: Vec<f64> = schur
        .complex_eigenvalues()
        .iter()
        .filter(|z| z.im.abs() <= IMAGINARY_TOLERANCE * (1.0 + z.re.abs()))
        .map(|z| z.re)
        .filter(|re| re.is_finite())
        .collect();
    trace!(poly = %p, approximations = ?roots, "companion eigenvalues");
    Some(roots)
}

/// Approximations rounded to `10^-digits`, converted to rationals, sorted and
/// without duplicates.
pub fn rational_approximations(
    p: &UnivariatePolynomial<BigRational>,
    digits: u32,
) -> Option<Vec<BigRational>> {
    let mut roots: Vec<BigRational> = approximate_real_roots(p)?
        .into_iter()
        .filter_map(|r| crate::rational::from_f64_rounded(r, digits))
        .collect();
    roots.sort();
    roots.dedup();
    Some(roots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rational::rat;

    fn upoly(coeffs: &[i64]) -> UnivariatePolynomial<BigRational> {
        UnivariatePolynomial::from_coeffs_int(0, coeffs)
    }

    #[test]
    fn test_approximate_integer_roots() {
        // (x - 1)(x - 2)(x - 3)
        let roots = rational_approximations(&upoly(&[-6, 11, -6, 1]), 3).unwrap_or_default();
        assert_eq!(roots, vec![rat(1), rat(2), rat(3)]);
    }

    #[test]
    fn test_approximate_sqrt2() {
        let roots = approximate_real_roots(&upoly(&[-2, 0, 1])).unwrap_or_default();
        assert_eq!(roots.len(), 2);
        assert!(roots.iter().any(|r| (r - std::f64::consts::SQRT_2).abs() < 1e-9));
    }

    #[test]
    fn test_no_real_roots() {
        let roots = approximate_real_roots(&upoly(&[1, 0, 1])).unwrap_or_default();
        assert!(roots.is_empty());
    }
}
