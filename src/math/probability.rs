//! Sampling on the probability simplex and integer rounding of proportions

use rand::Rng;
use rand_distr::{Distribution, Exp1};

/// Draw `n` proportions from the flat Dirichlet distribution (all concentrations 1)
///
/// Normalized unit-rate exponential draws are uniformly distributed over the
/// simplex, which is exactly `Dirichlet(1, ..., 1)`. The result sums to 1 up
/// to floating point error. Returns an empty vector when `n == 0`.
pub fn sample_flat_dirichlet<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }

    loop {
        let draws: Vec<f64> = (0..n).map(|_| Exp1.sample(rng)).collect();
        let total: f64 = draws.iter().sum();
        // All-zero draws are possible in principle and cannot be normalized
        if total > 0.0 {
            return draws.into_iter().map(|d| d / total).collect();
        }
    }
}

/// Scale proportions to `total`, floor each share and hand the rounded
/// fractional remainder to the share at `remainder_slot`
///
/// The remainder is taken as `total - sum(floors)`, the exact integer value of
/// the rounded fractional sum, so the result always sums to `total`. Returns
/// `None` when floating point drift pushes the floors above `total` or when
/// `remainder_slot` is out of range.
pub fn floor_with_remainder(
    proportions: &[f64],
    total: usize,
    remainder_slot: usize,
) -> Option<Vec<usize>> {
    let scale = total as f64;
    let mut shares: Vec<usize> = proportions
        .iter()
        .map(|p| (p * scale).floor().max(0.0) as usize)
        .collect();

    let floored: usize = shares.iter().sum();
    let remainder = total.checked_sub(floored)?;
    let slot = shares.get_mut(remainder_slot)?;
    *slot += remainder;

    Some(shares)
}
