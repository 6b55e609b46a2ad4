//! Exact Lagrange interpolation over the rationals.

use crate::error::{Error, Result};
use crate::point::Point;
use crate::rational::Fraction;
use num_bigint::BigInt;
use num_traits::{One, Zero};

/// Lagrange basis weight L_i(at) for the node `xs[i]`.
///
/// # Formula
/// ```text
/// L_i(at) = ∏_{j ≠ i} (at - x_j) / (x_i - x_j)
/// ```
/// Numerator and denominator are accumulated as integer products and
/// divided once. The nodes must be pairwise distinct.
pub fn lagrange_coefficient(i: usize, xs: &[BigInt], at: &BigInt) -> Fraction {
    let mut num = BigInt::one();
    let mut den = BigInt::one();
    for (j, x_j) in xs.iter().enumerate() {
        if j == i {
            continue;
        }
        num *= at - x_j;
        den *= &xs[i] - x_j;
    }
    Fraction::new(num, den)
}

/// All basis weights for `xs` evaluated at `at`, in node order.
pub fn lagrange_coefficients(xs: &[BigInt], at: &BigInt) -> Vec<Fraction> {
    (0..xs.len())
        .map(|i| lagrange_coefficient(i, xs, at))
        .collect()
}

/// Select the first `k` points and check they can be interpolated.
fn working_set(points: &[Point], k: usize) -> Result<&[Point]> {
    if k == 0 {
        return Err(Error::Config("threshold k must be at least 1".into()));
    }
    if points.len() < k {
        return Err(Error::InsufficientData {
            needed: k,
            available: points.len(),
        });
    }
    let chosen = &points[..k];
    for (i, p) in chosen.iter().enumerate() {
        if chosen[..i].iter().any(|q| q.x == p.x) {
            return Err(Error::DegenerateInput { x: p.x.clone() });
        }
    }
    Ok(chosen)
}

/// Value at `at` of the degree-(k-1) polynomial through the first `k` points,
/// as an exact fraction.
pub fn interpolate_exact(points: &[Point], k: usize, at: &BigInt) -> Result<Fraction> {
    let chosen = working_set(points, k)?;
    let xs: Vec<BigInt> = chosen.iter().map(|p| p.x.clone()).collect();
    let mut acc = Fraction::zero();
    for (p, lambda) in chosen.iter().zip(lagrange_coefficients(&xs, at)) {
        acc = acc + &(lambda * &Fraction::from_integer(p.y.clone()));
    }
    Ok(acc)
}

/// Like [`interpolate_exact`], rounded half-up to the nearest integer.
pub fn interpolate_at(points: &[Point], k: usize, at: &BigInt) -> Result<BigInt> {
    let value = interpolate_exact(points, k, at)?;
    if !value.is_integer() {
        log::warn!(
            "interpolated value {} at x={} is not an integer; rounding half-up",
            value,
            at
        );
    }
    Ok(value.round_half_up())
}

/// Recover the secret f(0) from the first `k` points.
pub fn interpolate(points: &[Point], k: usize) -> Result<BigInt> {
    interpolate_at(points, k, &BigInt::zero())
}
