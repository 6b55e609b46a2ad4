use crate::base;
use crate::error::{Error, Result};
use crate::point::{Point, Share};
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;
use rand::RngCore;

/// An integer polynomial f(x) = a0 + a1*x + ... + a_{t-1}*x^{t-1}.
#[derive(Debug, Clone)]
pub struct Poly {
    /// Coefficients a0, a1, ..., a_{t-1}
    pub coeffs: Vec<BigInt>,
}

impl Poly {
    /// Construct a polynomial from explicit coefficients.
    pub fn from_coeffs(coeffs: Vec<BigInt>) -> Self {
        Poly { coeffs }
    }

    /// Degree of the polynomial (t-1 if threshold is t).
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// Threshold (number of coefficients).
    pub fn threshold(&self) -> usize {
        self.coeffs.len()
    }

    /// Random polynomial with `t` non-negative coefficients of up to 256 bits.
    pub fn random<R: RngCore>(t: usize, rng: &mut R) -> Self {
        let mut coeffs = Vec::with_capacity(t);
        for _ in 0..t {
            let mut buf = [0u8; 32];
            rng.fill_bytes(&mut buf);
            coeffs.push(BigInt::from(BigUint::from_bytes_be(&buf)));
        }
        Poly { coeffs }
    }

    /// Evaluate the polynomial at x using Horner's method.
    pub fn eval(&self, x: &BigInt) -> BigInt {
        let mut result = BigInt::zero();
        for coeff in self.coeffs.iter().rev() {
            result = result * x + coeff;
        }
        result
    }

    pub fn point_at(&self, x: &BigInt) -> Point {
        Point::new(x.clone(), self.eval(x))
    }

    /// The share for participant `index`, with f(index) written in `base`.
    pub fn share_at(&self, index: u64, base: u32) -> Result<Share> {
        let y = self.eval(&BigInt::from(index));
        let y = y.to_biguint().ok_or_else(|| {
            Error::decode(&y.to_string(), base, "negative values cannot be encoded")
        })?;
        Ok(Share::new(index, base, base::encode(&y, base)?))
    }
}
