use std::fmt;
use std::ops::{Add, Mul, Neg};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// An exact rational number num/den over arbitrary-precision integers.
/// Always kept in lowest terms with a positive denominator.
#[derive(Clone, PartialEq, Eq)]
pub struct Fraction {
    num: BigInt,
    den: BigInt,
}

impl fmt::Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fraction({}/{})", self.num, self.den)
    }
}

impl Fraction {
    /// Construct num/den reduced to lowest terms.
    pub fn new(num: BigInt, den: BigInt) -> Self {
        assert!(!den.is_zero(), "Fraction with zero denominator");
        let g = num.gcd(&den);
        let (mut num, mut den) = (num / &g, den / &g);
        if den.is_negative() {
            num = -num;
            den = -den;
        }
        Self { num, den }
    }

    pub fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    pub fn from_integer(n: BigInt) -> Self {
        Self {
            num: n,
            den: BigInt::one(),
        }
    }

    pub fn is_integer(&self) -> bool {
        self.den.is_one()
    }

    /// Nearest integer, ties rounded away from zero:
    /// sign(v) * floor(|v| + 1/2).
    pub fn round_half_up(&self) -> BigInt {
        let two = BigInt::from(2u8);
        // both operands are non-negative, so truncating division is floor
        let magnitude = (self.num.abs() * &two + &self.den) / (&self.den * &two);
        if self.num.is_negative() {
            -magnitude
        } else {
            magnitude
        }
    }
}

impl Add<&Fraction> for Fraction {
    type Output = Self;
    fn add(self, rhs: &Self) -> Self {
        Fraction::new(
            self.num * &rhs.den + &rhs.num * &self.den,
            self.den * &rhs.den,
        )
    }
}

impl Mul<&Fraction> for Fraction {
    type Output = Self;
    fn mul(self, rhs: &Self) -> Self {
        Fraction::new(self.num * &rhs.num, self.den * &rhs.den)
    }
}

impl Mul<&Fraction> for &Fraction {
    type Output = Fraction;
    fn mul(self, rhs: &Fraction) -> Fraction {
        Fraction::new(&self.num * &rhs.num, &self.den * &rhs.den)
    }
}

impl Neg for Fraction {
    type Output = Self;
    fn neg(self) -> Self {
        Self {
            num: -self.num,
            den: self.den,
        }
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}
