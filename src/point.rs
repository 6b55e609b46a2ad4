use crate::base;
use crate::error::Result;
use num_bigint::BigInt;

/// One participant's piece of the secret as it appears in a share document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Share {
    /// 1-based share index; becomes the x-coordinate.
    pub index: u64,
    /// Declared base, as written in the document.
    pub base: String,
    pub encoded_value: String,
}

impl Share {
    pub fn new(index: u64, base: impl ToString, encoded_value: impl Into<String>) -> Self {
        Self {
            index,
            base: base.to_string(),
            encoded_value: encoded_value.into(),
        }
    }

    /// The declared base as a radix.
    pub fn radix(&self) -> Result<u32> {
        base::parse_base(&self.base, &self.encoded_value)
    }

    /// Decode the share value, yielding its point on the polynomial.
    pub fn decode(&self) -> Result<Point> {
        let y = base::decode(&self.encoded_value, self.radix()?)?;
        Ok(Point::new(BigInt::from(self.index), BigInt::from(y)))
    }
}

/// A decoded share: `(x, y) = (index, value)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: BigInt,
    pub y: BigInt,
}

impl Point {
    pub fn new(x: BigInt, y: BigInt) -> Self {
        Self { x, y }
    }
}
