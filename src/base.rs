//! Positional numerals in radix 2..=36.
//!
//! Digits run `0-9` then `a-z`, case-insensitive, most significant first.

use crate::error::{Error, Result};
use num_bigint::BigUint;
use num_traits::Zero;

pub const MIN_BASE: u32 = 2;
pub const MAX_BASE: u32 = 36;

fn check_base(value: &str, base: u32) -> Result<()> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(Error::decode(
            value,
            base,
            format!("base must be between {MIN_BASE} and {MAX_BASE}"),
        ));
    }
    Ok(())
}

/// Decode `value` as a base-`base` numeral.
///
/// `BigUint::from_str_radix` tolerates `_` separators and a leading `+`,
/// neither of which is a digit in a share value, so digits are checked here.
pub fn decode(value: &str, base: u32) -> Result<BigUint> {
    check_base(value, base)?;
    if value.is_empty() {
        return Err(Error::decode(value, base, "value is empty"));
    }

    let radix = BigUint::from(base);
    let mut result = BigUint::zero();
    for c in value.chars() {
        let digit = c
            .to_digit(base)
            .ok_or_else(|| Error::decode(value, base, format!("invalid digit '{c}'")))?;
        result = result * &radix + digit;
    }
    Ok(result)
}

/// Encode `value` in base `base`: lowercase digits, no leading zeros.
pub fn encode(value: &BigUint, base: u32) -> Result<String> {
    check_base("", base)?;
    Ok(value.to_str_radix(base))
}

/// Parse the declared base of `value`, given as text or as a JSON number.
pub(crate) fn parse_base(raw: &str, value: &str) -> Result<u32> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| Error::decode(value, raw, "base is not a non-negative integer"))
}
