//! Reading share documents.
//!
//! ```text
//! {
//!   "keys": { "n": 4, "k": 3 },
//!   "1": { "base": "10", "value": "4" },
//!   "2": { "base": "2", "value": "111" },
//!   ...
//! }
//! ```
//! `n` bounds the indices that are looked at; any of `1..=n` may be absent.

use crate::error::{Error, Result};
use crate::lagrange::interpolate;
use crate::point::{Point, Share};
use num_bigint::BigInt;
use serde_json::{Map, Value};

/// The shares of one document, ordered by ascending index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareSet {
    /// Upper bound on share indices.
    pub n: u64,
    /// Threshold: shares needed to recover the secret.
    pub k: usize,
    pub shares: Vec<Share>,
}

impl ShareSet {
    pub fn from_json(text: &str) -> Result<Self> {
        let doc: Value = serde_json::from_str(text)?;
        Self::from_value(&doc)
    }

    pub fn from_value(doc: &Value) -> Result<Self> {
        let doc = doc
            .as_object()
            .ok_or_else(|| Error::Config("document is not a JSON object".into()))?;
        let keys = doc
            .get("keys")
            .and_then(Value::as_object)
            .ok_or_else(|| Error::Config("missing \"keys\" object".into()))?;

        let n = read_count(keys, "n")?;
        let k = read_count(keys, "k")?;
        if k == 0 {
            return Err(Error::Config("k must be at least 1".into()));
        }
        let k = usize::try_from(k).map_err(|_| Error::Config(format!("k = {k} is too large")))?;

        let mut indexed: Vec<(u64, &Value)> = doc
            .iter()
            .filter_map(|(key, entry)| match share_index(key, n) {
                Some(i) => Some((i, entry)),
                None => {
                    if key != "keys" {
                        log::debug!("ignoring entry {key:?} outside 1..={n}");
                    }
                    None
                }
            })
            .collect();
        indexed.sort_by_key(|(i, _)| *i);

        let mut shares = Vec::with_capacity(indexed.len());
        for (index, entry) in indexed {
            match (entry.get("base"), entry.get("value")) {
                (Some(base), Some(value)) => shares.push(read_share(index, base, value)?),
                _ => log::debug!("skipping share {index}: needs both \"base\" and \"value\""),
            }
        }

        Ok(ShareSet { n, k, shares })
    }

    /// Polynomial degree implied by the threshold.
    pub fn degree(&self) -> usize {
        self.k - 1
    }

    pub fn decode_points(&self) -> Result<Vec<Point>> {
        self.shares.iter().map(Share::decode).collect()
    }

    /// Decode every share and interpolate the first `k` at x = 0.
    pub fn recover_secret(&self) -> Result<BigInt> {
        interpolate(&self.decode_points()?, self.k)
    }
}

/// The canonical decimal key `"i"` for some `i` in `1..=n`.
fn share_index(key: &str, n: u64) -> Option<u64> {
    let i = key.parse::<u64>().ok()?;
    ((1..=n).contains(&i) && i.to_string() == key).then_some(i)
}

fn read_count(keys: &Map<String, Value>, name: &str) -> Result<u64> {
    let raw = keys
        .get(name)
        .ok_or_else(|| Error::Config(format!("missing keys.{name}")))?;
    let parsed = match raw {
        Value::Number(num) => num.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| Error::Config(format!("keys.{name} = {raw} is not a non-negative integer")))
}

/// Text of a string or number leaf. Numbers keep their literal digits.
fn scalar_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(num) => Some(num.to_string()),
        _ => None,
    }
}

/// The base is kept as written and only parsed when the share is decoded.
fn read_share(index: u64, base: &Value, value: &Value) -> Result<Share> {
    let value = scalar_text(value).ok_or_else(|| {
        Error::decode(&value.to_string(), base, "value must be a string or integer")
    })?;
    let base = scalar_text(base).unwrap_or_else(|| base.to_string());
    Ok(Share::new(index, base, value))
}
