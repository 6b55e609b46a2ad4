use num_bigint::BigInt;
use thiserror::Error;

/// Everything that can go wrong while recovering a secret from one document.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read {label}: {source}")]
    SourceUnavailable {
        label: String,
        #[source]
        source: std::io::Error,
    },

    #[error("document is not valid JSON: {0}")]
    MalformedDocument(#[from] serde_json::Error),

    #[error("invalid keys section: {0}")]
    Config(String),

    #[error("cannot decode {value:?} in base {base}: {reason}")]
    Decode {
        value: String,
        base: String,
        reason: String,
    },

    #[error("not enough shares to recover the secret (need {needed}, got {available})")]
    InsufficientData { needed: usize, available: usize },

    #[error("duplicate x-coordinate {x} among the interpolation points")]
    DegenerateInput { x: BigInt },

    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn decode(value: &str, base: impl ToString, reason: impl Into<String>) -> Self {
        Error::Decode {
            value: value.to_string(),
            base: base.to_string(),
            reason: reason.into(),
        }
    }
}
