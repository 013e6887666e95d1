//! Error types for field decoders

use thiserror::Error;

use crate::units::UnitError;

/// Errors raised while decoding a single raw field
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    #[error("{kind} value is blank")]
    Blank { kind: &'static str },

    #[error("'{raw}' is not a valid {kind}")]
    Malformed { kind: &'static str, raw: String },

    #[error("{code} is not a known {kind} code")]
    UnknownCode { kind: &'static str, code: u32 },

    #[error(transparent)]
    Unit(#[from] UnitError),
}

impl DecodeError {
    pub(crate) fn malformed(kind: &'static str, raw: &str) -> Self {
        DecodeError::Malformed {
            kind,
            raw: raw.to_string(),
        }
    }
}
