//! Error types for unit-bearing values

use thiserror::Error;

/// Errors that can occur when converting a unit-bearing value
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    #[error("Unit '{unit}' is not supported for {quantity}")]
    InvalidUnit { quantity: &'static str, unit: String },

    #[error("Malformed {quantity} value: '{raw}'")]
    MalformedValue { quantity: &'static str, raw: String },
}

impl UnitError {
    pub(crate) fn invalid_unit(quantity: &'static str, unit: impl ToString) -> Self {
        UnitError::InvalidUnit {
            quantity,
            unit: unit.to_string(),
        }
    }
}
