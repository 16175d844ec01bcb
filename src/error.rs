//! Errors raised by the economy core.
//!
//! Expected game outcomes (not enough pixels, upgrade maxed out) are *not*
//! errors; they come back as `PurchaseOutcome::Rejected`. Everything here means
//! the data or the call itself is wrong.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EconomyError {
    /// Text that does not parse as a decimal number.
    #[error("malformed decimal: {0:?}")]
    MalformedDecimal(String),

    /// NaN or infinity handed to the decimal adapter.
    #[error("cannot represent non-finite float {0} as a decimal")]
    NonFiniteFloat(String),

    #[error("exponent must be an integer, got {0}")]
    NonIntegralExponent(String),

    #[error("exponent out of range: {0}")]
    ExponentOutOfRange(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("unknown upgrade id: {0}")]
    UnknownUpgrade(String),

    /// Input that is not the JSON shape we expect (e.g. definitions not in an array).
    #[error("invalid json: {0}")]
    Json(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for EconomyError {
    fn from(err: serde_json::Error) -> Self {
        EconomyError::Json(err.to_string())
    }
}

impl From<toml::de::Error> for EconomyError {
    fn from(err: toml::de::Error) -> Self {
        EconomyError::InvalidConfig(err.to_string())
    }
}

/// Result type for economy operations.
pub type EconomyResult<T> = Result<T, EconomyError>;
