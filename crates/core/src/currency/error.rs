//! Currency conversion error types.

use finassist_shared::error::AppError;
use finassist_shared::types::Currency;
use thiserror::Error;

/// Errors from currency conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CurrencyError {
    /// The rate table has no entry for this currency.
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(Currency),
}

impl CurrencyError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        "UNSUPPORTED_CURRENCY"
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        400
    }
}

impl From<CurrencyError> for AppError {
    fn from(err: CurrencyError) -> Self {
        Self::Validation(err.to_string())
    }
}
