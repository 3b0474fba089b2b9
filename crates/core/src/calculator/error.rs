//! Calculator error types.

use finassist_shared::error::AppError;
use thiserror::Error;

/// Errors from calculator input validation.
///
/// Every variant is a malformed or out-of-range input and maps to the
/// same `INVALID_PARAMETERS` code at the API boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculatorError {
    /// Principal must be strictly positive.
    #[error("Principal must be positive")]
    NonPositivePrincipal,

    /// Annual rate must not be negative.
    #[error("Interest rate cannot be negative")]
    NegativeRate,

    /// Term must be at least one year.
    #[error("Term must be at least one year")]
    NonPositiveTerm,

    /// Periodic contribution must not be negative.
    #[error("Contribution cannot be negative")]
    NegativeContribution,
}

impl CalculatorError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        "INVALID_PARAMETERS"
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        400
    }
}

impl From<CalculatorError> for AppError {
    fn from(err: CalculatorError) -> Self {
        Self::Validation(err.to_string())
    }
}
