//! Payoff simulation error types.

use finassist_shared::error::AppError;
use thiserror::Error;

/// Errors from payoff request validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PayoffError {
    /// The debt list is empty.
    #[error("At least one debt is required")]
    NoDebts,

    /// Monthly payment budget is zero or negative.
    #[error("Monthly payment must be positive")]
    NonPositivePayment,
}

impl PayoffError {
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

impl From<PayoffError> for AppError {
    fn from(err: PayoffError) -> Self {
        Self::Validation(err.to_string())
    }
}
