//! Ledger error types.

use finassist_shared::error::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors from ledger operations.
///
/// Every variant is non-retryable: mutations that fail leave ledger state
/// exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Account missing or not owned by the caller.
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// No pending bill of the requested type.
    #[error("Bill not found: {0}")]
    BillNotFound(String),

    /// Balance below the amount the operation needs.
    #[error("Insufficient funds: required {required}, available {available}")]
    InsufficientFunds {
        /// Amount the operation needed.
        required: Decimal,
        /// Balance actually available.
        available: Decimal,
    },

    /// Amount is zero or negative.
    #[error("Invalid amount: {0}")]
    InvalidAmount(Decimal),

    /// Recurring definition missing or not owned by the caller.
    #[error("Recurring transaction not found: {0}")]
    RecurringNotFound(String),

    /// Recurring definition exists but is deactivated.
    #[error("Recurring transaction is inactive: {0}")]
    RecurringInactive(String),

    /// Account number already in use.
    #[error("Account number already exists: {0}")]
    DuplicateAccountNumber(String),
}

impl LedgerError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
            Self::BillNotFound(_) => "BILL_NOT_FOUND",
            Self::InsufficientFunds { .. } => "INSUFFICIENT_FUNDS",
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::RecurringNotFound(_) => "RECURRING_NOT_FOUND",
            Self::RecurringInactive(_) => "RECURRING_INACTIVE",
            Self::DuplicateAccountNumber(_) => "DUPLICATE_ACCOUNT_NUMBER",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::AccountNotFound(_) | Self::BillNotFound(_) | Self::RecurringNotFound(_) => 404,
            Self::InsufficientFunds { .. } | Self::RecurringInactive(_) => 422,
            Self::InvalidAmount(_) => 400,
            Self::DuplicateAccountNumber(_) => 409,
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::AccountNotFound(_)
            | LedgerError::BillNotFound(_)
            | LedgerError::RecurringNotFound(_) => Self::NotFound(err.to_string()),
            LedgerError::InsufficientFunds { .. } | LedgerError::RecurringInactive(_) => {
                Self::BusinessRule(err.to_string())
            }
            LedgerError::InvalidAmount(_) => Self::Validation(err.to_string()),
            LedgerError::DuplicateAccountNumber(_) => Self::Conflict(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            LedgerError::AccountNotFound("ACC001".into()).error_code(),
            "ACCOUNT_NOT_FOUND"
        );
        assert_eq!(
            LedgerError::InsufficientFunds {
                required: dec!(150),
                available: dec!(100),
            }
            .error_code(),
            "INSUFFICIENT_FUNDS"
        );
        assert_eq!(
            LedgerError::InvalidAmount(dec!(-5)).error_code(),
            "INVALID_AMOUNT"
        );
    }

    #[test]
    fn test_http_status_codes() {
        assert_eq!(
            LedgerError::BillNotFound("electricity".into()).http_status_code(),
            404
        );
        assert_eq!(
            LedgerError::InsufficientFunds {
                required: dec!(150),
                available: dec!(100),
            }
            .http_status_code(),
            422
        );
        assert_eq!(LedgerError::InvalidAmount(dec!(0)).http_status_code(), 400);
        assert_eq!(
            LedgerError::DuplicateAccountNumber("ACC001".into()).http_status_code(),
            409
        );
    }

    #[test]
    fn test_insufficient_funds_display() {
        let err = LedgerError::InsufficientFunds {
            required: dec!(150),
            available: dec!(100),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds: required 150, available 100"
        );
    }

    #[test]
    fn test_app_error_conversion() {
        let app: AppError = LedgerError::AccountNotFound("ACC001".into()).into();
        assert_eq!(app.status_code(), 404);

        let app: AppError = LedgerError::InsufficientFunds {
            required: dec!(1),
            available: dec!(0),
        }
        .into();
        assert_eq!(app.status_code(), 422);

        let app: AppError = LedgerError::InvalidAmount(dec!(-1)).into();
        assert_eq!(app.status_code(), 400);
    }
}
