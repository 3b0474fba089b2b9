//! Amount conversion between currencies.

use finassist_shared::types::{Currency, Money};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::error::CurrencyError;
use super::rates::RateTable;

/// Result of a currency conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Original amount.
    pub from: Money,
    /// Converted amount, rounded to 2 decimal places.
    pub to: Money,
    /// Effective rate applied, rounded to 4 decimal places.
    pub rate: Decimal,
}

/// Converts an amount using USD-relative rates:
/// `converted = amount x (rate_to / rate_from)`.
///
/// # Errors
///
/// Returns `CurrencyError::UnsupportedCurrency` when either currency is
/// missing from the table.
pub fn convert(
    table: &RateTable,
    from: Money,
    to: Currency,
) -> Result<ConversionResult, CurrencyError> {
    let rate_from = table
        .rate_for(from.currency)
        .ok_or(CurrencyError::UnsupportedCurrency(from.currency))?;
    let rate_to = table
        .rate_for(to)
        .ok_or(CurrencyError::UnsupportedCurrency(to))?;

    let rate = rate_to / rate_from;
    let converted = (from.amount * rate)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);

    Ok(ConversionResult {
        from,
        to: Money::new(converted, to),
        rate: rate.round_dp_with_strategy(4, RoundingStrategy::MidpointNearestEven),
    })
}
