//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.
//! Display rounding to 2 decimal places happens only at presentation
//! boundaries, never before a subsequent arithmetic step.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Represents a monetary amount with currency.
///
/// Uses `Decimal` internally to avoid floating-point precision errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount in major currency units (e.g., dollars).
    pub amount: Decimal,
    /// ISO 4217 currency code (e.g., "USD", "EUR").
    pub currency: Currency,
}

/// ISO 4217 currency codes supported by the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US Dollar
    Usd,
    /// Euro
    Eur,
    /// British Pound
    Gbp,
    /// Japanese Yen
    Jpy,
    /// Indian Rupee
    Inr,
    /// Canadian Dollar
    Cad,
    /// Australian Dollar
    Aud,
    /// Chinese Yuan
    Cny,
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative()
    }

    /// Returns a copy rounded to 2 decimal places with banker's rounding.
    ///
    /// For presentation only; intermediate arithmetic must stay unrounded.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            amount: self
                .amount
                .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven),
            currency: self.currency,
        }
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.rounded().amount, self.currency)
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Usd => write!(f, "USD"),
            Self::Eur => write!(f, "EUR"),
            Self::Gbp => write!(f, "GBP"),
            Self::Jpy => write!(f, "JPY"),
            Self::Inr => write!(f, "INR"),
            Self::Cad => write!(f, "CAD"),
            Self::Aud => write!(f, "AUD"),
            Self::Cny => write!(f, "CNY"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            "GBP" => Ok(Self::Gbp),
            "JPY" => Ok(Self::Jpy),
            "INR" => Ok(Self::Inr),
            "CAD" => Ok(Self::Cad),
            "AUD" => Ok(Self::Aud),
            "CNY" => Ok(Self::Cny),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    #[test]
    fn test_money_new() {
        let amount = dec!(100.00);
        let money = Money::new(amount, Currency::Usd);
        assert_eq!(money.amount, amount);
        assert_eq!(money.currency, Currency::Usd);
    }

    #[test]
    fn test_money_zero() {
        let money = Money::zero(Currency::Eur);
        assert!(money.is_zero());
        assert_eq!(money.amount, Decimal::ZERO);
        assert_eq!(money.currency, Currency::Eur);
    }

    #[test]
    fn test_money_is_negative() {
        let positive = Money::new(dec!(10), Currency::Usd);
        assert!(!positive.is_negative());

        let negative = Money::new(dec!(-10), Currency::Usd);
        assert!(negative.is_negative());

        let zero = Money::new(dec!(0), Currency::Usd);
        assert!(!zero.is_negative());
    }

    #[test]
    fn test_rounded_uses_bankers_rounding() {
        // Round half to even: 2.345 -> 2.34, 2.355 -> 2.36
        let a = Money::new(dec!(2.345), Currency::Usd).rounded();
        assert_eq!(a.amount, dec!(2.34));

        let b = Money::new(dec!(2.355), Currency::Usd).rounded();
        assert_eq!(b.amount, dec!(2.36));
    }

    #[test]
    fn test_display() {
        let money = Money::new(dec!(1199.101), Currency::Usd);
        assert_eq!(money.to_string(), "1199.10 USD");
    }

    #[test]
    fn test_currency_display() {
        assert_eq!(Currency::Usd.to_string(), "USD");
        assert_eq!(Currency::Eur.to_string(), "EUR");
        assert_eq!(Currency::Gbp.to_string(), "GBP");
        assert_eq!(Currency::Jpy.to_string(), "JPY");
        assert_eq!(Currency::Inr.to_string(), "INR");
        assert_eq!(Currency::Cad.to_string(), "CAD");
        assert_eq!(Currency::Aud.to_string(), "AUD");
        assert_eq!(Currency::Cny.to_string(), "CNY");
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!(Currency::from_str("USD").unwrap(), Currency::Usd);
        assert_eq!(Currency::from_str("usd").unwrap(), Currency::Usd);
        assert_eq!(Currency::from_str("EUR").unwrap(), Currency::Eur);
        assert_eq!(Currency::from_str("CNY").unwrap(), Currency::Cny);

        assert!(Currency::from_str("XXX").is_err());
        assert!(Currency::from_str("").is_err());
    }
}
