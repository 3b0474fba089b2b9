//! USD-relative exchange rate table.

use std::collections::HashMap;

use finassist_shared::types::Currency;
use rust_decimal::Decimal;

/// Exchange rates keyed by currency, expressed as units per USD.
#[derive(Debug, Clone)]
pub struct RateTable {
    rates: HashMap<Currency, Decimal>,
}

impl Default for RateTable {
    /// The built-in static table.
    fn default() -> Self {
        let rates = HashMap::from([
            (Currency::Usd, Decimal::ONE),
            (Currency::Eur, Decimal::new(92, 2)),
            (Currency::Gbp, Decimal::new(79, 2)),
            (Currency::Jpy, Decimal::new(1490, 1)),
            (Currency::Inr, Decimal::new(830, 1)),
            (Currency::Cad, Decimal::new(135, 2)),
            (Currency::Aud, Decimal::new(152, 2)),
            (Currency::Cny, Decimal::new(724, 2)),
        ]);
        Self { rates }
    }
}

impl RateTable {
    /// Creates an empty table; rates come from `set_rate`.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            rates: HashMap::new(),
        }
    }

    /// Sets or overrides the rate for a currency.
    pub fn set_rate(&mut self, currency: Currency, units_per_usd: Decimal) {
        self.rates.insert(currency, units_per_usd);
    }

    /// Looks up the rate for a currency.
    #[must_use]
    pub fn rate_for(&self, currency: Currency) -> Option<Decimal> {
        self.rates.get(&currency).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_table_covers_all_currencies() {
        let table = RateTable::default();
        for currency in [
            Currency::Usd,
            Currency::Eur,
            Currency::Gbp,
            Currency::Jpy,
            Currency::Inr,
            Currency::Cad,
            Currency::Aud,
            Currency::Cny,
        ] {
            assert!(table.rate_for(currency).is_some(), "{currency} missing");
        }
        assert_eq!(table.rate_for(Currency::Usd), Some(dec!(1)));
        assert_eq!(table.rate_for(Currency::Jpy), Some(dec!(149.0)));
    }

    #[test]
    fn test_override_rate() {
        let mut table = RateTable::default();
        table.set_rate(Currency::Eur, dec!(0.95));
        assert_eq!(table.rate_for(Currency::Eur), Some(dec!(0.95)));
    }

    #[test]
    fn test_empty_table_has_no_rates() {
        assert!(RateTable::empty().rate_for(Currency::Usd).is_none());
    }
}
