//! Fixed-rate, fixed-term loan amortization.

use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::error::CalculatorError;

/// Loan amortization inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanRequest {
    /// Amount borrowed.
    pub principal: Decimal,
    /// Annual interest rate as a percentage (e.g. 6 for 6%).
    pub annual_rate_percent: Decimal,
    /// Term in whole years.
    pub term_years: u32,
}

/// Amortization result, all currency values rounded to 2 decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanSchedule {
    /// Fixed monthly installment.
    pub monthly_payment: Decimal,
    /// Total paid over the full term.
    pub total_payment: Decimal,
    /// Interest portion of the total.
    pub total_interest: Decimal,
    /// Number of monthly installments.
    pub payment_count: u32,
}

impl LoanRequest {
    fn validate(&self) -> Result<(), CalculatorError> {
        if self.principal <= Decimal::ZERO {
            return Err(CalculatorError::NonPositivePrincipal);
        }
        if self.annual_rate_percent < Decimal::ZERO {
            return Err(CalculatorError::NegativeRate);
        }
        if self.term_years == 0 {
            return Err(CalculatorError::NonPositiveTerm);
        }
        Ok(())
    }

    /// Computes the amortization schedule.
    ///
    /// Uses the standard annuity formula, with a straight-line division
    /// when the rate is exactly zero.
    ///
    /// # Errors
    ///
    /// Returns `CalculatorError` when principal, rate or term are out of
    /// range.
    pub fn amortize(&self) -> Result<LoanSchedule, CalculatorError> {
        self.validate()?;

        let payment_count = self.term_years * 12;
        let count = Decimal::from(payment_count);
        let monthly_rate = self.annual_rate_percent / Decimal::ONE_HUNDRED / Decimal::from(12u32);

        let monthly_payment = if monthly_rate.is_zero() {
            self.principal / count
        } else {
            let growth = (Decimal::ONE + monthly_rate).powu(u64::from(payment_count));
            self.principal * monthly_rate * growth / (growth - Decimal::ONE)
        };

        let total_payment = monthly_payment * count;
        let total_interest = total_payment - self.principal;

        Ok(LoanSchedule {
            monthly_payment: round_currency(monthly_payment),
            total_payment: round_currency(total_payment),
            total_interest: round_currency(total_interest),
            payment_count,
        })
    }
}

fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_standard_mortgage() {
        let schedule = LoanRequest {
            principal: dec!(200000),
            annual_rate_percent: dec!(6),
            term_years: 30,
        }
        .amortize()
        .unwrap();

        assert_eq!(schedule.monthly_payment, dec!(1199.10));
        assert_eq!(schedule.payment_count, 360);
        // Total uses the unrounded installment.
        assert_eq!(schedule.total_payment, dec!(431676.38));
        assert_eq!(schedule.total_interest, dec!(231676.38));
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        let schedule = LoanRequest {
            principal: dec!(12000),
            annual_rate_percent: dec!(0),
            term_years: 5,
        }
        .amortize()
        .unwrap();

        assert_eq!(schedule.monthly_payment, dec!(200));
        assert_eq!(schedule.total_payment, dec!(12000));
        assert_eq!(schedule.total_interest, dec!(0));
        assert_eq!(schedule.payment_count, 60);
    }

    #[test]
    fn test_one_year_loan() {
        let schedule = LoanRequest {
            principal: dec!(1200),
            annual_rate_percent: dec!(12),
            term_years: 1,
        }
        .amortize()
        .unwrap();

        // 1200 at 1% per month over 12 months.
        assert_eq!(schedule.monthly_payment, dec!(106.62));
        assert_eq!(schedule.payment_count, 12);
        assert!(schedule.total_interest > Decimal::ZERO);
    }

    #[test]
    fn test_rejects_bad_inputs() {
        let base = LoanRequest {
            principal: dec!(1000),
            annual_rate_percent: dec!(5),
            term_years: 10,
        };

        let mut req = base.clone();
        req.principal = dec!(0);
        assert_eq!(
            req.amortize().unwrap_err(),
            CalculatorError::NonPositivePrincipal
        );

        let mut req = base.clone();
        req.principal = dec!(-100);
        assert_eq!(
            req.amortize().unwrap_err(),
            CalculatorError::NonPositivePrincipal
        );

        let mut req = base.clone();
        req.annual_rate_percent = dec!(-1);
        assert_eq!(req.amortize().unwrap_err(), CalculatorError::NegativeRate);

        let mut req = base;
        req.term_years = 0;
        assert_eq!(req.amortize().unwrap_err(), CalculatorError::NonPositiveTerm);
    }

    #[test]
    fn test_interest_is_total_minus_principal() {
        let schedule = LoanRequest {
            principal: dec!(50000),
            annual_rate_percent: dec!(4.5),
            term_years: 15,
        }
        .amortize()
        .unwrap();

        // Rounded independently, so allow a cent of drift.
        let diff = schedule.total_payment - schedule.total_interest - dec!(50000);
        assert!(diff.abs() <= dec!(0.01));
    }
}
