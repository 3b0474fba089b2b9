//! Compound interest projection with optional recurring contributions.

use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::error::CalculatorError;

/// How often interest is compounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Compounding {
    /// 365 periods per year.
    Daily,
    /// 12 periods per year.
    Monthly,
    /// 4 periods per year.
    Quarterly,
    /// 1 period per year.
    Annually,
}

impl Compounding {
    /// Number of compounding periods per year.
    #[must_use]
    pub const fn periods_per_year(self) -> u32 {
        match self {
            Self::Daily => 365,
            Self::Monthly => 12,
            Self::Quarterly => 4,
            Self::Annually => 1,
        }
    }

    /// Parses a frequency label, defaulting to monthly for anything
    /// unrecognized.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "daily" => Self::Daily,
            "quarterly" => Self::Quarterly,
            "annually" | "yearly" => Self::Annually,
            _ => Self::Monthly,
        }
    }
}

impl std::str::FromStr for Compounding {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}

/// Compound interest projection inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestRequest {
    /// Starting principal.
    pub principal: Decimal,
    /// Annual interest rate as a percentage.
    pub annual_rate_percent: Decimal,
    /// Projection horizon in whole years.
    pub years: u32,
    /// Compounding frequency.
    pub compounding: Compounding,
    /// Monthly contribution added over the term. Zero disables it.
    pub monthly_contribution: Decimal,
}

/// Projection result, all values rounded to 2 decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestProjection {
    /// Projected balance at the end of the term.
    pub future_value: Decimal,
    /// Principal plus nominal contributions paid in.
    pub total_contributed: Decimal,
    /// Future value minus principal minus nominal contributions.
    pub total_interest: Decimal,
    /// Future value minus total contributed.
    pub gain: Decimal,
}

impl InterestRequest {
    fn validate(&self) -> Result<(), CalculatorError> {
        if self.principal <= Decimal::ZERO {
            return Err(CalculatorError::NonPositivePrincipal);
        }
        if self.annual_rate_percent < Decimal::ZERO {
            return Err(CalculatorError::NegativeRate);
        }
        if self.years == 0 {
            return Err(CalculatorError::NonPositiveTerm);
        }
        if self.monthly_contribution < Decimal::ZERO {
            return Err(CalculatorError::NegativeContribution);
        }
        Ok(())
    }

    /// Projects the future value of the principal and contributions.
    ///
    /// Contributions use the ordinary annuity future-value formula. A
    /// monthly contribution is spread across compounding periods when
    /// the frequency is monthly or finer; for coarser frequencies it is
    /// applied per period as given.
    ///
    /// # Errors
    ///
    /// Returns `CalculatorError` when any input is out of range.
    pub fn project(&self) -> Result<InterestProjection, CalculatorError> {
        self.validate()?;

        let frequency = self.compounding.periods_per_year();
        let freq = Decimal::from(frequency);
        let period_rate = self.annual_rate_percent / Decimal::ONE_HUNDRED / freq;
        let total_periods = self.years * frequency;

        let growth = (Decimal::ONE + period_rate).powu(u64::from(total_periods));
        let principal_fv = self.principal * growth;

        let contribution_per_period = if frequency >= 12 {
            // monthly / (frequency / 12)
            self.monthly_contribution * Decimal::from(12u32) / freq
        } else {
            self.monthly_contribution
        };

        let contribution_fv = if contribution_per_period.is_zero() {
            Decimal::ZERO
        } else if period_rate.is_zero() {
            contribution_per_period * Decimal::from(total_periods)
        } else {
            contribution_per_period * (growth - Decimal::ONE) / period_rate
        };

        let future_value = principal_fv + contribution_fv;
        let nominal_contributions =
            self.monthly_contribution * Decimal::from(12u32) * Decimal::from(self.years);
        let total_contributed = self.principal + nominal_contributions;

        Ok(InterestProjection {
            future_value: round_currency(future_value),
            total_contributed: round_currency(total_contributed),
            total_interest: round_currency(future_value - self.principal - nominal_contributions),
            gain: round_currency(future_value - total_contributed),
        })
    }
}

fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
}
