//! Debt payoff simulation types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single debt, as supplied by the caller. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Debt {
    /// Display name.
    pub name: String,
    /// Current outstanding balance.
    pub balance: Decimal,
    /// Annual interest rate as a percentage.
    pub annual_rate_percent: Decimal,
    /// Minimum payment once the shared pool is exhausted.
    pub minimum_payment: Decimal,
}

/// Debt ordering strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Smallest balance first.
    Snowball,
    /// Highest interest rate first.
    Avalanche,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Snowball => write!(f, "snowball"),
            Self::Avalanche => write!(f, "avalanche"),
        }
    }
}

/// Simulation inputs. Hashable so results can be cached by parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayoffRequest {
    /// Debts to simulate.
    pub debts: Vec<Debt>,
    /// Total monthly payment budget shared across the cascade.
    pub monthly_payment: Decimal,
    /// Ordering strategy.
    pub strategy: Strategy,
}

/// Per-debt simulation outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtPayoff {
    /// Debt name.
    pub name: String,
    /// Simulated months until payoff (or until the cap).
    pub months: u32,
    /// Original balance plus interest accrued.
    pub total_paid: Decimal,
    /// Interest accrued over the simulation.
    pub interest_paid: Decimal,
    /// True when the simulation stopped at the month cap with balance
    /// still outstanding.
    pub capped: bool,
}

/// Full simulation outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoffPlan {
    /// Strategy the plan was computed with.
    pub strategy: Strategy,
    /// Per-debt outcomes, in payoff order. Debts the pool never reached
    /// are absent.
    pub debts: Vec<DebtPayoff>,
    /// Sum of per-debt months.
    pub total_months: u32,
    /// `total_months / 12`, one decimal place.
    pub total_years: Decimal,
    /// Total interest across processed debts.
    pub total_interest: Decimal,
}
