//! Budget types.

use finassist_shared::types::{BudgetId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Budgeting period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetPeriod {
    /// Resets each calendar month.
    Monthly,
    /// Resets each calendar year.
    Yearly,
}

/// A spending limit for one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    /// Unique budget ID.
    pub id: BudgetId,
    /// Owning user.
    pub user_id: UserId,
    /// Category the limit applies to.
    pub category: String,
    /// Limit amount per period.
    pub amount: Decimal,
    /// Budgeting period.
    pub period: BudgetPeriod,
}

/// Where actual spending stands against the limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStanding {
    /// Spending below the limit.
    Under,
    /// Spending exactly at the limit.
    OnBudget,
    /// Spending above the limit.
    Over,
}

/// Budget vs. actual for one category and period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetStatus {
    /// Category the status covers.
    pub category: String,
    /// Limit amount.
    pub amount: Decimal,
    /// Amount spent so far this period.
    pub spent: Decimal,
    /// Limit minus spent (negative when over).
    pub remaining: Decimal,
    /// Spent as a percentage of the limit, 2 decimal places.
    pub utilization_percent: Decimal,
    /// Standing against the limit.
    pub standing: BudgetStanding,
}
