//! Report result types.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Outflow total for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySpend {
    /// Category label.
    pub category: String,
    /// Total spent in the window.
    pub total: Decimal,
}

/// Spending rollup for a time window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendingBreakdown {
    /// Per-category totals, largest first.
    pub categories: Vec<CategorySpend>,
    /// Grand total across categories.
    pub total: Decimal,
}

/// Account statement for an inclusive date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    /// Range start (inclusive).
    pub start: DateTime<Utc>,
    /// Range end (inclusive).
    pub end: DateTime<Utc>,
    /// Balance going into the range.
    pub opening_balance: Decimal,
    /// Balance after the last in-range transaction.
    pub closing_balance: Decimal,
    /// Sum of deposit-class amounts (deposit, transfer in).
    pub total_deposits: Decimal,
    /// Sum of withdrawal-class amounts (withdrawal, payment, transfer out).
    pub total_withdrawals: Decimal,
    /// Number of in-range transactions.
    pub transaction_count: usize,
}

/// Outflow total for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// First day of the month.
    pub month: NaiveDate,
    /// Total outflow in the month.
    pub total: Decimal,
}
