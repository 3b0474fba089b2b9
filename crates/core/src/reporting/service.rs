//! Report computation over transaction slices.
//!
//! All functions expect transactions in chronological (oldest-first)
//! order, which is how the ledger appends them.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::ledger::types::Transaction;

use super::types::{CategorySpend, SpendingBreakdown, Statement, TrendPoint};

/// Rolls up outflow spending by category over `[start, end)`.
///
/// Categories are sorted by total descending; ties fall back to
/// category name.
#[must_use]
pub fn spending_by_category(
    txns: &[Transaction],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> SpendingBreakdown {
    let mut by_category: BTreeMap<&str, Decimal> = BTreeMap::new();
    for txn in txns {
        if txn.kind.is_outflow() && txn.timestamp >= start && txn.timestamp < end {
            *by_category.entry(txn.category.as_str()).or_default() += txn.amount;
        }
    }

    let total = by_category.values().copied().sum();
    let mut categories: Vec<CategorySpend> = by_category
        .into_iter()
        .map(|(category, total)| CategorySpend {
            category: category.to_string(),
            total,
        })
        .collect();
    // BTreeMap iteration is name-ordered, so a stable sort keeps the
    // alphabetical tiebreak.
    categories.sort_by(|a, b| b.total.cmp(&a.total));

    SpendingBreakdown { categories, total }
}

/// Builds a statement over the inclusive range `[start, end]`.
///
/// The opening balance is the `balance_after` of the last transaction
/// before `start`, falling back to the account's seed balance when the
/// range predates all activity.
#[must_use]
pub fn statement(
    txns: &[Transaction],
    seed_balance: Decimal,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Statement {
    let opening_balance = txns
        .iter()
        .rev()
        .find(|t| t.timestamp < start)
        .map_or(seed_balance, |t| t.balance_after);

    let mut closing_balance = opening_balance;
    let mut total_deposits = Decimal::ZERO;
    let mut total_withdrawals = Decimal::ZERO;
    let mut transaction_count = 0;

    for txn in txns {
        if txn.timestamp < start || txn.timestamp > end {
            continue;
        }
        if txn.kind.is_outflow() {
            total_withdrawals += txn.amount;
        } else {
            total_deposits += txn.amount;
        }
        closing_balance = txn.balance_after;
        transaction_count += 1;
    }

    Statement {
        start,
        end,
        opening_balance,
        closing_balance,
        total_deposits,
        total_withdrawals,
        transaction_count,
    }
}

/// Monthly outflow totals for the `months` calendar months up to and
/// including the month of `today`, oldest first.
///
/// Each bucket is `[first-of-month, first-of-next-month)`.
#[must_use]
pub fn monthly_trend(txns: &[Transaction], months: u32, today: NaiveDate) -> Vec<TrendPoint> {
    let current_month_start = first_of_month(today);

    (0..months)
        .rev()
        .map(|back| {
            let bucket_start = current_month_start - Months::new(back);
            let bucket_end = bucket_start + Months::new(1);
            let total = txns
                .iter()
                .filter(|t| {
                    let day = t.timestamp.date_naive();
                    t.kind.is_outflow() && day >= bucket_start && day < bucket_end
                })
                .map(|t| t.amount)
                .sum();
            TrendPoint {
                month: bucket_start,
                total,
            }
        })
        .collect()
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    // The first of a real date's month always exists.
    date.with_day(1).unwrap_or(date)
}
