//! Read API and aggregations.
//!
//! Reads take the shared lock, never mutate, and reflect every
//! previously committed mutation.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use finassist_core::budget::{self, BudgetPeriod, BudgetStatus};
use finassist_core::ledger::{Account, Bill, BillStatus, LedgerError, RecurringTransaction, Transaction};
use finassist_core::reporting::{self, SpendingBreakdown, Statement, TrendPoint};
use finassist_shared::types::{Money, UserId};
use rust_decimal::Decimal;

use crate::store::LedgerStore;

impl LedgerStore {
    /// Current balance of one account.
    ///
    /// # Errors
    ///
    /// `AccountNotFound` when missing or not owned by the user.
    pub fn balance_of(&self, user_id: UserId, number: &str) -> Result<Money, LedgerError> {
        let state = self.read();
        state
            .accounts
            .iter()
            .find(|a| a.user_id == user_id && a.number == number)
            .map(|a| Money::new(a.balance, a.currency))
            .ok_or_else(|| LedgerError::AccountNotFound(number.to_string()))
    }

    /// All accounts owned by the user, in open order.
    #[must_use]
    pub fn accounts(&self, user_id: UserId) -> Vec<Account> {
        self.read()
            .accounts
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Sum of all the user's account balances.
    #[must_use]
    pub fn total_balance(&self, user_id: UserId) -> Decimal {
        self.read()
            .accounts
            .iter()
            .filter(|a| a.user_id == user_id)
            .map(|a| a.balance)
            .sum()
    }

    /// Full transaction history of one account, newest first.
    ///
    /// # Errors
    ///
    /// `AccountNotFound` when missing or not owned by the user.
    pub fn history(&self, user_id: UserId, number: &str) -> Result<Vec<Transaction>, LedgerError> {
        let mut txns = self.account_transactions(user_id, number)?;
        txns.reverse();
        Ok(txns)
    }

    /// Transactions of one account in `[start, end)`, oldest first.
    ///
    /// # Errors
    ///
    /// `AccountNotFound` when missing or not owned by the user.
    pub fn history_window(
        &self,
        user_id: UserId,
        number: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Transaction>, LedgerError> {
        let txns = self.account_transactions(user_id, number)?;
        Ok(txns
            .into_iter()
            .filter(|t| t.timestamp >= start && t.timestamp < end)
            .collect())
    }

    /// Statement for one account over the inclusive range `[start, end]`.
    ///
    /// # Errors
    ///
    /// `AccountNotFound` when missing or not owned by the user.
    pub fn statement(
        &self,
        user_id: UserId,
        number: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Statement, LedgerError> {
        let state = self.read();
        let account = state
            .accounts
            .iter()
            .find(|a| a.user_id == user_id && a.number == number)
            .ok_or_else(|| LedgerError::AccountNotFound(number.to_string()))?;
        let txns: Vec<Transaction> = state
            .transactions
            .iter()
            .filter(|t| t.account_id == account.id)
            .cloned()
            .collect();
        Ok(reporting::statement(
            &txns,
            account.opening_balance,
            start,
            end,
        ))
    }

    /// Case-insensitive description search across all the user's
    /// accounts, newest first.
    #[must_use]
    pub fn search(&self, user_id: UserId, term: &str) -> Vec<Transaction> {
        let state = self.read();
        let needle = term.to_lowercase();
        let mut matches: Vec<Transaction> = state
            .transactions
            .iter()
            .filter(|t| {
                state
                    .accounts
                    .iter()
                    .any(|a| a.id == t.account_id && a.user_id == user_id)
                    && t.description.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();
        matches.reverse();
        matches
    }

    /// Pending bills, soonest due first.
    #[must_use]
    pub fn pending_bills(&self, user_id: UserId) -> Vec<Bill> {
        let mut bills: Vec<Bill> = self
            .read()
            .bills
            .iter()
            .filter(|b| b.user_id == user_id && b.status == BillStatus::Pending)
            .cloned()
            .collect();
        bills.sort_by_key(|b| b.due_date);
        bills
    }

    /// Active recurring definitions, next occurrence first.
    #[must_use]
    pub fn active_recurring(&self, user_id: UserId) -> Vec<RecurringTransaction> {
        let mut defs: Vec<RecurringTransaction> = self
            .read()
            .recurring
            .iter()
            .filter(|r| r.user_id == user_id && r.active)
            .cloned()
            .collect();
        defs.sort_by_key(|r| r.next_date);
        defs
    }

    /// Outflow spending by category across all the user's accounts
    /// over `[start, end)`.
    #[must_use]
    pub fn spending_by_category(
        &self,
        user_id: UserId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> SpendingBreakdown {
        let txns = self.user_transactions(user_id);
        reporting::spending_by_category(&txns, start, end)
    }

    /// Monthly outflow totals across all the user's accounts for the
    /// `months` calendar months ending with the month of `today`.
    #[must_use]
    pub fn monthly_trend(&self, user_id: UserId, months: u32, today: NaiveDate) -> Vec<TrendPoint> {
        let txns = self.user_transactions(user_id);
        reporting::monthly_trend(&txns, months, today)
    }

    /// Budget standings for the period containing `today`: monthly
    /// budgets measure the current calendar month, yearly budgets the
    /// current calendar year.
    #[must_use]
    pub fn budget_status(&self, user_id: UserId, today: NaiveDate) -> Vec<BudgetStatus> {
        let txns = self.user_transactions(user_id);
        self.read()
            .budgets
            .iter()
            .filter(|b| b.user_id == user_id)
            .map(|b| {
                let (start, end) = period_window(b.period, today);
                let spent = txns
                    .iter()
                    .filter(|t| {
                        t.kind.is_outflow()
                            && t.category == b.category
                            && t.timestamp >= start
                            && t.timestamp < end
                    })
                    .map(|t| t.amount)
                    .sum();
                budget::status(b, spent)
            })
            .collect()
    }

    fn account_transactions(
        &self,
        user_id: UserId,
        number: &str,
    ) -> Result<Vec<Transaction>, LedgerError> {
        let state = self.read();
        let account = state
            .accounts
            .iter()
            .find(|a| a.user_id == user_id && a.number == number)
            .ok_or_else(|| LedgerError::AccountNotFound(number.to_string()))?;
        Ok(state
            .transactions
            .iter()
            .filter(|t| t.account_id == account.id)
            .cloned()
            .collect())
    }

    fn user_transactions(&self, user_id: UserId) -> Vec<Transaction> {
        let state = self.read();
        state
            .transactions
            .iter()
            .filter(|t| {
                state
                    .accounts
                    .iter()
                    .any(|a| a.id == t.account_id && a.user_id == user_id)
            })
            .cloned()
            .collect()
    }
}

/// Closed-open window for the budget period containing `today`.
fn period_window(period: BudgetPeriod, today: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let (start, end) = match period {
        BudgetPeriod::Monthly => {
            let start = today.with_day(1).unwrap_or(today);
            (start, start + chrono::Months::new(1))
        }
        BudgetPeriod::Yearly => {
            let start = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today);
            (start, start + chrono::Months::new(12))
        }
    };
    (
        start.and_time(NaiveTime::MIN).and_utc(),
        end.and_time(NaiveTime::MIN).and_utc(),
    )
}
