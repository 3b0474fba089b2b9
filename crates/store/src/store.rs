//! Atomic ledger mutations.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{NaiveDate, Utc};
use finassist_core::budget::{Budget, BudgetPeriod};
use finassist_core::ledger::{
    Account, AccountKind, Bill, BillStatus, Frequency, LedgerError, RecurringTransaction,
    RunningBalance, Transaction, TransactionKind,
};
use finassist_shared::types::{
    AccountId, BillId, BudgetId, Currency, RecurringId, TransactionId, UserId,
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};

/// Everything the ledger owns. One lock guards the whole state so
/// multi-row mutations commit as a unit.
#[derive(Debug, Default)]
pub(crate) struct State {
    pub(crate) accounts: Vec<Account>,
    pub(crate) transactions: Vec<Transaction>,
    pub(crate) bills: Vec<Bill>,
    pub(crate) recurring: Vec<RecurringTransaction>,
    pub(crate) budgets: Vec<Budget>,
}

/// Both sides of a completed transfer.
#[derive(Debug, Clone, Serialize)]
pub struct TransferReceipt {
    /// `transfer_out` entry on the source account.
    pub outgoing: Transaction,
    /// `transfer_in` entry on the destination account.
    pub incoming: Transaction,
}

/// Outcome of a completed bill payment.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentReceipt {
    /// The bill, now marked paid.
    pub bill: Bill,
    /// The `payment` entry debiting the account.
    pub transaction: Transaction,
}

/// In-memory ledger store.
///
/// Mutations validate first, then apply every write while holding the
/// write lock; a failed validation never touches state.
#[derive(Debug, Default)]
pub struct LedgerStore {
    state: RwLock<State>,
}

impl LedgerStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, State> {
        // A poisoned lock means a panic mid-read somewhere else; the
        // data itself is still consistent because writes are
        // validate-then-apply.
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Opens an account. A positive seed is recorded as an initial
    /// deposit transaction so the running balance chain starts from
    /// zero and already covers the seed.
    ///
    /// # Errors
    ///
    /// `InvalidAmount` for a negative seed, `DuplicateAccountNumber`
    /// when the number is taken.
    pub fn open_account(
        &self,
        user_id: UserId,
        number: &str,
        kind: AccountKind,
        seed: Decimal,
        currency: Currency,
    ) -> Result<Account, LedgerError> {
        if seed < Decimal::ZERO {
            return Err(LedgerError::InvalidAmount(seed));
        }

        let mut state = self.write();
        if state.accounts.iter().any(|a| a.number == number) {
            return Err(LedgerError::DuplicateAccountNumber(number.to_string()));
        }

        let account = Account {
            id: AccountId::new(),
            user_id,
            number: number.to_string(),
            kind,
            balance: Decimal::ZERO,
            opening_balance: Decimal::ZERO,
            currency,
            created_at: Utc::now(),
        };
        state.accounts.push(account);
        let idx = state.accounts.len() - 1;

        if seed > Decimal::ZERO {
            append_transaction(
                &mut state,
                idx,
                TransactionKind::Deposit,
                seed,
                "Initial deposit".to_string(),
                "Income".to_string(),
            );
        }

        let account = state.accounts[idx].clone();
        info!(account = %account.number, %seed, "account opened");
        Ok(account)
    }

    /// Deposits into an account.
    ///
    /// # Errors
    ///
    /// `InvalidAmount` for a non-positive amount, `AccountNotFound`
    /// when the account is missing or not owned by the user.
    pub fn deposit(
        &self,
        user_id: UserId,
        number: &str,
        amount: Decimal,
        description: &str,
        category: &str,
    ) -> Result<Transaction, LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount(amount));
        }

        let mut state = self.write();
        let idx = find_account(&state, user_id, number)?;
        let txn = append_transaction(
            &mut state,
            idx,
            TransactionKind::Deposit,
            amount,
            description.to_string(),
            category.to_string(),
        );
        info!(account = %number, %amount, "deposit posted");
        Ok(txn)
    }

    /// Withdraws from an account.
    ///
    /// # Errors
    ///
    /// `InvalidAmount`, `AccountNotFound`, or `InsufficientFunds` when
    /// the balance does not cover the amount.
    pub fn withdraw(
        &self,
        user_id: UserId,
        number: &str,
        amount: Decimal,
        description: &str,
        category: &str,
    ) -> Result<Transaction, LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount(amount));
        }

        let mut state = self.write();
        let idx = find_account(&state, user_id, number)?;
        require_funds(&state.accounts[idx], amount)?;
        let txn = append_transaction(
            &mut state,
            idx,
            TransactionKind::Withdrawal,
            amount,
            description.to_string(),
            category.to_string(),
        );
        info!(account = %number, %amount, "withdrawal posted");
        Ok(txn)
    }

    /// Moves an amount between two accounts owned by the same user.
    ///
    /// Both balance updates and both transaction appends happen under
    /// one write-lock acquisition; no partial transfer is observable.
    ///
    /// # Errors
    ///
    /// `InvalidAmount`, `AccountNotFound` for either side, or
    /// `InsufficientFunds` on the source.
    pub fn transfer(
        &self,
        user_id: UserId,
        from_number: &str,
        to_number: &str,
        amount: Decimal,
    ) -> Result<TransferReceipt, LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount(amount));
        }

        let mut state = self.write();
        let from_idx = find_account(&state, user_id, from_number)?;
        let to_idx = find_account(&state, user_id, to_number)?;
        require_funds(&state.accounts[from_idx], amount)?;

        let outgoing = append_transaction(
            &mut state,
            from_idx,
            TransactionKind::TransferOut,
            amount,
            format!("Transfer to {to_number}"),
            "Transfer".to_string(),
        );
        let incoming = append_transaction(
            &mut state,
            to_idx,
            TransactionKind::TransferIn,
            amount,
            format!("Transfer from {from_number}"),
            "Transfer".to_string(),
        );

        info!(from = %from_number, to = %to_number, %amount, "transfer completed");
        Ok(TransferReceipt { outgoing, incoming })
    }

    /// Pays the single pending bill of the given type from the user's
    /// first account. Debit, transaction append and bill status change
    /// commit together.
    ///
    /// # Errors
    ///
    /// `BillNotFound` when no pending bill of that type exists,
    /// `AccountNotFound` when the user has no account,
    /// `InsufficientFunds` when the balance does not cover the bill.
    pub fn pay_bill(&self, user_id: UserId, bill_type: &str) -> Result<PaymentReceipt, LedgerError> {
        let mut state = self.write();

        let bill_idx = state
            .bills
            .iter()
            .position(|b| {
                b.user_id == user_id
                    && b.status == BillStatus::Pending
                    && b.bill_type.eq_ignore_ascii_case(bill_type)
            })
            .ok_or_else(|| LedgerError::BillNotFound(bill_type.to_string()))?;

        let account_idx = state
            .accounts
            .iter()
            .position(|a| a.user_id == user_id)
            .ok_or_else(|| LedgerError::AccountNotFound("no account on file".to_string()))?;

        let amount = state.bills[bill_idx].amount;
        if let Err(err) = require_funds(&state.accounts[account_idx], amount) {
            warn!(bill = %bill_type, %amount, "bill payment rejected");
            return Err(err);
        }

        let (description, category) = {
            let bill = &state.bills[bill_idx];
            (
                format!("{} bill payment", bill.bill_type),
                bill.category.clone(),
            )
        };
        let transaction = append_transaction(
            &mut state,
            account_idx,
            TransactionKind::Payment,
            amount,
            description,
            category,
        );

        let bill = &mut state.bills[bill_idx];
        bill.status = BillStatus::Paid;
        bill.paid_at = Some(Utc::now());
        let bill = bill.clone();

        info!(bill = %bill.bill_type, %amount, "bill paid");
        Ok(PaymentReceipt { bill, transaction })
    }

    /// Applies one occurrence of a recurring definition, then advances
    /// its `next_date` by the frequency rule.
    ///
    /// Recurring outflows may overdraw the account; there is no funds
    /// check here.
    ///
    /// # Errors
    ///
    /// `RecurringNotFound`, `RecurringInactive`, or `AccountNotFound`
    /// when the target account no longer exists.
    pub fn post_recurring(
        &self,
        user_id: UserId,
        recurring_id: RecurringId,
    ) -> Result<Transaction, LedgerError> {
        let mut state = self.write();

        let def_idx = state
            .recurring
            .iter()
            .position(|r| r.id == recurring_id && r.user_id == user_id)
            .ok_or_else(|| LedgerError::RecurringNotFound(recurring_id.to_string()))?;
        if !state.recurring[def_idx].active {
            return Err(LedgerError::RecurringInactive(recurring_id.to_string()));
        }

        let account_id = state.recurring[def_idx].account_id;
        let account_idx = state
            .accounts
            .iter()
            .position(|a| a.id == account_id)
            .ok_or_else(|| LedgerError::AccountNotFound(account_id.to_string()))?;

        let (kind, amount, description, category) = {
            let def = &state.recurring[def_idx];
            (
                def.kind,
                def.amount,
                def.description.clone(),
                def.category.clone(),
            )
        };
        let txn = append_transaction(&mut state, account_idx, kind, amount, description, category);

        let def = &mut state.recurring[def_idx];
        def.next_date = def.frequency.next_after(def.next_date);

        info!(recurring = %recurring_id, %amount, next = %def.next_date, "recurring posted");
        Ok(txn)
    }

    /// Registers a pending bill.
    ///
    /// # Errors
    ///
    /// `InvalidAmount` for a non-positive amount.
    pub fn add_bill(
        &self,
        user_id: UserId,
        bill_type: &str,
        category: &str,
        amount: Decimal,
        due_date: NaiveDate,
        recurring: bool,
    ) -> Result<Bill, LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount(amount));
        }

        let bill = Bill {
            id: BillId::new(),
            user_id,
            bill_type: bill_type.to_string(),
            category: category.to_string(),
            amount,
            due_date,
            status: BillStatus::Pending,
            paid_at: None,
            recurring,
        };
        self.write().bills.push(bill.clone());
        Ok(bill)
    }

    /// Registers a recurring transaction definition against an account.
    ///
    /// # Errors
    ///
    /// `InvalidAmount` or `AccountNotFound`.
    #[allow(clippy::too_many_arguments)]
    pub fn add_recurring(
        &self,
        user_id: UserId,
        number: &str,
        kind: TransactionKind,
        amount: Decimal,
        description: &str,
        category: &str,
        frequency: Frequency,
        next_date: NaiveDate,
    ) -> Result<RecurringTransaction, LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount(amount));
        }

        let mut state = self.write();
        let idx = find_account(&state, user_id, number)?;
        let def = RecurringTransaction {
            id: RecurringId::new(),
            user_id,
            account_id: state.accounts[idx].id,
            kind,
            amount,
            description: description.to_string(),
            category: category.to_string(),
            frequency,
            next_date,
            active: true,
        };
        state.recurring.push(def.clone());
        Ok(def)
    }

    /// Registers a category budget.
    ///
    /// # Errors
    ///
    /// `InvalidAmount` for a negative amount.
    pub fn add_budget(
        &self,
        user_id: UserId,
        category: &str,
        amount: Decimal,
        period: BudgetPeriod,
    ) -> Result<Budget, LedgerError> {
        if amount < Decimal::ZERO {
            return Err(LedgerError::InvalidAmount(amount));
        }

        let budget = Budget {
            id: BudgetId::new(),
            user_id,
            category: category.to_string(),
            amount,
            period,
        };
        self.write().budgets.push(budget.clone());
        Ok(budget)
    }
}

fn find_account(state: &State, user_id: UserId, number: &str) -> Result<usize, LedgerError> {
    state
        .accounts
        .iter()
        .position(|a| a.user_id == user_id && a.number == number)
        .ok_or_else(|| LedgerError::AccountNotFound(number.to_string()))
}

fn require_funds(account: &Account, amount: Decimal) -> Result<(), LedgerError> {
    if account.balance < amount {
        return Err(LedgerError::InsufficientFunds {
            required: amount,
            available: account.balance,
        });
    }
    Ok(())
}

/// Applies a signed amount to the account and appends the matching
/// ledger entry. Callers validate before reaching this point.
fn append_transaction(
    state: &mut State,
    account_idx: usize,
    kind: TransactionKind,
    amount: Decimal,
    description: String,
    category: String,
) -> Transaction {
    let account = &mut state.accounts[account_idx];
    let movement = RunningBalance::apply(account.balance, kind.signed_amount(amount));
    account.balance = movement.current_balance;

    let txn = Transaction {
        id: TransactionId::new(),
        account_id: account.id,
        kind,
        amount,
        description,
        category,
        balance_after: movement.current_balance,
        timestamp: Utc::now(),
    };
    state.transactions.push(txn.clone());
    txn
}
