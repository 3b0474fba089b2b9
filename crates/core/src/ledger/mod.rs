//! Ledger domain: accounts, transactions, bills and recurring definitions.
//!
//! The ledger is append-only: transactions are immutable once written and
//! every entry carries a `balance_after` snapshot that chains from the
//! account's seed balance.

pub mod balance;
pub mod error;
pub mod types;

pub use balance::RunningBalance;
pub use error::LedgerError;
pub use types::{
    Account, AccountKind, Bill, BillStatus, Frequency, RecurringTransaction, Transaction,
    TransactionKind,
};
