//! Ledger Store: transaction-scoped storage for accounts, transactions,
//! bills, recurring definitions and budgets.
//!
//! Every mutation validates its inputs first and only then applies all
//! of its writes while holding the single write lock, so multi-row
//! operations (transfers, bill payments) are atomic: a failure leaves
//! state exactly as it was, and concurrent mutations against one
//! account serialize at the storage layer.
//!
//! Persistence technology is intentionally not chosen here; the store
//! keeps the storage-transaction contract in memory.

pub mod queries;
pub mod store;

pub use store::{LedgerStore, PaymentReceipt, TransferReceipt};
