//! Running balance chain for ledger entries.
//!
//! Every transaction snapshots the account balance it produced
//! (`balance_after`). The chain starts at the account's seed balance and
//! each entry's snapshot equals the previous snapshot plus the entry's
//! signed amount.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::Transaction;

/// Balance movement produced by one ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunningBalance {
    /// Balance before the entry.
    pub previous_balance: Decimal,
    /// Balance after the entry.
    pub current_balance: Decimal,
}

impl RunningBalance {
    /// Applies a signed change to a known balance.
    #[must_use]
    pub fn apply(previous_balance: Decimal, change: Decimal) -> Self {
        Self {
            previous_balance,
            current_balance: previous_balance + change,
        }
    }

    /// Chains another signed change after this one.
    #[must_use]
    pub fn then(&self, change: Decimal) -> Self {
        Self::apply(self.current_balance, change)
    }
}

/// Verifies that a transaction sequence forms a consistent chain from the
/// seed balance: each `balance_after` equals the prior one plus the
/// entry's signed amount.
///
/// Expects entries in chronological (oldest-first) order.
#[must_use]
pub fn chain_is_consistent(seed: Decimal, txns: &[Transaction]) -> bool {
    let mut balance = seed;
    for txn in txns {
        balance += txn.kind.signed_amount(txn.amount);
        if txn.balance_after != balance {
            return false;
        }
    }
    true
}
