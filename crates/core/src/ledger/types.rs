//! Ledger entity types.

use chrono::{DateTime, Days, Months, NaiveDate, Utc};
use finassist_shared::types::{AccountId, BillId, Currency, RecurringId, TransactionId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Account types available to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
    /// Everyday spending account.
    Checking,
    /// Interest-bearing savings account.
    Savings,
}

impl std::fmt::Display for AccountKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Checking => write!(f, "checking"),
            Self::Savings => write!(f, "savings"),
        }
    }
}

/// A user-owned ledger account.
///
/// Invariant: `balance` equals the `balance_after` of the account's most
/// recent transaction, or `opening_balance` if none exist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique account ID.
    pub id: AccountId,
    /// Owning user.
    pub user_id: UserId,
    /// Unique human-facing account number.
    pub number: String,
    /// Account type.
    pub kind: AccountKind,
    /// Current balance in major currency units.
    pub balance: Decimal,
    /// Balance before the account's first transaction (running balance
    /// chain seed). Seed amounts arrive as an initial deposit entry, so
    /// this is normally zero.
    pub opening_balance: Decimal,
    /// Account currency.
    pub currency: Currency,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Direction-bearing transaction classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Money entering the account.
    Deposit,
    /// Money leaving the account (cash withdrawal).
    Withdrawal,
    /// Bill or merchant payment.
    Payment,
    /// Incoming side of an account-to-account transfer.
    TransferIn,
    /// Outgoing side of an account-to-account transfer.
    TransferOut,
}

impl TransactionKind {
    /// Returns true for kinds that reduce the account balance.
    #[must_use]
    pub const fn is_outflow(self) -> bool {
        matches!(self, Self::Withdrawal | Self::Payment | Self::TransferOut)
    }

    /// Applies the kind's sign to a positive amount.
    #[must_use]
    pub fn signed_amount(self, amount: Decimal) -> Decimal {
        if self.is_outflow() { -amount } else { amount }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Deposit => write!(f, "deposit"),
            Self::Withdrawal => write!(f, "withdrawal"),
            Self::Payment => write!(f, "payment"),
            Self::TransferIn => write!(f, "transfer_in"),
            Self::TransferOut => write!(f, "transfer_out"),
        }
    }
}

/// An immutable ledger entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique transaction ID.
    pub id: TransactionId,
    /// Account this entry belongs to.
    pub account_id: AccountId,
    /// Entry classification.
    pub kind: TransactionKind,
    /// Positive amount in major currency units; `kind` carries the sign.
    pub amount: Decimal,
    /// Free-text description.
    pub description: String,
    /// Category label for spending rollups.
    pub category: String,
    /// Account balance immediately after this entry.
    pub balance_after: Decimal,
    /// Creation timestamp.
    pub timestamp: DateTime<Utc>,
}

/// Bill payment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillStatus {
    /// Awaiting payment.
    Pending,
    /// Paid; transitions here exactly once.
    Paid,
}

/// A bill owed by a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bill {
    /// Unique bill ID.
    pub id: BillId,
    /// Owning user.
    pub user_id: UserId,
    /// Bill type used to locate it for payment (e.g. "electricity").
    pub bill_type: String,
    /// Category the payment transaction is filed under.
    pub category: String,
    /// Amount due.
    pub amount: Decimal,
    /// Due date.
    pub due_date: NaiveDate,
    /// Payment status.
    pub status: BillStatus,
    /// Set when the bill transitions to paid.
    pub paid_at: Option<DateTime<Utc>>,
    /// Whether a fresh pending bill is expected next period.
    pub recurring: bool,
}

/// Posting frequency for recurring transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    /// Every day.
    Daily,
    /// Every 7 days.
    Weekly,
    /// Every calendar month (end-of-month dates clamp).
    Monthly,
    /// Every calendar year.
    Yearly,
}

impl Frequency {
    /// Advances a date by one occurrence of this frequency.
    ///
    /// Monthly and yearly advances clamp to the last day of the target
    /// month, so Jan 31 + monthly = Feb 28 (or 29 in a leap year).
    #[must_use]
    pub fn next_after(self, date: NaiveDate) -> NaiveDate {
        match self {
            Self::Daily => date + Days::new(1),
            Self::Weekly => date + Days::new(7),
            Self::Monthly => date + Months::new(1),
            Self::Yearly => date + Months::new(12),
        }
    }
}

/// A recurring transaction definition.
///
/// Posting an occurrence is triggered externally; the definition only
/// records what to post and when the next occurrence is due.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringTransaction {
    /// Unique definition ID.
    pub id: RecurringId,
    /// Owning user.
    pub user_id: UserId,
    /// Target account.
    pub account_id: AccountId,
    /// Kind of the posted entries.
    pub kind: TransactionKind,
    /// Amount of each occurrence.
    pub amount: Decimal,
    /// Description applied to posted entries.
    pub description: String,
    /// Category applied to posted entries.
    pub category: String,
    /// Posting frequency.
    pub frequency: Frequency,
    /// Next date an occurrence is due.
    pub next_date: NaiveDate,
    /// Inactive definitions are never posted.
    pub active: bool,
}
