//! Aggregation helpers over transaction history.
//!
//! Pure functions over transaction slices; the store supplies the
//! slices and owns the windows' defaults.

pub mod service;
pub mod types;

pub use service::{monthly_trend, spending_by_category, statement};
pub use types::{CategorySpend, SpendingBreakdown, Statement, TrendPoint};
