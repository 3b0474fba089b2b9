//! Category budget tracking.

pub mod service;
pub mod types;

pub use service::status;
pub use types::{Budget, BudgetPeriod, BudgetStanding, BudgetStatus};
