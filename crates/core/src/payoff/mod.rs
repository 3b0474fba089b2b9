//! Multi-debt payoff simulation.
//!
//! Month-by-month cascade over a strategy-ordered debt list, with a
//! shared payment pool that rolls from each paid-off debt onto the next.

pub mod cache;
pub mod engine;
pub mod error;
pub mod types;

pub use cache::{CachedPlan, PayoffCache};
pub use engine::simulate;
pub use error::PayoffError;
pub use types::{Debt, DebtPayoff, PayoffPlan, PayoffRequest, Strategy};
