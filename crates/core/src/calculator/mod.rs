//! Stateless financial calculators.
//!
//! Pure functions of their numeric inputs: no ledger access, reentrant,
//! no shared state. All arithmetic stays in `Decimal`; results are
//! rounded to 2 decimal places only when the output record is built.

pub mod error;
pub mod interest;
pub mod loan;

pub use error::CalculatorError;
pub use interest::{Compounding, InterestProjection, InterestRequest};
pub use loan::{LoanRequest, LoanSchedule};
