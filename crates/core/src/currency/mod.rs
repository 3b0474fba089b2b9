//! Currency conversion via a static rate table.
//!
//! Rates are USD-relative and supplied externally; nothing here fetches
//! live data. Cross-currency arithmetic beyond the rate lookup is out
//! of scope.

pub mod conversion;
pub mod error;
pub mod rates;

pub use conversion::{ConversionResult, convert};
pub use error::CurrencyError;
pub use rates::RateTable;
