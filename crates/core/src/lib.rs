//! Core business logic for Finassist.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `ledger` - Accounts, transactions, bills and recurring definitions
//! - `calculator` - Loan amortization and compound interest projections
//! - `payoff` - Debt payoff simulation (snowball / avalanche)
//! - `budget` - Category budget tracking
//! - `reporting` - Statements, spending breakdowns and trends
//! - `currency` - Currency conversion via a static rate table

pub mod budget;
pub mod calculator;
pub mod currency;
pub mod ledger;
pub mod payoff;
pub mod reporting;
