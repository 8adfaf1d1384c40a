//! Core data models for spendlog
//!
//! The ledger has exactly one entity, the [`Expense`], plus the [`Amount`]
//! value type it carries.

pub mod amount;
pub mod expense;

pub use amount::Amount;
pub use expense::{parse_date, validate, Expense, DATE_FORMAT};
