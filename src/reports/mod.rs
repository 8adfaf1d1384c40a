//! Reports module for spendlog
//!
//! Aggregations computed from a ledger snapshot. Reports never mutate the
//! ledger.

pub mod totals;

pub use totals::{CategoryTotal, Totals};
