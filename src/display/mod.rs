//! Display formatting for terminal output
//!
//! Provides utilities for formatting the ledger, its totals and the
//! reference budget for terminal display.

pub mod budget;
pub mod expense;
pub mod report;

pub use budget::format_budget_table;
pub use expense::{format_expense_line, format_expense_table};
pub use report::format_category_chart;
