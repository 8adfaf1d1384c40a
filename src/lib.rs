//! spendlog - Terminal-based personal expense ledger
//!
//! This library provides the ledger engine behind the `spendlog` binary:
//! entry validation, an in-memory ordered store, aggregation by category
//! and CSV export.
//!
//! # Architecture
//!
//! - `models`: The `Expense` entity, its `Amount`, and the entry validator
//! - `storage`: The session `Ledger` and atomic file writes
//! - `reports`: Grand total and per-category totals
//! - `export`: CSV serialization of the ledger
//! - `error`: Custom error types
//! - `config`: Paths, settings and logging setup
//! - `display`: Terminal formatting (tables, chart, reference budget)
//! - `cli`: The interactive session and command handlers
//!
//! # Example
//!
//! ```rust
//! use spendlog::models::validate;
//! use spendlog::reports::Totals;
//! use spendlog::storage::Ledger;
//!
//! let ledger = Ledger::new();
//! ledger.append(validate("Food", "10", "2024-01-01").unwrap());
//! ledger.append(validate("Rent", "900", "2024-01-02").unwrap());
//!
//! let totals = Totals::from_expenses(&ledger.all());
//! assert_eq!(totals.grand_total.value(), 910.0);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
