//! Export module for spendlog
//!
//! Serializes the full ledger to a flat CSV file. Export is a snapshot: the
//! destination is replaced, never appended to.

pub mod csv;

pub use self::csv::{export_ledger_csv, export_to_path, HEADER};
