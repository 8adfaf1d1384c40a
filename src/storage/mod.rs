//! Storage layer for spendlog
//!
//! The ledger itself lives in memory for the length of a session; the only
//! thing written to disk is an explicit export, which goes through the
//! atomic writer in `file_io`.

pub mod file_io;
pub mod ledger;

pub use file_io::write_atomic;
pub use ledger::Ledger;
