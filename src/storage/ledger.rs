//! In-memory ledger store
//!
//! Holds the session's expenses in insertion order. Entries can only be
//! appended or removed from the tail.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Expense;

/// Ordered, append-only collection of validated expenses
///
/// All access goes through one `RwLock`, so a `Ledger` shared between
/// threads never exposes a half-applied append or removal.
#[derive(Debug, Default)]
pub struct Ledger {
    entries: RwLock<Vec<Expense>>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an expense to the end of the ledger
    pub fn append(&self, expense: Expense) {
        debug!(category = expense.category(), amount = %expense.amount(), "appending expense");
        self.write().push(expense);
    }

    /// Remove and return the most recently appended expense
    pub fn remove_last(&self) -> LedgerResult<Expense> {
        let removed = self.write().pop().ok_or(LedgerError::EmptyLedger)?;
        debug!(category = removed.category(), "removed last expense");
        Ok(removed)
    }

    /// Snapshot of all expenses in insertion order
    pub fn all(&self) -> Vec<Expense> {
        self.read().clone()
    }

    /// The most recently appended expense, if any
    pub fn last(&self) -> Option<Expense> {
        self.read().last().cloned()
    }

    /// Check if the ledger has no entries
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.read().len()
    }

    // A poisoned lock still guards a consistent Vec: push and pop either
    // happened or did not.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Expense>> {
        self.entries.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Expense>> {
        self.entries.write().unwrap_or_else(|e| e.into_inner())
    }
}
