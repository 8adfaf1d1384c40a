//! Spending totals
//!
//! Computes the grand total and per-category subtotals of a ledger snapshot.

use std::collections::HashMap;

use crate::models::{Amount, Expense};

/// Subtotal for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// Category label, exactly as stored
    pub category: String,
    /// Sum of amounts in this category
    pub total: Amount,
    /// Number of expenses in this category
    pub count: usize,
}

impl CategoryTotal {
    /// Percentage of the grand total spent in this category
    pub fn share(&self, grand_total: Amount) -> f64 {
        if grand_total.is_zero() {
            0.0
        } else {
            self.total.value() / grand_total.value() * 100.0
        }
    }
}

/// Grand total plus per-category breakdown
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Totals {
    /// Sum of every expense
    pub grand_total: Amount,
    /// Subtotals in the order each category was first seen
    pub by_category: Vec<CategoryTotal>,
}

impl Totals {
    /// Aggregate a ledger snapshot
    ///
    /// Categories are matched exactly (case- and whitespace-sensitive) and
    /// listed in first-seen order. An empty slice gives a zero total and no
    /// categories.
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        let mut by_category: Vec<CategoryTotal> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut grand_total = Amount::zero();

        for expense in expenses {
            grand_total += expense.amount();

            match index.get(expense.category()) {
                Some(&i) => {
                    let entry = &mut by_category[i];
                    entry.total += expense.amount();
                    entry.count += 1;
                }
                None => {
                    index.insert(expense.category(), by_category.len());
                    by_category.push(CategoryTotal {
                        category: expense.category().to_string(),
                        total: expense.amount(),
                        count: 1,
                    });
                }
            }
        }

        Self {
            grand_total,
            by_category,
        }
    }

    /// Check if there was nothing to aggregate
    pub fn is_empty(&self) -> bool {
        self.by_category.is_empty()
    }

    /// Subtotal for a category, if it appears in the ledger
    pub fn get(&self, category: &str) -> Option<Amount> {
        self.by_category
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.total)
    }

    /// Format the totals for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        if self.is_empty() {
            return "No expenses recorded.\n".to_string();
        }

        let mut output = String::new();

        output.push_str(&format!(
            "Total spent: {}\n",
            self.grand_total.format_with_symbol(currency_symbol)
        ));
        output.push_str(&"=".repeat(44));
        output.push('\n');

        output.push_str(&format!(
            "{:<24} {:>5} {:>12}\n",
            "Category", "Count", "Total"
        ));
        output.push_str(&"-".repeat(44));
        output.push('\n');

        for category in &self.by_category {
            output.push_str(&format!(
                "{:<24} {:>5} {:>12}\n",
                category.category,
                category.count,
                category.total.format_with_symbol(currency_symbol)
            ));
        }

        output
    }
}
