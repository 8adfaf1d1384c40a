//! Expense display formatting
//!
//! Renders the ledger as a numbered table.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Expense;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Date")]
    date: String,
}

/// Format the ledger contents as a table, in insertion order
pub fn format_expense_table(expenses: &[Expense], currency_symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let rows = expenses.iter().enumerate().map(|(i, e)| ExpenseRow {
        position: i + 1,
        category: e.category().to_string(),
        amount: e.amount().format_with_symbol(currency_symbol),
        date: e.date_string(),
    });

    let mut output = Table::new(rows).with(Style::sharp()).to_string();
    output.push('\n');
    output
}

/// One-line summary of an expense
pub fn format_expense_line(expense: &Expense, currency_symbol: &str) -> String {
    format!(
        "{} {} ({})",
        expense.category(),
        expense.amount().format_with_symbol(currency_symbol),
        expense.date_string()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::validate;

    #[test]
    fn test_empty_table() {
        assert_eq!(format_expense_table(&[], "$"), "No expenses recorded.\n");
    }

    #[test]
    fn test_table_rows_in_order() {
        let expenses = vec![
            validate("Rent", "900", "2024-01-05").unwrap(),
            validate("Food", "42.5", "2024-01-06").unwrap(),
        ];
        let table = format_expense_table(&expenses, "$");

        assert!(table.contains("Category"));
        let rent = table.find("Rent").unwrap();
        let food = table.find("Food").unwrap();
        assert!(rent < food);
        assert!(table.contains("$42.50"));
        assert!(table.contains("2024-01-06"));
    }

    #[test]
    fn test_expense_line() {
        let expense = validate("Food", "4.5", "2024-01-06").unwrap();
        assert_eq!(format_expense_line(&expense, "$"), "Food $4.50 (2024-01-06)");
    }
}
