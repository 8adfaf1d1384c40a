//! Reference budget table
//!
//! A fixed estimate of monthly costs shown for comparison. It is static
//! display data and is never derived from, or written to, the ledger.

use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Estimated (low, high) monthly cost per category
pub const REFERENCE_BUDGET: &[(&str, u32, u32)] = &[
    ("Rent", 900, 2200),
    ("Transport", 50, 200),
    ("Food", 300, 500),
    ("Activities", 100, 300),
    ("Miscellaneous", 50, 150),
];

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Category")]
    category: &'static str,
    #[tabled(rename = "Cost (Low)")]
    low: u32,
    #[tabled(rename = "Cost (High)")]
    high: u32,
}

/// Sum of the low and high estimates
pub fn reference_totals() -> (u32, u32) {
    REFERENCE_BUDGET
        .iter()
        .fold((0, 0), |(low, high), (_, l, h)| (low + l, high + h))
}

/// Format the reference budget as a table with a trailing total row
pub fn format_budget_table() -> String {
    let (total_low, total_high) = reference_totals();

    let rows = REFERENCE_BUDGET
        .iter()
        .map(|&(category, low, high)| BudgetRow {
            category,
            low,
            high,
        })
        .chain(std::iter::once(BudgetRow {
            category: "Total",
            low: total_low,
            high: total_high,
        }));

    let mut output = String::from("Estimated Budget\n");
    output.push_str(
        &Table::new(rows).with(Style::sharp()).to_string(),
    );
    output.push('\n');
    output
}
