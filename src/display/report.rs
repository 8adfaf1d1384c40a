//! Report formatting utilities for terminal output
//!
//! Renders aggregated totals as a text bar chart of category shares.

use crate::reports::Totals;

/// Format a percentage with one decimal place
pub fn format_percentage(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

/// Render the share of each category as a horizontal bar chart
///
/// Bars are scaled against the grand total, so they add up to the full
/// width. Returns `None` when there is nothing to draw.
pub fn format_category_chart(totals: &Totals, width: usize, currency_symbol: &str) -> Option<String> {
    if totals.is_empty() {
        return None;
    }

    const LABEL_WIDTH: usize = 16;
    let mut output = String::new();

    output.push_str("Spending by Category\n");
    output.push_str(&separator(LABEL_WIDTH + width + 22));
    output.push('\n');

    for category in &totals.by_category {
        let share = category.share(totals.grand_total);
        output.push_str(&format!(
            "{:<label$} {} {:>6} {:>12}\n",
            truncate(&category.category, LABEL_WIDTH),
            format_bar(share, 100.0, width),
            format_percentage(share),
            category.total.format_with_symbol(currency_symbol),
            label = LABEL_WIDTH,
        ));
    }

    Some(output)
}
