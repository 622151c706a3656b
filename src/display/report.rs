//! Report formatting utilities for terminal output

use crate::reports::CategoryTotal;

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Horizontal bar chart of spending by category
///
/// Bars are scaled to the largest category.
pub fn format_category_chart(categories: &[CategoryTotal], currency_symbol: &str) -> String {
    if categories.is_empty() {
        return "No expenses to chart.".to_string();
    }

    let max = categories
        .iter()
        .map(|c| c.total.as_f64())
        .fold(0.0_f64, f64::max);

    let mut output = String::new();
    output.push_str("Spending by Category\n");
    output.push_str(&separator(60));
    output.push('\n');

    for category in categories {
        output.push_str(&format!(
            "{:<10} {} {:>12} {:>5}\n",
            category.category,
            format_bar(category.total.as_f64(), max, 24),
            category.total.format_with_symbol(currency_symbol),
            format_percentage(category.percentage),
        ));
    }

    output
}
