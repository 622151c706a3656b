//! Expense display formatting
//!
//! Formats the expense list for terminal output.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Expense, Money, ViewMonth};
use crate::reports::assign_expense;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Due")]
    due: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Paycheck")]
    paycheck: u8,
}

/// Format expenses as a table in insertion order
///
/// Due days that fall past the end of `month` show the clamped day too,
/// e.g. `31 (28)`.
pub fn format_expense_list(
    expenses: &[Expense],
    month: &ViewMonth,
    paydays: (u32, u32),
    currency_symbol: &str,
) -> String {
    if expenses.is_empty() {
        return "No expenses found.".to_string();
    }

    let rows: Vec<ExpenseRow> = expenses
        .iter()
        .map(|e| {
            let clamped = month.clamp(e.due_day as i64);
            ExpenseRow {
                id: e.id.short().to_string(),
                name: e.name.clone(),
                amount: e.amount.format_with_symbol(currency_symbol),
                due: if clamped == e.due_day {
                    e.due_day.to_string()
                } else {
                    format!("{} ({})", e.due_day, clamped)
                },
                category: e.category.to_string(),
                paycheck: assign_expense(e, month, paydays).number(),
            }
        })
        .collect();

    let total: Money = expenses.iter().map(|e| e.amount).sum();

    let mut output = Table::new(rows).with(Style::rounded()).to_string();
    output.push_str(&format!(
        "\n{} expenses, {} total\n",
        expenses.len(),
        total.format_with_symbol(currency_symbol)
    ));
    output
}

/// One-line description, e.g. `Rent (€1200.00, day 1)`
pub fn format_expense_line(expense: &Expense, currency_symbol: &str) -> String {
    format!(
        "{} ({}, day {})",
        expense.name,
        expense.amount.format_with_symbol(currency_symbol),
        expense.due_day
    )
}

/// Format a single expense
pub fn format_expense_details(expense: &Expense, currency_symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Expense: {}\n", expense.name));
    output.push_str(&format!("  ID:       {}\n", expense.id));
    output.push_str(&format!(
        "  Amount:   {}\n",
        expense.amount.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!("  Due day:  {}\n", expense.due_day));
    output.push_str(&format!("  Category: {}\n", expense.category));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetState, ExpenseCategory};

    #[test]
    fn test_empty_list() {
        let month = ViewMonth::new(2024, 1).unwrap();
        assert_eq!(format_expense_list(&[], &month, (1, 16), "$"), "No expenses found.");
    }

    #[test]
    fn test_expense_table() {
        let state = BudgetState::default_dataset();
        let month = ViewMonth::new(2024, 1).unwrap();

        let table = format_expense_list(&state.expenses, &month, (1, 16), "$");
        assert!(table.contains("Car Loan"));
        assert!(table.contains("$1200.00"));
        assert!(table.contains("4 expenses"));
    }

    #[test]
    fn test_currency_symbol_used() {
        let state = BudgetState::default_dataset();
        let month = ViewMonth::new(2024, 1).unwrap();

        let table = format_expense_list(&state.expenses, &month, (1, 16), "£");
        assert!(table.contains("£1200.00"));
        assert!(!table.contains('$'));

        let line = format_expense_line(&state.expenses[0], "£");
        assert!(line.starts_with(&format!("{} (£", state.expenses[0].name)));
    }

    #[test]
    fn test_clamped_due_day_shown() {
        let expense = Expense::new("Late", Money::from_units(5), 31, ExpenseCategory::Fixed);
        let month = ViewMonth::new(2023, 2).unwrap();

        let table = format_expense_list(&[expense], &month, (1, 16), "$");
        assert!(table.contains("31 (28)"));
    }

    #[test]
    fn test_details() {
        let expense = Expense::new("Gym", Money::from_units(30), 5, ExpenseCategory::Variable);
        let text = format_expense_details(&expense, "€");
        assert!(text.contains("Expense: Gym"));
        assert!(text.contains("Due day:  5"));
        assert!(text.contains("€30.00"));
    }
}
