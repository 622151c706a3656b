//! Expense CLI commands
//!
//! Implements CLI commands for adding, listing, editing and removing
//! recurring monthly expenses.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_expense_details, format_expense_line, format_expense_list};
use crate::error::{PaysplitError, PaysplitResult};
use crate::models::{ExpenseCategory, ExpenseDraft};
use crate::services::BudgetService;
use crate::storage::Storage;

use super::parse_month;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Add a recurring expense
    Add {
        /// Expense name
        name: String,

        /// Amount per month (e.g., "1200" or "89.99")
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Day of the month it is due (1-31)
        #[arg(allow_hyphen_values = true)]
        due_day: String,

        /// Category (fixed, variable, savings, debt)
        #[arg(short, long, default_value = "fixed")]
        category: ExpenseCategory,
    },

    /// List expenses with the paycheck that covers each
    List {
        /// Month to assign paychecks for (YYYY-MM, defaults to current)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Show a single expense
    Show {
        /// Expense ID or unique ID prefix
        id: String,
    },

    /// Remove an expense
    #[command(alias = "rm")]
    Remove {
        /// Expense ID or unique ID prefix
        id: String,
    },

    /// Replace fields of an expense (the expense gets a new ID)
    Edit {
        /// Expense ID or unique ID prefix
        id: String,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,

        #[arg(short, long, allow_hyphen_values = true)]
        due_day: Option<String>,

        #[arg(short, long)]
        category: Option<ExpenseCategory>,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> PaysplitResult<()> {
    let mut service = BudgetService::open(storage)?;
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            name,
            amount,
            due_day,
            category,
        } => {
            let draft = ExpenseDraft::new(name, amount, due_day, category);
            match service.add_expense(draft)? {
                Some(expense) => {
                    println!("Added expense: {}", format_expense_line(&expense, symbol));
                    println!("  ID: {}", expense.id);
                }
                None => println!("No expense added."),
            }
        }

        ExpenseCommands::List { month } => {
            let month = parse_month(month.as_deref())?;
            let paydays = service.state().clamped_paydays(&month);
            println!("Expenses for {}", month.friendly());
            println!(
                "{}",
                format_expense_list(service.list(), &month, paydays, symbol)
            );
        }

        ExpenseCommands::Show { id } => {
            let id = service.resolve_id(&id)?;
            if let Some(expense) = service.state().get(&id) {
                print!("{}", format_expense_details(expense, symbol));
            }
        }

        ExpenseCommands::Remove { id } => {
            let id = service.resolve_id(&id)?;
            match service.remove_expense(&id)? {
                Some(removed) => {
                    println!("Removed expense: {}", format_expense_line(&removed, symbol))
                }
                None => println!("Nothing to remove."),
            }
        }

        ExpenseCommands::Edit {
            id,
            name,
            amount,
            due_day,
            category,
        } => {
            let id = service.resolve_id(&id)?;
            let mut draft = match service.state().get(&id) {
                Some(existing) => ExpenseDraft::from_expense(existing),
                None => return Err(PaysplitError::expense_not_found(id.as_str())),
            };

            if let Some(name) = name {
                draft.name = name;
            }
            if let Some(amount) = amount {
                draft.amount = amount;
            }
            if let Some(due_day) = due_day {
                draft.due_day = due_day;
            }
            if let Some(category) = category {
                draft.category = category;
            }

            match service.replace_expense(&id, draft)? {
                Some(expense) => {
                    println!("Updated expense: {}", format_expense_line(&expense, symbol));
                    println!("  New ID: {}", expense.id);
                }
                None => println!("No changes made."),
            }
        }
    }

    Ok(())
}
