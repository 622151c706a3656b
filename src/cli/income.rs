//! Income CLI commands
//!
//! Implements CLI commands for the paydays, the net paycheck amount and the
//! monthly extras.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::{PaysplitError, PaysplitResult};
use crate::models::{IncomeConfig, Money};
use crate::services::BudgetService;
use crate::storage::Storage;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Show the income configuration
    Show,

    /// Set both paydays (days of the month, any order)
    Paydays {
        first: u32,
        second: u32,
    },

    /// Set the net amount of each paycheck
    Net {
        /// Amount (e.g., "2000" or "2000.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Set monthly extras, split evenly between both paychecks
    Extras {
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
}

/// Handle an income command
pub fn handle_income_command(
    storage: &Storage,
    settings: &Settings,
    cmd: IncomeCommands,
) -> PaysplitResult<()> {
    let mut service = BudgetService::open(storage)?;
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        IncomeCommands::Show => {
            print!("{}", format_income(&service.state().income, symbol));
        }

        IncomeCommands::Paydays { first, second } => {
            let income = service.set_paycheck_days(first, second)?;
            println!(
                "Paydays set to the {} and {}",
                income.paycheck_days[0], income.paycheck_days[1]
            );
        }

        IncomeCommands::Net { amount } => {
            let amount = parse_amount(&amount)?;
            let income = service.set_net_per_paycheck(amount)?;
            println!(
                "Net per paycheck set to {}",
                income.net_per_paycheck.format_with_symbol(symbol)
            );
        }

        IncomeCommands::Extras { amount } => {
            let amount = parse_amount(&amount)?;
            let income = service.set_extras(amount)?;
            println!("Extras set to {}", income.extras.format_with_symbol(symbol));
            println!(
                "Each paycheck now brings {}",
                income.per_paycheck_income().format_with_symbol(symbol)
            );
        }
    }

    Ok(())
}

fn parse_amount(text: &str) -> PaysplitResult<Money> {
    Money::parse(text).map_err(|e| PaysplitError::Validation(e.to_string()))
}

fn format_income(income: &IncomeConfig, currency_symbol: &str) -> String {
    let money = |m: Money| m.format_with_symbol(currency_symbol);
    let mut output = String::new();
    output.push_str("Income\n");
    output.push_str(&"=".repeat(40));
    output.push('\n');
    output.push_str(&format!(
        "  Paydays:            {} and {}\n",
        income.paycheck_days[0], income.paycheck_days[1]
    ));
    output.push_str(&format!("  Net per paycheck:   {}\n", money(income.net_per_paycheck)));
    output.push_str(&format!("  Extras:             {}\n", money(income.extras)));
    output.push_str(&format!(
        "  Per paycheck total: {}\n",
        money(income.per_paycheck_income())
    ));
    output.push_str(&format!("  Monthly income:     {}\n", money(income.monthly_income())));
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("2000").unwrap(), Money::from_units(2000));
        assert!(parse_amount("lots").unwrap_err().is_validation());
    }

    #[test]
    fn test_format_income() {
        let text = format_income(&IncomeConfig::default(), "$");
        assert!(text.contains("1 and 16"));
        assert!(text.contains("$2000.00"));

        let text = format_income(&IncomeConfig::default(), "€");
        assert!(text.contains("€4000.00"));
        assert!(!text.contains('$'));
    }
}
