//! Report CLI commands
//!
//! Paycheck summary and month calendar for the viewed month.

use crate::config::settings::Settings;
use crate::display::format_category_chart;
use crate::error::PaysplitResult;
use crate::reports::{CalendarMonth, PaycheckSummary};
use crate::services::BudgetService;
use crate::storage::Storage;

use super::parse_month;

/// Show per-paycheck totals and the category chart
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    month: Option<String>,
) -> PaysplitResult<()> {
    let month = parse_month(month.as_deref())?;
    let service = BudgetService::open(storage)?;

    let summary = PaycheckSummary::generate(service.state(), &month);
    print!("{}", summary.format_terminal(&settings.currency_symbol));
    println!();
    print!(
        "{}",
        format_category_chart(&summary.categories, &settings.currency_symbol)
    );

    Ok(())
}

/// Show the month calendar
pub fn handle_calendar_command(
    storage: &Storage,
    settings: &Settings,
    month: Option<String>,
) -> PaysplitResult<()> {
    let month = parse_month(month.as_deref())?;
    let service = BudgetService::open(storage)?;

    let calendar = CalendarMonth::generate(service.state(), &month, settings.week_start);
    print!("{}", calendar.format_terminal(&settings.currency_symbol));

    Ok(())
}
