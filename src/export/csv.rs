//! CSV Export functionality
//!
//! Exports the month's expenses with the paycheck that covers each one.

use crate::error::PaysplitResult;
use crate::models::{BudgetState, ViewMonth};
use crate::reports::PaycheckSummary;
use std::io::Write;

/// Export the expense list for `month` to CSV
pub fn export_expenses_csv<W: Write>(
    state: &BudgetState,
    month: &ViewMonth,
    writer: &mut W,
) -> PaysplitResult<()> {
    PaycheckSummary::generate(state, month).export_csv(writer)
}
