//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod backup;
pub mod budget;
pub mod expense;
pub mod export;
pub mod history;
pub mod import;
pub mod income;
pub mod report;

pub use backup::{handle_backup_command, BackupCommands};
pub use budget::{handle_config_command, handle_init_command, handle_reset_command};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportFormat};
pub use history::handle_history_command;
pub use import::{handle_import_command, ImportFormat};
pub use income::{handle_income_command, IncomeCommands};
pub use report::{handle_calendar_command, handle_summary_command};

use crate::error::{PaysplitError, PaysplitResult};
use crate::models::ViewMonth;

/// Parse an optional `YYYY-MM` argument, defaulting to the current month
pub fn parse_month(month: Option<&str>) -> PaysplitResult<ViewMonth> {
    match month {
        Some(text) => text
            .parse::<ViewMonth>()
            .map_err(|e| PaysplitError::Validation(e.to_string())),
        None => Ok(ViewMonth::current()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month() {
        let month = parse_month(Some("2024-02")).unwrap();
        assert_eq!((month.year(), month.month()), (2024, 2));

        assert!(parse_month(Some("2024-13")).unwrap_err().is_validation());
    }
}
