//! Display formatting for terminal output
//!
//! Tables and charts for the expense list and paycheck reports.

pub mod expense;
pub mod report;

pub use expense::{format_expense_details, format_expense_line, format_expense_list};
pub use report::format_category_chart;
