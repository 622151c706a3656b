//! Reports module for paysplit
//!
//! Recomputes paycheck assignment for the viewed month and summarizes it
//! as per-paycheck totals or as a month calendar.

pub mod calendar;
pub mod summary;

pub use calendar::{CalendarDay, CalendarMonth};
pub use summary::{
    assign_expense, category_totals, expense_total, remaining, AssignedExpense, CategoryTotal,
    PaycheckSummary, PeriodSummary,
};
