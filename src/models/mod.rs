//! Core data models for paysplit
//!
//! This module contains the data structures of the budgeting domain:
//! expenses, income, the whole budget state, and the calendar arithmetic
//! that maps due days onto paychecks.

pub mod category;
pub mod expense;
pub mod ids;
pub mod income;
pub mod money;
pub mod paycheck;
pub mod period;
pub mod state;

pub use category::ExpenseCategory;
pub use expense::{Expense, ExpenseDraft, ExpenseValidationError};
pub use ids::ExpenseId;
pub use income::{IncomeConfig, IncomeValidationError};
pub use money::Money;
pub use paycheck::Paycheck;
pub use period::{clamp_day, days_in_month, ViewMonth};
pub use state::{BudgetState, StateValidationError};
