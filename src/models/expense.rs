//! Recurring monthly expense model
//!
//! Expenses are immutable values. There is no in-place update: an edit is
//! the removal of the old record plus the addition of a new one.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::ExpenseCategory;
use super::ids::ExpenseId;
use super::money::Money;

/// Earliest nominal due day
pub const MIN_DUE_DAY: u32 = 1;

/// Latest nominal due day
pub const MAX_DUE_DAY: u32 = 31;

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyName,
    InvalidAmount(String),
    NonPositiveAmount,
    AmountTooLarge,
    InvalidDueDay(String),
    DueDayOutOfRange(i64),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Expense name cannot be empty"),
            Self::InvalidAmount(s) => write!(f, "Amount is not a number: {}", s),
            Self::NonPositiveAmount => write!(f, "Amount must be greater than zero"),
            Self::AmountTooLarge => write!(f, "Amount cannot exceed {}", Money::MAX_AMOUNT),
            Self::InvalidDueDay(s) => write!(f, "Due day is not a whole number: {}", s),
            Self::DueDayOutOfRange(d) => write!(
                f,
                "Due day must be between {} and {}, got {}",
                MIN_DUE_DAY, MAX_DUE_DAY, d
            ),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

/// A bill that recurs on the same nominal day every month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: ExpenseId,
    pub name: String,
    pub amount: Money,
    pub due_day: u32,
    pub category: ExpenseCategory,
}

impl Expense {
    /// Create a new expense with a fresh id
    pub fn new(
        name: impl Into<String>,
        amount: Money,
        due_day: u32,
        category: ExpenseCategory,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            name: name.into(),
            amount,
            due_day,
            category,
        }
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.name.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyName);
        }

        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount);
        }
        if !self.amount.is_within_limit() {
            return Err(ExpenseValidationError::AmountTooLarge);
        }

        if !(MIN_DUE_DAY..=MAX_DUE_DAY).contains(&self.due_day) {
            return Err(ExpenseValidationError::DueDayOutOfRange(self.due_day as i64));
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, day {})", self.name, self.amount, self.due_day)
    }
}

/// Raw user input for a new expense, as typed into a form or on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub name: String,
    pub amount: String,
    pub due_day: String,
    pub category: ExpenseCategory,
}

impl ExpenseDraft {
    pub fn new(
        name: impl Into<String>,
        amount: impl Into<String>,
        due_day: impl Into<String>,
        category: ExpenseCategory,
    ) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            due_day: due_day.into(),
            category,
        }
    }

    /// Build a draft from an existing expense (used as the base of an edit)
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            name: expense.name.clone(),
            amount: format!("{}.{:02}", expense.amount.dollars(), expense.amount.cents_part()),
            due_day: expense.due_day.to_string(),
            category: expense.category,
        }
    }

    /// Parse and validate the draft into an expense with a fresh id
    pub fn into_expense(self) -> Result<Expense, ExpenseValidationError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(ExpenseValidationError::EmptyName);
        }

        let amount = Money::parse(&self.amount)
            .map_err(|_| ExpenseValidationError::InvalidAmount(self.amount.clone()))?;
        if !amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount);
        }
        if !amount.is_within_limit() {
            return Err(ExpenseValidationError::AmountTooLarge);
        }

        let due_day: i64 = self
            .due_day
            .trim()
            .parse()
            .map_err(|_| ExpenseValidationError::InvalidDueDay(self.due_day.clone()))?;
        if due_day < MIN_DUE_DAY as i64 || due_day > MAX_DUE_DAY as i64 {
            return Err(ExpenseValidationError::DueDayOutOfRange(due_day));
        }

        Ok(Expense::new(name, amount, due_day as u32, self.category))
    }
}
