//! The complete budget: income configuration plus the ordered expense list
//!
//! This is the unit of persistence. It is always saved and loaded whole.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::category::ExpenseCategory;
use super::expense::Expense;
use super::ids::ExpenseId;
use super::income::IncomeConfig;
use super::money::Money;
use super::period::ViewMonth;

/// Errors found when checking a whole budget
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateValidationError {
    Income(String),
    Expense { id: ExpenseId, reason: String },
    DuplicateId(ExpenseId),
    TotalOutOfRange,
}

impl std::fmt::Display for StateValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Income(reason) => write!(f, "income: {}", reason),
            Self::Expense { id, reason } => write!(f, "expense {}: {}", id, reason),
            Self::DuplicateId(id) => write!(f, "duplicate expense id {}", id),
            Self::TotalOutOfRange => write!(f, "expense total is too large"),
        }
    }
}

impl std::error::Error for StateValidationError {}

/// Income plus recurring expenses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetState {
    pub income: IncomeConfig,
    pub expenses: Vec<Expense>,
}

impl BudgetState {
    pub fn new(income: IncomeConfig, expenses: Vec<Expense>) -> Self {
        Self { income, expenses }
    }

    /// Starter budget used on first run and when stored data is unreadable
    pub fn default_dataset() -> Self {
        Self {
            income: IncomeConfig::default(),
            expenses: vec![
                Expense::new("Rent", Money::from_units(1200), 1, ExpenseCategory::Fixed),
                Expense::new("Electric", Money::from_units(90), 20, ExpenseCategory::Variable),
                Expense::new("Car Loan", Money::from_units(350), 15, ExpenseCategory::Debt),
                Expense::new(
                    "Emergency Fund",
                    Money::from_units(200),
                    28,
                    ExpenseCategory::Savings,
                ),
            ],
        }
    }

    /// Budget produced by a reset: default income, no expenses
    pub fn empty() -> Self {
        Self {
            income: IncomeConfig::default(),
            expenses: Vec::new(),
        }
    }

    /// Append an expense, keeping insertion order
    pub fn add(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Remove the expense with this id; returns it if it was present
    pub fn remove(&mut self, id: &ExpenseId) -> Option<Expense> {
        let index = self.expenses.iter().position(|e| &e.id == id)?;
        Some(self.expenses.remove(index))
    }

    /// All expenses in insertion order
    pub fn list(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn get(&self, id: &ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| &e.id == id)
    }

    /// Expenses whose id equals `query` or starts with it
    ///
    /// An exact match wins over prefix matches.
    pub fn find_matching(&self, query: &str) -> Vec<&Expense> {
        if let Some(exact) = self.expenses.iter().find(|e| e.id.as_str() == query) {
            return vec![exact];
        }
        self.expenses
            .iter()
            .filter(|e| e.id.matches_prefix(query))
            .collect()
    }

    /// Sum of every expense amount
    pub fn total_expenses(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Both paydays clamped to `month`, in stored order
    pub fn clamped_paydays(&self, month: &ViewMonth) -> (u32, u32) {
        let [p1, p2] = self.income.paycheck_days;
        (month.clamp(p1 as i64), month.clamp(p2 as i64))
    }

    /// Check every invariant of a budget loaded from outside
    pub fn validate(&self) -> Result<(), StateValidationError> {
        self.income
            .validate()
            .map_err(|e| StateValidationError::Income(e.to_string()))?;

        let mut seen = HashSet::new();
        let mut total = Money::zero();
        for expense in &self.expenses {
            expense
                .validate()
                .map_err(|e| StateValidationError::Expense {
                    id: expense.id.clone(),
                    reason: e.to_string(),
                })?;

            if !seen.insert(&expense.id) {
                return Err(StateValidationError::DuplicateId(expense.id.clone()));
            }

            total = total
                .checked_add(expense.amount)
                .ok_or(StateValidationError::TotalOutOfRange)?;
        }

        Ok(())
    }
}

impl Default for BudgetState {
    fn default() -> Self {
        Self::default_dataset()
    }
}
