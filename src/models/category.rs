//! Expense categories
//!
//! The category set is closed: every expense is exactly one of four kinds,
//! and reports match on the enum exhaustively.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of recurring expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    /// Same amount every month (rent, insurance)
    #[default]
    Fixed,
    /// Amount changes month to month (utilities, groceries)
    Variable,
    /// Money set aside
    Savings,
    /// Loan and card payments
    Debt,
}

impl ExpenseCategory {
    /// All categories in display order
    pub fn all() -> &'static [ExpenseCategory] {
        &[Self::Fixed, Self::Variable, Self::Savings, Self::Debt]
    }

    /// Lowercase label used on disk and on the command line
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Variable => "variable",
            Self::Savings => "savings",
            Self::Debt => "debt",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fixed => "Fixed",
            Self::Variable => "Variable",
            Self::Savings => "Savings",
            Self::Debt => "Debt",
        };
        f.pad(name)
    }
}

/// Error returned when a category label is not recognised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown category '{}' (expected fixed, variable, savings or debt)",
            self.0
        )
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for ExpenseCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fixed" => Ok(Self::Fixed),
            "variable" => Ok(Self::Variable),
            "savings" => Ok(Self::Savings),
            "debt" => Ok(Self::Debt),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}
