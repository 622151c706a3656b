//! YAML Export functionality
//!
//! Same document as the JSON export, in a form that is easier to read and
//! edit by hand.

use crate::error::{PaysplitError, PaysplitResult};
use crate::models::BudgetState;
use crate::storage::budget::state_from_value;
use std::io::Write;

/// Export the budget to YAML
pub fn export_yaml<W: Write>(state: &BudgetState, writer: &mut W) -> PaysplitResult<()> {
    writeln!(writer, "# paysplit budget export")
        .map_err(|e| PaysplitError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"))
        .map_err(|e| PaysplitError::Export(e.to_string()))?;
    writeln!(writer, "#").map_err(|e| PaysplitError::Export(e.to_string()))?;
    writeln!(
        writer,
        "# Load it back with: paysplit import <file> --format yaml"
    )
    .map_err(|e| PaysplitError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| PaysplitError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, state).map_err(|e| PaysplitError::Export(e.to_string()))?;

    Ok(())
}

/// Parse a YAML export as a replacement budget
///
/// The text is read into a generic document first so it goes through the
/// same shape and record checks as a JSON import.
pub fn import_from_yaml(yaml_str: &str) -> PaysplitResult<BudgetState> {
    let value: serde_json::Value = serde_yaml::from_str(yaml_str)
        .map_err(|e| PaysplitError::InvalidFormat(format!("not valid YAML: {}", e)))?;

    state_from_value(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, ExpenseCategory, IncomeConfig, Money};

    #[test]
    fn test_yaml_export() {
        let state = BudgetState::default_dataset();

        let mut output = Vec::new();
        export_yaml(&state, &mut output).unwrap();
        let yaml = String::from_utf8(output).unwrap();

        assert!(yaml.starts_with("# paysplit budget export"));
        assert!(yaml.contains("paycheckDays:"));
        assert!(yaml.contains("name: Emergency Fund"));
        assert_eq!(import_from_yaml(&yaml).unwrap(), state);
    }

    #[test]
    fn test_yaml_keeps_cents() {
        let state = BudgetState::new(
            IncomeConfig::default(),
            vec![Expense::new(
                "Water",
                Money::from_cents(4550),
                9,
                ExpenseCategory::Variable,
            )],
        );

        let mut output = Vec::new();
        export_yaml(&state, &mut output).unwrap();
        let restored = import_from_yaml(&String::from_utf8(output).unwrap()).unwrap();

        assert_eq!(restored.expenses[0].amount, Money::from_cents(4550));
    }

    #[test]
    fn test_yaml_import_rejects_missing_expenses() {
        let yaml = "income:\n  paycheckDays: [1, 16]\n  netPerPaycheck: 100\n  extras: 0\n";
        assert!(import_from_yaml(yaml).unwrap_err().is_invalid_format());
    }

    #[test]
    fn test_yaml_import_rejects_garbage() {
        assert!(import_from_yaml("[unclosed").unwrap_err().is_invalid_format());
    }
}
