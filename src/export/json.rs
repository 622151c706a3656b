//! JSON Export functionality
//!
//! The JSON export is the persisted document itself, so it can be imported
//! back unchanged.

use crate::error::{PaysplitError, PaysplitResult};
use crate::models::BudgetState;
use crate::storage;
use std::io::Write;

/// Write the budget as pretty JSON
pub fn export_json<W: Write>(state: &BudgetState, writer: &mut W) -> PaysplitResult<()> {
    let json = storage::export_to(state)?;
    writeln!(writer, "{}", json).map_err(|e| PaysplitError::Export(e.to_string()))?;
    Ok(())
}

/// Parse a JSON export as a replacement budget
pub fn import_from_json(text: &str) -> PaysplitResult<BudgetState> {
    storage::import_from(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_export_reimports() {
        let state = BudgetState::default_dataset();

        let mut out = Vec::new();
        export_json(&state, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("\"paycheckDays\""));
        assert!(text.contains("\"dueDay\": 28"));
        assert_eq!(import_from_json(&text).unwrap(), state);
    }
}
