//! Budget persistence
//!
//! Reads and writes the whole `BudgetState` as one JSON document under a
//! single key. Reading never fails: a missing or damaged document is
//! replaced by the default dataset. Imports go through the same document
//! checks but report failures instead of hiding them.

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{PaysplitError, PaysplitResult};
use crate::models::{BudgetState, ViewMonth};

use super::store::KeyValueStore;

/// Key the budget document is stored under
pub const STATE_KEY: &str = "budget-state";

/// Key an unreadable budget document is moved to before it is replaced
pub const CORRUPT_STATE_KEY: &str = "budget-state-corrupt";

/// Check the outer shape of a budget document and convert it to a state
///
/// The document must have an `income` field and an `expenses` array; every
/// record must then parse and satisfy the model invariants.
pub fn state_from_value(value: Value) -> PaysplitResult<BudgetState> {
    let object = value
        .as_object()
        .ok_or_else(|| PaysplitError::InvalidFormat("document is not an object".into()))?;

    match object.get("income") {
        Some(income) if !income.is_null() => {}
        _ => {
            return Err(PaysplitError::InvalidFormat(
                "missing 'income' field".into(),
            ))
        }
    }

    if !object.get("expenses").is_some_and(Value::is_array) {
        return Err(PaysplitError::InvalidFormat(
            "'expenses' must be a list".into(),
        ));
    }

    let state: BudgetState = serde_json::from_value(value)
        .map_err(|e| PaysplitError::InvalidFormat(e.to_string()))?;

    state
        .validate()
        .map_err(|e| PaysplitError::InvalidFormat(e.to_string()))?;

    Ok(state)
}

/// Parse JSON text as a complete budget
pub fn parse_budget(text: &str) -> PaysplitResult<BudgetState> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| PaysplitError::InvalidFormat(format!("not valid JSON: {}", e)))?;
    state_from_value(value)
}

/// Read the stored budget, reporting absence and damage separately
///
/// Returns `Ok(None)` when nothing is stored and `StorageCorrupt` when the
/// stored text cannot be used. Errors from the store itself pass through.
pub fn try_load(store: &dyn KeyValueStore) -> PaysplitResult<Option<BudgetState>> {
    let text = match store.get(STATE_KEY)? {
        Some(text) => text,
        None => return Ok(None),
    };

    parse_budget(&text)
        .map(Some)
        .map_err(|e| PaysplitError::StorageCorrupt(e.to_string()))
}

/// Load the stored budget, falling back to the default dataset
pub fn load(store: &dyn KeyValueStore) -> BudgetState {
    match try_load(store) {
        Ok(Some(state)) => {
            debug!(expenses = state.expenses.len(), "loaded budget");
            state
        }
        Ok(None) => {
            debug!("no stored budget, using default dataset");
            BudgetState::default_dataset()
        }
        Err(e) => {
            warn!(error = %e, "stored budget unusable, using default dataset");
            BudgetState::default_dataset()
        }
    }
}

/// Copy the unreadable stored document aside so it can be replaced
pub fn preserve_corrupt(store: &dyn KeyValueStore) -> PaysplitResult<()> {
    if let Some(text) = store.get(STATE_KEY)? {
        store.set(CORRUPT_STATE_KEY, &text)?;
    }
    Ok(())
}

/// Serialize and store the whole budget, replacing the previous document
pub fn save(store: &dyn KeyValueStore, state: &BudgetState) -> PaysplitResult<()> {
    let text = export_to(state)?;
    store.set(STATE_KEY, &text)?;
    debug!(expenses = state.expenses.len(), "saved budget");
    Ok(())
}

/// Parse external text as a full replacement budget
///
/// Nothing is applied here; the caller swaps the returned state in only on
/// success, so a rejected import leaves the current budget untouched.
pub fn import_from(text: &str) -> PaysplitResult<BudgetState> {
    parse_budget(text)
}

/// Serialize the budget in the stored format
pub fn export_to(state: &BudgetState) -> PaysplitResult<String> {
    serde_json::to_string_pretty(state).map_err(PaysplitError::from)
}

/// Default file name for an export of `month`
pub fn export_filename(month: &ViewMonth, extension: &str) -> String {
    format!("paysplit-{}.{}", month, extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, ExpenseCategory, ExpenseId, IncomeConfig, Money};
    use crate::storage::store::{FileStore, MemoryStore};
    use tempfile::TempDir;

    fn sample_state() -> BudgetState {
        BudgetState::new(
            IncomeConfig::new([15, 30], Money::from_units(20000), Money::from_cents(100050)),
            vec![
                Expense {
                    id: ExpenseId::from("1700000000000"),
                    name: "Rent".into(),
                    amount: Money::from_units(10000),
                    due_day: 1,
                    category: ExpenseCategory::Fixed,
                },
                Expense::new("Phone", Money::from_cents(4599), 31, ExpenseCategory::Variable),
            ],
        )
    }

    #[test]
    fn test_save_load_round_trip() {
        let store = MemoryStore::new();
        let state = sample_state();

        save(&store, &state).unwrap();
        assert_eq!(load(&store), state);
    }

    #[test]
    fn test_round_trip_through_files() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf());
        let state = sample_state();

        save(&store, &state).unwrap();
        assert_eq!(load(&store), state);
    }

    #[test]
    fn test_missing_state_loads_default() {
        let store = MemoryStore::new();
        let state = load(&store);

        assert_eq!(state.income, BudgetState::default_dataset().income);
        assert_eq!(state.expenses.len(), 4);
        assert!(try_load(&store).unwrap().is_none());
    }

    #[test]
    fn test_corrupt_state_loads_default() {
        let store = MemoryStore::new();
        store.set(STATE_KEY, "{{{ not json").unwrap();

        let state = load(&store);
        assert_eq!(state.expenses.len(), 4);
        assert!(matches!(
            try_load(&store),
            Err(PaysplitError::StorageCorrupt(_))
        ));
    }

    #[test]
    fn test_preserve_corrupt() {
        let store = MemoryStore::new();
        preserve_corrupt(&store).unwrap();
        assert_eq!(store.get(CORRUPT_STATE_KEY).unwrap(), None);

        store.set(STATE_KEY, "{{ half written").unwrap();
        preserve_corrupt(&store).unwrap();
        assert_eq!(
            store.get(CORRUPT_STATE_KEY).unwrap().as_deref(),
            Some("{{ half written")
        );
    }

    #[test]
    fn test_wrong_shape_loads_default() {
        let store = MemoryStore::new();
        store
            .set(STATE_KEY, r#"{"income": {"paycheckDays": [1, 16], "netPerPaycheck": 1, "extras": 0}, "expenses": {}}"#)
            .unwrap();

        assert_eq!(load(&store).expenses.len(), 4);
    }

    #[test]
    fn test_import_accepts_valid_document() {
        let text = r#"{
            "income": {"paycheckDays": [16, 1], "netPerPaycheck": 20000, "extras": 1000},
            "expenses": [
                {"id": "a1", "name": "Rent", "amount": 10000, "dueDay": 1, "category": "fixed"},
                {"id": "a2", "name": "Card", "amount": 250.75, "dueDay": 22, "category": "debt"}
            ]
        }"#;

        let state = import_from(text).unwrap();
        assert_eq!(state.income.paycheck_days, [16, 1]);
        assert_eq!(state.expenses.len(), 2);
        assert_eq!(state.expenses[1].amount.cents(), 25075);
        assert_eq!(state.expenses[1].category, ExpenseCategory::Debt);
    }

    #[test]
    fn test_import_rejects_missing_expenses() {
        let err = import_from(
            r#"{"income": {"paycheckDays": [1, 16], "netPerPaycheck": 100, "extras": 0}}"#,
        )
        .unwrap_err();
        assert!(err.is_invalid_format());
        assert!(err.to_string().contains("expenses"));
    }

    #[test]
    fn test_import_rejects_missing_income() {
        let err = import_from(r#"{"expenses": []}"#).unwrap_err();
        assert!(err.to_string().contains("income"));
    }

    #[test]
    fn test_import_rejects_bad_records() {
        let bad_category = r#"{
            "income": {"paycheckDays": [1, 16], "netPerPaycheck": 100, "extras": 0},
            "expenses": [{"id": "a", "name": "X", "amount": 5, "dueDay": 3, "category": "food"}]
        }"#;
        assert!(import_from(bad_category).unwrap_err().is_invalid_format());

        let bad_day = r#"{
            "income": {"paycheckDays": [1, 16], "netPerPaycheck": 100, "extras": 0},
            "expenses": [{"id": "a", "name": "X", "amount": 5, "dueDay": 45, "category": "fixed"}]
        }"#;
        assert!(import_from(bad_day).unwrap_err().is_invalid_format());

        let duplicate = r#"{
            "income": {"paycheckDays": [1, 16], "netPerPaycheck": 100, "extras": 0},
            "expenses": [
                {"id": "a", "name": "X", "amount": 5, "dueDay": 3, "category": "fixed"},
                {"id": "a", "name": "Y", "amount": 6, "dueDay": 4, "category": "fixed"}
            ]
        }"#;
        assert!(import_from(duplicate).unwrap_err().is_invalid_format());
    }

    #[test]
    fn test_import_rejects_amounts_that_would_overflow_totals() {
        let text = r#"{
            "income": {"paycheckDays": [1, 16], "netPerPaycheck": 100, "extras": 0},
            "expenses": [
                {"id": "a", "name": "X", "amount": 50000000000000000, "dueDay": 3, "category": "fixed"},
                {"id": "b", "name": "Y", "amount": 50000000000000000, "dueDay": 20, "category": "fixed"}
            ]
        }"#;
        assert!(import_from(text).unwrap_err().is_invalid_format());

        let huge_income = r#"{
            "income": {"paycheckDays": [1, 16], "netPerPaycheck": 50000000000000000, "extras": 0},
            "expenses": []
        }"#;
        assert!(import_from(huge_income).unwrap_err().is_invalid_format());
    }

    #[test]
    fn test_import_rejects_non_json() {
        assert!(import_from("hello").unwrap_err().is_invalid_format());
        assert!(import_from("[]").unwrap_err().is_invalid_format());
    }

    #[test]
    fn test_export_matches_stored_format() {
        let state = sample_state();
        let text = export_to(&state).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["income"]["paycheckDays"], serde_json::json!([15, 30]));
        assert_eq!(value["income"]["extras"], serde_json::json!(1000.5));
        assert_eq!(value["expenses"][0]["dueDay"], serde_json::json!(1));
        assert_eq!(import_from(&text).unwrap(), state);
    }

    #[test]
    fn test_export_filename() {
        let month = ViewMonth::new(2025, 3).unwrap();
        assert_eq!(export_filename(&month, "json"), "paysplit-2025-03.json");
    }
}
