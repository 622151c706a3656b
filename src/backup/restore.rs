//! Backup restoration for paysplit
//!
//! Reads a backup archive back into a validated `BudgetState`. Applying it
//! is left to the budget service so the swap is written through and audited
//! like any other replacement.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::error::{PaysplitError, PaysplitResult};
use crate::models::BudgetState;
use crate::storage::budget::state_from_value;

use super::manager::BackupArchive;

/// A backup that has been read and validated
#[derive(Debug)]
pub struct RestoredBackup {
    pub schema_version: u32,
    pub backup_date: DateTime<Utc>,
    pub state: BudgetState,
}

impl RestoredBackup {
    pub fn summary(&self) -> String {
        format!(
            "Backup from {} with {} expenses",
            self.backup_date.format("%Y-%m-%d %H:%M:%S UTC"),
            self.state.expenses.len()
        )
    }
}

/// Read and validate a backup file
///
/// The archive must parse and its budget must pass the same checks as an
/// import; otherwise `InvalidFormat` is returned.
pub fn read_backup(backup_path: &Path) -> PaysplitResult<RestoredBackup> {
    let contents = fs::read_to_string(backup_path)
        .map_err(|e| PaysplitError::Io(format!("Failed to read backup file: {}", e)))?;

    let archive: BackupArchive = serde_json::from_str(&contents)
        .map_err(|e| PaysplitError::InvalidFormat(format!("Not a backup archive: {}", e)))?;

    let state = state_from_value(archive.budget)?;

    Ok(RestoredBackup {
        schema_version: archive.schema_version,
        backup_date: archive.created_at,
        state,
    })
}
