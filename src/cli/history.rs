//! CLI command for the audit history

use crate::error::PaysplitResult;
use crate::storage::Storage;

/// Show the most recent audit entries, newest last
pub fn handle_history_command(storage: &Storage, limit: usize) -> PaysplitResult<()> {
    let logger = match storage.audit() {
        Some(logger) => logger,
        None => {
            println!("Audit logging is disabled.");
            return Ok(());
        }
    };

    let entries = logger.read_recent(limit)?;
    if entries.is_empty() {
        println!("No history yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
