//! Backup system for paysplit
//!
//! A snapshot of the budget is written before every operation that replaces
//! it wholesale (import, reset, restore), and on demand.
//!
//! # Backup Format
//!
//! Backups are JSON files named `backup-YYYYMMDD-HHMMSS-mmm.json` holding:
//! - `schema_version`: Version for migration support
//! - `created_at`: Timestamp when backup was created
//! - `budget`: The budget document in its persisted form
//!
//! Only the newest `backup_retention.keep_count` files are kept.

mod manager;
mod restore;

pub use manager::{BackupArchive, BackupInfo, BackupManager, BACKUP_SCHEMA_VERSION};
pub use restore::{read_backup, RestoredBackup};
