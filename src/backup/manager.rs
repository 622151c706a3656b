//! Backup manager for paysplit
//!
//! Writes timestamped snapshots of the budget before destructive operations
//! and prunes old ones according to the retention policy.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::settings::BackupRetention;
use crate::error::{PaysplitError, PaysplitResult};
use crate::models::BudgetState;

/// Current backup archive schema
pub const BACKUP_SCHEMA_VERSION: u32 = 1;

/// Metadata about a backup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupInfo {
    pub filename: String,
    pub path: PathBuf,
    pub created_at: DateTime<Utc>,
    pub size_bytes: u64,
}

/// Backup archive format
#[derive(Debug, Serialize, Deserialize)]
pub struct BackupArchive {
    /// Schema version for migration support
    pub schema_version: u32,
    pub created_at: DateTime<Utc>,
    /// The budget document exactly as it is persisted
    pub budget: serde_json::Value,
}

/// Manages backup creation and retention
pub struct BackupManager {
    backup_dir: PathBuf,
    retention: BackupRetention,
}

impl BackupManager {
    pub fn new(backup_dir: PathBuf, retention: BackupRetention) -> Self {
        Self {
            backup_dir,
            retention,
        }
    }

    /// Write a snapshot of `state`
    ///
    /// Returns the path to the created backup file.
    pub fn create_backup(&self, state: &BudgetState) -> PaysplitResult<PathBuf> {
        fs::create_dir_all(&self.backup_dir).map_err(|e| {
            PaysplitError::Io(format!("Failed to create backup directory: {}", e))
        })?;

        let now = Utc::now();
        let filename = format!(
            "backup-{}-{:03}.json",
            now.format("%Y%m%d-%H%M%S"),
            now.timestamp_subsec_millis()
        );
        let backup_path = self.backup_dir.join(&filename);

        let archive = BackupArchive {
            schema_version: BACKUP_SCHEMA_VERSION,
            created_at: now,
            budget: serde_json::to_value(state)?,
        };

        let json = serde_json::to_string_pretty(&archive)
            .map_err(|e| PaysplitError::Json(format!("Failed to serialize backup: {}", e)))?;

        fs::write(&backup_path, json)
            .map_err(|e| PaysplitError::Io(format!("Failed to write backup file: {}", e)))?;

        debug!(path = %backup_path.display(), "backup written");
        Ok(backup_path)
    }

    /// List all available backups, newest first
    pub fn list_backups(&self) -> PaysplitResult<Vec<BackupInfo>> {
        if !self.backup_dir.exists() {
            return Ok(Vec::new());
        }

        let mut backups = Vec::new();

        for entry in fs::read_dir(&self.backup_dir)
            .map_err(|e| PaysplitError::Io(format!("Failed to read backup directory: {}", e)))?
        {
            let entry = entry
                .map_err(|e| PaysplitError::Io(format!("Failed to read directory entry: {}", e)))?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Some(info) = parse_backup_info(&path) {
                    backups.push(info);
                }
            }
        }

        backups.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(backups)
    }

    /// Delete all but the newest `keep_count` backups
    pub fn enforce_retention(&self) -> PaysplitResult<Vec<PathBuf>> {
        let mut deleted = Vec::new();

        for backup in self
            .list_backups()?
            .into_iter()
            .skip(self.retention.keep_count as usize)
        {
            fs::remove_file(&backup.path)
                .map_err(|e| PaysplitError::Io(format!("Failed to delete old backup: {}", e)))?;
            deleted.push(backup.path);
        }

        Ok(deleted)
    }

    /// Create a backup and then enforce retention policy
    pub fn create_backup_with_retention(
        &self,
        state: &BudgetState,
    ) -> PaysplitResult<(PathBuf, Vec<PathBuf>)> {
        let backup_path = self.create_backup(state)?;
        let deleted = self.enforce_retention()?;
        Ok((backup_path, deleted))
    }

    pub fn backup_dir(&self) -> &PathBuf {
        &self.backup_dir
    }

    /// Resolve a backup by file name or path
    pub fn find_backup(&self, name: &str) -> Option<PathBuf> {
        let direct = PathBuf::from(name);
        if direct.is_file() {
            return Some(direct);
        }

        let in_dir = self.backup_dir.join(name);
        in_dir.is_file().then_some(in_dir)
    }

    pub fn get_latest_backup(&self) -> PaysplitResult<Option<BackupInfo>> {
        Ok(self.list_backups()?.into_iter().next())
    }
}

fn parse_backup_info(path: &Path) -> Option<BackupInfo> {
    let filename = path.file_name()?.to_string_lossy().to_string();

    let date_part = filename.strip_prefix("backup-")?.strip_suffix(".json")?;
    let created_at = parse_backup_timestamp(date_part)?;

    let size_bytes = fs::metadata(path).ok()?.len();

    Some(BackupInfo {
        filename,
        path: path.to_path_buf(),
        created_at,
        size_bytes,
    })
}

/// Parse `YYYYMMDD-HHMMSS-mmm` from a backup file name
fn parse_backup_timestamp(date_str: &str) -> Option<DateTime<Utc>> {
    let parts: Vec<&str> = date_str.split('-').collect();
    let [date_part, time_part, millis] = parts.as_slice() else {
        return None;
    };

    if date_part.len() != 8 || time_part.len() != 6 {
        return None;
    }

    let year: i32 = date_part[0..4].parse().ok()?;
    let month: u32 = date_part[4..6].parse().ok()?;
    let day: u32 = date_part[6..8].parse().ok()?;
    let hour: u32 = time_part[0..2].parse().ok()?;
    let minute: u32 = time_part[2..4].parse().ok()?;
    let second: u32 = time_part[4..6].parse().ok()?;
    let millis: u32 = millis.parse().ok()?;

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = chrono::NaiveTime::from_hms_milli_opt(hour, minute, second, millis)?;

    Some(DateTime::from_naive_utc_and_offset(
        chrono::NaiveDateTime::new(date, time),
        Utc,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use tempfile::TempDir;

    fn create_test_manager(keep_count: u32) -> (BackupManager, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let manager = BackupManager::new(
            temp_dir.path().join("backups"),
            BackupRetention { keep_count },
        );
        (manager, temp_dir)
    }

    #[test]
    fn test_create_backup() {
        let (manager, _temp) = create_test_manager(3);

        let backup_path = manager
            .create_backup(&BudgetState::default_dataset())
            .unwrap();
        assert!(backup_path.exists());
        assert!(backup_path.to_string_lossy().contains("backup-"));

        let contents = fs::read_to_string(&backup_path).unwrap();
        let archive: BackupArchive = serde_json::from_str(&contents).unwrap();
        assert_eq!(archive.schema_version, BACKUP_SCHEMA_VERSION);
        assert_eq!(archive.budget["expenses"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_list_backups_newest_first() {
        let (manager, _temp) = create_test_manager(3);

        manager.create_backup(&BudgetState::empty()).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(20));
        manager.create_backup(&BudgetState::empty()).unwrap();

        let backups = manager.list_backups().unwrap();
        assert_eq!(backups.len(), 2);
        assert!(backups[0].created_at >= backups[1].created_at);
    }

    #[test]
    fn test_retention_policy() {
        let (manager, _temp) = create_test_manager(3);

        for _ in 0..5 {
            manager.create_backup(&BudgetState::empty()).unwrap();
            std::thread::sleep(std::time::Duration::from_millis(20));
        }

        let deleted = manager.enforce_retention().unwrap();
        assert_eq!(deleted.len(), 2);
        assert_eq!(manager.list_backups().unwrap().len(), 3);
    }

    #[test]
    fn test_create_backup_with_retention() {
        let (manager, _temp) = create_test_manager(1);

        manager.create_backup(&BudgetState::empty()).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(20));
        let (path, deleted) = manager
            .create_backup_with_retention(&BudgetState::empty())
            .unwrap();

        assert_eq!(deleted.len(), 1);
        assert_eq!(manager.get_latest_backup().unwrap().unwrap().path, path);
    }

    #[test]
    fn test_find_backup() {
        let (manager, _temp) = create_test_manager(3);
        let path = manager.create_backup(&BudgetState::empty()).unwrap();
        let name = path.file_name().unwrap().to_string_lossy().to_string();

        assert_eq!(manager.find_backup(&name), Some(path.clone()));
        assert_eq!(manager.find_backup(path.to_str().unwrap()), Some(path));
        assert!(manager.find_backup("backup-missing.json").is_none());
    }

    #[test]
    fn test_parse_backup_timestamp() {
        let timestamp = parse_backup_timestamp("20251127-143022-456").unwrap();
        assert_eq!(timestamp.year(), 2025);
        assert_eq!(timestamp.month(), 11);
        assert_eq!(timestamp.day(), 27);

        assert!(parse_backup_timestamp("20251127-143022").is_none());
        assert!(parse_backup_timestamp("garbage").is_none());
    }

    #[test]
    fn test_unrelated_files_ignored() {
        let (manager, temp) = create_test_manager(3);
        fs::create_dir_all(temp.path().join("backups")).unwrap();
        fs::write(temp.path().join("backups").join("notes.json"), "{}").unwrap();

        assert!(manager.list_backups().unwrap().is_empty());
    }
}
