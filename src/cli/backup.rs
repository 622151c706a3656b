//! Backup CLI commands
//!
//! Implements CLI commands for backup management.

use clap::Subcommand;
use std::path::PathBuf;

use crate::audit::Operation;
use crate::backup::{read_backup, BackupManager};
use crate::config::paths::PaysplitPaths;
use crate::config::settings::Settings;
use crate::error::{PaysplitError, PaysplitResult};
use crate::models::BudgetState;
use crate::services::BudgetService;
use crate::storage::Storage;

/// Backup subcommands
#[derive(Subcommand)]
pub enum BackupCommands {
    /// Create a new backup
    Create,

    /// List all available backups
    List,

    /// Restore from a backup
    Restore {
        /// Backup filename or path (use 'latest' for most recent)
        backup: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

/// Snapshot the current budget before it is replaced wholesale
pub fn backup_before_replace(
    paths: &PaysplitPaths,
    settings: &Settings,
    state: &BudgetState,
) -> PaysplitResult<PathBuf> {
    let manager = BackupManager::new(paths.backup_dir(), settings.backup_retention.clone());
    let (path, _) = manager.create_backup_with_retention(state)?;
    println!("Backup saved: {}", path.display());
    Ok(path)
}

/// Handle a backup command
pub fn handle_backup_command(
    storage: &Storage,
    paths: &PaysplitPaths,
    settings: &Settings,
    cmd: BackupCommands,
) -> PaysplitResult<()> {
    let manager = BackupManager::new(paths.backup_dir(), settings.backup_retention.clone());

    match cmd {
        BackupCommands::Create => {
            let service = BudgetService::open(storage)?;
            let (backup_path, deleted) = manager.create_backup_with_retention(service.state())?;
            println!("Backup created: {}", backup_path.display());
            if !deleted.is_empty() {
                println!("Removed {} old backup(s)", deleted.len());
            }
        }

        BackupCommands::List => {
            let backups = manager.list_backups()?;

            if backups.is_empty() {
                println!("No backups found.");
                println!("Create one with: paysplit backup create");
                return Ok(());
            }

            println!("Available Backups");
            println!("=================");
            println!();

            for (i, backup) in backups.iter().enumerate() {
                let age = chrono::Utc::now().signed_duration_since(backup.created_at);
                println!(
                    "  {}. {} ({} ago, {})",
                    i + 1,
                    backup.filename,
                    format_duration(age),
                    format_size(backup.size_bytes),
                );
            }

            println!();
            println!("Total: {} backup(s)", backups.len());
        }

        BackupCommands::Restore { backup, force } => {
            let backup_path = if backup == "latest" {
                manager
                    .get_latest_backup()?
                    .map(|info| info.path)
                    .ok_or_else(|| PaysplitError::NotFound {
                        entity_type: "Backup",
                        identifier: backup.clone(),
                    })?
            } else {
                manager
                    .find_backup(&backup)
                    .ok_or_else(|| PaysplitError::NotFound {
                        entity_type: "Backup",
                        identifier: backup.clone(),
                    })?
            };

            let restored = read_backup(&backup_path)?;
            println!("File: {}", backup_path.display());
            println!("{}", restored.summary());
            println!();

            if !force {
                println!("WARNING: This will replace the current budget!");
                println!("To proceed, run again with --force flag:");
                println!("  paysplit backup restore {} --force", backup);
                return Ok(());
            }

            let mut service = BudgetService::open(storage)?;
            backup_before_replace(paths, settings, service.state())?;
            service.replace_state(restored.state, Operation::Restore)?;

            println!("Restore complete.");
        }
    }

    Ok(())
}

fn format_duration(duration: chrono::Duration) -> String {
    if duration.num_days() > 0 {
        format!("{}d", duration.num_days())
    } else if duration.num_hours() > 0 {
        format!("{}h", duration.num_hours())
    } else if duration.num_minutes() > 0 {
        format!("{}m", duration.num_minutes())
    } else {
        format!("{}s", duration.num_seconds().max(0))
    }
}

fn format_size(bytes: u64) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(chrono::Duration::days(2)), "2d");
        assert_eq!(format_duration(chrono::Duration::minutes(5)), "5m");
        assert_eq!(format_duration(chrono::Duration::seconds(-1)), "0s");
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
    }
}
