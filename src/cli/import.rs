//! CLI command handler for budget import
//!
//! Replaces the whole budget with the contents of an exported file. A file
//! that does not validate is rejected and the current budget is kept.

use std::path::Path;

use clap::ValueEnum;

use crate::audit::Operation;
use crate::config::paths::PaysplitPaths;
use crate::config::settings::Settings;
use crate::error::{PaysplitError, PaysplitResult};
use crate::export::{import_from_json, import_from_yaml};
use crate::services::BudgetService;
use crate::storage::Storage;

use super::backup::backup_before_replace;

/// Import format options
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ImportFormat {
    #[default]
    Json,
    Yaml,
}

/// Handle the import command
pub fn handle_import_command(
    storage: &Storage,
    paths: &PaysplitPaths,
    settings: &Settings,
    file: &Path,
    format: ImportFormat,
) -> PaysplitResult<()> {
    let content = std::fs::read_to_string(file).map_err(|e| {
        PaysplitError::Io(format!("Failed to read {}: {}", file.display(), e))
    })?;

    let imported = match format {
        ImportFormat::Json => import_from_json(&content)?,
        ImportFormat::Yaml => import_from_yaml(&content)?,
    };

    let mut service = BudgetService::open(storage)?;
    backup_before_replace(paths, settings, service.state())?;

    let state = service.replace_state(imported, Operation::Import)?;
    println!(
        "Imported {} expenses from: {}",
        state.expenses.len(),
        file.display()
    );

    Ok(())
}
