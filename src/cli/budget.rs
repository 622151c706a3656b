//! Setup and whole-budget CLI commands
//!
//! `init`, `reset` and `config`.

use crate::config::paths::PaysplitPaths;
use crate::config::settings::Settings;
use crate::error::PaysplitResult;
use crate::services::BudgetService;
use crate::storage::Storage;

use super::backup::backup_before_replace;

/// Create directories and settings, and write the starter budget if none exists
pub fn handle_init_command(
    storage: &Storage,
    paths: &PaysplitPaths,
    settings: &Settings,
) -> PaysplitResult<()> {
    println!("Initializing paysplit at: {}", paths.base_dir().display());
    paths.ensure_directories()?;
    settings.save(paths)?;

    let service = BudgetService::open(storage)?;
    let state = service.state();

    println!("Initialization complete!");
    println!();
    println!(
        "Budget has {} expenses; paydays on the {} and {}.",
        state.expenses.len(),
        state.income.paycheck_days[0],
        state.income.paycheck_days[1]
    );
    println!("Run 'paysplit summary' to see how they split between paychecks.");

    Ok(())
}

/// Clear all expenses and restore the default income
pub fn handle_reset_command(
    storage: &Storage,
    paths: &PaysplitPaths,
    settings: &Settings,
    yes: bool,
) -> PaysplitResult<()> {
    if !yes {
        println!("WARNING: This removes every expense and resets income to the defaults.");
        println!("To proceed, run again with --yes:");
        println!("  paysplit reset --yes");
        return Ok(());
    }

    let mut service = BudgetService::open(storage)?;
    backup_before_replace(paths, settings, service.state())?;
    service.reset()?;

    println!("Budget reset.");
    Ok(())
}

/// Show paths and settings
pub fn handle_config_command(paths: &PaysplitPaths, settings: &Settings) -> PaysplitResult<()> {
    println!("paysplit Configuration");
    println!("======================");
    println!("Base directory:   {}", paths.base_dir().display());
    println!("Data directory:   {}", paths.data_dir().display());
    println!("Backup directory: {}", paths.backup_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!("Audit log:        {}", paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!("  Week starts on:  {:?}", settings.week_start);
    println!("  Audit enabled:   {}", settings.audit_enabled);
    println!("  Backups kept:    {}", settings.backup_retention.keep_count);
    Ok(())
}
