//! CLI command for data export
//!
//! Writes the budget to a file, or to stdout when the output is `-`.

use crate::error::{PaysplitError, PaysplitResult};
use crate::export::{export_expenses_csv, export_json, export_yaml};
use crate::models::{BudgetState, ViewMonth};
use crate::services::BudgetService;
use crate::storage::{export_filename, Storage};
use clap::ValueEnum;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use super::parse_month;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// JSON format (full budget, re-importable)
    Json,
    /// YAML format (full budget, human-readable)
    Yaml,
    /// CSV format (expenses with their paycheck for the month)
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Yaml => "yaml",
            ExportFormat::Csv => "csv",
        }
    }
}

/// Handle the export command
pub fn handle_export_command(
    storage: &Storage,
    output: Option<PathBuf>,
    format: ExportFormat,
    month: Option<String>,
) -> PaysplitResult<()> {
    let month = parse_month(month.as_deref())?;
    let service = BudgetService::open(storage)?;
    let state = service.state();

    let output =
        output.unwrap_or_else(|| PathBuf::from(export_filename(&month, format.extension())));

    if output.as_os_str() == "-" {
        let stdout = std::io::stdout();
        let mut writer = stdout.lock();
        write_export(state, &month, format, &mut writer)?;
        return Ok(());
    }

    let file = File::create(&output).map_err(|e| {
        PaysplitError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);
    write_export(state, &month, format, &mut writer)?;
    writer
        .flush()
        .map_err(|e| PaysplitError::Export(e.to_string()))?;

    println!(
        "Exported {} expenses to: {}",
        state.expenses.len(),
        output.display()
    );

    Ok(())
}

fn write_export<W: Write>(
    state: &BudgetState,
    month: &ViewMonth,
    format: ExportFormat,
    writer: &mut W,
) -> PaysplitResult<()> {
    match format {
        ExportFormat::Json => export_json(state, writer),
        ExportFormat::Yaml => export_yaml(state, writer),
        ExportFormat::Csv => export_expenses_csv(state, month, writer),
    }
}
