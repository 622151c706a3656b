use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use paysplit::cli::{
    handle_backup_command, handle_calendar_command, handle_config_command,
    handle_expense_command, handle_export_command, handle_history_command, handle_import_command,
    handle_income_command, handle_init_command, handle_reset_command, handle_summary_command,
    BackupCommands, ExpenseCommands, ExportFormat, ImportFormat, IncomeCommands,
};
use paysplit::config::{paths::PaysplitPaths, settings::Settings};
use paysplit::storage::Storage;

/// Environment variable holding the log filter (e.g. `debug`, `paysplit=info`)
const LOG_ENV: &str = "PAYSPLIT_LOG";

#[derive(Parser)]
#[command(
    name = "paysplit",
    version,
    about = "Split monthly bills between two paychecks",
    long_about = "paysplit assigns each recurring monthly expense to the paycheck \
                  that pays it, based on its due day and your two paydays, and \
                  shows what each paycheck has left over."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize data directories and the starter budget
    Init,

    /// Expense management commands
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Income configuration commands
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Per-paycheck totals and category breakdown
    Summary {
        /// Month to view (YYYY-MM, defaults to current)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Month calendar with paydays and due dates
    #[command(alias = "cal")]
    Calendar {
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Export the budget to a file
    Export {
        /// Output file (`-` for stdout; defaults to paysplit-YYYY-MM.<ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Month used for CSV paycheck assignment
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Replace the budget with an exported file
    Import {
        file: PathBuf,

        #[arg(short, long, value_enum, default_value = "json")]
        format: ImportFormat,
    },

    /// Remove all expenses and restore default income
    Reset {
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Backup management commands
    #[command(subcommand)]
    Backup(BackupCommands),

    /// Show recent changes from the audit log
    History {
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = PaysplitPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths.clone(), &settings)?;

    match cli.command {
        Some(Commands::Init) => handle_init_command(&storage, &paths, &settings)?,
        Some(Commands::Expense(cmd)) => handle_expense_command(&storage, &settings, cmd)?,
        Some(Commands::Income(cmd)) => handle_income_command(&storage, &settings, cmd)?,
        Some(Commands::Summary { month }) => handle_summary_command(&storage, &settings, month)?,
        Some(Commands::Calendar { month }) => {
            handle_calendar_command(&storage, &settings, month)?
        }
        Some(Commands::Export {
            output,
            format,
            month,
        }) => handle_export_command(&storage, output, format, month)?,
        Some(Commands::Import { file, format }) => {
            handle_import_command(&storage, &paths, &settings, &file, format)?
        }
        Some(Commands::Reset { yes }) => handle_reset_command(&storage, &paths, &settings, yes)?,
        Some(Commands::Backup(cmd)) => handle_backup_command(&storage, &paths, &settings, cmd)?,
        Some(Commands::History { limit }) => handle_history_command(&storage, limit)?,
        Some(Commands::Config) => handle_config_command(&paths, &settings)?,
        None => {
            println!("paysplit - split monthly bills between two paychecks");
            println!();
            println!("Run 'paysplit --help' for usage information.");
            println!("Run 'paysplit summary' to see this month's split.");
        }
    }

    Ok(())
}
