use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use finboard::cli::{
    handle_backup_command, handle_bucket_command, handle_export_command, handle_import,
    handle_month_command, BackupCommands, BucketCommands, ExportCommands, MonthCommands,
};
use finboard::config::{paths::FinboardPaths, settings::Settings};
use finboard::display::format_dashboard;
use finboard::models::MonthKey;
use finboard::services::DashboardService;
use finboard::storage::Storage;

#[derive(Parser)]
#[command(
    name = "finboard",
    author = "Kaylee Beyene",
    version,
    about = "Terminal personal finance dashboard",
    long_about = "finboard tracks monthly income, expenses, and investment \
                  contributions, and distributes your accumulated surplus \
                  across prioritized savings buckets so you always know how \
                  much of your cash is spoken for."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the financial dashboard
    #[command(alias = "show")]
    Dashboard {
        /// Compute as of this month instead of the current one (YYYY-MM)
        #[arg(long)]
        as_of: Option<String>,
    },

    /// Month record commands
    #[command(subcommand)]
    Month(MonthCommands),

    /// Savings bucket commands
    #[command(subcommand)]
    Bucket(BucketCommands),

    /// Backup management commands
    #[command(subcommand)]
    Backup(BackupCommands),

    /// Export data to a file
    #[command(subcommand)]
    Export(ExportCommands),

    /// Import a previously exported archive (replaces all data)
    Import {
        /// Path to the archive file
        file: PathBuf,
    },

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = FinboardPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Dashboard { as_of }) => {
            let service = DashboardService::new(&storage);
            let (state, key) = match as_of {
                Some(raw) => {
                    let key: MonthKey = raw
                        .parse()
                        .map_err(|e: finboard::models::month::MonthKeyParseError| {
                            anyhow::anyhow!(e.to_string())
                        })?;
                    (service.financial_state_at(key)?, key)
                }
                None => {
                    let key = MonthKey::current();
                    (service.financial_state_at(key)?, key)
                }
            };
            println!("{}", format_dashboard(&state, key));
        }
        Some(Commands::Month(cmd)) => {
            handle_month_command(&storage, cmd)?;
        }
        Some(Commands::Bucket(cmd)) => {
            handle_bucket_command(&storage, cmd)?;
        }
        Some(Commands::Backup(cmd)) => {
            handle_backup_command(&storage, &paths, &settings, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&storage, cmd)?;
        }
        Some(Commands::Import { file }) => {
            handle_import(&paths, file)?;
        }
        Some(Commands::Init) => {
            println!("Initializing finboard at: {}", paths.data_dir().display());
            finboard::storage::init::initialize_storage(&paths)?;
            let mut settings = settings;
            settings.setup_completed = true;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Next steps:");
            println!("  finboard month set 2024-01 --income 2500 --fixed 900");
            println!("  finboard bucket add \"Emergency Fund\" 5000");
            println!("  finboard dashboard");
        }
        Some(Commands::Config) => {
            println!("finboard Configuration");
            println!("======================");
            println!("Config directory: {}", paths.config_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Backup directory: {}", paths.backup_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!(
                "  Backup retention: {} daily, {} monthly",
                settings.backup_retention.daily_count, settings.backup_retention.monthly_count
            );
        }
        None => {
            println!("finboard - Terminal personal finance dashboard");
            println!();
            println!("Run 'finboard --help' for usage information.");
            println!("Run 'finboard dashboard' to see your financial state.");
        }
    }

    Ok(())
}
