//! Backup CLI commands
//!
//! Implements CLI commands for backup management and archive import.

use clap::Subcommand;
use std::path::PathBuf;

use crate::backup::{BackupManager, RestoreManager};
use crate::config::paths::FinboardPaths;
use crate::config::settings::Settings;
use crate::error::FinboardResult;
use crate::storage::Storage;

/// Backup subcommands
#[derive(Subcommand)]
pub enum BackupCommands {
    /// Create a new backup
    Create,

    /// List all available backups
    List {
        /// Show detailed information
        #[arg(short, long)]
        verbose: bool,
    },

    /// Restore from a backup
    Restore {
        /// Backup filename or path (use 'latest' for most recent)
        backup: String,
    },

    /// Delete old backups according to retention policy
    Prune,
}

/// Handle a backup command
pub fn handle_backup_command(
    storage: &Storage,
    paths: &FinboardPaths,
    settings: &Settings,
    cmd: BackupCommands,
) -> FinboardResult<()> {
    let retention = settings.backup_retention.clone();
    let manager = BackupManager::new(paths.clone(), retention);

    match cmd {
        BackupCommands::Create => {
            let backup_path = manager.create_backup(storage)?;
            println!("Backup created: {}", backup_path.display());
        }

        BackupCommands::List { verbose } => {
            let backups = manager.list_backups()?;

            if backups.is_empty() {
                println!("No backups found.");
                println!("Create one with: finboard backup create");
                return Ok(());
            }

            println!("Available Backups");
            println!("=================");
            for backup in &backups {
                if verbose {
                    println!(
                        "{}  {}  {} bytes",
                        backup.filename,
                        backup.created_at.format("%Y-%m-%d %H:%M:%S"),
                        backup.size_bytes
                    );
                } else {
                    println!("{}", backup.filename);
                }
            }
        }

        BackupCommands::Restore { backup } => {
            let backup_path = manager.find_backup(&backup)?;
            let restore = RestoreManager::new(paths.clone());
            let result = restore.restore_from_file(&backup_path)?;
            println!("{}", result.summary());
        }

        BackupCommands::Prune => {
            let deleted = manager.enforce_retention()?;
            println!("Pruned {} old backup(s)", deleted);
        }
    }

    Ok(())
}

/// Handle the top-level import command
///
/// Imports an archive previously written by `export` or by the backup
/// manager. A malformed file rejects the whole import; nothing is written.
pub fn handle_import(paths: &FinboardPaths, file: PathBuf) -> FinboardResult<()> {
    let restore = RestoreManager::new(paths.clone());
    let result = restore.restore_from_file(&file)?;
    println!("{}", result.summary());
    Ok(())
}
