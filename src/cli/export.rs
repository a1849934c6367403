//! Export CLI commands

use clap::Subcommand;
use std::fs::File;
use std::path::PathBuf;

use crate::error::{FinboardError, FinboardResult};
use crate::export::{export_archive, export_months_csv};
use crate::storage::Storage;

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export the full store as a JSON archive
    Json {
        /// Output path
        path: PathBuf,
    },

    /// Export the month history as CSV
    Csv {
        /// Output path
        path: PathBuf,
    },
}

/// Handle an export command
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> FinboardResult<()> {
    match cmd {
        ExportCommands::Json { path } => {
            let archive = export_archive(storage, &path)?;
            println!(
                "Exported {} month records and {} buckets to {}",
                archive.months.len(),
                archive.buckets.len(),
                path.display()
            );
        }

        ExportCommands::Csv { path } => {
            let file = File::create(&path).map_err(|e| {
                FinboardError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            export_months_csv(storage, file)?;
            println!("Exported month history to {}", path.display());
        }
    }

    Ok(())
}
