//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod backup;
pub mod bucket;
pub mod export;
pub mod month;

pub use backup::{handle_backup_command, handle_import, BackupCommands};
pub use bucket::{handle_bucket_command, BucketCommands};
pub use export::{handle_export_command, ExportCommands};
pub use month::{handle_month_command, MonthCommands};
