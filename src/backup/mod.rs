//! Backup system for finboard
//!
//! Provides rolling backups with configurable retention policies and
//! all-or-nothing restore.
//!
//! # Backup Format
//!
//! Backups are stored as JSON files with the following structure:
//! - `schema_version`: Version for migration support
//! - `created_at`: Timestamp when backup was created
//! - `months`: All monthly financial records
//! - `buckets`: All savings buckets
//!
//! The same archive shape is used by the user-facing export/import
//! commands, so a backup file and an exported file are interchangeable.
//!
//! # Retention Policy
//!
//! By default, the system keeps:
//! - 30 daily backups
//! - 12 monthly backups (first backup of each month)

mod manager;
mod restore;

pub use manager::{BackupArchive, BackupInfo, BackupManager, SCHEMA_VERSION};
pub use restore::{RestoreManager, RestoreResult};
