//! Backup restoration for finboard
//!
//! Restores data from backup archives with all-or-nothing semantics: the
//! whole archive is parsed and validated before any write happens, so a
//! malformed file can never partially overwrite the store.

use std::fs;
use std::path::Path;

use crate::config::paths::FinboardPaths;
use crate::config::settings::BackupRetention;
use crate::error::{FinboardError, FinboardResult};
use crate::storage::Storage;

use super::manager::{BackupArchive, BackupManager};

/// Handles restoring from backups
pub struct RestoreManager {
    paths: FinboardPaths,
}

impl RestoreManager {
    /// Create a new RestoreManager
    pub fn new(paths: FinboardPaths) -> Self {
        Self { paths }
    }

    /// Restore data from a backup file
    ///
    /// Overwrites all current data with the archive contents. A safety
    /// backup of the current data is created first, so a restore can
    /// itself be undone.
    pub fn restore_from_file(&self, backup_path: &Path) -> FinboardResult<RestoreResult> {
        let archive = self.read_archive(backup_path)?;
        self.restore_from_archive(&archive)
    }

    /// Parse and validate an archive without writing anything
    pub fn read_archive(&self, backup_path: &Path) -> FinboardResult<BackupArchive> {
        let contents = fs::read_to_string(backup_path)
            .map_err(|e| FinboardError::Io(format!("Failed to read backup file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| FinboardError::Import(format!("Invalid backup file: {}", e)))
    }

    /// Restore data from a parsed backup archive
    ///
    /// Each record is written back into the store keyed by its original
    /// identity; duplicate keys within the archive collapse last-write-wins.
    pub fn restore_from_archive(&self, archive: &BackupArchive) -> FinboardResult<RestoreResult> {
        self.paths.ensure_directories()?;

        let storage = Storage::new(self.paths.clone())?;
        storage.load_all()?;

        // Safety net before any overwrite
        let manager = BackupManager::new(self.paths.clone(), BackupRetention::default());
        manager.create_backup(&storage)?;

        storage.months.replace_all(archive.months.clone())?;
        storage.buckets.replace_all(archive.buckets.clone())?;
        storage.save_all()?;

        log::info!(
            "restored {} month records and {} buckets",
            archive.months.len(),
            archive.buckets.len()
        );

        Ok(RestoreResult {
            schema_version: archive.schema_version,
            backup_date: archive.created_at,
            months_restored: archive.months.len(),
            buckets_restored: archive.buckets.len(),
        })
    }
}

/// Result of a restore operation
#[derive(Debug)]
pub struct RestoreResult {
    /// Schema version of the restored archive
    pub schema_version: u32,
    /// Date the archive was created
    pub backup_date: chrono::DateTime<chrono::Utc>,
    /// Number of month records restored
    pub months_restored: usize,
    /// Number of buckets restored
    pub buckets_restored: usize,
}

impl RestoreResult {
    /// Get a summary of what was restored
    pub fn summary(&self) -> String {
        format!(
            "Restored {} month records and {} buckets (archive from {})",
            self.months_restored,
            self.buckets_restored,
            self.backup_date.format("%Y-%m-%d %H:%M")
        )
    }
}
