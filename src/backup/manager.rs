//! Backup manager for finboard
//!
//! Handles rolling backups with configurable retention policies. Backups
//! are stored as dated JSON archives in the backup directory.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Datelike, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::paths::FinboardPaths;
use crate::config::settings::BackupRetention;
use crate::error::{FinboardError, FinboardResult};
use crate::models::{Bucket, MonthRecord};
use crate::storage::Storage;

/// Current archive schema version
pub const SCHEMA_VERSION: u32 = 1;

/// Backup archive format
///
/// Also the shape written by `export` and consumed by `import`; the two
/// subsystems share one format deliberately.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupArchive {
    /// Schema version for migration support
    pub schema_version: u32,
    /// When the archive was created
    pub created_at: DateTime<Utc>,
    /// All monthly financial records
    pub months: Vec<MonthRecord>,
    /// All savings buckets
    pub buckets: Vec<Bucket>,
}

impl BackupArchive {
    /// Snapshot the current contents of the store
    pub fn from_storage(storage: &Storage) -> FinboardResult<Self> {
        Ok(Self {
            schema_version: SCHEMA_VERSION,
            created_at: Utc::now(),
            months: storage.months.get_all()?,
            buckets: storage.buckets.get_all()?,
        })
    }
}

/// Metadata about a backup file
#[derive(Debug, Clone)]
pub struct BackupInfo {
    /// Backup filename
    pub filename: String,
    /// Full path to backup
    pub path: PathBuf,
    /// When the backup was created
    pub created_at: DateTime<Utc>,
    /// Size in bytes
    pub size_bytes: u64,
}

/// Manages backup creation and retention
pub struct BackupManager {
    backup_dir: PathBuf,
    retention: BackupRetention,
}

impl BackupManager {
    /// Create a new BackupManager
    pub fn new(paths: FinboardPaths, retention: BackupRetention) -> Self {
        Self {
            backup_dir: paths.backup_dir(),
            retention,
        }
    }

    /// Create a backup of all data
    ///
    /// Returns the path to the created backup file.
    pub fn create_backup(&self, storage: &Storage) -> FinboardResult<PathBuf> {
        fs::create_dir_all(&self.backup_dir)
            .map_err(|e| FinboardError::Io(format!("Failed to create backup directory: {}", e)))?;

        let archive = BackupArchive::from_storage(storage)?;
        let filename = format!(
            "backup-{}-{:03}.json",
            archive.created_at.format("%Y%m%d-%H%M%S"),
            archive.created_at.timestamp_subsec_millis()
        );
        let backup_path = self.backup_dir.join(&filename);

        let json = serde_json::to_string_pretty(&archive)
            .map_err(|e| FinboardError::Json(format!("Failed to serialize backup: {}", e)))?;

        fs::write(&backup_path, json)
            .map_err(|e| FinboardError::Io(format!("Failed to write backup file: {}", e)))?;

        log::info!("created backup {}", backup_path.display());
        Ok(backup_path)
    }

    /// List all available backups, newest first
    pub fn list_backups(&self) -> FinboardResult<Vec<BackupInfo>> {
        if !self.backup_dir.exists() {
            return Ok(Vec::new());
        }

        let mut backups = Vec::new();

        for entry in fs::read_dir(&self.backup_dir)
            .map_err(|e| FinboardError::Io(format!("Failed to read backup directory: {}", e)))?
        {
            let entry =
                entry.map_err(|e| FinboardError::Io(format!("Failed to read entry: {}", e)))?;
            let path = entry.path();
            let filename = match path.file_name().and_then(|n| n.to_str()) {
                Some(name) => name.to_string(),
                None => continue,
            };

            if !filename.starts_with("backup-") || !filename.ends_with(".json") {
                continue;
            }

            let created_at = match parse_backup_timestamp(&filename) {
                Some(ts) => ts,
                None => continue,
            };

            let size_bytes = entry.metadata().map(|m| m.len()).unwrap_or(0);

            backups.push(BackupInfo {
                filename,
                path,
                created_at,
                size_bytes,
            });
        }

        backups.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(backups)
    }

    /// Find a backup by filename, path, or the keyword "latest"
    pub fn find_backup(&self, identifier: &str) -> FinboardResult<PathBuf> {
        if identifier == "latest" {
            return self
                .list_backups()?
                .first()
                .map(|b| b.path.clone())
                .ok_or_else(|| FinboardError::Storage("No backups found".into()));
        }

        let as_path = PathBuf::from(identifier);
        if as_path.exists() {
            return Ok(as_path);
        }

        let in_dir = self.backup_dir.join(identifier);
        if in_dir.exists() {
            return Ok(in_dir);
        }

        Err(FinboardError::NotFound {
            entity_type: "Backup",
            identifier: identifier.to_string(),
        })
    }

    /// Delete backups beyond the retention policy
    ///
    /// Keeps the newest `daily_count` backups plus the earliest backup of
    /// each of the most recent `monthly_count` months. Returns the number
    /// of files deleted.
    pub fn enforce_retention(&self) -> FinboardResult<usize> {
        let backups = self.list_backups()?;

        // Earliest backup per calendar month, newest months first
        let mut monthly_keep: Vec<&BackupInfo> = Vec::new();
        let mut seen_months: Vec<(i32, u32)> = Vec::new();
        for backup in backups.iter().rev() {
            let month = (backup.created_at.year(), backup.created_at.month());
            if !seen_months.contains(&month) {
                seen_months.push(month);
                monthly_keep.push(backup);
            }
        }
        monthly_keep.reverse();
        monthly_keep.truncate(self.retention.monthly_count as usize);

        let mut deleted = 0;
        for (index, backup) in backups.iter().enumerate() {
            let is_daily_keep = index < self.retention.daily_count as usize;
            let is_monthly_keep = monthly_keep.iter().any(|b| b.path == backup.path);

            if !is_daily_keep && !is_monthly_keep {
                fs::remove_file(&backup.path).map_err(|e| {
                    FinboardError::Io(format!("Failed to delete old backup: {}", e))
                })?;
                log::debug!("pruned backup {}", backup.filename);
                deleted += 1;
            }
        }

        Ok(deleted)
    }
}

/// Parse the timestamp out of a `backup-YYYYmmdd-HHMMSS-mmm.json` filename
fn parse_backup_timestamp(filename: &str) -> Option<DateTime<Utc>> {
    let stem = filename.strip_prefix("backup-")?.strip_suffix(".json")?;
    // Drop the millisecond suffix
    let (datetime_part, _) = stem.rsplit_once('-')?;
    let naive = NaiveDateTime::parse_from_str(datetime_part, "%Y%m%d-%H%M%S").ok()?;
    Some(DateTime::from_naive_utc_and_offset(naive, Utc))
}
