//! JSON export functionality
//!
//! Writes the complete store to a user-chosen path as a backup archive.
//! The output is byte-compatible with the files the backup manager writes,
//! so either can be fed back through `import`.

use std::fs;
use std::path::Path;

use crate::backup::BackupArchive;
use crate::error::{FinboardError, FinboardResult};
use crate::storage::Storage;

/// Export the full store as a JSON archive
pub fn export_archive(storage: &Storage, path: &Path) -> FinboardResult<BackupArchive> {
    let archive = BackupArchive::from_storage(storage)?;

    let json = serde_json::to_string_pretty(&archive)
        .map_err(|e| FinboardError::Export(format!("Failed to serialize archive: {}", e)))?;

    fs::write(path, json)
        .map_err(|e| FinboardError::Export(format!("Failed to write {}: {}", path.display(), e)))?;

    log::info!(
        "exported {} month records and {} buckets to {}",
        archive.months.len(),
        archive.buckets.len(),
        path.display()
    );
    Ok(archive)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backup::RestoreManager;
    use crate::config::paths::FinboardPaths;
    use crate::models::{Bucket, Money, MonthRecord};
    use tempfile::TempDir;

    #[test]
    fn test_export_then_import() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinboardPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths.clone()).unwrap();
        storage.load_all().unwrap();

        let mut record = MonthRecord::new("2024-01".parse().unwrap());
        record.income = Money::from_cents(100_000);
        storage.months.upsert(record).unwrap();
        storage
            .buckets
            .upsert(Bucket::new("Vacation", Money::from_cents(50_000), 1))
            .unwrap();

        let export_path = temp_dir.path().join("export.json");
        let archive = export_archive(&storage, &export_path).unwrap();
        assert_eq!(archive.months.len(), 1);
        assert!(export_path.exists());

        // The exported file restores cleanly
        let restore = RestoreManager::new(paths);
        let result = restore.restore_from_file(&export_path).unwrap();
        assert_eq!(result.months_restored, 1);
        assert_eq!(result.buckets_restored, 1);
    }
}
