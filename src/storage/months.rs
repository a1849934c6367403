//! Month record repository for JSON storage
//!
//! Manages loading and saving monthly financial records to months.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FinboardError;
use crate::models::{MonthKey, MonthRecord};

use super::file_io::{read_json, write_json_atomic};

/// Serializable month data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct MonthData {
    records: Vec<MonthRecord>,
}

/// Repository for month record persistence
pub struct MonthRepository {
    path: PathBuf,
    data: RwLock<HashMap<MonthKey, MonthRecord>>,
}

impl MonthRepository {
    /// Create a new month repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load month records from disk
    pub fn load(&self) -> Result<(), FinboardError> {
        let file_data: MonthData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| FinboardError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for record in file_data.records {
            // Duplicate keys collapse to the last one read
            data.insert(record.key, record);
        }

        log::debug!("loaded {} month records from {}", data.len(), self.path.display());
        Ok(())
    }

    /// Save month records to disk
    pub fn save(&self) -> Result<(), FinboardError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinboardError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut records: Vec<_> = data.values().cloned().collect();
        records.sort_by_key(|r| r.key);

        let file_data = MonthData { records };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a month record by key
    pub fn get(&self, key: MonthKey) -> Result<Option<MonthRecord>, FinboardError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinboardError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&key).cloned())
    }

    /// Get all month records in ascending key order
    pub fn get_all(&self) -> Result<Vec<MonthRecord>, FinboardError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinboardError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut records: Vec<_> = data.values().cloned().collect();
        records.sort_by_key(|r| r.key);
        Ok(records)
    }

    /// Insert or update a month record
    pub fn upsert(&self, record: MonthRecord) -> Result<(), FinboardError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FinboardError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(record.key, record);
        Ok(())
    }

    /// Delete a month record
    pub fn delete(&self, key: MonthKey) -> Result<bool, FinboardError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FinboardError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&key).is_some())
    }

    /// Check if a month record exists
    pub fn exists(&self, key: MonthKey) -> Result<bool, FinboardError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinboardError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.contains_key(&key))
    }

    /// Count month records
    pub fn count(&self) -> Result<usize, FinboardError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinboardError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }

    /// Replace the entire collection (used by backup restore)
    pub fn replace_all(&self, records: Vec<MonthRecord>) -> Result<(), FinboardError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FinboardError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for record in records {
            data.insert(record.key, record);
        }
        Ok(())
    }
}
