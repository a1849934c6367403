//! Bucket repository for JSON storage
//!
//! Manages loading and saving savings buckets to buckets.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FinboardError;
use crate::models::{Bucket, BucketId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable bucket data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct BucketData {
    buckets: Vec<Bucket>,
}

/// Repository for bucket persistence
pub struct BucketRepository {
    path: PathBuf,
    data: RwLock<HashMap<BucketId, Bucket>>,
}

impl BucketRepository {
    /// Create a new bucket repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load buckets from disk
    pub fn load(&self) -> Result<(), FinboardError> {
        let file_data: BucketData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| FinboardError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for bucket in file_data.buckets {
            data.insert(bucket.id, bucket);
        }

        log::debug!("loaded {} buckets from {}", data.len(), self.path.display());
        Ok(())
    }

    /// Save buckets to disk
    pub fn save(&self) -> Result<(), FinboardError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinboardError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut buckets: Vec<_> = data.values().cloned().collect();
        buckets.sort_by_key(|b| b.priority);

        let file_data = BucketData { buckets };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a bucket by ID
    pub fn get(&self, id: BucketId) -> Result<Option<Bucket>, FinboardError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinboardError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get a bucket by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<Bucket>, FinboardError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinboardError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let name_lower = name.to_lowercase();
        Ok(data
            .values()
            .find(|b| b.name.to_lowercase() == name_lower)
            .cloned())
    }

    /// Get all buckets in ascending priority order
    pub fn get_all(&self) -> Result<Vec<Bucket>, FinboardError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinboardError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut buckets: Vec<_> = data.values().cloned().collect();
        buckets.sort_by(|a, b| a.priority.cmp(&b.priority).then(a.created_at.cmp(&b.created_at)));
        Ok(buckets)
    }

    /// Insert or update a bucket
    pub fn upsert(&self, bucket: Bucket) -> Result<(), FinboardError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FinboardError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(bucket.id, bucket);
        Ok(())
    }

    /// Delete a bucket
    pub fn delete(&self, id: BucketId) -> Result<bool, FinboardError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FinboardError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Check if a bucket name is already taken
    pub fn name_exists(&self, name: &str, exclude_id: Option<BucketId>) -> Result<bool, FinboardError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinboardError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let name_lower = name.to_lowercase();
        Ok(data
            .values()
            .any(|b| b.name.to_lowercase() == name_lower && Some(b.id) != exclude_id))
    }

    /// The next free priority (one past the current maximum)
    pub fn next_priority(&self) -> Result<u32, FinboardError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinboardError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.values().map(|b| b.priority).max().unwrap_or(0) + 1)
    }

    /// Count buckets
    pub fn count(&self) -> Result<usize, FinboardError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinboardError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }

    /// Replace the entire collection (used by backup restore)
    pub fn replace_all(&self, buckets: Vec<Bucket>) -> Result<(), FinboardError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FinboardError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for bucket in buckets {
            data.insert(bucket.id, bucket);
        }
        Ok(())
    }
}
