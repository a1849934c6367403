//! Storage layer for finboard
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation.

pub mod buckets;
pub mod file_io;
pub mod init;
pub mod months;

pub use buckets::BucketRepository;
pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;
pub use months::MonthRepository;

use crate::config::paths::FinboardPaths;
use crate::error::FinboardError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: FinboardPaths,
    pub months: MonthRepository,
    pub buckets: BucketRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: FinboardPaths) -> Result<Self, FinboardError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            months: MonthRepository::new(paths.months_file()),
            buckets: BucketRepository::new(paths.buckets_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &FinboardPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), FinboardError> {
        self.months.load()?;
        self.buckets.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), FinboardError> {
        self.months.save()?;
        self.buckets.save()?;
        Ok(())
    }

    /// Check if storage has been initialized (has any data)
    pub fn is_initialized(&self) -> bool {
        self.paths.settings_file().exists()
    }
}
