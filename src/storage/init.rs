//! Storage initialization
//!
//! Creates the directory layout and empty data files on first run.

use crate::config::paths::FinboardPaths;
use crate::error::FinboardError;

use super::Storage;

/// Initialize storage for first use
///
/// Creates directories and writes empty data files so later loads don't
/// have to special-case a missing layout.
pub fn initialize_storage(paths: &FinboardPaths) -> Result<(), FinboardError> {
    paths.ensure_directories()?;

    let storage = Storage::new(paths.clone())?;
    storage.load_all()?;
    storage.save_all()?;

    log::info!("initialized storage at {}", paths.data_dir().display());
    Ok(())
}
