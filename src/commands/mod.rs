//! Command handlers
//!
//! Each command handler orchestrates the execution of a CLI command.

pub mod mute;
pub mod run;
pub mod sample;
pub mod show;

pub use mute::run_mute;
pub use run::run_monitor;
pub use sample::run_sample;
pub use show::run_show;

use crate::error::StoreError;
use crate::store::ConfigStore;
use std::path::Path;

/// Open the mute store, creating its directory if needed
pub(crate) fn open_store(path: &Path) -> Result<ConfigStore, StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
            log::info!("Created {}", parent.display());
        }
    }
    ConfigStore::open(path)
}
