//! Store path constants and discovery

use std::path::{Path, PathBuf};

use crate::error::{FolioError, Result};

/// Default store directory name, created under the project root
pub const DEFAULT_STORE_DIR: &str = ".folio";

/// Config file name inside the store root
pub const CONFIG_FILE: &str = "config.toml";

/// Walk up from `root` looking for a store directory
pub fn discover_store(root: &Path) -> Result<PathBuf> {
    let mut current = Some(root);
    while let Some(dir) = current {
        let candidate = dir.join(DEFAULT_STORE_DIR);
        if candidate.is_dir() {
            tracing::debug!(store = %candidate.display(), "discovered store");
            return Ok(candidate);
        }
        current = dir.parent();
    }

    Err(FolioError::StoreNotFound {
        search_root: root.to_path_buf(),
    })
}
