//! Run output directory resolution.
//!
//! Each run gets a private directory under a caller-chosen root, named by
//! the recorder-supplied run id. Resolution creates the directory (parents
//! included) and is idempotent: resolving the same run id twice returns the
//! same path without error.

use std::path::{Path, PathBuf};

use crate::error::AppError;

/// Resolve (and create) the output directory for `run_id` under `root`.
///
/// An empty `root` means the current location.
pub fn resolve_run_dir(root: &Path, run_id: &str) -> Result<PathBuf, AppError> {
    let dir = if root.as_os_str().is_empty() {
        PathBuf::from(run_id)
    } else {
        root.join(run_id)
    };

    std::fs::create_dir_all(&dir).map_err(|e| {
        AppError::io(format!(
            "Failed to create run directory '{}': {e}",
            dir.display()
        ))
    })?;

    Ok(dir)
}
