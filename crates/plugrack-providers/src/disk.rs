//! Local filesystem adapter

use plugrack_domain::error::{Error, Result};
use plugrack_domain::ports::DiskProvider;
use std::path::{Path, PathBuf};

/// [`DiskProvider`] over the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalDiskProvider;

impl LocalDiskProvider {
    /// Create a new local disk provider
    pub fn new() -> Self {
        Self
    }
}

impl DiskProvider for LocalDiskProvider {
    fn directories(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let entries = std::fs::read_dir(path).map_err(|e| {
            Error::io_with_source(format!("Failed to list {}", path.display()), e)
        })?;

        let mut directories = Vec::new();
        for entry in entries {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                directories.push(entry.path());
            }
        }
        directories.sort();
        Ok(directories)
    }

    fn move_file(&self, from: &Path, to: &Path) -> Result<()> {
        std::fs::rename(from, to).map_err(|e| {
            Error::io_with_source(
                format!("Failed to move {} to {}", from.display(), to.display()),
                e,
            )
        })
    }
}
