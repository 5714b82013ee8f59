//! Disk Provider Port
//!
//! Filesystem access used by providers with side effects on disk. Kept
//! behind a port so provider bodies stay testable without a real tree.

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Filesystem operations needed by disk-backed providers
pub trait DiskProvider: Send + Sync {
    /// Immediate subdirectories of `path`
    fn directories(&self, path: &Path) -> Result<Vec<PathBuf>>;

    /// Move a file, replacing `to` if it exists
    fn move_file(&self, from: &Path, to: &Path) -> Result<()>;
}
