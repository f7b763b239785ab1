//! File discovery interface
//!
//! The engine never walks the filesystem itself; glob-based listing is
//! delegated to the host through this trait.

use crate::error::Result;
use std::path::PathBuf;

/// Trait for glob-based file listing
pub trait FileFinder {
    /// All files matching `pattern`, e.g. `node_modules/my-app/**/*Actions.js`.
    fn find_files(&self, pattern: &str) -> Result<Vec<PathBuf>>;
}
