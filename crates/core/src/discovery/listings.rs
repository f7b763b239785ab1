//! Building file listings for module discovery.

use super::cross_product::cross_product3;
use crate::{error::Result, interfaces::FileFinder};
use std::path::PathBuf;

/// The files discovered for one module, with the module name retained for
/// later import-name derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileListing {
    pub module_name: String,
    pub files: Vec<PathBuf>,
}

/// Listings for dependency modules: every `<node-modules path>/<module>/<glob>`
/// combination is handed to the host finder.
///
/// Fails when any input set is empty (there is nothing coherent to search).
pub fn generate_listings(
    module_names: &[String],
    node_module_paths: &[String],
    file_globs: &[String],
    finder: &dyn FileFinder,
) -> Result<Vec<FileListing>> {
    let targets = cross_product3(node_module_paths, module_names, file_globs)?;

    targets
        .into_iter()
        .map(|[module_path, module_name, file_glob]| {
            let pattern = format!("{module_path}/{module_name}/{file_glob}");
            let files = finder.find_files(&pattern)?;
            tracing::debug!(pattern, count = files.len(), "dependency listing");
            Ok(FileListing { module_name, files })
        })
        .collect()
}

/// Listings for the consumer's own source tree; the local source directory
/// stands in as the module name.
pub fn generate_local_listings(
    local_file_globs: &[String],
    local_source_dir: &str,
    finder: &dyn FileFinder,
) -> Result<Vec<FileListing>> {
    local_file_globs
        .iter()
        .map(|glob| {
            let pattern = format!("{local_source_dir}/{glob}");
            let files = finder.find_files(&pattern)?;
            tracing::debug!(pattern, count = files.len(), "local listing");
            Ok(FileListing {
                module_name: local_source_dir.to_string(),
                files,
            })
        })
        .collect()
}
