use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Workspace settings for module discovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Dependency modules to search for importable files.
    pub modules: Vec<String>,
    /// Directories that contain installed dependency modules.
    pub node_module_paths: Vec<String>,
    /// Globs applied inside each dependency module.
    pub file_globs: Vec<String>,
    /// The workspace's own source directory.
    pub local_source_dir: String,
    /// Globs applied inside the local source directory.
    pub local_file_globs: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            modules: Vec::new(),
            node_module_paths: vec!["node_modules".to_string()],
            file_globs: vec!["**/*Actions.js".to_string()],
            local_source_dir: "src".to_string(),
            local_file_globs: vec!["**/*Actions.js".to_string()],
        }
    }
}

impl Settings {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse settings: {e}")))
    }

    /// Load the settings file if it exists, otherwise the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Walk up from `start_path` looking for an `import-assist.json`.
    pub fn find_settings_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            let candidate = current.join("import-assist.json");
            if candidate.exists() {
                return Some(candidate);
            }
            current = current.parent()?;
        }
    }
}
