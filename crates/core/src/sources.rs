//! Action sources: one record per discovered source file, holding its
//! exported names and how its import name is derived.

use crate::{
    discovery::FileListing,
    interfaces::ExportEnumerator,
    naming::{DerivationMode, derive_dependency_import_name, derive_local_import_name},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Everything the completion layer needs to offer one file's exports.
/// Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSource {
    /// Full path to the source file.
    pub path: PathBuf,
    /// Base name without extension, e.g. `SomeActions`.
    pub file_name: String,
    /// The module the file belongs to (or the local source dir).
    pub module_name: String,
    /// Exported names; everything exported is assumed to be offerable.
    pub actions: Vec<String>,
    pub mode: DerivationMode,
}

impl ActionSource {
    pub fn new(
        mode: DerivationMode,
        path: PathBuf,
        actions: Vec<String>,
        module_name: String,
    ) -> Self {
        let file_name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            path,
            file_name,
            module_name,
            actions,
            mode,
        }
    }

    /// The string a consumer should type to import this file, anchored at
    /// the document the completion fires in.
    pub fn import_name(&self, anchor_document: &Path) -> String {
        match self.mode {
            DerivationMode::Dependency => {
                derive_dependency_import_name(&self.path, &self.module_name)
            }
            DerivationMode::Local => derive_local_import_name(&self.path, anchor_document),
        }
    }
}

/// Build action sources for every file in the listings.
///
/// Per file, `enumerators` are tried in order and the first success wins —
/// typically host module introspection first, syntax-based export extraction
/// as the fallback. A file every enumerator fails on is skipped with a
/// warning; one bad file never aborts the batch.
pub fn collect_sources(
    mode: DerivationMode,
    listings: &[FileListing],
    enumerators: &[&dyn ExportEnumerator],
) -> Vec<ActionSource> {
    let mut sources = Vec::new();

    for listing in listings {
        for file in &listing.files {
            match enumerate_exports(file, enumerators) {
                Some(actions) => sources.push(ActionSource::new(
                    mode,
                    file.clone(),
                    actions,
                    listing.module_name.clone(),
                )),
                None => {
                    tracing::warn!(
                        module = %listing.module_name,
                        file = %file.display(),
                        "could not enumerate exports, skipping file"
                    );
                }
            }
        }
    }

    sources
}

fn enumerate_exports(file: &Path, enumerators: &[&dyn ExportEnumerator]) -> Option<Vec<String>> {
    for enumerator in enumerators {
        match enumerator.exported_names(file) {
            Ok(names) => return Some(names),
            Err(error) => {
                tracing::debug!(
                    strategy = enumerator.describe(),
                    file = %file.display(),
                    %error,
                    "export enumeration strategy failed, trying next"
                );
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};

    struct Fails;
    impl ExportEnumerator for Fails {
        fn exported_names(&self, _path: &Path) -> Result<Vec<String>> {
            Err(Error::IntrospectionError("cannot load".to_string()))
        }
        fn describe(&self) -> &'static str {
            "always fails"
        }
    }

    struct Fixed(Vec<String>);
    impl ExportEnumerator for Fixed {
        fn exported_names(&self, _path: &Path) -> Result<Vec<String>> {
            Ok(self.0.clone())
        }
    }

    fn listing(module: &str, files: &[&str]) -> FileListing {
        FileListing {
            module_name: module.to_string(),
            files: files.iter().map(PathBuf::from).collect(),
        }
    }

    #[test]
    fn test_first_successful_strategy_wins() {
        let fallback = Fixed(vec!["fromFallback".to_string()]);
        let listings = vec![listing("my-app", &["/nm/my-app/actions/A.js"])];
        let sources = collect_sources(
            DerivationMode::Dependency,
            &listings,
            &[&Fails, &fallback],
        );

        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].actions, vec!["fromFallback"]);
        assert_eq!(sources[0].file_name, "A");
        assert_eq!(sources[0].module_name, "my-app");
    }

    #[test]
    fn test_all_strategies_failing_skips_file_not_batch() {
        let listings = vec![listing("my-app", &["/nm/my-app/A.js", "/nm/my-app/B.js"])];
        let sources = collect_sources(DerivationMode::Dependency, &listings, &[&Fails]);
        assert!(sources.is_empty());
    }

    #[test]
    fn test_import_name_by_mode() {
        let dep = ActionSource::new(
            DerivationMode::Dependency,
            PathBuf::from("/nm/my-app/src/actions/A.js"),
            vec![],
            "my-app".to_string(),
        );
        assert_eq!(
            dep.import_name(Path::new("/proj/src/X.js")),
            "my-app/actions/A"
        );

        let local = ActionSource::new(
            DerivationMode::Local,
            PathBuf::from("/proj/src/actions/Foo.js"),
            vec![],
            "src".to_string(),
        );
        assert_eq!(
            local.import_name(Path::new("/proj/src/components/Bar.js")),
            "./../actions/Foo"
        );
    }
}
