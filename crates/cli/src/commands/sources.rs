use crate::host::{GlobFinder, SyntaxExports};
use anyhow::{Context, Result};
use import_assist_core::discovery::{generate_listings, generate_local_listings};
use import_assist_core::sources::collect_sources;
use import_assist_core::{DerivationMode, Error, Settings};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SourceRecord {
    path: PathBuf,
    file_name: String,
    module_name: String,
    import_name: String,
    actions: Vec<String>,
}

/// Discover action sources under `root` and print them with their derived
/// import names. This host has no JavaScript loader, so the introspection
/// fast path is absent and export enumeration is syntax-based only.
pub fn execute(root: &str, config: Option<&str>, anchor: Option<&str>, json: bool) -> Result<()> {
    let root = Path::new(root);
    let settings = load_settings(root, config)?;

    let finder = GlobFinder::new(root);
    let exports = SyntaxExports::new()?;

    let dependency_sources = match generate_listings(
        &settings.modules,
        &settings.node_module_paths,
        &settings.file_globs,
        &finder,
    ) {
        Ok(listings) => collect_sources(DerivationMode::Dependency, &listings, &[&exports]),
        Err(Error::EmptyCrossProductInput) => {
            tracing::warn!("no dependency modules configured, skipping dependency discovery");
            Vec::new()
        }
        Err(e) => return Err(e.into()),
    };

    let local_listings = generate_local_listings(
        &settings.local_file_globs,
        &settings.local_source_dir,
        &finder,
    )?;
    let local_sources = collect_sources(DerivationMode::Local, &local_listings, &[&exports]);

    let anchor: PathBuf = match anchor {
        Some(file) => PathBuf::from(file),
        None => root.join("index.js"),
    };

    let all = dependency_sources.into_iter().chain(local_sources);

    if json {
        let entries: Vec<SourceRecord> = all
            .map(|source| SourceRecord {
                import_name: source.import_name(&anchor),
                path: source.path,
                file_name: source.file_name,
                module_name: source.module_name,
                actions: source.actions,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for source in all {
            println!(
                "{} -> import {{{}}} from \"{}\"",
                source.path.display(),
                source.actions.join(", "),
                source.import_name(&anchor)
            );
        }
    }

    Ok(())
}

fn load_settings(root: &Path, config: Option<&str>) -> Result<Settings> {
    match config {
        Some(path) => Settings::load_from_file(Path::new(path))
            .with_context(|| format!("Failed to load settings from {path}")),
        None => match Settings::find_settings_file(root) {
            Some(found) => {
                tracing::debug!(path = %found.display(), "using discovered settings file");
                Ok(Settings::load_from_file(&found)?)
            }
            None => Ok(Settings::default()),
        },
    }
}
