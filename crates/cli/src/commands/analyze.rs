use crate::host::FsBuffer;
use anyhow::{Context, Result};
use import_assist_core::{ImportEngine, ParseOutcome};
use std::path::Path;

pub fn execute(filepath: &str, json: bool) -> Result<()> {
    let path = Path::new(filepath);
    let buffer = FsBuffer::open(path).with_context(|| format!("Failed to read {filepath}"))?;

    let engine = ImportEngine::new()?;
    let outcome = engine.parse(&buffer);

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    match &outcome {
        ParseOutcome::Failed => {
            println!("{filepath}: could not be parsed (syntax errors)");
        }
        ParseOutcome::Parsed(module) => {
            println!("{filepath}:");
            if module.imports.is_empty() {
                println!("  no imports");
            }
            for import in &module.imports {
                let location = import
                    .span
                    .map(|span| format!("line {}", span.start.line))
                    .unwrap_or_else(|| "synthesized".to_string());
                println!(
                    "  import from \"{}\" ({} bindings, {})",
                    import.source,
                    import.bindings.len(),
                    location
                );
            }
            if !module.exported_names.is_empty() {
                println!("  exports: {}", module.exported_names.join(", "));
            }
        }
    }

    Ok(())
}
