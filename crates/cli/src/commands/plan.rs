use crate::host::{FsBuffer, apply_edit};
use anyhow::{Context, Result};
use import_assist_core::types::Edit;
use import_assist_core::{ImportEngine, TextBuffer};
use std::fs;
use std::path::Path;

pub fn execute(filepath: &str, module: &str, specifier: &str, apply: bool, json: bool) -> Result<()> {
    let path = Path::new(filepath);
    let buffer = FsBuffer::open(path).with_context(|| format!("Failed to read {filepath}"))?;

    let engine = ImportEngine::new()?;
    let edit = engine.plan_import_edit(&buffer, module, specifier);

    if json {
        println!("{}", serde_json::to_string_pretty(&edit)?);
    } else {
        match &edit {
            Edit::NoOp => println!("{specifier} is already imported from \"{module}\""),
            Edit::Insert { position, text } => println!(
                "insert at {}:{} -> {}",
                position.line,
                position.character,
                text.trim_end()
            ),
            Edit::Replace { range, text } => println!(
                "replace {}:{}..{}:{} -> {}",
                range.start.line, range.start.character, range.end.line, range.end.character, text
            ),
        }
    }

    if apply && !edit.is_noop() {
        let updated = apply_edit(&buffer.text(), &edit);
        fs::write(path, updated).with_context(|| format!("Failed to write {filepath}"))?;
        tracing::info!(file = filepath, "edit applied");
    }

    Ok(())
}
