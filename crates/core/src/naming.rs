//! Import-name derivation: the string a consumer would type to import a
//! discovered source file.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// How a source file's import name is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DerivationMode {
    /// A module under some node_modules path; the name is package-relative.
    Dependency,
    /// A file in the consumer's own source tree; the name is relative to the
    /// importing document.
    Local,
}

/// Package-relative import name for a dependency module.
///
/// Anchors `module_name` inside the file's parent directory, takes the
/// remainder from that anchor with the first literal `src/` segment removed
/// (published packages commonly re-root at their source directory), and
/// appends the extension-stripped base name. When the anchor cannot be
/// found the full path is returned unchanged, signaling "could not shorten".
pub fn derive_dependency_import_name(file_path: &Path, module_name: &str) -> String {
    let full_path = file_path.to_string_lossy().into_owned();

    let dir = match file_path.parent() {
        Some(parent) => parent.to_string_lossy().into_owned(),
        None => return full_path,
    };
    let stem = match file_path.file_stem() {
        Some(stem) => stem.to_string_lossy().into_owned(),
        None => return full_path,
    };

    let anchored = Regex::new(&format!("{}.*", regex::escape(module_name)))
        .ok()
        .and_then(|re| re.find(&dir).map(|m| m.as_str().to_string()));

    match anchored {
        Some(anchor) => format!("{}/{}", anchor.replacen("src/", "", 1), stem),
        None => full_path,
    }
}

/// Document-relative import name for a local module.
///
/// Node-style relative path from the anchor document's path to the file,
/// extension stripped, with a leading `..` segment rewritten to `.` — the
/// common "./sibling" convention. Deeper upward traversals are otherwise
/// left exactly as computed.
pub fn derive_local_import_name(file_path: &Path, anchor_document: &Path) -> String {
    let relative = relative_path(anchor_document, file_path)
        .to_string_lossy()
        .into_owned();

    let rewritten = match relative.strip_prefix("..") {
        Some(rest) => format!(".{rest}"),
        None => relative,
    };

    strip_extension(&rewritten)
}

/// Node's `path.relative`: both arguments are treated as plain component
/// lists (the anchor's file name counts as a directory level).
fn relative_path(from: &Path, to: &Path) -> PathBuf {
    let from: Vec<Component> = from.components().collect();
    let to: Vec<Component> = to.components().collect();

    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in common..from.len() {
        relative.push("..");
    }
    for component in &to[common..] {
        relative.push(component);
    }
    relative
}

fn strip_extension(path: &str) -> String {
    match Path::new(path).extension() {
        Some(ext) => {
            let suffix_len = ext.to_string_lossy().len() + 1;
            path[..path.len() - suffix_len].to_string()
        }
        None => path.to_string(),
    }
}
