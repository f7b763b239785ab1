//! File-backed implementations of the engine's host interfaces.

use import_assist_core::error::{Error, Result};
use import_assist_core::interfaces::{BufferId, ExportEnumerator, FileFinder, TextBuffer};
use import_assist_core::parser::JsParser;
use import_assist_core::types::{Edit, Position};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_BUFFER_ID: AtomicU64 = AtomicU64::new(1);

/// A buffer backed by a file snapshot read at open time.
#[derive(Debug)]
pub struct FsBuffer {
    id: BufferId,
    path: PathBuf,
    text: String,
}

impl FsBuffer {
    pub fn open(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self {
            id: BufferId(NEXT_BUFFER_ID.fetch_add(1, Ordering::Relaxed)),
            path: path.to_path_buf(),
            text,
        })
    }
}

impl TextBuffer for FsBuffer {
    fn id(&self) -> BufferId {
        self.id
    }

    fn text(&self) -> String {
        self.text.clone()
    }

    fn line_text(&self, line: u32) -> Option<String> {
        self.text.lines().nth(line as usize).map(|l| l.to_string())
    }

    fn path(&self) -> Option<&Path> {
        Some(&self.path)
    }
}

/// Glob-based file discovery over a directory tree.
pub struct GlobFinder {
    root: PathBuf,
}

impl GlobFinder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl FileFinder for GlobFinder {
    fn find_files(&self, pattern: &str) -> Result<Vec<PathBuf>> {
        let regex = glob_to_regex(pattern)?;
        let mut files = Vec::new();

        for entry in walkdir::WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            let relative = match entry.path().strip_prefix(&self.root) {
                Ok(rel) => rel.to_string_lossy().replace('\\', "/"),
                Err(_) => continue,
            };
            if regex.is_match(&relative) {
                files.push(entry.path().to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }
}

/// Translate a glob pattern into an anchored regex. `**/` matches any
/// number of directory levels including none; `*` and `?` stay within one
/// path segment.
fn glob_to_regex(pattern: &str) -> Result<regex::Regex> {
    let mut regex = String::from("^");
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '*' => {
                if chars.peek() == Some(&'*') {
                    chars.next();
                    if chars.peek() == Some(&'/') {
                        chars.next();
                        regex.push_str("(?:.*/)?");
                    } else {
                        regex.push_str(".*");
                    }
                } else {
                    regex.push_str("[^/]*");
                }
            }
            '?' => regex.push_str("[^/]"),
            other => regex.push_str(&regex::escape(&other.to_string())),
        }
    }
    regex.push('$');

    regex::Regex::new(&regex)
        .map_err(|e| Error::DiscoveryError(format!("Invalid glob pattern '{pattern}': {e}")))
}

/// Syntax-based export enumeration: parse the file and take the names its
/// named-export statements bind. The fallback strategy for hosts (like this
/// CLI) that cannot load a JavaScript module object.
pub struct SyntaxExports {
    parser: Mutex<JsParser>,
}

impl SyntaxExports {
    pub fn new() -> Result<Self> {
        Ok(Self {
            parser: Mutex::new(JsParser::new()?),
        })
    }
}

impl ExportEnumerator for SyntaxExports {
    fn exported_names(&self, path: &Path) -> Result<Vec<String>> {
        let text = fs::read_to_string(path)?;
        let outcome = {
            let mut parser = match self.parser.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            parser.parse(&text)
        };

        if outcome.is_failed() {
            return Err(Error::ParseError(format!(
                "could not parse {}",
                path.display()
            )));
        }
        Ok(outcome.exported_names())
    }

    fn describe(&self) -> &'static str {
        "syntax export extraction"
    }
}

/// Apply an edit to a text snapshot. The host-side "edit applier".
pub fn apply_edit(text: &str, edit: &Edit) -> String {
    match edit {
        Edit::NoOp => text.to_string(),
        Edit::Insert {
            position,
            text: insertion,
        } => {
            let at = offset_of(text, *position);
            format!("{}{}{}", &text[..at], insertion, &text[at..])
        }
        Edit::Replace {
            range,
            text: replacement,
        } => {
            let start = offset_of(text, range.start);
            let end = offset_of(text, range.end);
            format!("{}{}{}", &text[..start], replacement, &text[end..])
        }
    }
}

fn offset_of(text: &str, position: Position) -> usize {
    let mut offset = 0;
    for (index, line) in text.split_inclusive('\n').enumerate() {
        if index == position.line as usize {
            return offset + (position.character as usize).min(line.len());
        }
        offset += line.len();
    }
    text.len()
}
