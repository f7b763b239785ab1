//! Text buffer interface
//!
//! Abstraction over the host editor's document type. The engine only ever
//! reads text through this trait and never mutates a buffer.

use serde::{Deserialize, Serialize};

/// Stable identity of a buffer, used as the parse-cache key.
///
/// An opaque integer rather than a reference so the cache carries no
/// lifetime coupling to the host's buffer objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BufferId(pub u64);

impl std::fmt::Display for BufferId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "buffer#{}", self.0)
    }
}

/// Trait for host text buffers
pub trait TextBuffer {
    /// The stable identity of this buffer.
    fn id(&self) -> BufferId;

    /// Full text of the buffer.
    fn text(&self) -> String;

    /// Text of a single 0-based line, without its terminator. `None` when
    /// the line does not exist.
    fn line_text(&self, line: u32) -> Option<String>;

    /// Path of the underlying document, when it is file-backed. Used as the
    /// anchor for local import-name derivation.
    fn path(&self) -> Option<&std::path::Path> {
        None
    }
}

/// In-memory buffer, mainly for tests and one-shot CLI invocations.
#[derive(Debug, Clone)]
pub struct StringBuffer {
    id: BufferId,
    text: String,
}

impl StringBuffer {
    pub fn new(id: BufferId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

impl TextBuffer for StringBuffer {
    fn id(&self) -> BufferId {
        self.id
    }

    fn text(&self) -> String {
        self.text.clone()
    }

    fn line_text(&self, line: u32) -> Option<String> {
        self.text.lines().nth(line as usize).map(|l| l.to_string())
    }
}
