use serde::{Deserialize, Serialize};

use super::position::{Position, SourceSpan};

/// A description of a buffer change for the host editor to apply.
///
/// Exactly one edit is produced per merge request. The planner never touches
/// the buffer itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Edit {
    /// Insert `text` at `position`, shifting existing content right/down.
    Insert { position: Position, text: String },
    /// Replace the text covered by `range` with `text`.
    Replace { range: SourceSpan, text: String },
    /// Nothing to change; the desired specifier is already present.
    NoOp,
}

impl Edit {
    /// Insert at the top of the buffer, where new import statements go.
    pub fn insert_at_top(text: impl Into<String>) -> Self {
        Self::Insert {
            position: Position::top(),
            text: text.into(),
        }
    }

    pub fn is_noop(&self) -> bool {
        matches!(self, Self::NoOp)
    }
}
