use crate::types::{Position, SourceSpan};
use tree_sitter::Node;

pub fn node_to_position(node: &Node, start: bool) -> Position {
    let point = if start {
        node.start_position()
    } else {
        node.end_position()
    };
    Position {
        line: point.row as u32,
        character: point.column as u32,
    }
}

pub fn node_to_span(node: &Node) -> SourceSpan {
    SourceSpan {
        start: node_to_position(node, true),
        end: node_to_position(node, false),
    }
}

pub fn node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    node.utf8_text(source.as_bytes()).unwrap_or("")
}

/// The unquoted value of a `string` node. Escape sequences are left as
/// written; module specifiers in practice never contain them.
pub fn string_literal_value(node: &Node, source: &str) -> String {
    let mut cursor = node.walk();
    let fragments: Vec<&str> = node
        .named_children(&mut cursor)
        .filter(|child| child.kind() == "string_fragment")
        .map(|child| node_text(&child, source))
        .collect();

    if fragments.is_empty() {
        // Empty string literal, or a grammar without fragment nodes
        let raw = node_text(node, source);
        raw.trim_matches(|c| c == '"' || c == '\'' || c == '`').to_string()
    } else {
        fragments.concat()
    }
}
