//! JavaScript source parsing using tree-sitter

pub mod import_extractor;
pub mod js_parser;
pub mod utils;

// Re-export commonly used items
pub use js_parser::{JsParser, ParseOutcome, ParsedModule};
pub use utils::{node_to_position, node_to_span};
