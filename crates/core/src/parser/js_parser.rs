use super::import_extractor::{collect_comment_spans, extract_exported_names, extract_imports};
use crate::{
    error::{Error, Result},
    query,
    types::{ImportDeclaration, SourceSpan},
};
use serde::{Deserialize, Serialize};
use tree_sitter::Parser;

/// JavaScript source parser built on tree-sitter.
pub struct JsParser {
    parser: Parser,
}

impl JsParser {
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_javascript::LANGUAGE.into())
            .map_err(|e| Error::TreeSitterError(format!("Failed to set language: {e}")))?;
        Ok(Self { parser })
    }

    /// Parse a buffer into a [`ParseOutcome`].
    ///
    /// Malformed source is not an error: it yields [`ParseOutcome::Failed`],
    /// on which every query returns an empty sequence.
    pub fn parse(&mut self, text: &str) -> ParseOutcome {
        let Some(tree) = self.parser.parse(text, None) else {
            return ParseOutcome::Failed;
        };

        let root = tree.root_node();
        if root.has_error() {
            tracing::debug!("buffer has syntax errors, treating as unparsable");
            return ParseOutcome::Failed;
        }

        ParseOutcome::Parsed(ParsedModule {
            imports: extract_imports(&root, text),
            exported_names: extract_exported_names(&root, text),
            comments: collect_comment_spans(&root),
        })
    }
}

/// Result of parsing one buffer. Cached per buffer, evicted on change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ParseOutcome {
    Parsed(ParsedModule),
    Failed,
}

impl ParseOutcome {
    /// All import declarations, in document order. Empty on `Failed`.
    pub fn imports(&self) -> Vec<ImportDeclaration> {
        match self {
            Self::Parsed(module) => module.imports.clone(),
            Self::Failed => Vec::new(),
        }
    }

    /// Import declarations whose module specifier matches `target_module`
    /// under the extension-insensitive module predicate. Empty on `Failed`.
    pub fn imports_for_module(&self, target_module: &str) -> Vec<ImportDeclaration> {
        match self {
            Self::Parsed(module) => module
                .imports
                .iter()
                .filter(|decl| query::modules_match(&decl.source, target_module))
                .cloned()
                .collect(),
            Self::Failed => Vec::new(),
        }
    }

    /// Names bound by named-export statements. Empty on `Failed`.
    pub fn exported_names(&self) -> Vec<String> {
        match self {
            Self::Parsed(module) => module.exported_names.clone(),
            Self::Failed => Vec::new(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }
}

/// Value data extracted from a successful parse.
///
/// Owned and freely shareable; queries and the renderer never mutate it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedModule {
    pub imports: Vec<ImportDeclaration>,
    pub exported_names: Vec<String>,
    pub comments: Vec<SourceSpan>,
}
