//! Extraction of import declarations and exported names from a parsed tree.
//!
//! Only top-level statements are inspected; imports and exports nested inside
//! blocks are not module-scope declarations in any input we care about.

use super::utils::{node_text, node_to_span, string_literal_value};
use crate::types::{ImportBinding, ImportDeclaration, SourceSpan};
use tree_sitter::Node;

/// All import declarations under `root`, in document order.
pub fn extract_imports(root: &Node, source: &str) -> Vec<ImportDeclaration> {
    let mut cursor = root.walk();
    root.named_children(&mut cursor)
        .filter(|node| node.kind() == "import_statement")
        .filter_map(|node| import_declaration_from_node(&node, source))
        .collect()
}

/// Names bound by named-export statements under `root`.
///
/// Only variable and function declarations that bind a simple identifier
/// contribute; destructuring exports, classes, clause re-exports, and default
/// exports contribute nothing. That asymmetry is deliberate.
pub fn extract_exported_names(root: &Node, source: &str) -> Vec<String> {
    let mut cursor = root.walk();
    root.named_children(&mut cursor)
        .filter(|node| node.kind() == "export_statement" && !is_default_export(node))
        .flat_map(|node| exported_names_from_statement(&node, source))
        .collect()
}

/// Spans of every comment in the tree, in document order.
pub fn collect_comment_spans(root: &Node) -> Vec<SourceSpan> {
    let mut spans = Vec::new();
    collect_comments_into(root, &mut spans);
    spans
}

fn collect_comments_into(node: &Node, spans: &mut Vec<SourceSpan>) {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.kind() == "comment" {
            spans.push(node_to_span(&child));
        } else if child.child_count() > 0 {
            collect_comments_into(&child, spans);
        }
    }
}

fn import_declaration_from_node(node: &Node, source: &str) -> Option<ImportDeclaration> {
    let source_node = node.child_by_field_name("source")?;
    let module = string_literal_value(&source_node, source);

    let mut bindings = Vec::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if child.kind() == "import_clause" {
            collect_clause_bindings(&child, source, &mut bindings);
        }
    }

    Some(ImportDeclaration {
        source: module,
        bindings,
        span: Some(node_to_span(node)),
    })
}

fn collect_clause_bindings(clause: &Node, source: &str, bindings: &mut Vec<ImportBinding>) {
    let mut cursor = clause.walk();
    for part in clause.named_children(&mut cursor) {
        match part.kind() {
            "identifier" => bindings.push(ImportBinding::Default {
                local: node_text(&part, source).to_string(),
            }),
            "namespace_import" => {
                let mut inner = part.walk();
                if let Some(name) = part
                    .named_children(&mut inner)
                    .find(|n| n.kind() == "identifier")
                {
                    bindings.push(ImportBinding::Namespace {
                        local: node_text(&name, source).to_string(),
                    });
                }
            }
            "named_imports" => {
                let mut inner = part.walk();
                for spec in part
                    .named_children(&mut inner)
                    .filter(|n| n.kind() == "import_specifier")
                {
                    if let Some(binding) = named_binding_from_specifier(&spec, source) {
                        bindings.push(binding);
                    }
                }
            }
            _ => {}
        }
    }
}

fn named_binding_from_specifier(spec: &Node, source: &str) -> Option<ImportBinding> {
    let name_node = spec.child_by_field_name("name")?;
    let imported = if name_node.kind() == "string" {
        string_literal_value(&name_node, source)
    } else {
        node_text(&name_node, source).to_string()
    };

    let local = match spec.child_by_field_name("alias") {
        Some(alias) => node_text(&alias, source).to_string(),
        None => imported.clone(),
    };

    Some(ImportBinding::Named { imported, local })
}

fn is_default_export(node: &Node) -> bool {
    let mut cursor = node.walk();
    node.children(&mut cursor).any(|c| c.kind() == "default")
}

fn exported_names_from_statement(node: &Node, source: &str) -> Vec<String> {
    let Some(declaration) = node.child_by_field_name("declaration") else {
        return Vec::new();
    };

    match declaration.kind() {
        "lexical_declaration" | "variable_declaration" => {
            let mut cursor = declaration.walk();
            declaration
                .named_children(&mut cursor)
                .filter(|n| n.kind() == "variable_declarator")
                .filter_map(|declarator| {
                    let name = declarator.child_by_field_name("name")?;
                    if name.kind() == "identifier" {
                        Some(node_text(&name, source).to_string())
                    } else {
                        // destructuring patterns bind no simple name
                        None
                    }
                })
                .collect()
        }
        "function_declaration" | "generator_function_declaration" => declaration
            .child_by_field_name("name")
            .filter(|n| n.kind() == "identifier")
            .map(|n| vec![node_text(&n, source).to_string()])
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}
