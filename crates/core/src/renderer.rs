//! Textual rendering of (possibly merged) import statements.

use crate::types::{ImportBinding, ImportDeclaration};

/// What to render: a brand-new statement for a module, or an existing
/// declaration with extra specifiers merged in.
#[derive(Debug, Clone)]
pub enum ImportSource<'a> {
    FromSource(&'a str),
    FromDeclaration(&'a ImportDeclaration),
}

/// A render request. `extra_specifiers` become bare named bindings
/// (imported name == local name); merging introduces no aliasing.
#[derive(Debug, Clone)]
pub struct ImportRender<'a> {
    pub import: ImportSource<'a>,
    pub extra_specifiers: &'a [String],
    pub newline: bool,
}

/// Render an import statement as a single line.
///
/// Existing bindings keep their order and the new specifiers are appended;
/// nothing is deduplicated here — callers check `contains_specifier` before
/// asking for a merge. Output uses double-quoted sources, `", "`-joined
/// specifiers, and no statement terminator. A trailing newline is appended
/// only when requested.
pub fn render_import(render: &ImportRender) -> String {
    let declaration = match render.import {
        ImportSource::FromSource(source) => {
            ImportDeclaration::synthesize(source, render.extra_specifiers)
        }
        ImportSource::FromDeclaration(decl) => decl.with_added_specifiers(render.extra_specifiers),
    };

    let rendered: String = render_declaration(&declaration)
        .chars()
        .filter(|c| *c != '\n')
        .collect();

    if render.newline {
        format!("{rendered}\n")
    } else {
        rendered
    }
}

fn render_declaration(decl: &ImportDeclaration) -> String {
    let mut clauses: Vec<String> = Vec::new();
    let mut named: Vec<String> = Vec::new();

    for binding in &decl.bindings {
        match binding {
            ImportBinding::Default { local } => clauses.push(local.clone()),
            ImportBinding::Namespace { local } => clauses.push(format!("* as {local}")),
            ImportBinding::Named { imported, local } => {
                if imported == local {
                    named.push(imported.clone());
                } else {
                    named.push(format!("{imported} as {local}"));
                }
            }
        }
    }

    if !named.is_empty() {
        clauses.push(format!("{{{}}}", named.join(", ")));
    }

    if clauses.is_empty() {
        format!("import \"{}\"", decl.source)
    } else {
        format!("import {} from \"{}\"", clauses.join(", "), decl.source)
    }
}
