use serde::{Deserialize, Serialize};

use super::position::SourceSpan;

/// A single binding introduced by an import statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImportBinding {
    /// `{foo}` or `{foo as bar}` — an external (imported) name and the local
    /// name it binds to. The two are equal unless the source aliased it.
    Named { imported: String, local: String },
    /// `import foo from "m"`
    Default { local: String },
    /// `import * as foo from "m"`
    Namespace { local: String },
}

impl ImportBinding {
    /// Bare named binding: imported name == local name, no aliasing.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::Named {
            imported: name.clone(),
            local: name,
        }
    }

    /// The external name this binding imports, if it is a named binding.
    /// Default and namespace bindings have no external name.
    pub fn imported_name(&self) -> Option<&str> {
        match self {
            Self::Named { imported, .. } => Some(imported),
            Self::Default { .. } | Self::Namespace { .. } => None,
        }
    }
}

/// One parsed (or synthesized) import statement.
///
/// Declarations are value data: merging never mutates one in place, it
/// produces a new declaration with the extra bindings appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportDeclaration {
    /// The quoted module specifier string, without quotes.
    pub source: String,
    /// Bindings in document order. Order is preserved across rendering.
    pub bindings: Vec<ImportBinding>,
    /// Where the statement sits in the original buffer. `None` for
    /// synthesized declarations.
    pub span: Option<SourceSpan>,
}

impl ImportDeclaration {
    /// Synthesize a declaration from a module name and bare specifier names.
    pub fn synthesize(source: impl Into<String>, specifiers: &[String]) -> Self {
        Self {
            source: source.into(),
            bindings: specifiers.iter().map(ImportBinding::named).collect(),
            span: None,
        }
    }

    /// A new declaration with `specifiers` appended as bare named bindings.
    /// Existing bindings keep their order; nothing is deduplicated here.
    pub fn with_added_specifiers(&self, specifiers: &[String]) -> Self {
        if specifiers.is_empty() {
            return self.clone();
        }

        let mut bindings = self.bindings.clone();
        bindings.extend(specifiers.iter().map(ImportBinding::named));
        Self {
            source: self.source.clone(),
            bindings,
            span: self.span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::position::{Position, SourceSpan};

    #[test]
    fn test_named_binding_external_name() {
        let bare = ImportBinding::named("foo");
        assert_eq!(bare.imported_name(), Some("foo"));

        let aliased = ImportBinding::Named {
            imported: "foo".to_string(),
            local: "bar".to_string(),
        };
        assert_eq!(aliased.imported_name(), Some("foo"));

        let default = ImportBinding::Default {
            local: "foo".to_string(),
        };
        assert_eq!(default.imported_name(), None);
    }

    #[test]
    fn test_synthesize_has_no_span() {
        let decl = ImportDeclaration::synthesize("pkg/foo", &["a".to_string(), "b".to_string()]);
        assert!(decl.span.is_none());
        assert_eq!(decl.bindings.len(), 2);
        assert_eq!(decl.source, "pkg/foo");
    }

    #[test]
    fn test_with_added_specifiers_appends_and_keeps_span() {
        let span = SourceSpan::new(Position::new(0, 0), Position::new(0, 25));
        let decl = ImportDeclaration {
            source: "m".to_string(),
            bindings: vec![ImportBinding::named("a")],
            span: Some(span),
        };

        let merged = decl.with_added_specifiers(&["b".to_string()]);
        assert_eq!(merged.bindings.len(), 2);
        assert_eq!(merged.bindings[0], ImportBinding::named("a"));
        assert_eq!(merged.bindings[1], ImportBinding::named("b"));
        assert_eq!(merged.span, Some(span));
        // the original is untouched
        assert_eq!(decl.bindings.len(), 1);
    }

    #[test]
    fn test_with_added_specifiers_empty_is_identity() {
        let decl = ImportDeclaration::synthesize("m", &["a".to_string()]);
        assert_eq!(decl.with_added_specifiers(&[]), decl);
    }
}
