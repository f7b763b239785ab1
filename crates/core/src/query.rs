//! Predicates over parsed import declarations.

use crate::types::ImportDeclaration;
use std::path::Path;

/// ModuleMatch predicate: two module specifiers refer to the same import
/// target when their directory and extension-stripped base name agree.
/// `"pkg/foo.js"` and `"pkg/foo"` are the same target; `"foo"` and
/// `"./foo"` are not.
pub fn modules_match(a: &str, b: &str) -> bool {
    let a = Path::new(a);
    let b = Path::new(b);
    a.parent() == b.parent() && a.file_stem() == b.file_stem()
}

/// Whether any declaration already names `specifier` among its named
/// bindings. Matches against the *external* (imported) name, never the
/// local alias; default and namespace bindings never match.
pub fn contains_specifier(declarations: &[ImportDeclaration], specifier: &str) -> bool {
    declarations
        .iter()
        .flat_map(|decl| decl.bindings.iter())
        .any(|binding| binding.imported_name() == Some(specifier))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ImportBinding;

    #[test]
    fn test_modules_match_exact() {
        assert!(modules_match("pkg/foo", "pkg/foo"));
        assert!(!modules_match("pkg/foo", "pkg/bar"));
        assert!(!modules_match("pkg/foo", "other/foo"));
    }

    #[test]
    fn test_modules_match_extension_insensitive() {
        assert!(modules_match("pkg/foo.js", "pkg/foo"));
        assert!(modules_match("pkg/foo", "pkg/foo.js"));
        assert!(modules_match("pkg/foo.js", "pkg/foo.ts"));
    }

    #[test]
    fn test_modules_match_bare_names() {
        assert!(modules_match("lodash", "lodash"));
        assert!(!modules_match("lodash", "pkg/lodash"));
    }

    #[test]
    fn test_contains_specifier_external_name_only() {
        let decls = vec![ImportDeclaration {
            source: "m".to_string(),
            bindings: vec![
                ImportBinding::Default {
                    local: "def".to_string(),
                },
                ImportBinding::Namespace {
                    local: "ns".to_string(),
                },
                ImportBinding::Named {
                    imported: "a".to_string(),
                    local: "aliased".to_string(),
                },
            ],
            span: None,
        }];

        assert!(contains_specifier(&decls, "a"));
        // local alias does not count
        assert!(!contains_specifier(&decls, "aliased"));
        // default/namespace locals do not count
        assert!(!contains_specifier(&decls, "def"));
        assert!(!contains_specifier(&decls, "ns"));
    }

    #[test]
    fn test_contains_specifier_flattens_across_declarations() {
        let decls = vec![
            ImportDeclaration::synthesize("m", &["a".to_string()]),
            ImportDeclaration::synthesize("m", &["b".to_string()]),
        ];
        assert!(contains_specifier(&decls, "b"));
        assert!(!contains_specifier(&decls, "c"));
    }

    #[test]
    fn test_contains_specifier_empty() {
        assert!(!contains_specifier(&[], "a"));
    }
}
