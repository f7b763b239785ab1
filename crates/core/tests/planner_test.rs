//! End-to-end behavior of the edit planner over real parses.

use import_assist_core::interfaces::{BufferId, StringBuffer};
use import_assist_core::types::{Edit, Position};
use import_assist_core::ImportEngine;

/// Minimal host-side edit applier: splices an edit into a text snapshot.
fn apply_edit(text: &str, edit: &Edit) -> String {
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

    match edit {
        Edit::NoOp => text.to_string(),
        Edit::Insert { position, text: insertion } => {
            let at = offset_of(text, *position);
            format!("{}{}{}", &text[..at], insertion, &text[at..])
        }
        Edit::Replace { range, text: replacement } => {
            let start = offset_of(text, range.start);
            let end = offset_of(text, range.end);
            format!("{}{}{}", &text[..start], replacement, &text[end..])
        }
    }
}

fn buffer(id: u64, text: &str) -> StringBuffer {
    StringBuffer::new(BufferId(id), text)
}

#[test]
fn empty_buffer_gets_fresh_import_at_top() {
    let engine = ImportEngine::new().unwrap();
    let edit = engine.plan_import_edit(&buffer(1, ""), "pkg/foo", "bar");

    assert_eq!(
        edit,
        Edit::Insert {
            position: Position::new(0, 0),
            text: "import {bar} from \"pkg/foo\"\n".to_string(),
        }
    );
}

#[test]
fn existing_import_is_replaced_in_place() {
    let source = "import {a} from \"pkg/foo\"";
    let engine = ImportEngine::new().unwrap();
    let edit = engine.plan_import_edit(&buffer(1, source), "pkg/foo", "b");

    match &edit {
        Edit::Replace { range, text } => {
            assert_eq!(range.start, Position::new(0, 0));
            assert_eq!(range.end, Position::new(0, source.len() as u32));
            assert_eq!(text, "import {a, b} from \"pkg/foo\"");
        }
        other => panic!("expected replace, got {other:?}"),
    }

    assert_eq!(apply_edit(source, &edit), "import {a, b} from \"pkg/foo\"");
}

#[test]
fn present_specifier_is_a_noop() {
    let engine = ImportEngine::new().unwrap();
    let edit = engine.plan_import_edit(&buffer(1, "import {a} from \"pkg/foo\""), "pkg/foo", "a");
    assert_eq!(edit, Edit::NoOp);
}

#[test]
fn planning_is_idempotent_once_the_edit_is_applied() {
    let engine = ImportEngine::new().unwrap();

    let first = engine.plan_import_edit(&buffer(1, ""), "pkg/foo", "bar");
    let after_first = apply_edit("", &first);
    assert_eq!(after_first, "import {bar} from \"pkg/foo\"\n");

    // a fresh buffer id stands in for the change notification
    let second = engine.plan_import_edit(&buffer(2, &after_first), "pkg/foo", "bar");
    assert_eq!(second, Edit::NoOp);

    // and the same holds for the merge path
    let merge = engine.plan_import_edit(&buffer(3, &after_first), "pkg/foo", "baz");
    let after_merge = apply_edit(&after_first, &merge);
    assert_eq!(after_merge, "import {bar, baz} from \"pkg/foo\"\n");

    let again = engine.plan_import_edit(&buffer(4, &after_merge), "pkg/foo", "baz");
    assert_eq!(again, Edit::NoOp);
}

#[test]
fn module_match_ignores_extension() {
    let engine = ImportEngine::new().unwrap();
    let edit = engine.plan_import_edit(
        &buffer(1, "import {a} from \"pkg/foo.js\"\n"),
        "pkg/foo",
        "b",
    );

    match edit {
        Edit::Replace { text, .. } => assert_eq!(text, "import {a, b} from \"pkg/foo.js\""),
        other => panic!("expected replace, got {other:?}"),
    }
}

#[test]
fn malformed_buffer_degrades_to_insert() {
    let source = "import {a from \"pkg/foo\"\nfunction {";
    let engine = ImportEngine::new().unwrap();

    let parsed = engine.parse(&buffer(1, source));
    assert!(parsed.imports().is_empty());
    assert!(parsed.imports_for_module("pkg/foo").is_empty());

    let edit = engine.plan_import_edit(&buffer(1, source), "pkg/foo", "bar");
    assert_eq!(edit, Edit::insert_at_top("import {bar} from \"pkg/foo\"\n"));
}

#[test]
fn replace_leaves_surrounding_lines_untouched() {
    let source = "// header\nimport {a} from \"pkg/foo\"\nconst x = 1\n";
    let engine = ImportEngine::new().unwrap();
    let edit = engine.plan_import_edit(&buffer(1, source), "pkg/foo", "b");

    let applied = apply_edit(source, &edit);
    assert_eq!(applied, "// header\nimport {a, b} from \"pkg/foo\"\nconst x = 1\n");
}

#[test]
fn unrelated_imports_are_not_disturbed() {
    let source = "import {x} from \"other\"\nimport {a} from \"pkg/foo\"\n";
    let engine = ImportEngine::new().unwrap();
    let edit = engine.plan_import_edit(&buffer(1, source), "pkg/foo", "b");

    let applied = apply_edit(source, &edit);
    assert_eq!(
        applied,
        "import {x} from \"other\"\nimport {a, b} from \"pkg/foo\"\n"
    );
}
