//! The six literal end-to-end fixtures from spec.md §8.
//!
//! `surgec` has no lexer or parser of its own (spec.md §1 scopes both as
//! external collaborators) — these scenarios drive the AST builder,
//! diagnostic engine, and dialect classifier directly with the inputs and
//! expected shapes spec.md §8 spells out literally, standing in for what a
//! real front-end would hand the core after lexing/parsing.

use core_dialect::persona::{render_alien_hint, AlienHintKind, RenderInput};
use core_dialect::{Classification, Classifier, Evidence};
use core_diagnostic::{Bag, Diagnostic, Fix, TextEdit};
use core_ir::ast::{IdRange, ListTrivia, LitValue, PathSegment};
use core_ir::{Builder, FileSet, Hints, ItemKind, Span, Visibility};

/// One fixture: the source file(s) it models, the diagnostics a real
/// front-end would have produced for it, and (if relevant) the dialect
/// classification.
pub struct Scenario {
    pub name: &'static str,
    pub source: &'static str,
    pub files: FileSet,
    pub bag: Bag,
    pub classification: Option<Classification>,
}

/// All six scenarios, in spec.md §8 order.
pub fn all() -> Vec<Scenario> {
    vec![empty_file(), import_and_fn(), unterminated_string(), missing_semicolon(), dialect_hint(), attribute_wrong_target()]
}

pub fn by_name(name: &str) -> Option<Scenario> {
    all().into_iter().find(|s| s.name == name)
}

/// 1. Empty file: one `File` node with no items, no diagnostics, dialect
/// `Unknown`.
#[allow(clippy::expect_used)]
fn empty_file() -> Scenario {
    let mut files = FileSet::new();
    let file = files.add_file("empty.sg", "");

    let mut builder = Builder::new(Hints::default());
    let file_id = builder.new_file(Span::new(file, 0, 0));
    let items = builder.finish_items(builder.start_items());
    builder.set_file_items(file_id, items);
    assert!(builder.file(file_id).expect("just-created file").items.is_empty());

    Scenario {
        name: "empty-file",
        source: "",
        files,
        bag: Bag::new(),
        classification: Some(Classifier::new().classify(&Evidence::new())),
    }
}

/// 2. `import core::util;\nfn main() -> int { return 0; }` — two items in
/// order `[Import, Fn]`; empty param list; body is a block with one
/// `Return` of literal `0`.
#[allow(clippy::expect_used)]
fn import_and_fn() -> Scenario {
    let source = "import core::util;\nfn main() -> int { return 0; }";
    let mut files = FileSet::new();
    let file = files.add_file("main.sg", source);

    let mut b = Builder::new(Hints::default());
    let file_id = b.new_file(Span::new(file, 0, source.len() as u32));

    let start = b.start_items();

    let core = b.intern("core");
    let util = b.intern("util");
    let import_span = Span::new(file, 0, 19);
    let import = b.new_import(
        import_span,
        vec![
            PathSegment { name: core, span: Span::new(file, 7, 11), generic_args: IdRange::EMPTY },
            PathSegment { name: util, span: Span::new(file, 13, 17), generic_args: IdRange::EMPTY },
        ],
        None,
        IdRange::EMPTY,
    );
    b.push_item(import);

    let lit_zero = b.new_lit(Span::new(file, 47, 48), LitValue::Int { raw: b.intern("0") });
    let return_stmt = b.new_return_stmt(Span::new(file, 40, 48), lit_zero, Span::new(file, 40, 46));
    let block_range = IdRange::new(return_stmt.raw(), 1);
    let body = b.new_block_stmt(Span::new(file, 38, 51), block_range);

    let main = b.intern("main");
    let int_ty_name = b.intern("int");
    let int_ty_span = Span::new(file, 32, 35);
    let ret_ty = b.new_path_type(int_ty_span, vec![PathSegment { name: int_ty_name, span: int_ty_span, generic_args: IdRange::EMPTY }]);
    let fn_item = b.new_fn(
        Span::new(file, 20, 51),
        main,
        Span::new(file, 23, 27),
        IdRange::EMPTY,
        IdRange::EMPTY,
        ListTrivia::NONE,
        ret_ty,
        body,
        core_ir::FnModifiers::empty(),
        Visibility::Private,
        IdRange::EMPTY,
    );
    b.push_item(fn_item);

    let items = b.finish_items(start);
    b.set_file_items(file_id, items);

    debug_assert_eq!(b.item(import).expect("import item").kind, ItemKind::Import);
    debug_assert_eq!(b.item(fn_item).expect("fn item").kind, ItemKind::Fn);
    let fn_payload = b.fn_item(fn_item).expect("Fn getter on a Fn item");
    debug_assert!(b.fn_param(core_ir::FnParamID::NONE).is_none());
    debug_assert_eq!(fn_payload.params, IdRange::EMPTY);

    Scenario {
        name: "import-and-fn",
        source,
        files,
        bag: Bag::new(),
        classification: None,
    }
}

/// 3. `let x = "oops\n` — one `LEX1002` error, primary span at the
/// opening quote.
#[allow(clippy::expect_used)]
fn unterminated_string() -> Scenario {
    let source = "let x = \"oops\n";
    let mut files = FileSet::new();
    let file = files.add_file("broken.sg", source);

    let quote_offset = source.find('"').expect("fixture contains a quote") as u32;
    let mut bag = Bag::new();
    bag.add(Diagnostic::error("LEX1002", Span::new(file, quote_offset, quote_offset + 1), "Unterminated string literal"));

    Scenario {
        name: "unterminated-string",
        source,
        files,
        bag,
        classification: None,
    }
}

/// 4. `let a = 42 // missing semicolon` — a warning with a single
/// `"insert semicolon"` fix inserting `;` at byte 10.
fn missing_semicolon() -> Scenario {
    let source = "let a = 42 // missing semicolon";
    let mut files = FileSet::new();
    let file = files.add_file("missing_semi.sg", source);

    let fix = Fix::new("insert semicolon", vec![TextEdit::new(Span::new(file, 10, 10), ";")]);
    let mut bag = Bag::new();
    bag.add(Diagnostic::warning("SEM1000", Span::new(file, 4, 5), "expected `;` after this statement").with_fix(fix));

    Scenario {
        name: "missing-semicolon",
        source,
        files,
        bag,
        classification: None,
    }
}

/// 5. `impl Foo { }` — records `{Rust, 6, "rust keyword impl"}`,
/// classifies to `{kind=Rust, score=6, confidence=1.0, runnerUp=Unknown}`,
/// and emits a `Hint`-severity persona diagnostic.
fn dialect_hint() -> Scenario {
    let source = "impl Foo { }";
    let mut files = FileSet::new();
    let file = files.add_file("alien.sg", source);

    let mut evidence = Evidence::new();
    core_dialect::record_ident(&mut evidence, "impl", Span::new(file, 0, 4));
    let classification = Classifier::new().classify(&evidence);

    let message = render_alien_hint(classification.kind, RenderInput::new(AlienHintKind::TypeDeclaration));
    let mut bag = Bag::new();
    bag.add(Diagnostic::hint("DIA0001", Span::new(file, 0, 4), message));

    Scenario {
        name: "dialect-hint",
        source,
        files,
        bag,
        classification: Some(classification),
    }
}

/// 6. `@override fn f() -> int { return 0; }` outside an `extern` block —
/// AST construction succeeds; one `SEM`-coded error cites the attribute's
/// span.
#[allow(clippy::expect_used)]
fn attribute_wrong_target() -> Scenario {
    let source = "@override fn f() -> int { return 0; }";
    let mut files = FileSet::new();
    let file = files.add_file("attr.sg", source);

    let mut b = Builder::new(Hints::default());
    let file_id = b.new_file(Span::new(file, 0, source.len() as u32));
    let override_span = Span::new(file, 0, 9);
    let override_name = b.intern("override");
    let attrs = b.new_attrs(vec![core_ir::ast::Attr { name: override_name, args: IdRange::EMPTY, span: override_span }]);

    let catalog = b.attr_catalog();
    let info = catalog.lookup("override").expect("override is a known attribute");
    debug_assert!(info.has_flag(core_ir::AttrFlags::EXTERN_ONLY));

    let lit_zero = b.new_lit(Span::new(file, 34, 35), LitValue::Int { raw: b.intern("0") });
    let return_stmt = b.new_return_stmt(Span::new(file, 27, 35), lit_zero, Span::new(file, 27, 33));
    let body = b.new_block_stmt(Span::new(file, 25, 38), IdRange::new(return_stmt.raw(), 1));

    let name = b.intern("f");
    let int_ty_name = b.intern("int");
    let int_ty_span = Span::new(file, 19, 22);
    let ret_ty = b.new_path_type(int_ty_span, vec![PathSegment { name: int_ty_name, span: int_ty_span, generic_args: IdRange::EMPTY }]);

    let start = b.start_items();
    let fn_item = b.new_fn(
        Span::new(file, 0, 38),
        name,
        Span::new(file, 14, 15),
        IdRange::EMPTY,
        IdRange::EMPTY,
        ListTrivia::NONE,
        ret_ty,
        body,
        core_ir::FnModifiers::empty(),
        Visibility::Private,
        attrs,
    );
    b.push_item(fn_item);
    let items = b.finish_items(start);
    b.set_file_items(file_id, items);

    debug_assert_eq!(b.item(fn_item).expect("AST construction succeeds regardless of semantic validity").kind, ItemKind::Fn);

    let mut bag = Bag::new();
    bag.add(Diagnostic::error(
        "SEM4001",
        override_span,
        "`@override` is only valid inside an `extern` block",
    ));

    Scenario {
        name: "attribute-wrong-target",
        source,
        files,
        bag,
        classification: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_scenarios_exist_with_unique_names() {
        let scenarios = all();
        assert_eq!(scenarios.len(), 6);
        let mut names: Vec<&str> = scenarios.iter().map(|s| s.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 6);
    }

    #[test]
    fn empty_file_has_no_diagnostics_and_unknown_dialect() {
        let s = by_name("empty-file").expect("scenario exists");
        assert!(s.bag.is_empty());
        assert_eq!(s.classification.expect("classified").kind, core_dialect::Kind::Unknown);
    }

    #[test]
    fn unterminated_string_has_exactly_one_lex_error() {
        let s = by_name("unterminated-string").expect("scenario exists");
        assert_eq!(s.bag.len(), 1);
        let diag = &s.bag.items()[0];
        assert_eq!(diag.code.as_str(), "LEX1002");
        assert!(diag.is_error());
        assert_eq!(diag.primary.start, 8);
    }

    #[test]
    fn missing_semicolon_fix_inserts_at_byte_ten() {
        let s = by_name("missing-semicolon").expect("scenario exists");
        let diag = &s.bag.items()[0];
        assert_eq!(diag.fixes.len(), 1);
        let ctx = core_diagnostic::FixBuildContext::new(&s.files);
        let resolved = diag.fixes[0].resolve(&ctx);
        assert_eq!(resolved.title, "insert semicolon");
        assert_eq!(resolved.edits[0].span.start, 10);
        assert_eq!(resolved.edits[0].span.end, 10);
        assert_eq!(resolved.edits[0].new_text, ";");
    }

    #[test]
    fn dialect_hint_scores_rust_with_full_confidence() {
        let s = by_name("dialect-hint").expect("scenario exists");
        let classification = s.classification.expect("classified");
        assert_eq!(classification.kind, core_dialect::Kind::Rust);
        assert_eq!(classification.score, 6);
        assert_eq!(classification.confidence, 1.0);
        assert_eq!(classification.runner_up, core_dialect::Kind::Unknown);
        assert_eq!(s.bag.items()[0].severity, core_diagnostic::Severity::Hint);
    }

    #[test]
    fn attribute_wrong_target_still_builds_ast_and_reports_sem_error() {
        let s = by_name("attribute-wrong-target").expect("scenario exists");
        assert_eq!(s.bag.len(), 1);
        let diag = &s.bag.items()[0];
        assert!(diag.code.as_str().starts_with("SEM"));
        assert!(diag.is_error());
    }
}
