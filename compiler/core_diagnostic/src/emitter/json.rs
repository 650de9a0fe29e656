//! Hand-rolled JSON rendering (spec.md §4.3.6).
//!
//! Built manually rather than via `serde_json` — matches the teacher's own
//! "avoid serde dependency" emitter, and lets us control key order byte for
//! byte (spec.md §4.3.8 determinism).

use std::fmt::Write as _;

use core_ir::SourceFiles;

use super::pretty::{render_path, PathMode};
use super::{escape_json, trailing_comma};
use crate::bag::Bag;
use crate::diagnostic::Diagnostic;
use crate::fix::{sort_resolved_fixes, FixBuildContext, ResolvedFix, TextEdit};

/// Rendering options for [`render_json`].
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonOpts {
    pub include_notes: bool,
    pub include_fixes: bool,
    /// Emit `start_line`/`start_col`/`end_line`/`end_col` alongside the raw
    /// byte offsets.
    pub include_positions: bool,
    /// Embed a unified before/after preview on each edit (requires
    /// `include_fixes`).
    pub include_previews: bool,
    /// How `"file"` paths are rendered (spec.md §6.4 — CLI-wide, not
    /// pretty-only).
    pub path_mode: PathMode,
}

/// Render every diagnostic in `bag` as a single JSON document:
/// `{"diagnostics": [...], "count": N}`.
pub fn render_json(bag: &Bag, files: &dyn SourceFiles, opts: &JsonOpts) -> String {
    let ctx = FixBuildContext::new(files);
    let items = bag.items();
    let mut out = String::new();
    out.push_str("{\n");
    out.push_str("  \"diagnostics\": [\n");
    for (i, diagnostic) in items.iter().enumerate() {
        write_diagnostic(&mut out, diagnostic, files, &ctx, opts, "    ");
        let _ = writeln!(out, "{}", trailing_comma(i, items.len()));
    }
    out.push_str("  ],\n");
    let _ = writeln!(out, "  \"count\": {}", items.len());
    out.push_str("}\n");
    out
}

fn write_diagnostic(
    out: &mut String,
    diagnostic: &Diagnostic,
    files: &dyn SourceFiles,
    ctx: &FixBuildContext<'_>,
    opts: &JsonOpts,
    indent: &str,
) {
    let inner = format!("{indent}  ");
    let _ = writeln!(out, "{indent}{{");
    let _ = writeln!(out, "{inner}\"severity\": \"{}\",", diagnostic.severity);
    let _ = writeln!(out, "{inner}\"code\": \"{}\",", escape_json(diagnostic.code.as_str()));
    let _ = writeln!(out, "{inner}\"message\": \"{}\",", escape_json(&diagnostic.message));
    let has_notes = opts.include_notes && !diagnostic.notes.is_empty();
    let has_fixes = opts.include_fixes && !diagnostic.fixes.is_empty();
    let trailing = if has_notes || has_fixes { "," } else { "" };
    let _ = write!(out, "{inner}\"location\": ");
    write_location(out, files, diagnostic.primary, opts, &inner);
    let _ = writeln!(out, "{trailing}");

    if has_notes {
        let _ = writeln!(out, "{inner}\"notes\": [");
        for (i, note) in diagnostic.notes.iter().enumerate() {
            let note_indent = format!("{inner}  ");
            let _ = writeln!(out, "{note_indent}{{");
            let _ = write!(out, "{note_indent}  \"location\": ");
            write_location(out, files, note.span, opts, &format!("{note_indent}  "));
            let _ = writeln!(out, ",");
            let _ = writeln!(out, "{note_indent}  \"message\": \"{}\"", escape_json(&note.message));
            let _ = writeln!(out, "{note_indent}}}{}", trailing_comma(i, diagnostic.notes.len()));
        }
        let _ = writeln!(out, "{inner}]{}", if has_fixes { "," } else { "" });
    }

    if has_fixes {
        let mut resolved: Vec<ResolvedFix> = diagnostic.fixes.iter().map(|f| f.resolve(ctx)).collect();
        sort_resolved_fixes(&mut resolved);
        let _ = writeln!(out, "{inner}\"fixes\": [");
        for (i, fix) in resolved.iter().enumerate() {
            write_fix(out, fix, files, opts, &format!("{inner}  "));
            let _ = writeln!(out, "{}", trailing_comma(i, resolved.len()));
        }
        let _ = writeln!(out, "{inner}]");
    }

    let _ = write!(out, "{indent}}}");
}

fn write_location(out: &mut String, files: &dyn SourceFiles, span: core_ir::Span, opts: &JsonOpts, indent: &str) {
    let path = render_path(files.path(span.file), opts.path_mode);
    let _ = writeln!(out, "{{");
    let inner = format!("{indent}  ");
    let _ = writeln!(out, "{inner}\"file\": \"{}\",", escape_json(&path));
    let _ = writeln!(out, "{inner}\"start_byte\": {},", span.start);
    let has_positions = opts.include_positions;
    let trailing = if has_positions { "," } else { "" };
    let _ = writeln!(out, "{inner}\"end_byte\": {}{trailing}", span.end);
    if has_positions {
        let (start_line, start_col) = files.line_col(span.file, span.start);
        let (end_line, end_col) = files.line_col(span.file, span.end);
        let _ = writeln!(out, "{inner}\"start_line\": {start_line},");
        let _ = writeln!(out, "{inner}\"start_col\": {start_col},");
        let _ = writeln!(out, "{inner}\"end_line\": {end_line},");
        let _ = writeln!(out, "{inner}\"end_col\": {end_col}");
    }
    let _ = write!(out, "{indent}}}");
}

fn write_fix(out: &mut String, fix: &ResolvedFix, files: &dyn SourceFiles, opts: &JsonOpts, indent: &str) {
    let inner = format!("{indent}  ");
    let _ = writeln!(out, "{indent}{{");
    if let Some(id) = fix.id {
        let _ = writeln!(out, "{inner}\"id\": {id},");
    }
    let _ = writeln!(out, "{inner}\"title\": \"{}\",", escape_json(&fix.title));
    let _ = writeln!(out, "{inner}\"kind\": \"{}\",", fix_kind_str(fix.kind));
    let _ = writeln!(out, "{inner}\"applicability\": \"{}\",", applicability_str(fix.applicability));
    if fix.is_preferred {
        let _ = writeln!(out, "{inner}\"is_preferred\": true,");
    }
    if let Some(err) = &fix.build_error {
        let _ = writeln!(out, "{inner}\"build_error\": \"{}\",", escape_json(err));
    }
    let _ = writeln!(out, "{inner}\"edits\": [");
    for (i, edit) in fix.edits.iter().enumerate() {
        write_edit(out, edit, files, opts, &format!("{inner}  "));
        let _ = writeln!(out, "{}", trailing_comma(i, fix.edits.len()));
    }
    let _ = writeln!(out, "{inner}]");
    let _ = write!(out, "{indent}}}");
}

fn write_edit(out: &mut String, edit: &TextEdit, files: &dyn SourceFiles, opts: &JsonOpts, indent: &str) {
    let inner = format!("{indent}  ");
    let _ = writeln!(out, "{indent}{{");
    let _ = write!(out, "{inner}\"location\": ");
    write_location(out, files, edit.span, opts, &inner);
    let _ = writeln!(out, ",");
    let has_old = edit.old_text.is_some();
    let has_previews = opts.include_previews;
    let trailing = if has_old || has_previews { "," } else { "" };
    let _ = writeln!(out, "{inner}\"new_text\": \"{}\"{trailing}", escape_json(&edit.new_text));
    if let Some(old) = &edit.old_text {
        let trailing = if has_previews { "," } else { "" };
        let _ = writeln!(out, "{inner}\"old_text\": \"{}\"{trailing}", escape_json(old));
    }
    if has_previews {
        let (before, after) = preview_lines(files, edit);
        let _ = writeln!(out, "{inner}\"before_lines\": \"{}\",", escape_json(&before));
        let _ = writeln!(out, "{inner}\"after_lines\": \"{}\"", escape_json(&after));
    }
    let _ = write!(out, "{indent}}}");
}

/// Same re-splicing logic as the pretty preview: the single line touched by
/// `edit`, before and after applying `new_text`.
fn preview_lines(files: &dyn SourceFiles, edit: &TextEdit) -> (String, String) {
    let file = edit.span.file;
    let (start_line, start_col) = files.line_col(file, edit.span.start);
    let (end_line, end_col) = files.line_col(file, edit.span.end);
    if start_line != end_line {
        return (String::new(), String::new());
    }
    let content = files.content(file);
    let Some(line_start) = files.line_start_offset(file, start_line) else {
        return (String::new(), String::new());
    };
    let line_end = files
        .line_start_offset(file, start_line + 1)
        .map_or(content.len(), |next| next as usize);
    let before_line = content[line_start as usize..line_end.min(content.len())].trim_end_matches(['\n', '\r']);

    let start_byte = before_line.char_indices().nth((start_col - 1) as usize).map_or(before_line.len(), |(b, _)| b);
    let end_byte = before_line.char_indices().nth((end_col - 1) as usize).map_or(before_line.len(), |(b, _)| b);
    let mut after_line = String::with_capacity(before_line.len());
    after_line.push_str(&before_line[..start_byte]);
    after_line.push_str(&edit.new_text);
    after_line.push_str(&before_line[end_byte..]);
    (before_line.to_string(), after_line)
}

fn fix_kind_str(kind: crate::fix::FixKind) -> &'static str {
    match kind {
        crate::fix::FixKind::QuickFix => "quick_fix",
        crate::fix::FixKind::Refactor => "refactor",
    }
}

fn applicability_str(applicability: crate::fix::Applicability) -> &'static str {
    use crate::fix::Applicability;
    match applicability {
        Applicability::AlwaysSafe => "always_safe",
        Applicability::SafeWithHeuristics => "safe_with_heuristics",
        Applicability::MaybeIncorrect => "maybe_incorrect",
        Applicability::Unresolved => "unresolved",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::Code;
    use crate::diagnostic::Diagnostic;
    use core_ir::{FileID, FileSet, Span};

    fn files() -> FileSet {
        let mut fs = FileSet::new();
        fs.add_file("src/main.sg", "let x = \"oops\n");
        fs
    }

    #[test]
    fn empty_bag_renders_empty_array() {
        let bag = Bag::new();
        let rendered = render_json(&bag, &files(), &JsonOpts::default());
        assert!(rendered.contains("\"diagnostics\": [\n  ],"));
        assert!(rendered.contains("\"count\": 0"));
    }

    #[test]
    fn default_path_mode_renders_the_literal_path() {
        let files = files();
        let file = FileID::from_raw(1);
        let mut bag = Bag::new();
        bag.add(Diagnostic::error(Code::new("LEX1002"), Span::new(file, 8, 9), "Unterminated string literal"));
        let rendered = render_json(&bag, &files, &JsonOpts::default());
        assert!(rendered.contains("\"file\": \"src/main.sg\""));
        assert!(rendered.contains("\"code\": \"LEX1002\""));
        assert!(rendered.contains("\"severity\": \"error\""));
    }

    #[test]
    fn basename_path_mode_shortens_the_file_field() {
        let files = files();
        let file = FileID::from_raw(1);
        let mut bag = Bag::new();
        bag.add(Diagnostic::error(Code::new("LEX1002"), Span::new(file, 8, 9), "Unterminated string literal"));
        let rendered = render_json(
            &bag,
            &files,
            &JsonOpts {
                path_mode: PathMode::Basename,
                ..JsonOpts::default()
            },
        );
        assert!(rendered.contains("\"file\": \"main.sg\""));
        assert!(!rendered.contains("src/main.sg"));
    }

    #[test]
    fn positions_included_only_when_requested() {
        let files = files();
        let file = FileID::from_raw(1);
        let mut bag = Bag::new();
        bag.add(Diagnostic::error(Code::new("LEX1002"), Span::new(file, 8, 9), "bad"));
        let without = render_json(&bag, &files, &JsonOpts::default());
        assert!(!without.contains("start_line"));
        let with = render_json(
            &bag,
            &files,
            &JsonOpts {
                include_positions: true,
                ..JsonOpts::default()
            },
        );
        assert!(with.contains("\"start_line\": 1"));
    }

    #[test]
    fn rendering_twice_is_byte_identical() {
        let files = files();
        let file = FileID::from_raw(1);
        let mut bag = Bag::new();
        bag.add(Diagnostic::warning(Code::new("SEM1000"), Span::new(file, 0, 3), "bad"));
        let opts = JsonOpts {
            include_notes: true,
            include_fixes: true,
            include_positions: true,
            include_previews: true,
        };
        let first = render_json(&bag, &files, &opts);
        let second = render_json(&bag, &files, &opts);
        assert_eq!(first, second);
    }
}
