//! SARIF 2.1.0 rendering (spec.md §4.3.7).
//!
//! One `runs[]` entry per invocation, `results[]` mirroring the `Bag`
//! one-to-one. Hand-rolled JSON, same as [`super::json`], to keep key order
//! and byte-for-byte determinism under our own control.

use std::fmt::Write as _;

use core_ir::SourceFiles;

use super::pretty::{render_path, PathMode};
use super::{escape_json, trailing_comma};
use crate::bag::Bag;
use crate::diagnostic::Diagnostic;
use crate::severity::Severity;

/// Static metadata describing the tool that produced the run, carried in
/// `tool.driver`.
#[derive(Clone, Debug)]
pub struct SarifRunMeta {
    pub tool_name: String,
    pub tool_version: String,
    pub invocation_args: Vec<String>,
    /// How `artifactLocation.uri` is rendered (spec.md §6.4 — CLI-wide,
    /// not pretty-only).
    pub path_mode: PathMode,
}

impl SarifRunMeta {
    pub fn new(tool_name: impl Into<String>, tool_version: impl Into<String>) -> Self {
        SarifRunMeta {
            tool_name: tool_name.into(),
            tool_version: tool_version.into(),
            invocation_args: Vec::new(),
            path_mode: PathMode::default(),
        }
    }

    #[must_use]
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.invocation_args = args;
        self
    }

    #[must_use]
    pub fn with_path_mode(mut self, path_mode: PathMode) -> Self {
        self.path_mode = path_mode;
        self
    }
}

fn sarif_level(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
        Severity::Info | Severity::Hint => "note",
    }
}

/// Render `bag` as a SARIF 2.1.0 document with a single run.
pub fn render_sarif(bag: &Bag, files: &dyn SourceFiles, meta: &SarifRunMeta) -> String {
    let mut out = String::new();
    out.push_str("{\n");
    out.push_str("  \"$schema\": \"https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json\",\n");
    out.push_str("  \"version\": \"2.1.0\",\n");
    out.push_str("  \"runs\": [\n");
    out.push_str("    {\n");
    write_tool(&mut out, meta);
    out.push_str(",\n");
    write_invocations(&mut out, meta);
    out.push_str(",\n");
    write_results(&mut out, bag, files, meta.path_mode);
    out.push('\n');
    out.push_str("    }\n");
    out.push_str("  ]\n");
    out.push_str("}\n");
    out
}

fn write_tool(out: &mut String, meta: &SarifRunMeta) {
    out.push_str("      \"tool\": {\n");
    out.push_str("        \"driver\": {\n");
    let _ = writeln!(out, "          \"name\": \"{}\",", escape_json(&meta.tool_name));
    let _ = writeln!(out, "          \"version\": \"{}\"", escape_json(&meta.tool_version));
    out.push_str("        }\n");
    out.push_str("      }");
}

fn write_invocations(out: &mut String, meta: &SarifRunMeta) {
    out.push_str("      \"invocations\": [\n");
    out.push_str("        {\n");
    out.push_str("          \"commandLine\": \"");
    out.push_str(&escape_json(&meta.invocation_args.join(" ")));
    out.push_str("\",\n");
    out.push_str("          \"arguments\": [\n");
    for (i, arg) in meta.invocation_args.iter().enumerate() {
        let _ = writeln!(out, "            \"{}\"{}", escape_json(arg), trailing_comma(i, meta.invocation_args.len()));
    }
    out.push_str("          ],\n");
    out.push_str("          \"executionSuccessful\": true\n");
    out.push_str("        }\n");
    out.push_str("      ]");
}

fn write_results(out: &mut String, bag: &Bag, files: &dyn SourceFiles, path_mode: PathMode) {
    let items = bag.items();
    out.push_str("      \"results\": [\n");
    for (i, diagnostic) in items.iter().enumerate() {
        write_result(out, diagnostic, files, path_mode);
        let _ = writeln!(out, "{}", trailing_comma(i, items.len()));
    }
    out.push_str("      ]");
}

fn write_result(out: &mut String, diagnostic: &Diagnostic, files: &dyn SourceFiles, path_mode: PathMode) {
    out.push_str("        {\n");
    let _ = writeln!(out, "          \"ruleId\": \"{}\",", escape_json(diagnostic.code.as_str()));
    let _ = writeln!(out, "          \"level\": \"{}\",", sarif_level(diagnostic.severity));
    out.push_str("          \"message\": {\n");
    let _ = writeln!(out, "            \"text\": \"{}\"", escape_json(&diagnostic.message));
    let has_notes = !diagnostic.notes.is_empty();
    out.push_str("          },\n");
    out.push_str("          \"locations\": [\n");
    out.push_str("            {\n");
    write_physical_location(out, files, diagnostic.primary, path_mode, "              ");
    out.push('\n');
    out.push_str("            }\n");
    let _ = writeln!(out, "          ]{}", if has_notes { "," } else { "" });
    if has_notes {
        out.push_str("          \"relatedLocations\": [\n");
        for (i, note) in diagnostic.notes.iter().enumerate() {
            out.push_str("            {\n");
            write_physical_location(out, files, note.span, path_mode, "              ");
            out.push_str(",\n");
            out.push_str("              \"message\": {\n");
            let _ = writeln!(out, "                \"text\": \"{}\"", escape_json(&note.message));
            out.push_str("              }\n");
            let _ = writeln!(out, "            }}{}", trailing_comma(i, diagnostic.notes.len()));
        }
        out.push_str("          ]\n");
    }
    out.push_str("        }");
}

fn write_physical_location(out: &mut String, files: &dyn SourceFiles, span: core_ir::Span, path_mode: PathMode, indent: &str) {
    let (start_line, start_col) = files.line_col(span.file, span.start);
    let (end_line, end_col) = files.line_col(span.file, span.end);
    let path = render_path(files.path(span.file), path_mode);
    let _ = writeln!(out, "{indent}\"physicalLocation\": {{");
    let _ = writeln!(out, "{indent}  \"artifactLocation\": {{");
    let _ = writeln!(out, "{indent}    \"uri\": \"{}\"", escape_json(&path));
    let _ = writeln!(out, "{indent}  }},");
    let _ = writeln!(out, "{indent}  \"region\": {{");
    let _ = writeln!(out, "{indent}    \"startLine\": {start_line},");
    let _ = writeln!(out, "{indent}    \"startColumn\": {start_col},");
    let _ = writeln!(out, "{indent}    \"endLine\": {end_line},");
    let _ = writeln!(out, "{indent}    \"endColumn\": {end_col}");
    let _ = writeln!(out, "{indent}  }}");
    let _ = write!(out, "{indent}}}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::Code;
    use core_ir::{FileID, FileSet, Span};

    fn files() -> FileSet {
        let mut fs = FileSet::new();
        fs.add_file("src/main.sg", "let x = \"oops\n");
        fs
    }

    #[test]
    fn severity_maps_to_sarif_levels() {
        assert_eq!(sarif_level(Severity::Error), "error");
        assert_eq!(sarif_level(Severity::Warning), "warning");
        assert_eq!(sarif_level(Severity::Info), "note");
        assert_eq!(sarif_level(Severity::Hint), "note");
    }

    #[test]
    fn document_has_one_run_and_matching_result_count() {
        let files = files();
        let file = FileID::from_raw(1);
        let mut bag = Bag::new();
        bag.add(Diagnostic::error(Code::new("LEX1002"), Span::new(file, 8, 9), "Unterminated string literal"));
        bag.add(Diagnostic::warning(Code::new("SEM1000"), Span::new(file, 0, 3), "bad"));
        let meta = SarifRunMeta::new("surgec", "0.1.0-alpha.1");
        let rendered = render_sarif(&bag, &files, &meta);
        assert_eq!(rendered.matches("\"runs\"").count(), 1);
        assert_eq!(rendered.matches("\"ruleId\"").count(), 2);
        assert!(rendered.contains("\"version\": \"2.1.0\""));
    }

    #[test]
    fn basename_path_mode_shortens_the_uri() {
        let files = files();
        let file = FileID::from_raw(1);
        let mut bag = Bag::new();
        bag.add(Diagnostic::error(Code::new("LEX1002"), Span::new(file, 8, 9), "Unterminated string literal"));
        let meta = SarifRunMeta::new("surgec", "0.1.0-alpha.1").with_path_mode(PathMode::Basename);
        let rendered = render_sarif(&bag, &files, &meta);
        assert!(rendered.contains("\"uri\": \"main.sg\""));
        assert!(!rendered.contains("src/main.sg"));
    }

    #[test]
    fn rendering_twice_is_byte_identical() {
        let files = files();
        let file = FileID::from_raw(1);
        let mut bag = Bag::new();
        bag.add(
            Diagnostic::error(Code::new("LEX1002"), Span::new(file, 8, 9), "Unterminated string literal")
                .with_note(Span::new(file, 0, 3), "note here"),
        );
        let meta = SarifRunMeta::new("surgec", "0.1.0-alpha.1").with_args(vec!["build".into(), "main.sg".into()]);
        let first = render_sarif(&bag, &files, &meta);
        let second = render_sarif(&bag, &files, &meta);
        assert_eq!(first, second);
    }
}
