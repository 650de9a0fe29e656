//! Pretty terminal rendering (spec.md §4.3.5).

use std::fmt::Write as _;

use core_ir::SourceFiles;

use crate::bag::Bag;
use crate::diagnostic::Diagnostic;
use crate::fix::{sort_resolved_fixes, FixBuildContext, ResolvedFix};
use crate::severity::Severity;

/// ANSI color codes, used only when [`PrettyOpts::color`] resolves to
/// enabled.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m";
    pub const WARNING: &str = "\x1b[1;33m";
    pub const NOTE: &str = "\x1b[1;36m";
    pub const HELP: &str = "\x1b[1;32m";
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m";
    pub const RESET: &str = "\x1b[0m";
}

/// How the renderer decides whether to emit ANSI escapes.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    fn resolve(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// How file paths are displayed in diagnostic headers.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum PathMode {
    #[default]
    Auto,
    Absolute,
    Relative,
    Basename,
}

/// Paths longer than this (in `Auto` mode) are shown as their basename.
const AUTO_PATH_THRESHOLD: usize = 60;

fn basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

pub(crate) fn render_path(path: &str, mode: PathMode) -> String {
    match mode {
        PathMode::Absolute | PathMode::Relative => path.to_string(),
        PathMode::Basename => basename(path).to_string(),
        PathMode::Auto => {
            if path.len() > AUTO_PATH_THRESHOLD {
                basename(path).to_string()
            } else {
                path.to_string()
            }
        }
    }
}

/// Rendering options for [`render_pretty`].
#[derive(Clone, Debug)]
pub struct PrettyOpts {
    pub color: ColorMode,
    pub is_tty: bool,
    /// Lines of context shown before/after the primary span's line.
    pub context: u32,
    pub path_mode: PathMode,
    /// Soft wrap width for source lines; `0` disables wrapping.
    pub width: usize,
    pub show_notes: bool,
    pub show_fixes: bool,
    pub show_preview: bool,
}

impl Default for PrettyOpts {
    fn default() -> Self {
        PrettyOpts {
            color: ColorMode::Auto,
            is_tty: false,
            context: 2,
            path_mode: PathMode::Auto,
            width: 0,
            show_notes: true,
            show_fixes: true,
            show_preview: false,
        }
    }
}

fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => colors::ERROR,
        Severity::Warning => colors::WARNING,
        Severity::Info => colors::NOTE,
        Severity::Hint => colors::HELP,
    }
}

fn write_colored(out: &mut String, colored: bool, color: &str, text: &str) {
    if colored {
        let _ = write!(out, "{color}{text}{}", colors::RESET);
    } else {
        let _ = write!(out, "{text}");
    }
}

fn line_text<'a>(files: &'a dyn SourceFiles, file: core_ir::FileID, line: u32) -> &'a str {
    let content = files.content(file);
    let Some(start) = files.line_start_offset(file, line) else {
        return "";
    };
    let end = files
        .line_start_offset(file, line + 1)
        .map_or(content.len(), |next| next as usize);
    let start = start as usize;
    let end = end.min(content.len()).max(start);
    content[start..end].trim_end_matches(['\n', '\r'])
}

/// Render every diagnostic in `bag` (in its current order — call
/// `bag.sort()` first for the canonical order) as pretty terminal text.
pub fn render_pretty(bag: &Bag, files: &dyn SourceFiles, opts: &PrettyOpts) -> String {
    let colored = opts.color.resolve(opts.is_tty);
    let ctx = FixBuildContext::new(files);
    let mut out = String::new();

    for diagnostic in bag.items() {
        render_one(&mut out, diagnostic, files, &ctx, opts, colored);
    }

    let error_count = bag.items().iter().filter(|d| d.is_error()).count();
    let warning_count = bag
        .items()
        .iter()
        .filter(|d| d.severity == Severity::Warning)
        .count();
    if error_count > 0 {
        write_colored(&mut out, colored, colors::ERROR, "error");
        if error_count == 1 {
            let _ = write!(out, ": aborting due to previous error");
        } else {
            let _ = write!(out, ": aborting due to {error_count} previous errors");
        }
        if warning_count > 0 {
            let _ = writeln!(out, "; {warning_count} warning{} emitted", plural_s(warning_count));
        } else {
            let _ = writeln!(out);
        }
    } else if warning_count > 0 {
        write_colored(&mut out, colored, colors::WARNING, "warning");
        let _ = writeln!(out, ": {warning_count} warning{} emitted", plural_s(warning_count));
    }

    out
}

fn render_one(
    out: &mut String,
    diagnostic: &Diagnostic,
    files: &dyn SourceFiles,
    ctx: &FixBuildContext<'_>,
    opts: &PrettyOpts,
    colored: bool,
) {
    let file = diagnostic.primary.file;
    let path = render_path(files.path(file), opts.path_mode);
    let (line, col) = files.line_col(file, diagnostic.primary.start);

    let _ = write!(out, "{path}:{line}:{col}: ");
    write_colored(out, colored, severity_color(diagnostic.severity), &diagnostic.severity.to_string());
    let _ = write!(out, " ");
    write_colored(out, colored, colors::BOLD, diagnostic.code.as_str());
    let _ = writeln!(out, ": {}", diagnostic.message);

    render_excerpt(out, files, diagnostic, opts, colored);

    if opts.show_notes {
        for note in &diagnostic.notes {
            let (nline, ncol) = files.line_col(note.span.file, note.span.start);
            let _ = write!(out, "  = ");
            write_colored(out, colored, colors::NOTE, "note");
            let _ = writeln!(out, " ({nline}:{ncol}): {}", note.message);
        }
    }

    if opts.show_fixes && !diagnostic.fixes.is_empty() {
        let mut resolved: Vec<ResolvedFix> = diagnostic.fixes.iter().map(|f| f.resolve(ctx)).collect();
        sort_resolved_fixes(&mut resolved);
        for (n, fix) in resolved.iter().enumerate() {
            let _ = write!(out, "  = ");
            write_colored(out, colored, colors::HELP, "help");
            let _ = writeln!(out, ": fix #{}: {}", n + 1, fix.title);
            if let Some(err) = &fix.build_error {
                let _ = writeln!(out, "      (fix could not be built: {err})");
                continue;
            }
            for edit in &fix.edits {
                let _ = writeln!(out, "      apply=\"{}\"", edit.new_text);
                if opts.show_preview {
                    render_edit_preview(out, files, edit);
                }
            }
        }
    }

    let _ = writeln!(out);
}

fn render_excerpt(out: &mut String, files: &dyn SourceFiles, diagnostic: &Diagnostic, opts: &PrettyOpts, colored: bool) {
    let file = diagnostic.primary.file;
    let (start_line, start_col) = files.line_col(file, diagnostic.primary.start);
    let (end_line, end_col) = files.line_col(file, diagnostic.primary.end);

    let first = start_line.saturating_sub(opts.context).max(1);
    let last = (end_line + opts.context).min(files.line_count(file) as u32);

    for line in first..=last {
        let text = line_text(files, file, line);
        let text = if opts.width > 0 && text.chars().count() > opts.width {
            let truncated: String = text.chars().take(opts.width).collect();
            truncated
        } else {
            text.to_string()
        };
        let _ = writeln!(out, "{line:>4} | {text}");

        if line == start_line {
            let underline_len = if end_line == start_line {
                (end_col.saturating_sub(start_col)).max(1) as usize
            } else {
                1
            };
            let lead = " ".repeat((start_col.saturating_sub(1)) as usize);
            let caret = "^".repeat(underline_len);
            let _ = write!(out, "     | {lead}");
            write_colored(out, colored, colors::ERROR, &caret);
            let _ = writeln!(out);
        }
    }
}

/// Unified `-`/`+` preview: re-splice the touched line(s) with `new_text`.
fn render_edit_preview(out: &mut String, files: &dyn SourceFiles, edit: &crate::fix::TextEdit) {
    let file = edit.span.file;
    let (start_line, start_col) = files.line_col(file, edit.span.start);
    let (end_line, end_col) = files.line_col(file, edit.span.end);

    if start_line != end_line {
        let _ = writeln!(out, "      (multi-line edit, preview omitted)");
        return;
    }

    let before = line_text(files, file, start_line);
    let start_byte = char_index_to_byte(before, (start_col - 1) as usize);
    let end_byte = char_index_to_byte(before, (end_col - 1) as usize);
    let mut after = String::with_capacity(before.len());
    after.push_str(&before[..start_byte]);
    after.push_str(&edit.new_text);
    after.push_str(&before[end_byte..]);

    let _ = writeln!(out, "      - {before}");
    let _ = writeln!(out, "      + {after}");
}

fn char_index_to_byte(s: &str, char_idx: usize) -> usize {
    s.char_indices().nth(char_idx).map_or(s.len(), |(b, _)| b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::Code;
    use crate::fix::{Fix, TextEdit};
    use core_ir::{FileID, FileSet, Span};

    fn files() -> FileSet {
        let mut fs = FileSet::new();
        fs.add_file("src/main.sg", "let a = 42 // missing semicolon\n");
        fs
    }

    #[test]
    fn header_line_matches_expected_format() {
        let files = files();
        let file = FileID::from_raw(1);
        let mut bag = Bag::new();
        bag.add(Diagnostic::error(Code::new("LEX1002"), Span::new(file, 8, 9), "Unterminated string literal"));
        let rendered = render_pretty(&bag, &files, &PrettyOpts::default());
        assert!(rendered.starts_with("src/main.sg:1:9: error LEX1002: Unterminated string literal"));
    }

    #[test]
    fn long_paths_collapse_to_basename_in_auto_mode() {
        let long = "/".to_string() + &"a".repeat(70) + "/main.sg";
        assert_eq!(render_path(&long, PathMode::Auto), "main.sg");
        let short = "src/main.sg";
        assert_eq!(render_path(short, PathMode::Auto), short);
    }

    #[test]
    fn missing_semicolon_fix_preview_has_unified_diff_lines() {
        let files = files();
        let file = FileID::from_raw(1);
        let mut bag = Bag::new();
        let fix = Fix::new("insert semicolon", vec![TextEdit::new(Span::new(file, 10, 10), ";")]);
        bag.add(Diagnostic::warning(Code::new("SEM1000"), Span::new(file, 4, 5), "missing semicolon").with_fix(fix));
        let opts = PrettyOpts {
            show_preview: true,
            ..PrettyOpts::default()
        };
        let rendered = render_pretty(&bag, &files, &opts);
        assert!(rendered.contains("- let a = 42 // missing semicolon"));
        assert!(rendered.contains("+ let a = 42; // missing semicolon"));
    }

    #[test]
    fn summary_line_reports_error_count() {
        let files = files();
        let file = FileID::from_raw(1);
        let mut bag = Bag::new();
        bag.add(Diagnostic::error(Code::new("LEX1002"), Span::new(file, 0, 1), "bad"));
        let rendered = render_pretty(&bag, &files, &PrettyOpts::default());
        assert!(rendered.contains("aborting due to previous error"));
    }
}
