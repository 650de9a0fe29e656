//! The fix model: eager `TextEdit`s and lazy fix thunks resolved against a
//! `FileSet` at render time (spec.md §4.3.3).

use std::fmt;

use core_ir::{SourceFiles, Span};

/// A single text replacement within one file. Half-open `[start, end)`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TextEdit {
    pub span: Span,
    pub new_text: String,
    /// The text being replaced, when known — lets renderers build a
    /// before/after preview without re-reading the file.
    pub old_text: Option<String>,
}

impl TextEdit {
    pub fn new(span: Span, new_text: impl Into<String>) -> Self {
        TextEdit {
            span,
            new_text: new_text.into(),
            old_text: None,
        }
    }

    #[must_use]
    pub fn with_old_text(mut self, old_text: impl Into<String>) -> Self {
        self.old_text = Some(old_text.into());
        self
    }

    /// `true` if the span is empty (a pure insertion).
    pub fn is_insert(&self) -> bool {
        self.span.is_empty()
    }
}

/// What kind of action a fix represents.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum FixKind {
    QuickFix,
    Refactor,
}

/// How safe a fix is to auto-apply. Ordered safest-first so `Ord` doubles
/// as the §4.3.4 sort key.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Applicability {
    AlwaysSafe,
    SafeWithHeuristics,
    MaybeIncorrect,
    Unresolved,
}

/// An eagerly-constructed fix: edits are already known.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Fix {
    pub id: Option<u32>,
    pub title: String,
    pub kind: FixKind,
    pub applicability: Applicability,
    pub is_preferred: bool,
    pub edits: Vec<TextEdit>,
}

impl Fix {
    pub fn new(title: impl Into<String>, edits: Vec<TextEdit>) -> Self {
        Fix {
            id: None,
            title: title.into(),
            kind: FixKind::QuickFix,
            applicability: Applicability::MaybeIncorrect,
            is_preferred: false,
            edits,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn with_kind(mut self, kind: FixKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn with_applicability(mut self, applicability: Applicability) -> Self {
        self.applicability = applicability;
        self
    }

    #[must_use]
    pub fn preferred(mut self) -> Self {
        self.is_preferred = true;
        self
    }

    /// `true` if two edits in this fix overlap. Overlapping edits cannot be
    /// applied unambiguously to one file (spec.md §8).
    pub fn has_overlapping_edits(&self) -> bool {
        let mut by_file: std::collections::HashMap<_, Vec<&TextEdit>> = std::collections::HashMap::new();
        for edit in &self.edits {
            by_file.entry(edit.span.file).or_default().push(edit);
        }
        for edits in by_file.values_mut() {
            edits.sort_by_key(|e| e.span.start);
            for pair in edits.windows(2) {
                if pair[0].span.end > pair[1].span.start {
                    return true;
                }
            }
        }
        false
    }
}

/// Context a lazy fix thunk needs to rebuild itself: the `FileSet` so it
/// can re-derive spans-aware edits (spec.md §4.3.3).
pub struct FixBuildContext<'a> {
    pub files: &'a dyn SourceFiles,
}

impl<'a> FixBuildContext<'a> {
    pub fn new(files: &'a dyn SourceFiles) -> Self {
        FixBuildContext { files }
    }
}

/// Error produced when a lazy fix thunk fails to build.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct FixBuildError(pub String);

impl fmt::Display for FixBuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for FixBuildError {}

/// A deferred fix: resolves to a concrete [`Fix`] against a
/// [`FixBuildContext`] on demand. `build` must be idempotent and
/// deterministic for a given context (spec.md §4.3.3).
pub trait FixThunk: fmt::Debug {
    /// Stable identifier carried even if `build` fails.
    fn id(&self) -> u32;

    fn build(&self, ctx: &FixBuildContext<'_>) -> Result<Fix, FixBuildError>;
}

/// A fix attached to a diagnostic: either already built, or a thunk that
/// builds one at render time.
pub enum AttachedFix {
    Eager(Fix),
    Lazy(Box<dyn FixThunk>),
}

impl fmt::Debug for AttachedFix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttachedFix::Eager(fix) => f.debug_tuple("Eager").field(fix).finish(),
            AttachedFix::Lazy(thunk) => f.debug_tuple("Lazy").field(thunk).finish(),
        }
    }
}

impl Clone for AttachedFix {
    fn clone(&self) -> Self {
        match self {
            AttachedFix::Eager(fix) => AttachedFix::Eager(fix.clone()),
            // Thunks are not `Clone`-able in general (arbitrary captured
            // state); a lazy fix degrades to its last-known id on clone,
            // which only matters for diagnostics that are cloned before
            // ever being rendered.
            AttachedFix::Lazy(thunk) => AttachedFix::Eager(Fix {
                id: Some(thunk.id()),
                title: String::from("<unresolved lazy fix>"),
                kind: FixKind::QuickFix,
                applicability: Applicability::Unresolved,
                is_preferred: false,
                edits: Vec::new(),
            }),
        }
    }
}

/// A fix after resolution against a [`FixBuildContext`]: always concrete,
/// carrying a `build_error` if a lazy thunk failed (spec.md §4.3.3/4.3.9).
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ResolvedFix {
    pub id: Option<u32>,
    pub title: String,
    pub kind: FixKind,
    pub applicability: Applicability,
    pub is_preferred: bool,
    pub edits: Vec<TextEdit>,
    pub build_error: Option<String>,
}

impl AttachedFix {
    /// Resolve to a concrete fix. Idempotent and deterministic for a given
    /// `ctx` (spec.md §8).
    pub fn resolve(&self, ctx: &FixBuildContext<'_>) -> ResolvedFix {
        match self {
            AttachedFix::Eager(fix) => {
                if fix.has_overlapping_edits() {
                    ResolvedFix {
                        id: fix.id,
                        title: fix.title.clone(),
                        kind: fix.kind,
                        applicability: fix.applicability,
                        is_preferred: fix.is_preferred,
                        edits: Vec::new(),
                        build_error: Some(String::from("fix has overlapping edits")),
                    }
                } else {
                    ResolvedFix {
                        id: fix.id,
                        title: fix.title.clone(),
                        kind: fix.kind,
                        applicability: fix.applicability,
                        is_preferred: fix.is_preferred,
                        edits: fix.edits.clone(),
                        build_error: None,
                    }
                }
            }
            AttachedFix::Lazy(thunk) => match thunk.build(ctx) {
                Ok(fix) => ResolvedFix {
                    id: fix.id.or(Some(thunk.id())),
                    title: fix.title,
                    kind: fix.kind,
                    applicability: fix.applicability,
                    is_preferred: fix.is_preferred,
                    edits: fix.edits,
                    build_error: None,
                },
                Err(err) => ResolvedFix {
                    id: Some(thunk.id()),
                    title: String::from("<unresolved fix>"),
                    kind: FixKind::QuickFix,
                    applicability: Applicability::Unresolved,
                    is_preferred: false,
                    edits: Vec::new(),
                    build_error: Some(err.0),
                },
            },
        }
    }
}

/// Sort resolved fixes per spec.md §4.3.4: preferred first, then
/// applicability ascending (safer first), then kind, then title, then id.
pub fn sort_resolved_fixes(fixes: &mut [ResolvedFix]) {
    fixes.sort_by(|a, b| {
        b.is_preferred
            .cmp(&a.is_preferred)
            .then(a.applicability.cmp(&b.applicability))
            .then(a.kind.cmp(&b.kind))
            .then(a.title.cmp(&b.title))
            .then(sort_id_key(a.id).cmp(&sort_id_key(b.id)))
    });
}

fn sort_id_key(id: Option<u32>) -> (bool, u32) {
    (id.is_none(), id.unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_ir::FileID;

    fn f() -> FileID {
        FileID::from_raw(1)
    }

    #[derive(Debug)]
    struct AlwaysFails(u32);
    impl FixThunk for AlwaysFails {
        fn id(&self) -> u32 {
            self.0
        }
        fn build(&self, _ctx: &FixBuildContext<'_>) -> Result<Fix, FixBuildError> {
            Err(FixBuildError("nope".into()))
        }
    }

    struct EmptyFiles;
    impl SourceFiles for EmptyFiles {
        fn path(&self, _file: FileID) -> &str {
            ""
        }
        fn content(&self, _file: FileID) -> &str {
            ""
        }
        fn line_col(&self, _file: FileID, _offset: u32) -> (u32, u32) {
            (1, 1)
        }
        fn line_count(&self, _file: FileID) -> usize {
            0
        }
        fn line_start_offset(&self, _file: FileID, _line: u32) -> Option<u32> {
            None
        }
    }

    #[test]
    fn eager_fix_resolves_without_error() {
        let fix = Fix::new("insert semicolon", vec![TextEdit::new(Span::new(f(), 10, 10), ";")]);
        let attached = AttachedFix::Eager(fix);
        let files = EmptyFiles;
        let ctx = FixBuildContext::new(&files);
        let resolved = attached.resolve(&ctx);
        assert!(resolved.build_error.is_none());
        assert_eq!(resolved.edits.len(), 1);
    }

    #[test]
    fn failed_lazy_fix_has_empty_edits_and_build_error() {
        let attached = AttachedFix::Lazy(Box::new(AlwaysFails(7)));
        let files = EmptyFiles;
        let ctx = FixBuildContext::new(&files);
        let resolved = attached.resolve(&ctx);
        assert!(resolved.edits.is_empty());
        assert!(resolved.build_error.is_some());
        assert_eq!(resolved.id, Some(7));
    }

    #[test]
    fn resolution_is_idempotent() {
        let attached = AttachedFix::Lazy(Box::new(AlwaysFails(3)));
        let files = EmptyFiles;
        let ctx = FixBuildContext::new(&files);
        let first = attached.resolve(&ctx);
        let second = attached.resolve(&ctx);
        assert_eq!(first, second);
    }

    #[test]
    fn sort_prefers_preferred_then_safety() {
        let mut fixes = vec![
            ResolvedFix {
                id: Some(2),
                title: "b".into(),
                kind: FixKind::QuickFix,
                applicability: Applicability::MaybeIncorrect,
                is_preferred: false,
                edits: vec![],
                build_error: None,
            },
            ResolvedFix {
                id: Some(1),
                title: "a".into(),
                kind: FixKind::QuickFix,
                applicability: Applicability::AlwaysSafe,
                is_preferred: false,
                edits: vec![],
                build_error: None,
            },
            ResolvedFix {
                id: Some(3),
                title: "c".into(),
                kind: FixKind::QuickFix,
                applicability: Applicability::Unresolved,
                is_preferred: true,
                edits: vec![],
                build_error: None,
            },
        ];
        sort_resolved_fixes(&mut fixes);
        assert_eq!(fixes[0].title, "c");
        assert_eq!(fixes[1].title, "a");
        assert_eq!(fixes[2].title, "b");
    }

    #[test]
    fn overlapping_edits_detected() {
        let fix = Fix::new(
            "bad",
            vec![
                TextEdit::new(Span::new(f(), 0, 10), "a"),
                TextEdit::new(Span::new(f(), 5, 15), "b"),
            ],
        );
        assert!(fix.has_overlapping_edits());
    }

    #[test]
    fn non_overlapping_edits_pass() {
        let fix = Fix::new(
            "ok",
            vec![
                TextEdit::new(Span::new(f(), 0, 5), "a"),
                TextEdit::new(Span::new(f(), 5, 10), "b"),
            ],
        );
        assert!(!fix.has_overlapping_edits());
    }

    #[test]
    fn eager_fix_with_overlapping_edits_resolves_to_build_error() {
        let fix = Fix::new(
            "bad",
            vec![
                TextEdit::new(Span::new(f(), 0, 10), "a"),
                TextEdit::new(Span::new(f(), 5, 15), "b"),
            ],
        );
        let attached = AttachedFix::Eager(fix);
        let files = EmptyFiles;
        let ctx = FixBuildContext::new(&files);
        let resolved = attached.resolve(&ctx);
        assert!(resolved.edits.is_empty());
        assert!(resolved.build_error.is_some());
    }
}
