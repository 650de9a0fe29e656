//! [`Diagnostic`]: the fluent, value-semantics record every phase reports
//! through (spec.md §3.6, §4.3.2).

use core_ir::Span;

use crate::code::Code;
use crate::fix::{AttachedFix, Fix, FixThunk};
use crate::severity::Severity;

/// A secondary annotation: an extra span with an explanatory message.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Note {
    pub span: Span,
    pub message: String,
}

/// One compiler diagnostic: severity, stable code, message, primary span,
/// secondary spans, notes, and fixes.
///
/// Every fluent method takes `self` by value and returns a new
/// `Diagnostic` — value semantics avoid shared-mutable-state bugs across
/// phases (spec.md §9).
#[derive(Clone, Debug)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: Code,
    pub message: String,
    pub primary: Span,
    pub secondary: Vec<Span>,
    pub notes: Vec<Note>,
    pub fixes: Vec<AttachedFix>,
}

impl Diagnostic {
    pub fn new(severity: Severity, code: impl Into<Code>, primary: Span, message: impl Into<String>) -> Self {
        Diagnostic {
            severity,
            code: code.into(),
            message: message.into(),
            primary,
            secondary: Vec::new(),
            notes: Vec::new(),
            fixes: Vec::new(),
        }
    }

    pub fn error(code: impl Into<Code>, primary: Span, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, code, primary, message)
    }

    pub fn warning(code: impl Into<Code>, primary: Span, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, code, primary, message)
    }

    pub fn info(code: impl Into<Code>, primary: Span, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, code, primary, message)
    }

    pub fn hint(code: impl Into<Code>, primary: Span, message: impl Into<String>) -> Self {
        Self::new(Severity::Hint, code, primary, message)
    }

    #[must_use]
    pub fn with_note(mut self, span: Span, message: impl Into<String>) -> Self {
        self.notes.push(Note {
            span,
            message: message.into(),
        });
        self
    }

    #[must_use]
    pub fn with_secondary(mut self, span: Span) -> Self {
        self.secondary.push(span);
        self
    }

    /// Attach an already-constructed (eager) fix.
    #[must_use]
    pub fn with_fix(mut self, fix: Fix) -> Self {
        self.fixes.push(AttachedFix::Eager(fix));
        self
    }

    /// Attach a lazy fix thunk, resolved by the renderer against a
    /// `FileSet` exactly once (spec.md §4.3.3).
    #[must_use]
    pub fn with_fix_suggestion(mut self, thunk: Box<dyn FixThunk>) -> Self {
        self.fixes.push(AttachedFix::Lazy(thunk));
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity.is_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_ir::FileID;

    fn f() -> FileID {
        FileID::from_raw(1)
    }

    #[test]
    fn fluent_builder_accumulates() {
        let diag = Diagnostic::error("LEX1002", Span::new(f(), 8, 9), "Unterminated string literal")
            .with_note(Span::new(f(), 8, 9), "string starts here")
            .with_fix(Fix::new("insert closing quote", vec![]));
        assert!(diag.is_error());
        assert_eq!(diag.notes.len(), 1);
        assert_eq!(diag.fixes.len(), 1);
    }

    #[test]
    fn each_builder_call_is_independent_value() {
        let base = Diagnostic::warning("SEM1000", Span::new(f(), 0, 1), "base");
        let a = base.clone().with_note(Span::new(f(), 0, 1), "a");
        let b = base.with_note(Span::new(f(), 0, 1), "b");
        assert_eq!(a.notes[0].message, "a");
        assert_eq!(b.notes[0].message, "b");
    }
}
