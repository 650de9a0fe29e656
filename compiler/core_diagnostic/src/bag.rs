//! [`Bag`]: the single-writer-per-phase diagnostic collector (spec.md §4.3.1).

use crate::diagnostic::Diagnostic;

/// Collects diagnostics during one phase of compilation.
///
/// Enforces a soft maximum: once `cap` diagnostics have been added (`cap ==
/// 0` means unlimited), further additions are dropped and counted rather
/// than panicking or silently growing unbounded.
#[derive(Clone, Debug, Default)]
pub struct Bag {
    items: Vec<Diagnostic>,
    cap: usize,
    dropped: usize,
}

impl Bag {
    pub fn new() -> Self {
        Bag::default()
    }

    /// A bag that drops anything past `cap` diagnostics. `cap == 0` means
    /// unlimited (matches the CLI's `--max-diagnostics 0` convention,
    /// spec.md §6.4).
    pub fn with_cap(cap: usize) -> Self {
        Bag {
            items: Vec::new(),
            cap,
            dropped: 0,
        }
    }

    /// Add a diagnostic. Returns `false` (and increments the dropped
    /// counter) if the soft cap has already been reached.
    pub fn add(&mut self, diagnostic: Diagnostic) -> bool {
        if self.cap != 0 && self.items.len() >= self.cap {
            self.dropped += 1;
            return false;
        }
        self.items.push(diagnostic);
        true
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of diagnostics dropped because the soft cap was reached.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn has_errors(&self) -> bool {
        self.items.iter().any(Diagnostic::is_error)
    }

    pub fn items(&self) -> &[Diagnostic] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Diagnostic> {
        self.items
    }

    /// Stably sort by file, then primary byte offset, then severity, then
    /// code (spec.md §4.3.1). Idempotent: sorting an already-sorted bag is
    /// a no-op (spec.md §8).
    pub fn sort(&mut self) {
        self.items.sort_by(|a, b| {
            a.primary
                .file
                .raw()
                .cmp(&b.primary.file.raw())
                .then(a.primary.start.cmp(&b.primary.start))
                .then(a.severity.cmp(&b.severity))
                .then(a.code.as_str().cmp(b.code.as_str()))
        });
    }

    /// Merge another bag's diagnostics in, respecting this bag's cap.
    /// Used by a driver combining independent translation units
    /// sequentially (spec.md §4.3.1).
    pub fn merge(&mut self, other: Bag) {
        for diagnostic in other.items {
            self.add(diagnostic);
        }
        self.dropped += other.dropped;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::severity::Severity;
    use core_ir::{FileID, Span};

    fn diag(file: u32, start: u32, severity: Severity, code: &'static str) -> Diagnostic {
        Diagnostic::new(severity, code, Span::new(FileID::from_raw(file), start, start + 1), "msg")
    }

    #[test]
    fn soft_cap_drops_and_counts() {
        let mut bag = Bag::with_cap(2);
        assert!(bag.add(diag(1, 0, Severity::Error, "E1")));
        assert!(bag.add(diag(1, 1, Severity::Error, "E2")));
        assert!(!bag.add(diag(1, 2, Severity::Error, "E3")));
        assert_eq!(bag.len(), 2);
        assert_eq!(bag.dropped(), 1);
    }

    #[test]
    fn zero_cap_is_unlimited() {
        let mut bag = Bag::with_cap(0);
        for i in 0..1000 {
            assert!(bag.add(diag(1, i, Severity::Error, "E1")));
        }
        assert_eq!(bag.len(), 1000);
    }

    #[test]
    fn sort_orders_by_file_then_offset_then_severity_then_code() {
        let mut bag = Bag::new();
        bag.add(diag(2, 0, Severity::Error, "A"));
        bag.add(diag(1, 10, Severity::Warning, "B"));
        bag.add(diag(1, 5, Severity::Error, "C"));
        bag.sort();
        let items = bag.items();
        assert_eq!(items[0].code.as_str(), "C");
        assert_eq!(items[1].code.as_str(), "B");
        assert_eq!(items[2].code.as_str(), "A");
    }

    #[test]
    fn sort_is_idempotent() {
        let mut bag = Bag::new();
        bag.add(diag(1, 5, Severity::Error, "C"));
        bag.add(diag(1, 0, Severity::Warning, "B"));
        bag.sort();
        let first: Vec<String> = bag.items().iter().map(|d| d.code.as_str().to_string()).collect();
        bag.sort();
        let second: Vec<String> = bag.items().iter().map(|d| d.code.as_str().to_string()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn has_errors_reflects_severity() {
        let mut bag = Bag::new();
        bag.add(diag(1, 0, Severity::Warning, "W1"));
        assert!(!bag.has_errors());
        bag.add(diag(1, 1, Severity::Error, "E1"));
        assert!(bag.has_errors());
    }
}
