//! Per-file append-only collection of [`Hint`]s.

use crate::hint::Hint;

/// Default capacity hint (spec.md §4.5): most files carry a handful of
/// foreign-looking identifiers at most.
const DEFAULT_CAPACITY_HINT: usize = 16;

/// Accumulates [`Hint`]s for one file. Collection is append-only and pure:
/// it never influences parsing or semantic behavior (spec.md §4.5
/// invariant).
#[derive(Clone, Debug, Default)]
pub struct Evidence {
    hints: Vec<Hint>,
}

impl Evidence {
    pub fn new() -> Self {
        Evidence::with_capacity_hint(DEFAULT_CAPACITY_HINT)
    }

    pub fn with_capacity_hint(capacity: usize) -> Self {
        Evidence { hints: Vec::with_capacity(capacity) }
    }

    pub fn record(&mut self, hint: Hint) {
        self.hints.push(hint);
    }

    pub fn hints(&self) -> &[Hint] {
        &self.hints
    }

    pub fn is_empty(&self) -> bool {
        self.hints.is_empty()
    }

    pub fn len(&self) -> usize {
        self.hints.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::Kind;
    use core_ir::{FileID, Span};

    #[test]
    fn record_appends_in_order() {
        let mut evidence = Evidence::new();
        let file = FileID::from_raw(1);
        evidence.record(Hint::new(Kind::Rust, 6, "rust keyword impl", Span::new(file, 0, 4)));
        evidence.record(Hint::new(Kind::Go, 4, "go keyword func", Span::new(file, 5, 9)));
        assert_eq!(evidence.len(), 2);
        assert_eq!(evidence.hints()[0].dialect, Kind::Rust);
        assert_eq!(evidence.hints()[1].dialect, Kind::Go);
    }
}
