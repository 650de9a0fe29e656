//! The dialect keyword table: a read-only, process-wide map from
//! identifier spelling to the dialect(s) it is evidence for.
//!
//! Grounded on the teacher's `foreign_keywords` lookup (a sorted table,
//! binary-searched, exact-then-lowercased), generalized from one
//! undifferentiated "foreign" bucket into four scored dialects
//! (spec.md §4.5).

use core_ir::Span;

use crate::evidence::Evidence;
use crate::hint::Hint;
use crate::kind::Kind;

/// One row of the keyword table: a spelling, the dialect it signals, a
/// weight, and a human-readable reason carried onto the [`Hint`].
struct Signal {
    keyword: &'static str,
    dialect: Kind,
    score: i32,
    reason: &'static str,
}

/// Sorted by `keyword` (then by declaration order for equal keywords, so
/// a spelling shared by two dialects yields both signals deterministically).
/// [`find_run`] binary-searches this table for `keyword`, then widens
/// across the matching run — equal keys are grouped by the sort, so the
/// run is always contiguous.
static SIGNALS: &[Signal] = &[
    Signal { keyword: "and", dialect: Kind::Python, score: 4, reason: "python keyword `and`" },
    Signal { keyword: "as", dialect: Kind::Rust, score: 3, reason: "rust keyword `as`" },
    Signal { keyword: "async", dialect: Kind::Rust, score: 2, reason: "rust keyword `async`" },
    Signal { keyword: "chan", dialect: Kind::Go, score: 6, reason: "go keyword `chan`" },
    Signal { keyword: "class", dialect: Kind::Python, score: 5, reason: "python keyword `class`" },
    Signal { keyword: "def", dialect: Kind::Python, score: 6, reason: "python keyword `def`" },
    Signal { keyword: "defer", dialect: Kind::Go, score: 6, reason: "go keyword `defer`" },
    Signal { keyword: "elif", dialect: Kind::Python, score: 6, reason: "python keyword `elif`" },
    Signal { keyword: "enum", dialect: Kind::Rust, score: 2, reason: "rust keyword `enum`" },
    Signal { keyword: "enum", dialect: Kind::TypeScript, score: 3, reason: "typescript keyword `enum`" },
    Signal { keyword: "export", dialect: Kind::TypeScript, score: 4, reason: "typescript keyword `export`" },
    Signal { keyword: "fmt", dialect: Kind::Go, score: 3, reason: "go package `fmt`" },
    Signal { keyword: "fn", dialect: Kind::Rust, score: 3, reason: "rust keyword `fn`" },
    Signal { keyword: "func", dialect: Kind::Go, score: 5, reason: "go keyword `func`" },
    Signal { keyword: "impl", dialect: Kind::Rust, score: 6, reason: "rust keyword `impl`" },
    Signal { keyword: "import", dialect: Kind::Python, score: 2, reason: "python keyword `import`" },
    Signal { keyword: "interface", dialect: Kind::Go, score: 4, reason: "go keyword `interface`" },
    Signal { keyword: "interface", dialect: Kind::TypeScript, score: 4, reason: "typescript keyword `interface`" },
    Signal { keyword: "lambda", dialect: Kind::Python, score: 6, reason: "python keyword `lambda`" },
    Signal { keyword: "let", dialect: Kind::TypeScript, score: 2, reason: "typescript keyword `let`" },
    Signal { keyword: "match", dialect: Kind::Rust, score: 2, reason: "rust keyword `match`" },
    Signal { keyword: "mod", dialect: Kind::Rust, score: 4, reason: "rust keyword `mod`" },
    Signal { keyword: "none", dialect: Kind::Python, score: 3, reason: "python literal `None`" },
    Signal { keyword: "package", dialect: Kind::Go, score: 6, reason: "go keyword `package`" },
    Signal { keyword: "pub", dialect: Kind::Rust, score: 5, reason: "rust keyword `pub`" },
    Signal { keyword: "self", dialect: Kind::Python, score: 2, reason: "python parameter `self`" },
    Signal { keyword: "self", dialect: Kind::Rust, score: 2, reason: "rust keyword `self`" },
    Signal { keyword: "struct", dialect: Kind::Go, score: 4, reason: "go keyword `struct`" },
    Signal { keyword: "trait", dialect: Kind::Rust, score: 6, reason: "rust keyword `trait`" },
    Signal { keyword: "unsafe", dialect: Kind::Rust, score: 6, reason: "rust keyword `unsafe`" },
    Signal { keyword: "var", dialect: Kind::Go, score: 3, reason: "go keyword `var`" },
    Signal { keyword: "yield", dialect: Kind::Python, score: 5, reason: "python keyword `yield`" },
];

/// Binary-search `SIGNALS` for `keyword`, then widen left/right across the
/// run of equal keys (several dialects can share one spelling, e.g.
/// `interface`). `binary_search_by_key` only guarantees landing *somewhere*
/// inside that run, not at its first element, so the widening is required
/// — this is the teacher's `lookup_foreign_keyword` technique generalized
/// from a one-dialect-per-keyword table to a many-per-keyword one.
fn find_run(keyword: &str) -> &'static [Signal] {
    let Ok(found) = SIGNALS.binary_search_by_key(&keyword, |s| s.keyword) else {
        return &[];
    };
    let mut start = found;
    while start > 0 && SIGNALS[start - 1].keyword == keyword {
        start -= 1;
    }
    let mut end = found + 1;
    while end < SIGNALS.len() && SIGNALS[end].keyword == keyword {
        end += 1;
    }
    &SIGNALS[start..end]
}

/// Look up every signal `ident` matches, trying the exact spelling first
/// and the lowercased form second (spec.md §4.5). Both are tried even if
/// `ident` is already lowercase — the lowercased lookup is then
/// equivalent to a second exact lookup and never yields extra matches.
fn lookup(ident: &str) -> Vec<&'static Signal> {
    let exact = find_run(ident);
    if !exact.is_empty() {
        return exact.iter().collect();
    }
    let lowered = ident.to_lowercase();
    if lowered != ident {
        find_run(&lowered).iter().collect()
    } else {
        Vec::new()
    }
}

/// The only entry point lexing/parsing should call: record every dialect
/// signal `identifier` carries at `span` into `evidence`.
pub fn record_ident(evidence: &mut Evidence, identifier: &str, span: Span) {
    for signal in lookup(identifier) {
        evidence.record(Hint::new(signal.dialect, signal.score, signal.reason, span));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_ir::FileID;

    #[test]
    fn table_is_sorted_by_keyword() {
        for window in SIGNALS.windows(2) {
            assert!(window[0].keyword <= window[1].keyword, "table not sorted: {} > {}", window[0].keyword, window[1].keyword);
        }
    }

    #[test]
    fn exact_match_wins_over_lowercased() {
        let matches = lookup("impl");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].dialect, Kind::Rust);
    }

    #[test]
    fn lowercased_fallback_matches_mixed_case() {
        let matches = lookup("IMPL");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].dialect, Kind::Rust);
    }

    #[test]
    fn unknown_identifier_has_no_signals() {
        assert!(lookup("frobnicate").is_empty());
    }

    #[test]
    fn shared_spelling_yields_multiple_dialect_signals() {
        let matches = lookup("interface");
        assert_eq!(matches.len(), 2);
    }

    #[test]
    fn find_run_widens_to_the_full_equal_key_run_regardless_of_binary_search_landing_point() {
        let run = find_run("enum");
        assert_eq!(run.len(), 2);
        let dialects: Vec<Kind> = run.iter().map(|s| s.dialect).collect();
        assert!(dialects.contains(&Kind::Rust));
        assert!(dialects.contains(&Kind::TypeScript));
    }

    #[test]
    fn find_run_on_unknown_keyword_is_empty() {
        assert!(find_run("frobnicate").is_empty());
    }

    #[test]
    fn record_ident_is_the_only_entry_point() {
        let mut evidence = Evidence::new();
        record_ident(&mut evidence, "impl", Span::new(FileID::from_raw(1), 0, 4));
        assert_eq!(evidence.len(), 1);
        assert_eq!(evidence.hints()[0].score, 6);
    }
}
