//! Pure classification of collected [`Evidence`] into a dominant dialect
//! (spec.md §4.5).

use std::collections::HashMap;

use crate::evidence::Evidence;
use crate::kind::Kind;

/// The result of scoring one file's [`Evidence`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Classification {
    pub kind: Kind,
    pub score: i32,
    pub total_score: i32,
    /// `score / total_score`, or `0.0` when there is no positive-scoring
    /// evidence at all.
    pub confidence: f64,
    pub runner_up: Kind,
    pub runner_up_score: i32,
    /// Count of hints that contributed to scoring (positive score, known
    /// dialect) — informational, not part of the winner computation.
    pub observed_signals: usize,
}

/// Stateless scorer: classification is a pure function of the positive-
/// scoring hints in an [`Evidence`] (spec.md §4.5 invariant, §8 purity
/// property).
#[derive(Default)]
pub struct Classifier;

impl Classifier {
    pub fn new() -> Self {
        Classifier
    }

    pub fn classify(&self, evidence: &Evidence) -> Classification {
        let mut totals: HashMap<Kind, i32> = HashMap::new();
        let mut observed_signals = 0usize;

        for hint in evidence.hints() {
            if hint.score <= 0 || hint.dialect == Kind::Unknown {
                continue;
            }
            *totals.entry(hint.dialect).or_insert(0) += hint.score;
            observed_signals += 1;
        }

        let total_score: i32 = totals.values().sum();

        // Rank by (score desc, declaration-order asc) so ties resolve to
        // the earlier enumerator deterministically (spec.md §9).
        let mut ranked: Vec<(Kind, i32)> = totals.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.ordinal().cmp(&b.0.ordinal())));

        let (kind, score) = ranked.first().copied().unwrap_or((Kind::Unknown, 0));
        let (runner_up, runner_up_score) = ranked.get(1).copied().unwrap_or((Kind::Unknown, 0));

        let confidence = if total_score > 0 {
            f64::from(score) / f64::from(total_score)
        } else {
            0.0
        };

        Classification {
            kind,
            score,
            total_score,
            confidence,
            runner_up,
            runner_up_score,
            observed_signals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hint::Hint;
    use core_ir::{FileID, Span};

    fn f() -> FileID {
        FileID::from_raw(1)
    }

    #[test]
    fn no_hints_yields_unknown() {
        let evidence = Evidence::new();
        let classification = Classifier::new().classify(&evidence);
        assert_eq!(classification.kind, Kind::Unknown);
        assert_eq!(classification.confidence, 0.0);
    }

    #[test]
    fn single_dialect_hint_is_fully_confident() {
        let mut evidence = Evidence::new();
        evidence.record(Hint::new(Kind::Rust, 6, "rust keyword impl", Span::new(f(), 0, 4)));
        let classification = Classifier::new().classify(&evidence);
        assert_eq!(classification.kind, Kind::Rust);
        assert_eq!(classification.score, 6);
        assert_eq!(classification.confidence, 1.0);
        assert_eq!(classification.runner_up, Kind::Unknown);
    }

    #[test]
    fn highest_summed_score_wins() {
        let mut evidence = Evidence::new();
        evidence.record(Hint::new(Kind::Rust, 3, "r1", Span::new(f(), 0, 1)));
        evidence.record(Hint::new(Kind::Go, 10, "g1", Span::new(f(), 1, 2)));
        evidence.record(Hint::new(Kind::Rust, 3, "r2", Span::new(f(), 2, 3)));
        let classification = Classifier::new().classify(&evidence);
        assert_eq!(classification.kind, Kind::Go);
        assert_eq!(classification.score, 10);
        assert_eq!(classification.runner_up, Kind::Rust);
        assert_eq!(classification.runner_up_score, 6);
    }

    #[test]
    fn ties_prefer_earlier_enumerator() {
        let mut evidence = Evidence::new();
        evidence.record(Hint::new(Kind::Python, 5, "p", Span::new(f(), 0, 1)));
        evidence.record(Hint::new(Kind::Rust, 5, "r", Span::new(f(), 1, 2)));
        let classification = Classifier::new().classify(&evidence);
        assert_eq!(classification.kind, Kind::Rust);
    }

    #[test]
    fn non_positive_score_hints_are_ignored() {
        let mut evidence = Evidence::new();
        evidence.record(Hint::new(Kind::Rust, 6, "r", Span::new(f(), 0, 1)));
        evidence.record(Hint::new(Kind::Go, 0, "zero", Span::new(f(), 1, 2)));
        evidence.record(Hint::new(Kind::Python, -4, "negative", Span::new(f(), 2, 3)));
        let with_noise = Classifier::new().classify(&evidence);

        let mut clean = Evidence::new();
        clean.record(Hint::new(Kind::Rust, 6, "r", Span::new(f(), 0, 1)));
        let without_noise = Classifier::new().classify(&clean);

        assert_eq!(with_noise.kind, without_noise.kind);
        assert_eq!(with_noise.score, without_noise.score);
        assert_eq!(with_noise.total_score, without_noise.total_score);
    }

    #[test]
    fn unknown_dialect_hint_is_ignored() {
        let mut evidence = Evidence::new();
        evidence.record(Hint::new(Kind::Rust, 6, "r", Span::new(f(), 0, 1)));
        evidence.record(Hint::new(Kind::Unknown, 9, "noise", Span::new(f(), 1, 2)));
        let classification = Classifier::new().classify(&evidence);
        assert_eq!(classification.kind, Kind::Rust);
        assert_eq!(classification.total_score, 6);
    }
}
