//! Embedded long-form documentation for `--explain CODE` (spec.md §6.4).
//!
//! Unlike a closed `ErrorCode` enum, codes are open strings, so
//! documentation is a flat lookup table rather than per-variant
//! `include_str!` entries.

/// Registry of embedded documentation, keyed by diagnostic code string.
pub struct ErrorDocs;

impl ErrorDocs {
    /// The long-form explanation for `code`, if one has been registered.
    pub fn get(code: &str) -> Option<&'static str> {
        DOCS.iter().find(|(c, _)| *c == code).map(|(_, doc)| *doc)
    }

    pub fn has_docs(code: &str) -> bool {
        DOCS.iter().any(|(c, _)| *c == code)
    }

    pub fn all_codes() -> impl Iterator<Item = &'static str> {
        DOCS.iter().map(|(code, _)| *code)
    }
}

static DOCS: &[(&str, &str)] = &[
    (
        "LEX1001",
        "Unrecognized character\n\n\
         The lexer encountered a byte sequence that does not start any known token.\n\
         Check for stray punctuation, unsupported unicode, or a typo in an operator.",
    ),
    (
        "LEX1002",
        "Unterminated string literal\n\n\
         A string literal was opened with a quote but the line (or file) ended\n\
         before a matching closing quote was found. Close the string, or use an\n\
         escape if the quote character is meant to appear literally.",
    ),
    (
        "PAR2001",
        "Unexpected token\n\n\
         The parser expected one kind of token at this position and found another.\n\
         The message names both the expected and the actual token.",
    ),
    (
        "PAR2002",
        "Unclosed delimiter\n\n\
         A `(`, `[`, or `{` was opened but never closed before the file, or an\n\
         enclosing delimiter, ended.",
    ),
    (
        "SEM3001",
        "Unknown identifier\n\n\
         A name was referenced that is not declared in any visible scope. Check\n\
         for a missing import, a typo, or a declaration that comes later in the\n\
         file when an earlier forward reference was expected.",
    ),
    (
        "DIA9001",
        "Internal diagnostic error\n\n\
         A lazy fix thunk failed to build against the current file set. This\n\
         usually means the span it was constructed against no longer exists.",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_existing_doc() {
        let doc = ErrorDocs::get("LEX1002");
        assert!(doc.is_some());
        assert!(doc.unwrap().contains("Unterminated"));
    }

    #[test]
    fn get_missing_doc_is_none() {
        assert!(ErrorDocs::get("NOPE0000").is_none());
    }

    #[test]
    fn has_docs_reflects_table() {
        assert!(ErrorDocs::has_docs("SEM3001"));
        assert!(!ErrorDocs::has_docs("NOPE0000"));
    }

    #[test]
    fn all_codes_nonempty() {
        assert!(ErrorDocs::all_codes().count() >= 5);
    }
}
