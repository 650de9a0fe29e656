//! Stable, phase-prefixed diagnostic codes.
//!
//! Unlike a closed `enum ErrorCode`, codes here are open strings
//! (`"LEX1002"`, `"SEM3005"`, …): new phases and codes can be added without
//! touching this crate (spec.md §3.6). The phase prefix is the leading run
//! of ASCII letters; grouping/search tooling keys off it.

use std::borrow::Cow;
use std::fmt;

/// A stable diagnostic code, e.g. `LEX1002`.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Code(Cow<'static, str>);

impl Code {
    /// Wrap a `'static` code string with no allocation.
    pub const fn new(code: &'static str) -> Self {
        Code(Cow::Borrowed(code))
    }

    /// Build a code from an owned string (e.g. dynamically composed).
    pub fn owned(code: impl Into<String>) -> Self {
        Code(Cow::Owned(code.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The leading run of ASCII letters, e.g. `"LEX"` for `"LEX1002"`.
    pub fn phase_prefix(&self) -> &str {
        let end = self.0.find(|c: char| !c.is_ascii_alphabetic()).unwrap_or(self.0.len());
        &self.0[..end]
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&'static str> for Code {
    fn from(value: &'static str) -> Self {
        Code::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_prefix_splits_at_first_digit() {
        assert_eq!(Code::new("LEX1002").phase_prefix(), "LEX");
        assert_eq!(Code::new("SEM3005").phase_prefix(), "SEM");
    }

    #[test]
    fn equality_is_by_string_value() {
        assert_eq!(Code::new("LEX1002"), Code::owned("LEX1002".to_string()));
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(Code::new("LEX1002") < Code::new("SEM3005"));
    }
}
