//! Cooperative cancellation (spec.md §5).
//!
//! The driver passes one token into every phase of a translation unit's
//! compilation. Between phases the driver checks it; within a phase,
//! long-running loops poll it at coarse granularity (one check per
//! top-level item is acceptable). There is no thread-interrupt style
//! cancellation anywhere in this workspace.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A cheaply `Clone`-able, shareable cancellation flag.
#[derive(Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        CancellationToken::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Error returned when a cooperative check finds the token cancelled.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Cancelled;

impl std::fmt::Display for Cancelled {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "compilation cancelled")
    }
}

impl std::error::Error for Cancelled {}

impl CancellationToken {
    /// Cooperative checkpoint: call between phases, or once per
    /// top-level item inside a long-running loop.
    pub fn checkpoint(&self) -> Result<(), Cancelled> {
        if self.is_cancelled() {
            Err(Cancelled)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_token_is_not_cancelled() {
        let token = CancellationToken::new();
        assert!(!token.is_cancelled());
        assert!(token.checkpoint().is_ok());
    }

    #[test]
    fn cancel_is_observed_by_clones() {
        let token = CancellationToken::new();
        let clone = token.clone();
        token.cancel();
        assert!(clone.is_cancelled());
        assert!(clone.checkpoint().is_err());
    }

    #[test]
    fn cancel_is_idempotent() {
        let token = CancellationToken::new();
        token.cancel();
        token.cancel();
        assert!(token.is_cancelled());
    }
}
