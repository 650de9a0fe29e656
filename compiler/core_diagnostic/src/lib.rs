//! Diagnostic engine: a `Bag` of diagnostics with spans, notes, and fixes
//! (both eager `TextEdit`s and lazy fix thunks), rendered into pretty
//! terminal output, JSON, and SARIF (spec.md §4.3).
//!
//! Rendering the same `Bag` twice against the same `FileSet` must produce
//! byte-identical output (spec.md §4.3.8) — every renderer sorts its
//! input, resolves lazy fixes deterministically, and writes keys in a
//! fixed order.

mod bag;
mod code;
mod diagnostic;
mod docs;
mod emitter;
mod fix;
mod severity;

pub use bag::Bag;
pub use code::Code;
pub use diagnostic::{Diagnostic, Note};
pub use docs::ErrorDocs;
pub use emitter::{render_json, render_pretty, render_sarif, ColorMode, JsonOpts, PathMode, PrettyOpts, SarifRunMeta};
pub use fix::{AttachedFix, Applicability, Fix, FixBuildContext, FixBuildError, FixKind, FixThunk, ResolvedFix, TextEdit};
pub use severity::Severity;
