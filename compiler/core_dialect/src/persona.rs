//! Deterministic "alien dialect" persona messages (spec.md §4.5, §6.6).
//!
//! Dialect hints never block compilation — they render as ordinary
//! `Hint`-severity diagnostics carrying a canned, multi-line message
//! assembled from a greeting, a lead-in, a core hint keyed by
//! [`AlienHintKind`], and a closing. Selection within each canned list is
//! `pick`: `options[seed % len]` with `seed = abs(int(kind))`, so the same
//! `(Kind, AlienHintKind)` pair always renders the same way.

use crate::kind::Kind;

/// Which specific piece of advice the persona message centers on.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum AlienHintKind {
    FunctionDeclaration,
    VariableBinding,
    TypeDeclaration,
    ControlFlow,
    General,
}

impl AlienHintKind {
    const fn ordinal(self) -> i64 {
        match self {
            AlienHintKind::FunctionDeclaration => 0,
            AlienHintKind::VariableBinding => 1,
            AlienHintKind::TypeDeclaration => 2,
            AlienHintKind::ControlFlow => 3,
            AlienHintKind::General => 4,
        }
    }
}

/// What [`render_alien_hint`] needs to assemble one message.
#[derive(Copy, Clone, Debug)]
pub struct RenderInput {
    pub hint_kind: AlienHintKind,
    /// A short snippet of valid Surge syntax, shown after the core hint
    /// when available (spec.md §6.6).
    pub example: Option<&'static str>,
}

impl RenderInput {
    pub const fn new(hint_kind: AlienHintKind) -> Self {
        RenderInput { hint_kind, example: None }
    }

    #[must_use]
    pub const fn with_example(mut self, example: &'static str) -> Self {
        self.example = Some(example);
        self
    }
}

/// `options[seed % len(options)]`, `seed = abs(int(kind))` (spec.md §4.5).
/// Deterministic and total: `options` must be non-empty.
pub fn pick<'a, T>(options: &'a [T], kind: AlienHintKind) -> &'a T {
    let seed = kind.ordinal().unsigned_abs() as usize;
    &options[seed % options.len()]
}

const GREETINGS: &[&str] = &["Greetings, traveler.", "Ahoy from beyond the parser.", "A visitor from another syntax tree, I see."];

const LEAD_INS: &[&str] = &[
    "Your fingers remember a different tongue.",
    "This shape looks borrowed from somewhere else.",
    "I recognize this pattern from distant shores.",
];

const CLOSINGS: &[&str] = &["Carry on — this is only a hint, never a wall.", "No harm done; Surge understood you anyway.", "Safe travels through the rest of the file."];

fn core_hint(dialect: Kind, hint_kind: AlienHintKind) -> &'static str {
    match (dialect, hint_kind) {
        (Kind::Rust, AlienHintKind::FunctionDeclaration) => "In Surge, functions are declared `@name (params) -> type = body`, not `fn name(params) -> type { body }`.",
        (Kind::Rust, AlienHintKind::VariableBinding) => "In Surge, `let` still binds a name, but there is no separate `mut` keyword — rebindability is a property of the binding form.",
        (Kind::Rust, AlienHintKind::TypeDeclaration) => "In Surge, record types are written `type Name = { fields }`, not `struct Name { fields }`.",
        (Kind::Rust, AlienHintKind::ControlFlow) => "In Surge, pattern matching uses `match`, same as you're used to — but there is no `impl` block around it.",
        (Kind::Rust, AlienHintKind::General) => "In Surge, ownership is expressed through the arena, not the borrow checker.",
        (Kind::Go, AlienHintKind::FunctionDeclaration) => "In Surge, functions are declared `@name (params) -> type = body`, not `func name(params) type { body }`.",
        (Kind::Go, AlienHintKind::VariableBinding) => "In Surge, `let` is the only binding form — there is no separate `var`.",
        (Kind::Go, AlienHintKind::TypeDeclaration) => "In Surge, record types are written `type Name = { fields }`, not `struct Name { fields }`.",
        (Kind::Go, AlienHintKind::ControlFlow) => "In Surge, there is no bare `for`-as-`while` — use `while` or `loop` directly.",
        (Kind::Go, AlienHintKind::General) => "In Surge, concurrency reads as `task`/`spawn`/`select`, not goroutines and channels.",
        (Kind::TypeScript, AlienHintKind::FunctionDeclaration) => "In Surge, functions are declared `@name (params) -> type = body`, not `function name(params): type { body }`.",
        (Kind::TypeScript, AlienHintKind::VariableBinding) => "In Surge, `let` binds a name directly — there is no `const`/`let`/`var` trio.",
        (Kind::TypeScript, AlienHintKind::TypeDeclaration) => "In Surge, record types use `type Name = { fields }`; there is no separate `interface`.",
        (Kind::TypeScript, AlienHintKind::ControlFlow) => "In Surge, `match` replaces a `switch` over a tagged union.",
        (Kind::TypeScript, AlienHintKind::General) => "In Surge, modules are not exported one symbol at a time — visibility is per-item (`public`/`private`).",
        (Kind::Python, AlienHintKind::FunctionDeclaration) => "In Surge, functions are declared `@name (params) -> type = body`, not `def name(params):`.",
        (Kind::Python, AlienHintKind::VariableBinding) => "In Surge, every binding needs `let` — there is no bare `name = value` at statement level.",
        (Kind::Python, AlienHintKind::TypeDeclaration) => "In Surge, record types are written `type Name = { fields }`, not a `class` body.",
        (Kind::Python, AlienHintKind::ControlFlow) => "In Surge, indentation is not significant — blocks are delimited by `{ }`.",
        (Kind::Python, AlienHintKind::General) => "In Surge, `void` stands in for the absence of a value, not `None`.",
        (Kind::Unknown, _) => "This syntax doesn't match a dialect Surge recognizes by name, but it still isn't Surge.",
    }
}

/// Assemble the fixed-form, multi-line persona message for `dialect`
/// (spec.md §4.5, §6.6). Deterministic for a given `(dialect, input)` pair.
pub fn render_alien_hint(dialect: Kind, input: RenderInput) -> String {
    let greeting = pick(GREETINGS, input.hint_kind);
    let lead_in = pick(LEAD_INS, input.hint_kind);
    let closing = pick(CLOSINGS, input.hint_kind);
    let hint = core_hint(dialect, input.hint_kind);

    let mut message = format!("{greeting} {lead_in}\n{hint}");
    if let Some(example) = input.example {
        message.push_str("\n\n");
        message.push_str(example);
    }
    message.push('\n');
    message.push_str(closing);
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_is_deterministic_for_same_kind() {
        let a = pick(GREETINGS, AlienHintKind::FunctionDeclaration);
        let b = pick(GREETINGS, AlienHintKind::FunctionDeclaration);
        assert_eq!(a, b);
    }

    #[test]
    fn render_includes_greeting_hint_and_closing() {
        let message = render_alien_hint(Kind::Rust, RenderInput::new(AlienHintKind::FunctionDeclaration));
        assert!(message.contains('@'));
        assert!(message.ends_with(CLOSINGS[AlienHintKind::FunctionDeclaration.ordinal().unsigned_abs() as usize % CLOSINGS.len()]));
    }

    #[test]
    fn example_is_embedded_when_provided() {
        let input = RenderInput::new(AlienHintKind::FunctionDeclaration).with_example("@main () -> int = { 0 }");
        let message = render_alien_hint(Kind::Go, input);
        assert!(message.contains("@main () -> int = { 0 }"));
    }
}
