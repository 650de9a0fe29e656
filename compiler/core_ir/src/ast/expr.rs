//! Payload shapes for [`super::ExprKind`] variants.
//!
//! All children are referenced by id, never boxed, matching the arena's
//! "references are indices, not pointers" discipline (spec.md §2).

use crate::id::{ExprID, TypeID};
use crate::name::Name;
use crate::span::Span;

use super::IdRange;

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    And,
    Or,
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,
    Coalesce,
}

impl BinaryOp {
    /// Source-level symbol, for error messages and round-trip formatting.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::And => "&&",
            Self::Or => "||",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::BitXor => "^",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::Coalesce => "??",
        }
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    Neg,
    Not,
    BitNot,
}

/// Comparison-chain operators used by [`ExprKind::Compare`] (e.g. `a < b <= c`).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CompareOp {
    Lt,
    LtEq,
    Gt,
    GtEq,
    Eq,
    NotEq,
}

/// Literal value kinds. Numeric literals keep their source text in `raw`
/// so re-rendering never loses precision or formatting (`1_000` vs `1000`).
#[derive(Clone, Debug)]
pub enum LitValue {
    Int { raw: Name },
    Float { raw: Name },
    Bool(bool),
    Str(Name),
    Char(char),
}

/// `ExprKind::Ident`
#[derive(Copy, Clone, Debug)]
pub struct IdentExpr {
    pub name: Name,
}

/// `ExprKind::Lit`
#[derive(Clone, Debug)]
pub struct LitExpr {
    pub value: LitValue,
}

/// `ExprKind::Binary`
#[derive(Copy, Clone, Debug)]
pub struct BinaryExpr {
    pub op: BinaryOp,
    pub op_span: Span,
    pub left: ExprID,
    pub right: ExprID,
}

/// `ExprKind::Unary`
#[derive(Copy, Clone, Debug)]
pub struct UnaryExpr {
    pub op: UnaryOp,
    pub op_span: Span,
    pub operand: ExprID,
}

/// `ExprKind::Cast`
#[derive(Copy, Clone, Debug)]
pub struct CastExpr {
    pub expr: ExprID,
    pub ty: TypeID,
    pub as_span: Span,
}

/// One call argument, optionally named (`f(x: 1)`).
#[derive(Copy, Clone, Debug)]
pub struct CallArg {
    pub name: Name,
    pub value: ExprID,
    pub span: Span,
}

/// `ExprKind::Call`
#[derive(Copy, Clone, Debug)]
pub struct CallExpr {
    pub callee: ExprID,
    pub args: IdRange,
    pub args_trivia: super::ListTrivia,
}

/// `ExprKind::Index`
#[derive(Copy, Clone, Debug)]
pub struct IndexExpr {
    pub receiver: ExprID,
    pub index: ExprID,
}

/// `ExprKind::Member` (`receiver.field`)
#[derive(Copy, Clone, Debug)]
pub struct MemberExpr {
    pub receiver: ExprID,
    pub member: Name,
    pub member_span: Span,
}

/// `ExprKind::TupleIndex` (`receiver.0`)
#[derive(Copy, Clone, Debug)]
pub struct TupleIndexExpr {
    pub receiver: ExprID,
    pub index: u32,
    pub index_span: Span,
}

/// `ExprKind::Await`
#[derive(Copy, Clone, Debug)]
pub struct AwaitExpr {
    pub operand: ExprID,
}

/// `ExprKind::Ternary` (`cond ? then : else`)
#[derive(Copy, Clone, Debug)]
pub struct TernaryExpr {
    pub cond: ExprID,
    pub then_branch: ExprID,
    pub else_branch: ExprID,
}

/// `ExprKind::Group` (parenthesized expression, preserved losslessly so
/// formatting can tell `(a + b) * c` apart from `a + b * c`).
#[derive(Copy, Clone, Debug)]
pub struct GroupExpr {
    pub inner: ExprID,
    pub open_span: Span,
    pub close_span: Span,
}

/// `ExprKind::Tuple`
#[derive(Copy, Clone, Debug)]
pub struct TupleExpr {
    pub elements: IdRange,
    pub trivia: super::ListTrivia,
}

/// `ExprKind::Array`
#[derive(Copy, Clone, Debug)]
pub struct ArrayExpr {
    pub elements: IdRange,
    pub trivia: super::ListTrivia,
}

/// One `key: value` entry of a map literal.
#[derive(Copy, Clone, Debug)]
pub struct MapEntry {
    pub key: ExprID,
    pub value: ExprID,
    pub span: Span,
}

/// `ExprKind::Map`
#[derive(Copy, Clone, Debug)]
pub struct MapExpr {
    pub entries: IdRange,
    pub trivia: super::ListTrivia,
}

/// `ExprKind::RangeLit` (`start..end`, `start..=end`)
#[derive(Copy, Clone, Debug)]
pub struct RangeLitExpr {
    pub start: ExprID,
    pub end: ExprID,
    pub inclusive: bool,
}

/// `ExprKind::Spread` (`...expr`, used inside array/map/struct literals)
#[derive(Copy, Clone, Debug)]
pub struct SpreadExpr {
    pub inner: ExprID,
    pub dots_span: Span,
}

/// `ExprKind::Task` (`task { body }`, a deferred unit of work)
#[derive(Copy, Clone, Debug)]
pub struct TaskExpr {
    pub body: ExprID,
}

/// `ExprKind::Spawn` (`spawn expr`, fire-and-forget concurrency)
#[derive(Copy, Clone, Debug)]
pub struct SpawnExpr {
    pub body: ExprID,
}

/// `ExprKind::Async` (`async { body }`)
#[derive(Copy, Clone, Debug)]
pub struct AsyncExpr {
    pub body: ExprID,
}

/// `ExprKind::ParallelMap` (`parallel map(items) |x| body`)
#[derive(Copy, Clone, Debug)]
pub struct ParallelMapExpr {
    pub source: ExprID,
    pub binding: Name,
    pub body: ExprID,
}

/// `ExprKind::ParallelReduce` (`parallel reduce(items, init) |acc, x| body`)
#[derive(Copy, Clone, Debug)]
pub struct ParallelReduceExpr {
    pub source: ExprID,
    pub init: ExprID,
    pub acc_binding: Name,
    pub item_binding: Name,
    pub body: ExprID,
}

/// `ExprKind::Compare` (chained comparisons: `a < b <= c`)
#[derive(Copy, Clone, Debug)]
pub struct CompareLink {
    pub op: CompareOp,
    pub rhs: ExprID,
    pub op_span: Span,
}

#[derive(Clone, Debug)]
pub struct CompareExpr {
    pub first: ExprID,
    pub links: Vec<CompareLink>,
}

/// One arm of a `select`/`race` expression: a channel/task expression
/// paired with the body to run when it fires.
#[derive(Copy, Clone, Debug)]
pub struct ConcurrentArm {
    pub source: ExprID,
    pub binding: Name,
    pub body: ExprID,
    pub span: Span,
}

/// `ExprKind::Select` (first-ready-wins over labelled arms)
#[derive(Copy, Clone, Debug)]
pub struct SelectExpr {
    pub arms: IdRange,
}

/// `ExprKind::Race` (first-to-complete among concurrent tasks)
#[derive(Copy, Clone, Debug)]
pub struct RaceExpr {
    pub arms: IdRange,
}

/// One `field: value` initializer in a struct literal.
#[derive(Copy, Clone, Debug)]
pub struct FieldInit {
    pub name: Name,
    pub value: ExprID,
    pub span: Span,
}

/// `ExprKind::Struct` (`Point { x: 0, y: 0 }`)
#[derive(Copy, Clone, Debug)]
pub struct StructExpr {
    pub type_name: Name,
    pub fields: IdRange,
    pub trivia: super::ListTrivia,
}

/// `ExprKind::Block` (an expression-position block: `{ stmts...; tail }`)
#[derive(Copy, Clone, Debug)]
pub struct BlockExpr {
    pub stmts: IdRange,
    /// `ExprID::NONE` if the block has no trailing tail expression.
    pub tail: ExprID,
}
