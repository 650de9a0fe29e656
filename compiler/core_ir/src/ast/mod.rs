//! Tagged-union AST node shapes.
//!
//! Every node family (`Item`, `Stmt`, `Expr`, `TypeExpr`) follows the same
//! pattern: a small head record `{kind, span, payload}` plus a
//! kind-specific payload stored in a sibling arena. A head record's
//! `kind` uniquely determines which payload arena `payload` indexes
//! (invariant I3); the kind-safe getters in [`crate::Builder`] enforce
//! this by returning `None` when the kind doesn't match.

mod expr;
mod item;
mod stmt;
mod type_expr;

pub use expr::*;
pub use item::*;
pub use stmt::*;
pub use type_expr::*;

use bitflags::bitflags;

use crate::id::PayloadID;
use crate::name::Name;
use crate::span::Span;

/// A contiguous `(start, count)` sub-sequence into some payload arena.
///
/// The Builder guarantees (I2) that `start, start+1, ..., start+count-1`
/// were allocated consecutively and are all valid ids in the same arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct IdRange {
    pub start: u32,
    pub count: u32,
}

impl IdRange {
    pub const EMPTY: IdRange = IdRange { start: 0, count: 0 };

    pub const fn new(start: u32, count: u32) -> Self {
        IdRange { start, count }
    }

    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub const fn len(&self) -> usize {
        self.count as usize
    }

    /// 1-based ids covered by this range, in lexical order.
    pub fn ids(&self) -> impl Iterator<Item = u32> {
        self.start..(self.start + self.count)
    }
}

/// `private` (default) or `public`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Visibility {
    #[default]
    Private,
    Public,
}

bitflags! {
    /// Function modifier bitset. More bits may be added; downstream
    /// consumers read them opaquely.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct FnModifiers: u8 {
        const ASYNC  = 0b0000_0001;
        const PUBLIC = 0b0000_0010;
    }
}

/// A whole translation unit. Owns the ordered list of top-level item ids.
#[derive(Clone, Debug)]
pub struct File {
    pub span: Span,
    pub items: IdRange,
    pub pragma: IdRange,
    pub directives: IdRange,
}

impl File {
    pub fn new(span: Span) -> Self {
        File {
            span,
            items: IdRange::EMPTY,
            pragma: IdRange::EMPTY,
            directives: IdRange::EMPTY,
        }
    }
}

/// Tag distinguishing which payload arena an [`Item`]'s `payload` indexes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ItemKind {
    Import,
    Fn,
    ExternFn,
    Let,
    Const,
    TypeAlias,
    TypeStruct,
    TypeUnion,
    TypeEnum,
    Contract,
    Tag,
    Extern,
    Pragma,
    Macro,
}

/// Head record for a top-level (or contract/extern-nested) item.
#[derive(Copy, Clone, Debug)]
pub struct Item {
    pub kind: ItemKind,
    pub span: Span,
    pub payload: PayloadID,
}

/// Tag distinguishing which payload arena a [`Stmt`]'s `payload` indexes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    Block,
    Let,
    Expr,
    Signal,
    Return,
    Break,
    Continue,
    If,
    While,
    ForClassic,
    ForIn,
}

/// Head record for a statement.
#[derive(Copy, Clone, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
    pub payload: PayloadID,
}

/// Tag distinguishing which payload arena an [`Expr`]'s `payload` indexes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    Ident,
    Lit,
    Binary,
    Unary,
    Cast,
    Call,
    Index,
    Member,
    TupleIndex,
    Await,
    Ternary,
    Group,
    Tuple,
    Array,
    Map,
    RangeLit,
    Spread,
    Task,
    Spawn,
    Async,
    ParallelMap,
    ParallelReduce,
    Compare,
    Select,
    Race,
    Struct,
    Block,
}

/// Head record for an expression.
#[derive(Copy, Clone, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
    pub payload: PayloadID,
}

/// Tag distinguishing which payload arena a [`TypeExpr`]'s `payload` indexes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeExprKind {
    Path,
    UnaryOwn,
    UnaryRef,
    UnaryRefMut,
    UnaryPtr,
    ArraySized,
    ArraySlice,
    Tuple,
    Fn,
    Const,
}

/// Head record for a type expression.
#[derive(Copy, Clone, Debug)]
pub struct TypeExpr {
    pub kind: TypeExprKind,
    pub span: Span,
    pub payload: PayloadID,
}

/// A single path segment (e.g. `core` in `core::util`), with an optional
/// generic argument list.
#[derive(Copy, Clone, Debug)]
pub struct PathSegment {
    pub name: Name,
    pub span: Span,
    pub generic_args: IdRange,
}

/// Lossless placement info the Builder records so the tree can be
/// re-rendered faithfully (trailing commas, bracket/keyword spans).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ListTrivia {
    pub trailing_comma: bool,
    pub open_span: Span,
    pub close_span: Span,
}

impl ListTrivia {
    pub const NONE: ListTrivia = ListTrivia {
        trailing_comma: false,
        open_span: Span::DUMMY,
        close_span: Span::DUMMY,
    };
}
