//! Payload shapes for [`super::StmtKind`] variants.

use crate::id::{ExprID, StmtID, TypeID};
use crate::name::Name;
use crate::span::Span;

use super::{IdRange, Visibility};

/// `StmtKind::Block` (`{ ...stmts }` used in statement position, e.g. a fn body)
#[derive(Copy, Clone, Debug)]
pub struct BlockStmt {
    pub stmts: IdRange,
}

/// `StmtKind::Let`
#[derive(Copy, Clone, Debug)]
pub struct LetStmt {
    pub name: Name,
    pub ty: TypeID,
    pub init: ExprID,
    pub mutable: bool,
    pub visibility: Visibility,
}

/// `StmtKind::Expr`
#[derive(Copy, Clone, Debug)]
pub struct ExprStmt {
    pub expr: ExprID,
}

/// `StmtKind::Signal` (`signal name = init;`, a reactive binding)
#[derive(Copy, Clone, Debug)]
pub struct SignalStmt {
    pub name: Name,
    pub ty: TypeID,
    pub init: ExprID,
}

/// `StmtKind::Return`
#[derive(Copy, Clone, Debug)]
pub struct ReturnStmt {
    pub value: ExprID,
    pub keyword_span: Span,
}

/// `StmtKind::Break`
#[derive(Copy, Clone, Debug)]
pub struct BreakStmt {
    pub label: Name,
    pub value: ExprID,
}

/// `StmtKind::Continue`
#[derive(Copy, Clone, Debug)]
pub struct ContinueStmt {
    pub label: Name,
}

/// `StmtKind::If`
#[derive(Copy, Clone, Debug)]
pub struct IfStmt {
    pub cond: ExprID,
    pub then_branch: StmtID,
    /// `StmtID::NONE` if there is no `else`.
    pub else_branch: StmtID,
}

/// `StmtKind::While`
#[derive(Copy, Clone, Debug)]
pub struct WhileStmt {
    pub label: Name,
    pub cond: ExprID,
    pub body: StmtID,
}

/// `StmtKind::ForClassic` (`for (init; cond; step) body`)
#[derive(Copy, Clone, Debug)]
pub struct ForClassicStmt {
    pub label: Name,
    /// `StmtID::NONE` if there is no initializer.
    pub init: StmtID,
    /// `ExprID::NONE` if there is no condition (infinite loop).
    pub cond: ExprID,
    /// `ExprID::NONE` if there is no step expression.
    pub step: ExprID,
    pub body: StmtID,
}

/// `StmtKind::ForIn` (`for binding in iter body`)
#[derive(Copy, Clone, Debug)]
pub struct ForInStmt {
    pub label: Name,
    pub binding: Name,
    pub iter: ExprID,
    pub body: StmtID,
}
