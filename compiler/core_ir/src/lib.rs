//! Arena-backed typed AST for the Surge compiler front-end.
//!
//! Every node family (`File`, `Item`, `Stmt`, `Expr`, `TypeExpr`) is stored
//! in its own arena with stable 1-based indices; `0` always means "none".
//! Per-kind variable-length data lives in sibling payload arenas, reached
//! from a head record of `{kind, span, payload}`.

/// Assert at compile time that a type has an exact size, to catch
/// accidental layout regressions in the small Copy types this crate
/// passes around by value.
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}
pub(crate) use static_assert_size;

mod arena;
pub mod ast;
mod attr;
mod builder;
pub mod fmt;
mod file_set;
mod id;
mod interner;
mod name;
mod span;

pub use arena::Arena;
pub use attr::{AttrCatalog, AttrFlags, AttrInfo, KnownAttr, TargetMask};
pub use builder::{Builder, Hints};
pub use file_set::{FileSet, LineOffsetTable, SourceFile, SourceFiles};
pub use id::{
    AttrID, ContractFieldID, ContractFnID, ContractItemID, EnumVariantID, ExternFieldID,
    ExternMemberID, FileID, FnParamID, ItemID, PayloadID, StmtID, TypeFieldID, TypeID,
    TypeParamBoundID, TypeParamID, TypeUnionMemberID,
};
pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use span::Span;

pub use ast::{
    Expr, ExprKind, File, FnModifiers, Item, ItemKind, Stmt, StmtKind, TypeExpr, TypeExprKind,
    Visibility,
};
