//! Payload shapes for [`super::ItemKind`] variants.

use crate::id::{ContractFieldID, ContractFnID, ExternFieldID, ItemID, StmtID, TypeID};
use crate::name::Name;
use crate::span::Span;

use super::{FnModifiers, IdRange, ListTrivia, PathSegment, Visibility};

/// `import core::util;`
#[derive(Clone, Debug)]
pub struct ImportItem {
    pub path: Vec<PathSegment>,
    pub alias: Option<Name>,
    pub attrs: IdRange,
}

/// One function parameter.
#[derive(Copy, Clone, Debug)]
pub struct FnParam {
    pub name: Name,
    pub ty: TypeID,
    pub default: crate::id::ExprID,
    pub span: Span,
}

/// `fn name(params) -> ret { body }`
#[derive(Clone, Debug)]
pub struct FnItem {
    pub name: Name,
    pub name_span: Span,
    pub generics: IdRange,
    pub params: IdRange,
    pub params_trivia: ListTrivia,
    pub ret: TypeID,
    pub body: StmtID,
    pub modifiers: FnModifiers,
    pub visibility: Visibility,
    pub attrs: IdRange,
}

/// `fn name(params) -> ret;` inside an `extern` block.
#[derive(Clone, Debug)]
pub struct ExternFnItem {
    pub name: Name,
    pub name_span: Span,
    pub params: IdRange,
    pub ret: TypeID,
    pub attrs: IdRange,
}

/// Top-level `let name: ty = init;`
#[derive(Clone, Debug)]
pub struct LetItem {
    pub name: Name,
    pub ty: TypeID,
    pub init: crate::id::ExprID,
    pub visibility: Visibility,
    pub attrs: IdRange,
}

/// Top-level `const name: ty = init;`
#[derive(Clone, Debug)]
pub struct ConstItem {
    pub name: Name,
    pub ty: TypeID,
    pub init: crate::id::ExprID,
    pub visibility: Visibility,
    pub attrs: IdRange,
}

/// `type Name = OtherType;`
#[derive(Clone, Debug)]
pub struct TypeAliasItem {
    pub name: Name,
    pub generics: IdRange,
    pub target: TypeID,
    pub visibility: Visibility,
}

/// One `struct` field.
#[derive(Copy, Clone, Debug)]
pub struct TypeField {
    pub name: Name,
    pub ty: TypeID,
    pub span: Span,
    pub visibility: Visibility,
}

/// `type Name = { fields }`
#[derive(Clone, Debug)]
pub struct TypeStructItem {
    pub name: Name,
    pub generics: IdRange,
    pub fields: IdRange,
    pub fields_trivia: ListTrivia,
    pub visibility: Visibility,
}

/// One member of a tagged union.
#[derive(Copy, Clone, Debug)]
pub struct TypeUnionMember {
    pub name: Name,
    pub payload: TypeID,
    pub span: Span,
}

/// `type Name = A | B | C;`
#[derive(Clone, Debug)]
pub struct TypeUnionItem {
    pub name: Name,
    pub generics: IdRange,
    pub members: IdRange,
    pub visibility: Visibility,
}

/// One enum variant (optionally with an explicit discriminant).
#[derive(Copy, Clone, Debug)]
pub struct EnumVariant {
    pub name: Name,
    pub discriminant: crate::id::ExprID,
    pub span: Span,
}

/// `type Name = enum { A, B, C }`
#[derive(Clone, Debug)]
pub struct TypeEnumItem {
    pub name: Name,
    pub variants: IdRange,
    pub visibility: Visibility,
}

/// A type-parameter bound (e.g. `T: Ordered`).
#[derive(Copy, Clone, Debug)]
pub struct TypeParamBound {
    pub trait_ref: TypeID,
    pub span: Span,
}

/// One generic type parameter with its bounds.
#[derive(Copy, Clone, Debug)]
pub struct TypeParam {
    pub name: Name,
    pub bounds: IdRange,
    pub span: Span,
}

/// One contract field (an associated constant/type requirement).
#[derive(Copy, Clone, Debug)]
pub struct ContractField {
    pub name: Name,
    pub ty: TypeID,
    pub span: Span,
}

/// One contract function signature requirement.
#[derive(Clone, Debug)]
pub struct ContractFn {
    pub name: Name,
    pub params: IdRange,
    pub ret: TypeID,
    pub span: Span,
}

/// A nested contract-item entry: either a field or a function requirement.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ContractItemKind {
    Field(ContractFieldID),
    Fn(ContractFnID),
}

/// One item inside a `contract` block.
#[derive(Copy, Clone, Debug)]
pub struct ContractItem {
    pub kind: ContractItemKind,
    pub span: Span,
}

/// `contract Name { ... }`
#[derive(Clone, Debug)]
pub struct ContractItemDecl {
    pub name: Name,
    pub items: IdRange,
    pub visibility: Visibility,
}

/// One field requirement inside an `extern` block.
#[derive(Copy, Clone, Debug)]
pub struct ExternField {
    pub name: Name,
    pub ty: TypeID,
    pub span: Span,
}

/// A nested extern-member entry: either a field or a function declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExternMemberKind {
    Field(ExternFieldID),
    Fn(ItemID),
}

/// One member inside an `extern` block.
#[derive(Copy, Clone, Debug)]
pub struct ExternMember {
    pub kind: ExternMemberKind,
    pub span: Span,
}

/// `extern "abi" { ... }`
#[derive(Clone, Debug)]
pub struct ExternItem {
    pub abi: Name,
    pub members: IdRange,
}

/// `@name(args)` or a bare `#pragma name`.
#[derive(Clone, Debug)]
pub struct PragmaItem {
    pub name: Name,
    pub args: IdRange,
}

/// A declarative `tag` marker item (e.g. `tag Deprecated;`).
#[derive(Clone, Debug)]
pub struct TagItem {
    pub name: Name,
    pub visibility: Visibility,
}

/// A macro definition item.
#[derive(Clone, Debug)]
pub struct MacroItem {
    pub name: Name,
    pub body: StmtID,
}

/// One attribute, e.g. `@override`.
#[derive(Clone, Debug)]
pub struct Attr {
    pub name: Name,
    pub args: IdRange,
    pub span: Span,
}
