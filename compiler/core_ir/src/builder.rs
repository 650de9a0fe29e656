//! The `Builder`: wires every node family and payload arena together.
//!
//! Every `new_*` constructor allocates the payload into its kind-specific
//! arena, then allocates a head record whose `kind`/`payload` pair agrees
//! (invariant I3). Sub-sequence constructors (`new_fn_params`, `new_attrs`,
//! …) iterate their input in lexical order and return the `(start, count)`
//! range the first and last allocated ids span (invariant I2) — contiguity
//! holds because nothing else can interleave an allocation into the same
//! payload arena between the first and last push of one call.

use crate::arena::Arena;
use crate::ast::*;
use crate::attr::AttrCatalog;
use crate::id::{
    AttrID, ContractFieldID, ContractFnID, ContractItemID, EnumVariantID, ExternFieldID,
    ExternMemberID, FileID, FnParamID, ItemID, PayloadID, StmtID, TypeFieldID, TypeID,
    TypeParamBoundID, TypeParamID, TypeUnionMemberID,
};
use crate::interner::StringInterner;
use crate::name::Name;
use crate::span::Span;
use crate::ExprID;

/// Per-arena capacity hints. `0` fills in a sensible default.
#[derive(Copy, Clone, Debug, Default)]
pub struct Hints {
    pub files: usize,
    pub items: usize,
    pub stmts: usize,
    pub exprs: usize,
    pub types: usize,
}

impl Hints {
    fn resolved(self) -> Hints {
        Hints {
            files: if self.files == 0 { 64 } else { self.files },
            items: if self.items == 0 { 128 } else { self.items },
            stmts: if self.stmts == 0 { 256 } else { self.stmts },
            exprs: if self.exprs == 0 { 256 } else { self.exprs },
            types: if self.types == 0 { 128 } else { self.types },
        }
    }
}

/// Allocate `payload` into `payload_arena`, then allocate a head record
/// built from the resulting [`PayloadID`] into `head_arena`. Atomic from
/// any external observer's perspective: nothing can observe a head whose
/// payload doesn't exist yet.
fn alloc_node<Head, Payload>(
    head_arena: &mut Arena<Head>,
    payload_arena: &mut Arena<Payload>,
    payload: Payload,
    make_head: impl FnOnce(PayloadID) -> Head,
) -> u32 {
    let payload_id = payload_arena.allocate(payload);
    head_arena.allocate(make_head(PayloadID::from_raw(payload_id)))
}

/// Push every item of `items` into `arena` in order, returning the
/// contiguous `(start, count)` range spanning them (I2). Pushing zero
/// items returns [`IdRange::EMPTY`].
fn alloc_range<T>(arena: &mut Arena<T>, items: impl IntoIterator<Item = T>) -> IdRange {
    let start = arena.len() + 1;
    let mut count = 0u32;
    for item in items {
        arena.allocate(item);
        count += 1;
    }
    if count == 0 {
        IdRange::EMPTY
    } else {
        IdRange::new(start, count)
    }
}

macro_rules! item_getter {
    ($fn_name:ident, $kind:path, $arena:ident, $payload_ty:ty) => {
        pub fn $fn_name(&self, id: ItemID) -> Option<&$payload_ty> {
            let item = self.items.get(id.raw())?;
            if item.kind != $kind {
                return None;
            }
            self.$arena.get(item.payload.raw())
        }
    };
}

macro_rules! stmt_getter {
    ($fn_name:ident, $kind:path, $arena:ident, $payload_ty:ty) => {
        pub fn $fn_name(&self, id: StmtID) -> Option<&$payload_ty> {
            let stmt = self.stmts.get(id.raw())?;
            if stmt.kind != $kind {
                return None;
            }
            self.$arena.get(stmt.payload.raw())
        }
    };
}

macro_rules! expr_getter {
    ($fn_name:ident, $kind:path, $arena:ident, $payload_ty:ty) => {
        pub fn $fn_name(&self, id: ExprID) -> Option<&$payload_ty> {
            let expr = self.exprs.get(id.raw())?;
            if expr.kind != $kind {
                return None;
            }
            self.$arena.get(expr.payload.raw())
        }
    };
}

macro_rules! type_getter {
    ($fn_name:ident, $kind:path, $arena:ident, $payload_ty:ty) => {
        pub fn $fn_name(&self, id: TypeID) -> Option<&$payload_ty> {
            let ty = self.types.get(id.raw())?;
            if ty.kind != $kind {
                return None;
            }
            self.$arena.get(ty.payload.raw())
        }
    };
}

/// Owns every arena for one translation unit, plus the shared string
/// interner. Dropped as a unit when compilation of that unit completes
/// (spec.md §3.5).
#[derive(Default)]
pub struct Builder {
    pub interner: StringInterner,
    attr_catalog: AttrCatalog,

    files: Arena<File>,
    items: Arena<Item>,
    stmts: Arena<Stmt>,
    exprs: Arena<Expr>,
    types: Arena<TypeExpr>,

    // Flattened id lists backing positional element sequences (tuple/array
    // elements, generic arguments): contiguous because nothing but the
    // owning constructor call touches these arenas mid-push.
    expr_id_list: Arena<ExprID>,
    type_id_list: Arena<TypeID>,

    attrs: Arena<Attr>,

    imports: Arena<ImportItem>,
    fn_params: Arena<FnParam>,
    fn_items: Arena<FnItem>,
    extern_fns: Arena<ExternFnItem>,
    lets: Arena<LetItem>,
    consts: Arena<ConstItem>,
    type_aliases: Arena<TypeAliasItem>,
    type_fields: Arena<TypeField>,
    type_structs: Arena<TypeStructItem>,
    type_union_members: Arena<TypeUnionMember>,
    type_unions: Arena<TypeUnionItem>,
    enum_variants: Arena<EnumVariant>,
    type_enums: Arena<TypeEnumItem>,
    type_params: Arena<TypeParam>,
    type_param_bounds: Arena<TypeParamBound>,
    contract_fields: Arena<ContractField>,
    contract_fns: Arena<ContractFn>,
    contract_items: Arena<ContractItem>,
    contracts: Arena<ContractItemDecl>,
    extern_fields: Arena<ExternField>,
    extern_members: Arena<ExternMember>,
    externs: Arena<ExternItem>,
    pragmas: Arena<PragmaItem>,
    tags: Arena<TagItem>,
    macros: Arena<MacroItem>,

    block_stmts: Arena<BlockStmt>,
    let_stmts: Arena<LetStmt>,
    expr_stmts: Arena<ExprStmt>,
    signal_stmts: Arena<SignalStmt>,
    return_stmts: Arena<ReturnStmt>,
    break_stmts: Arena<BreakStmt>,
    continue_stmts: Arena<ContinueStmt>,
    if_stmts: Arena<IfStmt>,
    while_stmts: Arena<WhileStmt>,
    for_classic_stmts: Arena<ForClassicStmt>,
    for_in_stmts: Arena<ForInStmt>,

    idents: Arena<IdentExpr>,
    lits: Arena<LitExpr>,
    binaries: Arena<BinaryExpr>,
    unaries: Arena<UnaryExpr>,
    casts: Arena<CastExpr>,
    call_args: Arena<CallArg>,
    calls: Arena<CallExpr>,
    indices: Arena<IndexExpr>,
    members: Arena<MemberExpr>,
    tuple_indices: Arena<TupleIndexExpr>,
    awaits: Arena<AwaitExpr>,
    ternaries: Arena<TernaryExpr>,
    groups: Arena<GroupExpr>,
    tuples: Arena<TupleExpr>,
    arrays: Arena<ArrayExpr>,
    map_entries: Arena<MapEntry>,
    maps: Arena<MapExpr>,
    range_lits: Arena<RangeLitExpr>,
    spreads: Arena<SpreadExpr>,
    tasks: Arena<TaskExpr>,
    spawns: Arena<SpawnExpr>,
    asyncs: Arena<AsyncExpr>,
    parallel_maps: Arena<ParallelMapExpr>,
    parallel_reduces: Arena<ParallelReduceExpr>,
    compares: Arena<CompareExpr>,
    concurrent_arms: Arena<ConcurrentArm>,
    selects: Arena<SelectExpr>,
    races: Arena<RaceExpr>,
    field_inits: Arena<FieldInit>,
    structs: Arena<StructExpr>,
    blocks: Arena<BlockExpr>,

    path_types: Arena<PathType>,
    unary_types: Arena<UnaryType>,
    array_sized_types: Arena<ArraySizedType>,
    array_slice_types: Arena<ArraySliceType>,
    tuple_types: Arena<TupleType>,
    fn_types: Arena<FnType>,
    const_types: Arena<ConstType>,
}

impl Builder {
    pub fn new(hints: Hints) -> Self {
        let hints = hints.resolved();
        Builder {
            files: Arena::new(hints.files),
            items: Arena::new(hints.items),
            stmts: Arena::new(hints.stmts),
            exprs: Arena::new(hints.exprs),
            types: Arena::new(hints.types),
            ..Default::default()
        }
    }

    pub fn intern(&self, s: &str) -> Name {
        self.interner.intern(s)
    }

    pub fn resolve(&self, name: Name) -> &str {
        self.interner.resolve(name)
    }

    pub fn attr_catalog(&self) -> &AttrCatalog {
        &self.attr_catalog
    }

    // ---- Files -----------------------------------------------------

    pub fn new_file(&mut self, span: Span) -> FileID {
        FileID::from_raw(self.files.allocate(File::new(span)))
    }

    pub fn file(&self, id: FileID) -> Option<&File> {
        self.files.get(id.raw())
    }

    /// Finalize the ordered item list for `file`, once every item has been
    /// allocated through [`Self::push_item`].
    #[track_caller]
    pub fn set_file_items(&mut self, file: FileID, items: IdRange) {
        let Some(slot) = self.files.get_mut(file.raw()) else {
            panic!("set_file_items: invalid FileID {}", file.raw());
        };
        slot.items = items;
    }

    #[track_caller]
    pub fn set_file_pragma(&mut self, file: FileID, pragma: IdRange) {
        let Some(slot) = self.files.get_mut(file.raw()) else {
            panic!("set_file_pragma: invalid FileID {}", file.raw());
        };
        slot.pragma = pragma;
    }

    #[track_caller]
    pub fn set_file_directives(&mut self, file: FileID, directives: IdRange) {
        let Some(slot) = self.files.get_mut(file.raw()) else {
            panic!("set_file_directives: invalid FileID {}", file.raw());
        };
        slot.directives = directives;
    }

    // ---- Items -------------------------------------------------------

    /// Append an already-constructed item to the items arena, for callers
    /// building up a file's ordered item list one item at a time. Returns
    /// the same id that was passed in, for chaining convenience.
    pub fn push_item(&mut self, id: ItemID) -> ItemID {
        id
    }

    /// Start a direct-append sequence of items. Pair with
    /// [`Self::finish_items`] to compute the contiguous range afterward.
    pub fn start_items(&self) -> u32 {
        self.items.len() + 1
    }

    pub fn finish_items(&self, start: u32) -> IdRange {
        let end = self.items.len() + 1;
        if end <= start {
            IdRange::EMPTY
        } else {
            IdRange::new(start, end - start)
        }
    }

    pub fn item(&self, id: ItemID) -> Option<&Item> {
        self.items.get(id.raw())
    }

    pub fn new_attrs(&mut self, attrs: impl IntoIterator<Item = Attr>) -> IdRange {
        alloc_range(&mut self.attrs, attrs)
    }

    pub fn collect_attrs(&self, range: IdRange) -> Vec<Attr> {
        range
            .ids()
            .filter_map(|id| self.attrs.get(id))
            .cloned()
            .collect()
    }

    pub fn attr(&self, id: AttrID) -> Option<&Attr> {
        self.attrs.get(id.raw())
    }

    pub fn new_import(
        &mut self,
        span: Span,
        path: Vec<PathSegment>,
        alias: Option<Name>,
        attrs: IdRange,
    ) -> ItemID {
        let id = alloc_node(&mut self.items, &mut self.imports, ImportItem { path, alias, attrs }, |payload| {
            Item {
                kind: ItemKind::Import,
                span,
                payload,
            }
        });
        ItemID::from_raw(id)
    }
    item_getter!(import, ItemKind::Import, imports, ImportItem);

    pub fn new_fn_param(&mut self, name: Name, ty: TypeID, default: ExprID, span: Span) -> FnParamID {
        FnParamID::from_raw(self.fn_params.allocate(FnParam { name, ty, default, span }))
    }

    pub fn new_fn_params(&mut self, params: impl IntoIterator<Item = FnParam>) -> IdRange {
        alloc_range(&mut self.fn_params, params)
    }

    pub fn fn_param(&self, id: FnParamID) -> Option<&FnParam> {
        self.fn_params.get(id.raw())
    }

    #[allow(clippy::too_many_arguments)]
    pub fn new_fn(
        &mut self,
        span: Span,
        name: Name,
        name_span: Span,
        generics: IdRange,
        params: IdRange,
        params_trivia: ListTrivia,
        ret: TypeID,
        body: StmtID,
        modifiers: FnModifiers,
        visibility: Visibility,
        attrs: IdRange,
    ) -> ItemID {
        let payload = FnItem {
            name,
            name_span,
            generics,
            params,
            params_trivia,
            ret,
            body,
            modifiers,
            visibility,
            attrs,
        };
        let id = alloc_node(&mut self.items, &mut self.fn_items, payload, |payload| Item {
            kind: ItemKind::Fn,
            span,
            payload,
        });
        ItemID::from_raw(id)
    }
    item_getter!(fn_item, ItemKind::Fn, fn_items, FnItem);

    pub fn new_extern_fn(
        &mut self,
        span: Span,
        name: Name,
        name_span: Span,
        params: IdRange,
        ret: TypeID,
        attrs: IdRange,
    ) -> ItemID {
        let payload = ExternFnItem {
            name,
            name_span,
            params,
            ret,
            attrs,
        };
        let id = alloc_node(&mut self.items, &mut self.extern_fns, payload, |payload| Item {
            kind: ItemKind::ExternFn,
            span,
            payload,
        });
        ItemID::from_raw(id)
    }
    item_getter!(extern_fn, ItemKind::ExternFn, extern_fns, ExternFnItem);

    pub fn new_let(
        &mut self,
        span: Span,
        name: Name,
        ty: TypeID,
        init: ExprID,
        visibility: Visibility,
        attrs: IdRange,
    ) -> ItemID {
        let payload = LetItem {
            name,
            ty,
            init,
            visibility,
            attrs,
        };
        let id = alloc_node(&mut self.items, &mut self.lets, payload, |payload| Item {
            kind: ItemKind::Let,
            span,
            payload,
        });
        ItemID::from_raw(id)
    }
    item_getter!(let_item, ItemKind::Let, lets, LetItem);

    pub fn new_const(
        &mut self,
        span: Span,
        name: Name,
        ty: TypeID,
        init: ExprID,
        visibility: Visibility,
        attrs: IdRange,
    ) -> ItemID {
        let payload = ConstItem {
            name,
            ty,
            init,
            visibility,
            attrs,
        };
        let id = alloc_node(&mut self.items, &mut self.consts, payload, |payload| Item {
            kind: ItemKind::Const,
            span,
            payload,
        });
        ItemID::from_raw(id)
    }
    item_getter!(const_item, ItemKind::Const, consts, ConstItem);

    pub fn new_type_alias(
        &mut self,
        span: Span,
        name: Name,
        generics: IdRange,
        target: TypeID,
        visibility: Visibility,
    ) -> ItemID {
        let payload = TypeAliasItem {
            name,
            generics,
            target,
            visibility,
        };
        let id = alloc_node(&mut self.items, &mut self.type_aliases, payload, |payload| Item {
            kind: ItemKind::TypeAlias,
            span,
            payload,
        });
        ItemID::from_raw(id)
    }
    item_getter!(type_alias, ItemKind::TypeAlias, type_aliases, TypeAliasItem);

    pub fn new_type_fields(&mut self, fields: impl IntoIterator<Item = TypeField>) -> IdRange {
        alloc_range(&mut self.type_fields, fields)
    }

    pub fn type_field(&self, id: TypeFieldID) -> Option<&TypeField> {
        self.type_fields.get(id.raw())
    }

    pub fn new_type_struct(
        &mut self,
        span: Span,
        name: Name,
        generics: IdRange,
        fields: IdRange,
        fields_trivia: ListTrivia,
        visibility: Visibility,
    ) -> ItemID {
        let payload = TypeStructItem {
            name,
            generics,
            fields,
            fields_trivia,
            visibility,
        };
        let id = alloc_node(&mut self.items, &mut self.type_structs, payload, |payload| Item {
            kind: ItemKind::TypeStruct,
            span,
            payload,
        });
        ItemID::from_raw(id)
    }
    item_getter!(type_struct, ItemKind::TypeStruct, type_structs, TypeStructItem);

    pub fn new_type_union_members(
        &mut self,
        members: impl IntoIterator<Item = TypeUnionMember>,
    ) -> IdRange {
        alloc_range(&mut self.type_union_members, members)
    }

    pub fn type_union_member(&self, id: TypeUnionMemberID) -> Option<&TypeUnionMember> {
        self.type_union_members.get(id.raw())
    }

    pub fn new_type_union(
        &mut self,
        span: Span,
        name: Name,
        generics: IdRange,
        members: IdRange,
        visibility: Visibility,
    ) -> ItemID {
        let payload = TypeUnionItem {
            name,
            generics,
            members,
            visibility,
        };
        let id = alloc_node(&mut self.items, &mut self.type_unions, payload, |payload| Item {
            kind: ItemKind::TypeUnion,
            span,
            payload,
        });
        ItemID::from_raw(id)
    }
    item_getter!(type_union, ItemKind::TypeUnion, type_unions, TypeUnionItem);

    pub fn new_enum_variants(&mut self, variants: impl IntoIterator<Item = EnumVariant>) -> IdRange {
        alloc_range(&mut self.enum_variants, variants)
    }

    pub fn enum_variant(&self, id: EnumVariantID) -> Option<&EnumVariant> {
        self.enum_variants.get(id.raw())
    }

    pub fn new_type_enum(
        &mut self,
        span: Span,
        name: Name,
        variants: IdRange,
        visibility: Visibility,
    ) -> ItemID {
        let payload = TypeEnumItem {
            name,
            variants,
            visibility,
        };
        let id = alloc_node(&mut self.items, &mut self.type_enums, payload, |payload| Item {
            kind: ItemKind::TypeEnum,
            span,
            payload,
        });
        ItemID::from_raw(id)
    }
    item_getter!(type_enum, ItemKind::TypeEnum, type_enums, TypeEnumItem);

    pub fn new_type_param(&mut self, name: Name, bounds: IdRange, span: Span) -> TypeParamID {
        TypeParamID::from_raw(self.type_params.allocate(TypeParam { name, bounds, span }))
    }

    pub fn new_type_params(&mut self, params: impl IntoIterator<Item = TypeParam>) -> IdRange {
        alloc_range(&mut self.type_params, params)
    }

    pub fn type_param(&self, id: TypeParamID) -> Option<&TypeParam> {
        self.type_params.get(id.raw())
    }

    pub fn new_type_param_bounds(
        &mut self,
        bounds: impl IntoIterator<Item = TypeParamBound>,
    ) -> IdRange {
        alloc_range(&mut self.type_param_bounds, bounds)
    }

    pub fn type_param_bound(&self, id: TypeParamBoundID) -> Option<&TypeParamBound> {
        self.type_param_bounds.get(id.raw())
    }

    pub fn new_contract_field(&mut self, name: Name, ty: TypeID, span: Span) -> ContractFieldID {
        ContractFieldID::from_raw(self.contract_fields.allocate(ContractField { name, ty, span }))
    }
    pub fn contract_field(&self, id: ContractFieldID) -> Option<&ContractField> {
        self.contract_fields.get(id.raw())
    }

    pub fn new_contract_fn(
        &mut self,
        name: Name,
        params: IdRange,
        ret: TypeID,
        span: Span,
    ) -> ContractFnID {
        ContractFnID::from_raw(self.contract_fns.allocate(ContractFn { name, params, ret, span }))
    }
    pub fn contract_fn(&self, id: ContractFnID) -> Option<&ContractFn> {
        self.contract_fns.get(id.raw())
    }

    pub fn new_contract_items(
        &mut self,
        items: impl IntoIterator<Item = ContractItem>,
    ) -> IdRange {
        alloc_range(&mut self.contract_items, items)
    }
    pub fn contract_item(&self, id: ContractItemID) -> Option<&ContractItem> {
        self.contract_items.get(id.raw())
    }

    pub fn new_contract(
        &mut self,
        span: Span,
        name: Name,
        items: IdRange,
        visibility: Visibility,
    ) -> ItemID {
        let payload = ContractItemDecl {
            name,
            items,
            visibility,
        };
        let id = alloc_node(&mut self.items, &mut self.contracts, payload, |payload| Item {
            kind: ItemKind::Contract,
            span,
            payload,
        });
        ItemID::from_raw(id)
    }
    item_getter!(contract, ItemKind::Contract, contracts, ContractItemDecl);

    pub fn new_extern_field(&mut self, name: Name, ty: TypeID, span: Span) -> ExternFieldID {
        ExternFieldID::from_raw(self.extern_fields.allocate(ExternField { name, ty, span }))
    }
    pub fn extern_field(&self, id: ExternFieldID) -> Option<&ExternField> {
        self.extern_fields.get(id.raw())
    }

    pub fn new_extern_members(
        &mut self,
        members: impl IntoIterator<Item = ExternMember>,
    ) -> IdRange {
        alloc_range(&mut self.extern_members, members)
    }
    pub fn extern_member(&self, id: ExternMemberID) -> Option<&ExternMember> {
        self.extern_members.get(id.raw())
    }

    pub fn new_extern(&mut self, span: Span, abi: Name, members: IdRange) -> ItemID {
        let payload = ExternItem { abi, members };
        let id = alloc_node(&mut self.items, &mut self.externs, payload, |payload| Item {
            kind: ItemKind::Extern,
            span,
            payload,
        });
        ItemID::from_raw(id)
    }
    item_getter!(extern_item, ItemKind::Extern, externs, ExternItem);

    pub fn new_pragma(&mut self, span: Span, name: Name, args: IdRange) -> ItemID {
        let payload = PragmaItem { name, args };
        let id = alloc_node(&mut self.items, &mut self.pragmas, payload, |payload| Item {
            kind: ItemKind::Pragma,
            span,
            payload,
        });
        ItemID::from_raw(id)
    }
    item_getter!(pragma, ItemKind::Pragma, pragmas, PragmaItem);

    pub fn new_tag(&mut self, span: Span, name: Name, visibility: Visibility) -> ItemID {
        let payload = TagItem { name, visibility };
        let id = alloc_node(&mut self.items, &mut self.tags, payload, |payload| Item {
            kind: ItemKind::Tag,
            span,
            payload,
        });
        ItemID::from_raw(id)
    }
    item_getter!(tag, ItemKind::Tag, tags, TagItem);

    pub fn new_macro(&mut self, span: Span, name: Name, body: StmtID) -> ItemID {
        let payload = MacroItem { name, body };
        let id = alloc_node(&mut self.items, &mut self.macros, payload, |payload| Item {
            kind: ItemKind::Macro,
            span,
            payload,
        });
        ItemID::from_raw(id)
    }
    item_getter!(macro_item, ItemKind::Macro, macros, MacroItem);

    // ---- Statements ----------------------------------------------------

    pub fn stmt(&self, id: StmtID) -> Option<&Stmt> {
        self.stmts.get(id.raw())
    }

    pub fn new_block_stmt(&mut self, span: Span, stmts: IdRange) -> StmtID {
        let id = alloc_node(&mut self.stmts, &mut self.block_stmts, BlockStmt { stmts }, |payload| {
            Stmt {
                kind: StmtKind::Block,
                span,
                payload,
            }
        });
        StmtID::from_raw(id)
    }
    stmt_getter!(block_stmt, StmtKind::Block, block_stmts, BlockStmt);

    pub fn start_stmts(&self) -> u32 {
        self.stmts.len() + 1
    }
    pub fn finish_stmts(&self, start: u32) -> IdRange {
        let end = self.stmts.len() + 1;
        if end <= start {
            IdRange::EMPTY
        } else {
            IdRange::new(start, end - start)
        }
    }

    pub fn new_let_stmt(
        &mut self,
        span: Span,
        name: Name,
        ty: TypeID,
        init: ExprID,
        mutable: bool,
        visibility: Visibility,
    ) -> StmtID {
        let payload = LetStmt {
            name,
            ty,
            init,
            mutable,
            visibility,
        };
        let id = alloc_node(&mut self.stmts, &mut self.let_stmts, payload, |payload| Stmt {
            kind: StmtKind::Let,
            span,
            payload,
        });
        StmtID::from_raw(id)
    }
    stmt_getter!(let_stmt, StmtKind::Let, let_stmts, LetStmt);

    pub fn new_expr_stmt(&mut self, span: Span, expr: ExprID) -> StmtID {
        let id = alloc_node(&mut self.stmts, &mut self.expr_stmts, ExprStmt { expr }, |payload| {
            Stmt {
                kind: StmtKind::Expr,
                span,
                payload,
            }
        });
        StmtID::from_raw(id)
    }
    stmt_getter!(expr_stmt, StmtKind::Expr, expr_stmts, ExprStmt);

    pub fn new_signal_stmt(&mut self, span: Span, name: Name, ty: TypeID, init: ExprID) -> StmtID {
        let payload = SignalStmt { name, ty, init };
        let id = alloc_node(&mut self.stmts, &mut self.signal_stmts, payload, |payload| Stmt {
            kind: StmtKind::Signal,
            span,
            payload,
        });
        StmtID::from_raw(id)
    }
    stmt_getter!(signal_stmt, StmtKind::Signal, signal_stmts, SignalStmt);

    pub fn new_return_stmt(&mut self, span: Span, value: ExprID, keyword_span: Span) -> StmtID {
        let payload = ReturnStmt { value, keyword_span };
        let id = alloc_node(&mut self.stmts, &mut self.return_stmts, payload, |payload| Stmt {
            kind: StmtKind::Return,
            span,
            payload,
        });
        StmtID::from_raw(id)
    }
    stmt_getter!(return_stmt, StmtKind::Return, return_stmts, ReturnStmt);

    pub fn new_break_stmt(&mut self, span: Span, label: Name, value: ExprID) -> StmtID {
        let payload = BreakStmt { label, value };
        let id = alloc_node(&mut self.stmts, &mut self.break_stmts, payload, |payload| Stmt {
            kind: StmtKind::Break,
            span,
            payload,
        });
        StmtID::from_raw(id)
    }
    stmt_getter!(break_stmt, StmtKind::Break, break_stmts, BreakStmt);

    pub fn new_continue_stmt(&mut self, span: Span, label: Name) -> StmtID {
        let payload = ContinueStmt { label };
        let id = alloc_node(&mut self.stmts, &mut self.continue_stmts, payload, |payload| Stmt {
            kind: StmtKind::Continue,
            span,
            payload,
        });
        StmtID::from_raw(id)
    }
    stmt_getter!(continue_stmt, StmtKind::Continue, continue_stmts, ContinueStmt);

    pub fn new_if_stmt(
        &mut self,
        span: Span,
        cond: ExprID,
        then_branch: StmtID,
        else_branch: StmtID,
    ) -> StmtID {
        let payload = IfStmt {
            cond,
            then_branch,
            else_branch,
        };
        let id = alloc_node(&mut self.stmts, &mut self.if_stmts, payload, |payload| Stmt {
            kind: StmtKind::If,
            span,
            payload,
        });
        StmtID::from_raw(id)
    }
    stmt_getter!(if_stmt, StmtKind::If, if_stmts, IfStmt);

    pub fn new_while_stmt(&mut self, span: Span, label: Name, cond: ExprID, body: StmtID) -> StmtID {
        let payload = WhileStmt { label, cond, body };
        let id = alloc_node(&mut self.stmts, &mut self.while_stmts, payload, |payload| Stmt {
            kind: StmtKind::While,
            span,
            payload,
        });
        StmtID::from_raw(id)
    }
    stmt_getter!(while_stmt, StmtKind::While, while_stmts, WhileStmt);

    #[allow(clippy::too_many_arguments)]
    pub fn new_for_classic_stmt(
        &mut self,
        span: Span,
        label: Name,
        init: StmtID,
        cond: ExprID,
        step: ExprID,
        body: StmtID,
    ) -> StmtID {
        let payload = ForClassicStmt {
            label,
            init,
            cond,
            step,
            body,
        };
        let id = alloc_node(&mut self.stmts, &mut self.for_classic_stmts, payload, |payload| {
            Stmt {
                kind: StmtKind::ForClassic,
                span,
                payload,
            }
        });
        StmtID::from_raw(id)
    }
    stmt_getter!(for_classic_stmt, StmtKind::ForClassic, for_classic_stmts, ForClassicStmt);

    pub fn new_for_in_stmt(
        &mut self,
        span: Span,
        label: Name,
        binding: Name,
        iter: ExprID,
        body: StmtID,
    ) -> StmtID {
        let payload = ForInStmt {
            label,
            binding,
            iter,
            body,
        };
        let id = alloc_node(&mut self.stmts, &mut self.for_in_stmts, payload, |payload| Stmt {
            kind: StmtKind::ForIn,
            span,
            payload,
        });
        StmtID::from_raw(id)
    }
    stmt_getter!(for_in_stmt, StmtKind::ForIn, for_in_stmts, ForInStmt);

    // ---- Expressions ---------------------------------------------------

    pub fn expr(&self, id: ExprID) -> Option<&Expr> {
        self.exprs.get(id.raw())
    }

    /// Push already-built expression ids into the flat element list used by
    /// tuple/array/select literals, returning the contiguous range.
    pub fn new_expr_id_list(&mut self, ids: impl IntoIterator<Item = ExprID>) -> IdRange {
        alloc_range(&mut self.expr_id_list, ids)
    }

    pub fn expr_id_list(&self, range: IdRange) -> Vec<ExprID> {
        range.ids().filter_map(|id| self.expr_id_list.get(id)).copied().collect()
    }

    pub fn new_type_id_list(&mut self, ids: impl IntoIterator<Item = TypeID>) -> IdRange {
        alloc_range(&mut self.type_id_list, ids)
    }

    pub fn type_id_list(&self, range: IdRange) -> Vec<TypeID> {
        range.ids().filter_map(|id| self.type_id_list.get(id)).copied().collect()
    }

    pub fn new_ident(&mut self, span: Span, name: Name) -> ExprID {
        let id = alloc_node(&mut self.exprs, &mut self.idents, IdentExpr { name }, |payload| Expr {
            kind: ExprKind::Ident,
            span,
            payload,
        });
        ExprID::from_raw(id)
    }
    expr_getter!(ident, ExprKind::Ident, idents, IdentExpr);

    pub fn new_lit(&mut self, span: Span, value: LitValue) -> ExprID {
        let id = alloc_node(&mut self.exprs, &mut self.lits, LitExpr { value }, |payload| Expr {
            kind: ExprKind::Lit,
            span,
            payload,
        });
        ExprID::from_raw(id)
    }
    expr_getter!(lit, ExprKind::Lit, lits, LitExpr);

    pub fn new_binary(
        &mut self,
        span: Span,
        op: BinaryOp,
        op_span: Span,
        left: ExprID,
        right: ExprID,
    ) -> ExprID {
        let payload = BinaryExpr { op, op_span, left, right };
        let id = alloc_node(&mut self.exprs, &mut self.binaries, payload, |payload| Expr {
            kind: ExprKind::Binary,
            span,
            payload,
        });
        ExprID::from_raw(id)
    }
    expr_getter!(binary, ExprKind::Binary, binaries, BinaryExpr);

    pub fn new_unary(&mut self, span: Span, op: UnaryOp, op_span: Span, operand: ExprID) -> ExprID {
        let payload = UnaryExpr { op, op_span, operand };
        let id = alloc_node(&mut self.exprs, &mut self.unaries, payload, |payload| Expr {
            kind: ExprKind::Unary,
            span,
            payload,
        });
        ExprID::from_raw(id)
    }
    expr_getter!(unary, ExprKind::Unary, unaries, UnaryExpr);

    pub fn new_cast(&mut self, span: Span, expr: ExprID, ty: TypeID, as_span: Span) -> ExprID {
        let payload = CastExpr { expr, ty, as_span };
        let id = alloc_node(&mut self.exprs, &mut self.casts, payload, |payload| Expr {
            kind: ExprKind::Cast,
            span,
            payload,
        });
        ExprID::from_raw(id)
    }
    expr_getter!(cast, ExprKind::Cast, casts, CastExpr);

    pub fn new_call_args(&mut self, args: impl IntoIterator<Item = CallArg>) -> IdRange {
        alloc_range(&mut self.call_args, args)
    }

    pub fn new_call(
        &mut self,
        span: Span,
        callee: ExprID,
        args: IdRange,
        args_trivia: ListTrivia,
    ) -> ExprID {
        let payload = CallExpr {
            callee,
            args,
            args_trivia,
        };
        let id = alloc_node(&mut self.exprs, &mut self.calls, payload, |payload| Expr {
            kind: ExprKind::Call,
            span,
            payload,
        });
        ExprID::from_raw(id)
    }
    expr_getter!(call, ExprKind::Call, calls, CallExpr);

    pub fn call_arg(&self, ids: IdRange) -> Vec<CallArg> {
        ids.ids().filter_map(|id| self.call_args.get(id)).cloned().collect()
    }

    pub fn new_index(&mut self, span: Span, receiver: ExprID, index: ExprID) -> ExprID {
        let payload = IndexExpr { receiver, index };
        let id = alloc_node(&mut self.exprs, &mut self.indices, payload, |payload| Expr {
            kind: ExprKind::Index,
            span,
            payload,
        });
        ExprID::from_raw(id)
    }
    expr_getter!(index, ExprKind::Index, indices, IndexExpr);

    pub fn new_member(&mut self, span: Span, receiver: ExprID, member: Name, member_span: Span) -> ExprID {
        let payload = MemberExpr {
            receiver,
            member,
            member_span,
        };
        let id = alloc_node(&mut self.exprs, &mut self.members, payload, |payload| Expr {
            kind: ExprKind::Member,
            span,
            payload,
        });
        ExprID::from_raw(id)
    }
    expr_getter!(member, ExprKind::Member, members, MemberExpr);

    pub fn new_tuple_index(&mut self, span: Span, receiver: ExprID, index: u32, index_span: Span) -> ExprID {
        let payload = TupleIndexExpr {
            receiver,
            index,
            index_span,
        };
        let id = alloc_node(&mut self.exprs, &mut self.tuple_indices, payload, |payload| Expr {
            kind: ExprKind::TupleIndex,
            span,
            payload,
        });
        ExprID::from_raw(id)
    }
    expr_getter!(tuple_index, ExprKind::TupleIndex, tuple_indices, TupleIndexExpr);

    pub fn new_await(&mut self, span: Span, operand: ExprID) -> ExprID {
        let id = alloc_node(&mut self.exprs, &mut self.awaits, AwaitExpr { operand }, |payload| {
            Expr {
                kind: ExprKind::Await,
                span,
                payload,
            }
        });
        ExprID::from_raw(id)
    }
    expr_getter!(await_expr, ExprKind::Await, awaits, AwaitExpr);

    pub fn new_ternary(
        &mut self,
        span: Span,
        cond: ExprID,
        then_branch: ExprID,
        else_branch: ExprID,
    ) -> ExprID {
        let payload = TernaryExpr {
            cond,
            then_branch,
            else_branch,
        };
        let id = alloc_node(&mut self.exprs, &mut self.ternaries, payload, |payload| Expr {
            kind: ExprKind::Ternary,
            span,
            payload,
        });
        ExprID::from_raw(id)
    }
    expr_getter!(ternary, ExprKind::Ternary, ternaries, TernaryExpr);

    pub fn new_group(&mut self, span: Span, inner: ExprID, open_span: Span, close_span: Span) -> ExprID {
        let payload = GroupExpr {
            inner,
            open_span,
            close_span,
        };
        let id = alloc_node(&mut self.exprs, &mut self.groups, payload, |payload| Expr {
            kind: ExprKind::Group,
            span,
            payload,
        });
        ExprID::from_raw(id)
    }
    expr_getter!(group, ExprKind::Group, groups, GroupExpr);

    pub fn new_tuple(&mut self, span: Span, elements: IdRange, trivia: ListTrivia) -> ExprID {
        let payload = TupleExpr { elements, trivia };
        let id = alloc_node(&mut self.exprs, &mut self.tuples, payload, |payload| Expr {
            kind: ExprKind::Tuple,
            span,
            payload,
        });
        ExprID::from_raw(id)
    }
    expr_getter!(tuple, ExprKind::Tuple, tuples, TupleExpr);

    pub fn new_array(&mut self, span: Span, elements: IdRange, trivia: ListTrivia) -> ExprID {
        let payload = ArrayExpr { elements, trivia };
        let id = alloc_node(&mut self.exprs, &mut self.arrays, payload, |payload| Expr {
            kind: ExprKind::Array,
            span,
            payload,
        });
        ExprID::from_raw(id)
    }
    expr_getter!(array, ExprKind::Array, arrays, ArrayExpr);

    pub fn new_map_entries(&mut self, entries: impl IntoIterator<Item = MapEntry>) -> IdRange {
        alloc_range(&mut self.map_entries, entries)
    }

    pub fn map_entry(&self, ids: IdRange) -> Vec<MapEntry> {
        ids.ids().filter_map(|id| self.map_entries.get(id)).cloned().collect()
    }

    pub fn new_map(&mut self, span: Span, entries: IdRange, trivia: ListTrivia) -> ExprID {
        let payload = MapExpr { entries, trivia };
        let id = alloc_node(&mut self.exprs, &mut self.maps, payload, |payload| Expr {
            kind: ExprKind::Map,
            span,
            payload,
        });
        ExprID::from_raw(id)
    }
    expr_getter!(map, ExprKind::Map, maps, MapExpr);

    pub fn new_range_lit(&mut self, span: Span, start: ExprID, end: ExprID, inclusive: bool) -> ExprID {
        let payload = RangeLitExpr { start, end, inclusive };
        let id = alloc_node(&mut self.exprs, &mut self.range_lits, payload, |payload| Expr {
            kind: ExprKind::RangeLit,
            span,
            payload,
        });
        ExprID::from_raw(id)
    }
    expr_getter!(range_lit, ExprKind::RangeLit, range_lits, RangeLitExpr);

    pub fn new_spread(&mut self, span: Span, inner: ExprID, dots_span: Span) -> ExprID {
        let payload = SpreadExpr { inner, dots_span };
        let id = alloc_node(&mut self.exprs, &mut self.spreads, payload, |payload| Expr {
            kind: ExprKind::Spread,
            span,
            payload,
        });
        ExprID::from_raw(id)
    }
    expr_getter!(spread, ExprKind::Spread, spreads, SpreadExpr);

    pub fn new_task(&mut self, span: Span, body: ExprID) -> ExprID {
        let id = alloc_node(&mut self.exprs, &mut self.tasks, TaskExpr { body }, |payload| Expr {
            kind: ExprKind::Task,
            span,
            payload,
        });
        ExprID::from_raw(id)
    }
    expr_getter!(task, ExprKind::Task, tasks, TaskExpr);

    pub fn new_spawn(&mut self, span: Span, body: ExprID) -> ExprID {
        let id = alloc_node(&mut self.exprs, &mut self.spawns, SpawnExpr { body }, |payload| {
            Expr {
                kind: ExprKind::Spawn,
                span,
                payload,
            }
        });
        ExprID::from_raw(id)
    }
    expr_getter!(spawn, ExprKind::Spawn, spawns, SpawnExpr);

    pub fn new_async(&mut self, span: Span, body: ExprID) -> ExprID {
        let id = alloc_node(&mut self.exprs, &mut self.asyncs, AsyncExpr { body }, |payload| {
            Expr {
                kind: ExprKind::Async,
                span,
                payload,
            }
        });
        ExprID::from_raw(id)
    }
    expr_getter!(async_expr, ExprKind::Async, asyncs, AsyncExpr);

    pub fn new_parallel_map(&mut self, span: Span, source: ExprID, binding: Name, body: ExprID) -> ExprID {
        let payload = ParallelMapExpr {
            source,
            binding,
            body,
        };
        let id = alloc_node(&mut self.exprs, &mut self.parallel_maps, payload, |payload| Expr {
            kind: ExprKind::ParallelMap,
            span,
            payload,
        });
        ExprID::from_raw(id)
    }
    expr_getter!(parallel_map, ExprKind::ParallelMap, parallel_maps, ParallelMapExpr);

    #[allow(clippy::too_many_arguments)]
    pub fn new_parallel_reduce(
        &mut self,
        span: Span,
        source: ExprID,
        init: ExprID,
        acc_binding: Name,
        item_binding: Name,
        body: ExprID,
    ) -> ExprID {
        let payload = ParallelReduceExpr {
            source,
            init,
            acc_binding,
            item_binding,
            body,
        };
        let id = alloc_node(&mut self.exprs, &mut self.parallel_reduces, payload, |payload| Expr {
            kind: ExprKind::ParallelReduce,
            span,
            payload,
        });
        ExprID::from_raw(id)
    }
    expr_getter!(parallel_reduce, ExprKind::ParallelReduce, parallel_reduces, ParallelReduceExpr);

    pub fn new_compare(&mut self, span: Span, first: ExprID, links: Vec<CompareLink>) -> ExprID {
        let payload = CompareExpr { first, links };
        let id = alloc_node(&mut self.exprs, &mut self.compares, payload, |payload| Expr {
            kind: ExprKind::Compare,
            span,
            payload,
        });
        ExprID::from_raw(id)
    }
    expr_getter!(compare, ExprKind::Compare, compares, CompareExpr);

    pub fn new_concurrent_arms(&mut self, arms: impl IntoIterator<Item = ConcurrentArm>) -> IdRange {
        alloc_range(&mut self.concurrent_arms, arms)
    }

    pub fn concurrent_arm(&self, id: u32) -> Option<&ConcurrentArm> {
        self.concurrent_arms.get(id)
    }

    pub fn new_select(&mut self, span: Span, arms: IdRange) -> ExprID {
        let id = alloc_node(&mut self.exprs, &mut self.selects, SelectExpr { arms }, |payload| {
            Expr {
                kind: ExprKind::Select,
                span,
                payload,
            }
        });
        ExprID::from_raw(id)
    }
    expr_getter!(select, ExprKind::Select, selects, SelectExpr);

    pub fn new_race(&mut self, span: Span, arms: IdRange) -> ExprID {
        let id = alloc_node(&mut self.exprs, &mut self.races, RaceExpr { arms }, |payload| Expr {
            kind: ExprKind::Race,
            span,
            payload,
        });
        ExprID::from_raw(id)
    }
    expr_getter!(race, ExprKind::Race, races, RaceExpr);

    pub fn new_field_inits(&mut self, fields: impl IntoIterator<Item = FieldInit>) -> IdRange {
        alloc_range(&mut self.field_inits, fields)
    }

    pub fn field_init(&self, ids: IdRange) -> Vec<FieldInit> {
        ids.ids().filter_map(|id| self.field_inits.get(id)).cloned().collect()
    }

    pub fn new_struct(&mut self, span: Span, type_name: Name, fields: IdRange, trivia: ListTrivia) -> ExprID {
        let payload = StructExpr {
            type_name,
            fields,
            trivia,
        };
        let id = alloc_node(&mut self.exprs, &mut self.structs, payload, |payload| Expr {
            kind: ExprKind::Struct,
            span,
            payload,
        });
        ExprID::from_raw(id)
    }
    expr_getter!(struct_expr, ExprKind::Struct, structs, StructExpr);

    pub fn new_block_expr(&mut self, span: Span, stmts: IdRange, tail: ExprID) -> ExprID {
        let payload = BlockExpr { stmts, tail };
        let id = alloc_node(&mut self.exprs, &mut self.blocks, payload, |payload| Expr {
            kind: ExprKind::Block,
            span,
            payload,
        });
        ExprID::from_raw(id)
    }
    expr_getter!(block_expr, ExprKind::Block, blocks, BlockExpr);

    // ---- Type expressions -----------------------------------------------

    pub fn ty(&self, id: TypeID) -> Option<&TypeExpr> {
        self.types.get(id.raw())
    }

    pub fn new_path_type(&mut self, span: Span, segments: Vec<PathSegment>) -> TypeID {
        let id = alloc_node(&mut self.types, &mut self.path_types, PathType { segments }, |payload| {
            TypeExpr {
                kind: TypeExprKind::Path,
                span,
                payload,
            }
        });
        TypeID::from_raw(id)
    }
    type_getter!(path_type, TypeExprKind::Path, path_types, PathType);

    fn new_unary_type(&mut self, span: Span, inner: TypeID, op_span: Span, kind: TypeExprKind) -> TypeID {
        let payload = UnaryType { inner, op_span };
        let id = alloc_node(&mut self.types, &mut self.unary_types, payload, |payload| TypeExpr {
            kind,
            span,
            payload,
        });
        TypeID::from_raw(id)
    }

    pub fn new_own_type(&mut self, span: Span, inner: TypeID, op_span: Span) -> TypeID {
        self.new_unary_type(span, inner, op_span, TypeExprKind::UnaryOwn)
    }
    pub fn new_ref_type(&mut self, span: Span, inner: TypeID, op_span: Span) -> TypeID {
        self.new_unary_type(span, inner, op_span, TypeExprKind::UnaryRef)
    }
    pub fn new_ref_mut_type(&mut self, span: Span, inner: TypeID, op_span: Span) -> TypeID {
        self.new_unary_type(span, inner, op_span, TypeExprKind::UnaryRefMut)
    }
    pub fn new_ptr_type(&mut self, span: Span, inner: TypeID, op_span: Span) -> TypeID {
        self.new_unary_type(span, inner, op_span, TypeExprKind::UnaryPtr)
    }
    /// All four unary type constructors (`own`/`&`/`&mut`/`*`) share this
    /// one payload arena, so the kind check accepts any of them rather
    /// than hardcoding a single variant (unlike `type_getter!`'s
    /// one-kind-per-arena assumption).
    pub fn unary_type(&self, id: TypeID) -> Option<&UnaryType> {
        let ty = self.types.get(id.raw())?;
        match ty.kind {
            TypeExprKind::UnaryOwn | TypeExprKind::UnaryRef | TypeExprKind::UnaryRefMut | TypeExprKind::UnaryPtr => {}
            _ => return None,
        }
        self.unary_types.get(ty.payload.raw())
    }

    pub fn new_array_sized_type(&mut self, span: Span, element: TypeID, size: ExprID) -> TypeID {
        let payload = ArraySizedType { element, size };
        let id = alloc_node(&mut self.types, &mut self.array_sized_types, payload, |payload| {
            TypeExpr {
                kind: TypeExprKind::ArraySized,
                span,
                payload,
            }
        });
        TypeID::from_raw(id)
    }
    type_getter!(array_sized_type, TypeExprKind::ArraySized, array_sized_types, ArraySizedType);

    pub fn new_array_slice_type(&mut self, span: Span, element: TypeID) -> TypeID {
        let payload = ArraySliceType { element };
        let id = alloc_node(&mut self.types, &mut self.array_slice_types, payload, |payload| {
            TypeExpr {
                kind: TypeExprKind::ArraySlice,
                span,
                payload,
            }
        });
        TypeID::from_raw(id)
    }
    type_getter!(array_slice_type, TypeExprKind::ArraySlice, array_slice_types, ArraySliceType);

    pub fn new_tuple_type(&mut self, span: Span, elements: IdRange, trivia: ListTrivia) -> TypeID {
        let payload = TupleType { elements, trivia };
        let id = alloc_node(&mut self.types, &mut self.tuple_types, payload, |payload| TypeExpr {
            kind: TypeExprKind::Tuple,
            span,
            payload,
        });
        TypeID::from_raw(id)
    }
    type_getter!(tuple_type, TypeExprKind::Tuple, tuple_types, TupleType);

    pub fn new_fn_type(&mut self, span: Span, params: IdRange, ret: TypeID) -> TypeID {
        let payload = FnType { params, ret };
        let id = alloc_node(&mut self.types, &mut self.fn_types, payload, |payload| TypeExpr {
            kind: TypeExprKind::Fn,
            span,
            payload,
        });
        TypeID::from_raw(id)
    }
    type_getter!(fn_type, TypeExprKind::Fn, fn_types, FnType);

    pub fn new_const_type(&mut self, span: Span, name: Name, ty: TypeID) -> TypeID {
        let payload = ConstType { name, ty };
        let id = alloc_node(&mut self.types, &mut self.const_types, payload, |payload| TypeExpr {
            kind: TypeExprKind::Const,
            span,
            payload,
        });
        TypeID::from_raw(id)
    }
    type_getter!(const_type, TypeExprKind::Const, const_types, ConstType);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_id() -> FileID {
        FileID::from_raw(1)
    }

    #[test]
    fn empty_file_has_no_items() {
        let mut b = Builder::new(Hints::default());
        let file = b.new_file(Span::new(file_id(), 0, 0));
        assert!(b.file(file).unwrap().items.is_empty());
    }

    #[test]
    fn import_then_fn_are_contiguous_and_ordered() {
        let mut b = Builder::new(Hints::default());
        let file = b.new_file(Span::new(file_id(), 0, 40));

        let start = b.start_items();
        let core = b.intern("core");
        let util = b.intern("util");
        let import_span = Span::new(file_id(), 0, 19);
        let import = b.new_import(
            import_span,
            vec![
                PathSegment {
                    name: core,
                    span: import_span,
                    generic_args: IdRange::EMPTY,
                },
                PathSegment {
                    name: util,
                    span: import_span,
                    generic_args: IdRange::EMPTY,
                },
            ],
            None,
            IdRange::EMPTY,
        );
        b.push_item(import);

        let lit_zero = b.new_lit(Span::new(file_id(), 36, 37), LitValue::Int { raw: b.intern("0") });
        let return_stmt = b.new_return_stmt(Span::new(file_id(), 29, 37), lit_zero, Span::new(file_id(), 29, 35));
        let body_start = b.start_stmts();
        b.push_item(ItemID::NONE); // no-op to exercise push_item's identity contract
        let _ = body_start;
        let block_range = IdRange::new(return_stmt.raw(), 1);
        let body = b.new_block_stmt(Span::new(file_id(), 27, 39), block_range);

        let main = b.intern("main");
        let int_ty_name = b.intern("int");
        let int_ty_span = Span::new(file_id(), 24, 27);
        let ret_ty = b.new_path_type(
            int_ty_span,
            vec![PathSegment {
                name: int_ty_name,
                span: int_ty_span,
                generic_args: IdRange::EMPTY,
            }],
        );
        let fn_item = b.new_fn(
            Span::new(file_id(), 20, 39),
            main,
            Span::new(file_id(), 23, 27),
            IdRange::EMPTY,
            IdRange::EMPTY,
            ListTrivia::NONE,
            ret_ty,
            body,
            FnModifiers::empty(),
            Visibility::Private,
            IdRange::EMPTY,
        );
        b.push_item(fn_item);

        let items = b.finish_items(start);
        b.set_file_items(file, items);

        let item_ids: Vec<ItemID> = items.ids().map(ItemID::from_raw).collect();
        assert_eq!(item_ids, vec![import, fn_item]);
        assert_eq!(b.item(import).unwrap().kind, ItemKind::Import);
        assert_eq!(b.item(fn_item).unwrap().kind, ItemKind::Fn);

        let fn_payload = b.fn_item(fn_item).expect("Fn getter must succeed for a Fn item");
        assert_eq!(fn_payload.name, main);
        assert!(b.fn_item(import).is_none(), "wrong-kind getter must return None");
    }

    #[test]
    fn kind_payload_mismatch_returns_none() {
        let mut b = Builder::new(Hints::default());
        let name = b.intern("x");
        let ident = b.new_ident(Span::DUMMY, name);
        assert!(b.binary(ident).is_none());
        assert!(b.ident(ident).is_some());
    }

    #[test]
    fn attribute_catalog_lookup_through_builder() {
        let b = Builder::new(Hints::default());
        assert!(b.attr_catalog().lookup("override").is_some());
    }
}
