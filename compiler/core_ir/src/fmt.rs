//! Read-only AST dump utilities: pretty tree, compact tree, JSON.
//!
//! Every dumper walks the same generic [`DumpNode`] shape built once from
//! the arenas, then renders it three ways. Missing/invalid child ids
//! render as `<none>` or `<invalid-N>` placeholders rather than panicking
//! — this module is diagnostic tooling, not a correctness boundary, so it
//! must survive a half-built or post-error tree (spec.md §4.4).

use std::fmt::Write as _;

use crate::ast::*;
use crate::builder::Builder;
use crate::id::{ExprID, ItemID, StmtID, TypeID};
use crate::name::Name;

/// One node of the generic dump tree: a short human label plus children
/// in lexical order.
struct DumpNode {
    label: String,
    children: Vec<DumpNode>,
}

impl DumpNode {
    fn leaf(label: impl Into<String>) -> Self {
        DumpNode {
            label: label.into(),
            children: Vec::new(),
        }
    }

    fn with(label: impl Into<String>, children: Vec<DumpNode>) -> Self {
        DumpNode {
            label: label.into(),
            children,
        }
    }
}

fn resolve<'b>(b: &'b Builder, name: Name) -> &'b str {
    if name.is_valid() {
        b.resolve(name)
    } else {
        "<inferred>"
    }
}

fn dump_path(b: &Builder, segments: &[PathSegment]) -> String {
    segments
        .iter()
        .map(|seg| resolve(b, seg.name))
        .collect::<Vec<_>>()
        .join("::")
}

fn dump_ids<T>(ids: impl Iterator<Item = T>, mut f: impl FnMut(T) -> DumpNode) -> Vec<DumpNode> {
    ids.map(|id| f(id)).collect()
}

fn dump_expr_opt(b: &Builder, id: ExprID) -> Option<DumpNode> {
    if id.is_valid() {
        Some(dump_expr(b, id))
    } else {
        None
    }
}

fn dump_stmt_opt(b: &Builder, id: StmtID) -> Option<DumpNode> {
    if id.is_valid() {
        Some(dump_stmt(b, id))
    } else {
        None
    }
}

fn dump_type_opt(b: &Builder, id: TypeID) -> Option<DumpNode> {
    if id.is_valid() {
        Some(dump_type(b, id))
    } else {
        None
    }
}

fn file_node(b: &Builder, file: crate::id::FileID) -> DumpNode {
    let Some(f) = b.file(file) else {
        return DumpNode::leaf("<invalid-file>");
    };
    let children = dump_ids(f.items.ids(), |raw| dump_item(b, ItemID::from_raw(raw)));
    DumpNode::with("File", children)
}

fn dump_item(b: &Builder, id: ItemID) -> DumpNode {
    let Some(item) = b.item(id) else {
        return DumpNode::leaf(format!("<invalid-item-{}>", id.raw()));
    };
    match item.kind {
        ItemKind::Import => match b.import(id) {
            Some(imp) => {
                let mut label = format!("Import {}", dump_path(b, &imp.path));
                if let Some(alias) = imp.alias {
                    let _ = write!(label, " as {}", resolve(b, alias));
                }
                DumpNode::leaf(label)
            }
            None => DumpNode::leaf("<invalid-import>"),
        },
        ItemKind::Fn => match b.fn_item(id) {
            Some(f) => {
                let mut children = dump_ids(f.params.ids(), |raw| {
                    let p = b.fn_param(crate::id::FnParamID::from_raw(raw));
                    match p {
                        Some(p) => DumpNode::leaf(format!("Param {}", resolve(b, p.name))),
                        None => DumpNode::leaf("<invalid-param>"),
                    }
                });
                children.push(dump_stmt_or_none(b, f.body));
                DumpNode::with(format!("Fn {}", resolve(b, f.name)), children)
            }
            None => DumpNode::leaf("<invalid-fn>"),
        },
        ItemKind::ExternFn => match b.extern_fn(id) {
            Some(f) => DumpNode::leaf(format!("ExternFn {}", resolve(b, f.name))),
            None => DumpNode::leaf("<invalid-extern-fn>"),
        },
        ItemKind::Let => match b.let_item(id) {
            Some(l) => {
                let children = dump_expr_opt(b, l.init).into_iter().collect();
                DumpNode::with(format!("Let {}", resolve(b, l.name)), children)
            }
            None => DumpNode::leaf("<invalid-let>"),
        },
        ItemKind::Const => match b.const_item(id) {
            Some(c) => {
                let children = dump_expr_opt(b, c.init).into_iter().collect();
                DumpNode::with(format!("Const {}", resolve(b, c.name)), children)
            }
            None => DumpNode::leaf("<invalid-const>"),
        },
        ItemKind::TypeAlias => match b.type_alias(id) {
            Some(t) => {
                let children = dump_type_opt(b, t.target).into_iter().collect();
                DumpNode::with(format!("TypeAlias {}", resolve(b, t.name)), children)
            }
            None => DumpNode::leaf("<invalid-type-alias>"),
        },
        ItemKind::TypeStruct => match b.type_struct(id) {
            Some(t) => {
                let children = dump_ids(t.fields.ids(), |raw| {
                    match b.type_field(crate::id::TypeFieldID::from_raw(raw)) {
                        Some(f) => DumpNode::leaf(format!("Field {}", resolve(b, f.name))),
                        None => DumpNode::leaf("<invalid-field>"),
                    }
                });
                DumpNode::with(format!("TypeStruct {}", resolve(b, t.name)), children)
            }
            None => DumpNode::leaf("<invalid-type-struct>"),
        },
        ItemKind::TypeUnion => match b.type_union(id) {
            Some(t) => {
                let children = dump_ids(t.members.ids(), |raw| {
                    match b.type_union_member(crate::id::TypeUnionMemberID::from_raw(raw)) {
                        Some(m) => DumpNode::leaf(format!("Member {}", resolve(b, m.name))),
                        None => DumpNode::leaf("<invalid-member>"),
                    }
                });
                DumpNode::with(format!("TypeUnion {}", resolve(b, t.name)), children)
            }
            None => DumpNode::leaf("<invalid-type-union>"),
        },
        ItemKind::TypeEnum => match b.type_enum(id) {
            Some(t) => {
                let children = dump_ids(t.variants.ids(), |raw| {
                    match b.enum_variant(crate::id::EnumVariantID::from_raw(raw)) {
                        Some(v) => DumpNode::leaf(format!("Variant {}", resolve(b, v.name))),
                        None => DumpNode::leaf("<invalid-variant>"),
                    }
                });
                DumpNode::with(format!("TypeEnum {}", resolve(b, t.name)), children)
            }
            None => DumpNode::leaf("<invalid-type-enum>"),
        },
        ItemKind::Contract => match b.contract(id) {
            Some(c) => DumpNode::with(
                format!("Contract {}", resolve(b, c.name)),
                dump_ids(c.items.ids(), |raw| {
                    dump_contract_item(b, crate::id::ContractItemID::from_raw(raw))
                }),
            ),
            None => DumpNode::leaf("<invalid-contract>"),
        },
        ItemKind::Tag => match b.tag(id) {
            Some(t) => DumpNode::leaf(format!("Tag {}", resolve(b, t.name))),
            None => DumpNode::leaf("<invalid-tag>"),
        },
        ItemKind::Extern => match b.extern_item(id) {
            Some(e) => DumpNode::with(
                format!("Extern \"{}\"", resolve(b, e.abi)),
                dump_ids(e.members.ids(), |raw| {
                    dump_extern_member(b, crate::id::ExternMemberID::from_raw(raw))
                }),
            ),
            None => DumpNode::leaf("<invalid-extern>"),
        },
        ItemKind::Pragma => match b.pragma(id) {
            Some(p) => DumpNode::leaf(format!("Pragma {}", resolve(b, p.name))),
            None => DumpNode::leaf("<invalid-pragma>"),
        },
        ItemKind::Macro => match b.macro_item(id) {
            Some(m) => {
                let children = dump_stmt_opt(b, m.body).into_iter().collect();
                DumpNode::with(format!("Macro {}", resolve(b, m.name)), children)
            }
            None => DumpNode::leaf("<invalid-macro>"),
        },
    }
}

fn dump_contract_item(b: &Builder, id: crate::id::ContractItemID) -> DumpNode {
    let Some(item) = b.contract_item(id) else {
        return DumpNode::leaf("<invalid-contract-item>");
    };
    match item.kind {
        ContractItemKind::Field(field_id) => match b.contract_field(field_id) {
            Some(f) => DumpNode::leaf(format!("ContractField {}", resolve(b, f.name))),
            None => DumpNode::leaf("<invalid-contract-field>"),
        },
        ContractItemKind::Fn(fn_id) => match b.contract_fn(fn_id) {
            Some(f) => DumpNode::leaf(format!("ContractFn {}", resolve(b, f.name))),
            None => DumpNode::leaf("<invalid-contract-fn>"),
        },
    }
}

fn dump_extern_member(b: &Builder, id: crate::id::ExternMemberID) -> DumpNode {
    let Some(member) = b.extern_member(id) else {
        return DumpNode::leaf("<invalid-extern-member>");
    };
    match member.kind {
        ExternMemberKind::Field(field_id) => match b.extern_field(field_id) {
            Some(f) => DumpNode::leaf(format!("ExternField {}", resolve(b, f.name))),
            None => DumpNode::leaf("<invalid-extern-field>"),
        },
        ExternMemberKind::Fn(fn_item_id) => dump_item(b, fn_item_id),
    }
}

fn dump_stmt_or_none(b: &Builder, id: StmtID) -> DumpNode {
    dump_stmt_opt(b, id).unwrap_or_else(|| DumpNode::leaf("<none>"))
}

fn dump_stmt(b: &Builder, id: StmtID) -> DumpNode {
    let Some(stmt) = b.stmt(id) else {
        return DumpNode::leaf(format!("<invalid-stmt-{}>", id.raw()));
    };
    match stmt.kind {
        StmtKind::Block => match b.block_stmt(id) {
            Some(blk) => DumpNode::with(
                "Block",
                dump_ids(blk.stmts.ids(), |raw| dump_stmt(b, StmtID::from_raw(raw))),
            ),
            None => DumpNode::leaf("<invalid-block>"),
        },
        StmtKind::Let => match b.let_stmt(id) {
            Some(l) => DumpNode::with(
                format!("Let {}", resolve(b, l.name)),
                dump_expr_opt(b, l.init).into_iter().collect(),
            ),
            None => DumpNode::leaf("<invalid-let-stmt>"),
        },
        StmtKind::Expr => match b.expr_stmt(id) {
            Some(e) => DumpNode::with("ExprStmt", vec![dump_expr(b, e.expr)]),
            None => DumpNode::leaf("<invalid-expr-stmt>"),
        },
        StmtKind::Signal => match b.signal_stmt(id) {
            Some(s) => DumpNode::with(
                format!("Signal {}", resolve(b, s.name)),
                dump_expr_opt(b, s.init).into_iter().collect(),
            ),
            None => DumpNode::leaf("<invalid-signal>"),
        },
        StmtKind::Return => match b.return_stmt(id) {
            Some(r) => DumpNode::with("Return", dump_expr_opt(b, r.value).into_iter().collect()),
            None => DumpNode::leaf("<invalid-return>"),
        },
        StmtKind::Break => match b.break_stmt(id) {
            Some(brk) => DumpNode::with("Break", dump_expr_opt(b, brk.value).into_iter().collect()),
            None => DumpNode::leaf("<invalid-break>"),
        },
        StmtKind::Continue => DumpNode::leaf("Continue"),
        StmtKind::If => match b.if_stmt(id) {
            Some(i) => {
                let mut children = vec![dump_expr(b, i.cond), dump_stmt(b, i.then_branch)];
                if let Some(else_branch) = dump_stmt_opt(b, i.else_branch) {
                    children.push(else_branch);
                }
                DumpNode::with("If", children)
            }
            None => DumpNode::leaf("<invalid-if>"),
        },
        StmtKind::While => match b.while_stmt(id) {
            Some(w) => DumpNode::with("While", vec![dump_expr(b, w.cond), dump_stmt(b, w.body)]),
            None => DumpNode::leaf("<invalid-while>"),
        },
        StmtKind::ForClassic => match b.for_classic_stmt(id) {
            Some(f) => {
                let mut children = Vec::new();
                if let Some(init) = dump_stmt_opt(b, f.init) {
                    children.push(init);
                }
                if let Some(cond) = dump_expr_opt(b, f.cond) {
                    children.push(cond);
                }
                if let Some(step) = dump_expr_opt(b, f.step) {
                    children.push(step);
                }
                children.push(dump_stmt(b, f.body));
                DumpNode::with("ForClassic", children)
            }
            None => DumpNode::leaf("<invalid-for-classic>"),
        },
        StmtKind::ForIn => match b.for_in_stmt(id) {
            Some(f) => DumpNode::with(
                format!("ForIn {}", resolve(b, f.binding)),
                vec![dump_expr(b, f.iter), dump_stmt(b, f.body)],
            ),
            None => DumpNode::leaf("<invalid-for-in>"),
        },
    }
}

fn dump_expr(b: &Builder, id: ExprID) -> DumpNode {
    let Some(expr) = b.expr(id) else {
        return DumpNode::leaf(format!("<invalid-expr-{}>", id.raw()));
    };
    match expr.kind {
        ExprKind::Ident => match b.ident(id) {
            Some(i) => DumpNode::leaf(format!("Ident {}", resolve(b, i.name))),
            None => DumpNode::leaf("<invalid-ident>"),
        },
        ExprKind::Lit => match b.lit(id) {
            Some(l) => DumpNode::leaf(format!("Lit {}", describe_lit(b, &l.value))),
            None => DumpNode::leaf("<invalid-lit>"),
        },
        ExprKind::Binary => match b.binary(id) {
            Some(bin) => DumpNode::with(
                format!("Binary {}", bin.op.as_symbol()),
                vec![dump_expr(b, bin.left), dump_expr(b, bin.right)],
            ),
            None => DumpNode::leaf("<invalid-binary>"),
        },
        ExprKind::Unary => match b.unary(id) {
            Some(u) => DumpNode::with("Unary", vec![dump_expr(b, u.operand)]),
            None => DumpNode::leaf("<invalid-unary>"),
        },
        ExprKind::Cast => match b.cast(id) {
            Some(c) => {
                let mut children = vec![dump_expr(b, c.expr)];
                if let Some(ty) = dump_type_opt(b, c.ty) {
                    children.push(ty);
                }
                DumpNode::with("Cast", children)
            }
            None => DumpNode::leaf("<invalid-cast>"),
        },
        ExprKind::Call => match b.call(id) {
            Some(c) => {
                let mut children = vec![dump_expr(b, c.callee)];
                children.extend(dump_ids(c.args.ids(), |raw| {
                    dump_expr(b, ExprID::from_raw(raw))
                }));
                DumpNode::with("Call", children)
            }
            None => DumpNode::leaf("<invalid-call>"),
        },
        ExprKind::Index => match b.index(id) {
            Some(i) => DumpNode::with("Index", vec![dump_expr(b, i.receiver), dump_expr(b, i.index)]),
            None => DumpNode::leaf("<invalid-index>"),
        },
        ExprKind::Member => match b.member(id) {
            Some(m) => DumpNode::with(
                format!("Member .{}", resolve(b, m.member)),
                vec![dump_expr(b, m.receiver)],
            ),
            None => DumpNode::leaf("<invalid-member-expr>"),
        },
        ExprKind::TupleIndex => match b.tuple_index(id) {
            Some(t) => DumpNode::with(format!("TupleIndex .{}", t.index), vec![dump_expr(b, t.receiver)]),
            None => DumpNode::leaf("<invalid-tuple-index>"),
        },
        ExprKind::Await => match b.await_expr(id) {
            Some(a) => DumpNode::with("Await", vec![dump_expr(b, a.operand)]),
            None => DumpNode::leaf("<invalid-await>"),
        },
        ExprKind::Ternary => match b.ternary(id) {
            Some(t) => DumpNode::with(
                "Ternary",
                vec![dump_expr(b, t.cond), dump_expr(b, t.then_branch), dump_expr(b, t.else_branch)],
            ),
            None => DumpNode::leaf("<invalid-ternary>"),
        },
        ExprKind::Group => match b.group(id) {
            Some(g) => DumpNode::with("Group", vec![dump_expr(b, g.inner)]),
            None => DumpNode::leaf("<invalid-group>"),
        },
        ExprKind::Tuple => match b.tuple(id) {
            Some(t) => DumpNode::with(
                "Tuple",
                dump_ids(t.elements.ids(), |raw| dump_expr(b, ExprID::from_raw(raw))),
            ),
            None => DumpNode::leaf("<invalid-tuple>"),
        },
        ExprKind::Array => match b.array(id) {
            Some(a) => DumpNode::with(
                "Array",
                dump_ids(a.elements.ids(), |raw| dump_expr(b, ExprID::from_raw(raw))),
            ),
            None => DumpNode::leaf("<invalid-array>"),
        },
        ExprKind::Map => match b.map(id) {
            Some(m) => DumpNode::with(
                "Map",
                b.map_entry(m.entries)
                    .into_iter()
                    .map(|e| DumpNode::with("Entry", vec![dump_expr(b, e.key), dump_expr(b, e.value)]))
                    .collect(),
            ),
            None => DumpNode::leaf("<invalid-map>"),
        },
        ExprKind::RangeLit => match b.range_lit(id) {
            Some(r) => {
                let mut children = Vec::new();
                if let Some(start) = dump_expr_opt(b, r.start) {
                    children.push(start);
                }
                if let Some(end) = dump_expr_opt(b, r.end) {
                    children.push(end);
                }
                let label = if r.inclusive { "RangeLit ..=" } else { "RangeLit .." };
                DumpNode::with(label, children)
            }
            None => DumpNode::leaf("<invalid-range>"),
        },
        ExprKind::Spread => match b.spread(id) {
            Some(s) => DumpNode::with("Spread", vec![dump_expr(b, s.inner)]),
            None => DumpNode::leaf("<invalid-spread>"),
        },
        ExprKind::Task => match b.task(id) {
            Some(t) => DumpNode::with("Task", vec![dump_expr(b, t.body)]),
            None => DumpNode::leaf("<invalid-task>"),
        },
        ExprKind::Spawn => match b.spawn(id) {
            Some(s) => DumpNode::with("Spawn", vec![dump_expr(b, s.body)]),
            None => DumpNode::leaf("<invalid-spawn>"),
        },
        ExprKind::Async => match b.async_expr(id) {
            Some(a) => DumpNode::with("Async", vec![dump_expr(b, a.body)]),
            None => DumpNode::leaf("<invalid-async>"),
        },
        ExprKind::ParallelMap => match b.parallel_map(id) {
            Some(p) => DumpNode::with(
                format!("ParallelMap |{}|", resolve(b, p.binding)),
                vec![dump_expr(b, p.source), dump_expr(b, p.body)],
            ),
            None => DumpNode::leaf("<invalid-parallel-map>"),
        },
        ExprKind::ParallelReduce => match b.parallel_reduce(id) {
            Some(p) => DumpNode::with(
                format!("ParallelReduce |{}, {}|", resolve(b, p.acc_binding), resolve(b, p.item_binding)),
                vec![dump_expr(b, p.source), dump_expr(b, p.init), dump_expr(b, p.body)],
            ),
            None => DumpNode::leaf("<invalid-parallel-reduce>"),
        },
        ExprKind::Compare => match b.compare(id) {
            Some(c) => {
                let mut children = vec![dump_expr(b, c.first)];
                children.extend(c.links.iter().map(|link| dump_expr(b, link.rhs)));
                DumpNode::with("Compare", children)
            }
            None => DumpNode::leaf("<invalid-compare>"),
        },
        ExprKind::Select => match b.select(id) {
            Some(s) => DumpNode::with("Select", dump_arms(b, s.arms)),
            None => DumpNode::leaf("<invalid-select>"),
        },
        ExprKind::Race => match b.race(id) {
            Some(r) => DumpNode::with("Race", dump_arms(b, r.arms)),
            None => DumpNode::leaf("<invalid-race>"),
        },
        ExprKind::Struct => match b.struct_expr(id) {
            Some(s) => DumpNode::with(
                format!("Struct {}", resolve(b, s.type_name)),
                b.field_init(s.fields)
                    .into_iter()
                    .map(|f| DumpNode::with(format!("Field {}", resolve(b, f.name)), vec![dump_expr(b, f.value)]))
                    .collect(),
            ),
            None => DumpNode::leaf("<invalid-struct>"),
        },
        ExprKind::Block => match b.block_expr(id) {
            Some(blk) => {
                let mut children = dump_ids(blk.stmts.ids(), |raw| dump_stmt(b, StmtID::from_raw(raw)));
                if let Some(tail) = dump_expr_opt(b, blk.tail) {
                    children.push(tail);
                }
                DumpNode::with("Block", children)
            }
            None => DumpNode::leaf("<invalid-block-expr>"),
        },
    }
}

fn dump_arms(b: &Builder, arms: IdRange) -> Vec<DumpNode> {
    arms.ids()
        .filter_map(|raw| b.concurrent_arm(raw))
        .map(|arm| DumpNode::with(format!("Arm {}", resolve(b, arm.binding)), vec![dump_expr(b, arm.body)]))
        .collect()
}

fn describe_lit(b: &Builder, value: &LitValue) -> String {
    match value {
        LitValue::Int { raw } => resolve(b, *raw).to_string(),
        LitValue::Float { raw } => resolve(b, *raw).to_string(),
        LitValue::Bool(v) => v.to_string(),
        LitValue::Str(s) => format!("{:?}", resolve(b, *s)),
        LitValue::Char(c) => format!("{c:?}"),
    }
}

fn dump_type(b: &Builder, id: TypeID) -> DumpNode {
    let Some(ty) = b.ty(id) else {
        return DumpNode::leaf(format!("<invalid-type-{}>", id.raw()));
    };
    match ty.kind {
        TypeExprKind::Path => match b.path_type(id) {
            Some(p) => DumpNode::leaf(format!("Type {}", dump_path(b, &p.segments))),
            None => DumpNode::leaf("<invalid-path-type>"),
        },
        TypeExprKind::UnaryOwn | TypeExprKind::UnaryRef | TypeExprKind::UnaryRefMut | TypeExprKind::UnaryPtr => {
            match b.unary_type(id) {
                Some(u) => DumpNode::with(format!("{:?}", ty.kind), vec![dump_type(b, u.inner)]),
                None => DumpNode::leaf("<invalid-unary-type>"),
            }
        }
        TypeExprKind::ArraySized => match b.array_sized_type(id) {
            Some(a) => {
                let mut children = vec![dump_type(b, a.element)];
                children.push(dump_expr(b, a.size));
                DumpNode::with("ArraySized", children)
            }
            None => DumpNode::leaf("<invalid-array-sized>"),
        },
        TypeExprKind::ArraySlice => match b.array_slice_type(id) {
            Some(a) => DumpNode::with("ArraySlice", vec![dump_type(b, a.element)]),
            None => DumpNode::leaf("<invalid-array-slice>"),
        },
        TypeExprKind::Tuple => match b.tuple_type(id) {
            Some(t) => DumpNode::with(
                "TupleType",
                dump_ids(t.elements.ids(), |raw| dump_type(b, TypeID::from_raw(raw))),
            ),
            None => DumpNode::leaf("<invalid-tuple-type>"),
        },
        TypeExprKind::Fn => match b.fn_type(id) {
            Some(f) => {
                let mut children = dump_ids(f.params.ids(), |raw| dump_type(b, TypeID::from_raw(raw)));
                if let Some(ret) = dump_type_opt(b, f.ret) {
                    children.push(ret);
                }
                DumpNode::with("FnType", children)
            }
            None => DumpNode::leaf("<invalid-fn-type>"),
        },
        TypeExprKind::Const => match b.const_type(id) {
            Some(c) => DumpNode::with(format!("Const {}", resolve(b, c.name)), vec![dump_type(b, c.ty)]),
            None => DumpNode::leaf("<invalid-const-type>"),
        },
    }
}

// ---- Renderers ---------------------------------------------------------

/// Pretty indented tree: `├─`/`└─` guides, one node per line.
fn render_pretty(root: &DumpNode) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", root.label);
    render_children(&root.children, "", &mut out);
    out
}

fn render_children(children: &[DumpNode], prefix: &str, out: &mut String) {
    for (i, child) in children.iter().enumerate() {
        let last = i + 1 == children.len();
        let connector = if last { "└─ " } else { "├─ " };
        let _ = writeln!(out, "{prefix}{connector}{}", child.label);
        let child_prefix = format!("{prefix}{}", if last { "   " } else { "│  " });
        render_children(&child.children, &child_prefix, out);
    }
}

/// Pretty-print an entire file's AST as an indented `├─`/`└─` tree.
pub fn pretty_tree(b: &Builder, file: crate::id::FileID) -> String {
    render_pretty(&file_node(b, file))
}

/// Compact single-line-per-node tree using plain indentation, no guides —
/// cheaper to diff and grep than the pretty tree.
pub fn compact_tree(b: &Builder, file: crate::id::FileID) -> String {
    let root = file_node(b, file);
    let mut out = String::new();
    render_compact(&root, 0, &mut out);
    out
}

fn render_compact(node: &DumpNode, depth: usize, out: &mut String) {
    let _ = writeln!(out, "{}{}", "  ".repeat(depth), node.label);
    for child in &node.children {
        render_compact(child, depth + 1, out);
    }
}

/// Hand-rolled JSON dump (no `serde`, matching the diagnostic renderers'
/// JSON emitter): `{"label": "...", "children": [...]}`.
pub fn json_dump(b: &Builder, file: crate::id::FileID) -> String {
    let root = file_node(b, file);
    let mut out = String::new();
    render_json(&root, &mut out);
    out
}

fn render_json(node: &DumpNode, out: &mut String) {
    out.push('{');
    out.push_str("\"label\":");
    json_escape_into(&node.label, out);
    out.push_str(",\"children\":[");
    for (i, child) in node.children.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        render_json(child, out);
    }
    out.push_str("]}");
}

fn json_escape_into(s: &str, out: &mut String) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Hints;
    use crate::span::Span;

    fn sample(b: &mut Builder) -> crate::id::FileID {
        let file = b.new_file(Span::DUMMY);
        let start = b.start_items();
        let path = vec![PathSegment {
            name: b.intern("core"),
            span: Span::DUMMY,
            generic_args: IdRange::EMPTY,
        }];
        b.new_import(Span::DUMMY, path, None, IdRange::EMPTY);
        let items = b.finish_items(start);
        b.set_file_items(file, items);
        file
    }

    #[test]
    fn pretty_tree_has_root_and_import() {
        let mut b = Builder::new(Hints::default());
        let file = sample(&mut b);
        let text = pretty_tree(&b, file);
        assert!(text.starts_with("File\n"));
        assert!(text.contains("Import core"));
    }

    #[test]
    fn compact_tree_indents_by_depth() {
        let mut b = Builder::new(Hints::default());
        let file = sample(&mut b);
        let text = compact_tree(&b, file);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "File");
        assert!(lines[1].starts_with("  Import"));
    }

    #[test]
    fn json_dump_is_well_formed_braces() {
        let mut b = Builder::new(Hints::default());
        let file = sample(&mut b);
        let text = json_dump(&b, file);
        assert!(text.starts_with("{\"label\":\"File\""));
        assert_eq!(text.matches('{').count(), text.matches('}').count());
    }

    #[test]
    fn invalid_file_id_renders_placeholder() {
        let b = Builder::new(Hints::default());
        let text = pretty_tree(&b, crate::id::FileID::from_raw(99));
        assert_eq!(text.trim(), "<invalid-file>");
    }
}
