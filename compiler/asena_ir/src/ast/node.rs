//! Named-field view of the tree.
//!
//! The typed nodes are convenient for the parser and for compilers, but
//! editors and formatters want one uniform shape to walk: a kind, a span
//! and named fields. [`TreeBuilder`] produces that view. Fields may repeat
//! (`statement`, `attribute`, ...) and keep source order.

use std::fmt::Write;

use asena_stack::ensure_sufficient_stack;

use super::{
    ArgList, AstArena, Attribute, Block, Body, Clause, Constructor, ConstructorKind,
    ConstructorParam, Decl, DeclKind, ExprId, ExprKind, Ident, Item, Literal, Param, Path,
    PatternId, PatternKind, PiDomain, Signature, SourceFile, StmtId, StmtKind, TypeBody,
};
use crate::{NumBase, NumberLiteral, Span, StringInterner};

/// A node of the uniform view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntaxNode {
    pub kind: &'static str,
    pub span: Span,
    pub fields: Vec<(&'static str, NodeChild)>,
}

/// A field value: a nested node or a leaf token's text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeChild {
    Node(SyntaxNode),
    Token { text: String, span: Span },
}

impl NodeChild {
    pub fn span(&self) -> Span {
        match self {
            NodeChild::Node(node) => node.span,
            NodeChild::Token { span, .. } => *span,
        }
    }
}

impl SyntaxNode {
    fn new(kind: &'static str, span: Span) -> Self {
        SyntaxNode {
            kind,
            span,
            fields: Vec::new(),
        }
    }

    fn node(&mut self, field: &'static str, node: SyntaxNode) {
        self.fields.push((field, NodeChild::Node(node)));
    }

    fn token(&mut self, field: &'static str, text: impl Into<String>, span: Span) {
        self.fields.push((
            field,
            NodeChild::Token {
                text: text.into(),
                span,
            },
        ));
    }

    /// First child stored under `field`.
    pub fn child(&self, field: &str) -> Option<&NodeChild> {
        self.fields.iter().find(|(f, _)| *f == field).map(|(_, c)| c)
    }

    /// First child node stored under `field`.
    pub fn child_node(&self, field: &str) -> Option<&SyntaxNode> {
        self.fields.iter().find_map(|(f, c)| match c {
            NodeChild::Node(n) if *f == field => Some(n),
            _ => None,
        })
    }

    /// Every child node stored under `field`, in source order.
    pub fn children<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a SyntaxNode> + 'a {
        self.fields.iter().filter_map(move |(f, c)| match c {
            NodeChild::Node(n) if *f == field => Some(n),
            _ => None,
        })
    }

    /// Text of the first token stored under `field`.
    pub fn token_text(&self, field: &str) -> Option<&str> {
        self.fields.iter().find_map(|(f, c)| match c {
            NodeChild::Token { text, .. } if *f == field => Some(text.as_str()),
            _ => None,
        })
    }

    /// Pre-order traversal; `visit` receives each node and its depth.
    pub fn walk(&self, visit: &mut impl FnMut(&SyntaxNode, usize)) {
        self.walk_at(0, visit);
    }

    fn walk_at(&self, depth: usize, visit: &mut impl FnMut(&SyntaxNode, usize)) {
        visit(self, depth);
        for (_, child) in &self.fields {
            if let NodeChild::Node(node) = child {
                ensure_sufficient_stack(|| node.walk_at(depth + 1, visit));
            }
        }
    }

    /// Span-free S-expression of the node: kinds, field names and token
    /// texts. Two trees have the same shape exactly when their shapes are
    /// equal strings.
    pub fn shape(&self) -> String {
        let mut out = String::new();
        self.write_shape(&mut out);
        out
    }

    fn write_shape(&self, out: &mut String) {
        out.push('(');
        out.push_str(self.kind);
        for (field, child) in &self.fields {
            out.push(' ');
            out.push_str(field);
            out.push(':');
            match child {
                NodeChild::Node(node) => ensure_sufficient_stack(|| node.write_shape(out)),
                NodeChild::Token { text, .. } => {
                    let _ = write!(out, "{text:?}");
                }
            }
        }
        out.push(')');
    }
}

/// Children are detached onto a heap stack so dropping a deeply nested
/// view does not recurse.
impl Drop for SyntaxNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.fields);
        while let Some((_, child)) = pending.pop() {
            if let NodeChild::Node(mut node) = child {
                pending.append(&mut node.fields);
            }
        }
    }
}

/// Builds [`SyntaxNode`] views from the typed tree.
pub struct TreeBuilder<'a> {
    arena: &'a AstArena,
    interner: &'a StringInterner,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(arena: &'a AstArena, interner: &'a StringInterner) -> Self {
        TreeBuilder { arena, interner }
    }

    /// View of a whole file.
    ///
    /// The builder has no source text, so a shebang line shows up as a
    /// `shebang` token spelled `#!` whose span covers the entire line.
    pub fn source_file(&self, file: &SourceFile) -> SyntaxNode {
        let mut node = SyntaxNode::new("SourceFile", file.span);
        if let Some(span) = file.shebang {
            node.token("shebang", "#!", span);
        }
        for item in &file.items {
            match item {
                Item::Decl(decl) => node.node("declaration", self.decl(decl)),
                Item::Stmt(stmt) => node.node("statement", self.stmt(*stmt)),
            }
        }
        node
    }

    pub fn decl(&self, decl: &Decl) -> SyntaxNode {
        let mut node = SyntaxNode::new(decl.kind.kind_name(), decl.span);
        for doc in &decl.docs {
            node.token("doc", self.interner.lookup(doc.content), doc.span);
        }
        for attr in &decl.attrs {
            node.node("attribute", self.attribute(attr));
        }
        match &decl.kind {
            DeclKind::Using(path) => node.node("path", self.path(path)),
            DeclKind::Command { name, args } => {
                node.node("name", self.path(name));
                for &arg in args {
                    node.node("argument", self.expr(arg));
                }
            }
            DeclKind::Type(ty) => {
                if let Some((vis, span)) = ty.visibility {
                    node.token("visibility", vis.as_str(), span);
                }
                node.node("name", self.path(&ty.name));
                self.arg_lists(&mut node, &ty.arg_lists);
                if let Some(clause_type) = ty.clause_type {
                    node.node("type", self.expr(clause_type));
                }
                if let Some(body) = &ty.body {
                    node.node("body", self.type_body(body));
                }
            }
            DeclKind::Signature(sig) => self.signature_fields(&mut node, sig),
            DeclKind::Clause(clause) => self.clause_fields(&mut node, clause),
            DeclKind::Error => {}
        }
        node
    }

    fn attribute(&self, attr: &Attribute) -> SyntaxNode {
        let mut node = SyntaxNode::new("Attribute", attr.span);
        node.node("path", self.path(&attr.path));
        for &arg in attr.args.iter().flatten() {
            node.node("argument", self.expr(arg));
        }
        node
    }

    fn arg_lists(&self, node: &mut SyntaxNode, lists: &[ArgList]) {
        for list in lists {
            node.node("arguments", self.arg_list(list));
        }
    }

    fn arg_list(&self, list: &ArgList) -> SyntaxNode {
        let kind = match list.kind {
            super::ArgListKind::Explicit => "ExplicitArguments",
            super::ArgListKind::Implicit => "ImplicitArguments",
        };
        let mut node = SyntaxNode::new(kind, list.span);
        for param in &list.params {
            node.node("parameter", self.param(param));
        }
        node
    }

    fn type_body(&self, body: &TypeBody) -> SyntaxNode {
        let mut node = SyntaxNode::new("Body", body.span);
        for ctor in &body.constructors {
            node.node("constructor", self.constructor(ctor));
        }
        for method in &body.methods {
            let mut sig = SyntaxNode::new("Signature", method.span);
            self.signature_fields(&mut sig, method);
            node.node("method", sig);
        }
        node
    }

    fn constructor(&self, ctor: &Constructor) -> SyntaxNode {
        match &ctor.kind {
            ConstructorKind::Typed(ty) => {
                let mut node = SyntaxNode::new("TypedConstructor", ctor.span);
                node.node("name", self.path(&ctor.name));
                node.node("type", self.expr(*ty));
                node
            }
            ConstructorKind::Function(params) => {
                let mut node = SyntaxNode::new("FunctionConstructor", ctor.span);
                node.node("name", self.path(&ctor.name));
                for param in params.iter().flatten() {
                    match param {
                        ConstructorParam::Positional(ty) => node.node("parameter", self.expr(*ty)),
                        ConstructorParam::Named { name, ty } => {
                            let span = name.span.merge(self.arena.expr(*ty).span);
                            let mut named = SyntaxNode::new("NamedParameter", span);
                            self.ident_token(&mut named, "name", *name);
                            named.node("type", self.expr(*ty));
                            node.node("parameter", named);
                        }
                    }
                }
                node
            }
        }
    }

    fn signature_fields(&self, node: &mut SyntaxNode, sig: &Signature) {
        node.node("name", self.path(&sig.name));
        self.arg_lists(node, &sig.arg_lists);
        if let Some(ty) = sig.clause_type {
            node.node("type", self.expr(ty));
        }
        if let Some(block) = &sig.value {
            node.node("value", self.block(block));
        }
    }

    fn clause_fields(&self, node: &mut SyntaxNode, clause: &Clause) {
        node.node("name", self.path(&clause.name));
        for &pattern in &clause.patterns {
            node.node("pattern", self.pattern(pattern));
        }
        if let Some(value) = clause.value {
            node.node("value", self.expr(value));
        }
    }

    pub fn path(&self, path: &Path) -> SyntaxNode {
        let mut node = SyntaxNode::new("Path", path.span);
        for &segment in path.segments() {
            self.ident_token(&mut node, "segment", segment);
        }
        node
    }

    fn ident_token(&self, node: &mut SyntaxNode, field: &'static str, ident: Ident) {
        node.token(field, self.interner.lookup(ident.name), ident.span);
    }

    fn param(&self, param: &Param) -> SyntaxNode {
        let mut node = SyntaxNode::new("Parameter", param.span);
        node.node("pattern", self.pattern(param.pattern));
        if let Some(ty) = param.ty {
            node.node("type", self.expr(ty));
        }
        node
    }

    pub fn block(&self, block: &Block) -> SyntaxNode {
        let mut node = SyntaxNode::new("Block", block.span);
        for &stmt in &block.stmts {
            node.node("statement", self.stmt(stmt));
        }
        node
    }

    fn body(&self, body: &Body) -> SyntaxNode {
        match body {
            Body::Block(block) => self.block(block),
            Body::Expr(expr) => self.expr(*expr),
        }
    }

    pub fn stmt(&self, id: StmtId) -> SyntaxNode {
        ensure_sufficient_stack(|| self.stmt_inner(id))
    }

    fn stmt_inner(&self, id: StmtId) -> SyntaxNode {
        let stmt = self.arena.stmt(id);
        let mut node = SyntaxNode::new(stmt.kind.kind_name(), stmt.span);
        match &stmt.kind {
            StmtKind::Let { pattern, value } | StmtKind::Ask { pattern, value } => {
                node.node("pattern", self.pattern(*pattern));
                node.node("value", self.expr(*value));
            }
            StmtKind::If(if_stmt) => {
                node.node("condition", self.expr(if_stmt.cond));
                node.node("then", self.body(&if_stmt.then_branch));
                if let Some(else_branch) = &if_stmt.else_branch {
                    node.node("else", self.body(else_branch));
                }
            }
            StmtKind::Expr(expr) => node.node("expression", self.expr(*expr)),
            StmtKind::Error => {}
        }
        node
    }

    pub fn pattern(&self, id: PatternId) -> SyntaxNode {
        ensure_sufficient_stack(|| self.pattern_inner(id))
    }

    fn pattern_inner(&self, id: PatternId) -> SyntaxNode {
        let pattern = self.arena.pattern(id);
        let mut node = SyntaxNode::new(pattern.kind.kind_name(), pattern.span);
        match &pattern.kind {
            PatternKind::Cons { path, args } => {
                node.node("constructor", self.path(path));
                for &arg in args {
                    node.node("pattern", self.pattern(arg));
                }
            }
            PatternKind::Rest => {}
            PatternKind::Literal(lit) => {
                self.literal_fields(&mut node, "literal", *lit, pattern.span);
            }
        }
        node
    }

    pub fn expr(&self, id: ExprId) -> SyntaxNode {
        ensure_sufficient_stack(|| self.expr_inner(id))
    }

    fn expr_inner(&self, id: ExprId) -> SyntaxNode {
        let expr = self.arena.expr(id);
        let mut node = SyntaxNode::new(expr.kind.kind_name(), expr.span);
        match &expr.kind {
            ExprKind::Literal(lit) => self.literal_fields(&mut node, "value", *lit, expr.span),
            ExprKind::Ident(name) => node.token("name", self.interner.lookup(*name), expr.span),
            ExprKind::Path(path) => node.node("path", self.path(path)),
            ExprKind::Tuple {
                elements,
                trailing_comma,
            } => {
                for &element in elements {
                    node.node("element", self.expr(element));
                }
                if *trailing_comma {
                    let close = expr.span.end.saturating_sub(1);
                    node.token("trailing_comma", ",", Span::point(close));
                }
            }
            ExprKind::Array(elements) => {
                for &element in elements {
                    node.node("element", self.expr(element));
                }
            }
            ExprKind::If(if_expr) => {
                node.node("condition", self.expr(if_expr.cond));
                node.node("then", self.body(&if_expr.then_branch));
                node.node("else", self.body(&if_expr.else_branch));
            }
            ExprKind::Match { scrutinee, arms } => {
                node.node("scrutinee", self.expr(*scrutinee));
                for arm in arms {
                    let mut arm_node = SyntaxNode::new("Arm", arm.span);
                    arm_node.node("pattern", self.pattern(arm.pattern));
                    arm_node.node("body", self.body(&arm.body));
                    node.node("arm", arm_node);
                }
            }
            ExprKind::Return(value) => {
                if let Some(value) = value {
                    node.node("value", self.expr(*value));
                }
            }
            ExprKind::App {
                callee,
                args,
                block,
            } => {
                node.node("callee", self.expr(*callee));
                for &arg in args {
                    node.node("argument", self.expr(arg));
                }
                if let Some(block) = block {
                    node.node("block", self.block(block));
                }
            }
            ExprKind::TypeApp { callee, args } => {
                node.node("callee", self.expr(*callee));
                for &arg in args {
                    node.node("argument", self.expr(arg));
                }
            }
            ExprKind::Lambda { params, body } => {
                for param in params {
                    node.node("parameter", self.param(param));
                }
                node.node("body", self.expr(*body));
            }
            ExprKind::Pi { domain, codomain } => {
                match domain {
                    PiDomain::Bare(domain) => node.node("domain", self.expr(*domain)),
                    PiDomain::Params(params) => {
                        for param in params {
                            node.node("parameter", self.param(param));
                        }
                    }
                }
                node.node("codomain", self.expr(*codomain));
            }
            ExprKind::Sigma { params, codomain } => {
                for param in params {
                    node.node("parameter", self.param(param));
                }
                node.node("codomain", self.expr(*codomain));
            }
            ExprKind::Ann { value, ty } => {
                node.node("value", self.expr(*value));
                node.node("type", self.expr(*ty));
            }
            ExprKind::Binary { lhs, op, rhs } => {
                node.node("lhs", self.expr(*lhs));
                node.token("operator", self.interner.lookup(op.spelling), op.span);
                node.node("rhs", self.expr(*rhs));
            }
        }
        node
    }

    /// A literal's text under `field`. A number with a base prefix or a
    /// suffix also gets its parts as `base`, `digits` and `suffix` tokens,
    /// each present only when spelled.
    fn literal_fields(
        &self,
        node: &mut SyntaxNode,
        field: &'static str,
        lit: Literal,
        span: Span,
    ) {
        node.token(field, self.literal_text(lit), span);
        let Literal::Number(num) = lit else {
            return;
        };
        if num.base == NumBase::Decimal && num.suffix.is_none() {
            return;
        }
        if num.base != NumBase::Decimal {
            node.token("base", num.base.prefix(), span);
        }
        node.token("digits", self.interner.lookup(num.digits), span);
        if let Some(suffix) = num.suffix {
            node.token("suffix", suffix.as_str(), span);
        }
    }

    /// Literal text as shown in the view. Strings and characters are
    /// quoted with Rust debug escaping.
    pub fn literal_text(&self, lit: Literal) -> String {
        match lit {
            Literal::String(name) => format!("{:?}", self.interner.lookup(name)),
            Literal::Char(c) => format!("{c:?}"),
            Literal::Number(num) => self.number_text(num),
        }
    }

    pub fn number_text(&self, num: NumberLiteral) -> String {
        let mut text = String::from(num.base.prefix());
        text.push_str(self.interner.lookup(num.digits));
        if let Some(suffix) = num.suffix {
            text.push_str(suffix.as_str());
        }
        text
    }
}
