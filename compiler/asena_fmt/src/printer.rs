//! Tree printer.
//!
//! Prints each node the way the parser reads it back: application
//! arguments separated by spaces, operators surrounded by spaces, blocks
//! and bodies broken over indented lines. Grouping parentheses already
//! exist in the tree as one-element tuples, so the only parentheses added
//! here wrap constructor patterns used as arguments.

use asena_ir::ast::{
    ArgList, ArgListKind, AstArena, Attribute, Block, Body, Clause, Constructor, ConstructorKind,
    ConstructorParam, Decl, DeclKind, ExprId, ExprKind, Item, Literal, Param, Path, PatternId,
    PatternKind, PiDomain, Signature, SourceFile, StmtId, StmtKind, TypeBody, TypeDecl,
    TypeDeclKind,
};
use asena_ir::{Name, NumberLiteral, StringInterner};
use asena_stack::ensure_sufficient_stack;

use crate::context::FormatContext;
use crate::emitter::Emitter;

pub struct Printer<'a, E: Emitter> {
    arena: &'a AstArena,
    interner: &'a StringInterner,
    /// Only consulted for the shebang line, which the tree keeps as a span.
    source: &'a str,
    ctx: FormatContext<E>,
}

impl<'a, E: Emitter> Printer<'a, E> {
    pub fn new(
        arena: &'a AstArena,
        interner: &'a StringInterner,
        source: &'a str,
        ctx: FormatContext<E>,
    ) -> Self {
        Printer {
            arena,
            interner,
            source,
            ctx,
        }
    }

    pub fn into_context(self) -> FormatContext<E> {
        self.ctx
    }

    /// One item per line. Error placeholders print nothing.
    pub fn source_file(&mut self, file: &SourceFile) {
        if let Some(span) = file.shebang {
            let line = self.source.get(span.to_range()).unwrap_or("#!");
            self.ctx.emit(line.trim_end());
            self.ctx.emit_newline();
        }
        for item in &file.items {
            match item {
                Item::Decl(decl) => {
                    if matches!(decl.kind, DeclKind::Error) {
                        continue;
                    }
                    self.decl(decl);
                }
                Item::Stmt(stmt) => {
                    if matches!(self.arena.stmt(*stmt).kind, StmtKind::Error) {
                        continue;
                    }
                    self.stmt(*stmt);
                }
            }
            self.ctx.emit_newline();
        }
    }

    // === Declarations ===

    pub fn decl(&mut self, decl: &Decl) {
        for doc in &decl.docs {
            self.ctx.emit("//! ");
            self.ctx.emit(self.interner.lookup(doc.content));
            self.ctx.emit_newline();
        }
        for attr in &decl.attrs {
            self.attribute(attr);
            self.ctx.emit_newline();
        }
        match &decl.kind {
            DeclKind::Using(path) => {
                self.ctx.emit("use ");
                self.path(path);
            }
            DeclKind::Command { name, args } => {
                self.ctx.emit("#");
                self.path(name);
                for &arg in args {
                    self.ctx.emit_space();
                    self.expr(arg);
                }
            }
            DeclKind::Type(ty) => self.type_decl(ty),
            DeclKind::Signature(sig) => self.signature(sig),
            DeclKind::Clause(clause) => self.clause(clause),
            DeclKind::Error => {}
        }
    }

    fn attribute(&mut self, attr: &Attribute) {
        self.ctx.emit("@");
        self.path(&attr.path);
        if let Some(args) = &attr.args {
            self.ctx.emit("(");
            self.comma_separated(args, |p, &id| p.expr(id));
            self.ctx.emit(")");
        }
    }

    fn type_decl(&mut self, ty: &TypeDecl) {
        if let Some((vis, _)) = ty.visibility {
            self.ctx.emit(vis.as_str());
            self.ctx.emit_space();
        }
        self.ctx.emit(ty.kind.keyword());
        self.ctx.emit_space();
        self.path(&ty.name);
        self.arg_lists(&ty.arg_lists);
        self.clause_type(ty.clause_type);
        if let Some(body) = &ty.body {
            self.ctx.emit_space();
            self.type_body(ty.kind, body);
        }
    }

    /// Constructors end in `,` except the last; a `;` line opens the
    /// methods. Trait bodies hold methods only.
    fn type_body(&mut self, kind: TypeDeclKind, body: &TypeBody) {
        if body.constructors.is_empty() && body.methods.is_empty() {
            self.ctx.emit("{}");
            return;
        }
        self.ctx.emit("{");
        self.ctx.indent();
        self.ctx.emit_newline();
        let count = body.constructors.len();
        for (i, ctor) in body.constructors.iter().enumerate() {
            self.constructor(ctor);
            if i + 1 < count {
                self.ctx.emit(",");
            }
            self.ctx.emit_newline();
        }
        if kind != TypeDeclKind::Trait && !body.methods.is_empty() {
            self.ctx.emit(";");
            self.ctx.emit_newline();
        }
        for method in &body.methods {
            self.signature(method);
            self.ctx.emit_newline();
        }
        self.ctx.dedent();
        self.ctx.emit("}");
    }

    fn constructor(&mut self, ctor: &Constructor) {
        self.path(&ctor.name);
        match &ctor.kind {
            ConstructorKind::Typed(ty) => {
                self.ctx.emit(" : ");
                self.expr(*ty);
            }
            ConstructorKind::Function(None) => {}
            ConstructorKind::Function(Some(params)) => {
                self.ctx.emit("(");
                self.comma_separated(params, |p, param| match param {
                    ConstructorParam::Positional(ty) => p.expr(*ty),
                    ConstructorParam::Named { name, ty } => {
                        p.name(name.name);
                        p.ctx.emit(": ");
                        p.expr(*ty);
                    }
                });
                self.ctx.emit(")");
            }
        }
    }

    fn signature(&mut self, sig: &Signature) {
        self.path(&sig.name);
        self.arg_lists(&sig.arg_lists);
        self.clause_type(sig.clause_type);
        if let Some(block) = &sig.value {
            self.ctx.emit_space();
            self.block(block);
        }
    }

    /// The value, when present, starts on the line of the `=`.
    fn clause(&mut self, clause: &Clause) {
        self.path(&clause.name);
        for &pattern in &clause.patterns {
            self.ctx.emit_space();
            self.atomic_pattern(pattern);
        }
        self.ctx.emit(" =");
        if let Some(value) = clause.value {
            self.ctx.emit_space();
            self.expr(value);
        }
    }

    fn arg_lists(&mut self, lists: &[ArgList]) {
        for list in lists {
            let (open, close) = match list.kind {
                ArgListKind::Explicit => ("(", ")"),
                ArgListKind::Implicit => ("[", "]"),
            };
            self.ctx.emit_space();
            self.ctx.emit(open);
            self.comma_separated(&list.params, Self::param);
            self.ctx.emit(close);
        }
    }

    fn clause_type(&mut self, ty: Option<ExprId>) {
        if let Some(ty) = ty {
            self.ctx.emit(" : ");
            self.expr(ty);
        }
    }

    fn param(&mut self, param: &Param) {
        self.pattern(param.pattern);
        if let Some(ty) = param.ty {
            self.ctx.emit(": ");
            self.expr(ty);
        }
    }

    // === Statements ===

    pub fn block(&mut self, block: &Block) {
        if block.stmts.is_empty() {
            self.ctx.emit("{}");
            return;
        }
        self.ctx.emit("{");
        self.ctx.indent();
        for &stmt in &block.stmts {
            if matches!(self.arena.stmt(stmt).kind, StmtKind::Error) {
                continue;
            }
            self.ctx.emit_newline();
            self.stmt(stmt);
        }
        self.ctx.dedent();
        self.ctx.emit_newline();
        self.ctx.emit("}");
    }

    pub fn stmt(&mut self, id: StmtId) {
        ensure_sufficient_stack(|| self.stmt_inner(id));
    }

    fn stmt_inner(&mut self, id: StmtId) {
        let stmt = self.arena.stmt(id);
        match &stmt.kind {
            StmtKind::Let { pattern, value } => {
                self.ctx.emit("let ");
                self.pattern(*pattern);
                self.ctx.emit(" = ");
                self.expr(*value);
            }
            StmtKind::If(if_stmt) => {
                self.if_head(if_stmt.cond, &if_stmt.then_branch);
                if let Some(else_branch) = &if_stmt.else_branch {
                    self.else_branch(else_branch);
                }
            }
            StmtKind::Ask { pattern, value } => {
                self.pattern(*pattern);
                self.ctx.emit(" <- ");
                self.expr(*value);
            }
            StmtKind::Expr(expr) => self.expr(*expr),
            StmtKind::Error => {}
        }
    }

    /// `if cond { ... }` or `if cond then expr`.
    fn if_head(&mut self, cond: ExprId, then_branch: &Body) {
        self.ctx.emit("if ");
        self.expr(cond);
        match then_branch {
            Body::Block(block) => {
                self.ctx.emit_space();
                self.block(block);
            }
            Body::Expr(expr) => {
                self.ctx.emit(" then ");
                self.expr(*expr);
            }
        }
    }

    fn else_branch(&mut self, body: &Body) {
        self.ctx.emit(" else ");
        self.body(body);
    }

    fn body(&mut self, body: &Body) {
        match body {
            Body::Block(block) => self.block(block),
            Body::Expr(expr) => self.expr(*expr),
        }
    }

    // === Patterns ===

    pub fn pattern(&mut self, id: PatternId) {
        ensure_sufficient_stack(|| self.pattern_inner(id));
    }

    fn pattern_inner(&mut self, id: PatternId) {
        match &self.arena.pattern(id).kind {
            PatternKind::Cons { path, args } => {
                self.path(path);
                for &arg in args {
                    self.ctx.emit_space();
                    self.atomic_pattern(arg);
                }
            }
            PatternKind::Rest => self.ctx.emit(".."),
            PatternKind::Literal(lit) => self.literal(*lit),
        }
    }

    /// A pattern in argument position; constructor applications need
    /// parentheses there.
    fn atomic_pattern(&mut self, id: PatternId) {
        match &self.arena.pattern(id).kind {
            PatternKind::Cons { args, .. } if !args.is_empty() => {
                self.ctx.emit("(");
                self.pattern(id);
                self.ctx.emit(")");
            }
            _ => self.pattern(id),
        }
    }

    // === Expressions ===

    pub fn expr(&mut self, id: ExprId) {
        ensure_sufficient_stack(|| self.expr_inner(id));
    }

    fn expr_inner(&mut self, id: ExprId) {
        match &self.arena.expr(id).kind {
            ExprKind::Literal(lit) => self.literal(*lit),
            ExprKind::Ident(name) => self.name(*name),
            ExprKind::Path(path) => self.path(path),
            ExprKind::Tuple {
                elements,
                trailing_comma,
            } => {
                self.ctx.emit("(");
                self.comma_separated(elements, |p, &id| p.expr(id));
                if *trailing_comma {
                    self.ctx.emit(",");
                }
                self.ctx.emit(")");
            }
            ExprKind::Array(elements) => {
                self.ctx.emit("[");
                self.comma_separated(elements, |p, &id| p.expr(id));
                self.ctx.emit("]");
            }
            ExprKind::If(if_expr) => {
                self.if_head(if_expr.cond, &if_expr.then_branch);
                self.else_branch(&if_expr.else_branch);
            }
            ExprKind::Match { scrutinee, arms } => {
                self.ctx.emit("match ");
                self.expr(*scrutinee);
                if arms.is_empty() {
                    self.ctx.emit(" {}");
                    return;
                }
                self.ctx.emit(" {");
                self.ctx.indent();
                for arm in arms {
                    self.ctx.emit_newline();
                    self.pattern(arm.pattern);
                    self.ctx.emit(" => ");
                    self.body(&arm.body);
                    self.ctx.emit(",");
                }
                self.ctx.dedent();
                self.ctx.emit_newline();
                self.ctx.emit("}");
            }
            ExprKind::Return(value) => {
                self.ctx.emit("return");
                if let Some(value) = value {
                    self.ctx.emit_space();
                    self.expr(*value);
                }
            }
            ExprKind::App {
                callee,
                args,
                block,
            } => {
                self.expr(*callee);
                for &arg in args {
                    self.ctx.emit_space();
                    self.expr(arg);
                }
                if let Some(block) = block {
                    self.ctx.emit_space();
                    self.block(block);
                }
            }
            ExprKind::TypeApp { callee, args } => {
                self.expr(*callee);
                for &arg in args {
                    self.ctx.emit_space();
                    self.expr(arg);
                }
            }
            ExprKind::Lambda { params, body } => {
                self.ctx.emit("|");
                self.comma_separated(params, Self::param);
                self.ctx.emit("| ");
                self.expr(*body);
            }
            ExprKind::Pi { domain, codomain } => {
                match domain {
                    PiDomain::Bare(domain) => self.expr(*domain),
                    PiDomain::Params(params) => {
                        self.ctx.emit("(");
                        self.comma_separated(params, Self::param);
                        self.ctx.emit(")");
                    }
                }
                self.ctx.emit(" -> ");
                self.expr(*codomain);
            }
            ExprKind::Sigma { params, codomain } => {
                self.ctx.emit("[");
                self.comma_separated(params, Self::param);
                self.ctx.emit("] -> ");
                self.expr(*codomain);
            }
            ExprKind::Ann { value, ty } => {
                self.expr(*value);
                self.ctx.emit(" : ");
                self.expr(*ty);
            }
            ExprKind::Binary { lhs, op, rhs } => {
                self.expr(*lhs);
                self.ctx.emit_space();
                self.ctx.emit(self.interner.lookup(op.spelling));
                self.ctx.emit_space();
                self.expr(*rhs);
            }
        }
    }

    // === Leaves ===

    fn literal(&mut self, lit: Literal) {
        match lit {
            Literal::String(name) => {
                let text = quote(self.interner.lookup(name), '"');
                self.ctx.emit(&text);
            }
            Literal::Char(c) => {
                let mut buf = [0u8; 4];
                let text = quote(c.encode_utf8(&mut buf), '\'');
                self.ctx.emit(&text);
            }
            Literal::Number(num) => self.number(num),
        }
    }

    fn number(&mut self, num: NumberLiteral) {
        self.ctx.emit(num.base.prefix());
        self.ctx.emit(self.interner.lookup(num.digits));
        if let Some(suffix) = num.suffix {
            self.ctx.emit(suffix.as_str());
        }
    }

    /// A name; symbolic names get their backtick back.
    fn name(&mut self, name: Name) {
        let text = self.interner.lookup(name);
        if !text.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_' || c == '\'') {
            self.ctx.emit("`");
        }
        self.ctx.emit(text);
    }

    fn path(&mut self, path: &Path) {
        for (i, segment) in path.segments().iter().enumerate() {
            if i > 0 {
                self.ctx.emit(".");
            }
            self.name(segment.name);
        }
    }

    fn comma_separated<T>(&mut self, items: &[T], mut each: impl FnMut(&mut Self, &T)) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.ctx.emit(", ");
            }
            each(self, item);
        }
    }
}

/// `text` between `delim`s, with the escapes the lexer decodes.
fn quote(text: &str, delim: char) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push(delim);
    for c in text.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\0' => out.push_str("\\0"),
            '\\' => out.push_str("\\\\"),
            c if c == delim => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(delim);
    out
}
