//! Syntax tree.
//!
//! Expressions, patterns and statements live in a flat [`AstArena`] and
//! refer to each other through [`ExprId`], [`PatternId`] and [`StmtId`].
//! Declarations are small and few, so they are owned directly by the
//! [`SourceFile`]. Every node is allocated once by the parser and never
//! changed afterwards; the arena hands out shared references only.
//!
//! - `ids`: typed arena indices
//! - `arena`: node storage
//! - `expr`, `pattern`, `stmt`, `decl`: node definitions
//! - `node`: the named-field view used by tooling and shape comparison

mod arena;
mod decl;
mod expr;
mod ids;
mod node;
mod pattern;
mod stmt;

pub use arena::AstArena;
pub use decl::{
    ArgList, ArgListKind, Attribute, Clause, Constructor, ConstructorKind, ConstructorParam,
    Decl, DeclKind, DocString, Item, Signature, SourceFile, TypeBody, TypeDecl, TypeDeclKind,
    Visibility,
};
pub use expr::{Body, Expr, ExprKind, IfExpr, Literal, MatchArm, OpToken, Param, PiDomain};
pub use ids::{ExprId, PatternId, StmtId};
pub use node::{NodeChild, SyntaxNode, TreeBuilder};
pub use pattern::{Pattern, PatternKind};
pub use stmt::{Block, IfStmt, Stmt, StmtKind};

use crate::{Name, Span, Spanned};

/// One occurrence of a name in the source.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct Ident {
    pub name: Name,
    pub span: Span,
}

impl Ident {
    pub fn new(name: Name, span: Span) -> Self {
        Ident { name, span }
    }
}

impl Spanned for Ident {
    fn span(&self) -> Span {
        self.span
    }
}

/// `a.b.c`: one or more identifier segments joined by `.`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Path {
    segments: Vec<Ident>,
    pub span: Span,
}

impl Path {
    /// A path always starts with one segment.
    pub fn new(first: Ident) -> Self {
        Path {
            span: first.span,
            segments: vec![first],
        }
    }

    pub fn push(&mut self, segment: Ident) {
        self.span = self.span.merge(segment.span);
        self.segments.push(segment);
    }

    pub fn segments(&self) -> &[Ident] {
        &self.segments
    }

    /// The first segment; paths are never empty.
    pub fn first(&self) -> Ident {
        self.segments[0]
    }

    pub fn is_single(&self) -> bool {
        self.segments.len() == 1
    }
}

impl Spanned for Path {
    fn span(&self) -> Span {
        self.span
    }
}
