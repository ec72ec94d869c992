//! Statement nodes and blocks.

use std::fmt;

use super::{Body, ExprId, PatternId, StmtId};
use crate::{Span, Spanned};

#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

impl fmt::Debug for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

impl Spanned for Stmt {
    fn span(&self) -> Span {
        self.span
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    /// `let pattern = value`
    Let { pattern: PatternId, value: ExprId },
    /// `if` in statement position; the else branch may be omitted.
    If(IfStmt),
    /// `pattern <- value`
    Ask { pattern: PatternId, value: ExprId },
    Expr(ExprId),
    /// A statement that failed to parse. The span covers the skipped tokens.
    Error,
}

impl StmtKind {
    pub const fn kind_name(&self) -> &'static str {
        match self {
            StmtKind::Let { .. } => "Let",
            StmtKind::If(_) => "IfStmt",
            StmtKind::Ask { .. } => "Ask",
            StmtKind::Expr(_) => "ExprStmt",
            StmtKind::Error => "ErrorStmt",
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct IfStmt {
    pub cond: ExprId,
    pub then_branch: Body,
    pub else_branch: Option<Body>,
}

/// `{ stmt; stmt }`: possibly empty, in source order.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Block {
    pub stmts: Vec<StmtId>,
    pub span: Span,
}

impl Spanned for Block {
    fn span(&self) -> Span {
        self.span
    }
}
