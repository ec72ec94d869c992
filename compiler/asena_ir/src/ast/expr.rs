//! Expression nodes.

use std::fmt;

use super::{Block, ExprId, Path, PatternId};
use crate::{Name, NumberLiteral, Span, Spanned};

/// Expression node.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

impl Spanned for Expr {
    fn span(&self) -> Span {
        self.span
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    Literal(Literal),
    /// A single-segment name reference.
    Ident(Name),
    /// A reference with two or more `.`-separated segments.
    Path(Path),
    /// `(a, b)`. `(a)` is a one-element tuple without a trailing comma and
    /// acts as grouping.
    Tuple {
        elements: Vec<ExprId>,
        trailing_comma: bool,
    },
    /// `[a, b]`
    Array(Vec<ExprId>),
    /// `if c then a else b`: the expression form, else branch mandatory.
    If(Box<IfExpr>),
    /// `match e { p => b ... }`
    Match {
        scrutinee: ExprId,
        arms: Vec<MatchArm>,
    },
    /// `return` with an optional value.
    Return(Option<ExprId>),
    /// `f x y` with an optional trailing block argument: `f x { ... }`.
    App {
        callee: ExprId,
        args: Vec<ExprId>,
        block: Option<Block>,
    },
    /// `F x y` in type position; never takes a trailing block.
    TypeApp { callee: ExprId, args: Vec<ExprId> },
    /// `|x, y| body`
    Lambda { params: Vec<Param>, body: ExprId },
    /// `A -> B` or `(x: A) -> B`
    Pi { domain: PiDomain, codomain: ExprId },
    /// `[x: A] -> B`
    Sigma { params: Vec<Param>, codomain: ExprId },
    /// `value : type`
    Ann { value: ExprId, ty: ExprId },
    /// `lhs op rhs`, operator spelled freely.
    Binary {
        lhs: ExprId,
        op: OpToken,
        rhs: ExprId,
    },
}

impl ExprKind {
    /// Node kind name as exposed by the node view.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            ExprKind::Literal(_) => "Literal",
            ExprKind::Ident(_) => "Identifier",
            ExprKind::Path(_) => "Path",
            ExprKind::Tuple { .. } => "Tuple",
            ExprKind::Array(_) => "Array",
            ExprKind::If(_) => "IfExpr",
            ExprKind::Match { .. } => "Match",
            ExprKind::Return(_) => "Return",
            ExprKind::App { .. } => "App",
            ExprKind::TypeApp { .. } => "TypeApp",
            ExprKind::Lambda { .. } => "Lambda",
            ExprKind::Pi { .. } => "Pi",
            ExprKind::Sigma { .. } => "Sigma",
            ExprKind::Ann { .. } => "Ann",
            ExprKind::Binary { .. } => "Binary",
        }
    }
}

/// String, character or numeric literal.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum Literal {
    /// Decoded contents.
    String(Name),
    Char(char),
    Number(NumberLiteral),
}

/// The spelled operator of a [`ExprKind::Binary`].
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct OpToken {
    pub spelling: Name,
    pub span: Span,
}

/// A then/else/arm body: a braced block or a single expression.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Body {
    Block(Block),
    Expr(ExprId),
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct IfExpr {
    pub cond: ExprId,
    pub then_branch: Body,
    pub else_branch: Body,
}

/// `pattern => body`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct MatchArm {
    pub pattern: PatternId,
    pub body: Body,
    pub span: Span,
}

/// `pattern [: type]` inside an argument list, a lambda or a Pi/Sigma
/// parameter set.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct Param {
    pub pattern: PatternId,
    pub ty: Option<ExprId>,
    pub span: Span,
}

/// Left-hand side of a [`ExprKind::Pi`].
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum PiDomain {
    /// `A -> B`: an unnamed domain expression.
    Bare(ExprId),
    /// `(x: A, y: B) -> C`
    Params(Vec<Param>),
}
