//! Pattern nodes.

use std::fmt;

use super::{Literal, Path, PatternId};
use crate::{Span, Spanned};

#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Pattern {
    pub kind: PatternKind,
    pub span: Span,
}

impl Pattern {
    pub fn new(kind: PatternKind, span: Span) -> Self {
        Pattern { kind, span }
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

impl Spanned for Pattern {
    fn span(&self) -> Span {
        self.span
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum PatternKind {
    /// `Some x`, `Nil`, `x`: a path applied to zero or more sub-patterns.
    /// A lone lowercase name is a binding; telling bindings from nullary
    /// constructors is left to name resolution.
    Cons { path: Path, args: Vec<PatternId> },
    /// `..`
    Rest,
    Literal(Literal),
}

impl PatternKind {
    pub const fn kind_name(&self) -> &'static str {
        match self {
            PatternKind::Cons { .. } => "ConsPattern",
            PatternKind::Rest => "RestPattern",
            PatternKind::Literal(_) => "LiteralPattern",
        }
    }
}
