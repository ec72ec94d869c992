//! Declarations and the source file root.

use super::{Block, ExprId, Ident, Param, Path, PatternId, StmtId};
use crate::{Name, Span, Spanned};

/// Root of the tree.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct SourceFile {
    /// `#!...` on the first line, if present.
    pub shebang: Option<Span>,
    pub items: Vec<Item>,
    pub span: Span,
}

/// A top-level entry: a declaration, or a statement in dialects that
/// accept bare statements at the top level.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Item {
    Decl(Decl),
    Stmt(StmtId),
}

/// A `//!` line attached to the declaration that follows it.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct DocString {
    pub content: Name,
    pub span: Span,
}

/// `@path` or `@path(args...)`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Attribute {
    pub path: Path,
    /// `None` when written without parentheses.
    pub args: Option<Vec<ExprId>>,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Decl {
    pub kind: DeclKind,
    pub docs: Vec<DocString>,
    pub attrs: Vec<Attribute>,
    /// From the first doc comment or attribute to the end of the body.
    pub span: Span,
}

impl Spanned for Decl {
    fn span(&self) -> Span {
        self.span
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum DeclKind {
    /// `use a.b`
    Using(Path),
    /// `#name arg...`
    Command { name: Path, args: Vec<ExprId> },
    /// `class`, `trait` or `data`.
    Type(TypeDecl),
    Signature(Signature),
    Clause(Clause),
    /// A declaration that failed to parse. The span covers skipped tokens.
    Error,
}

impl DeclKind {
    pub fn kind_name(&self) -> &'static str {
        match self {
            DeclKind::Using(_) => "Using",
            DeclKind::Command { .. } => "Command",
            DeclKind::Type(ty) => ty.kind.kind_name(),
            DeclKind::Signature(_) => "Signature",
            DeclKind::Clause(_) => "Clause",
            DeclKind::Error => "ErrorDecl",
        }
    }
}

#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum Visibility {
    Public,
    Sealed,
    Private,
    Internal,
}

impl Visibility {
    pub const fn as_str(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Sealed => "sealed",
            Visibility::Private => "private",
            Visibility::Internal => "internal",
        }
    }
}

#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum TypeDeclKind {
    Class,
    Trait,
    Data,
}

impl TypeDeclKind {
    pub const fn keyword(self) -> &'static str {
        match self {
            TypeDeclKind::Class => "class",
            TypeDeclKind::Trait => "trait",
            TypeDeclKind::Data => "data",
        }
    }

    pub const fn kind_name(self) -> &'static str {
        match self {
            TypeDeclKind::Class => "ClassDecl",
            TypeDeclKind::Trait => "TraitDecl",
            TypeDeclKind::Data => "DataDecl",
        }
    }
}

/// `[vis] class|trait|data Name arglist* [: type] [body]`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeDecl {
    pub kind: TypeDeclKind,
    /// Visibility keyword and where it was written.
    pub visibility: Option<(Visibility, Span)>,
    pub name: Path,
    pub arg_lists: Vec<ArgList>,
    pub clause_type: Option<ExprId>,
    pub body: Option<TypeBody>,
}

#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum ArgListKind {
    /// `( ... )`
    Explicit,
    /// `[ ... ]`
    Implicit,
}

/// One parenthesized or bracketed parameter list after a declared name.
///
/// `params` may be empty only for an explicit `()`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ArgList {
    pub kind: ArgListKind,
    pub params: Vec<Param>,
    pub span: Span,
}

/// Braced body of a type declaration.
///
/// Trait bodies only ever have methods.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeBody {
    pub constructors: Vec<Constructor>,
    pub methods: Vec<Signature>,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Constructor {
    pub name: Path,
    pub kind: ConstructorKind,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ConstructorKind {
    /// `Some : T`
    Typed(ExprId),
    /// `None` or `Cons(head: T, List T)`. `None` means no parentheses.
    Function(Option<Vec<ConstructorParam>>),
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ConstructorParam {
    /// A bare type.
    Positional(ExprId),
    /// `name : type`
    Named { name: Ident, ty: ExprId },
}

/// `name arglist* [: type] [block]`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Signature {
    pub name: Path,
    pub arg_lists: Vec<ArgList>,
    pub clause_type: Option<ExprId>,
    pub value: Option<Block>,
    pub span: Span,
}

/// `name pattern* = value`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Clause {
    pub name: Path,
    pub patterns: Vec<PatternId>,
    pub value: Option<ExprId>,
    pub span: Span,
}
