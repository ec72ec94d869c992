//! Token types produced by the lexer.
//!
//! A [`Token`] is a cooked lexeme: its spelling is already interned, its
//! literal payload decoded and its numeric suffix split off. Comments and
//! whitespace never become tokens; see [`crate::CommentList`] and
//! [`TokenFlags`].

mod flags;
mod kind;
mod list;
mod literal;

pub use flags::TokenFlags;
pub use kind::{LexErrorKind, TokenKind, TokenTag};
pub use list::TokenList;
pub use literal::{NumBase, NumSuffix, NumberLiteral};

use crate::{Span, Spanned};

/// A classified lexeme with its source span.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub flags: TokenFlags,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token {
            kind,
            span,
            flags: TokenFlags::EMPTY,
        }
    }

    #[must_use]
    pub fn with_flags(mut self, flags: TokenFlags) -> Self {
        self.flags = flags;
        self
    }
}

impl Spanned for Token {
    fn span(&self) -> Span {
        self.span
    }
}

#[cfg(test)]
mod tests;
