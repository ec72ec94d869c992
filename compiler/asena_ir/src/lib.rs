//! Asena IR: the data shared by the lexer, the parser and their consumers.
//!
//! - [`Span`] byte ranges into the source buffer
//! - [`Name`] handles into a per-parse [`StringInterner`]
//! - [`Token`], [`TokenKind`] and [`TokenList`] produced by the lexer
//! - [`Comment`] trivia kept beside the token stream
//! - the syntax tree ([`ast`]): a flat arena of expressions, patterns and
//!   statements owned by a [`ast::SourceFile`], plus a named-field node view
//!
//! Nothing in this crate knows how to lex or parse. Every type is plain data
//! with `Clone`, `Eq`, `Hash` and `Debug` so trees can be compared and cached
//! by downstream tooling.

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod comment;
mod interner;
mod name;
mod span;
mod token;

pub use comment::{Comment, CommentKind, CommentList};
pub use interner::StringInterner;
pub use name::Name;
pub use span::{Span, SpanError};
pub use token::{
    LexErrorKind, NumBase, NumSuffix, NumberLiteral, Token, TokenFlags, TokenKind, TokenList,
    TokenTag,
};

/// Anything that knows where it came from in the source.
pub trait Spanned {
    fn span(&self) -> Span;
}
