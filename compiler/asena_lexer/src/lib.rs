//! Lexer for asena source text.
//!
//! [`lex`] turns a source buffer into a [`TokenList`] terminated by `Eof`,
//! a [`CommentList`] of trivia, and the span of a leading shebang line.
//! Lexing never fails: anything the scanner cannot classify becomes a
//! `TokenKind::Error` token for the parser to report.
//!
//! Whitespace and comments do not appear in the token stream; what they
//! left behind is recorded in each token's [`TokenFlags`](asena_ir::TokenFlags).

mod cook;
mod cursor;
mod escape;
mod raw_scanner;

use asena_ir::{CommentList, Span, StringInterner, TokenList};

use crate::cook::Cooker;
use crate::cursor::Cursor;
use crate::raw_scanner::RawScanner;

pub use escape::{unescape_char, unescape_string};

/// Everything the lexer produces for one buffer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOutput {
    pub tokens: TokenList,
    pub comments: CommentList,
    /// `#!` at byte 0 through the end of that line, newline excluded.
    pub shebang: Option<Span>,
}

/// Lex `source`, interning every spelling into `interner`.
///
/// # Panics
///
/// Panics if `source` is longer than `u32::MAX` bytes.
pub fn lex(source: &str, interner: &mut StringInterner) -> LexOutput {
    let len = u32::try_from(source.len())
        .unwrap_or_else(|_| panic!("source file exceeds {} bytes", u32::MAX));

    let mut cursor = Cursor::new(source);
    let shebang = if source.starts_with("#!") {
        cursor.eat_until_newline_or_eof();
        Some(Span::new(0, cursor.pos().min(len)))
    } else {
        None
    };

    let (tokens, comments) = Cooker::new(source, RawScanner::new(cursor), interner).run();
    LexOutput {
        tokens,
        comments,
        shebang,
    }
}
