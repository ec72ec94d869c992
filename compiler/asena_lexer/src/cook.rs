//! Token cooking: raw `(RawTag, len)` pairs to parser-ready tokens.
//!
//! ```text
//! source → RawScanner → (RawTag, len) → Cooker → TokenList + CommentList
//! ```
//!
//! Each raw category has one cooking path:
//! - **Punctuation**: direct 1:1 mapping
//! - **Identifiers**: keyword lookup, then intern
//! - **Symbol runs**: reserved spelling lookup, then intern as an operator
//! - **Numbers**: split prefix, digits and suffix
//! - **Strings/chars**: unescape, then intern
//! - **Separators**: collapse newline/`;` runs into one `LineBreak`
//! - **Comments**: routed to the trivia list
//! - **Errors**: `TokenKind::Error` carrying the reason

use asena_ir::{
    Comment, CommentKind, CommentList, LexErrorKind, NumBase, NumSuffix, NumberLiteral, Span,
    StringInterner, Token, TokenFlags, TokenKind, TokenList,
};

use crate::escape::{unescape_char, unescape_string};
use crate::raw_scanner::{RawScanner, RawTag};

/// A line-break run that has not been emitted yet.
struct PendingBreak {
    span: Span,
    has_semicolon: bool,
    /// Layout flags seen before the first separator of the run.
    flags: TokenFlags,
}

pub(crate) struct Cooker<'src, 'i> {
    source: &'src str,
    scanner: RawScanner<'src>,
    interner: &'i mut StringInterner,
    tokens: TokenList,
    comments: CommentList,
    /// Flags for the next emitted token.
    flags: TokenFlags,
    pending_break: Option<PendingBreak>,
}

impl<'src, 'i> Cooker<'src, 'i> {
    pub(crate) fn new(
        source: &'src str,
        scanner: RawScanner<'src>,
        interner: &'i mut StringInterner,
    ) -> Self {
        Cooker {
            source,
            scanner,
            interner,
            // Roughly one token per four bytes of source.
            tokens: TokenList::with_capacity(source.len() / 4 + 1),
            comments: CommentList::new(),
            flags: TokenFlags::EMPTY,
            pending_break: None,
        }
    }

    /// Drive the scanner to the end of input.
    pub(crate) fn run(mut self) -> (TokenList, CommentList) {
        loop {
            let start = self.scanner.pos();
            let raw = self.scanner.next_token();
            let span = Span::new(start, start + raw.len);
            let text = self.text(span);

            let kind = match raw.tag {
                RawTag::Eof => {
                    self.emit(TokenKind::Eof, span);
                    break;
                }
                RawTag::Whitespace => {
                    self.flags.set(TokenFlags::SPACE_BEFORE);
                    continue;
                }
                RawTag::Newline | RawTag::Semicolon => {
                    self.separator(span, raw.tag == RawTag::Semicolon);
                    continue;
                }
                RawTag::LineComment | RawTag::DocComment => {
                    self.comment(text, span, raw.tag);
                    continue;
                }
                RawTag::Ident => TokenKind::keyword(text)
                    .unwrap_or_else(|| TokenKind::Ident(self.interner.intern(text))),
                RawTag::SymbolIdent => {
                    TokenKind::SymbolIdent(self.interner.intern(text.get(1..).unwrap_or("")))
                }
                RawTag::Symbols => TokenKind::reserved_symbol(text)
                    .unwrap_or_else(|| TokenKind::Operator(self.interner.intern(text))),
                RawTag::Decimal => self.number(text, NumBase::Decimal, false),
                RawTag::Float => self.number(text, NumBase::Decimal, true),
                RawTag::Hex => self.number(text, NumBase::Hex, false),
                RawTag::Octal => self.number(text, NumBase::Octal, false),
                RawTag::Binary => self.number(text, NumBase::Binary, false),
                RawTag::String => {
                    let body = strip_delims(text);
                    TokenKind::String(self.interner.intern(&unescape_string(body)))
                }
                RawTag::Char => match unescape_char(strip_delims(text)) {
                    Some(c) => TokenKind::Char(c),
                    None => TokenKind::Error(LexErrorKind::UnterminatedChar),
                },
                RawTag::UnterminatedString => TokenKind::Error(LexErrorKind::UnterminatedString),
                RawTag::UnterminatedChar => TokenKind::Error(LexErrorKind::UnterminatedChar),
                RawTag::Unknown => TokenKind::Error(LexErrorKind::UnknownToken),
                RawTag::LParen => TokenKind::LParen,
                RawTag::RParen => TokenKind::RParen,
                RawTag::LBracket => TokenKind::LBracket,
                RawTag::RBracket => TokenKind::RBracket,
                RawTag::LBrace => TokenKind::LBrace,
                RawTag::RBrace => TokenKind::RBrace,
                RawTag::Comma => TokenKind::Comma,
                RawTag::Colon => TokenKind::Colon,
                RawTag::At => TokenKind::At,
                RawTag::Hash => TokenKind::Hash,
            };
            self.emit(kind, span);
        }
        (self.tokens, self.comments)
    }

    fn text(&self, span: Span) -> &'src str {
        self.source.get(span.to_range()).unwrap_or("")
    }

    /// Push a significant token, flushing any pending line break first.
    fn emit(&mut self, kind: TokenKind, span: Span) {
        if let Some(brk) = self.pending_break.take() {
            let mut flags = brk.flags;
            if brk.has_semicolon {
                flags.set(TokenFlags::HAS_SEMICOLON);
            }
            self.tokens
                .push(Token::new(TokenKind::LineBreak, brk.span).with_flags(flags));
        }
        let flags = std::mem::take(&mut self.flags);
        self.tokens.push(Token::new(kind, span).with_flags(flags));
    }

    /// Extend (or open) the current separator run.
    fn separator(&mut self, span: Span, is_semicolon: bool) {
        match &mut self.pending_break {
            Some(brk) => {
                brk.span = brk.span.merge(span);
                brk.has_semicolon |= is_semicolon;
            }
            None => {
                self.pending_break = Some(PendingBreak {
                    span,
                    has_semicolon: is_semicolon,
                    flags: std::mem::take(&mut self.flags),
                });
            }
        }
        if !is_semicolon {
            self.flags.set(TokenFlags::NEWLINE_BEFORE);
        }
    }

    fn comment(&mut self, text: &str, span: Span, tag: RawTag) {
        let (marker, kind) = if tag == RawTag::DocComment {
            ("//!", CommentKind::Doc)
        } else {
            ("//", CommentKind::Line)
        };
        let body = text.strip_prefix(marker).unwrap_or(text);
        let content = self.interner.intern(body.trim());
        self.comments.push(Comment::new(content, span, kind));
        self.flags.set(TokenFlags::TRIVIA_BEFORE);
    }

    /// Split a numeric lexeme into base, digits and suffix.
    fn number(&mut self, text: &str, base: NumBase, is_float: bool) -> TokenKind {
        let body = if base == NumBase::Decimal {
            text
        } else {
            text.get(2..).unwrap_or("")
        };
        let digit_len = body
            .bytes()
            .take_while(|&b| base.is_digit(b) || (is_float && b == b'.'))
            .count();
        let (digits, suffix_text) = body.split_at(digit_len);
        let suffix = NumSuffix::LONGEST_FIRST
            .into_iter()
            .find(|s| s.as_str() == suffix_text);
        TokenKind::Number(NumberLiteral {
            base,
            suffix,
            digits: self.interner.intern(digits),
            is_float,
        })
    }
}

/// Drop the first and last byte of a quoted literal.
fn strip_delims(text: &str) -> &str {
    text.get(1..text.len().saturating_sub(1)).unwrap_or("")
}
